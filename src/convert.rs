//! Conversion between language tag strings, typed subtags, and legacy
//! ICU locale identifiers.
//!
//! Custom (unregistered) language, script and region codes survive the trip
//! through the standard grammar via reserved sentinel codes: `qaa`, `Qaaa`
//! and `QM` occupy the standard positions while the real codes ride in the
//! tag's trailing private-use block, in language-script-region order.
//! Legacy ICU locales additionally carry over-long or digit-bearing language
//! codes, which are truncated and deterministically remapped to letters.

use crate::error::TagError;
use crate::matcher;
use crate::registry::{
    is_private_use_region_code, is_private_use_script_code, SubtagRegistry,
};
use crate::subtag::{
    well_known, LanguageSubtag, RegionSubtag, ScriptSubtag, Subtag, VariantSubtag,
};

/// Typed subtags recovered from a language tag by [`try_get_subtags`].
#[derive(Debug, Clone)]
pub struct ParsedSubtags {
    /// The language, `None` for a whole-tag private-use form.
    pub language: Option<LanguageSubtag>,
    /// The script, when present.
    pub script: Option<ScriptSubtag>,
    /// The region, when present.
    pub region: Option<RegionSubtag>,
    /// Registered variants in tag order, followed by private-use variants.
    pub variants: Vec<VariantSubtag>,
}

/// Plain code strings recovered from a language tag by [`get_codes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCodes {
    /// The language code, `None` for a whole-tag private-use form.
    pub language: Option<String>,
    /// The script code, when present.
    pub script: Option<String>,
    /// The region code, when present.
    pub region: Option<String>,
    /// The combined `variant[-x-privateuse]` codes, `None` when empty.
    pub variant: Option<String>,
}

/// Parses `lang_tag` into typed subtags, or `None` when it is not a valid
/// tag. This is an expected outcome for arbitrary input, so no error is
/// raised.
///
/// The sentinel codes are resolved here: a `qaa` language whose first
/// private-use token is itself a well-formed language code consumes that
/// token as the true custom language; `Qaaa` and `QM` consume the next
/// private-use token as the custom script and region. Registered variant
/// tokens must resolve in the registry or the whole parse fails; leftover
/// private-use tokens become private-use variant subtags.
pub fn try_get_subtags(lang_tag: &str) -> Option<ParsedSubtags> {
    let matched = matcher::match_language_tag(lang_tag)?;
    let registry = SubtagRegistry::standard();
    let mut private_codes: Vec<&str> = matched.private_use.to_vec();

    let mut language = None;
    if let Some(code) = matched.language {
        if code.eq_ignore_ascii_case(well_known::UNLISTED_LANGUAGE) {
            // A custom language is not allowed in the primary position, so
            // it travels as qaa plus the first private-use token. Only a
            // token that is itself a well-formed language code is consumed;
            // otherwise qaa stands as the literal language.
            if !private_codes.is_empty() && matcher::is_language_code(private_codes[0]) {
                language = Some(LanguageSubtag::private_use(private_codes.remove(0)));
            } else {
                language = registry.language(well_known::UNLISTED_LANGUAGE);
            }
        } else {
            language = Some(registry.language(code)?);
        }
    }

    let mut script = None;
    if let Some(code) = matched.script {
        if code.eq_ignore_ascii_case(well_known::UNWRITTEN_SCRIPT_PLACEHOLDER)
            && !private_codes.is_empty()
        {
            script = Some(ScriptSubtag::private_use(private_codes.remove(0)));
        } else {
            script = Some(registry.script(code)?);
        }
    }

    let mut region = None;
    if let Some(code) = matched.region {
        if code.eq_ignore_ascii_case(well_known::CUSTOM_REGION_PLACEHOLDER)
            && !private_codes.is_empty()
        {
            region = Some(RegionSubtag::private_use(private_codes.remove(0)));
        } else {
            region = Some(registry.region(code)?);
        }
    }

    let mut variants = Vec::new();
    for code in &matched.variants {
        variants.push(registry.variant(code)?);
    }
    for code in private_codes {
        let subtag = registry
            .common_private_use_variant(code)
            .unwrap_or_else(|| VariantSubtag::private_use(code));
        variants.push(subtag);
    }

    Some(ParsedSubtags {
        language,
        script,
        region,
        variants,
    })
}

/// Whether `lang_tag` is a valid language tag.
pub fn is_valid(lang_tag: &str) -> bool {
    try_get_subtags(lang_tag).is_some()
}

/// Parses `lang_tag` into its plain code strings, or `None` when it is not
/// a valid tag. The variant field combines registered and private-use
/// variant codes in the `variant[-x-privateuse]` form.
pub fn get_codes(lang_tag: &str) -> Option<TagCodes> {
    let parsed = try_get_subtags(lang_tag)?;
    Some(TagCodes {
        language: parsed.language.map(|s| s.code().to_string()),
        script: parsed.script.map(|s| s.code().to_string()),
        region: parsed.region.map(|s| s.code().to_string()),
        variant: get_variant_codes(&parsed.variants),
    })
}

/// Generates a language tag from the given subtags.
///
/// Standard subtags are written in their canonical positions. A private-use
/// language, script or region is written as its sentinel instead, with the
/// true code appended inside a single trailing private-use block in
/// language-script-region order, followed by any private-use variants.
///
/// A language of `zh` carrying its macrolanguage mapping to `cmn` defaults
/// the region to `CN` when none is given.
pub fn to_language_tag(
    language: Option<&LanguageSubtag>,
    script: Option<&ScriptSubtag>,
    region: Option<&RegionSubtag>,
    variants: &[VariantSubtag],
) -> Result<String, TagError> {
    if language.is_none()
        && (script.is_some()
            || region.is_some()
            || variants.iter().any(|v| !v.is_private_use()))
    {
        return Err(TagError::usage(
            "a language subtag is required alongside script, region or registered variants",
        ));
    }
    if language.is_none() && variants.is_empty() {
        return Err(TagError::usage("a language subtag is required"));
    }

    let mut out = String::new();

    let mut custom_language = false;
    if let Some(language) = language {
        if language.is_private_use()
            && !language
                .code()
                .eq_ignore_ascii_case(well_known::UNLISTED_LANGUAGE)
        {
            if !matcher::is_language_code(language.code()) {
                return Err(TagError::usage("the private use language code is invalid"));
            }
            out.push_str(well_known::UNLISTED_LANGUAGE);
            custom_language = true;
        } else {
            out.push_str(language.code());
        }
    }

    let mut custom_script = false;
    if let Some(script) = script {
        out.push('-');
        // Qaaa itself must stay in place, or some other private-use tag
        // would be mistaken for a custom script on the way back in.
        if script.is_private_use() && !is_private_use_script_code(script.code()) {
            if !matcher::is_script_code(script.code()) {
                return Err(TagError::usage("the private use script code is invalid"));
            }
            out.push_str(well_known::UNWRITTEN_SCRIPT_PLACEHOLDER);
            custom_script = true;
        } else {
            out.push_str(script.code());
        }
    }

    let mut custom_region = false;
    if let Some(region) = region {
        out.push('-');
        if region.is_private_use() && !is_private_use_region_code(region.code()) {
            if !matcher::is_region_code(region.code()) {
                return Err(TagError::usage("the private use region code is invalid"));
            }
            out.push_str(well_known::CUSTOM_REGION_PLACEHOLDER);
            custom_region = true;
        } else {
            out.push_str(region.code());
        }
    }

    let mut seen = Vec::new();
    for variant in variants.iter().filter(|v| !v.is_private_use()) {
        let key = variant.code().to_ascii_lowercase();
        if seen.contains(&key) {
            return Err(TagError::usage("duplicate variants are not allowed"));
        }
        out.push('-');
        out.push_str(variant.code());
        seen.push(key);
    }

    let mut in_private_use = false;
    if custom_language {
        in_private_use = true;
        out.push_str("-x-");
        out.push_str(language.expect("custom language").code());
    }

    if custom_script {
        out.push('-');
        if !in_private_use {
            in_private_use = true;
            out.push_str("x-");
        }
        out.push_str(script.expect("custom script").code());
    }

    if custom_region {
        out.push('-');
        if !in_private_use {
            in_private_use = true;
            out.push_str("x-");
        }
        out.push_str(region.expect("custom region").code());
    } else if let Some(language) = language {
        if language.code().eq_ignore_ascii_case("zh")
            && language.iso3_code() == Some("cmn")
            && region.is_none()
        {
            out.push_str("-CN");
        }
    }

    for variant in variants.iter().filter(|v| v.is_private_use()) {
        if !matcher::is_private_use_token(variant.code()) {
            return Err(TagError::usage(
                "the variant subtags contain an invalid private use subtag",
            ));
        }
        if !out.is_empty() {
            out.push('-');
        }
        if !in_private_use {
            in_private_use = true;
            out.push_str("x-");
        }
        out.push_str(variant.code());
    }

    Ok(out)
}

/// Converts a legacy ICU locale identifier to a language tag.
///
/// A dash-delimited locale that already matches the tag grammar is returned
/// as-is when its language portion is lower-cased, and fully lower-cased
/// otherwise (mixed case in the language portion has been observed in
/// legacy user data). Everything else is decomposed as an underscore
/// delimited ICU locale and rebuilt through [`to_language_tag`].
pub fn icu_locale_to_language_tag(icu_locale: &str) -> Result<String, TagError> {
    if icu_locale.is_empty() {
        return Err(TagError::usage("the icu locale must not be empty"));
    }

    let mut locale = icu_locale.to_string();
    if icu_locale.contains('-') && matcher::match_icu_tag(icu_locale).is_some() {
        let language_portion = icu_locale.split('-').next().unwrap_or("");
        if language_portion
            .chars()
            .all(|c| !c.is_ascii_uppercase())
        {
            return Ok(locale);
        }
        locale = icu_locale.to_ascii_lowercase();
    }

    let parts = IcuLocaleParts::decompose(&locale);
    let icu_language_code = parts.language.clone();
    let mut language_code = icu_language_code.clone();
    if language_code.len() == 4 && language_code.starts_with('x') {
        language_code.remove(0);
    }
    // Very old data can carry over-long identifiers; in desperation they are
    // truncated. Four-letter codes starting with 'e' are a special case.
    if language_code.len() > 3 && !(language_code.len() == 4 && language_code.starts_with('e')) {
        language_code.truncate(3);
    }
    // Legacy locales allowed digits in the language code, which the grammar
    // does not. Digits map to letters deterministically even though the
    // result may have no relation to reality.
    if language_code.chars().any(|c| c.is_ascii_digit()) {
        language_code = language_code
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    (b'a' + (c as u8 - b'0')) as char
                } else {
                    c
                }
            })
            .collect();
    }

    let language = if language_code.is_empty() {
        None
    } else if language_code == icu_language_code {
        let code = if language_code.len() == 4 && language_code.starts_with('e') {
            &language_code[1..]
        } else {
            &language_code[..]
        };
        Some(LanguageSubtag::from_code(code))
    } else {
        Some(LanguageSubtag::private_use(language_code))
    };

    let script = (!parts.script.is_empty()).then(|| ScriptSubtag::from_code(&parts.script));
    let region = (!parts.country.is_empty()).then(|| RegionSubtag::from_code(&parts.country));
    let mut variants = Vec::new();
    translate_variant_code(&parts.variant, &mut variants);

    to_language_tag(language.as_ref(), script.as_ref(), region.as_ref(), &variants)
}

/// Generates an ICU locale from the given subtags: `[x]language[_Script]
/// [_Region]`, followed by at most one translated ICU variant code joined
/// with a single or double underscore depending on whether a region was
/// present.
pub fn to_icu_locale(
    language: &LanguageSubtag,
    script: Option<&ScriptSubtag>,
    region: Option<&RegionSubtag>,
    variants: &[VariantSubtag],
) -> String {
    let mut out = String::new();
    if language.is_private_use() {
        out.push('x');
    }
    out.push_str(language.code());
    if let Some(script) = script {
        out.push('_');
        out.push_str(script.code());
    }
    if let Some(region) = region {
        out.push('_');
        out.push_str(region.code());
    }

    let has = |code: &str| {
        variants
            .iter()
            .any(|v| v.code().eq_ignore_ascii_case(code))
    };
    let icu_variant = if has(well_known::IPA_VARIANT) {
        if has(well_known::IPA_PHONETIC_PRIVATE_USE) {
            "X_ETIC"
        } else if has(well_known::IPA_PHONEMIC_PRIVATE_USE) {
            "X_EMIC"
        } else {
            "IPA"
        }
    } else if has(well_known::PINYIN_VARIANT) {
        "X_PY"
    } else {
        ""
    };
    if !icu_variant.is_empty() {
        out.push_str(if region.is_none() { "__" } else { "_" });
        out.push_str(icu_variant);
    }
    out
}

/// Converts `lang_tag` to an ICU locale. Fails when the tag is invalid or
/// carries no language subtag.
pub fn language_tag_to_icu_locale(lang_tag: &str) -> Result<String, TagError> {
    let parsed = try_get_subtags(lang_tag)
        .ok_or_else(|| TagError::usage("not a valid RFC 5646 language tag"))?;
    let language = parsed
        .language
        .ok_or_else(|| TagError::usage("the tag carries no language subtag"))?;
    Ok(to_icu_locale(
        &language,
        parsed.script.as_ref(),
        parsed.region.as_ref(),
        &parsed.variants,
    ))
}

/// Parses a combined `variant[-x-privateuse]` codes string into typed
/// variant subtags, or `None` when a registered token does not resolve.
pub fn try_get_variant_subtags(variant_codes: &str) -> Option<Vec<VariantSubtag>> {
    if variant_codes.is_empty() {
        return Some(Vec::new());
    }
    let registry = SubtagRegistry::standard();
    let (standard, private) = split_variant_and_private_use(variant_codes);
    let mut subtags = Vec::new();
    for code in standard.split('-').filter(|c| !c.is_empty()) {
        subtags.push(registry.variant(code)?);
    }
    for code in private.split('-').filter(|c| !c.is_empty()) {
        let subtag = registry
            .common_private_use_variant(code)
            .unwrap_or_else(|| VariantSubtag::private_use(code));
        subtags.push(subtag);
    }
    Some(subtags)
}

/// Serializes variant subtags into the combined `variant[-x-privateuse]`
/// form, registered codes first. Returns `None` when the list is empty.
pub fn get_variant_codes(variants: &[VariantSubtag]) -> Option<String> {
    if variants.is_empty() {
        return None;
    }
    let mut out = String::new();
    for variant in variants.iter().filter(|v| !v.is_private_use()) {
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(variant.code());
    }
    let mut first_private = true;
    for variant in variants.iter().filter(|v| v.is_private_use()) {
        if !out.is_empty() {
            out.push('-');
        }
        if first_private {
            out.push_str("x-");
            first_private = false;
        }
        out.push_str(variant.code());
    }
    Some(out)
}

/// Splits a combined variant-and-private-use string at its `x` marker.
///
/// Consumers store registered variants and private-use tokens in one field;
/// this recovers the two sections. The complement is
/// [`concatenate_variant_and_private_use`].
pub fn split_variant_and_private_use(combined: &str) -> (String, String) {
    let lower = combined.to_ascii_lowercase();
    if lower.starts_with("x-") {
        (String::new(), combined[2..].to_string())
    } else if let Some(position) = lower.find("-x-") {
        let variant = &combined[..position];
        let rest = &combined[position + 3..];
        // legacy behavior keeps only the section up to the next marker
        let private = match rest.to_ascii_lowercase().find("-x-") {
            Some(next) => &rest[..next],
            None => rest,
        };
        (variant.to_string(), private.to_string())
    } else {
        (combined.to_string(), String::new())
    }
}

/// Joins a registered-variants string and a private-use string back into the
/// combined form, inserting the `x-` marker when needed.
pub fn concatenate_variant_and_private_use(variant: &str, private_use: &str) -> String {
    if private_use.is_empty() {
        return variant.to_string();
    }
    let prefixed = if private_use.len() >= 2 && private_use[..2].eq_ignore_ascii_case("x-") {
        private_use.to_string()
    } else {
        format!("x-{private_use}")
    };
    if variant.is_empty() {
        prefixed
    } else {
        format!("{variant}-{prefixed}")
    }
}

/// Translates an ICU variant code to variant subtags via the fixed table;
/// underscore-separated compounds translate segment by segment, and anything
/// unrecognized passes through lower-cased as a private-use variant code.
fn translate_variant_code(variant_code: &str, out: &mut Vec<VariantSubtag>) {
    if variant_code.is_empty() {
        return;
    }
    match variant_code {
        "IPA" => out.push(VariantSubtag::from_code(well_known::IPA_VARIANT)),
        "X_ETIC" => {
            out.push(VariantSubtag::from_code(well_known::IPA_VARIANT));
            out.push(VariantSubtag::from_code(well_known::IPA_PHONETIC_PRIVATE_USE));
        }
        "X_EMIC" | "EMC" => {
            out.push(VariantSubtag::from_code(well_known::IPA_VARIANT));
            out.push(VariantSubtag::from_code(well_known::IPA_PHONEMIC_PRIVATE_USE));
        }
        "X_PY" | "PY" => out.push(VariantSubtag::from_code(well_known::PINYIN_VARIANT)),
        _ => {
            let segments: Vec<&str> = variant_code
                .split('_')
                .filter(|segment| !segment.is_empty())
                .collect();
            if segments.len() > 1 {
                for segment in segments {
                    translate_variant_code(segment, out);
                }
            } else {
                out.push(VariantSubtag::from_code(
                    &variant_code.to_ascii_lowercase(),
                ));
            }
        }
    }
}

/// The language, script, country and variant portions of an ICU locale.
///
/// Mirrors how ICU canonicalizes a locale identifier: the language is
/// lower-cased, a four-letter second segment becomes the title-cased script,
/// a two-letter or three-digit segment becomes the upper-cased country, and
/// everything remaining is the upper-cased, underscore-joined variant. Both
/// `_` and `-` are accepted as separators.
#[derive(Debug, Default)]
struct IcuLocaleParts {
    language: String,
    script: String,
    country: String,
    variant: String,
}

impl IcuLocaleParts {
    fn decompose(locale: &str) -> Self {
        let segments: Vec<&str> = locale.split(['_', '-']).collect();
        let mut parts = IcuLocaleParts {
            language: segments[0].to_ascii_lowercase(),
            ..IcuLocaleParts::default()
        };
        let mut index = 1;
        if index < segments.len() && !segments[index].is_empty() {
            let segment = segments[index];
            if segment.len() == 4 && segment.chars().all(|c| c.is_ascii_alphabetic()) {
                parts.script = title_case(segment);
                index += 1;
            }
        }
        if index < segments.len() && !segments[index].is_empty() {
            let segment = segments[index];
            let is_country = match segment.len() {
                2 => segment.chars().all(|c| c.is_ascii_alphabetic()),
                3 => segment.chars().all(|c| c.is_ascii_digit()),
                _ => false,
            };
            if is_country {
                parts.country = segment.to_ascii_uppercase();
                index += 1;
            }
        }
        // an empty segment (double separator) just skips the slot it holds
        while index < segments.len() && segments[index].is_empty() {
            index += 1;
        }
        if index < segments.len() {
            let remainder: Vec<&str> = segments[index..]
                .iter()
                .copied()
                .filter(|segment| !segment.is_empty())
                .collect();
            parts.variant = remainder.join("_").to_ascii_uppercase();
        }
        parts
    }
}

fn title_case(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    for (index, c) in code.chars().enumerate() {
        if index == 0 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_subtags() {
        let parsed = try_get_subtags("en-Latn-US-fonipa-x-etic").unwrap();
        let language = parsed.language.unwrap();
        assert_eq!("en", language.code());
        assert_eq!(Some("English"), language.name());
        assert!(!language.is_private_use());
        assert_eq!("Latn", parsed.script.unwrap().code());
        assert_eq!("US", parsed.region.unwrap().code());
        let codes: Vec<_> = parsed.variants.iter().map(|v| v.code()).collect();
        assert_eq!(vec!["fonipa", "etic"], codes);
        assert!(!parsed.variants[0].is_private_use());
        assert!(parsed.variants[1].is_private_use());
        assert_eq!(Some("Phonetic"), parsed.variants[1].name());
    }

    #[test]
    fn parses_whole_tag_private_use_form() {
        let parsed = try_get_subtags("x-audio-test").unwrap();
        assert!(parsed.language.is_none());
        assert!(parsed.script.is_none());
        assert!(parsed.region.is_none());
        let codes: Vec<_> = parsed.variants.iter().map(|v| v.code()).collect();
        assert_eq!(vec!["audio", "test"], codes);
        assert!(parsed.variants.iter().all(|v| v.is_private_use()));
    }

    #[test]
    fn qaa_consumes_a_language_shaped_private_use_token() {
        let parsed = try_get_subtags("qaa-x-kal").unwrap();
        let language = parsed.language.unwrap();
        assert!(language.is_private_use());
        assert_eq!("kal", language.code());
        assert!(parsed.variants.is_empty());
    }

    #[test]
    fn qaa_stands_literal_when_the_token_is_not_language_shaped() {
        let parsed = try_get_subtags("qaa-x-9abc").unwrap();
        let language = parsed.language.unwrap();
        assert_eq!("qaa", language.code());
        assert!(language.is_private_use());
        let codes: Vec<_> = parsed.variants.iter().map(|v| v.code()).collect();
        assert_eq!(vec!["9abc"], codes);

        let parsed = try_get_subtags("qaa").unwrap();
        assert_eq!("qaa", parsed.language.unwrap().code());
    }

    #[test]
    fn sentinel_script_and_region_consume_private_use_tokens() {
        let parsed = try_get_subtags("qaa-Qaaa-QM-x-kal-Abcd-ZB").unwrap();
        assert_eq!("kal", parsed.language.unwrap().code());
        let script = parsed.script.unwrap();
        assert_eq!("Abcd", script.code());
        assert!(script.is_private_use());
        let region = parsed.region.unwrap();
        assert_eq!("ZB", region.code());
        assert!(region.is_private_use());
        assert!(parsed.variants.is_empty());
    }

    #[test]
    fn sentinels_stand_literal_without_private_use_tokens() {
        let parsed = try_get_subtags("qaa-Qaaa-QM").unwrap();
        assert_eq!("qaa", parsed.language.unwrap().code());
        assert_eq!("Qaaa", parsed.script.unwrap().code());
        assert_eq!("QM", parsed.region.unwrap().code());
    }

    #[test]
    fn unresolved_codes_fail_the_parse() {
        assert!(try_get_subtags("bogus-US").is_none());
        assert!(try_get_subtags("en-bogus").is_none());
        assert!(try_get_subtags("en-Latn-ZQ").is_none());
        assert!(try_get_subtags("").is_none());
    }

    #[test]
    fn a_single_extension_is_tolerated_and_dropped() {
        let parsed = try_get_subtags("en-a-bbb").unwrap();
        assert_eq!("en", parsed.language.unwrap().code());
        assert!(parsed.variants.is_empty());
        assert!(is_valid("en-a-bbb"));
    }

    #[test]
    fn writes_standard_subtags_in_canonical_positions() {
        let registry = SubtagRegistry::standard();
        let en = registry.language("en").unwrap();
        let latn = registry.script("Latn").unwrap();
        let us = registry.region("US").unwrap();
        let fonipa = registry.variant("fonipa").unwrap();
        let tag =
            to_language_tag(Some(&en), Some(&latn), Some(&us), &[fonipa]).unwrap();
        assert_eq!("en-Latn-US-fonipa", tag);
    }

    #[test]
    fn custom_codes_travel_in_the_private_use_block() {
        let language = LanguageSubtag::private_use("kal");
        let script = ScriptSubtag::private_use("Abcd");
        let region = RegionSubtag::private_use("ZB");
        let tag = to_language_tag(
            Some(&language),
            Some(&script),
            Some(&region),
            &[],
        )
        .unwrap();
        assert_eq!("qaa-Qaaa-QM-x-kal-Abcd-ZB", tag);
    }

    #[test]
    fn private_use_range_codes_stay_in_place() {
        let registry = SubtagRegistry::standard();
        let qaa = registry.language("qaa").unwrap();
        let qaaa = registry.script("Qaaa").unwrap();
        let qm = registry.region("QM").unwrap();
        let tag = to_language_tag(Some(&qaa), Some(&qaaa), Some(&qm), &[]).unwrap();
        assert_eq!("qaa-Qaaa-QM", tag);
    }

    #[test]
    fn language_is_required_unless_only_private_variants_remain() {
        let registry = SubtagRegistry::standard();
        let us = registry.region("US").unwrap();
        assert!(matches!(
            to_language_tag(None, None, Some(&us), &[]),
            Err(TagError::Usage(_))
        ));
        assert!(matches!(
            to_language_tag(None, None, None, &[]),
            Err(TagError::Usage(_))
        ));
        let audio = VariantSubtag::private_use("audio");
        let etic = VariantSubtag::private_use("etic");
        let tag = to_language_tag(None, None, None, &[audio, etic]).unwrap();
        assert_eq!("x-audio-etic", tag);
    }

    #[test]
    fn duplicate_registered_variants_fail() {
        let registry = SubtagRegistry::standard();
        let en = registry.language("en").unwrap();
        let fonipa = registry.variant("fonipa").unwrap();
        let fonipa2 = registry.variant("FONIPA").unwrap();
        assert!(matches!(
            to_language_tag(Some(&en), None, None, &[fonipa, fonipa2]),
            Err(TagError::Usage(_))
        ));
    }

    #[test]
    fn zh_defaults_its_region_to_cn() {
        let registry = SubtagRegistry::standard();
        let zh = registry.language("zh").unwrap();
        assert_eq!("zh-CN", to_language_tag(Some(&zh), None, None, &[]).unwrap());
        let tw = registry.region("TW").unwrap();
        assert_eq!(
            "zh-TW",
            to_language_tag(Some(&zh), None, Some(&tw), &[]).unwrap()
        );
        let cmn = registry.language("cmn").unwrap();
        assert_eq!("cmn", to_language_tag(Some(&cmn), None, None, &[]).unwrap());
    }

    #[test]
    fn icu_locale_conversion_handles_plain_locales() {
        assert_eq!("en", icu_locale_to_language_tag("en").unwrap());
        assert_eq!("en-Latn-US", icu_locale_to_language_tag("en_Latn_US").unwrap());
        assert_eq!("zh-CN", icu_locale_to_language_tag("zh_CN").unwrap());
    }

    #[test]
    fn icu_locale_conversion_strips_the_legacy_x_prefix() {
        assert_eq!("qaa-x-kal", icu_locale_to_language_tag("xkal").unwrap());
        assert_eq!("qaa-US-x-kal", icu_locale_to_language_tag("xkal_US").unwrap());
    }

    #[test]
    fn icu_locale_conversion_remaps_digits_and_truncates() {
        // x906 -> 906 -> jag via the digit-to-letter table
        assert_eq!("qaa-x-jag", icu_locale_to_language_tag("x906").unwrap());
        // e0115 -> e01 (truncated) -> eab
        assert_eq!("qaa-x-eab", icu_locale_to_language_tag("e0115").unwrap());
        // four-letter codes starting with 'e' keep their length, dropping
        // the marker only at lookup time
        assert_eq!("qaa-x-tic", icu_locale_to_language_tag("etic").unwrap());
    }

    #[test]
    fn icu_locale_conversion_translates_variants() {
        assert_eq!("en-fonipa", icu_locale_to_language_tag("en__IPA").unwrap());
        assert_eq!(
            "en-US-fonipa-x-etic",
            icu_locale_to_language_tag("en_US_X_ETIC").unwrap()
        );
        assert_eq!(
            "en-fonipa-x-emic",
            icu_locale_to_language_tag("en__X_EMIC").unwrap()
        );
        assert_eq!("zh-CN-pinyin", icu_locale_to_language_tag("zh_CN_X_PY").unwrap());
        assert_eq!(
            "en-US-x-special",
            icu_locale_to_language_tag("en_US_SPECIAL").unwrap()
        );
    }

    #[test]
    fn dashed_locales_already_matching_the_grammar_pass_through() {
        assert_eq!(
            "en-Latn-US",
            icu_locale_to_language_tag("en-Latn-US").unwrap()
        );
        // mixed case in the language portion is normalized
        assert_eq!(
            "en-Latn-US",
            icu_locale_to_language_tag("EN-Latn-US").unwrap()
        );
    }

    #[test]
    fn icu_locale_output_positions_and_separators() {
        let parsed = try_get_subtags("en-Latn-US").unwrap();
        assert_eq!(
            "en_Latn_US",
            to_icu_locale(
                parsed.language.as_ref().unwrap(),
                parsed.script.as_ref(),
                parsed.region.as_ref(),
                &parsed.variants
            )
        );
        assert_eq!("xkal", language_tag_to_icu_locale("qaa-x-kal").unwrap());
        assert_eq!("en__IPA", language_tag_to_icu_locale("en-fonipa").unwrap());
        assert_eq!(
            "en_US_X_ETIC",
            language_tag_to_icu_locale("en-US-fonipa-x-etic").unwrap()
        );
        assert_eq!(
            "en__X_EMIC",
            language_tag_to_icu_locale("en-fonipa-x-emic").unwrap()
        );
        assert_eq!("zh_CN_X_PY", language_tag_to_icu_locale("zh-CN-pinyin").unwrap());
    }

    #[test]
    fn icu_locale_conversion_requires_a_language() {
        assert!(matches!(
            language_tag_to_icu_locale("x-audio"),
            Err(TagError::Usage(_))
        ));
        assert!(matches!(
            language_tag_to_icu_locale("not a tag"),
            Err(TagError::Usage(_))
        ));
    }

    #[test]
    fn get_codes_reports_combined_variant_codes() {
        let codes = get_codes("en-Latn-US-1901-x-audio").unwrap();
        assert_eq!(Some("en".to_string()), codes.language);
        assert_eq!(Some("Latn".to_string()), codes.script);
        assert_eq!(Some("US".to_string()), codes.region);
        assert_eq!(Some("1901-x-audio".to_string()), codes.variant);

        let codes = get_codes("x-audio").unwrap();
        assert_eq!(None, codes.language);
        assert_eq!(Some("x-audio".to_string()), codes.variant);

        assert!(get_codes("bogus-US").is_none());
    }

    #[test]
    fn variant_codes_round_trip_through_their_subtags() {
        assert_eq!(None, get_variant_codes(&[]));
        let subtags = try_get_variant_subtags("fonipa-x-etic").unwrap();
        assert_eq!(2, subtags.len());
        assert!(!subtags[0].is_private_use());
        assert!(subtags[1].is_private_use());
        assert_eq!(
            Some("fonipa-x-etic".to_string()),
            get_variant_codes(&subtags)
        );
        let subtags = try_get_variant_subtags("x-whatever").unwrap();
        assert_eq!(Some("x-whatever".to_string()), get_variant_codes(&subtags));
        assert!(try_get_variant_subtags("bogus").is_none());
        assert_eq!(Some(0), try_get_variant_subtags("").map(|v| v.len()));
    }

    #[test]
    fn split_and_concatenate_are_complements() {
        assert_eq!(
            ("fonipa".to_string(), "etic".to_string()),
            split_variant_and_private_use("fonipa-x-etic")
        );
        assert_eq!(
            (String::new(), "audio".to_string()),
            split_variant_and_private_use("x-audio")
        );
        assert_eq!(
            ("1901".to_string(), String::new()),
            split_variant_and_private_use("1901")
        );
        assert_eq!(
            "1901-x-audio",
            concatenate_variant_and_private_use("1901", "audio")
        );
        assert_eq!("x-audio", concatenate_variant_and_private_use("", "x-audio"));
        assert_eq!("1901", concatenate_variant_and_private_use("1901", ""));
    }

    #[test]
    fn is_valid_mirrors_try_get_subtags() {
        assert!(is_valid("en"));
        assert!(is_valid("x-audio"));
        assert!(is_valid("qaa-Qaaa-QM-x-kal-Abcd-ZB"));
        assert!(!is_valid(""));
        assert!(!is_valid("bogus"));
        assert!(!is_valid("en-bogus"));
    }
}
