use crate::error::TagError;
use crate::matcher;
use crate::parts;
use crate::registry::SubtagRegistry;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A mutable RFC 5646 language tag under edit.
///
/// The tag owns its five components and re-checks the structural invariants
/// on every mutation:
///
/// 1. script, region or a non-empty variant may be set only while a language
///    is present;
/// 2. the language may be cleared only once script, region and variant are
///    already empty;
/// 3. every component must match its grammar, and language, script, region
///    and variant codes must resolve in the standard registry;
/// 4. at least one of language and private use must be non-empty.
///
/// Component casing is preserved as given; all comparisons are
/// case-insensitive. A mutator that fails leaves the tag unchanged.
///
/// The variant and private-use components are ordered, dash-joined token
/// sequences edited through [`add_to_variant`](Rfc5646Tag::add_to_variant),
/// [`remove_from_private_use`](Rfc5646Tag::remove_from_private_use) and
/// friends. The private-use component displays with its leading `x-` marker
/// but is stored without it.
#[derive(Debug, Clone)]
pub struct Rfc5646Tag {
    language: String,
    script: String,
    region: String,
    variant: String,
    private_use: String,
}

impl Rfc5646Tag {
    /// Builds a tag from its five component strings, validating each
    /// component and the cross-field invariants.
    pub fn new(
        language: &str,
        script: &str,
        region: &str,
        variant: &str,
        private_use: &str,
    ) -> Result<Self, TagError> {
        let variant = Self::normalize_variant(variant)?;
        let private_use = Self::normalize_private_use(private_use)?;
        Self::validate_language(language)?;
        Self::validate_script(script)?;
        Self::validate_region(region)?;
        Self::check_invariants(language, script, region, &variant, &private_use)?;
        Ok(Rfc5646Tag {
            language: language.to_string(),
            script: script.to_string(),
            region: region.to_string(),
            variant,
            private_use,
        })
    }

    /// The language component, possibly empty for a private-use-only tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The script component, possibly empty.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// The region component, possibly empty.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The dash-joined variant tokens, possibly empty.
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// The private-use component in display form: `x-` followed by the
    /// dash-joined tokens, or the empty string.
    pub fn private_use(&self) -> String {
        if self.private_use.is_empty() {
            String::new()
        } else {
            format!("x-{}", self.private_use)
        }
    }

    /// The canonical serialization:
    /// `language[-script][-region][-variant][-x-privateuse]`.
    pub fn complete_tag(&self) -> String {
        let mut out = String::new();
        for component in [&self.language, &self.script, &self.region, &self.variant] {
            if !component.is_empty() {
                if !out.is_empty() {
                    out.push('-');
                }
                out.push_str(component);
            }
        }
        if !self.private_use.is_empty() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push_str("x-");
            out.push_str(&self.private_use);
        }
        out
    }

    /// Replaces the language component.
    pub fn set_language(&mut self, value: &str) -> Result<(), TagError> {
        Self::validate_language(value)?;
        Self::check_invariants(
            value,
            &self.script,
            &self.region,
            &self.variant,
            &self.private_use,
        )?;
        self.language = value.to_string();
        Ok(())
    }

    /// Replaces the script component.
    pub fn set_script(&mut self, value: &str) -> Result<(), TagError> {
        Self::validate_script(value)?;
        Self::check_invariants(
            &self.language,
            value,
            &self.region,
            &self.variant,
            &self.private_use,
        )?;
        self.script = value.to_string();
        Ok(())
    }

    /// Replaces the region component.
    pub fn set_region(&mut self, value: &str) -> Result<(), TagError> {
        Self::validate_region(value)?;
        Self::check_invariants(
            &self.language,
            &self.script,
            value,
            &self.variant,
            &self.private_use,
        )?;
        self.region = value.to_string();
        Ok(())
    }

    /// Replaces the entire variant token sequence; it does not merge.
    pub fn set_variant(&mut self, value: &str) -> Result<(), TagError> {
        let variant = Self::normalize_variant(value)?;
        Self::check_invariants(
            &self.language,
            &self.script,
            &self.region,
            &variant,
            &self.private_use,
        )?;
        self.variant = variant;
        Ok(())
    }

    /// Replaces the entire private-use token sequence; a leading `x-` on
    /// the value is accepted and stripped.
    pub fn set_private_use(&mut self, value: &str) -> Result<(), TagError> {
        let private_use = Self::normalize_private_use(value)?;
        Self::check_invariants(
            &self.language,
            &self.script,
            &self.region,
            &self.variant,
            &private_use,
        )?;
        self.private_use = private_use;
        Ok(())
    }

    /// Appends the dash-delimited tokens of `candidate` to the variant.
    ///
    /// Every token must be a registered variant code not already present;
    /// a token that is already present (in any casing) is a usage failure,
    /// as are characters outside the token alphabet.
    pub fn add_to_variant(&mut self, candidate: &str) -> Result<(), TagError> {
        let trimmed = parts::trim_dashes(candidate);
        let tokens = parts::scan_field_value(trimmed, false)?;
        if tokens.is_empty() {
            return Err(TagError::usage("no variant subtags to add"));
        }
        let registry = SubtagRegistry::standard();
        for token in &tokens {
            if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(TagError::usage(format!(
                    "variant subtag '{token}' contains characters outside the token alphabet"
                )));
            }
            if !matcher::is_variant_token(token) || registry.variant(token).is_none() {
                return Err(TagError::validation(format!(
                    "'{token}' is not a valid variant subtag"
                )));
            }
        }
        for (index, token) in tokens.iter().enumerate() {
            if parts::contains_part(&self.variant, token)
                || tokens[..index]
                    .iter()
                    .any(|prev| prev.eq_ignore_ascii_case(token))
            {
                return Err(TagError::usage(format!(
                    "variant already contains subtag '{token}'"
                )));
            }
        }
        if self.language.is_empty() {
            return Err(TagError::validation(
                "variant subtags require a language subtag",
            ));
        }
        let joined = {
            let mut all = parts::split_parts(&self.variant);
            all.extend(tokens.iter().copied());
            parts::join_parts(&all)
        };
        self.variant = joined;
        Ok(())
    }

    /// Appends the dash-delimited tokens of `candidate` to the private-use
    /// component. A leading `x-` on the candidate is accepted and stripped;
    /// any further marker fails.
    pub fn add_to_private_use(&mut self, candidate: &str) -> Result<(), TagError> {
        let trimmed = parts::trim_dashes(candidate);
        let tokens = parts::scan_field_value(trimmed, true)?;
        if tokens.is_empty() {
            return Err(TagError::usage("no private use subtags to add"));
        }
        for token in &tokens {
            if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(TagError::usage(format!(
                    "private use subtag '{token}' contains characters outside the token alphabet"
                )));
            }
            if !matcher::is_private_use_token(token) {
                return Err(TagError::validation(format!(
                    "'{token}' is not a valid private use subtag"
                )));
            }
        }
        for (index, token) in tokens.iter().enumerate() {
            if parts::contains_part(&self.private_use, token)
                || tokens[..index]
                    .iter()
                    .any(|prev| prev.eq_ignore_ascii_case(token))
            {
                return Err(TagError::usage(format!(
                    "private use already contains subtag '{token}'"
                )));
            }
        }
        let joined = {
            let mut all = parts::split_parts(&self.private_use);
            all.extend(tokens.iter().copied());
            parts::join_parts(&all)
        };
        self.private_use = joined;
        Ok(())
    }

    /// Removes the dash-delimited tokens of `candidate` from the variant,
    /// case-insensitively. Tokens not present, and malformed tokens, are
    /// ignored; this operation never fails.
    pub fn remove_from_variant(&mut self, candidate: &str) -> Result<(), TagError> {
        let trimmed = parts::trim_dashes(candidate);
        let removals = parts::split_parts(trimmed);
        self.variant = parts::remove_parts(&self.variant, &removals);
        Ok(())
    }

    /// Removes the dash-delimited tokens of `candidate` from the private-use
    /// component, case-insensitively. A leading `x-` on the candidate is
    /// accepted and stripped; tokens not present, and malformed tokens, are
    /// ignored. Fails only when the removal would leave the whole tag empty.
    pub fn remove_from_private_use(&mut self, candidate: &str) -> Result<(), TagError> {
        let mut trimmed = parts::trim_dashes(candidate);
        if let Some(prefix) = trimmed.get(..2) {
            if prefix.eq_ignore_ascii_case("x-") {
                trimmed = &trimmed[2..];
            }
        }
        let removals = parts::split_parts(trimmed);
        let remaining = parts::remove_parts(&self.private_use, &removals);
        if remaining.is_empty() && self.language.is_empty() {
            return Err(TagError::validation(
                "a tag must carry a language subtag or a private use component",
            ));
        }
        self.private_use = remaining;
        Ok(())
    }

    /// Whether the variant holds `candidate` as one of its tokens,
    /// case-insensitively. The candidate is not split: a dashed candidate
    /// never matches.
    pub fn variant_contains(&self, candidate: &str) -> bool {
        parts::contains_part(&self.variant, candidate)
    }

    /// Whether the private-use component holds `candidate` as one of its
    /// tokens, case-insensitively. The candidate is not split.
    pub fn private_use_contains(&self, candidate: &str) -> bool {
        parts::contains_part(&self.private_use, candidate)
    }

    fn validate_language(value: &str) -> Result<(), TagError> {
        if value.is_empty() {
            return Ok(());
        }
        if !matcher::is_language_code(value)
            || SubtagRegistry::standard().language(value).is_none()
        {
            return Err(TagError::validation(format!(
                "'{value}' is not a valid language subtag"
            )));
        }
        Ok(())
    }

    fn validate_script(value: &str) -> Result<(), TagError> {
        if value.is_empty() {
            return Ok(());
        }
        if !matcher::is_script_code(value) || SubtagRegistry::standard().script(value).is_none() {
            return Err(TagError::validation(format!(
                "'{value}' is not a valid script subtag"
            )));
        }
        Ok(())
    }

    fn validate_region(value: &str) -> Result<(), TagError> {
        if value.is_empty() {
            return Ok(());
        }
        if !matcher::is_region_code(value) || SubtagRegistry::standard().region(value).is_none() {
            return Err(TagError::validation(format!(
                "'{value}' is not a valid region subtag"
            )));
        }
        Ok(())
    }

    fn normalize_variant(value: &str) -> Result<String, TagError> {
        let value = parts::trim_dashes(value);
        let tokens = parts::scan_field_value(value, false)?;
        let registry = SubtagRegistry::standard();
        for (index, token) in tokens.iter().enumerate() {
            if !matcher::is_variant_token(token) || registry.variant(token).is_none() {
                return Err(TagError::validation(format!(
                    "'{token}' is not a valid variant subtag"
                )));
            }
            if tokens[..index]
                .iter()
                .any(|prev| prev.eq_ignore_ascii_case(token))
            {
                return Err(TagError::validation(format!(
                    "variant contains duplicate subtag '{token}'"
                )));
            }
        }
        Ok(parts::join_parts(&tokens))
    }

    fn normalize_private_use(value: &str) -> Result<String, TagError> {
        let value = parts::trim_dashes(value);
        let tokens = parts::scan_field_value(value, true)?;
        for token in &tokens {
            if !matcher::is_private_use_token(token) {
                return Err(TagError::validation(format!(
                    "'{token}' is not a valid private use subtag"
                )));
            }
        }
        Ok(parts::join_parts(&tokens))
    }

    fn check_invariants(
        language: &str,
        script: &str,
        region: &str,
        variant: &str,
        private_use: &str,
    ) -> Result<(), TagError> {
        if language.is_empty()
            && (!script.is_empty() || !region.is_empty() || !variant.is_empty())
        {
            return Err(TagError::validation(
                "script, region and variant subtags require a language subtag",
            ));
        }
        if language.is_empty() && private_use.is_empty() {
            return Err(TagError::validation(
                "a tag must carry a language subtag or a private use component",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Rfc5646Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.complete_tag())
    }
}

impl PartialEq for Rfc5646Tag {
    fn eq(&self, other: &Self) -> bool {
        self.language.eq_ignore_ascii_case(&other.language)
            && self.script.eq_ignore_ascii_case(&other.script)
            && self.region.eq_ignore_ascii_case(&other.region)
            && self.variant.eq_ignore_ascii_case(&other.variant)
            && self.private_use.eq_ignore_ascii_case(&other.private_use)
    }
}

impl Eq for Rfc5646Tag {}

impl Hash for Rfc5646Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in [
            &self.language,
            &self.script,
            &self.region,
            &self.variant,
            &self.private_use,
        ] {
            state.write(component.to_ascii_lowercase().as_bytes());
            state.write_u8(0xff);
        }
    }
}
