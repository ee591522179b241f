use crate::subtag::{LanguageSubtag, RegionSubtag, ScriptSubtag, VariantSubtag};
use crate::tables;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Process-wide read-only lookup tables for registered subtags.
///
/// Built once before first use and shared freely across threads; it never
/// mutates after initialization, so no locking is involved. Both the parser
/// and the [`Rfc5646Tag`](crate::Rfc5646Tag) validators resolve codes here.
///
/// Lookups are case-insensitive and return subtags carrying the registry's
/// canonical casing. Codes inside the ISO private-use ranges (`qaa`..`qtz`
/// for languages, `Qaaa`..`Qabx` for scripts, `AA`/`QM`..`QZ`/`XA`..`XZ`/`ZZ`
/// for regions) resolve to private-use subtags preserving the caller's
/// casing, even though the tables do not list them individually.
#[derive(Debug)]
pub struct SubtagRegistry {
    languages: HashMap<String, LanguageSubtag>,
    scripts: HashMap<String, ScriptSubtag>,
    regions: HashMap<String, RegionSubtag>,
    variants: HashMap<String, VariantSubtag>,
    common_private_use_variants: HashMap<String, VariantSubtag>,
}

static STANDARD: Lazy<SubtagRegistry> = Lazy::new(SubtagRegistry::build);

impl SubtagRegistry {
    /// The registry of standard ISO 639 / ISO 15924 / ISO 3166 / BCP 47 codes.
    pub fn standard() -> &'static SubtagRegistry {
        &STANDARD
    }

    fn build() -> Self {
        let languages = tables::LANGUAGES
            .iter()
            .map(|&(code, name, iso3, deprecated)| {
                let subtag = LanguageSubtag::new(code, Some(name), iso3, false, deprecated);
                (code.to_ascii_lowercase(), subtag)
            })
            .collect();
        let scripts = tables::SCRIPTS
            .iter()
            .map(|&(code, name, deprecated)| {
                let subtag = ScriptSubtag::new(code, Some(name), false, deprecated);
                (code.to_ascii_lowercase(), subtag)
            })
            .collect();
        let regions = tables::REGIONS
            .iter()
            .map(|&(code, name, deprecated)| {
                let subtag = RegionSubtag::new(code, Some(name), false, deprecated);
                (code.to_ascii_lowercase(), subtag)
            })
            .collect();
        let variants = tables::VARIANTS
            .iter()
            .map(|&(code, name, deprecated)| {
                let subtag = VariantSubtag::new(code, Some(name), false, deprecated);
                (code.to_ascii_lowercase(), subtag)
            })
            .collect();
        let common_private_use_variants = tables::COMMON_PRIVATE_USE_VARIANTS
            .iter()
            .map(|&(code, name)| {
                let subtag = VariantSubtag::new(code, Some(name), true, false);
                (code.to_ascii_lowercase(), subtag)
            })
            .collect();
        SubtagRegistry {
            languages,
            scripts,
            regions,
            variants,
            common_private_use_variants,
        }
    }

    /// Looks up a language code, resolving private-use range codes as well.
    pub fn language(&self, code: &str) -> Option<LanguageSubtag> {
        if let Some(subtag) = self.languages.get(&code.to_ascii_lowercase()) {
            return Some(subtag.clone());
        }
        if is_private_use_language_code(code) {
            return Some(LanguageSubtag::private_use(code));
        }
        None
    }

    /// Looks up a script code, resolving private-use range codes as well.
    pub fn script(&self, code: &str) -> Option<ScriptSubtag> {
        if let Some(subtag) = self.scripts.get(&code.to_ascii_lowercase()) {
            return Some(subtag.clone());
        }
        if is_private_use_script_code(code) {
            return Some(ScriptSubtag::private_use(code));
        }
        None
    }

    /// Looks up a region code, resolving private-use range codes as well.
    pub fn region(&self, code: &str) -> Option<RegionSubtag> {
        if let Some(subtag) = self.regions.get(&code.to_ascii_lowercase()) {
            return Some(subtag.clone());
        }
        if is_private_use_region_code(code) {
            return Some(RegionSubtag::private_use(code));
        }
        None
    }

    /// Looks up a registered BCP 47 variant code.
    pub fn variant(&self, code: &str) -> Option<VariantSubtag> {
        self.variants.get(&code.to_ascii_lowercase()).cloned()
    }

    /// Looks up a well-known private-use variant code.
    pub fn common_private_use_variant(&self, code: &str) -> Option<VariantSubtag> {
        self.common_private_use_variants
            .get(&code.to_ascii_lowercase())
            .cloned()
    }
}

/// Whether `code` lies in the ISO 639 private-use range `qaa`..`qtz`.
pub fn is_private_use_language_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let (a, b) = (
        bytes[0].to_ascii_lowercase(),
        bytes[1].to_ascii_lowercase(),
    );
    a == b'q' && (b'a'..=b't').contains(&b)
}

/// Whether `code` lies in the ISO 15924 private-use range `Qaaa`..`Qabx`.
pub fn is_private_use_script_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.len() != 4 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let (a, b, c, d) = (
        bytes[0].to_ascii_lowercase(),
        bytes[1].to_ascii_lowercase(),
        bytes[2].to_ascii_lowercase(),
        bytes[3].to_ascii_lowercase(),
    );
    a == b'q' && b == b'a' && (c == b'a' || (c == b'b' && (b'a'..=b'x').contains(&d)))
}

/// Whether `code` lies in the ISO 3166 private-use set
/// (`AA`, `QM`..`QZ`, `XA`..`XZ`, `ZZ`).
pub fn is_private_use_region_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let (a, b) = (
        bytes[0].to_ascii_lowercase(),
        bytes[1].to_ascii_lowercase(),
    );
    matches!(
        (a, b),
        (b'a', b'a') | (b'z', b'z') | (b'q', b'm'..=b'z') | (b'x', _)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtag::Subtag;

    #[test]
    fn lookups_are_case_insensitive_and_canonically_cased() {
        let registry = SubtagRegistry::standard();
        assert_eq!("en", registry.language("EN").unwrap().code());
        assert_eq!("Latn", registry.script("LATN").unwrap().code());
        assert_eq!("US", registry.region("us").unwrap().code());
        assert_eq!("1694acad", registry.variant("1694AcaD").unwrap().code());
    }

    #[test]
    fn unknown_codes_miss() {
        let registry = SubtagRegistry::standard();
        assert!(registry.language("bogus").is_none());
        assert!(registry.language("Latn").is_none());
        assert!(registry.region("en").is_none());
        assert!(registry.variant("bogus").is_none());
    }

    #[test]
    fn deprecated_flags_survive_lookup() {
        let registry = SubtagRegistry::standard();
        assert!(registry.language("iw").unwrap().is_deprecated());
        assert!(registry.region("SU").unwrap().is_deprecated());
        assert!(!registry.language("he").unwrap().is_deprecated());
    }

    #[test]
    fn private_use_ranges_resolve_preserving_case() {
        let registry = SubtagRegistry::standard();
        let qaa = registry.language("qAa").unwrap();
        assert!(qaa.is_private_use());
        assert_eq!("qAa", qaa.code());
        assert!(registry.script("Qaaa").unwrap().is_private_use());
        assert!(registry.script("Qabx").unwrap().is_private_use());
        assert!(registry.script("Qaby").is_none());
        assert!(registry.region("QM").unwrap().is_private_use());
        assert!(registry.region("XK").unwrap().is_private_use());
        assert!(registry.region("AA").unwrap().is_private_use());
        assert!(registry.language("qua").is_none());
    }

    #[test]
    fn iso3_mapping_is_recorded() {
        let registry = SubtagRegistry::standard();
        assert_eq!(Some("cmn"), registry.language("zh").unwrap().iso3_code());
        assert_eq!(Some("eng"), registry.language("en").unwrap().iso3_code());
        assert_eq!(None, registry.language("cmn").unwrap().iso3_code());
    }

    #[test]
    fn common_private_use_variants_are_flagged() {
        let registry = SubtagRegistry::standard();
        let audio = registry.common_private_use_variant("AUDIO").unwrap();
        assert!(audio.is_private_use());
        assert_eq!(Some("Audio"), audio.name());
        assert!(registry.variant("audio").is_none());
    }
}
