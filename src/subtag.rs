use crate::registry::SubtagRegistry;
use std::fmt;

/// Codes for subtags the crate treats specially.
pub mod well_known {
    /// The reserved language code standing in for a custom language.
    pub const UNLISTED_LANGUAGE: &str = "qaa";
    /// The reserved script code standing in for a custom script.
    pub const UNWRITTEN_SCRIPT_PLACEHOLDER: &str = "Qaaa";
    /// The reserved region code standing in for a custom region.
    pub const CUSTOM_REGION_PLACEHOLDER: &str = "QM";
    /// Registered variant marking IPA transcription.
    pub const IPA_VARIANT: &str = "fonipa";
    /// Private-use variant marking phonetic IPA transcription.
    pub const IPA_PHONETIC_PRIVATE_USE: &str = "etic";
    /// Private-use variant marking phonemic IPA transcription.
    pub const IPA_PHONEMIC_PRIVATE_USE: &str = "emic";
    /// Registered variant marking Pinyin romanization.
    pub const PINYIN_VARIANT: &str = "pinyin";
    /// Private-use variant marking an audio writing system.
    pub const AUDIO_PRIVATE_USE: &str = "audio";
    /// Script code used for audio writing systems.
    pub const AUDIO_SCRIPT: &str = "Zxxx";
}

/// Common surface of the four concrete subtag kinds.
///
/// A subtag is either drawn from a standard registry (shared, immutable,
/// canonically cased) or freshly minted as a private-use value owned by
/// whichever tag or conversion created it. Equality is by code,
/// case-insensitive.
pub trait Subtag {
    /// The code, with its original casing preserved.
    fn code(&self) -> &str;
    /// Display name, when the registry knows one.
    fn name(&self) -> Option<&str>;
    /// Whether this value is private-use rather than registered.
    fn is_private_use(&self) -> bool;
    /// Whether the registry marks this code as deprecated.
    fn is_deprecated(&self) -> bool;
}

macro_rules! subtag_common {
    ($ty:ident) => {
        impl Subtag for $ty {
            fn code(&self) -> &str {
                &self.code
            }
            fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }
            fn is_private_use(&self) -> bool {
                self.is_private_use
            }
            fn is_deprecated(&self) -> bool {
                self.is_deprecated
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.code.eq_ignore_ascii_case(&other.code)
            }
        }

        impl Eq for $ty {}
    };
}

/// An ISO 639 language subtag.
#[derive(Debug, Clone)]
pub struct LanguageSubtag {
    code: String,
    name: Option<String>,
    iso3: Option<String>,
    is_private_use: bool,
    is_deprecated: bool,
}

subtag_common!(LanguageSubtag);

impl LanguageSubtag {
    pub(crate) fn new(
        code: impl Into<String>,
        name: Option<&str>,
        iso3: Option<&str>,
        is_private_use: bool,
        is_deprecated: bool,
    ) -> Self {
        LanguageSubtag {
            code: code.into(),
            name: name.map(str::to_string),
            iso3: iso3.map(str::to_string),
            is_private_use,
            is_deprecated,
        }
    }

    /// Creates a private-use language subtag carrying a custom code.
    pub fn private_use(code: impl Into<String>) -> Self {
        LanguageSubtag::new(code, None, None, true, false)
    }

    /// Resolves `code` against the standard registry, falling back to a
    /// private-use subtag for unregistered codes.
    pub fn from_code(code: &str) -> Self {
        SubtagRegistry::standard()
            .language(code)
            .unwrap_or_else(|| LanguageSubtag::private_use(code))
    }

    /// The ISO 639-3 code mapped to this language, when recorded.
    pub fn iso3_code(&self) -> Option<&str> {
        self.iso3.as_deref()
    }
}

impl fmt::Display for LanguageSubtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(&self.code))
    }
}

/// An ISO 15924 script subtag.
#[derive(Debug, Clone)]
pub struct ScriptSubtag {
    code: String,
    name: Option<String>,
    is_private_use: bool,
    is_deprecated: bool,
}

subtag_common!(ScriptSubtag);

impl ScriptSubtag {
    pub(crate) fn new(
        code: impl Into<String>,
        name: Option<&str>,
        is_private_use: bool,
        is_deprecated: bool,
    ) -> Self {
        ScriptSubtag {
            code: code.into(),
            name: name.map(str::to_string),
            is_private_use,
            is_deprecated,
        }
    }

    /// Creates a private-use script subtag carrying a custom code.
    pub fn private_use(code: impl Into<String>) -> Self {
        ScriptSubtag::new(code, None, true, false)
    }

    /// Resolves `code` against the standard registry, falling back to a
    /// private-use subtag for unregistered codes.
    pub fn from_code(code: &str) -> Self {
        SubtagRegistry::standard()
            .script(code)
            .unwrap_or_else(|| ScriptSubtag::private_use(code))
    }
}

impl fmt::Display for ScriptSubtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(&self.code))
    }
}

/// An ISO 3166 region subtag.
#[derive(Debug, Clone)]
pub struct RegionSubtag {
    code: String,
    name: Option<String>,
    is_private_use: bool,
    is_deprecated: bool,
}

subtag_common!(RegionSubtag);

impl RegionSubtag {
    pub(crate) fn new(
        code: impl Into<String>,
        name: Option<&str>,
        is_private_use: bool,
        is_deprecated: bool,
    ) -> Self {
        RegionSubtag {
            code: code.into(),
            name: name.map(str::to_string),
            is_private_use,
            is_deprecated,
        }
    }

    /// Creates a private-use region subtag carrying a custom code.
    pub fn private_use(code: impl Into<String>) -> Self {
        RegionSubtag::new(code, None, true, false)
    }

    /// Resolves `code` against the standard registry, falling back to a
    /// private-use subtag for unregistered codes.
    pub fn from_code(code: &str) -> Self {
        SubtagRegistry::standard()
            .region(code)
            .unwrap_or_else(|| RegionSubtag::private_use(code))
    }
}

impl fmt::Display for RegionSubtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // There are standard private-use regions (AA, QM..QZ, XA..XZ, ZZ);
        // show users which is which in lists.
        match (self.is_private_use, self.name()) {
            (true, Some(name)) => write!(f, "{} ({})", name, self.code),
            (_, name) => f.write_str(name.unwrap_or(&self.code)),
        }
    }
}

/// A registered or private-use variant subtag.
#[derive(Debug, Clone)]
pub struct VariantSubtag {
    code: String,
    name: Option<String>,
    is_private_use: bool,
    is_deprecated: bool,
}

subtag_common!(VariantSubtag);

impl VariantSubtag {
    pub(crate) fn new(
        code: impl Into<String>,
        name: Option<&str>,
        is_private_use: bool,
        is_deprecated: bool,
    ) -> Self {
        VariantSubtag {
            code: code.into(),
            name: name.map(str::to_string),
            is_private_use,
            is_deprecated,
        }
    }

    /// Creates a private-use variant subtag carrying a custom code.
    pub fn private_use(code: impl Into<String>) -> Self {
        VariantSubtag::new(code, None, true, false)
    }

    /// Resolves `code` against the registered variants, then the well-known
    /// private-use variants, falling back to a fresh private-use subtag.
    pub fn from_code(code: &str) -> Self {
        let registry = SubtagRegistry::standard();
        registry
            .variant(code)
            .or_else(|| registry.common_private_use_variant(code))
            .unwrap_or_else(|| VariantSubtag::private_use(code))
    }
}

impl fmt::Display for VariantSubtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(&self.code))
    }
}
