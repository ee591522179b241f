#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]
//! RFC 5646 (BCP 47) language tag types with a legacy ICU locale bridge.
//!
//! The [`Rfc5646Tag`] type owns the five components of a language tag
//! (language, script, region, variant, private use), enforces the tag's
//! structural invariants on every mutation, and supports token-level editing
//! of its dash-delimited variant and private-use components. Language,
//! script, region and variant codes are validated against registries of the
//! registered ISO 639, ISO 15924, ISO 3166 and BCP 47 codes.
//!
//! The conversion functions parse arbitrary tag strings into typed
//! [`Subtag`] values and translate bidirectionally between BCP 47 tags and
//! the underscore-delimited ICU locale identifiers used by older
//! writing-system data. Languages with no registered code survive the trip
//! through the standard grammar via a sentinel scheme: the reserved codes
//! `qaa`, `Qaaa` and `QM` occupy the language, script and region positions
//! while the real custom codes ride in the tag's private-use block.
//!
//! ```
//! use langtags::{icu_locale_to_language_tag, Rfc5646Tag};
//!
//! let mut tag = Rfc5646Tag::new("en", "Latn", "US", "1901", "audio")?;
//! assert_eq!("en-Latn-US-1901-x-audio", tag.complete_tag());
//!
//! tag.add_to_private_use("etic")?;
//! assert_eq!("x-audio-etic", tag.private_use());
//!
//! // A legacy ICU locale naming an unregistered language:
//! assert_eq!("qaa-x-kal", icu_locale_to_language_tag("xkal")?);
//! # Ok::<(), langtags::TagError>(())
//! ```
//!
//! Two failure kinds are distinguished throughout: a [`TagError::Validation`]
//! means the resulting tag would be malformed, while a [`TagError::Usage`]
//! means the operation itself was redundant or nonsensical. Parsing entry
//! points such as [`try_get_subtags`] and [`is_valid`] report "not a valid
//! tag" through `Option`/`bool` instead, since that is an expected outcome
//! for arbitrary input.
//!
//! Only a single private-use extension per tag is supported; other RFC 5646
//! extension subtags are tolerated by the parser but not modelled.

pub(crate) mod convert;

pub(crate) mod error;

pub(crate) mod matcher;

pub(crate) mod parts;

pub(crate) mod registry;

pub(crate) mod subtag;

pub(crate) mod tables;

pub(crate) mod tag;

pub use convert::{
    concatenate_variant_and_private_use, get_codes, get_variant_codes,
    icu_locale_to_language_tag, is_valid, language_tag_to_icu_locale,
    split_variant_and_private_use, to_icu_locale, to_language_tag, try_get_subtags,
    try_get_variant_subtags, ParsedSubtags, TagCodes,
};

pub use error::TagError;

pub use registry::{
    is_private_use_language_code, is_private_use_region_code, is_private_use_script_code,
    SubtagRegistry,
};

pub use subtag::{
    well_known, LanguageSubtag, RegionSubtag, ScriptSubtag, Subtag, VariantSubtag,
};

pub use tag::Rfc5646Tag;
