//! Anchored structural recognizer for the RFC 5646 tag shape.
//!
//! Two grammars are exposed: the strict BCP 47 shape used when parsing tags,
//! and a shape tolerant of legacy ICU-influenced tags used by the locale
//! bridge. Both recognize either a whole-tag private-use form (`x-` followed
//! by one or more tokens) or a general form of language, optional script,
//! optional region, variants, a single tolerated extension, and a trailing
//! private-use block. Matching is case-insensitive; the original casing is
//! preserved in the returned groups.

use smallvec::SmallVec;

pub(crate) type TokenVec<'a> = SmallVec<[&'a str; 4]>;

/// Named groups produced by a successful match.
///
/// `language` spans the primary language subtag together with any extended
/// language subtags, exactly as written. `private_use` holds the tokens of
/// the private-use block without their `x-` marker.
#[derive(Debug, Default)]
pub(crate) struct TagMatch<'a> {
    pub(crate) language: Option<&'a str>,
    pub(crate) script: Option<&'a str>,
    pub(crate) region: Option<&'a str>,
    pub(crate) variants: TokenVec<'a>,
    pub(crate) extension: Option<&'a str>,
    pub(crate) private_use: TokenVec<'a>,
}

/// Matches `tag` against the strict BCP 47 grammar.
pub(crate) fn match_language_tag(tag: &str) -> Option<TagMatch<'_>> {
    match_tag(tag)
}

/// Matches `tag` against the legacy ICU-tolerant grammar.
///
/// The legacy grammar currently admits exactly the same shapes as the strict
/// one; the entry points are kept separate because their callers differ.
pub(crate) fn match_icu_tag(tag: &str) -> Option<TagMatch<'_>> {
    match_tag(tag)
}

fn match_tag(tag: &str) -> Option<TagMatch<'_>> {
    let tokens = tokenize(tag)?;
    let (&(first_start, first), rest) = tokens.split_first()?;

    if is_private_use_marker(first) {
        if rest.is_empty() {
            return None;
        }
        let mut private_use = TokenVec::new();
        for &(_, token) in rest {
            if !is_private_use_token(token) {
                return None;
            }
            private_use.push(token);
        }
        return Some(TagMatch {
            private_use,
            ..TagMatch::default()
        });
    }

    if !is_primary_language_token(first) {
        return None;
    }
    let mut language_end = first_start + first.len();
    let mut index = 1;
    let mut extended = 0;
    while index < tokens.len() && extended < 3 && is_extended_language_token(tokens[index].1) {
        language_end = tokens[index].0 + tokens[index].1.len();
        index += 1;
        extended += 1;
    }
    let mut matched = TagMatch {
        language: Some(&tag[first_start..language_end]),
        ..TagMatch::default()
    };

    if index < tokens.len() && is_script_code(tokens[index].1) {
        matched.script = Some(tokens[index].1);
        index += 1;
    }
    if index < tokens.len() && is_region_code(tokens[index].1) {
        matched.region = Some(tokens[index].1);
        index += 1;
    }
    while index < tokens.len() && is_variant_token(tokens[index].1) {
        matched.variants.push(tokens[index].1);
        index += 1;
    }
    if index < tokens.len() && is_extension_singleton(tokens[index].1) {
        let extension_start = tokens[index].0;
        let mut extension_end = extension_start + tokens[index].1.len();
        index += 1;
        let mut content = 0;
        while index < tokens.len() && is_extension_token(tokens[index].1) {
            extension_end = tokens[index].0 + tokens[index].1.len();
            index += 1;
            content += 1;
        }
        if content == 0 {
            return None;
        }
        matched.extension = Some(&tag[extension_start..extension_end]);
    }
    if index < tokens.len() && is_private_use_marker(tokens[index].1) {
        index += 1;
        if index == tokens.len() {
            return None;
        }
        while index < tokens.len() {
            if !is_private_use_token(tokens[index].1) {
                return None;
            }
            matched.private_use.push(tokens[index].1);
            index += 1;
        }
    }
    if index != tokens.len() {
        return None;
    }
    Some(matched)
}

/// Splits on dashes, keeping byte offsets. Empty tokens (leading, trailing
/// or doubled dashes) fail the whole match since matching is anchored.
fn tokenize(tag: &str) -> Option<SmallVec<[(usize, &str); 8]>> {
    if tag.is_empty() {
        return None;
    }
    let mut tokens = SmallVec::new();
    let mut start = 0;
    for piece in tag.split('-') {
        if piece.is_empty() {
            return None;
        }
        tokens.push((start, piece));
        start += piece.len() + 1;
    }
    Some(tokens)
}

fn is_private_use_marker(token: &str) -> bool {
    token.eq_ignore_ascii_case("x")
}

fn is_primary_language_token(token: &str) -> bool {
    (2..=8).contains(&token.len()) && token.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_extended_language_token(token: &str) -> bool {
    token.len() == 3 && token.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_extension_singleton(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_alphabetic() && !c.eq_ignore_ascii_case(&'x'),
        _ => false,
    }
}

fn is_extension_token(token: &str) -> bool {
    (2..=8).contains(&token.len()) && token.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Whether `code` forms a complete language subtag: 2 to 8 letters followed
/// by at most three extended subtags of exactly 3 letters.
pub(crate) fn is_language_code(code: &str) -> bool {
    let mut pieces = code.split('-');
    match pieces.next() {
        Some(primary) if is_primary_language_token(primary) => {}
        _ => return false,
    }
    let mut extended = 0;
    for piece in pieces {
        extended += 1;
        if extended > 3 || !is_extended_language_token(piece) {
            return false;
        }
    }
    true
}

/// Whether `code` forms a script subtag: exactly 4 letters.
pub(crate) fn is_script_code(code: &str) -> bool {
    code.len() == 4 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Whether `code` forms a region subtag: 2 letters or 3 digits.
pub(crate) fn is_region_code(code: &str) -> bool {
    match code.len() {
        2 => code.chars().all(|c| c.is_ascii_alphabetic()),
        3 => code.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Whether `token` forms a variant token: one digit followed by 3
/// alphanumerics, or 5 to 8 alphanumerics.
pub(crate) fn is_variant_token(token: &str) -> bool {
    if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    match token.len() {
        4 => token.as_bytes()[0].is_ascii_digit(),
        5..=8 => true,
        _ => false,
    }
}

/// Whether `token` forms a private-use token: 1 to 40 alphanumerics.
pub(crate) fn is_private_use_token(token: &str) -> bool {
    (1..=40).contains(&token.len()) && token.chars().all(|c| c.is_ascii_alphanumeric())
}
