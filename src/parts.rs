//! Dash-delimited token-list algebra shared by the variant and private-use
//! fields of [`Rfc5646Tag`](crate::Rfc5646Tag).

use crate::error::TagError;
use smallvec::SmallVec;

pub(crate) type PartVec<'a> = SmallVec<[&'a str; 4]>;

pub(crate) fn trim_dashes(value: &str) -> &str {
    value.trim_matches('-')
}

pub(crate) fn split_parts(value: &str) -> PartVec<'_> {
    value.split('-').filter(|part| !part.is_empty()).collect()
}

pub(crate) fn join_parts(parts: &[&str]) -> String {
    parts.join("-")
}

pub(crate) fn is_private_use_marker(part: &str) -> bool {
    part.eq_ignore_ascii_case("x")
}

/// Single-token membership probe, case-insensitive. The candidate is not
/// split, so a dashed candidate can only match a stored token verbatim,
/// which stored tokens never are.
pub(crate) fn contains_part(joined: &str, candidate: &str) -> bool {
    split_parts(joined)
        .iter()
        .any(|part| part.eq_ignore_ascii_case(candidate))
}

/// Splits a field value into tokens, enforcing the private-use marker rules.
///
/// Two or more `x` markers in one value is a usage failure regardless of the
/// field. A single marker is the display form when it leads a value of a
/// field that carries one (`leading_marker_allowed`), and is stripped;
/// anywhere else a marker makes the value malformed.
pub(crate) fn scan_field_value(
    value: &str,
    leading_marker_allowed: bool,
) -> Result<PartVec<'_>, TagError> {
    let mut tokens = split_parts(value);
    let markers = tokens
        .iter()
        .filter(|part| is_private_use_marker(part))
        .count();
    if markers >= 2 {
        return Err(TagError::usage(
            "a tag can carry only one private use marker",
        ));
    }
    if markers == 1 {
        if leading_marker_allowed && tokens.first().is_some_and(|part| is_private_use_marker(part))
        {
            tokens.remove(0);
        } else {
            return Err(TagError::validation(format!(
                "misplaced private use marker in '{value}'"
            )));
        }
    }
    Ok(tokens)
}

/// Removes every token of `removals` from `joined`, case-insensitively.
/// Tokens not present are ignored; a removal beginning with an underscore is
/// not a legal token in this algebra and is silently skipped.
pub(crate) fn remove_parts(joined: &str, removals: &[&str]) -> String {
    let removals: PartVec<'_> = removals
        .iter()
        .copied()
        .filter(|part| !part.starts_with('_'))
        .collect();
    let remaining: PartVec<'_> = split_parts(joined)
        .into_iter()
        .filter(|part| !removals.iter().any(|r| r.eq_ignore_ascii_case(part)))
        .collect();
    join_parts(&remaining)
}
