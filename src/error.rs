use thiserror::Error;

/// Failure raised by tag constructors and mutators.
///
/// Two kinds are distinguished throughout the crate. `Validation` means the
/// resulting tag would be malformed: a component or token does not match its
/// grammar, a cross-field invariant is violated, or a private-use marker
/// appears where the grammar forbids one. `Usage` means the operation itself
/// is redundant or nonsensical for an otherwise well-formed entity: adding a
/// token that is already present, handing characters outside the token
/// alphabet to an add operation, or supplying more than one private-use
/// marker in a single value.
///
/// Parsing entry points such as [`try_get_subtags`](crate::try_get_subtags)
/// and [`is_valid`](crate::is_valid) never produce this type; "not a valid
/// tag" is an expected outcome for arbitrary input and is reported through
/// `Option`/`bool` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The resulting tag would violate the RFC 5646 grammar or one of the
    /// tag's structural invariants.
    #[error("malformed language tag: {0}")]
    Validation(String),

    /// The operation is redundant or nonsensical for the current tag.
    #[error("invalid argument: {0}")]
    Usage(String),
}

impl TagError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        TagError::Validation(msg.into())
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        TagError::Usage(msg.into())
    }
}
