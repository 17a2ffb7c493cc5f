//! Errors returned by [`Optional`](crate::Optional).

/// The two ways an [`Optional`](crate::Optional) can be misused.
///
/// Neither is ever recovered inside this crate. They are handed back to the
/// caller, who is expected to prefer `unwrap_or`, `unwrap_or_else` or a
/// `map`/`flat_map` chain over the operations that produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum OptionalError {
    /// The strict constructor was given a null (`None`) value.
    #[error("a null value was given to a constructor that requires a value")]
    NullValue,
    /// A value was demanded from an absent container.
    #[error("no value present")]
    EmptyValue,
}
