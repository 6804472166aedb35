use thiserror::Error;

/// Failure modes of a single password generation. Both are local to one
/// call; a batch re-enters `generate` with a fresh working copy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// A non-empty password was requested from an empty charset.
    #[error("cannot generate a {requested}-character password from an empty character set")]
    EmptyCharset { requested: usize },

    /// The duplicate limit removed every character from the working set
    /// before the target length was reached.
    #[error(
        "character set exhausted after {generated} of {requested} characters; \
         raise the duplicate limit or widen the character set"
    )]
    ExhaustedCharset { generated: usize, requested: usize },
}
