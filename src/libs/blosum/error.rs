use thiserror::Error;

/// A block whose rows do not all have the same length.
///
/// `block` and `row` are 0-based indices; the message counts from 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "malformed block {}: row {} has {found} columns, expected {expected}",
    .block + 1,
    .row + 1
)]
pub struct MalformedBlockError {
    pub block: usize,
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlosumError {
    #[error(transparent)]
    Malformed(#[from] MalformedBlockError),

    /// A block contains a symbol missing from the requested symbol order.
    #[error("symbol '{0}' is not in the symbol order")]
    UnknownSymbol(char),
}
