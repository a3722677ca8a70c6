use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// The cell count or its byte size overflows the address space.
    #[error("lattice of shape {shape:?} is too large to allocate")]
    TooLarge { shape: Vec<usize> },
}
