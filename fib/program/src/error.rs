use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FibError {
    #[error("input n cannot be negative")]
    InvalidInput,
    #[error("buffer too small: need {required} elements, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("F({index}) does not fit in 64 bits")]
    Overflow { index: usize },
}
