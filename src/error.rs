use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IcosphereError {
    #[error("invalid subdivision level {0}: must be non-negative")]
    InvalidArgument(i64),
    #[error("vertex index {0} does not fit in a u32 index buffer")]
    IndexOverflow(usize),
}
