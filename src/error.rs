use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported ALU operation: {0}")]
    UnsupportedOperation(String),
    #[error("Address out of memory bounds: {0:#x}")]
    OutOfBounds(usize),
    #[error("Invalid register: r{0}")]
    InvalidRegister(u8),
    #[error("Stack overflow")]
    StackOverflow,
    #[error("Stack underflow")]
    StackUnderflow,
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
