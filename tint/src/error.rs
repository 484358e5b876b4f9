use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("colour code is empty")]
    Empty,
    #[error("colour code is {} bytes long, expected 3, 6 or 8", .0)]
    InvalidLength(usize),
    #[error("colour code has a non-hex digit at byte {}", .0)]
    InvalidDigit(usize),
}

pub type ParseResult<T> = Result<T, ParseError>;
