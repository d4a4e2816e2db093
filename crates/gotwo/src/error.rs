use crate::label::Label;
use crate::machine::Word;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown label code {0} on the return stack")]
    UnknownLabel(i32),

    #[error("Return stack overflow (capacity {capacity})")]
    ReturnStackOverflow { capacity: usize },

    #[error("Return stack underflow")]
    ReturnStackUnderflow,

    #[error("Register index {0} out of range")]
    RegisterOutOfRange(Word),

    #[error("Arithmetic overflow in {0}")]
    Overflow(Label),

    #[error("Division by zero in DIVMOD")]
    DivisionByZero,

    #[error("Negative operand passed to {0}")]
    NegativeOperand(Label),

    #[error("Step limit of {0} exceeded")]
    StepLimitExceeded(u64),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
