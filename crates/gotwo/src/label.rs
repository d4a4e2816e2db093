use std::fmt;

use crate::{Error, Result};

/// Every point control can be transferred to.
///
/// The return stack stores these as raw codes. System-call labels count down
/// from -1, procedure labels count up from [`Label::Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Label {
    // System calls
    Exit = -1,
    Print = -2,
    Scan = -3,
    /// Bottom-of-stack sentinel: resuming here hands control back to the host.
    Halt = -4,
    // Demonstration program
    Entry = 0,
    EntryPrompted = 1,
    EntryScanned = 2,
    EntryParsed = 3,
    EntryRejected = 4,
    EntryDone = 5,
    // Arithmetic
    Mul = 6,
    MulLoop = 7,
    Power = 8,
    PowerLoop = 9,
    Fib = 10,
    FibLoop = 11,
    Atoi = 12,
    AtoiLoop = 13,
    AtoiAccumulate = 14,
    DivMod = 15,
    DivModLoop = 16,
}

impl Label {
    pub const ALL: [Label; 21] = [
        Self::Exit,
        Self::Print,
        Self::Scan,
        Self::Halt,
        Self::Entry,
        Self::EntryPrompted,
        Self::EntryScanned,
        Self::EntryParsed,
        Self::EntryRejected,
        Self::EntryDone,
        Self::Mul,
        Self::MulLoop,
        Self::Power,
        Self::PowerLoop,
        Self::Fib,
        Self::FibLoop,
        Self::Atoi,
        Self::AtoiLoop,
        Self::AtoiAccumulate,
        Self::DivMod,
        Self::DivModLoop,
    ];

    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|label| label.code() == code)
            .ok_or(Error::UnknownLabel(code))
    }

    #[must_use]
    pub const fn is_system_call(self) -> bool {
        self.code() < 0
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exit => "EXIT",
            Self::Print => "PRINT",
            Self::Scan => "SCAN",
            Self::Halt => "HALT",
            Self::Entry => "ENTRY",
            Self::EntryPrompted => "ENTRY_PROMPTED",
            Self::EntryScanned => "ENTRY_SCANNED",
            Self::EntryParsed => "ENTRY_PARSED",
            Self::EntryRejected => "ENTRY_REJECTED",
            Self::EntryDone => "ENTRY_DONE",
            Self::Mul => "MUL",
            Self::MulLoop => "MUL_LOOP",
            Self::Power => "POWER",
            Self::PowerLoop => "POWER_LOOP",
            Self::Fib => "FIB",
            Self::FibLoop => "FIB_LOOP",
            Self::Atoi => "ATOI",
            Self::AtoiLoop => "ATOI_LOOP",
            Self::AtoiAccumulate => "ATOI_ACCUMULATE",
            Self::DivMod => "DIVMOD",
            Self::DivModLoop => "DIVMOD_LOOP",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Label {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Self::from_code(code)
    }
}
