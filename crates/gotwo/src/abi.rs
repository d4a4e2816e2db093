//! Machine ABI constants (register files, return stack, I/O buffer, result codes).
//!
//! Everything a caller needs to agree on with a callee lives here, so the
//! procedures, the harness, and the CLI share one definition.

// ── Register Files ──

/// Number of slots in each register file (`A` and `R`).
pub const REGISTER_COUNT: usize = 16;

// ── Return Stack ──

/// Number of entries in the return-address stack.
/// The deepest legal depth is `RETURN_STACK_CAPACITY - 1`.
pub const RETURN_STACK_CAPACITY: usize = 256;

/// Depth of an empty return stack.
pub const EMPTY_DEPTH: isize = -1;

// ── Console ──

/// Size of the staging buffer shared by PRINT and SCAN.
/// Also the most bytes a single PRINT or SCAN can move.
pub const IO_BUFFER_SIZE: usize = 16;

/// PRINT masks every byte to 7-bit ASCII before writing it.
pub const ASCII_MASK: u8 = 0x7F;

// ── ATOI Result Codes (R1) ──

/// The digits parsed cleanly.
pub const ATOI_OK: i64 = 0;

/// The first byte was the terminator.
pub const ATOI_EMPTY: i64 = 1;

/// A byte outside `'0'..='9'` was found; `R2` holds its index.
pub const ATOI_INVALID: i64 = 2;
