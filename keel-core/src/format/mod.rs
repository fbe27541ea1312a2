//! Numeric formatting
//!
//! Locale-independent signed decimal formatting and in-place reversal of
//! NUL-terminated byte buffers. Nothing here allocates, so it is safe to
//! call with interrupts masked.

pub mod decimal;
pub mod reverse;

pub use decimal::{format_into, i64_to_string, integer_to_string, Decimal, I32_MAX_LEN, I64_MAX_LEN};
pub use reverse::reverse;
