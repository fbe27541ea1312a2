//! Board-agnostic portability primitives
//!
//! The small layer driver code leans on to stay independent of the
//! toolchain and processor:
//!
//! - [`gate::InterruptGate`] - interrupt masking, missed-wakeup-safe sleep,
//!   coarse millisecond delay
//! - [`format`] - in-place reversal and signed decimal formatting
//! - [`compat`] - min/max, buffer clearing, digit and byte helpers
//! - [`error`] - the single error kind and its device status code

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod compat;
pub mod error;
pub mod format;
pub mod gate;

pub use error::{CompatError, Result, DEVICE_INVALID_PARAMETER, DEVICE_OK};
pub use format::{format_into, i64_to_string, integer_to_string, reverse, Decimal};
pub use gate::InterruptGate;
