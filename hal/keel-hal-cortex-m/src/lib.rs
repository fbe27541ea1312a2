//! Cortex-M HAL for the Keel portability layer
//!
//! Implements the `keel-hal` traits on top of the `cortex-m` crate:
//!
//! - [`cpu::CortexMCpu`] - PRIMASK interrupt masking and WFE sleep
//! - [`delay::CycleDelay`] - Busy-wait delay calibrated from the core clock
//!
//! # Usage
//!
//! ```ignore
//! let cp = cortex_m::Peripherals::take().unwrap();
//! let cpu = CortexMCpu::new(cp.SCB, SleepConfig::default());
//! let delay = CycleDelay::new(ClockConfig::new(48_000_000));
//! ```

#![no_std]

pub mod cpu;
pub mod delay;

pub use cpu::CortexMCpu;
pub use delay::CycleDelay;

// Re-export shared types from keel-hal
pub use keel_hal::{ClockConfig, SleepConfig, SleepDepth};
