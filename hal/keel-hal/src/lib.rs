//! Keel Hardware Abstraction Layer
//!
//! This crate defines the processor-level traits that chip-specific HALs
//! implement. Higher layers (`keel-core`) hold a handle implementing these
//! traits instead of poking global processor state, so the same logic runs
//! on hardware and against mocks on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers / firmware                     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  keel-core (InterruptGate, formatting)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  keel-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!            ┌─────────────────┐
//!            │ keel-hal-cortex │
//!            │       -m        │
//!            └─────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`interrupt::InterruptMask`] - Global interrupt enable/disable
//! - [`sleep::SleepControl`] - Low-power sleep arm/enter/disarm
//! - [`Processor`] - Both of the above on one handle

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod interrupt;
pub mod sleep;

// Re-export key traits at crate root for convenience
pub use config::{ClockConfig, SleepConfig, SleepDepth};
pub use interrupt::InterruptMask;
pub use sleep::SleepControl;

/// Processor handle offering both interrupt masking and sleep control
///
/// This is what `keel-core` needs to build the interrupt-safe wait.
pub trait Processor: InterruptMask + SleepControl {}

// Blanket implementation for types that implement both traits
impl<T: InterruptMask + SleepControl> Processor for T {}
