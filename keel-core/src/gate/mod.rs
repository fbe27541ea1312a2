//! Interrupt gating and low-power waits
//!
//! Wraps a processor handle so driver code never touches the global
//! interrupt mask directly.

pub mod interrupt_gate;

pub use interrupt_gate::InterruptGate;
