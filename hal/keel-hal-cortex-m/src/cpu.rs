//! Cortex-M processor handle
//!
//! Interrupt masking goes through PRIMASK (`cpsid i` / `cpsie i`). Sleep
//! uses `wfe` with the SCB System Control Register selecting the depth.

use cortex_m::peripheral::SCB;
use cortex_m::register::primask;
use keel_hal::{InterruptMask, SleepConfig, SleepControl, SleepDepth};

/// SCR.SEVONPEND: pending interrupts generate a wake event
const SCR_SEVONPEND: u32 = 1 << 4;

/// Cortex-M processor handle
///
/// Owns the SCB so nothing else can rewrite the sleep configuration
/// between arm and disarm.
pub struct CortexMCpu {
    scb: SCB,
    config: SleepConfig,
}

impl CortexMCpu {
    /// Create a new processor handle
    pub fn new(scb: SCB, config: SleepConfig) -> Self {
        Self { scb, config }
    }

    /// Get the active sleep configuration
    pub fn config(&self) -> &SleepConfig {
        &self.config
    }

    /// Replace the sleep configuration used on the next `arm`
    pub fn set_config(&mut self, config: SleepConfig) {
        self.config = config;
    }

    /// Release the SCB
    pub fn free(self) -> SCB {
        self.scb
    }

    fn set_sevonpend(&mut self, on: bool) {
        // SAFETY: read-modify-write of a single SCR bit; we own the SCB.
        unsafe {
            self.scb.scr.modify(|r| {
                if on {
                    r | SCR_SEVONPEND
                } else {
                    r & !SCR_SEVONPEND
                }
            });
        }
    }
}

impl InterruptMask for CortexMCpu {
    fn enable(&mut self) {
        // SAFETY: not inside a `cortex_m::interrupt::free` section; the
        // caller owns the pairing of disable/enable.
        unsafe { cortex_m::interrupt::enable() }
    }

    fn disable(&mut self) {
        cortex_m::interrupt::disable();
    }

    fn is_enabled(&self) -> bool {
        primask::read().is_active()
    }
}

impl SleepControl for CortexMCpu {
    fn arm(&mut self) {
        match self.config.depth {
            SleepDepth::Sleep => self.scb.clear_sleepdeep(),
            SleepDepth::DeepSleep => self.scb.set_sleepdeep(),
        }
        if self.config.wake_on_pending {
            self.set_sevonpend(true);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("sleep armed: {}", self.config);
    }

    fn enter(&mut self) {
        cortex_m::asm::wfe();
    }

    fn disarm(&mut self) {
        self.scb.clear_sleepdeep();
        self.set_sevonpend(false);
    }
}
