//! Busy-wait delay
//!
//! Spins the core for a number of cycles derived from the configured core
//! clock. Accuracy depends on flash wait states; treat it as "at least".

use embedded_hal::delay::DelayNs;
use keel_hal::ClockConfig;

/// Cycle-counting delay provider
#[derive(Debug, Clone, Copy)]
pub struct CycleDelay {
    clock: ClockConfig,
}

impl CycleDelay {
    /// Create a delay for the given core clock
    pub fn new(clock: ClockConfig) -> Self {
        Self { clock }
    }

    /// Get the clock this delay was calibrated for
    pub fn clock(&self) -> ClockConfig {
        self.clock
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        cortex_m::asm::delay(self.clock.cycles_for_ns(ns));
    }

    fn delay_us(&mut self, us: u32) {
        let per_us = self.clock.cycles_per_us();
        // Split so the cycle count never overflows u32
        let max_chunk = u32::MAX / per_us.max(1);
        let mut remaining = us;
        while remaining > 0 {
            let chunk = remaining.min(max_chunk);
            cortex_m::asm::delay(chunk * per_us);
            remaining -= chunk;
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}
