//! Interrupt gate implementation

use embedded_hal::delay::DelayNs;
use keel_hal::Processor;

/// Interrupt mask and sleep control over an owned processor handle
///
/// The interrupt mask is processor-wide and does not nest. Callers that
/// build their own critical sections with [`disable_interrupts`] must pair
/// it with [`enable_interrupts`]; prefer [`critical_section`], which saves
/// and restores the previous state.
///
/// [`disable_interrupts`]: InterruptGate::disable_interrupts
/// [`enable_interrupts`]: InterruptGate::enable_interrupts
/// [`critical_section`]: InterruptGate::critical_section
pub struct InterruptGate<C, D> {
    cpu: C,
    delay: D,
}

impl<C: Processor, D: DelayNs> InterruptGate<C, D> {
    /// Create a new gate
    pub fn new(cpu: C, delay: D) -> Self {
        Self { cpu, delay }
    }

    /// Get access to the processor handle
    pub fn cpu(&self) -> &C {
        &self.cpu
    }

    /// Get mutable access to the processor handle
    pub fn cpu_mut(&mut self) -> &mut C {
        &mut self.cpu
    }

    /// Release the processor and delay handles
    pub fn release(self) -> (C, D) {
        (self.cpu, self.delay)
    }

    /// Enable interrupts (idempotent)
    pub fn enable_interrupts(&mut self) {
        self.cpu.enable();
    }

    /// Disable interrupts (idempotent, not reference counted)
    pub fn disable_interrupts(&mut self) {
        self.cpu.disable();
    }

    /// Check if interrupts are enabled
    pub fn interrupts_enabled(&self) -> bool {
        self.cpu.is_enabled()
    }

    /// Sleep until the next interrupt or event, then resume
    ///
    /// Interrupts are re-enabled after sleep is armed and strictly before
    /// the core halts, so an interrupt that is already pending wakes it
    /// immediately instead of being slept through. Interrupts are enabled on
    /// return regardless of the state on entry.
    ///
    /// Blocks with no timeout: if no interrupt source is active the core
    /// never wakes.
    pub fn wait_for_event(&mut self) {
        self.cpu.disable();
        self.cpu.arm();
        self.cpu.enable();
        self.cpu.enter();
        self.cpu.disarm();
    }

    /// Busy-wait for roughly `count` milliseconds
    ///
    /// Occupies the calling thread for the whole duration; the processor
    /// does not sleep. `count == 0` returns immediately.
    pub fn wait_milliseconds(&mut self, count: u16) {
        for _ in 0..count {
            self.delay.delay_ms(1);
        }
    }

    /// Run `f` with interrupts masked, restoring the previous mask state
    ///
    /// Interrupts are re-enabled on exit only if they were enabled on entry,
    /// so sections nest correctly. Do not call [`wait_for_event`] from
    /// inside `f`: it unmasks interrupts.
    ///
    /// [`wait_for_event`]: InterruptGate::wait_for_event
    pub fn critical_section<R>(&mut self, f: impl FnOnce(&mut C) -> R) -> R {
        let was_enabled = self.cpu.is_enabled();
        self.cpu.disable();
        let result = f(&mut self.cpu);
        if was_enabled {
            self.cpu.enable();
        }
        result
    }
}
