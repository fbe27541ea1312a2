//! Low-power sleep abstraction
//!
//! Sleep is split into three steps so the caller can re-enable interrupts
//! between arming and entering. A core that enters sleep with interrupts
//! masked can miss the event meant to wake it.

/// Low-power sleep control
pub trait SleepControl {
    /// Select and arm the configured sleep mode
    ///
    /// Arming alone does not halt the core.
    fn arm(&mut self);

    /// Halt instruction execution until the next event or interrupt
    fn enter(&mut self);

    /// Disarm sleep mode after waking
    fn disarm(&mut self);
}

impl<T: SleepControl + ?Sized> SleepControl for &mut T {
    #[inline]
    fn arm(&mut self) {
        T::arm(self)
    }

    #[inline]
    fn enter(&mut self) {
        T::enter(self)
    }

    #[inline]
    fn disarm(&mut self) {
        T::disarm(self)
    }
}
