//! Global interrupt mask abstraction
//!
//! The mask is a single processor-wide flag. Implementations do not nest or
//! count: callers pair `disable`/`enable` themselves.

/// Processor-wide interrupt enable flag
pub trait InterruptMask {
    /// Allow asynchronous interrupts to preempt execution
    ///
    /// Idempotent: enabling an already enabled mask is a no-op.
    fn enable(&mut self);

    /// Block asynchronous interrupts
    ///
    /// Idempotent. There is no reference counting; one `enable` undoes any
    /// number of `disable` calls.
    fn disable(&mut self);

    /// Check if interrupts are currently enabled
    fn is_enabled(&self) -> bool;

    /// Check if interrupts are currently masked
    fn is_disabled(&self) -> bool {
        !self.is_enabled()
    }
}

impl<T: InterruptMask + ?Sized> InterruptMask for &mut T {
    #[inline]
    fn enable(&mut self) {
        T::enable(self)
    }

    #[inline]
    fn disable(&mut self) {
        T::disable(self)
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        T::is_enabled(self)
    }
}
