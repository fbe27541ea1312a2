//! Platform configuration types
//!
//! Plain data consumed by chip-specific HALs when building their processor
//! and delay handles.

/// How deep the core sleeps when armed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SleepDepth {
    /// Core clock gated, peripherals keep running
    #[default]
    Sleep,
    /// System clocks stopped; wake latency is chip-specific
    DeepSleep,
}

impl SleepDepth {
    /// Parse from a config string ("sleep" / "deep_sleep")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sleep" => Some(SleepDepth::Sleep),
            "deep_sleep" => Some(SleepDepth::DeepSleep),
            _ => None,
        }
    }
}

/// Sleep mode configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SleepConfig {
    /// Sleep depth selected when arming
    pub depth: SleepDepth,
    /// Let a pending interrupt wake the core even while it is masked
    pub wake_on_pending: bool,
}

impl Default for SleepConfig {
    fn default() -> Self {
        Self {
            depth: SleepDepth::Sleep,
            wake_on_pending: true,
        }
    }
}

/// Core clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockConfig {
    /// Core clock frequency in Hz
    pub core_clock_hz: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            core_clock_hz: 8_000_000, // HSI on most Cortex-M0 parts
        }
    }
}

impl ClockConfig {
    /// Create a clock config for the given core frequency
    pub const fn new(core_clock_hz: u32) -> Self {
        Self { core_clock_hz }
    }

    /// Core cycles per microsecond, rounded up so delays never run short
    pub const fn cycles_per_us(&self) -> u32 {
        self.core_clock_hz.div_ceil(1_000_000)
    }

    /// Core cycles for the given number of nanoseconds, rounded up
    pub const fn cycles_for_ns(&self, ns: u32) -> u32 {
        let cycles = (ns as u64 * self.core_clock_hz as u64).div_ceil(1_000_000_000);
        if cycles > u32::MAX as u64 {
            u32::MAX
        } else {
            cycles as u32
        }
    }
}
