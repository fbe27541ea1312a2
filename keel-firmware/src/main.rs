//! Keel demo firmware
//!
//! Idles in `wait_for_event` between SysTick interrupts and reports the
//! wake count over RTT. Board settings come from board.toml.

#![no_std]
#![no_main]

use portable_atomic::{AtomicU32, Ordering};

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use keel_core::{i64_to_string, InterruptGate};
use keel_hal::{ClockConfig, SleepConfig, SleepDepth};
use keel_hal_cortex_m::{CortexMCpu, CycleDelay};

mod board {
    use super::SleepDepth;

    include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
}

/// SysTick interrupts since boot
static TICKS: AtomicU32 = AtomicU32::new(0);

/// Report every this many wake-ups
const REPORT_EVERY: u32 = 10;

#[entry]
fn main() -> ! {
    info!("Keel firmware starting...");

    let mut cp = unwrap!(cortex_m::Peripherals::take());

    let clock = ClockConfig::new(board::CORE_CLOCK_HZ);
    let sleep = SleepConfig {
        depth: board::SLEEP_DEPTH,
        wake_on_pending: board::WAKE_ON_PENDING,
    };
    info!("clock: {} Hz, sleep: {}", clock.core_clock_hz, sleep);

    cp.SYST.set_clock_source(SystClkSource::Core);
    cp.SYST.set_reload(board::CORE_CLOCK_HZ / 1000 * board::TICK_PERIOD_MS - 1);
    cp.SYST.clear_current();
    cp.SYST.enable_interrupt();
    cp.SYST.enable_counter();

    let mut gate = InterruptGate::new(CortexMCpu::new(cp.SCB, sleep), CycleDelay::new(clock));
    gate.enable_interrupts();

    // Let RTT attach before the first sleep
    gate.wait_milliseconds(10);
    info!("Entering idle loop");

    let mut wakes: u32 = 0;
    loop {
        gate.wait_for_event();
        wakes = wakes.wrapping_add(1);

        if wakes % REPORT_EVERY == 0 {
            let ticks = gate.critical_section(|_| TICKS.load(Ordering::Relaxed));
            let text = i64_to_string(i64::from(ticks));
            info!("wakes: {}, ticks: {}", wakes, text.as_str());
        }
    }
}

#[exception]
fn SysTick() {
    TICKS.fetch_add(1, Ordering::Relaxed);
}
