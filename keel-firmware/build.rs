//! Build script for keel-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and renders it to Rust constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    generate_board_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated board settings
struct BoardConfig {
    core_clock_hz: u32,
    deep_sleep: bool,
    wake_on_pending: bool,
    tick_period_ms: u32,
}

/// Validate board.toml and write `board_config.rs` to OUT_DIR
fn generate_board_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail(&[format!("Failed to read board.toml: {}", e)]),
    };

    let value: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(&[format!("Invalid TOML syntax in board.toml: {}", e)]),
    };

    let board = validate(&value);

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let depth = if board.deep_sleep {
        "SleepDepth::DeepSleep"
    } else {
        "SleepDepth::Sleep"
    };
    let generated = format!(
        "// Generated from board.toml by build.rs\n\
         pub const CORE_CLOCK_HZ: u32 = {};\n\
         pub const SLEEP_DEPTH: SleepDepth = {};\n\
         pub const WAKE_ON_PENDING: bool = {};\n\
         pub const TICK_PERIOD_MS: u32 = {};\n",
        board.core_clock_hz, depth, board.wake_on_pending, board.tick_period_ms
    );
    fs::write(out_dir.join("board_config.rs"), generated).unwrap();
}

/// Check required keys and ranges
fn validate(config: &toml::Value) -> BoardConfig {
    let mut errors = Vec::new();

    let core_clock_hz = match config.get("clock").and_then(|c| c.get("core_clock_hz")) {
        Some(toml::Value::Integer(hz)) if (1_000_000..=480_000_000).contains(hz) => *hz as u32,
        Some(_) => {
            errors.push("[clock] core_clock_hz must be 1000000-480000000".to_string());
            0
        }
        None => {
            errors.push("[clock] missing 'core_clock_hz'".to_string());
            0
        }
    };

    let deep_sleep = match config.get("sleep").and_then(|s| s.get("depth")) {
        Some(toml::Value::String(depth)) if depth == "sleep" => false,
        Some(toml::Value::String(depth)) if depth == "deep_sleep" => true,
        Some(_) => {
            errors.push("[sleep] depth must be 'sleep' or 'deep_sleep'".to_string());
            false
        }
        None => false,
    };

    let wake_on_pending = match config.get("sleep").and_then(|s| s.get("wake_on_pending")) {
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push("[sleep] wake_on_pending must be a boolean".to_string());
            true
        }
        None => true,
    };

    let tick_period_ms = match config.get("tick").and_then(|t| t.get("period_ms")) {
        Some(toml::Value::Integer(ms)) if (1..=1000).contains(ms) => *ms as u32,
        Some(_) => {
            errors.push("[tick] period_ms must be 1-1000".to_string());
            0
        }
        None => 100,
    };

    // SysTick reload is 24 bits
    if errors.is_empty() {
        let reload = core_clock_hz as u64 / 1000 * tick_period_ms as u64;
        if reload == 0 || reload > 0x00FF_FFFF {
            errors.push(format!(
                "[tick] period_ms {} does not fit SysTick at {} Hz",
                tick_period_ms, core_clock_hz
            ));
        }
    }

    if !errors.is_empty() {
        fail(&errors);
    }

    BoardConfig {
        core_clock_hz,
        deep_sleep,
        wake_on_pending,
        tick_period_ms,
    }
}

fn fail(errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid board.toml                                       ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
