//! Custom cargo commands for the listeq crate.
//!
//! Usage:
//!   cargo xtask verify             - Run full verification suite
//!   cargo xtask test               - Run all tests
//!   cargo xtask check              - Quick check (check + test + clippy)
//!   cargo xtask bench              - Run benchmarks
//!   cargo xtask fuzz [target] [s]  - Run a fuzz target for s seconds

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets defined in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["list_equals", "value_lists"];

/// Default fuzzing time per target, in seconds.
const DEFAULT_FUZZ_SECONDS: u64 = 60;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.get(1).map(String::as_str), args.get(2))?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify                 Run full verification suite (markers + tests + clippy + short fuzz)
  test                   Run all Rust tests
  check                  Quick check (cargo check + test + clippy)
  bench                  Run benchmarks
  fuzz [target] [secs]   Run one fuzz target, or all of them (requires cargo-fuzz, nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("listeq Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ No clippy warnings\n");

    println!("[4/4] Short fuzzing pass...");
    for target in FUZZ_TARGETS {
        run_fuzz(target, 10)?;
    }
    println!("✓ Fuzz targets clean\n");

    println!("==========================================");
    println!("All verification checks passed!");
    println!("==========================================");
    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check (no fuzzing)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Fuzz one target, or every target in turn.
fn fuzz(target: Option<&str>, seconds: Option<&String>) -> Result<()> {
    let seconds = match seconds {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid fuzz duration {:?}", s))?,
        None => DEFAULT_FUZZ_SECONDS,
    };

    match target {
        Some(name) if FUZZ_TARGETS.contains(&name) => run_fuzz(name, seconds),
        Some(name) => bail!(
            "unknown fuzz target {:?}; expected one of {:?}",
            name,
            FUZZ_TARGETS
        ),
        None => {
            for name in FUZZ_TARGETS {
                run_fuzz(name, seconds)?;
            }
            Ok(())
        }
    }
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn run_fuzz(target: &str, seconds: u64) -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", seconds);

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", &max_time])
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo fuzz for {}", target))?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }

    Ok(())
}

/// Contracts and fuzz targets carry INVARIANT markers; losing them means
/// someone weakened a check.
fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;

    let output = Command::new("grep")
        .args(["-r", "-c", "INVARIANT", "--include=*.rs", "src", "fuzz/fuzz_targets"])
        .current_dir(&root)
        .output()
        .context("Failed to run grep")?;

    let listing = String::from_utf8_lossy(&output.stdout);
    let total: usize = listing
        .lines()
        .filter_map(|line| line.rsplit(':').next()?.parse::<usize>().ok())
        .sum();

    if total == 0 {
        bail!("No INVARIANT markers found in src/ or fuzz/fuzz_targets/");
    }

    println!("  Found {} INVARIANT markers", total);
    Ok(())
}
