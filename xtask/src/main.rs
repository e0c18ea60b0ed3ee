//! Custom cargo commands for the sorted-search crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (main crate + kani-proofs unit tests)
//!   cargo xtask check     - Quick check (cargo check, test, clippy)
//!   cargo xtask bench     - Run criterion benchmarks
//!   cargo xtask kani      - Run Kani model checking proofs
//!   cargo xtask fuzz <target> [seconds]

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contract functions that must keep their debug assertions.
const CONTRACTS: &[&str] = &[
    "check_window_in_bounds",
    "check_probe_in_window",
    "check_window_shrinks",
    "check_depth_bounded",
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        Some("fuzz") => {
            let target = args.next().context("usage: cargo xtask fuzz <target> [seconds]")?;
            let seconds = args.next().unwrap_or_else(|| "60".to_string());
            fuzz(&target, &seconds)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests + clippy + kani)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  kani      Run Kani proofs (requires cargo-kani)
  fuzz      Run a fuzz target: fuzz <search_equivalence|checked_window> [seconds]
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sorted-search Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking runtime contracts...");
    check_contracts()?;
    println!("✓ Contracts present\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&project_root()?, &["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs done\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    let root = project_root()?;
    run_cargo(&root, &["test"])?;
    run_cargo(&root.join("kani-proofs"), &["test", "--quiet"])
}

fn check() -> Result<()> {
    let root = project_root()?;
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&root, &["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&root, &["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&root, &["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&project_root()?, &["bench"])
}

fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");

    let available = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    if !available {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    run_cargo(&kani_dir, &["kani"])
}

fn fuzz(target: &str, seconds: &str) -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", seconds);
    run_cargo(&root, &["+nightly", "fuzz", "run", target, "--", &max_time])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed in {}", args, dir.display());
    }

    Ok(())
}

fn check_contracts() -> Result<()> {
    let path = project_root()?.join("src/verify/contracts.rs");
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for name in CONTRACTS {
        if !source.contains(&format!("pub fn {}", name)) {
            bail!("Contract {} missing from {}", name, path.display());
        }
    }

    let assertions = source.matches("debug_assert!").count();
    if assertions < CONTRACTS.len() {
        bail!(
            "Expected at least {} debug assertions in contracts, found {}. Someone may have removed a check!",
            CONTRACTS.len(),
            assertions
        );
    }

    Ok(())
}
