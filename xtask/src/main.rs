//! Custom cargo commands for the dynarray crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask kani      - Run Kani proofs (main crate and kani-proofs/)
//!   cargo xtask fuzz      - Run every fuzz target for a short time

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml
const FUZZ_TARGETS: &[&str] = &["op_sequence", "allocation_failures"];

/// Seconds each fuzz target runs for under `cargo xtask fuzz`
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + policy constants)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  kani      Run Kani proofs (needs cargo-kani)
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz, nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("dynarray Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&project_root()?, &["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&project_root()?, &["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying policy constants match kani-proofs/...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&project_root()?, &["test"])
}

/// Quick check
fn check() -> Result<()> {
    let root = project_root()?;
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&root, &["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&root, &["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&project_root()?, &["bench"])
}

/// Run Kani on the main crate and on the standalone proofs crate
fn kani() -> Result<()> {
    let root = project_root()?;

    println!("[1/2] cargo kani (dynarray)...");
    run_cargo(&root, &["kani"])?;

    println!("[2/2] cargo kani (kani-proofs)...");
    run_cargo(&root.join("kani-proofs"), &["kani"])?;

    println!("\n✓ Kani proofs passed");
    Ok(())
}

/// Run each fuzz target briefly
fn fuzz() -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {}...", i + 1, FUZZ_TARGETS.len(), target);
        run_cargo(&root, &["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }

    println!("\n✓ Fuzz targets ran clean");
    Ok(())
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
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output
        .stdout
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .count();

    if count < 6 {
        bail!(
            "Expected at least 6 INVARIANT markers, found {}. Someone may have removed contract checks!",
            count
        );
    }

    Ok(())
}

/// The Kani crate carries its own copy of the policy; make sure it has not drifted.
fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let policy = std::fs::read_to_string(root.join("src/policy.rs"))
        .context("Failed to read src/policy.rs")?;
    let proofs = std::fs::read_to_string(root.join("kani-proofs/src/lib.rs"))
        .context("Failed to read kani-proofs/src/lib.rs")?;

    let rust_init = extract_const(&policy, "INIT_CAP")
        .context("INIT_CAP not found in src/policy.rs")?;
    let kani_init = extract_const(&proofs, "INIT_CAP")
        .context("INIT_CAP not found in kani-proofs/src/lib.rs")?;

    if rust_init != kani_init {
        bail!("src/policy.rs INIT_CAP={} != kani-proofs INIT_CAP={}", rust_init, kani_init);
    }

    for needle in ["len >= cap", "checked_mul(2)", "len <= cap / 4", "(cap / 2).max(INIT_CAP)"] {
        if !policy.contains(needle) || !proofs.contains(needle) {
            bail!("policy expression `{}` differs between src/policy.rs and kani-proofs", needle);
        }
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<usize> {
    // Look for "pub const INIT_CAP: usize = 4;"
    let prefix = format!("pub const {}: usize =", name);
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix(&prefix)
            .and_then(|rest| rest.trim().trim_end_matches(';').trim().parse().ok())
    })
}
