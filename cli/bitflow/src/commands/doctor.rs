//! `bitflow doctor` — toolchain diagnostics.

use std::path::Path;
use std::process::Command;

use anyhow::Result;

use crate::manifest::Manifest;

/// Print toolchain diagnostic information.
pub fn run(project_dir: &Path, toolchain: Option<&str>) -> Result<()> {
    println!("=== bitflow doctor ===");
    println!();
    println!("bitflow version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("--- Project Status ---");
    let manifest_binary = match Manifest::find_and_load(project_dir) {
        Ok(Some((manifest, dir))) => {
            println!("  bitflow.toml: found at {}", dir.display());
            println!("  Project:      {}", manifest.project.name);
            manifest.toolchain_binary().map(str::to_string)
        }
        Ok(None) => {
            println!("  bitflow.toml: not found");
            None
        }
        Err(e) => {
            println!("  bitflow.toml: error — {e}");
            None
        }
    };
    println!();

    println!("--- Toolchain ---");
    let binary = toolchain
        .map(str::to_string)
        .or(manifest_binary)
        .unwrap_or_else(|| "icpx".to_string());
    print_tool_status(&binary, &["--version"]);

    Ok(())
}

fn print_tool_status(name: &str, args: &[&str]) {
    match Command::new(name).args(args).output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            let first_line = version.lines().next().unwrap_or("(unknown version)");
            println!("  {name}: {first_line}");
        }
        Err(_) => {
            println!("  {name}: not found");
        }
    }
}
