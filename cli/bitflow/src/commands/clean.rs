//! `bitflow clean` — remove build artifacts.

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Remove the artifact output directory.
pub fn run(project_dir: &Path) -> Result<()> {
    let out_dir = project_dir.join("out");
    if out_dir.exists() {
        fs::remove_dir_all(&out_dir)?;
        println!("Removed {}", out_dir.display());
    } else {
        println!("Already clean: {} does not exist", out_dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_removes_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("beamformer.fpga_emu"), b"bin").unwrap();

        run(dir.path()).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn clean_handles_already_clean() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();
    }
}
