//! `bitflow.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bitflow_config::BuildOverrides;

/// The top-level manifest structure for a bitflow project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Default build overrides, layered under command-line flags.
    #[serde(default)]
    pub build: BuildOverrides,
    /// Toolchain configuration.
    #[serde(default)]
    pub toolchain: Option<ToolchainConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project base name; every artifact name derives from it.
    pub name: String,
    /// The source compilation unit (default: `src/<name>.cpp`).
    #[serde(default)]
    pub source: Option<PathBuf>,
}

/// Toolchain configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Device compiler binary name or path.
    #[serde(default)]
    pub binary: Option<String>,
}

impl Manifest {
    /// Search upward from `start_dir` for a `bitflow.toml`, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("bitflow.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: Manifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing bitflow.toml")
    }

    /// The configured toolchain binary, if any.
    pub fn toolchain_binary(&self) -> Option<&str> {
        self.toolchain
            .as_ref()
            .and_then(|t| t.binary.as_deref())
    }

    /// Generate the default template for `bitflow init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"

[build]
# board = "intel_s10sx_pac:pac_s10_usm"
# num-sensors = 64

[toolchain]
binary = "icpx"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[project]
name = "beamformer"
source = "kernels/main.cpp"

[build]
board = "intel_a10gx_pac:pac_a10"
profiling = true
num-sensors = 96
extra-hardware-flags = "-Xsseed=3"

[toolchain]
binary = "dpcpp"
"#;
        let manifest = Manifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.project.name, "beamformer");
        assert_eq!(
            manifest.project.source.as_deref(),
            Some(Path::new("kernels/main.cpp"))
        );
        assert_eq!(
            manifest.build.board.as_deref(),
            Some("intel_a10gx_pac:pac_a10")
        );
        assert_eq!(manifest.build.num_sensors, Some(96));
        assert_eq!(manifest.toolchain_binary(), Some("dpcpp"));
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = Manifest::from_str("[project]\nname = \"minimal\"\n").unwrap();
        assert_eq!(manifest.project.name, "minimal");
        assert!(manifest.build.is_empty());
        assert!(manifest.toolchain_binary().is_none());
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(Manifest::from_str("not toml [[[").is_err());
    }

    #[test]
    fn reject_unknown_build_keys() {
        let toml_str = r#"
[project]
name = "typo"

[build]
num-sensor = 96
"#;
        assert!(Manifest::from_str(toml_str).is_err());
    }

    #[test]
    fn template_is_valid_toml() {
        let manifest = Manifest::from_str(&Manifest::template("demo")).unwrap();
        assert_eq!(manifest.project.name, "demo");
        assert_eq!(manifest.toolchain_binary(), Some("icpx"));
        assert!(manifest.build.is_empty());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bitflow.toml"),
            "[project]\nname = \"parent\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = Manifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.project.name, "parent");
        assert_eq!(found_dir, dir.path());
    }
}
