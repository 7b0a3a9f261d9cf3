//! `bitflow init` — project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::manifest::Manifest;

/// Create a new bitflow project directory named `name` under cwd.
pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);
    create_project(project_dir, name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir.join("src")).context("creating src/ directory")?;

    let manifest_content = Manifest::template(name);
    fs::write(project_dir.join("bitflow.toml"), &manifest_content)
        .context("writing bitflow.toml")?;

    let source_name = format!("{name}.cpp");
    fs::write(
        project_dir.join("src").join(&source_name),
        SOURCE_STUB,
    )
    .with_context(|| format!("writing src/{source_name}"))?;

    fs::write(project_dir.join(".gitignore"), "out/\n").context("writing .gitignore")?;

    println!("Created project '{name}'");
    println!("  {name}/bitflow.toml");
    println!("  {name}/src/{source_name}");
    println!("  {name}/.gitignore");

    Ok(())
}

const SOURCE_STUB: &str = r#"// Single compilation unit for all bitflow targets.
// Device kernels and host driver code both live here; the active
// artifact kind is selected by the flags bitflow composes.

int main() {
    return 0;
}
"#;
