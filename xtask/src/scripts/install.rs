use crate::cli;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;
use std::env;
use std::path::{Path, PathBuf};

/// Resolve where the binary is copied to: `--path` or `~/.local/bin`.
fn install_dir(path: Option<&str>, home: Option<String>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(PathBuf::from(path));
    }
    let home = home.ok_or_else(|| eyre!("Could not determine home directory, pass --path"))?;
    Ok(PathBuf::from(home).join(".local").join("bin"))
}

/// Whether `dir` appears in a `PATH`-style variable.
fn is_on_path(path_var: &str, dir: &Path) -> bool {
    env::split_paths(path_var).any(|p| p == dir)
}

pub fn install(args: &cli::InstallArgs) -> Result<()> {
    println!("Building {} in release mode...", args.name);

    cmd!("cargo", "build", "--bin", &args.name, "--release").run()?;

    let home = env::var("HOME").or_else(|_| env::var("USERPROFILE")).ok();
    let install_dir = install_dir(args.path.as_deref(), home)?;

    if !install_dir.exists() {
        println!("Creating directory: {}", install_dir.display());
        std::fs::create_dir_all(&install_dir)?;
    }

    let source_path = PathBuf::from("target").join("release").join(&args.name);
    let dest_path = install_dir.join(&args.name);

    println!("Installing {} to {}", args.name, dest_path.display());
    std::fs::copy(&source_path, &dest_path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&dest_path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&dest_path, perms)?;
    }

    println!("✓ Installed {} to {}", args.name, dest_path.display());

    if let Ok(path_var) = env::var("PATH") {
        if !is_on_path(&path_var, &install_dir) {
            println!("\nNote: {} is not in your PATH.", install_dir.display());
            println!("  export PATH=\"{}:$PATH\"", install_dir.display());
        }
    }

    Ok(())
}
