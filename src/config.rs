//! Configuration discovery and effective settings resolution.
//!
//! Molint reads `molint.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `root`: `CryoSystem` (scanned directory, relative to the repo root)
//! - `ext`: `mo`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `molint.toml|yaml`.
pub struct MolintConfig {
    pub root: Option<String>,
    pub ext: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Absolute (or repo-root-joined) directory to scan.
    pub root: PathBuf,
    pub ext: String,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `molint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("molint.toml").exists()
            || cur.join("molint.yaml").exists()
            || cur.join("molint.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `MolintConfig` from `molint.toml` or `molint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<MolintConfig> {
    let toml_path = root.join("molint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: MolintConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["molint.yaml", "molint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: MolintConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_root: Option<&str>,
    cli_ext: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let root_str = cli_root
        .map(|s| s.to_string())
        .or(cfg.root)
        .unwrap_or_else(|| "CryoSystem".to_string());
    let root = if Path::new(&root_str).is_absolute() {
        PathBuf::from(&root_str)
    } else {
        repo_root.join(&root_str)
    };

    let ext = cli_ext
        .map(|s| s.to_string())
        .or(cfg.ext)
        .unwrap_or_else(|| "mo".to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        repo_root,
        root,
        ext,
        output,
    }
}
