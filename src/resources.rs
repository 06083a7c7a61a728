//! Resource locations
//!
//! Two directories matter to the launcher:
//! - the **source** directory, a read-only `tools/` folder shipped with the
//!   application, and
//! - the **runtime** directory, a writable folder under the system temp root
//!   where executables are staged before they are started.
//!
//! Both are resolved once at start-up into a [`ResolvedPaths`] value that is
//! handed to the launcher.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Name of the bundled tools folder under the distribution root
pub const TOOLS_DIR_NAME: &str = "tools";

/// Name of the staging folder under the system temp root
pub const RUNTIME_DIR_NAME: &str = "HexonsToolboxTools";

/// How the running application was distributed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Distribution {
    /// Packaged build; tools sit next to the executable
    Packaged { root: PathBuf },
    /// Built and run from a source checkout; tools sit next to Cargo.toml
    Source { root: PathBuf },
}

impl Distribution {
    /// Detect the distribution from the running executable's location
    pub fn detect() -> Self {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        match std::env::current_exe() {
            Ok(exe) => Self::from_exe_path(&exe, manifest_dir),
            Err(e) => {
                log::warn!("Could not determine executable path ({}), assuming source checkout", e);
                Self::Source {
                    root: manifest_dir.to_path_buf(),
                }
            }
        }
    }

    /// Classify an executable path
    ///
    /// Only an executable under this crate's own `target/` directory counts
    /// as a source run; other directories that happen to be named `target`
    /// do not.
    pub fn from_exe_path(exe: &Path, manifest_dir: &Path) -> Self {
        let exe_dir = exe.parent().unwrap_or(exe);

        if exe_dir.starts_with(manifest_dir.join("target")) {
            Self::Source {
                root: manifest_dir.to_path_buf(),
            }
        } else {
            Self::Packaged {
                root: exe_dir.to_path_buf(),
            }
        }
    }

    /// Distribution root directory
    pub fn root(&self) -> &Path {
        match self {
            Self::Packaged { root } | Self::Source { root } => root,
        }
    }

    /// Bundled tools directory for this distribution
    pub fn tools_dir(&self) -> PathBuf {
        self.root().join(TOOLS_DIR_NAME)
    }

    /// Short label for display
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Packaged { .. } => "packaged",
            Self::Source { .. } => "source",
        }
    }
}

/// Bundled tools directory
///
/// Always returns a path; whether it exists is the caller's concern.
pub fn source_directory() -> PathBuf {
    Distribution::detect().tools_dir()
}

/// Where the source directory comes from, for display
pub fn source_origin(config: &Config) -> &'static str {
    match config.paths.source_dir {
        Some(_) => "config override",
        None => Distribution::detect().kind(),
    }
}

/// Staging directory under the system temp root, created if absent
pub fn runtime_directory() -> io::Result<PathBuf> {
    ensure_runtime_directory(&std::env::temp_dir())
}

/// Staging directory under an explicit temp root, created if absent
///
/// Idempotent: an existing directory is returned as-is.
pub fn ensure_runtime_directory(temp_root: &Path) -> io::Result<PathBuf> {
    let dir = temp_root.join(RUNTIME_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Both launcher directories, resolved once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Where the bundled executables are read from
    pub source_dir: PathBuf,
    /// Where executables are staged and run
    pub runtime_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve both directories, honoring config overrides
    ///
    /// The runtime directory is created here. The source directory is not
    /// checked.
    pub fn resolve(config: &Config) -> io::Result<Self> {
        let source_dir = match &config.paths.source_dir {
            Some(dir) => dir.clone(),
            None => source_directory(),
        };

        let runtime_dir = match &config.paths.runtime_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                dir.clone()
            }
            None => runtime_directory()?,
        };

        log::debug!(
            "Resolved paths: source={} runtime={}",
            source_dir.display(),
            runtime_dir.display()
        );
        Ok(Self {
            source_dir,
            runtime_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_runtime_directory_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("a").join("b");
        let dir = ensure_runtime_directory(&root).unwrap();
        assert_eq!(dir, root.join(RUNTIME_DIR_NAME));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_runtime_directory_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let first = ensure_runtime_directory(tmp.path()).unwrap();
        fs::write(first.join("keep.txt"), "x").unwrap();
        for _ in 0..5 {
            assert_eq!(ensure_runtime_directory(tmp.path()).unwrap(), first);
        }
        assert!(first.join("keep.txt").exists());
    }

    #[test]
    fn test_ensure_runtime_directory_fails_when_root_is_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();
        assert!(ensure_runtime_directory(&file).is_err());
    }

    #[test]
    fn test_runtime_directory_under_system_temp() {
        let dir = runtime_directory().unwrap();
        assert_eq!(dir, std::env::temp_dir().join(RUNTIME_DIR_NAME));
        assert!(dir.is_dir());
    }

    #[test]
    fn test_distribution_from_cargo_target() {
        let manifest = Path::new("/home/dev/hexons-toolbox");
        let exe = Path::new("/home/dev/hexons-toolbox/target/release/hexons-toolbox");
        let dist = Distribution::from_exe_path(exe, manifest);
        assert_eq!(dist.kind(), "source");
        assert_eq!(dist.tools_dir(), manifest.join("tools"));
    }

    #[test]
    fn test_distribution_packaged() {
        let manifest = Path::new("/home/dev/hexons-toolbox");
        let exe = Path::new("/opt/HexonsToolbox/hexons-toolbox");
        let dist = Distribution::from_exe_path(exe, manifest);
        assert_eq!(
            dist,
            Distribution::Packaged {
                root: PathBuf::from("/opt/HexonsToolbox")
            }
        );
        assert_eq!(dist.tools_dir(), PathBuf::from("/opt/HexonsToolbox/tools"));
    }

    #[test]
    fn test_distribution_from_test_deps_dir() {
        let manifest = Path::new("/home/dev/hexons-toolbox");
        let exe = Path::new("/home/dev/hexons-toolbox/target/debug/deps/launch_sequence-1a2b");
        assert_eq!(Distribution::from_exe_path(exe, manifest).kind(), "source");

        let cross = Path::new("/home/dev/hexons-toolbox/target/x86_64-pc-windows-gnu/release/hexons-toolbox.exe");
        assert_eq!(Distribution::from_exe_path(cross, manifest).kind(), "source");
    }

    #[test]
    fn test_distribution_packaged_under_dir_named_target() {
        let manifest = Path::new("/home/dev/hexons-toolbox");
        let exe = Path::new("/srv/target/HexonsToolbox/hexons-toolbox");
        let dist = Distribution::from_exe_path(exe, manifest);
        assert_eq!(dist.kind(), "packaged");
        assert_eq!(dist.tools_dir(), PathBuf::from("/srv/target/HexonsToolbox/tools"));

        let nested = Path::new("/srv/target/apps/HexonsToolbox/hexons-toolbox");
        assert_eq!(Distribution::from_exe_path(nested, manifest).kind(), "packaged");
    }

    #[test]
    fn test_source_directory_ends_with_tools() {
        assert!(source_directory().ends_with(TOOLS_DIR_NAME));
    }

    #[test]
    fn test_source_origin() {
        let mut config = Config::default();
        assert!(["source", "packaged"].contains(&source_origin(&config)));

        config.paths.source_dir = Some(PathBuf::from("/opt/toolbox/tools"));
        assert_eq!(source_origin(&config), "config override");
    }

    #[test]
    fn test_resolve_with_overrides() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.paths.source_dir = Some(tmp.path().join("bundle"));
        config.paths.runtime_dir = Some(tmp.path().join("stage").join("tools"));

        let paths = ResolvedPaths::resolve(&config).unwrap();
        assert_eq!(paths.source_dir, tmp.path().join("bundle"));
        assert!(paths.runtime_dir.is_dir());
        assert!(!paths.source_dir.exists());
    }
}
