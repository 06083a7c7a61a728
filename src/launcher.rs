//! Tool launcher
//!
//! Runs the launch sequence for one tool:
//!
//! 1. **Resolve** the source and destination paths
//! 2. **Verify** the bundled executable exists
//! 3. **Stage** it into the runtime directory, overwriting any earlier copy
//! 4. **Launch** the staged copy as an independent process
//!
//! The first failure ends the sequence. Nothing is shared between launches
//! except the runtime directory path, so a failed launch leaves the launcher
//! usable. Started processes are not tracked.

use std::fs::{self, File, FileTimes, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info, warn};

use crate::error::{Result, ToolboxError};
use crate::resources::ResolvedPaths;
use crate::tools::ToolCatalog;

/// Starts a program as a detached process
pub trait Spawner {
    /// Start `program` with no arguments in `working_dir`, returning its pid
    fn spawn(&self, program: &Path, working_dir: &Path) -> io::Result<u32>;
}

/// Spawner backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&self, program: &Path, working_dir: &Path) -> io::Result<u32> {
        let mut cmd = Command::new(program);
        cmd.current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
            cmd.creation_flags(CREATE_NEW_PROCESS_GROUP);
        }

        // The child handle is dropped without waiting; the tool outlives us.
        let child = cmd.spawn()?;
        Ok(child.id())
    }
}

/// Outcome of a successful launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launched {
    /// Executable file name of the tool
    pub exe_name: String,
    /// Staged copy that was started
    pub path: PathBuf,
    /// OS process id of the started tool
    pub pid: u32,
}

/// Copies bundled tools into the runtime directory and starts them
pub struct Launcher<S: Spawner = ProcessSpawner> {
    source_dir: PathBuf,
    runtime_dir: PathBuf,
    catalog: ToolCatalog,
    spawner: S,
}

impl Launcher<ProcessSpawner> {
    /// Launcher that starts real processes
    pub fn with_process_spawner(paths: ResolvedPaths, catalog: ToolCatalog) -> Self {
        Self::new(paths, catalog, ProcessSpawner)
    }
}

impl<S: Spawner> Launcher<S> {
    /// Create a launcher over already-resolved directories
    pub fn new(paths: ResolvedPaths, catalog: ToolCatalog, spawner: S) -> Self {
        Self {
            source_dir: paths.source_dir,
            runtime_dir: paths.runtime_dir,
            catalog,
            spawner,
        }
    }

    /// Directory tools are read from
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Directory tools are staged into and run from
    pub fn runtime_dir(&self) -> &Path {
        &self.runtime_dir
    }

    /// Tools this launcher knows about
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// The process spawner
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Launch a configured tool by executable name, slug or title
    pub fn launch(&self, tool_id: &str) -> Result<Launched> {
        let tool = self.catalog.resolve(tool_id)?;
        info!("Launch requested: {} ({})", tool.title, tool.exe_name);
        self.launch_exe(tool.exe_name)
    }

    /// Run the launch sequence for an executable in the source directory
    fn launch_exe(&self, exe_name: &str) -> Result<Launched> {
        // Resolve
        let source = self.source_dir.join(exe_name);
        let destination = self.runtime_dir.join(exe_name);
        debug!("Resolved {}: {} -> {}", exe_name, source.display(), destination.display());

        // Verify
        if !source.exists() {
            warn!("Bundled tool not found: {}", source.display());
            return Err(ToolboxError::ToolMissing {
                name: exe_name.to_string(),
                path: source,
            });
        }

        // Stage; the temp reaper may have removed the runtime directory
        let bytes = fs::create_dir_all(&self.runtime_dir)
            .and_then(|()| stage(&source, &destination))
            .map_err(|error| {
                warn!(
                    "Staging {} -> {} failed: {}",
                    source.display(),
                    destination.display(),
                    error
                );
                ToolboxError::StagingFailed {
                    source_path: source.clone(),
                    destination: destination.clone(),
                    error,
                }
            })?;
        debug!("Staged {} bytes to {}", bytes, destination.display());

        // Launch
        let pid = self
            .spawner
            .spawn(&destination, &self.runtime_dir)
            .map_err(|error| {
                warn!("Launching {} failed: {}", destination.display(), error);
                ToolboxError::LaunchFailed {
                    path: destination.clone(),
                    error,
                }
            })?;

        info!("Launched {} (pid {})", destination.display(), pid);
        Ok(Launched {
            exe_name: exe_name.to_string(),
            path: destination,
            pid,
        })
    }
}

/// Copy `source` over `destination`, keeping permissions and timestamps
///
/// Returns the number of bytes copied.
pub fn stage(source: &Path, destination: &Path) -> io::Result<u64> {
    let bytes = fs::copy(source, destination)?;
    let metadata = fs::metadata(source)?;
    copy_file_times(&metadata, destination)?;
    Ok(bytes)
}

fn copy_file_times(source: &Metadata, destination: &Path) -> io::Result<()> {
    let mut times = FileTimes::new().set_modified(source.modified()?);
    if let Ok(accessed) = source.accessed() {
        times = times.set_accessed(accessed);
    }
    open_for_attributes(destination)?.set_times(times)
}

#[cfg(windows)]
fn open_for_attributes(path: &Path) -> io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;
    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    fs::OpenOptions::new().access_mode(FILE_WRITE_ATTRIBUTES).open(path)
}

#[cfg(not(windows))]
fn open_for_attributes(path: &Path) -> io::Result<File> {
    File::open(path)
}
