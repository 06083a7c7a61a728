//! Starts a real process through the launcher (Unix only)

#![cfg(unix)]

use hexons_toolbox::resources::ResolvedPaths;
use hexons_toolbox::{Launcher, ToolCatalog, ToolDescriptor, ToolboxError};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

#[test]
fn test_real_spawn_and_non_executable_failure() {
    let true_bin = Path::new("/bin/true");
    if !true_bin.exists() {
        return;
    }

    let tmp = tempfile::tempdir().unwrap();
    let source_dir = tmp.path().join("tools");
    let runtime_dir = tmp.path().join("runtime");
    fs::create_dir_all(&source_dir).unwrap();
    fs::create_dir_all(&runtime_dir).unwrap();

    fs::copy(true_bin, source_dir.join("true-tool")).unwrap();
    fs::write(source_dir.join("plain.txt"), "not a program").unwrap();
    fs::set_permissions(source_dir.join("plain.txt"), fs::Permissions::from_mode(0o644)).unwrap();

    let catalog = ToolCatalog::new(vec![
        ToolDescriptor::new("True", "Exits immediately", "true-tool"),
        ToolDescriptor::new("Plain", "Not executable", "plain.txt"),
    ]);
    let launcher = Launcher::with_process_spawner(
        ResolvedPaths {
            source_dir,
            runtime_dir: runtime_dir.clone(),
        },
        catalog,
    );

    let launched = launcher.launch("true-tool").unwrap();
    assert!(launched.pid > 0);
    assert_eq!(launched.path, runtime_dir.join("true-tool"));

    let err = launcher.launch("plain.txt").unwrap_err();
    assert!(matches!(err, ToolboxError::LaunchFailed { .. }));
}
