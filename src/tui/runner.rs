//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, event handler and launcher. It runs
//! the main loop: render → wait for an event → dispatch actions → repeat.

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::{Action, Notification};
use super::views::render;
use crate::launcher::{Launcher, Spawner};
use eyre::Result;
use log::info;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner<S: Spawner> {
    /// The terminal instance
    terminal: Tui,
    /// Application state and input handling
    app: App,
    /// Event handler for keyboard and tick events
    event_handler: EventHandler,
    /// Launch sequence for open actions
    launcher: Launcher<S>,
}

impl<S: Spawner> TuiRunner<S> {
    /// Create a new TUI runner.
    pub fn new(terminal: Tui, launcher: Launcher<S>, tick_rate_ms: u64) -> Self {
        let app = App::new(launcher.catalog().tools().to_vec());
        Self {
            terminal,
            app,
            event_handler: EventHandler::new(tick_rate_ms),
            launcher,
        }
    }

    /// Run the main TUI loop.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            self.terminal.draw(|f| render(self.app.state(), f))?;

            match self.event_handler.next()? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                // Redrawn at the top of the loop
                Event::Tick | Event::Resize(_, _) => {}
            }

            dispatch(&mut self.app, &self.launcher);

            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }
}

/// Carry out the app's pending action, if any.
///
/// Launch failures become a notification; they never end the loop.
pub fn dispatch<S: Spawner>(app: &mut App, launcher: &Launcher<S>) {
    let Some(action) = app.take_action() else {
        return;
    };

    match action {
        Action::Open(tool_id) => match launcher.launch(&tool_id) {
            Ok(launched) => {
                let title = launcher
                    .catalog()
                    .find(&launched.exe_name)
                    .map(|t| t.title)
                    .unwrap_or(tool_id.as_str());
                app.set_status(format!("Launched {} (pid {})", title, launched.pid));
            }
            Err(err) => {
                app.set_status(format!("{}: {}", err.title(), tool_id));
                app.notify(Notification::from(&err));
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResolvedPaths;
    use crate::tools::ToolCatalog;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::io;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct RecordingSpawner {
        calls: RefCell<Vec<PathBuf>>,
    }

    impl Spawner for RecordingSpawner {
        fn spawn(&self, program: &Path, _working_dir: &Path) -> io::Result<u32> {
            self.calls.borrow_mut().push(program.to_path_buf());
            Ok(4242)
        }
    }

    fn launcher(tmp: &Path) -> Launcher<RecordingSpawner> {
        let paths = ResolvedPaths {
            source_dir: tmp.join("tools"),
            runtime_dir: tmp.join("runtime"),
        };
        std::fs::create_dir_all(&paths.source_dir).unwrap();
        std::fs::create_dir_all(&paths.runtime_dir).unwrap();
        Launcher::new(paths, ToolCatalog::builtin(), RecordingSpawner::default())
    }

    fn enter() -> KeyEvent {
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
    }

    #[test]
    fn test_dispatch_without_action_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let launcher = launcher(tmp.path());
        let mut app = App::new(launcher.catalog().tools().to_vec());

        dispatch(&mut app, &launcher);

        assert!(app.state().status_message.is_none());
        assert!(launcher.spawner().calls.borrow().is_empty());
    }

    #[test]
    fn test_dispatch_success_sets_status() {
        let tmp = tempfile::tempdir().unwrap();
        let launcher = launcher(tmp.path());
        std::fs::write(launcher.source_dir().join("MapleStory Quest Editor.exe"), "bin").unwrap();
        let mut app = App::new(launcher.catalog().tools().to_vec());

        app.handle_key(enter());
        dispatch(&mut app, &launcher);

        assert_eq!(
            app.state().status_message.as_deref(),
            Some("Launched Quest Editor (pid 4242)")
        );
        assert!(app.state().notification().is_none());
        assert_eq!(
            launcher.spawner().calls.borrow().as_slice(),
            [launcher.runtime_dir().join("MapleStory Quest Editor.exe")]
        );
    }

    #[test]
    fn test_dispatch_failure_opens_notification_and_recovers() {
        let tmp = tempfile::tempdir().unwrap();
        let launcher = launcher(tmp.path());
        let mut app = App::new(launcher.catalog().tools().to_vec());

        app.handle_key(enter());
        dispatch(&mut app, &launcher);

        let notification = app.state().notification().unwrap();
        assert_eq!(notification.title, "Tool Missing");
        assert!(launcher.spawner().calls.borrow().is_empty());

        // Dismiss, add the file, retry
        app.handle_key(enter());
        assert!(app.state().notification().is_none());
        std::fs::write(launcher.source_dir().join("MapleStory Quest Editor.exe"), "bin").unwrap();
        app.handle_key(enter());
        dispatch(&mut app, &launcher);

        assert!(app.state().notification().is_none());
        assert_eq!(launcher.spawner().calls.borrow().len(), 1);
    }
}
