//! Select hook: an optional external action fired after a button selection.
//!
//! The hook is fire-and-forget. Nothing it returns is observed and its
//! failures never reach the dashboard; they are only logged. Each child is
//! waited on from a short-lived thread so it does not linger as a zombie.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::config::HookConfig;
use crate::types::ButtonDescriptor;

/// Called by the button selector after the selection has been stored.
pub trait SelectHook {
    fn on_select(&self, button: &ButtonDescriptor);
}

/// Default hook: does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl SelectHook for NoopHook {
    fn on_select(&self, _button: &ButtonDescriptor) {}
}

/// Spawns `command args... <label_text>` as a background child process.
#[derive(Debug, Clone)]
pub struct CommandHook {
    command: String,
    args: Vec<String>,
}

impl CommandHook {
    pub fn new(config: &HookConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }

    /// Build the command without running it.
    fn command_for(&self, button: &ButtonDescriptor) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args)
            .arg(&button.label_text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    /// Start the child and a thread that reaps it. The thread yields the
    /// exit status, or `None` if waiting failed.
    fn spawn_reaped(&self, button: &ButtonDescriptor) -> io::Result<JoinHandle<Option<ExitStatus>>> {
        let mut child = self.command_for(button).spawn()?;
        let command = self.command.clone();
        debug!(command = %command, pid = child.id(), "select hook spawned");

        Ok(thread::spawn(move || match child.wait() {
            Ok(status) => {
                debug!(command = %command, %status, "select hook exited");
                Some(status)
            }
            Err(err) => {
                warn!(command = %command, error = %err, "failed to wait for select hook");
                None
            }
        }))
    }
}

impl SelectHook for CommandHook {
    fn on_select(&self, button: &ButtonDescriptor) {
        if let Err(err) = self.spawn_reaped(button) {
            warn!(command = %self.command, error = %err, "select hook failed to spawn");
        }
    }
}

/// Build the hook named by config, or the no-op hook.
pub fn from_config(config: Option<&HookConfig>) -> Box<dyn SelectHook> {
    match config {
        Some(hook) => Box::new(CommandHook::new(hook)),
        None => Box::new(NoopHook),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_arguments() {
        let hook = CommandHook::new(&HookConfig {
            command: "echo".into(),
            args: vec!["selected".into()],
        });
        let cmd = hook.command_for(&ButtonDescriptor::new("Button 3", "three"));

        assert_eq!(cmd.get_program(), "echo");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["selected", "three"]);
    }

    #[test]
    fn test_spawn_failure_is_swallowed() {
        let hook = CommandHook::new(&HookConfig {
            command: "/nonexistent/syncboard-hook".into(),
            args: Vec::new(),
        });
        // Must not panic or surface anything
        hook.on_select(&ButtonDescriptor::new("Button 1", "one"));
    }

    #[cfg(unix)]
    #[test]
    fn test_child_is_reaped() {
        let hook = CommandHook::new(&HookConfig {
            command: "true".into(),
            args: Vec::new(),
        });
        let reaper = hook
            .spawn_reaped(&ButtonDescriptor::new("Button 1", "one"))
            .unwrap();

        let status = reaper.join().unwrap();
        assert!(status.is_some_and(|s| s.success()));
    }

    #[test]
    fn test_from_config() {
        // Both variants are usable as trait objects
        from_config(None).on_select(&ButtonDescriptor::placeholder());
        let _ = from_config(Some(&HookConfig {
            command: "true".into(),
            args: Vec::new(),
        }));
    }
}
