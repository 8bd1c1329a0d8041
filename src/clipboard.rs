/*!
 * Clipboard support for mergecode
 *
 * Pipes the merged text into the first clipboard command available on the
 * system, so it can be pasted straight into a prompt.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Clipboard commands, in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Tmux,
    Wayland,
    Xsel,
    Xclip,
    MacOS,
    Windows,
    Termux,
}

impl Backend {
    fn program(self) -> &'static str {
        match self {
            Self::Tmux => "tmux",
            Self::Wayland => "wl-copy",
            Self::Xsel => "xsel",
            Self::Xclip => "xclip",
            Self::MacOS => "pbcopy",
            Self::Windows => "clip.exe",
            Self::Termux => "termux-clipboard-set",
        }
    }

    fn args(self) -> &'static [&'static str] {
        match self {
            Self::Tmux => &["load-buffer", "-w", "-"],
            Self::Xsel => &["-b", "-i"],
            Self::Xclip => &["-selection", "clipboard", "-in"],
            Self::Wayland | Self::MacOS | Self::Windows | Self::Termux => &[],
        }
    }

    /// Backends worth trying on this platform
    fn candidates() -> Vec<Self> {
        let mut backends = Vec::new();
        if env::var_os("TMUX").is_some() {
            backends.push(Self::Tmux);
        }
        if cfg!(target_os = "macos") {
            backends.push(Self::MacOS);
        } else if cfg!(target_os = "windows") || env::var_os("WSL_DISTRO_NAME").is_some() {
            backends.push(Self::Windows);
        } else if cfg!(target_os = "android") {
            backends.push(Self::Termux);
        } else {
            if env::var_os("WAYLAND_DISPLAY").is_some() {
                backends.push(Self::Wayland);
            }
            backends.push(Self::Xsel);
            backends.push(Self::Xclip);
        }
        backends
    }

    fn copy(self, text: &str) -> Result<()> {
        let cmd = self.program();
        let mut child = Command::new(cmd)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::CommandFailed(format!("{}: {}", cmd, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed(format!(
                "{} exited with status: {}",
                cmd, status
            )))
        }
    }
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let backend = Backend::candidates()
        .into_iter()
        .find(|b| command_exists(b.program()))
        .ok_or(ClipboardError::NoClipboardFound)?;
    backend.copy(text)
}

/// Check whether `command` is an executable on PATH
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| is_file(&dir.join(command))))
        .unwrap_or(false)
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
