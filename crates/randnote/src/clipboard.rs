use anyhow::{anyhow, bail, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses wl-copy, xclip or xsel, whichever is installed
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let candidates = clipboard_commands();
    if candidates.is_empty() {
        bail!("Clipboard not supported on this platform");
    }

    let mut last_error = None;
    for candidate in candidates {
        let spawned = Command::new(candidate.program)
            .args(candidate.args)
            .stdin(Stdio::piped())
            .spawn();
        // A tool can be installed but unusable (wl-copy outside Wayland), so fall through.
        let outcome = match spawned {
            Ok(child) => feed(child, candidate.program, text),
            Err(e) => Err(anyhow!("Failed to spawn {}: {}", candidate.program, e)),
        };
        match outcome {
            Ok(()) => return Ok(()),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error
        .unwrap_or_else(|| anyhow!("No clipboard command found"))
        .context("Install a clipboard tool (pbcopy, wl-copy, xclip or xsel)"))
}

fn feed(mut child: std::process::Child, program: &str, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", program))?;
    }
    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", program))?;
    if !status.success() {
        bail!("{} exited with error", program);
    }
    Ok(())
}

struct ClipboardCommand {
    program: &'static str,
    args: &'static [&'static str],
}

const fn cmd(program: &'static str, args: &'static [&'static str]) -> ClipboardCommand {
    ClipboardCommand { program, args }
}

const MACOS: &[ClipboardCommand] = &[cmd("pbcopy", &[])];
const WINDOWS: &[ClipboardCommand] = &[cmd("clip", &[])];
const LINUX: &[ClipboardCommand] = &[
    cmd("wl-copy", &[]),
    cmd("xclip", &["-selection", "clipboard"]),
    cmd("xsel", &["--clipboard", "--input"]),
];

fn clipboard_commands() -> &'static [ClipboardCommand] {
    if cfg!(target_os = "macos") {
        MACOS
    } else if cfg!(target_os = "windows") {
        WINDOWS
    } else if cfg!(target_os = "linux") {
        LINUX
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_platform_has_a_command() {
        if cfg!(any(target_os = "macos", target_os = "linux", target_os = "windows")) {
            assert!(!clipboard_commands().is_empty());
        }
    }
}
