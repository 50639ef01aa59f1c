use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Open `url` in the default browser. Blank URLs are ignored and report `false`.
pub fn open_url(url: &str) -> Result<bool> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(false);
    }
    opener_command(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to open URL {url}"))?;
    tracing::info!(%url, "opened in browser");
    Ok(true)
}

#[cfg(windows)]
fn opener_command(url: &str) -> Command {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x08000000;

    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url])
        .creation_flags(CREATE_NO_WINDOW);
    cmd
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(not(any(windows, target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_url_does_nothing() {
        assert!(!open_url("").unwrap());
        assert!(!open_url("   ").unwrap());
    }
}
