use std::io;
use std::process::{Child, Command};

use tracing::warn;

use super::UiLinkOpener;

/// Opens intel links in the system browser.
pub struct DesktopLinkOpener;

impl UiLinkOpener for DesktopLinkOpener {
    fn open_url(&self, url: &str) {
        let url = url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            warn!(url, "refusing to open non-http link");
            return;
        }
        if let Err(err) = spawn_browser(url) {
            warn!(url, error = %err, "failed to open link");
        }
    }
}

#[cfg(target_os = "macos")]
fn spawn_browser(url: &str) -> io::Result<Child> {
    Command::new("open").arg(url).spawn()
}

#[cfg(target_os = "windows")]
fn spawn_browser(url: &str) -> io::Result<Child> {
    Command::new("cmd").args(["/C", "start", "", url]).spawn()
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn spawn_browser(url: &str) -> io::Result<Child> {
    Command::new("xdg-open").arg(url).spawn()
}
