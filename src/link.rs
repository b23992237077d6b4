//! Opening external links (the recipe video) with the platform handler.

use std::process::{Child, Command};

use log::{debug, warn};

/// Hands URLs to something outside the app. Fire-and-forget: the outcome is
/// logged, never reported back to the view.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Opens links with the desktop's default handler.
///
/// If `command` is non-empty it is used instead of the platform default.
#[derive(Debug, Clone, Default)]
pub struct SystemLinkOpener {
    pub command: String,
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) {
        match spawn_opener(url, &self.command) {
            Ok(child) => {
                debug!("Opened {} (pid {})", url, child.id());
                reap(child);
            }
            Err(e) => warn!("Could not open {}: {}", url, e),
        }
    }
}

/// Wait for the opener on a detached thread so it does not linger as a zombie.
fn reap(mut child: Child) {
    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => warn!("Link opener exited with {}", status),
        Ok(_) => {}
        Err(e) => warn!("Could not wait for link opener: {}", e),
    });
}

fn spawn_opener(url: &str, command: &str) -> std::io::Result<Child> {
    if !command.is_empty() {
        return Command::new(command).arg(url).spawn();
    }

    #[cfg(target_os = "macos")]
    let child = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "linux")]
    let child = Command::new("xdg-open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let child = Command::new("cmd").args(["/C", "start", "", url]).spawn();

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    let child = Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no link opener available for this platform",
    ));

    child
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_is_swallowed() {
        let opener = SystemLinkOpener {
            command: "definitely-not-a-real-opener-binary".to_string(),
        };
        // Must not panic; the failure is only logged
        opener.open("https://www.youtube.com/watch?v=abc");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_opener_child_is_reaped() {
        let child = spawn_opener("https://example.com", "true").unwrap();
        let pid = child.id();
        reap(child);

        // An unreaped child stays in /proc as a zombie until its parent waits
        let proc_dir = std::path::PathBuf::from(format!("/proc/{}", pid));
        let mut reaped = false;
        for _ in 0..150 {
            if !proc_dir.exists() {
                reaped = true;
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert!(reaped);
    }

    #[test]
    fn test_spawn_error_surfaces_internally() {
        let result = spawn_opener("https://example.com", "definitely-not-a-real-opener-binary");
        assert!(result.is_err());
    }
}
