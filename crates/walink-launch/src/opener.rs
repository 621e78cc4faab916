use std::io;
use std::process::{Command, Stdio};

use tracing::debug;
use url::Url;

use crate::{LaunchError, Result};

/// Asks the OS to open a URL, optionally restricted to one application.
pub trait Opener {
    fn open(&self, url: &Url, handler: Option<&str>) -> Result<()>;

    /// Like `open`, but any failure is reported as `false`.
    fn try_open(&self, url: &Url, handler: Option<&str>) -> bool {
        match self.open(url, handler) {
            Ok(()) => true,
            Err(err) => {
                debug!(handler = handler.unwrap_or("<any>"), error = %err, "open failed");
                false
            }
        }
    }
}

/// Opens URLs through the platform's launcher command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, url: &Url, handler: Option<&str>) -> Result<()> {
        let cmd = launch_command(url, handler)?;
        run(cmd, handler)
    }
}

#[cfg(target_os = "macos")]
fn launch_command(url: &Url, handler: Option<&str>) -> Result<Command> {
    let mut cmd = Command::new("open");
    if let Some(handler) = handler {
        cmd.arg("-b").arg(handler);
    }
    cmd.arg(url.as_str());
    Ok(cmd)
}

#[cfg(target_os = "windows")]
fn launch_command(url: &Url, handler: Option<&str>) -> Result<Command> {
    if let Some(handler) = handler {
        return Err(LaunchError::Unavailable(format!(
            "cannot restrict a launch to {handler} on Windows"
        )));
    }
    let mut cmd = Command::new("rundll32");
    cmd.arg("url.dll,FileProtocolHandler").arg(url.as_str());
    Ok(cmd)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launch_command(url: &Url, handler: Option<&str>) -> Result<Command> {
    let mut cmd = match handler {
        Some(handler) => {
            let mut cmd = Command::new("gtk-launch");
            cmd.arg(handler);
            cmd
        }
        None => Command::new("xdg-open"),
    };
    cmd.arg(url.as_str());
    Ok(cmd)
}

fn run(mut cmd: Command, handler: Option<&str>) -> Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    debug!(program = %program, "running launcher");

    let output = match cmd.stdin(Stdio::null()).output() {
        Ok(output) => output,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(LaunchError::HandlerNotFound(format!(
                "{program} is not installed"
            )));
        }
        Err(err) => return Err(err.into()),
    };

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = if stderr.trim().is_empty() {
        format!("{program} exited with status {}", output.status)
    } else {
        stderr.trim().to_string()
    };
    match handler {
        Some(handler) => Err(LaunchError::HandlerNotFound(format!("{handler}: {message}"))),
        None => Err(LaunchError::Command(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Opener};
    use crate::{LaunchError, Result};
    use std::process::Command;
    use url::Url;

    struct Failing;

    impl Opener for Failing {
        fn open(&self, _url: &Url, _handler: Option<&str>) -> Result<()> {
            Err(LaunchError::HandlerNotFound("com.example".to_string()))
        }
    }

    #[test]
    fn try_open_collapses_errors_to_false() {
        let url = Url::parse("https://wa.me/15551234567?text=Hi").unwrap();
        assert!(!Failing.try_open(&url, Some("com.example")));
        assert!(!Failing.try_open(&url, None));
    }

    #[test]
    fn run_reports_missing_launcher_as_handler_not_found() {
        let cmd = Command::new("walink-launcher-that-does-not-exist");
        let err = run(cmd, None).unwrap_err();
        assert!(matches!(err, LaunchError::HandlerNotFound(_)));
        assert!(err.to_string().contains("is not installed"));
    }

    #[cfg(unix)]
    #[test]
    fn run_maps_exit_status() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "exit 0"]);
        assert!(run(cmd, None).is_ok());

        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo 'no such app' >&2; exit 1"]);
        match run(cmd, Some("com.example")).unwrap_err() {
            LaunchError::HandlerNotFound(message) => {
                assert_eq!(message, "com.example: no such app");
            }
            other => panic!("unexpected error: {other}"),
        }

        let mut cmd = Command::new("sh");
        cmd.args(["-c", "exit 4"]);
        match run(cmd, None).unwrap_err() {
            LaunchError::Command(message) => assert!(message.contains("sh exited")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
