//! Run progress and failure reporting.
//!
//! Everything is logged through `tracing`. When running inside GitHub
//! Actions, notices and the final failure are also written as workflow
//! commands so they surface as annotations on the run. Dry runs never
//! annotate: their stdout carries the article JSON.

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Reports phase progress and the terminal failure of a run.
#[derive(Default)]
pub struct Reporter {
    annotations: Option<Mutex<Box<dyn Write + Send>>>,
}

impl Reporter {
    /// A reporter that writes workflow commands to stdout when `annotations`
    /// is set.
    pub fn new(annotations: bool) -> Self {
        if annotations {
            Self::with_writer(io::stdout())
        } else {
            Self::default()
        }
    }

    /// A reporter that writes workflow commands to `out`.
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            annotations: Some(Mutex::new(Box::new(out))),
        }
    }

    /// Annotate when `GITHUB_ACTIONS=true`, unless this is a dry run.
    pub fn from_env(dry_run: bool) -> Self {
        let github_actions = std::env::var("GITHUB_ACTIONS").ok();
        Self::new(should_annotate(github_actions.as_deref(), dry_run))
    }

    /// Whether workflow commands are emitted.
    pub fn annotations(&self) -> bool {
        self.annotations.is_some()
    }

    /// Announce a phase of the run.
    pub fn notice(&self, message: &str) {
        tracing::info!("{message}");
        self.annotate("notice", message);
    }

    /// Report the error that ended the run.
    pub fn fail(&self, message: &str) {
        tracing::error!("{message}");
        self.annotate("error", message);
    }

    fn annotate(&self, command: &str, message: &str) {
        let Some(out) = &self.annotations else {
            return;
        };
        let mut out = match out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(out, "{}", workflow_command(command, message)) {
            tracing::warn!(error = %err, "Failed to write workflow command");
        }
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("annotations", &self.annotations())
            .finish()
    }
}

fn should_annotate(github_actions: Option<&str>, dry_run: bool) -> bool {
    !dry_run && github_actions == Some("true")
}

/// Format a `::command::message` line, escaping the message.
fn workflow_command(command: &str, message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::{command}::{escaped}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer whose contents stay readable after the reporter owns it.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_workflow_command_plain() {
        assert_eq!(
            workflow_command("notice", "Parsing markdown"),
            "::notice::Parsing markdown"
        );
    }

    #[test]
    fn test_workflow_command_escapes() {
        assert_eq!(
            workflow_command("error", "100% broken\r\nsecond line"),
            "::error::100%25 broken%0D%0Asecond line"
        );
    }

    #[test]
    fn test_notice_and_fail_write_commands() {
        let buffer = SharedBuffer::default();
        let reporter = Reporter::with_writer(buffer.clone());

        reporter.notice("Parsing markdown");
        reporter.fail("README.md is missing!\ncheck the path");

        assert_eq!(
            buffer.contents(),
            "::notice::Parsing markdown\n::error::README.md is missing!%0Acheck the path\n"
        );
    }

    #[test]
    fn test_silent_reporter_writes_nothing() {
        let reporter = Reporter::default();
        assert!(!reporter.annotations());
        reporter.notice("Parsing markdown");
        reporter.fail("No API_KEY!");
    }

    #[test]
    fn test_annotation_detection() {
        assert!(should_annotate(Some("true"), false));
        assert!(!should_annotate(Some("false"), false));
        assert!(!should_annotate(None, false));
        assert!(!should_annotate(Some("true"), true));
        assert!(Reporter::new(true).annotations());
    }
}
