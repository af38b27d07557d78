//! Output Rendering
//!
//! Renders the end-of-run summary for every host, as text or JSON.

use serde::Serialize;

use crate::domain::entities::DeployReport;
use crate::error::SessionError;

/// Every host deployed and no command failed
pub const EXIT_OK: u8 = 0;
/// At least one command failed on a reachable host
pub const EXIT_COMMAND_FAILED: u8 = 1;
/// Bad input or unusable config; nothing was deployed
pub const EXIT_USAGE: u8 = 2;
/// At least one host could not be reached
pub const EXIT_UNREACHABLE: u8 = 3;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// What happened on one host
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum HostOutcome {
    /// A session was opened and all phases ran; commands may still have failed
    Deployed(DeployReport),
    /// No session could be opened; nothing was issued
    Unreachable { host: String, error: String },
}

impl HostOutcome {
    pub fn unreachable(host: &str, error: &SessionError) -> Self {
        Self::Unreachable {
            host: host.to_string(),
            error: error.to_string(),
        }
    }

    pub fn host(&self) -> &str {
        match self {
            Self::Deployed(report) => &report.host,
            Self::Unreachable { host, .. } => host,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Deployed(report) if report.is_success())
    }
}

/// Process exit status for a finished run. Unreachable hosts outrank
/// failed commands.
pub fn exit_code(outcomes: &[HostOutcome]) -> u8 {
    if outcomes
        .iter()
        .any(|o| matches!(o, HostOutcome::Unreachable { .. }))
    {
        EXIT_UNREACHABLE
    } else if outcomes.iter().all(HostOutcome::is_success) {
        EXIT_OK
    } else {
        EXIT_COMMAND_FAILED
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    item: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            item: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            item: "->",
        }
    }
}

/// Trait for rendering deploy summaries
pub trait SummaryRenderer {
    fn render(&self, outcomes: &[HostOutcome]) -> String;
}

/// Text renderer for deploy summaries
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    /// List every issued command, not only failures
    pub list_commands: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            list_commands: false,
        }
    }
}

impl TextRenderer {
    fn render_report(&self, out: &mut String, report: &DeployReport, icons: &Icons) {
        let release = report
            .release
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());

        if report.is_success() {
            out.push_str(&format!(
                "{} {}: deployed {} of {} as release {} ({} commands)\n",
                icons.check,
                report.host,
                report.branch,
                report.app,
                release,
                report.command_count()
            ));
        } else {
            out.push_str(&format!(
                "{} {}: {} of {} commands failed deploying {} of {} (release {})\n",
                icons.cross,
                report.host,
                report.failure_count(),
                report.command_count(),
                report.branch,
                report.app,
                release
            ));
        }

        for phase in &report.phases {
            for result in &phase.results {
                if self.list_commands {
                    let mark = if result.is_success() {
                        icons.item
                    } else {
                        icons.cross
                    };
                    out.push_str(&format!("    {} [{}] {}\n", mark, phase.phase, result.command));
                } else if let Some(error) = &result.error {
                    out.push_str(&format!(
                        "    {} [{}] {}: {}\n",
                        icons.cross, phase.phase, result.command, error
                    ));
                }
            }
        }
    }
}

impl SummaryRenderer for TextRenderer {
    fn render(&self, outcomes: &[HostOutcome]) -> String {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };

        let mut out = String::new();
        for outcome in outcomes {
            match outcome {
                HostOutcome::Deployed(report) => self.render_report(&mut out, report, &icons),
                HostOutcome::Unreachable { host, error } => {
                    out.push_str(&format!("{} {}: {}\n", icons.cross, host, error));
                }
            }
        }
        out
    }
}

/// JSON renderer for deploy summaries
pub struct JsonRenderer;

impl SummaryRenderer for JsonRenderer {
    fn render(&self, outcomes: &[HostOutcome]) -> String {
        let json = serde_json::json!({
            "success": outcomes.iter().all(HostOutcome::is_success),
            "hosts": outcomes,
        });
        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    unicode: bool,
    list_commands: bool,
) -> Box<dyn SummaryRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer {
            unicode,
            list_commands,
        }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
