//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chrono::{Local, TimeZone};
use colored::*;
use veritas_domain::{ChatMessage, EvaluationResponse, MessageContent, Source};
use veritas_sdk::HealthStatus;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a chat log entry.
    pub fn format_message(&self, message: &ChatMessage) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_message_json(message),
            OutputFormat::Table => Ok(self.format_message_text(message)),
        }
    }

    /// Format a standalone evaluation result.
    pub fn format_evaluation(&self, result: &EvaluationResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_evaluation_text(result)),
        }
    }

    /// Format service health.
    pub fn format_health(&self, url: &str, health: &HealthStatus) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "url": url,
                "status": health.status,
                "version": health.version,
            }))?),
            OutputFormat::Table => Ok(self.success(&format!(
                "{} is {} (version {})",
                url, health.status, health.version
            ))),
        }
    }

    fn format_message_json(&self, message: &ChatMessage) -> Result<String> {
        let content = match &message.content {
            MessageContent::Question(text)
            | MessageContent::Error(text)
            | MessageContent::Verification(text) => serde_json::Value::String(text.clone()),
            MessageContent::Response(result) => serde_json::to_value(result)?,
        };

        Ok(serde_json::to_string(&serde_json::json!({
            "id": message.id.to_string(),
            "type": message.kind().as_str(),
            "content": content,
            "timestamp": message.timestamp,
        }))?)
    }

    fn format_message_text(&self, message: &ChatMessage) -> String {
        let time = format_timestamp(message.timestamp);

        match &message.content {
            MessageContent::Question(text) => {
                format!("{} {}", self.colorize(&format!("[{}] You:", time), "blue"), text)
            }
            MessageContent::Response(result) => {
                format!("{}\n{}", self.format_evaluation_text(result), self.dim(&time))
            }
            MessageContent::Error(text) => {
                format!("{}\n{}", self.colorize(text, "red"), self.dim(&time))
            }
            MessageContent::Verification(url) => self.colorize(
                &format!("✓ Verified on Blockchain - View Transaction: {}", url),
                "green",
            ),
        }
    }

    fn format_evaluation_text(&self, result: &EvaluationResponse) -> String {
        let mut lines = Vec::new();

        let answer = if result.answer {
            self.colorize("Answer: True", "green")
        } else {
            self.colorize("Answer: False", "red")
        };
        lines.push(format!("{}  [{}]", answer, result.status));

        if !result.sources.is_empty() {
            let count = result.sources.len();
            lines.push(self.colorize(
                &format!("Sources ({} source{}):", count, if count > 1 { "s" } else { "" }),
                "cyan",
            ));
            lines.push(sources_table(&result.sources));
        }

        lines.push(format!("Question: {}", result.question));
        lines.push(format!("Hash: {}", result.hash));
        lines.push(format!("Transaction: {}", result.tx_hash));
        lines.push(format!("Verify on Etherscan: {}", result.explorer_url));

        lines.join("\n")
    }

    /// Format the in-flight indicator.
    pub fn loading(&self) -> String {
        self.colorize("… Evaluating question...", "yellow")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn dim(&self, text: &str) -> String {
        if self.color_enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn sources_table(sources: &[Source]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Title", "URL"]);

    for (index, source) in sources.iter().enumerate() {
        builder.push_record([(index + 1).to_string(), source.title.clone(), source.url.clone()]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Render a millisecond Unix timestamp as local `HH:MM`.
pub fn format_timestamp(millis: u64) -> String {
    i64::try_from(millis)
        .ok()
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
