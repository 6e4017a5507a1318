use clap::ValueEnum;
use colored::Colorize;

use crate::application::use_cases::ResolvedWebUrl;
use crate::common::result::BrowseResult;
use crate::domain::entities::remote::Remote;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Render a resolved URL. Text output is the bare URL so it can be piped.
pub fn render_resolved(resolved: &ResolvedWebUrl, format: OutputFormat) -> BrowseResult<String> {
    match format {
        OutputFormat::Text => Ok(resolved.web_url.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(resolved)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(resolved)?.trim_end().to_string()),
    }
}

/// Render the remote listing, one entry per line in text mode
pub fn render_remotes(remotes: &[Remote], format: OutputFormat) -> BrowseResult<String> {
    match format {
        OutputFormat::Text => Ok(remotes
            .iter()
            .map(|remote| {
                format!(
                    "{}\t{} ({})",
                    remote.name.bold(),
                    remote.url,
                    remote.direction.label().dimmed()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(remotes)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(remotes)?.trim_end().to_string()),
    }
}

/// Format an error line for stderr
pub fn error_line(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}
