use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::browser::extractor::Extractor;
use crate::error::ReconError;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "dom-recon",
    version,
    about = "Discover automation candidates on a page and synthesize locators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: dom-recon.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

/// Where the snapshot comes from: a live page via the extractor, or a file.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct SnapshotSource {
    /// URL to render with the configured extractor
    #[arg(long)]
    pub url: Option<String>,

    /// Previously captured snapshot JSON file
    #[arg(long)]
    pub snapshot: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a page and print the discovery report as JSON
    Scan {
        #[command(flatten)]
        source: SnapshotSource,

        /// Page URL to use instead of the snapshot's own
        #[arg(long)]
        url_override: Option<String>,

        /// Append classification decisions to this JSONL file
        #[arg(long)]
        trace: Option<String>,
    },

    /// Build a page model from a saved discovery report
    Model {
        /// Discovery report JSON file
        #[arg(long)]
        report: String,

        /// Page title to record in the model
        #[arg(long)]
        title: Option<String>,
    },

    /// Scan a page and print its page model as JSON
    Recon {
        #[command(flatten)]
        source: SnapshotSource,

        /// Page URL to use instead of the snapshot's own
        #[arg(long)]
        url_override: Option<String>,

        /// Append classification decisions to this JSONL file
        #[arg(long)]
        trace: Option<String>,
    },

    /// Print a console summary of a saved discovery report
    Summary {
        /// Discovery report JSON file
        #[arg(long)]
        report: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `dom-recon.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_command() -> String { Extractor::default().command }
fn default_args() -> Vec<String> { Extractor::default().args }
fn default_true() -> bool { true }

// ============================================================================
// Config File Loading
// ============================================================================

pub const DEFAULT_CONFIG_PATH: &str = "dom-recon.yaml";

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                let err = ReconError::Yaml {
                    context: config_path.to_string(),
                    source: e,
                };
                warn!(error = %err, "malformed config file, using defaults");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

pub fn build_extractor(config: &AppConfig) -> Extractor {
    Extractor {
        command: config.extractor.command.clone(),
        args: config.extractor.args.clone(),
    }
}

/// CLI flag wins over the config file.
pub fn resolve_trace_path(cli_trace: Option<&str>, config: &AppConfig) -> Option<String> {
    cli_trace
        .map(str::to_string)
        .or_else(|| config.trace.path.clone())
}
