use std::process::Command;

use tracing::{debug, warn};

use crate::error::ReconError;
use crate::snapshot::snapshot_model::DomSnapshot;

/// External program that renders a page and prints its snapshot as JSON.
///
/// Invoked as `<command> <args...> <url>`; stdout must be a single snapshot
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extractor {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            command: "node".to_string(),
            args: vec!["extract-snapshot.js".to_string()],
        }
    }
}

impl Extractor {
    fn display(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Run the extractor against `url` and wait for the complete snapshot.
pub fn extract_snapshot(extractor: &Extractor, url: &str) -> Result<DomSnapshot, ReconError> {
    debug!(command = %extractor.display(), url, "running extractor");

    let output = Command::new(&extractor.command)
        .args(&extractor.args)
        .arg(url)
        .output()
        .map_err(|e| ReconError::ExtractorSpawn {
            command: extractor.display(),
            source: e,
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        warn!(command = %extractor.command, "extractor stderr: {}", stderr.trim());
    }

    if !output.status.success() {
        return Err(ReconError::ExtractorFailed {
            command: extractor.display(),
            status: output.status,
            stderr: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_snapshot(&stdout, "extractor output")
}

/// Read a previously captured snapshot from disk.
pub fn load_snapshot(path: &str) -> Result<DomSnapshot, ReconError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReconError::Io {
        path: path.to_string(),
        source: e,
    })?;
    parse_snapshot(&content, path)
}

pub fn parse_snapshot(json: &str, context: &str) -> Result<DomSnapshot, ReconError> {
    serde_json::from_str(json.trim()).map_err(|e| ReconError::Json {
        context: context.to_string(),
        source: e,
    })
}
