use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::browser::extractor::{extract_snapshot, load_snapshot};
use crate::cli::config::{AppConfig, SnapshotSource, build_extractor, resolve_trace_path};
use crate::error::ReconError;
use crate::model::builder::build_model;
use crate::recon::assembler::discover_traced;
use crate::recon::recon_model::DiscoveryReport;
use crate::report::console::format_discovery_summary;
use crate::trace::logger::TraceLogger;

// ============================================================================
// scan subcommand
// ============================================================================

pub fn cmd_scan(
    source: &SnapshotSource,
    url_override: Option<&str>,
    trace: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (report, _title) = scan(source, url_override, trace, config)?;
    println!("{}", to_json(&report, config.output.pretty)?);
    Ok(())
}

/// Obtain a snapshot and run discovery over it.
///
/// Returns the report together with the page title the snapshot carried.
pub fn scan(
    source: &SnapshotSource,
    url_override: Option<&str>,
    trace: Option<&str>,
    config: &AppConfig,
) -> Result<(DiscoveryReport, Option<String>), ReconError> {
    let snapshot = match (&source.url, &source.snapshot) {
        (Some(url), _) => extract_snapshot(&build_extractor(config), url)?,
        (None, Some(path)) => load_snapshot(path)?,
        (None, None) => {
            return Err(ReconError::InvalidSnapshot(
                "no snapshot source given (use --url or --snapshot)".into(),
            ));
        }
    };

    let url = url_override
        .map(str::to_string)
        .or_else(|| snapshot.url.clone())
        .or_else(|| source.url.clone())
        .ok_or_else(|| {
            ReconError::InvalidSnapshot("snapshot has no url; pass --url-override".into())
        })?;

    let tracer = match resolve_trace_path(trace, config) {
        Some(path) => TraceLogger::new(&path),
        None => TraceLogger::disabled(),
    };

    let report = discover_traced(&snapshot, &url, Utc::now(), &tracer);
    info!(url = %report.url, elements = report.elements.len(), "scan finished");

    Ok((report, snapshot.title.clone()))
}

// ============================================================================
// model subcommand
// ============================================================================

pub fn cmd_model(
    report_path: &str,
    title: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load_report(report_path)?;
    let model = build_model(&report, title)?;
    println!("{}", to_json(&model, config.output.pretty)?);
    Ok(())
}

// ============================================================================
// recon subcommand
// ============================================================================

pub fn cmd_recon(
    source: &SnapshotSource,
    url_override: Option<&str>,
    trace: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (report, title) = scan(source, url_override, trace, config)?;
    let model = build_model(&report, title.as_deref())?;
    println!("{}", to_json(&model, config.output.pretty)?);
    Ok(())
}

// ============================================================================
// summary subcommand
// ============================================================================

pub fn cmd_summary(report_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let report = load_report(report_path)?;
    print!("{}", format_discovery_summary(&report));
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Read a discovery report from disk and check its counts invariant.
pub fn load_report(path: &str) -> Result<DiscoveryReport, ReconError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReconError::Io {
        path: path.to_string(),
        source: e,
    })?;

    let report: DiscoveryReport =
        serde_json::from_str(&content).map_err(|e| ReconError::Json {
            context: path.to_string(),
            source: e,
        })?;

    report.validate()?;
    Ok(report)
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, ReconError> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    result.map_err(|e| ReconError::Json {
        context: "output".into(),
        source: e,
    })
}
