use crate::model::page_model::{LocatorHint, PageModel};
use crate::recon::recon_model::DiscoveryReport;

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format per-type counts of a discovery report.
///
/// Produces output like:
/// ```text
/// === Discovery: https://example.com/login ===
/// Scanned at 2026-01-01T00:00:00+00:00
///
///   button      2
///   link        1
///   input       2
///   select      0
///   textarea    0
///   other       0
///
/// === 5 elements ===
/// ```
pub fn format_discovery_summary(report: &DiscoveryReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Discovery: {} ===\n", report.url));
    out.push_str(&format!("Scanned at {}\n\n", report.scanned_at.to_rfc3339()));

    for (semantic_type, count) in report.counts.iter() {
        out.push_str(&format!("  {:<10}{:>3}\n", semantic_type.as_str(), count));
    }

    out.push_str(&format!("\n=== {} elements ===\n", report.elements.len()));
    out
}

/// Format one line per model element: id, kind and its preferred locator.
pub fn format_model_summary(model: &PageModel) -> String {
    let mut out = String::new();

    match model.title() {
        Some(title) => {
            out.push_str(&format!("=== Page Model: {} — {} ===\n\n", model.domain(), title))
        }
        None => out.push_str(&format!("=== Page Model: {} ===\n\n", model.domain())),
    }

    for el in model.elements() {
        let best = el
            .locators
            .first()
            .map(format_hint)
            .unwrap_or_else(|| "(no locator)".to_string());
        out.push_str(&format!("  {:<40} {:<9} {}\n", el.id, el.kind.as_str(), best));
    }

    out.push_str(&format!("\n=== {} elements ===\n", model.elements().len()));
    out
}

pub fn format_hint(hint: &LocatorHint) -> String {
    match hint {
        LocatorHint::Role { role, name: Some(name) } => format!("role={} name=\"{}\"", role, name),
        LocatorHint::Role { role, name: None } => format!("role={}", role),
        LocatorHint::TestId { value }
        | LocatorHint::Label { value }
        | LocatorHint::Placeholder { value }
        | LocatorHint::Css { value }
        | LocatorHint::Xpath { value } => format!("{}={}", hint.strategy(), value),
    }
}
