use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::recon::classifier::{candidacy, disabled_state};
use crate::recon::naming::{accessible_name, find_associated_label_text, normalize_text};
use crate::recon::recon_model::{DiscoveredElement, DiscoveryReport, SemanticType};
use crate::recon::selector::{best_css, test_id_of, xpath_for};
use crate::recon::type_normalizer::{TypeSignals, normalize_type};
use crate::snapshot::view::DomView;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// Scan a snapshot and produce the raw discovery report.
pub fn discover<V: DomView>(view: &V, url: &str, scanned_at: DateTime<Utc>) -> DiscoveryReport {
    discover_traced(view, url, scanned_at, &TraceLogger::disabled())
}

/// Same as [`discover`], additionally recording every decision to `tracer`.
pub fn discover_traced<V: DomView>(
    view: &V,
    url: &str,
    scanned_at: DateTime<Utc>,
    tracer: &TraceLogger,
) -> DiscoveryReport {
    let nodes = view.document_order();
    let mut elements = Vec::new();

    for (index, node) in nodes.iter().copied().enumerate() {
        let tag = view.tag_name(node);

        match candidacy(view, node) {
            Ok(()) => {
                if tracer.is_enabled() {
                    tracer.log(&TraceEvent::candidate(index, tag));
                }
                elements.push(describe(view, node));
            }
            Err(rejection) => {
                trace!(index, tag, reason = %rejection, "node rejected");
                if tracer.is_enabled() {
                    tracer.log(&TraceEvent::rejected(index, tag, rejection));
                }
            }
        }
    }

    let report = DiscoveryReport::new(url, scanned_at, elements);

    debug!(
        url,
        nodes = nodes.len(),
        candidates = report.elements.len(),
        "discovery complete"
    );

    report
}

/// Build the raw record for a single candidate node.
pub fn describe<V: DomView>(view: &V, node: V::Id) -> DiscoveredElement {
    let signals = TypeSignals::read(view, node);
    let semantic_type = normalize_type(&signals);
    let flags = disabled_state(view, node);

    let attr = |name: &str| {
        view.attribute(node, name)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    DiscoveredElement {
        semantic_type,
        tag_name: signals.tag.to_string(),
        role: attr("role"),
        accessible_name: accessible_name(view, node),
        label_text: find_associated_label_text(view, node),
        test_id: test_id_of(view, node).map(str::to_string),
        text: view.inner_text(node).and_then(normalize_text),
        id: attr("id"),
        name: attr("name"),
        href: if semantic_type == SemanticType::Link {
            attr("href")
        } else {
            None
        },
        placeholder: attr("placeholder"),
        aria_label: attr("aria-label"),
        disabled: flags.disabled,
        aria_disabled: flags.aria_disabled,
        input_type: attr("type"),
        value: control_value(view, node),
        css: Some(best_css(view, node)),
        xpath: Some(xpath_for(view, node)),
    }
}

/// Current value of a form control; password values are never captured.
fn control_value<V: DomView>(view: &V, node: V::Id) -> Option<String> {
    if !matches!(view.tag_name(node), "input" | "textarea" | "select") {
        return None;
    }

    let is_password = view
        .attribute(node, "type")
        .is_some_and(|t| t.trim().eq_ignore_ascii_case("password"));
    if is_password {
        return None;
    }

    view.value_property(node)
        .or_else(|| view.attribute(node, "value"))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
