use tracing::debug;
use url::Url;

use crate::error::ReconError;
use crate::model::page_model::{ElementFlags, Kind, LocatorHint, NormalizedElement, PageModel};
use crate::recon::naming::normalize_text;
use crate::recon::recon_model::{DiscoveredElement, DiscoveryReport, SemanticType};

/// Longest slug embedded in a stable identifier.
pub const MAX_SLUG_CHARS: usize = 50;

/// Transform a discovery report into a page model.
///
/// Pure and deterministic: the same report and title always produce the
/// same model. Fails only when the report URL cannot be parsed.
pub fn build_model(report: &DiscoveryReport, title: Option<&str>) -> Result<PageModel, ReconError> {
    let domain = derive_domain(&report.url)?;

    let elements: Vec<NormalizedElement> = report
        .elements
        .iter()
        .enumerate()
        .map(|(index, el)| normalize_element(el, index))
        .collect();

    debug!(url = %report.url, domain = %domain, elements = elements.len(), "page model built");

    Ok(PageModel::new(
        report.url.clone(),
        domain,
        report.scanned_at,
        title.and_then(normalize_text),
        elements,
    ))
}

pub fn normalize_element(el: &DiscoveredElement, index: usize) -> NormalizedElement {
    NormalizedElement {
        id: stable_id(el, index),
        kind: kind_for(el.semantic_type),
        name: derive_name(el),
        tag_name: present(&el.tag_name).map(str::to_string),
        role: el.role.as_deref().and_then(present).map(str::to_string),
        href: el.href.as_deref().and_then(present).map(str::to_string),
        locators: assemble_locators(el),
        flags: ElementFlags::from_bools(el.disabled, el.aria_disabled),
    }
}

pub fn kind_for(semantic_type: SemanticType) -> Kind {
    match semantic_type {
        SemanticType::Input => Kind::Textbox,
        SemanticType::Button => Kind::Button,
        SemanticType::Link => Kind::Link,
        SemanticType::Select => Kind::Select,
        SemanticType::Textarea => Kind::Textarea,
        SemanticType::Other => Kind::Other,
    }
}

/// Display name: first present of accessible name, label, aria-label,
/// name attribute, id, visible text.
pub fn derive_name(el: &DiscoveredElement) -> Option<String> {
    [
        &el.accessible_name,
        &el.label_text,
        &el.aria_label,
        &el.name,
        &el.id,
        &el.text,
    ]
    .into_iter()
    .find_map(|candidate| candidate.as_deref().and_then(normalize_text))
}

/// Locator hints in fixed preference order; hints without a value are dropped.
pub fn assemble_locators(el: &DiscoveredElement) -> Vec<LocatorHint> {
    let value_of = |field: &Option<String>| {
        field
            .as_deref()
            .and_then(present)
            .map(str::to_string)
    };

    let mut hints = Vec::new();

    if let Some(value) = value_of(&el.test_id) {
        hints.push(LocatorHint::TestId { value });
    }
    if let Some(role) = value_of(&el.role) {
        hints.push(LocatorHint::Role {
            role,
            name: value_of(&el.accessible_name),
        });
    }
    if let Some(value) = value_of(&el.label_text) {
        hints.push(LocatorHint::Label { value });
    }
    if let Some(value) = value_of(&el.placeholder) {
        hints.push(LocatorHint::Placeholder { value });
    }
    if let Some(value) = value_of(&el.css) {
        hints.push(LocatorHint::Css { value });
    }
    if let Some(value) = value_of(&el.xpath) {
        hints.push(LocatorHint::Xpath { value });
    }

    hints
}

/// `<semantic type>-<slug>-<index>`; unique within one model.
pub fn stable_id(el: &DiscoveredElement, index: usize) -> String {
    let source = [
        el.test_id.as_deref(),
        el.id.as_deref(),
        el.name.as_deref(),
        el.aria_label.as_deref(),
        el.text.as_deref(),
        Some(el.tag_name.as_str()),
    ]
    .into_iter()
    .flatten()
    .find(|s| !s.trim().is_empty());

    let slug = source.map(slugify).unwrap_or_default();
    let slug = if slug.is_empty() { "unnamed".to_string() } else { slug };

    format!("{}-{}-{}", el.semantic_type, slug, index)
}

/// Lowercase ASCII slug: non-alphanumeric runs become one hyphen, no
/// leading/trailing hyphens, at most [`MAX_SLUG_CHARS`] characters.
pub fn slugify(raw: &str) -> String {
    let normalized = normalize_text(raw).unwrap_or_default().to_lowercase();

    let mut slug = String::with_capacity(normalized.len());
    let mut pending_hyphen = false;
    for c in normalized.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    let capped: String = slug.chars().take(MAX_SLUG_CHARS).collect();
    capped.trim_end_matches('-').to_string()
}

/// Hostname of `url` with a single literal leading `www.` removed.
pub fn derive_domain(url: &str) -> Result<String, ReconError> {
    let parsed = Url::parse(url).map_err(|e| ReconError::InvalidUrl {
        url: url.to_string(),
        source: e,
    })?;

    let host = parsed.host_str().unwrap_or_default();
    Ok(host.strip_prefix("www.").unwrap_or(host).to_string())
}

fn present(value: &str) -> Option<&str> {
    if value.trim().is_empty() { None } else { Some(value) }
}
