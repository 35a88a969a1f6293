use crate::snapshot::view::DomView;

/// Longest text kept for names, labels and visible text.
pub const MAX_TEXT_CHARS: usize = 200;

/// Trim, collapse whitespace runs and cap at [`MAX_TEXT_CHARS`].
///
/// Empty results become `None`. Idempotent.
pub fn normalize_text(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(MAX_TEXT_CHARS).collect();
    let trimmed = truncated.trim_end();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Text of the `<label for=id>` pointing at the node, else of the nearest
/// enclosing `<label>`.
pub fn find_associated_label_text<V: DomView>(view: &V, node: V::Id) -> Option<String> {
    let by_for = view
        .attribute(node, "id")
        .filter(|id| !id.is_empty())
        .and_then(|id| view.label_for(id))
        .and_then(|label| view.inner_text(label))
        .and_then(normalize_text);

    by_for.or_else(|| {
        view.closest_ancestor(node, "label")
            .and_then(|label| view.inner_text(label))
            .and_then(normalize_text)
    })
}

/// Approximate accessible name; first non-empty source wins.
pub fn accessible_name<V: DomView>(view: &V, node: V::Id) -> Option<String> {
    if let Some(name) = view.attribute(node, "aria-label").and_then(normalize_text) {
        return Some(name);
    }

    if let Some(label) = find_associated_label_text(view, node) {
        return Some(label);
    }

    if is_button_like_input(view, node) {
        if let Some(value) = view.attribute(node, "value").and_then(normalize_text) {
            return Some(value);
        }
    }

    if let Some(alt) = view.attribute(node, "alt").and_then(normalize_text) {
        return Some(alt);
    }

    view.inner_text(node).and_then(normalize_text)
}

fn is_button_like_input<V: DomView>(view: &V, node: V::Id) -> bool {
    view.tag_name(node) == "input"
        && view
            .attribute(node, "type")
            .map(|t| t.trim().to_ascii_lowercase())
            .is_some_and(|t| matches!(t.as_str(), "submit" | "button" | "reset"))
}
