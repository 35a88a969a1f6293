use crate::snapshot::view::DomView;

/// Attributes checked for a test id, in priority order.
pub const TEST_ID_ATTRIBUTES: [&str; 3] = ["data-testid", "data-test", "data-test-id"];

/// First non-empty test-id attribute value.
pub fn test_id_of<V: DomView>(view: &V, node: V::Id) -> Option<&str> {
    TEST_ID_ATTRIBUTES
        .iter()
        .filter_map(|attr| view.attribute(node, attr))
        .find(|v| !v.is_empty())
}

/// Backslash-escape the characters that break an attribute or id selector.
pub fn escape_css_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '"' | '\\' | '.' | '#' | ':' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Best-effort CSS selector, ranked by stability. Not guaranteed unique.
pub fn best_css<V: DomView>(view: &V, node: V::Id) -> String {
    let tag = view.tag_name(node);

    if let Some(test_id) = test_id_of(view, node) {
        let value = escape_css_value(test_id);
        return TEST_ID_ATTRIBUTES
            .iter()
            .map(|attr| format!("[{}=\"{}\"]", attr, value))
            .collect::<Vec<_>>()
            .join(", ");
    }

    if let Some(id) = non_empty_attr(view, node, "id") {
        return format!("#{}", escape_css_value(id));
    }

    for attr in ["name", "aria-label"] {
        if let Some(value) = non_empty_attr(view, node, attr) {
            return format!("{}[{}=\"{}\"]", tag, attr, escape_css_value(value));
        }
    }

    tag.to_string()
}

/// XPath for a node: id-anchored when possible, positional otherwise.
///
/// The positional form walks to the root, indexing each step among
/// same-tag siblings (1-based). It breaks as soon as the DOM shifts, which
/// is why it ranks last among locator hints.
pub fn xpath_for<V: DomView>(view: &V, node: V::Id) -> String {
    if let Some(id) = non_empty_attr(view, node, "id") {
        if !id.contains('"') {
            return format!("//*[@id=\"{}\"]", id);
        }
        if !id.contains('\'') {
            return format!("//*[@id='{}']", id);
        }
    }

    positional_xpath(view, node)
}

fn positional_xpath<V: DomView>(view: &V, node: V::Id) -> String {
    let mut steps = Vec::new();
    let mut current = Some(node);

    while let Some(n) = current {
        let tag = view.tag_name(n);
        let parent = view.parent(n);

        let index = match parent {
            Some(p) => {
                1 + view
                    .children(p)
                    .iter()
                    .take_while(|&&sibling| sibling != n)
                    .filter(|&&sibling| view.tag_name(sibling) == tag)
                    .count()
            }
            None => 1,
        };

        steps.push(format!("/{}[{}]", tag, index));
        current = parent;
    }

    steps.reverse();
    steps.concat()
}

fn non_empty_attr<'a, V: DomView>(view: &'a V, node: V::Id, name: &str) -> Option<&'a str> {
    view.attribute(node, name).filter(|v| !v.is_empty())
}
