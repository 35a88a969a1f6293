use chrono::{DateTime, TimeZone, Utc};
use dom_recon::recon::recon_model::{DiscoveredElement, DiscoveryReport, SemanticType};
use dom_recon::snapshot::snapshot_model::{BoundingBox, ComputedStyle, DomNode, DomSnapshot};

// ============================================================================
// Snapshot builders
// ============================================================================

/// An element with a rendered, non-empty box.
pub fn visible(tag: &str) -> DomNode {
    DomNode::element(tag).with_box(BoundingBox::new(10.0, 10.0, 120.0, 24.0))
}

pub fn style(display: Option<&str>, visibility: Option<&str>, opacity: Option<&str>) -> ComputedStyle {
    ComputedStyle {
        display: display.map(str::to_string),
        visibility: visibility.map(str::to_string),
        opacity: opacity.map(str::to_string),
    }
}

pub fn snapshot(nodes: Vec<DomNode>) -> DomSnapshot {
    DomSnapshot::from_nodes(
        Some("https://www.example.com/login".into()),
        Some("Login - Example".into()),
        nodes,
    )
    .unwrap()
}

/// `html > body > node`; the node under test is always index 2.
pub fn single(node: DomNode) -> DomSnapshot {
    snapshot(vec![
        visible("html"),
        visible("body").with_parent(0),
        node.with_parent(1),
    ])
}

/// A small login page.
///
/// ```text
/// 0  html
/// 1  body
/// 2    form
/// 3      label[for=email] "Email address"
/// 4      input#email[type=email][name=email][placeholder]
/// 5      label "Password"
/// 6        input[type=password][name=password]
/// 7      input[type=submit][value="Sign in"][data-testid=login-submit]
/// 8    a[href=/forgot] "Forgot password?"
/// 9    div "Banner"                       (plain container)
/// 10   div[role=button][tabindex=0] "Menu"
/// 11   a (no href) "Anchor"
/// 12   button[display:none] "Hidden"
/// 13   span[contenteditable=true] "Edit me"
/// ```
pub fn login_page() -> DomSnapshot {
    snapshot(vec![
        visible("html"),
        visible("body").with_parent(0),
        visible("form").with_parent(1),
        visible("label")
            .with_parent(2)
            .with_attr("for", "email")
            .with_text("Email   address"),
        visible("input")
            .with_parent(2)
            .with_attr("id", "email")
            .with_attr("type", "email")
            .with_attr("name", "email")
            .with_attr("placeholder", "you@example.com"),
        visible("label").with_parent(2).with_text("Password"),
        visible("input")
            .with_parent(5)
            .with_attr("type", "password")
            .with_attr("name", "password")
            .with_value("hunter2"),
        visible("input")
            .with_parent(2)
            .with_attr("type", "submit")
            .with_attr("value", "Sign in")
            .with_attr("data-testid", "login-submit"),
        visible("a")
            .with_parent(1)
            .with_attr("href", "/forgot")
            .with_text("Forgot password?"),
        visible("div").with_parent(1).with_text("Banner"),
        visible("div")
            .with_parent(1)
            .with_attr("role", "button")
            .with_attr("tabindex", "0")
            .with_text("Menu"),
        visible("a").with_parent(1).with_text("Anchor"),
        visible("button")
            .with_parent(1)
            .with_style(style(Some("none"), None, None))
            .with_text("Hidden"),
        visible("span")
            .with_parent(1)
            .with_attr("contenteditable", "true")
            .with_text("Edit me"),
    ])
}

// ============================================================================
// Report builders
// ============================================================================

pub fn scanned_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
}

pub fn element(semantic_type: SemanticType, tag: &str) -> DiscoveredElement {
    DiscoveredElement::new(semantic_type, tag)
}

pub fn report(url: &str, elements: Vec<DiscoveredElement>) -> DiscoveryReport {
    DiscoveryReport::new(url, scanned_at(), elements)
}
