use std::fmt;

use crate::recon::recon_model::is_interactive_role;
use crate::snapshot::view::DomView;

// ============================================================================
// Node classification: visibility, disabled state, candidacy
// ============================================================================

/// First visibility check a node failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenReason {
    Display,
    Visibility,
    Opacity,
    HiddenFlag,
    ZeroSize,
    AriaHidden,
}

/// Why a node was not kept as an automation candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Hidden(HiddenReason),
    NotInteractive,
    /// `div`/`span` matched only through a weak signal (e.g. contenteditable)
    BareContainer,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Hidden(reason) => {
                let check = match reason {
                    HiddenReason::Display => "display",
                    HiddenReason::Visibility => "visibility",
                    HiddenReason::Opacity => "opacity",
                    HiddenReason::HiddenFlag => "hidden",
                    HiddenReason::ZeroSize => "zero-size",
                    HiddenReason::AriaHidden => "aria-hidden",
                };
                write!(f, "hidden:{}", check)
            }
            Rejection::NotInteractive => f.write_str("not-interactive"),
            Rejection::BareContainer => f.write_str("bare-container"),
        }
    }
}

/// Native and ARIA disabled flags, reported independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisabledState {
    pub disabled: bool,
    pub aria_disabled: bool,
}

/// Returns the first failed visibility check, if any.
pub fn hidden_reason<V: DomView>(view: &V, node: V::Id) -> Option<HiddenReason> {
    let style = view.computed_style(node);

    if style.display.as_deref().map(str::trim) == Some("none") {
        return Some(HiddenReason::Display);
    }
    if style.visibility.as_deref().map(str::trim) == Some("hidden") {
        return Some(HiddenReason::Visibility);
    }
    if style.opacity.as_deref().is_some_and(is_zero_opacity) {
        return Some(HiddenReason::Opacity);
    }
    if view.hidden_property(node) {
        return Some(HiddenReason::HiddenFlag);
    }
    if view.bounding_box(node).is_empty() {
        return Some(HiddenReason::ZeroSize);
    }
    if view.attribute(node, "aria-hidden") == Some("true") {
        return Some(HiddenReason::AriaHidden);
    }

    None
}

fn is_zero_opacity(raw: &str) -> bool {
    let raw = raw.trim();
    raw == "0" || raw.parse::<f64>().is_ok_and(|v| v == 0.0)
}

pub fn is_visible<V: DomView>(view: &V, node: V::Id) -> bool {
    hidden_reason(view, node).is_none()
}

pub fn disabled_state<V: DomView>(view: &V, node: V::Id) -> DisabledState {
    DisabledState {
        disabled: view.disabled_property(node) || view.has_attribute(node, "disabled"),
        aria_disabled: view.attribute(node, "aria-disabled") == Some("true"),
    }
}

/// Full candidacy decision, including the container post-filter.
pub fn candidacy<V: DomView>(view: &V, node: V::Id) -> Result<(), Rejection> {
    if let Some(reason) = hidden_reason(view, node) {
        return Err(Rejection::Hidden(reason));
    }

    if !has_interactive_signal(view, node) {
        return Err(Rejection::NotInteractive);
    }

    if matches!(view.tag_name(node), "div" | "span") {
        let has_role = view
            .attribute(node, "role")
            .is_some_and(|r| !r.trim().is_empty());
        let marked =
            has_role || view.has_attribute(node, "tabindex") || has_click_handler(view, node);
        if !marked {
            return Err(Rejection::BareContainer);
        }
    }

    Ok(())
}

pub fn is_candidate<V: DomView>(view: &V, node: V::Id) -> bool {
    candidacy(view, node).is_ok()
}

fn has_interactive_signal<V: DomView>(view: &V, node: V::Id) -> bool {
    is_native_interactive(view, node)
        || view.attribute(node, "role").is_some_and(is_interactive_role)
        || view
            .attribute(node, "tabindex")
            .and_then(|t| t.trim().parse::<i64>().ok())
            .is_some_and(|t| t >= 0)
        || has_click_handler(view, node)
        || view
            .attribute(node, "contenteditable")
            .is_some_and(|c| c.trim().eq_ignore_ascii_case("true"))
}

fn is_native_interactive<V: DomView>(view: &V, node: V::Id) -> bool {
    match view.tag_name(node) {
        "button" | "input" | "select" | "textarea" => true,
        "a" => view.has_attribute(node, "href"),
        "summary" => view
            .parent(node)
            .is_some_and(|p| view.tag_name(p) == "details"),
        _ => false,
    }
}

fn has_click_handler<V: DomView>(view: &V, node: V::Id) -> bool {
    view.has_attribute(node, "onclick") || view.click_property(node)
}
