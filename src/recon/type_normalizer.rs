use crate::recon::recon_model::{SemanticType, is_interactive_role};
use crate::snapshot::view::DomView;

/// The raw signals type normalization looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSignals<'a> {
    pub tag: &'a str,
    pub role: Option<&'a str>,
    pub has_href: bool,
    pub input_type: Option<&'a str>,
}

impl<'a> TypeSignals<'a> {
    pub fn read<V: DomView>(view: &'a V, node: V::Id) -> Self {
        Self {
            tag: view.tag_name(node),
            role: view.attribute(node, "role"),
            has_href: view.has_attribute(node, "href"),
            input_type: view.attribute(node, "type"),
        }
    }
}

/// Map tag/role/attributes onto a [`SemanticType`].
///
/// An interactive role wins over the tag. Checkbox and radio inputs stay
/// `Input`: nothing here infers them.
pub fn normalize_type(raw: &TypeSignals<'_>) -> SemanticType {
    if let Some(role) = raw.role.filter(|r| is_interactive_role(r)) {
        return match role.trim().to_ascii_lowercase().as_str() {
            "textbox" => SemanticType::Input,
            "combobox" | "listbox" => SemanticType::Select,
            "link" => SemanticType::Link,
            "button" => SemanticType::Button,
            _ => SemanticType::Other,
        };
    }

    match raw.tag {
        "button" => SemanticType::Button,
        "a" if raw.has_href => SemanticType::Link,
        "select" => SemanticType::Select,
        "textarea" => SemanticType::Textarea,
        "input" => {
            let input_type = raw.input_type.map(|t| t.trim().to_ascii_lowercase());
            match input_type.as_deref() {
                Some("button" | "submit" | "reset") => SemanticType::Button,
                _ => SemanticType::Input,
            }
        }
        _ => SemanticType::Other,
    }
}
