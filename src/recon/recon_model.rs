use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReconError;

/// ARIA roles treated as interactive, shared by candidacy and type mapping.
pub const INTERACTIVE_ROLES: &[&str] = &[
    "button",
    "link",
    "textbox",
    "checkbox",
    "radio",
    "switch",
    "combobox",
    "listbox",
    "option",
    "menuitem",
    "tab",
    "slider",
    "spinbutton",
];

/// Membership test against [`INTERACTIVE_ROLES`]; case-insensitive, trimmed.
pub fn is_interactive_role(role: &str) -> bool {
    let role = role.trim();
    INTERACTIVE_ROLES
        .iter()
        .any(|r| r.eq_ignore_ascii_case(role))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Button,
    Link,
    Input,
    Select,
    Textarea,
    Other,
}

impl SemanticType {
    pub const ALL: [SemanticType; 6] = [
        SemanticType::Button,
        SemanticType::Link,
        SemanticType::Input,
        SemanticType::Select,
        SemanticType::Textarea,
        SemanticType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Button => "button",
            SemanticType::Link => "link",
            SemanticType::Input => "input",
            SemanticType::Select => "select",
            SemanticType::Textarea => "textarea",
            SemanticType::Other => "other",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw record for one automation candidate, as discovered on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredElement {
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,

    pub tag_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessible_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,

    /// Normalized visible text, truncated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// DOM `id` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Only captured for links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub aria_disabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
}

impl DiscoveredElement {
    /// A record with only the required fields set.
    pub fn new(semantic_type: SemanticType, tag_name: &str) -> Self {
        Self {
            semantic_type,
            tag_name: tag_name.to_string(),
            role: None,
            accessible_name: None,
            label_text: None,
            test_id: None,
            text: None,
            id: None,
            name: None,
            href: None,
            placeholder: None,
            aria_label: None,
            disabled: false,
            aria_disabled: false,
            input_type: None,
            value: None,
            css: None,
            xpath: None,
        }
    }
}

/// Element count per semantic type; every type is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCounts(BTreeMap<SemanticType, usize>);

impl TypeCounts {
    /// All six types at zero.
    pub fn zeroed() -> Self {
        Self(SemanticType::ALL.iter().map(|t| (*t, 0)).collect())
    }

    pub fn tally<'a>(elements: impl IntoIterator<Item = &'a DiscoveredElement>) -> Self {
        let mut counts = Self::zeroed();
        for el in elements {
            *counts.0.entry(el.semantic_type).or_insert(0) += 1;
        }
        counts
    }

    pub fn get(&self, semantic_type: SemanticType) -> usize {
        self.0.get(&semantic_type).copied().unwrap_or(0)
    }

    pub fn contains(&self, semantic_type: SemanticType) -> bool {
        self.0.contains_key(&semantic_type)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SemanticType, usize)> + '_ {
        self.0.iter().map(|(t, n)| (*t, *n))
    }
}

/// Result of one scan pass over a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryReport {
    pub url: String,
    pub scanned_at: DateTime<Utc>,
    pub counts: TypeCounts,
    pub elements: Vec<DiscoveredElement>,
}

impl DiscoveryReport {
    /// Assemble a report, deriving counts from the elements.
    pub fn new(url: &str, scanned_at: DateTime<Utc>, elements: Vec<DiscoveredElement>) -> Self {
        Self {
            url: url.to_string(),
            scanned_at,
            counts: TypeCounts::tally(&elements),
            elements,
        }
    }

    /// Check the counts invariant on a report that came from outside.
    pub fn validate(&self) -> Result<(), ReconError> {
        if let Some(missing) = SemanticType::ALL
            .iter()
            .find(|t| !self.counts.contains(**t))
        {
            return Err(ReconError::MissingCount(missing.to_string()));
        }

        let actual = self.counts.total();
        if actual != self.elements.len() {
            return Err(ReconError::CountMismatch {
                expected: self.elements.len(),
                actual,
            });
        }

        Ok(())
    }
}
