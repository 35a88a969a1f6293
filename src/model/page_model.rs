use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ReconError;

// ============================================================================
// Framework-agnostic page model built from a discovery report
// ============================================================================

/// Coarse element kind used by downstream generators.
///
/// Inputs always map to `Textbox`; checkbox/radio are not inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Textbox,
    Button,
    Link,
    Select,
    Textarea,
    Other,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Textbox => "textbox",
            Kind::Button => "button",
            Kind::Link => "link",
            Kind::Select => "select",
            Kind::Textarea => "textarea",
            Kind::Other => "other",
        }
    }
}

/// One locator strategy with its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "camelCase")]
pub enum LocatorHint {
    TestId {
        value: String,
    },
    Role {
        role: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Label {
        value: String,
    },
    Placeholder {
        value: String,
    },
    Css {
        value: String,
    },
    Xpath {
        value: String,
    },
}

impl LocatorHint {
    /// Strategy tag as it appears on the wire.
    pub fn strategy(&self) -> &'static str {
        match self {
            LocatorHint::TestId { .. } => "testId",
            LocatorHint::Role { .. } => "role",
            LocatorHint::Label { .. } => "label",
            LocatorHint::Placeholder { .. } => "placeholder",
            LocatorHint::Css { .. } => "css",
            LocatorHint::Xpath { .. } => "xpath",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementFlags {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub aria_disabled: bool,
}

impl ElementFlags {
    /// `None` when neither flag is set.
    pub fn from_bools(disabled: bool, aria_disabled: bool) -> Option<Self> {
        (disabled || aria_disabled).then_some(Self {
            disabled,
            aria_disabled,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedElement {
    /// `<semantic type>-<slug>-<index>`
    pub id: String,
    pub kind: Kind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Best first
    pub locators: Vec<LocatorHint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<ElementFlags>,
}

/// Normalized model of one scanned page.
///
/// Only produced by the model builder; the domain is always derived from
/// the URL and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageModel {
    url: String,
    domain: String,
    scanned_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    elements: Vec<NormalizedElement>,
}

impl PageModel {
    pub(crate) fn new(
        url: String,
        domain: String,
        scanned_at: DateTime<Utc>,
        title: Option<String>,
        elements: Vec<NormalizedElement>,
    ) -> Self {
        Self {
            url,
            domain,
            scanned_at,
            title,
            elements,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn scanned_at(&self) -> DateTime<Utc> {
        self.scanned_at
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn elements(&self) -> &[NormalizedElement] {
        &self.elements
    }

    /// SHA-1 of the model's JSON form. Equal models give equal digests.
    pub fn fingerprint(&self) -> Result<String, ReconError> {
        use sha1::{Digest, Sha1};

        let json = serde_json::to_vec(self).map_err(|e| ReconError::Json {
            context: "page model fingerprint".into(),
            source: e,
        })?;

        let mut hasher = Sha1::new();
        hasher.update(&json);
        Ok(format!("{:x}", hasher.finalize()))
    }
}
