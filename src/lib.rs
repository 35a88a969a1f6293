//! Discovery of automation candidates on a rendered page and synthesis of
//! preference-ordered locators for them.
//!
//! A [`DomSnapshot`] goes through [`discover`] to produce a raw
//! [`DiscoveryReport`]; [`build_model`] turns that report into a
//! framework-agnostic [`PageModel`].

pub mod browser;
pub mod cli;
pub mod error;
pub mod model;
pub mod recon;
pub mod report;
pub mod snapshot;
pub mod trace;

pub use crate::error::{ReconError, Result};
pub use crate::model::builder::build_model;
pub use crate::model::page_model::{Kind, LocatorHint, NormalizedElement, PageModel};
pub use crate::recon::assembler::discover;
pub use crate::recon::recon_model::{DiscoveredElement, DiscoveryReport, SemanticType};
pub use crate::snapshot::snapshot_model::DomSnapshot;
pub use crate::snapshot::view::DomView;
