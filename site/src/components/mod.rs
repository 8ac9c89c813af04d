//! Leptos UI components for rendering the landing page.
//!
//! Each component is a Leptos `#[component]` function rendered once on the
//! server; nothing is hydrated. Data only flows downward: the document hands
//! configuration to the shell, sections hand record tables to the record
//! renderers.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── SiteHeader
//! ├── Hero
//! │   └── FeaturePills
//! ├── Overview (Section #overview)
//! │   └── CardPanel
//! ├── Hardware (Section #hardware)
//! │   └── HardwareGrid
//! ├── Software (Section #software)
//! │   └── RepoCard
//! └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_site`], but the record
//! renderers work on any record list:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use cddf_site::components::HardwareGrid;
//! use cddf_site::content::HARDWARE_GROUPS;
//!
//! view! { <HardwareGrid groups=HARDWARE_GROUPS[..2].to_vec() /> }
//! ```

mod cards;
mod document;
mod footer;
mod hardware;
mod hardware_section;
mod header;
mod hero;
mod icons;
mod links;
mod overview;
mod pills;
mod section;
mod software;

pub use cards::CardPanel;
pub use document::SiteDocument;
pub use footer::Footer;
pub use hardware::HardwareGrid;
pub use hardware_section::Hardware;
pub use header::SiteHeader;
pub use hero::Hero;
pub use icons::*;
pub use links::{ExternalLink, SectionId};
pub use overview::Overview;
pub use pills::FeaturePills;
pub use section::Section;
pub use software::{RepoCard, Software};
