//! # cddf-site
//!
//! Leptos SSR renderer for the Citizen Drone Defense Force landing page.
//!
//! The page is a single static HTML document: a sticky header, a hero
//! banner, overview/hardware/software sections and a footer. Content lives in
//! typed, compile-time record tables ([`content`]); components ([`components`])
//! map each table to repeated blocks in declaration order.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Component-Based** - One component per page region
//! - **Type-Safe Content** - Records are Rust structs, not loose markup
//! - **Configurable Links** - Repository URL and logo path come from [`SiteConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use cddf_site::{render_site_for_year, SiteConfig};
//!
//! let config = SiteConfig {
//!     repo_url: "https://github.com/example/cddf".into(),
//!     ..Default::default()
//! };
//!
//! let html = render_site_for_year(&config, 2025);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("https://github.com/example/cddf"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Record types and the page's content tables
//! - [`components`] - Leptos UI components
//! - [`animation`] - One-shot mount animations
//! - [`styles`] - CSS constants
//! - [`config`] - Layered deployment configuration
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod animation;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod styles;

pub use config::SiteConfig;
pub use error::{Result, SiteError};

use chrono::Datelike;
use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the landing page, stamping the footer with the current year.
///
/// # Example
///
/// ```rust
/// use cddf_site::{render_site, SiteConfig};
///
/// let html = render_site(&SiteConfig::default());
/// assert!(html.contains("id=\"hardware\""));
/// ```
pub fn render_site(config: &SiteConfig) -> String {
    render_site_for_year(config, current_year())
}

/// Render the landing page with a fixed footer year.
///
/// Same config and year always produce byte-identical output.
pub fn render_site_for_year(config: &SiteConfig, year: i32) -> String {
    let doc = view! {
        <SiteDocument repo=config.repo_link() logo_src=config.logo_src.clone() year=year />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_full_document() {
        let html = render_site_for_year(&SiteConfig::default(), 2025);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Citizen Drone Defense Force</title>"));
        assert!(html.contains("© 2025 Citizen Drone Defense Force"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = SiteConfig::default();
        assert_eq!(
            render_site_for_year(&config, 2030),
            render_site_for_year(&config, 2030)
        );
    }

    #[test]
    fn footer_uses_current_year() {
        let html = render_site(&SiteConfig::default());
        assert!(html.contains(&format!("© {} ", current_year())));
    }

    #[test]
    fn custom_logo_is_used_for_header_and_hero() {
        let config = SiteConfig {
            logo_src: "/img/poster.webp".into(),
            ..Default::default()
        };
        let html = render_site_for_year(&config, 2025);
        // header logo, hero image, favicon
        assert_eq!(html.matches("/img/poster.webp").count(), 3);
    }
}
