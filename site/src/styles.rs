//! CSS styles for the landing page.
//!
//! The page ships one inline stylesheet: [`SITE_CSS`] followed by the mount
//! animation rules from [`crate::animation`]. Use [`stylesheet`] to get both.
//!
//! # Customization
//!
//! ```rust
//! use cddf_site::styles::stylesheet;
//!
//! let my_css = ".pill { border-radius: 4px; }";
//! let combined = format!("{}\n{}", stylesheet(), my_css);
//! assert!(combined.contains(".pill"));
//! ```
//!
//! # Features
//!
//! - Slate gradient background with teal accents
//! - Sticky, blurred header
//! - Responsive grids for cards and hardware groups
//! - Scroll-margin on section anchors so the sticky header never covers a heading

use crate::animation::animations_css;

/// Content Security Policy for the page. No scripts, no network calls;
/// images may come from the site itself or an absolute https URL.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'unsafe-inline'; script-src 'none'; connect-src 'none';";

/// Base stylesheet - dark slate theme.
pub const SITE_CSS: &str = r#"
:root {
    --slate-950: #020617;
    --slate-900: #0f172a;
    --slate-400: #94a3b8;
    --slate-300: #cbd5e1;
    --slate-100: #f1f5f9;
    --teal-500: #14b8a6;
    --teal-400: #2dd4bf;
    --teal-300: #5eead4;
    --sky-500: #0ea5e9;
    --border-subtle: rgba(255, 255, 255, 0.05);
    --border-visible: rgba(255, 255, 255, 0.1);
    --surface: rgba(255, 255, 255, 0.05);
    --surface-hover: rgba(255, 255, 255, 0.1);
    --container-max: 72rem;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    line-height: 1.6;
    color: var(--slate-100);
    background: var(--slate-950);
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
}

.page {
    min-height: 100vh;
    background: linear-gradient(to bottom, var(--slate-950), var(--slate-900), var(--slate-950));
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

@media (min-width: 768px) {
    .container { padding: 0 40px; }
}

.icon {
    flex-shrink: 0;
}

.icon-accent {
    color: var(--teal-300);
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    backdrop-filter: blur(8px);
    background: rgba(2, 6, 23, 0.6);
    border-bottom: 1px solid var(--border-subtle);
}

.site-nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 12px;
    padding-bottom: 12px;
}

.brand {
    display: flex;
    align-items: center;
    gap: 12px;
    font-weight: 600;
    letter-spacing: 0.025em;
}

.brand-logo {
    width: 40px;
    height: 40px;
    border-radius: 9999px;
    object-fit: cover;
    box-shadow: 0 0 0 1px var(--border-visible), 0 10px 15px rgba(0, 0, 0, 0.3);
}

.nav-links {
    display: none;
    align-items: center;
    gap: 24px;
    margin: 0;
    padding: 0;
    list-style: none;
    font-size: 14px;
}

@media (min-width: 768px) {
    .nav-links { display: flex; }
}

.nav-link {
    transition: color 0.15s;
}

.nav-link:hover {
    color: var(--teal-300);
}

.nav-github {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 6px 12px;
    border-radius: 12px;
    border: 1px solid var(--border-visible);
    background: var(--surface);
    transition: background 0.15s;
}

.nav-github:hover {
    background: var(--surface-hover);
}

/* Hero */
.hero {
    position: relative;
    isolation: isolate;
    padding-top: 40px;
}

@media (min-width: 768px) {
    .hero { padding-top: 64px; }
}

.hero-glow {
    position: absolute;
    inset: 0;
    z-index: -10;
    opacity: 0.2;
    background:
        radial-gradient(circle at 30% 10%, var(--sky-500) 0%, transparent 30%),
        radial-gradient(circle at 70% 20%, #22d3ee 0%, transparent 25%);
    mask-image: radial-gradient(60% 50% at 50% 10%, #000 40%, transparent 100%);
}

.hero-grid {
    display: grid;
    align-items: center;
    gap: 40px;
}

@media (min-width: 768px) {
    .hero-grid { grid-template-columns: 1.2fr 1fr; }
}

.hero-copy > * + * {
    margin-top: 24px;
}

.hero-title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 700;
    line-height: 1.25;
}

@media (min-width: 768px) {
    .hero-title { font-size: 3rem; }
}

.accent {
    color: var(--teal-300);
}

.hero-description {
    max-width: 65ch;
    color: var(--slate-300);
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 16px;
    border-radius: 12px;
    font-weight: 500;
    transition: background 0.15s, opacity 0.15s;
}

.btn-primary {
    background: var(--teal-500);
    color: var(--slate-900);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3);
}

.btn-primary:hover {
    background: var(--teal-400);
}

.btn-outline {
    border: 1px solid var(--border-visible);
}

.btn-outline:hover {
    background: var(--surface-hover);
}

.btn-light {
    border-radius: 16px;
    background: #fff;
    color: var(--slate-900);
    font-weight: 600;
}

.btn-light:hover {
    opacity: 0.9;
}

.hero-art {
    display: flex;
    justify-content: center;
}

@media (min-width: 768px) {
    .hero-art { justify-content: flex-end; }
}

.hero-art-frame {
    position: relative;
}

.hero-image {
    width: 14rem;
    height: 14rem;
    border-radius: 16px;
    object-fit: cover;
    box-shadow: 0 0 0 1px var(--border-visible), 0 25px 50px rgba(0, 0, 0, 0.5);
}

@media (min-width: 768px) {
    .hero-image { width: 18rem; height: 18rem; }
}

.hero-art-halo {
    position: absolute;
    inset: -8px;
    z-index: -10;
    border-radius: 24px;
    filter: blur(24px);
    background: linear-gradient(to top right, rgba(20, 184, 166, 0.1), rgba(14, 165, 233, 0.1));
}

/* Feature pills */
.pill-list {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin: 16px 0 0;
    padding: 0;
    list-style: none;
}

.pill {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 4px 12px;
    border-radius: 9999px;
    border: 1px solid var(--border-visible);
    background: var(--surface);
    font-size: 14px;
}

/* Sections */
.section {
    scroll-margin-top: 96px;
    padding: 64px 0;
}

.section-head {
    margin-bottom: 32px;
}

.section-eyebrow {
    margin: 0;
    color: var(--teal-300);
    font-size: 14px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.section-title {
    margin: 8px 0 0;
    font-size: 1.5rem;
    font-weight: 600;
}

@media (min-width: 768px) {
    .section-title { font-size: 1.875rem; }
}

.split {
    display: grid;
    gap: 32px;
}

@media (min-width: 1024px) {
    .split { grid-template-columns: 1fr 1fr; }
    .split-wide { grid-template-columns: 1.2fr 1fr; align-items: center; }
}

.prose {
    color: var(--slate-300);
}

.prose > * + * {
    margin-top: 16px;
}

.prose p {
    margin: 0;
}

.bullets {
    margin: 0;
    padding-left: 20px;
    list-style: disc;
}

.bullets li + li {
    margin-top: 8px;
}

/* Cards */
.card-grid {
    display: grid;
    gap: 16px;
}

@media (min-width: 640px) {
    .card-grid { grid-template-columns: 1fr 1fr; }
}

.card {
    padding: 20px;
    border-radius: 16px;
    border: 1px solid var(--border-visible);
    background: var(--surface);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3);
}

.card-head {
    display: flex;
    align-items: center;
    gap: 12px;
}

.card-badge {
    padding: 8px;
    border-radius: 12px;
    background: rgba(20, 184, 166, 0.2);
    display: inline-flex;
}

.card-title {
    margin: 0;
    font-size: 1rem;
    font-weight: 500;
}

.card-body {
    margin: 12px 0 0;
    color: var(--slate-300);
    font-size: 14px;
}

/* Hardware */
.hardware-grid {
    display: grid;
    gap: 20px;
}

@media (min-width: 768px) {
    .hardware-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .hardware-grid { grid-template-columns: repeat(3, 1fr); }
}

.hardware-group {
    padding: 20px;
    border-radius: 16px;
    border: 1px solid var(--border-visible);
    background: var(--surface);
}

.hardware-items {
    margin: 12px 0 0;
    padding: 0;
    list-style: none;
    color: var(--slate-300);
    font-size: 14px;
}

.hardware-item {
    display: flex;
    gap: 8px;
}

.hardware-item + .hardware-item {
    margin-top: 4px;
}

.dot {
    flex-shrink: 0;
    width: 6px;
    height: 6px;
    margin-top: 8px;
    border-radius: 9999px;
    background: var(--teal-300);
}

.fine-print {
    margin: 20px 0 0;
    font-size: 12px;
    color: var(--slate-400);
}

/* Repository card */
.repo-card {
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
}

.repo-card-kicker {
    margin: 0;
    font-size: 14px;
    color: var(--slate-400);
}

.repo-card-link {
    margin-top: 16px;
    padding: 6px 12px;
    font-size: 14px;
}

/* Footer */
.site-footer {
    margin-top: 80px;
    padding: 40px 0;
    border-top: 1px solid var(--border-subtle);
    text-align: center;
    font-size: 14px;
    color: var(--slate-400);
}

.site-footer p {
    margin: 0;
}
"#;

/// Complete stylesheet: base rules plus mount animations.
pub fn stylesheet() -> String {
    format!("{}\n{}", SITE_CSS, animations_css())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_includes_animations() {
        let css = stylesheet();
        assert!(css.starts_with(SITE_CSS));
        assert!(css.contains(".mount-fade-up"));
        assert!(css.contains(".mount-scale-in"));
    }

    #[test]
    fn sections_leave_room_for_sticky_header() {
        assert!(SITE_CSS.contains("scroll-margin-top"));
    }
}
