//! Root document component - the complete HTML page
//!
//! Composes the page shell in fixed order: header, hero, the three
//! content sections, footer.

use super::{Footer, Hardware, Hero, Overview, SiteHeader, Software};
use crate::content::{HERO_DESCRIPTION, PROJECT_NAME, RepoLink};
use crate::styles::{CSP, stylesheet};
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn SiteDocument(
    /// Repository link shared by every GitHub action
    repo: RepoLink,
    /// Path or URL of the logo/poster image
    #[prop(into)]
    logo_src: String,
    /// Year shown in the footer
    year: i32,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=HERO_DESCRIPTION />
                <title>{PROJECT_NAME}</title>
                <link rel="icon" href=logo_src.clone() />
                <style>{stylesheet()}</style>
            </head>
            <body>
                <div class="page">
                    <SiteHeader repo=repo.clone() logo_src=logo_src.clone() />
                    <main class="container">
                        <Hero repo=repo.clone() logo_src=logo_src />
                        <Overview />
                        <Hardware />
                        <Software repo=repo />
                    </main>
                    <Footer year=year />
                </div>
            </body>
        </html>
    }
}
