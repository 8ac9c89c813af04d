//! Sticky site header with brand and navigation

use super::{ExternalLink, Icon, SectionId};
use crate::content::{IconKind, PROJECT_NAME, RepoLink};
use leptos::prelude::*;

/// Header bar: logo + name on the left, section anchors and GitHub on the right.
#[component]
pub fn SiteHeader(repo: RepoLink, logo_src: String) -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="container site-nav">
                <div class="brand">
                    <img class="brand-logo" src=logo_src alt=PROJECT_NAME />
                    <span>{PROJECT_NAME}</span>
                </div>
                <ul class="nav-links">
                    {SectionId::ALL.into_iter().map(|section| {
                        view! {
                            <li>
                                <a href=section.href() class="nav-link">{section.nav_label()}</a>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                    <li>
                        <ExternalLink href=repo.url class="nav-github">
                            <Icon kind=IconKind::Github />
                            " "
                            <span>"GitHub"</span>
                        </ExternalLink>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
