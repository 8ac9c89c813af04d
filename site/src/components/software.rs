//! Software section and repository card

use super::{ExternalLink, Icon, Section, SectionId};
use crate::content::{
    IconKind, REPO_CARD_BLURB, REPO_DISPLAY_NAME, RepoLink, SOFTWARE_BULLETS, SOFTWARE_PARAGRAPH,
};
use leptos::prelude::*;

/// Where the code lives, with a primary action and a repository card.
#[component]
pub fn Software(repo: RepoLink) -> impl IntoView {
    let card_repo = repo.clone();

    view! {
        <Section
            id=SectionId::Software.id()
            eyebrow="Software"
            title="Open-source code, docs, and issues on GitHub"
        >
            <div class="split split-wide">
                <div class="prose">
                    <p>{SOFTWARE_PARAGRAPH}</p>
                    <ul class="bullets">
                        {SOFTWARE_BULLETS.iter().map(|&bullet| view! { <li>{bullet}</li> }).collect::<Vec<_>>()}
                    </ul>
                    <div>
                        <ExternalLink href=repo.url class="btn btn-light">
                            <Icon kind=IconKind::Github size="20" />
                            " Go to Repository"
                        </ExternalLink>
                    </div>
                </div>
                <RepoCard repo=card_repo />
            </div>
        </Section>
    }
}

/// Card describing the repository, with its own link.
#[component]
pub fn RepoCard(repo: RepoLink) -> impl IntoView {
    view! {
        <div class="card repo-card">
            <div class="card-head">
                <div class="card-badge">
                    <Icon kind=IconKind::Github size="20" class="icon icon-accent" />
                </div>
                <div>
                    <p class="repo-card-kicker">"GitHub"</p>
                    <h3 class="card-title">{REPO_DISPLAY_NAME}</h3>
                </div>
            </div>
            <p class="card-body">{REPO_CARD_BLURB}</p>
            <ExternalLink href=repo.url class="btn btn-outline repo-card-link">
                <Icon kind=IconKind::Github />
                " "
                <span>"Open on GitHub"</span>
            </ExternalLink>
        </div>
    }
}
