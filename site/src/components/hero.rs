//! Hero banner

use super::{ExternalLink, FeaturePills, SectionId};
use crate::animation::MountAnimation;
use crate::content::{FEATURE_PILLS, HERO_DESCRIPTION, RepoLink};
use leptos::prelude::*;

/// Title, pitch, calls to action and the poster image.
///
/// The copy column fades up and the image scales in, once, on first display.
#[component]
pub fn Hero(repo: RepoLink, logo_src: String) -> impl IntoView {
    let copy_class = format!("hero-copy {}", MountAnimation::FadeUp.class_name());
    let art_class = format!("hero-art {}", MountAnimation::ScaleIn.class_name());

    view! {
        <section class="hero" aria-label="Hero">
            <div class="hero-glow"></div>
            <div class="hero-grid">
                <div class=copy_class>
                    <h1 class="hero-title">
                        "Citizen Drone " <span class="accent">"Defense"</span> " Force"
                    </h1>
                    <p class="hero-description">{HERO_DESCRIPTION}</p>
                    <div class="hero-actions">
                        <a href=SectionId::Overview.href() class="btn btn-primary">
                            "Learn More"
                        </a>
                        <ExternalLink href=repo.url class="btn btn-outline">
                            "View on GitHub"
                        </ExternalLink>
                    </div>
                    <FeaturePills pills=FEATURE_PILLS.to_vec() />
                </div>
                <div class=art_class>
                    <div class="hero-art-frame">
                        <img class="hero-image" src=logo_src alt="CDDF Logo" />
                        <div class="hero-art-halo"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
