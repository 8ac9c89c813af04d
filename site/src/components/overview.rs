//! Project overview section

use super::{CardPanel, Section, SectionId};
use crate::content::{OVERVIEW_BULLETS, OVERVIEW_CARDS, OVERVIEW_PARAGRAPHS};
use leptos::prelude::*;

/// Prose and bullets on the left, subsystem cards on the right.
#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <Section
            id=SectionId::Overview.id()
            eyebrow="Project Overview"
            title="Open, modular, privacy-first airspace awareness"
        >
            <div class="split">
                <div class="prose">
                    {OVERVIEW_PARAGRAPHS.iter().map(|&paragraph| view! { <p>{paragraph}</p> }).collect::<Vec<_>>()}
                    <ul class="bullets">
                        {OVERVIEW_BULLETS.iter().map(|&bullet| view! { <li>{bullet}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <CardPanel cards=OVERVIEW_CARDS.to_vec() />
            </div>
        </Section>
    }
}
