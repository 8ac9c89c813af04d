//! Overview card panel

use super::Icon;
use crate::content::{Keyed, OverviewCard};
use leptos::prelude::*;

/// Grid of subsystem cards, one block per card.
#[component]
pub fn CardPanel(cards: Vec<OverviewCard>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {cards.into_iter().map(|card| {
                view! {
                    <div class="card" data-key=card.key().to_owned()>
                        <div class="card-head">
                            <div class="card-badge">
                                <Icon kind=card.icon size="20" class="icon icon-accent" />
                            </div>
                            <h3 class="card-title">{card.title}</h3>
                        </div>
                        <p class="card-body">{card.body}</p>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
