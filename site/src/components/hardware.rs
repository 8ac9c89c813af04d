//! Hardware reference kit grid

use crate::content::{HardwareGroup, Keyed};
use leptos::prelude::*;

/// Grid of equipment groups, each with its own bullet list.
#[component]
pub fn HardwareGrid(groups: Vec<HardwareGroup>) -> impl IntoView {
    view! {
        <div class="hardware-grid">
            {groups.into_iter().map(|group| {
                view! {
                    <div class="hardware-group" data-key=group.key().to_owned()>
                        <h3 class="card-title">{group.name}</h3>
                        <ul class="hardware-items">
                            {group.items.iter().map(|&item| {
                                view! {
                                    <li class="hardware-item" data-key=item>
                                        <span class="dot"></span>
                                        <span>{item}</span>
                                    </li>
                                }
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
