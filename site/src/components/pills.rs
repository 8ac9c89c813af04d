//! Feature pill list

use super::Icon;
use crate::content::{FeaturePill, Keyed};
use leptos::prelude::*;

/// Row of rounded highlight pills, one `<li>` per pill.
#[component]
pub fn FeaturePills(pills: Vec<FeaturePill>) -> impl IntoView {
    view! {
        <ul class="pill-list">
            {pills.into_iter().map(|pill| {
                view! {
                    <li class="pill" data-key=pill.key().to_owned()>
                        <Icon kind=pill.icon />
                        <span>{pill.label}</span>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}
