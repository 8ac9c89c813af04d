//! Section wrapper - shared eyebrow/heading/anchor treatment
//!
//! Every content section on the page goes through [`Section`] so headings
//! line up and the sticky header never hides an anchored heading.

use leptos::prelude::*;

/// A top-level page region anchored by `id`.
///
/// Strings are taken as-is; Leptos escapes them on output.
#[component]
pub fn Section(
    /// Scroll anchor, matched by `#id` nav links
    #[prop(into)]
    id: String,
    /// Small uppercase label above the heading
    #[prop(into)]
    eyebrow: String,
    /// Section heading
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="section">
            <div class="section-head">
                <p class="section-eyebrow">{eyebrow}</p>
                <h2 class="section-title">{title}</h2>
            </div>
            <div class="section-body">
                {children()}
            </div>
        </section>
    }
}
