//! Page footer

use crate::content::PROJECT_NAME;
use leptos::prelude::*;

/// Copyright line; `year` is supplied by the caller at render time.
#[component]
pub fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>
                {format!("© {year} {PROJECT_NAME} • Built with ❤️ and open-source tools")}
            </p>
        </footer>
    }
}
