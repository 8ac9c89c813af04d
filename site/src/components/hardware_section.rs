//! Recommended hardware section

use super::{HardwareGrid, Section, SectionId};
use crate::content::{HARDWARE_GROUPS, HARDWARE_TIP};
use leptos::prelude::*;

/// Reference kit for a node, followed by an installation tip.
#[component]
pub fn Hardware() -> impl IntoView {
    view! {
        <Section
            id=SectionId::Hardware.id()
            eyebrow="Recommended Hardware"
            title="Reference kit for a reliable node"
        >
            <HardwareGrid groups=HARDWARE_GROUPS.to_vec() />
            <p class="fine-print">{HARDWARE_TIP}</p>
        </Section>
    }
}
