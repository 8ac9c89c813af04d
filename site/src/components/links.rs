//! Anchors and links shared across the page

use leptos::prelude::*;

/// The in-page sections reachable from the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    /// Project overview
    Overview,
    /// Recommended hardware
    Hardware,
    /// Software and repository
    Software,
}

impl SectionId {
    /// Sections in page order.
    pub const ALL: [SectionId; 3] = [SectionId::Overview, SectionId::Hardware, SectionId::Software];

    /// Element id used as the scroll anchor.
    pub const fn id(self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::Hardware => "hardware",
            SectionId::Software => "software",
        }
    }

    /// Fragment link targeting [`SectionId::id`].
    pub const fn href(self) -> &'static str {
        match self {
            SectionId::Overview => "#overview",
            SectionId::Hardware => "#hardware",
            SectionId::Software => "#software",
        }
    }

    /// Text of the navigation link.
    pub const fn nav_label(self) -> &'static str {
        match self {
            SectionId::Overview => "Overview",
            SectionId::Hardware => "Hardware",
            SectionId::Software => "Software",
        }
    }
}

/// Link that opens in a new tab without leaking the referrer.
#[component]
pub fn ExternalLink(
    /// Target URL, emitted verbatim
    #[prop(into)]
    href: String,
    /// CSS class names
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class target="_blank" rel="noreferrer">
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn href_targets_id() {
        for section in SectionId::ALL {
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
    }

    #[test]
    fn external_link_carries_class_and_new_tab_attrs() {
        let html = view! {
            <ExternalLink href="https://example.org" class="btn btn-outline">
                "Repo"
            </ExternalLink>
        }
        .to_html();

        let tag = &html[..html.find('>').expect("tag end")];
        assert!(tag.starts_with("<a "));
        assert!(tag.contains("href=\"https://example.org\""));
        assert!(tag.contains("class=\"btn btn-outline\""));
        assert!(tag.contains("target=\"_blank\""));
        assert!(tag.contains("rel=\"noreferrer\""));
        assert!(html.contains("Repo"));
    }
}
