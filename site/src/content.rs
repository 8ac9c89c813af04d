//! Static content records for the landing page.
//!
//! Everything the page says lives here as compile-time constants. The
//! components in [`crate::components`] only decide how a record looks; they
//! never decide what it says. Records are:
//!
//! - **Immutable** - `&'static str` fields, nothing is ever mutated
//! - **Ordered** - each table renders in declaration order
//! - **Keyed** - every repeated record exposes a stable textual identity
//!   through [`Keyed`]
//!
//! # Example
//!
//! ```rust
//! use cddf_site::content::{HARDWARE_GROUPS, Keyed};
//!
//! let names: Vec<&str> = HARDWARE_GROUPS.iter().map(|g| g.key()).collect();
//! assert_eq!(names[0], "Wideband SDR");
//! assert_eq!(HARDWARE_GROUPS[2].items.len(), 3);
//! ```

/// Project name, used for the brand, page title and footer.
pub const PROJECT_NAME: &str = "Citizen Drone Defense Force";

/// Default repository URL. Deployments override it via [`crate::SiteConfig`].
pub const DEFAULT_REPO_URL: &str = "https://github.com/h3ml0ck/cddf";

/// Default path of the logo/poster image, relative to the site root.
pub const DEFAULT_LOGO_SRC: &str = "/logo.png";

/// Icon shown next to a pill or card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    /// Shield outline
    Shield,
    /// Broadcast waves
    Radio,
    /// Wi-Fi arcs
    Wifi,
    /// Processor chip
    Cpu,
    /// GitHub mark
    Github,
}

/// Stable textual identity of a repeated record.
///
/// Renderers emit it as `data-key` on each block so a record keeps the
/// same identity across renders.
pub trait Keyed {
    /// The identity string (label, title or name).
    fn key(&self) -> &str;
}

/// A short highlight shown as a pill under the hero actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturePill {
    /// Pill text
    pub label: &'static str,
    /// Leading icon
    pub icon: IconKind,
}

impl Keyed for FeaturePill {
    fn key(&self) -> &str {
        self.label
    }
}

/// One subsystem card in the overview panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverviewCard {
    /// Card heading
    pub title: &'static str,
    /// One-sentence description
    pub body: &'static str,
    /// Icon in the card badge
    pub icon: IconKind,
}

impl Keyed for OverviewCard {
    fn key(&self) -> &str {
        self.title
    }
}

/// A group of recommended equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HardwareGroup {
    /// Group heading
    pub name: &'static str,
    /// Items, shown as a bullet list in this order
    pub items: &'static [&'static str],
}

impl Keyed for HardwareGroup {
    fn key(&self) -> &str {
        self.name
    }
}

/// Link to the project's source repository.
///
/// The only content value that is configured at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoLink {
    /// Absolute URL, emitted verbatim as `href`
    pub url: String,
}

impl RepoLink {
    /// Wrap a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for RepoLink {
    fn default() -> Self {
        Self::new(DEFAULT_REPO_URL)
    }
}

// =============================================================================
// Hero
// =============================================================================

/// Hero lead paragraph.
pub const HERO_DESCRIPTION: &str = "A modern, open-source initiative for community-driven drone \
awareness and airspace safety. Deploy low-cost sensing nodes, share telemetry responsibly, and \
build a real-time picture of your local skies.";

/// Feature pills, left to right.
pub const FEATURE_PILLS: [FeaturePill; 4] = [
    FeaturePill { label: "Community safety", icon: IconKind::Shield },
    FeaturePill { label: "RF + BLE detection", icon: IconKind::Radio },
    FeaturePill { label: "Mesh & backhaul", icon: IconKind::Wifi },
    FeaturePill { label: "Edge ML ready", icon: IconKind::Cpu },
];

// =============================================================================
// Overview
// =============================================================================

/// Overview prose, one entry per paragraph.
pub const OVERVIEW_PARAGRAPHS: [&str; 2] = [
    "The Citizen Drone Defense Force (CDDF) empowers neighborhoods, campuses, and event \
organizers to responsibly monitor low-altitude activity. Nodes capture publicly available \
RF/BLE/Wi-Fi telemetry and acoustic cues, then securely share summaries (not raw recordings) \
to a community server.",
    "The system favors open hardware, reproducible builds, and transparent algorithms. You can \
start with a single node and scale to a city-wide mesh. Choose the modules you need—BLE \
Remote ID, RF spectrum sweeps, 2.4/5 GHz activity, GPS time-sync, or edge ML classifiers for \
specific sound signatures.",
];

/// Overview bullet list.
pub const OVERVIEW_BULLETS: [&str; 3] = [
    "Easy install scripts and Docker images for gateways",
    "Token-less local dashboards; OAuth for remote sharing",
    "All code audited via public pull requests",
];

/// Subsystem cards beside the overview prose.
pub const OVERVIEW_CARDS: [OverviewCard; 3] = [
    OverviewCard {
        title: "Edge Nodes",
        body: "Raspberry Pi 4/5 or x86 mini-PCs run SDR/BLE capture and optional audio ML.",
        icon: IconKind::Cpu,
    },
    OverviewCard {
        title: "Transport",
        body: "MQTT/WebSockets with TLS; store-and-forward if backhaul drops.",
        icon: IconKind::Wifi,
    },
    OverviewCard {
        title: "Security",
        body: "API tokens, per-node keys, signed updates, and principle of least privilege.",
        icon: IconKind::Shield,
    },
];

// =============================================================================
// Hardware
// =============================================================================

/// Reference kit, one group per card.
pub const HARDWARE_GROUPS: [HardwareGroup; 6] = [
    HardwareGroup {
        name: "Wideband SDR",
        items: &["HackRF One (1–6 GHz, TX/RX)", "RTL-SDR v3 (RX only, budget)"],
    },
    HardwareGroup {
        name: "Antennas",
        items: &["Discone (25–1300 MHz)", "2.4 GHz + 5 GHz directional panels"],
    },
    HardwareGroup {
        name: "Filters",
        items: &[
            "FM broadcast notch (88–108 MHz)",
            "LTE notch (700–2700 MHz)",
            "2.4 GHz / 5 GHz band-pass",
        ],
    },
    HardwareGroup {
        name: "Compute",
        items: &["Raspberry Pi 5 + active cooling", "64-128 GB fast microSD or NVMe"],
    },
    HardwareGroup {
        name: "BLE Remote ID",
        items: &["nRF52840 USB dongle (optional)", "Zigbee/BLE sniffer compatible adapters"],
    },
    HardwareGroup {
        name: "Power & Mounting",
        items: &["PoE hat or 12 V regulator", "Weatherproof enclosure, mast clamps"],
    },
];

/// Fine print under the hardware grid.
pub const HARDWARE_TIP: &str = "Tip: Place filters near the SDR to reduce front-end overload. \
Use low-loss coax (LMR-240/400) for long runs.";

// =============================================================================
// Software
// =============================================================================

/// Software section lead paragraph.
pub const SOFTWARE_PARAGRAPH: &str = "All firmware, capture utilities, dashboards, and deployment \
scripts live in the repository below. You’ll find quick-start guides for Raspberry Pi, Docker \
compose files for gateway nodes, and sample parsers for BLE Remote ID, 2.4/5 GHz activity, and \
acoustic inference.";

/// Software bullet list.
pub const SOFTWARE_BULLETS: [&str; 3] = [
    "MIT-licensed; contributions welcome via PRs",
    "Issue templates for bug reports and hardware variants",
    "Security policy for responsible disclosure",
];

/// Repository name shown on the repo card.
pub const REPO_DISPLAY_NAME: &str = "citizen-drone-defense-force";

/// Blurb on the repo card.
pub const REPO_CARD_BLURB: &str = "Click to open the repo with code, docs, and deployment scripts \
for CDDF nodes and backend.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hardware_item_counts() {
        let counts: Vec<usize> = HARDWARE_GROUPS.iter().map(|g| g.items.len()).collect();
        assert_eq!(counts, vec![2, 2, 3, 2, 2, 2]);
    }

    #[test]
    fn keys_are_unique_per_table() {
        fn unique<T: Keyed>(records: &[T]) -> bool {
            let mut keys: Vec<&str> = records.iter().map(Keyed::key).collect();
            keys.sort_unstable();
            keys.windows(2).all(|w| w[0] != w[1])
        }

        assert!(unique(&FEATURE_PILLS));
        assert!(unique(&OVERVIEW_CARDS));
        assert!(unique(&HARDWARE_GROUPS));
    }

    #[test]
    fn overview_copy_keeps_module_list_dash() {
        assert!(OVERVIEW_PARAGRAPHS[1].contains("Choose the modules you need—BLE Remote ID"));
    }

    #[test]
    fn repo_link_defaults_to_project_repo() {
        assert_eq!(RepoLink::default().url, DEFAULT_REPO_URL);
        assert_eq!(RepoLink::new("https://example.org/x").url, "https://example.org/x");
    }
}
