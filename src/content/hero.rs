//! Hero banner copy.

use super::Link;

pub const BADGE: &str = "AI-Powered Student Success Platform";

pub const TITLE_LEAD: &str = "Spot At-Risk Students";
pub const TITLE_ACCENT: &str = "Before It's Too Late";

pub const TAGLINE: &str = "Attendance, assessment scores and attempt history fused into one \
    risk picture, with clear explanations and timely alerts for mentors and counsellors.";

pub const CALLS_TO_ACTION: [Link; 2] = [
    Link {
        label: "Explore Features",
        href: "#features",
    },
    Link {
        label: "See How It Works",
        href: "#workflow",
    },
];

/// Figures shown under the call-to-action buttons
pub const QUICK_STATS: [(&str, &str); 3] = [
    ("3", "Risk Levels"),
    ("6", "Step Pipeline"),
    ("24/7", "Monitoring"),
];
