//! Early-counselling alert card
//!
//! The tilting card in the About section. Every block carries the depth it
//! lifts to while the card is hovered.

use serde::Serialize;

use super::Icon;

/// Depth in pixels a block lifts towards the viewer on hover
pub type Depth = f64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    pub icon: Icon,
    /// Tailwind color family of the icon badge
    pub tone: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bullet {
    pub lead: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Figure {
    pub label: &'static str,
    pub value: &'static str,
}

pub const TITLE: (&str, Depth) = ("Why Early Counselling Matters", 50.0);
pub const SUBTITLE: (&str, Depth) = ("The Hidden Crisis Behind College Dropout Rates", 60.0);

pub const IMAGE_URL: &str = "https://images.unsplash.com/photo-1531545514256-b1400bc00f31?w=800&q=80";
pub const IMAGE_ALT: &str = "Student in counselling session with a professional";
pub const IMAGE_DEPTH: Depth = 100.0;

/// Badges floating over the image
pub const BADGES: [(Icon, &str); 2] = [
    (Icon::AlertTriangle, "40% Dropout Rate"),
    (Icon::Users, "43.1M Students Affected"),
];

pub const FINDING_TITLE: &str = "Critical Finding";
pub const FINDING: &str = "A 2023 Gallup poll found emotional stress (50-53%) and mental health \
    (41-43%) were the top two reasons students dropped out, yet 48 of 50 U.S. states lack the \
    recommended 1:250 counselor-to-student ratio (average is 385:1).";
pub const FINDING_DEPTH: Depth = 80.0;

pub const STATS: [Stat; 4] = [
    Stat {
        icon: Icon::TrendingUp,
        tone: "red",
        title: "24% Freshman Dropout",
        detail: "Nearly 1 in 4 first-year students leave before sophomore year, the highest-risk period.",
    },
    Stat {
        icon: Icon::Brain,
        tone: "orange",
        title: "40%+ Considered Leaving",
        detail: "Over 40% of enrolled undergrads have considered dropping out in the past 6 months (Gallup/Lumina, 2022).",
    },
    Stat {
        icon: Icon::HeartPulse,
        tone: "purple",
        title: "385:1 Counselor Ratio",
        detail: "The U.S. average is 385 students per counselor, 1.5x worse than the recommended 250:1 limit.",
    },
    Stat {
        icon: Icon::Shield,
        tone: "green",
        title: "Early Intervention Works",
        detail: "Research shows more counseling sessions directly reduce dropout risk and improve student outcomes.",
    },
];
pub const STATS_DEPTH: Depth = 100.0;

pub const BULLETS_TITLE: &str = "Why Counselling at Early Stages is Critical";
pub const BULLETS: [Bullet; 4] = [
    Bullet {
        lead: "Catches struggles early:",
        text: "17% of U.S. high schools have zero counselors, so many students arrive at college already lacking guidance and coping skills.",
    },
    Bullet {
        lead: "First-gen students at highest risk:",
        text: "FGLI students are 2x more likely to drop out; only 1 in 3 had a mentor in high school.",
    },
    Bullet {
        lead: "Mental health is a predictor:",
        text: "1 in 4 college students report mental health concerns impacting academics at least 6 days/month.",
    },
    Bullet {
        lead: "Economic cost is massive:",
        text: "Dropouts earn ~35% less income and are 2x more likely to be unemployed than degree holders.",
    },
];
pub const BULLETS_DEPTH: Depth = 70.0;

pub const FIGURES: [Figure; 3] = [
    Figure {
        label: "6-yr Dropout Rate",
        value: "29.2%",
    },
    Figure {
        label: "Students Affected",
        value: "43.1M",
    },
    Figure {
        label: "Income Loss",
        value: "~35%",
    },
];
pub const FIGURES_DEPTH: Depth = 30.0;
