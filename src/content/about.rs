//! About section copy.

use super::{Card, Heading, Icon};

pub const HEADING: Heading = Heading {
    lead: "About the",
    accent: "System",
    subtitle: "A comprehensive early warning system designed to identify at-risk students before it's too late",
};

pub const TITLE: &str = "Transforming Student Success Through Data";

pub const PARAGRAPHS: [&str; 2] = [
    "Educational institutions often identify struggling students only after final examination \
     results are published. By then, meaningful intervention becomes difficult. Our Early Warning \
     System changes that.",
    "By consolidating attendance records, assessment scores, and subject attempt history into a \
     single platform, we provide educators with a holistic view of student performance, enabling \
     timely and effective interventions.",
];

pub const MISSION: Card = Card {
    icon: Icon::Target,
    title: "Our Mission",
    description: "To reduce student dropout rates through early identification, transparent \
                  analytics, and actionable insights.",
};

pub const HIGHLIGHTS: [Card; 3] = [
    Card {
        icon: Icon::Zap,
        title: "Real-Time Monitoring",
        description: "Continuous tracking of student performance indicators with instant alerts \
                      for mentors and counselors.",
    },
    Card {
        icon: Icon::ShieldCheck,
        title: "Transparent & Explainable",
        description: "Rule-based machine learning with clear explanations for every risk \
                      assessment decision.",
    },
    Card {
        icon: Icon::Sliders,
        title: "Easy Configuration",
        description: "Low-cost solution that integrates seamlessly with existing institutional \
                      data sources.",
    },
];

/// Heading above the chart carousel
pub const CHARTS_HEADING: Heading = Heading {
    lead: "The Data Behind",
    accent: "Dropout",
    subtitle: "Why early identification and counselling change outcomes",
};
