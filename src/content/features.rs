//! Features section: two dashboards behind a tab switcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

use super::{Card, Heading, Icon};

pub const HEADING: Heading = Heading {
    lead: "Powerful",
    accent: "Features",
    subtitle: "Tailored dashboards for teachers and counsellors with specialized tools",
};

/// Which dashboard's features are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureTab {
    #[default]
    Teacher,
    Counsellor,
}

impl FeatureTab {
    pub const ALL: [FeatureTab; 2] = [FeatureTab::Teacher, FeatureTab::Counsellor];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureTab::Teacher => "teacher",
            FeatureTab::Counsellor => "counsellor",
        }
    }

    /// Tab button text
    pub fn label(&self) -> &'static str {
        match self {
            FeatureTab::Teacher => "Teacher Dashboard",
            FeatureTab::Counsellor => "Counsellor Dashboard",
        }
    }

    pub fn features(&self) -> &'static [Card] {
        match self {
            FeatureTab::Teacher => &TEACHER_FEATURES,
            FeatureTab::Counsellor => &COUNSELLOR_FEATURES,
        }
    }
}

impl fmt::Display for FeatureTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureTab {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "teacher" => Ok(FeatureTab::Teacher),
            "counsellor" | "counselor" => Ok(FeatureTab::Counsellor),
            other => Err(SiteError::UnknownTab(other.to_string())),
        }
    }
}

pub const TEACHER_FEATURES: [Card; 6] = [
    Card {
        icon: Icon::BarChart,
        title: "Performance Analytics",
        description: "Visual dashboards showing attendance trends, assessment scores, and historical performance data.",
    },
    Card {
        icon: Icon::AlertCircle,
        title: "Risk Indicators",
        description: "Color-coded alerts (Green, Yellow, Red) for easy identification of at-risk students.",
    },
    Card {
        icon: Icon::Filter,
        title: "Smart Filters",
        description: "Filter students by risk level, department, semester, or custom criteria.",
    },
    Card {
        icon: Icon::FileText,
        title: "Detailed Reports",
        description: "Generate comprehensive reports with attendance, marks, and attempt history.",
    },
    Card {
        icon: Icon::Bell,
        title: "Automated Alerts",
        description: "Receive notifications when students cross critical risk thresholds.",
    },
    Card {
        icon: Icon::TrendingUp,
        title: "Trend Analysis",
        description: "Track student progress over time with intuitive graphs and visualizations.",
    },
];

pub const COUNSELLOR_FEATURES: [Card; 6] = [
    Card {
        icon: Icon::Brain,
        title: "LLM-Powered Insights",
        description: "Get AI-generated explanations and intervention recommendations using RAG.",
    },
    Card {
        icon: Icon::Users,
        title: "Student Profiles",
        description: "Access consolidated student data including academic and behavioral indicators.",
    },
    Card {
        icon: Icon::MessageSquare,
        title: "Communication Hub",
        description: "Direct messaging with students and guardians for effective follow-up.",
    },
    Card {
        icon: Icon::Shield,
        title: "Intervention Tracking",
        description: "Document interventions, meetings, and track their effectiveness over time.",
    },
    Card {
        icon: Icon::FileText,
        title: "Case Management",
        description: "Organize and manage student cases with notes, documents, and action items.",
    },
    Card {
        icon: Icon::BarChart,
        title: "Success Metrics",
        description: "Measure intervention effectiveness with data-driven success indicators.",
    },
];
