//! Workflow section: the six-step pipeline and the technology strip.

use serde::Serialize;

use super::{Heading, Icon};

pub const HEADING: Heading = Heading {
    lead: "How It",
    accent: "Works",
    subtitle: "A seamless six-step process from data ingestion to intervention",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind gradient stops of the step badge
    pub gradient: &'static str,
}

pub const STEPS: [Step; 6] = [
    Step {
        icon: Icon::Upload,
        title: "Data Ingestion",
        description: "Upload or sync attendance records, assessment scores, and subject attempt data from existing spreadsheets.",
        gradient: "from-orange-400 to-orange-500",
    },
    Step {
        icon: Icon::Database,
        title: "Data Fusion",
        description: "All student records are merged into consolidated profiles, enabling holistic performance analysis.",
        gradient: "from-orange-500 to-orange-600",
    },
    Step {
        icon: Icon::Brain,
        title: "Risk Identification",
        description: "Rule-based ML evaluates thresholds for attendance, marks trends, and attempts to classify risk levels.",
        gradient: "from-orange-600 to-red-500",
    },
    Step {
        icon: Icon::Eye,
        title: "Visualization",
        description: "Dashboard displays color-coded risk indicators (Green, Yellow, Red) with drill-down capabilities.",
        gradient: "from-red-500 to-red-600",
    },
    Step {
        icon: Icon::MessageCircle,
        title: "LLM Explanations",
        description: "RAG-powered LLM generates contextual explanations and recommendations based on institutional policies.",
        gradient: "from-red-600 to-orange-600",
    },
    Step {
        icon: Icon::Bell,
        title: "Automated Notifications",
        description: "Mentors and guardians receive timely alerts for moderate and high-risk students.",
        gradient: "from-orange-600 to-orange-500",
    },
];

pub const TECHNOLOGIES_TITLE: &str = "Powered By Modern Technologies";

pub const TECHNOLOGIES: [&str; 4] = [
    "Machine Learning",
    "LLMs & RAG",
    "Vector Database",
    "Docker & Kubernetes",
];

/// Step number shown in the badge corner, starting at 1
pub fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Whether an arrow to the next step follows step `index`
pub fn has_next(index: usize) -> bool {
    index + 1 < STEPS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        assert_eq!(step_number(0), "01");
        assert_eq!(step_number(5), "06");
    }

    #[test]
    fn test_last_step_has_no_arrow() {
        assert!(has_next(4));
        assert!(!has_next(5));
    }
}
