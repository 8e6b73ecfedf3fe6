//! Chart datasets
//!
//! Hand-authored statistics shown on the three chart cards. Defined once at
//! load time and never mutated.

use serde::Serialize;

/// One slice of the dropout-reasons pie
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slice {
    pub name: &'static str,
    /// Percentage of students citing the reason
    pub value: f64,
    pub color: &'static str,
}

/// One bar of the counselor-ratio chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioBar {
    pub name: &'static str,
    /// Students per counselor
    pub students: f64,
    pub fill: &'static str,
}

/// One semester of the intervention-impact chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterventionPoint {
    pub semester: &'static str,
    /// Cumulative dropout % without intervention
    pub no_intervention: f64,
    /// Cumulative dropout % with early counselling
    pub early_counselling: f64,
}

pub const DROPOUT_REASONS: [Slice; 5] = [
    Slice { name: "Emotional Stress", value: 52.0, color: "#ea580c" },
    Slice { name: "Mental Health", value: 42.0, color: "#f97316" },
    Slice { name: "Financial Pressure", value: 38.0, color: "#fb923c" },
    Slice { name: "Work Obligations", value: 30.0, color: "#fdba74" },
    Slice { name: "Family Issues", value: 22.0, color: "#fed7aa" },
];

pub const COUNSELOR_RATIOS: [RatioBar; 4] = [
    RatioBar { name: "Recommended", students: 250.0, fill: "#16a34a" },
    RatioBar { name: "U.S. Average", students: 385.0, fill: "#ea580c" },
    RatioBar { name: "Under-funded", students: 550.0, fill: "#991b1b" },
    RatioBar { name: "Critical", students: 740.0, fill: "#7f1d1d" },
];

pub const INTERVENTION_TREND: [InterventionPoint; 6] = [
    InterventionPoint { semester: "S1", no_intervention: 12.0, early_counselling: 4.0 },
    InterventionPoint { semester: "S2", no_intervention: 18.0, early_counselling: 6.0 },
    InterventionPoint { semester: "S3", no_intervention: 24.0, early_counselling: 7.0 },
    InterventionPoint { semester: "S4", no_intervention: 29.0, early_counselling: 9.0 },
    InterventionPoint { semester: "S5", no_intervention: 33.0, early_counselling: 10.0 },
    InterventionPoint { semester: "S6", no_intervention: 38.0, early_counselling: 11.0 },
];

/// Value-axis domain of the counselor-ratio chart
pub const RATIO_DOMAIN: (f64, f64) = (0.0, 800.0);

/// Value-axis domain of the intervention chart (percent)
pub const INTERVENTION_DOMAIN: (f64, f64) = (0.0, 45.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasets_fit_their_domains() {
        assert!(COUNSELOR_RATIOS
            .iter()
            .all(|b| b.students >= RATIO_DOMAIN.0 && b.students <= RATIO_DOMAIN.1));
        assert!(INTERVENTION_TREND.iter().all(|p| {
            p.no_intervention <= INTERVENTION_DOMAIN.1 && p.early_counselling <= INTERVENTION_DOMAIN.1
        }));
    }

    #[test]
    fn test_intervention_is_cumulative() {
        for pair in INTERVENTION_TREND.windows(2) {
            assert!(pair[1].no_intervention >= pair[0].no_intervention);
            assert!(pair[1].early_counselling >= pair[0].early_counselling);
        }
    }
}
