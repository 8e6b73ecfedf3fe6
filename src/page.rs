//! Page Shell
//!
//! Fixed section order and a text outline of the whole page. The outline is
//! what the UI renders, reduced to headings and item titles, so page
//! structure can be checked without a browser.

use serde::Serialize;
use std::fmt;

use crate::charts::ChartKind;
use crate::content::{about, alert, features, footer, hero, workflow, FeatureTab, Link, BRAND};

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Features,
    Workflow,
    Footer,
}

impl SectionId {
    pub const ORDER: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Features,
        SectionId::Workflow,
        SectionId::Footer,
    ];

    /// Element id used for in-page links
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::About => "about",
            SectionId::Features => "features",
            SectionId::Workflow => "workflow",
            SectionId::Footer => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionId::Hero => "Hero",
            SectionId::About => "About",
            SectionId::Features => "Features",
            SectionId::Workflow => "Workflow",
            SectionId::Footer => "Footer",
        };
        f.write_str(name)
    }
}

/// Header navigation
pub const NAV_LINKS: [Link; 5] = [
    Link { label: "Home", href: "#home" },
    Link { label: "About", href: "#about" },
    Link { label: "Features", href: "#features" },
    Link { label: "Workflow", href: "#workflow" },
    Link { label: "Contact", href: "#contact" },
];

/// One section reduced to its heading and item titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionOutline {
    pub id: SectionId,
    pub anchor: &'static str,
    pub heading: String,
    pub items: Vec<String>,
}

/// The page top to bottom with the given Features tab selected
pub fn outline(tab: FeatureTab) -> Vec<SectionOutline> {
    SectionId::ORDER
        .iter()
        .map(|&id| {
            let (heading, items) = section_content(id, tab);
            SectionOutline {
                id,
                anchor: id.anchor(),
                heading,
                items,
            }
        })
        .collect()
}

fn section_content(id: SectionId, tab: FeatureTab) -> (String, Vec<String>) {
    match id {
        SectionId::Hero => (
            format!("{} {}", hero::TITLE_LEAD, hero::TITLE_ACCENT),
            hero::CALLS_TO_ACTION.iter().map(|l| l.label.to_string()).collect(),
        ),
        SectionId::About => {
            let mut items: Vec<String> = vec![about::TITLE.to_string(), alert::TITLE.0.to_string()];
            items.extend(ChartKind::ALL.iter().map(|k| k.card().title.to_string()));
            items.extend(about::HIGHLIGHTS.iter().map(|c| c.title.to_string()));
            (about::HEADING.text(), items)
        }
        SectionId::Features => {
            let mut items = vec![format!("[{}]", tab.label())];
            items.extend(tab.features().iter().map(|c| c.title.to_string()));
            (features::HEADING.text(), items)
        }
        SectionId::Workflow => (
            workflow::HEADING.text(),
            workflow::STEPS.iter().map(|s| s.title.to_string()).collect(),
        ),
        SectionId::Footer => (
            BRAND.to_string(),
            footer::TEAM.iter().map(|m| m.name.to_string()).collect(),
        ),
    }
}

/// Render an outline as indented text
pub fn outline_text(sections: &[SectionOutline]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("{} (#{}): {}\n", section.id, section.anchor, section.heading));
        for item in &section.items {
            out.push_str(&format!("  - {}\n", item));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(sections: &[SectionOutline]) -> Vec<SectionId> {
        sections.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let page = outline(FeatureTab::Teacher);
        assert_eq!(ids(&page), SectionId::ORDER.to_vec());
        let anchors: Vec<_> = page.iter().map(|s| s.anchor).collect();
        assert_eq!(anchors, vec!["home", "about", "features", "workflow", "contact"]);
    }

    #[test]
    fn test_switching_tab_swaps_features_only() {
        let teacher = outline(FeatureTab::Teacher);
        let counsellor = outline(FeatureTab::Counsellor);

        assert_eq!(ids(&teacher), ids(&counsellor));
        for (a, b) in teacher.iter().zip(&counsellor) {
            if a.id == SectionId::Features {
                assert_ne!(a.items, b.items);
                assert_eq!(a.heading, b.heading);
            } else {
                assert_eq!(a, b);
            }
        }

        let features = &counsellor[2];
        assert_eq!(features.items[0], "[Counsellor Dashboard]");
        assert!(features.items.contains(&"LLM-Powered Insights".to_string()));
        assert!(!features.items.contains(&"Smart Filters".to_string()));
    }

    #[test]
    fn test_nav_matches_sections() {
        let hrefs: Vec<_> = SectionId::ORDER.iter().map(|s| s.href()).collect();
        let nav: Vec<_> = NAV_LINKS.iter().map(|l| l.href.to_string()).collect();
        assert_eq!(hrefs, nav);
    }

    #[test]
    fn test_outline_text() {
        let text = outline_text(&outline(FeatureTab::Teacher));
        assert!(text.starts_with("Hero (#home): "));
        assert!(text.contains("Workflow (#workflow): How It Works\n  - Data Ingestion\n"));
    }
}
