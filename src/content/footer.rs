//! Footer: brand blurb, link columns, team credits and copyright.

use chrono::Datelike;
use serde::Serialize;

use super::Link;

pub const BLURB: &str = "Empowering educators with data-driven insights to reduce student dropout rates.";
pub const INSTITUTION: &str = "Manipal University Jaipur";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

impl TeamMember {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Kritika Benjwal",
        github: "https://github.com/kritikabenjwal",
        linkedin: "https://linkedin.com/in/kritikabenjwal",
        email: "kritika.benjwal@example.com",
    },
    TeamMember {
        name: "Rishika Agrawal",
        github: "https://github.com/rishikaagrawal",
        linkedin: "https://linkedin.com/in/rishikaagrawal",
        email: "rishika.agrawal@example.com",
    },
    TeamMember {
        name: "Varun Narayan Jain",
        github: "https://github.com/varunnarayanjain",
        linkedin: "https://linkedin.com/in/varunnarayanjain",
        email: "varun.jain@example.com",
    },
];

pub const QUICK_LINKS: [Link; 4] = [
    Link { label: "Home", href: "#home" },
    Link { label: "About", href: "#about" },
    Link { label: "Features", href: "#features" },
    Link { label: "Workflow", href: "#workflow" },
];

pub const CONTACT_LINES: [&str; 3] = ["Manipal University Jaipur", "Dehmi Kalan, Jaipur", "Rajasthan, India"];

pub const CONTACT_EMAIL: Link = Link {
    label: "info@muj.ac.in",
    href: "mailto:info@muj.ac.in",
};

pub const RESOURCES: [Link; 4] = [
    Link { label: "Documentation", href: "#" },
    Link { label: "API Reference", href: "#" },
    Link { label: "Support", href: "#" },
    Link { label: "Privacy Policy", href: "#" },
];

pub const CREDITS_TITLE: &str = "Made with ❤ by";
pub const COURSE_NOTE: &str = "Built for Emerging Trends & Technologies Course";

pub fn copyright(year: i32) -> String {
    format!("© {} Early Warning System. All rights reserved.", year)
}

/// Calendar year on the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto() {
        assert_eq!(TEAM[2].mailto(), "mailto:varun.jain@example.com");
    }

    #[test]
    fn test_copyright_uses_year() {
        assert_eq!(copyright(2025), "© 2025 Early Warning System. All rights reserved.");
        assert!(current_year() >= 2024);
    }

    #[test]
    fn test_quick_links_are_anchors() {
        assert!(QUICK_LINKS.iter().all(|l| l.href.starts_with('#')));
    }
}
