//! Static Marketing Content
//!
//! All copy shown on the page, as typed constants. Nothing here changes at
//! runtime; the UI renders these records and the CLI prints them.

pub mod about;
pub mod alert;
pub mod features;
pub mod footer;
pub mod hero;
pub mod workflow;

use serde::Serialize;

pub use features::FeatureTab;

/// Icons used across the page, rendered as glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    AlertCircle,
    AlertTriangle,
    ArrowRight,
    BarChart,
    Bell,
    BookOpen,
    Brain,
    Database,
    Eye,
    FileText,
    Filter,
    Github,
    GraduationCap,
    HeartPulse,
    Linkedin,
    Mail,
    MessageCircle,
    MessageSquare,
    Moon,
    Shield,
    ShieldCheck,
    Sliders,
    Sun,
    Target,
    TrendingUp,
    Upload,
    Users,
    Zap,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::AlertCircle => "❗",
            Icon::AlertTriangle => "⚠️",
            Icon::ArrowRight => "→",
            Icon::BarChart => "📊",
            Icon::Bell => "🔔",
            Icon::BookOpen => "📖",
            Icon::Brain => "🧠",
            Icon::Database => "🗄️",
            Icon::Eye => "👁️",
            Icon::FileText => "📄",
            Icon::Filter => "🔎",
            Icon::Github => "🐙",
            Icon::GraduationCap => "🎓",
            Icon::HeartPulse => "💓",
            Icon::Linkedin => "💼",
            Icon::Mail => "✉️",
            Icon::MessageCircle => "💭",
            Icon::MessageSquare => "💬",
            Icon::Moon => "🌙",
            Icon::Shield => "🛡️",
            Icon::ShieldCheck => "✅",
            Icon::Sliders => "🎛️",
            Icon::Sun => "☀️",
            Icon::Target => "🎯",
            Icon::TrendingUp => "📈",
            Icon::Upload => "📤",
            Icon::Users => "👥",
            Icon::Zap => "⚡",
        }
    }
}

/// A hyperlink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Icon, title and blurb; the building block of most sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Two-tone section heading: plain lead followed by a gradient accent word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub lead: &'static str,
    pub accent: &'static str,
    pub subtitle: &'static str,
}

impl Heading {
    /// Heading as plain text
    pub fn text(&self) -> String {
        if self.lead.is_empty() {
            self.accent.to_string()
        } else {
            format!("{} {}", self.lead, self.accent)
        }
    }
}

pub const BRAND: &str = "Early Warning System";
pub const BRAND_MARK: &str = "EWS";
