//! Static copy for the informational pages: home, about, FAQ, and site navigation.

mod pages;

pub use pages::{about, faq, home, navigation};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub primary_action: NavLink,
    pub secondary_action: NavLink,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub heading: &'static str,
    pub body: &'static str,
    pub action: NavLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub hero: Hero,
    pub features_heading: &'static str,
    pub features_intro: &'static str,
    pub features: Vec<Feature>,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPage {
    pub title: &'static str,
    pub intro: &'static str,
    pub mission: Feature,
    pub pillars: Vec<Feature>,
    pub disclaimer: Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqPage {
    pub title: &'static str,
    pub intro: &'static str,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub brand: NavLink,
    pub links: Vec<NavLink>,
    pub primary_action: NavLink,
}

/// Addressable pages served by the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPage {
    Home,
    About,
    Faq,
    Navigation,
}

impl ContentPage {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "home" => Some(Self::Home),
            "about" => Some(Self::About),
            "faq" => Some(Self::Faq),
            "navigation" | "nav" => Some(Self::Navigation),
            _ => None,
        }
    }

    pub fn to_json(self) -> serde_json::Value {
        let rendered = match self {
            ContentPage::Home => serde_json::to_value(home()),
            ContentPage::About => serde_json::to_value(about()),
            ContentPage::Faq => serde_json::to_value(faq()),
            ContentPage::Navigation => serde_json::to_value(navigation()),
        };
        // Static string fields only; serialization cannot fail.
        rendered.unwrap_or(serde_json::Value::Null)
    }
}
