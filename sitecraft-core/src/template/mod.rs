//! Deterministic, rule-based page generation.
//!
//! [`analyze`] maps a prompt and theme name to a [`TemplateConfig`];
//! [`compose`] turns that configuration into a complete document. Both are
//! pure functions, so the same `(prompt, theme)` always yields the same bytes.

pub mod analyzer;
pub mod composer;
pub mod sections;

pub use analyzer::analyze;
pub use composer::{compose, document_shell, generate_from_template};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Supported theme identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Portfolio,
    Tech,
    Ecommerce,
    Blog,
    Saas,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Portfolio,
        ThemeId::Tech,
        ThemeId::Ecommerce,
        ThemeId::Blog,
        ThemeId::Saas,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Portfolio => "portfolio",
            ThemeId::Tech => "tech",
            ThemeId::Ecommerce => "ecommerce",
            ThemeId::Blog => "blog",
            ThemeId::Saas => "saas",
        }
    }

    /// Brand name shown in the header, footer and title
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeId::Portfolio => "Portfolio",
            ThemeId::Tech => "Tech",
            ThemeId::Ecommerce => "Ecommerce",
            ThemeId::Blog => "Blog",
            ThemeId::Saas => "Saas",
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            ThemeId::Portfolio => ColorPalette::new("#8B5CF6", "#EC4899", "#F59E0B"),
            ThemeId::Tech => ColorPalette::new("#3B82F6", "#06B6D4", "#8B5CF6"),
            ThemeId::Ecommerce => ColorPalette::new("#10B981", "#F59E0B", "#EF4444"),
            ThemeId::Blog => ColorPalette::new("#EF4444", "#F97316", "#EC4899"),
            ThemeId::Saas => ColorPalette::new("#6366F1", "#8B5CF6", "#06B6D4"),
        }
    }

    /// Parse a theme name, falling back to [`ThemeId::Portfolio`]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ThemeId::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTheme(wanted.to_string()))
    }
}

/// Ordered color triple injected into every section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

impl ColorPalette {
    pub const fn new(primary: &'static str, secondary: &'static str, accent: &'static str) -> Self {
        Self {
            primary,
            secondary,
            accent,
        }
    }
}

/// Page sections; each maps to exactly one builder in [`sections`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Features,
    Pricing,
    Team,
    Gallery,
    Testimonials,
    Contact,
    Faq,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Features => "features",
            SectionId::Pricing => "pricing",
            SectionId::Team => "team",
            SectionId::Gallery => "gallery",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
            SectionId::Faq => "faq",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature hints detected in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureTag {
    Responsive,
    Modern,
    Minimal,
    Animated,
    DarkMode,
}

/// Overall visual style detected in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    #[default]
    Modern,
    Minimal,
    Bold,
    Elegant,
}

/// Structured description of the page to compose.
///
/// `sections` is never empty and always starts with [`SectionId::Hero`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateConfig {
    pub theme: ThemeId,
    pub colors: ColorPalette,
    pub sections: Vec<SectionId>,
    pub features: BTreeSet<FeatureTag>,
    pub style: StyleTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_parse_case_insensitively() {
        assert_eq!("Tech".parse::<ThemeId>(), Ok(ThemeId::Tech));
        assert_eq!(" saas ".parse::<ThemeId>(), Ok(ThemeId::Saas));
        assert_eq!(
            "retro".parse::<ThemeId>(),
            Err(UnknownTheme("retro".to_string()))
        );
    }

    #[test]
    fn unknown_theme_falls_back_to_portfolio() {
        assert_eq!(ThemeId::from_name_or_default("retro"), ThemeId::Portfolio);
    }

    #[test]
    fn every_theme_round_trips_through_its_name() {
        for theme in ThemeId::ALL {
            assert_eq!(theme.as_str().parse::<ThemeId>(), Ok(theme));
        }
    }
}
