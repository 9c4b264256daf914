//! Keyword-driven prompt analysis

use super::{FeatureTag, SectionId, StyleTag, TemplateConfig, ThemeId};
use std::collections::BTreeSet;
use tracing::debug;

/// Section trigger table, in the fixed order sections are added to a page.
///
/// Each row is tested independently; prompt word order never matters.
const SECTION_TRIGGERS: &[(SectionId, &[&str])] = &[
    (SectionId::About, &["about", "story"]),
    (SectionId::Features, &["feature", "service"]),
    (SectionId::Pricing, &["pricing", "plan"]),
    (SectionId::Team, &["team", "member"]),
    (SectionId::Gallery, &["gallery", "portfolio", "work"]),
    (SectionId::Testimonials, &["testimonial", "review"]),
    (SectionId::Contact, &["contact", "form"]),
    (SectionId::Faq, &["faq", "question"]),
];

/// Appended when the prompt names no section at all
const DEFAULT_SECTIONS: [SectionId; 2] = [SectionId::Features, SectionId::Contact];

const FEATURE_TRIGGERS: &[(FeatureTag, &[&str])] = &[
    (FeatureTag::Responsive, &["responsive"]),
    (FeatureTag::Modern, &["modern"]),
    (FeatureTag::Minimal, &["minimal"]),
    (FeatureTag::Animated, &["animation"]),
    (FeatureTag::DarkMode, &["dark"]),
];

/// Later rows win when several styles are mentioned
const STYLE_TRIGGERS: &[(StyleTag, &[&str])] = &[
    (StyleTag::Minimal, &["minimal", "clean"]),
    (StyleTag::Bold, &["bold", "vibrant"]),
    (StyleTag::Elegant, &["elegant", "luxury"]),
];

fn mentions(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// Detect which sections a prompt asks for
pub fn detect_sections(prompt: &str) -> Vec<SectionId> {
    let text = prompt.to_lowercase();
    let mut sections = vec![SectionId::Hero];
    sections.extend(
        SECTION_TRIGGERS
            .iter()
            .filter(|(_, words)| mentions(&text, words))
            .map(|(section, _)| *section),
    );

    if sections.len() == 1 {
        sections.extend(DEFAULT_SECTIONS);
    }
    sections
}

/// Detect feature hints
pub fn detect_features(prompt: &str) -> BTreeSet<FeatureTag> {
    let text = prompt.to_lowercase();
    FEATURE_TRIGGERS
        .iter()
        .filter(|(_, words)| mentions(&text, words))
        .map(|(feature, _)| *feature)
        .collect()
}

/// Detect the visual style
pub fn detect_style(prompt: &str) -> StyleTag {
    let text = prompt.to_lowercase();
    STYLE_TRIGGERS
        .iter()
        .filter(|(_, words)| mentions(&text, words))
        .map(|(style, _)| *style)
        .last()
        .unwrap_or_default()
}

/// Map a prompt and theme name to a [`TemplateConfig`].
///
/// Never fails: an unrecognized theme name resolves to the portfolio theme.
pub fn analyze(prompt: &str, theme: &str) -> TemplateConfig {
    let theme_id = match theme.parse::<ThemeId>() {
        Ok(id) => id,
        Err(err) => {
            debug!(%err, "falling back to the portfolio theme");
            ThemeId::Portfolio
        }
    };
    analyze_with_theme(prompt, theme_id)
}

/// Same as [`analyze`] for an already-resolved theme
pub fn analyze_with_theme(prompt: &str, theme: ThemeId) -> TemplateConfig {
    let config = TemplateConfig {
        theme,
        colors: theme.palette(),
        sections: detect_sections(prompt),
        features: detect_features(prompt),
        style: detect_style(prompt),
    };
    debug!(
        theme = %config.theme,
        sections = ?config.sections,
        style = ?config.style,
        "analyzed prompt"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_without_triggers_gets_default_sections() {
        let config = analyze("Something nice for my bakery", "tech");
        assert_eq!(
            config.sections,
            vec![SectionId::Hero, SectionId::Features, SectionId::Contact]
        );
    }

    #[test]
    fn pricing_alone_excludes_unrelated_sections() {
        let sections = detect_sections("Show our pricing");
        assert_eq!(sections, vec![SectionId::Hero, SectionId::Pricing]);
        for absent in [
            SectionId::Team,
            SectionId::Gallery,
            SectionId::Testimonials,
            SectionId::Faq,
        ] {
            assert!(!sections.contains(&absent));
        }
    }

    #[test]
    fn sections_follow_priority_not_prompt_order() {
        let sections = detect_sections("FAQ first, then a contact form, then our story");
        assert_eq!(
            sections,
            vec![
                SectionId::Hero,
                SectionId::About,
                SectionId::Contact,
                SectionId::Faq
            ]
        );
    }

    #[test]
    fn triggers_match_substrings_case_insensitively() {
        let sections = detect_sections("Customer REVIEWS and Team Members");
        assert_eq!(
            sections,
            vec![SectionId::Hero, SectionId::Team, SectionId::Testimonials]
        );
    }

    #[test]
    fn sections_never_repeat() {
        let sections = detect_sections("about about story gallery portfolio work");
        let unique: BTreeSet<_> = sections.iter().collect();
        assert_eq!(unique.len(), sections.len());
        assert_eq!(sections[0], SectionId::Hero);
    }

    #[test]
    fn features_do_not_gate_sections() {
        let config = analyze("a responsive dark site with animation", "blog");
        assert_eq!(
            config.features,
            BTreeSet::from([
                FeatureTag::Responsive,
                FeatureTag::Animated,
                FeatureTag::DarkMode
            ])
        );
        assert_eq!(
            config.sections,
            vec![SectionId::Hero, SectionId::Features, SectionId::Contact]
        );
    }

    #[test]
    fn last_matching_style_wins() {
        assert_eq!(detect_style("plain"), StyleTag::Modern);
        assert_eq!(detect_style("clean layout"), StyleTag::Minimal);
        assert_eq!(detect_style("clean but bold"), StyleTag::Bold);
        assert_eq!(detect_style("bold, vibrant and luxury"), StyleTag::Elegant);
    }

    #[test]
    fn unknown_theme_uses_portfolio_palette() {
        let config = analyze("anything", "neon");
        assert_eq!(config.theme, ThemeId::Portfolio);
        assert_eq!(config.colors, ThemeId::Portfolio.palette());
    }
}
