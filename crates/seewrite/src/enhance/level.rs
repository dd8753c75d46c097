//! Reading level state and per-tier presentation.

use seewrite_core::{definitions::DefinitionsTable, model::Tier};

/// Highlights longer than this many characters are dimmed for beginners.
const LONG_HIGHLIGHT_CHARS: usize = 8;
const DIMMED_OPACITY: f32 = 0.6;

/// Message shown next to the level badge after a tier change.
pub fn level_message(tier: Tier) -> &'static str {
    match tier {
        Tier::Beginner => "Simple explanations, larger text, basic terms",
        Tier::Intermediate => "Balanced detail with moderate complexity",
        Tier::Advanced => "Technical depth, compact layout, full terminology",
    }
}

/// Visual density of rendered content for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    concept_font_px: u16,
    concept_line_height: &'static str,
    concept_weight: u16,
    concept_padding_px: u16,
    question_font_px: u16,
    visible_questions: Option<usize>,
    dim_long_highlights: bool,
    highlight_weight: Option<u16>,
}

impl Presentation {
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Beginner => Self {
                concept_font_px: 17,
                concept_line_height: "2.0",
                concept_weight: 400,
                concept_padding_px: 20,
                question_font_px: 15,
                visible_questions: Some(2),
                dim_long_highlights: true,
                highlight_weight: None,
            },
            Tier::Intermediate => Self {
                concept_font_px: 15,
                concept_line_height: "1.7",
                concept_weight: 400,
                concept_padding_px: 16,
                question_font_px: 14,
                visible_questions: None,
                dim_long_highlights: false,
                highlight_weight: Some(500),
            },
            Tier::Advanced => Self {
                concept_font_px: 14,
                concept_line_height: "1.5",
                concept_weight: 500,
                concept_padding_px: 14,
                question_font_px: 13,
                visible_questions: None,
                dim_long_highlights: false,
                highlight_weight: Some(600),
            },
        }
    }

    /// Inline style of a concept body.
    pub fn concept_style(&self) -> String {
        format!(
            "font-size: {}px; line-height: {}; font-weight: {}; padding: {}px",
            self.concept_font_px, self.concept_line_height, self.concept_weight, self.concept_padding_px
        )
    }

    /// Whether the question at `index` is shown.
    pub fn question_visible(&self, index: usize) -> bool {
        self.visible_questions.is_none_or(|visible| index < visible)
    }

    /// Inline style of the question at `index`.
    pub fn question_style(&self, index: usize) -> String {
        if self.question_visible(index) {
            format!("display: block; font-size: {}px", self.question_font_px)
        } else {
            "display: none".to_string()
        }
    }

    /// Opacity of an acronym or concept highlight reading `text`.
    pub fn highlight_opacity(&self, text: &str) -> f32 {
        if self.dim_long_highlights && text.chars().count() > LONG_HIGHLIGHT_CHARS {
            DIMMED_OPACITY
        } else {
            1.0
        }
    }

    /// Font weight of acronym and concept highlights; `None` keeps the stylesheet weight.
    pub fn highlight_weight(&self) -> Option<u16> {
        self.highlight_weight
    }

    /// Inline style of an acronym or concept highlight, if any applies.
    pub fn highlight_style(&self, text: &str) -> Option<String> {
        let mut rules = Vec::new();
        let opacity = self.highlight_opacity(text);
        if self.dim_long_highlights && opacity < 1.0 {
            rules.push(format!("opacity: {opacity}"));
        } else if !self.dim_long_highlights {
            rules.push("opacity: 1".to_string());
        }
        if let Some(weight) = self.highlight_weight {
            rules.push(format!("font-weight: {weight}"));
        }
        (!rules.is_empty()).then(|| rules.join("; "))
    }
}

/// The reading level of one view.
///
/// Holds the current tier and its definitions table. The table is swapped
/// wholesale on every change, so returning to intermediate restores the
/// baseline definitions exactly.
///
/// # Examples
///
/// ```
/// # use seewrite::enhance::LevelState;
/// # use seewrite_core::{definitions::DefinitionsTable, model::Tier};
/// let mut level = LevelState::new(Tier::Intermediate);
/// level.apply(Tier::Advanced);
/// level.apply(Tier::Intermediate);
///
/// assert_eq!(level.definitions(), &DefinitionsTable::baseline());
/// assert_eq!(level.requested(), Some(Tier::Intermediate));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelState {
    tier: Tier,
    requested: Option<Tier>,
    definitions: DefinitionsTable,
}

impl LevelState {
    /// Starts at `tier` without an explicit request.
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            requested: None,
            definitions: DefinitionsTable::for_tier(tier),
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// The last tier explicitly requested, if any.
    pub fn requested(&self) -> Option<Tier> {
        self.requested
    }

    pub fn definitions(&self) -> &DefinitionsTable {
        &self.definitions
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::for_tier(self.tier)
    }

    /// Switches to `tier`. Applying the same tier again changes nothing.
    pub fn apply(&mut self, tier: Tier) {
        self.tier = tier;
        self.requested = Some(tier);
        self.definitions = DefinitionsTable::for_tier(tier);
    }

    /// Badge text and tier class. Before any request the badge shows the
    /// analyzed `complexity` as is; afterwards the requested tier's label.
    pub fn badge(&self, complexity: Tier) -> (&'static str, Tier) {
        match self.requested {
            Some(tier) => (tier.label(), tier),
            None => (complexity.id(), complexity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_shows_two_questions() {
        let presentation = Presentation::for_tier(Tier::Beginner);
        assert!(presentation.question_visible(1));
        assert!(!presentation.question_visible(2));
        assert_eq!(presentation.question_style(2), "display: none");
        assert_eq!(
            presentation.question_style(0),
            "display: block; font-size: 15px"
        );
    }

    #[test]
    fn test_concept_styles() {
        assert_eq!(
            Presentation::for_tier(Tier::Beginner).concept_style(),
            "font-size: 17px; line-height: 2.0; font-weight: 400; padding: 20px"
        );
        assert_eq!(
            Presentation::for_tier(Tier::Advanced).concept_style(),
            "font-size: 14px; line-height: 1.5; font-weight: 500; padding: 14px"
        );
    }

    #[test]
    fn test_highlight_styles() {
        let beginner = Presentation::for_tier(Tier::Beginner);
        assert_eq!(beginner.highlight_opacity("framework"), 0.6);
        assert_eq!(beginner.highlight_opacity("model"), 1.0);
        assert_eq!(beginner.highlight_style("algorithm").as_deref(), Some("opacity: 0.6"));
        assert_eq!(beginner.highlight_style("AI"), None);

        let advanced = Presentation::for_tier(Tier::Advanced);
        assert_eq!(
            advanced.highlight_style("framework").as_deref(),
            Some("opacity: 1; font-weight: 600")
        );
        assert_eq!(Presentation::for_tier(Tier::Intermediate).highlight_weight(), Some(500));
    }

    #[test]
    fn test_badge_follows_requests() {
        let mut level = LevelState::new(Tier::Beginner);
        assert_eq!(level.badge(Tier::Advanced), ("advanced", Tier::Advanced));

        level.apply(Tier::Beginner);
        assert_eq!(level.badge(Tier::Advanced), ("Beginner", Tier::Beginner));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut once = LevelState::new(Tier::Intermediate);
        once.apply(Tier::Beginner);
        let mut twice = once.clone();
        twice.apply(Tier::Beginner);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            level_message(Tier::Intermediate),
            "Balanced detail with moderate complexity"
        );
    }
}
