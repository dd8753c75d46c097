//! The enhanced reading view.
//!
//! An [`EnhancedView`] owns one [`TextAnalysis`], its [`LevelState`] and the
//! mount point it renders into. Every state change re-renders the whole
//! view; rendering never touches the analysis.
//!
//! Host events reach the view through [`Interactions`]. Question buttons
//! forward to a [`QuestionSink`], and tier changes are persisted through a
//! [`PreferenceStore`].

mod level;
mod render;
mod tooltip;

use std::hash::{DefaultHasher, Hash, Hasher};

use log::{debug, warn};

use seewrite_core::model::{TextAnalysis, Tier};

use crate::{
    error::SeewriteError,
    layout::LayoutKind,
    mount::MountPoint,
    preferences::{self, PreferenceStore},
    visual::VisualPanel,
};

pub use level::{LevelState, Presentation, level_message};
pub use tooltip::{TOOLTIP_DURATION, Tooltip, TooltipAnchor, TooltipSlot};

/// Receives the questions the reader selects.
pub trait QuestionSink {
    fn submit_question(&mut self, question: &str);
}

/// A [`QuestionSink`] for hosts without a question handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoQuestions;

impl QuestionSink for NoQuestions {
    fn submit_question(&mut self, question: &str) {
        debug!(question; "No question handler, question dropped");
    }
}

/// Reader events a host forwards to a view.
pub trait Interactions {
    /// A key term or acronym highlight was clicked.
    fn on_term_click(&mut self, term: &str) -> Option<&Tooltip>;

    /// A concept or number highlight was clicked.
    fn on_highlight_click(&mut self, text: &str) -> Option<&Tooltip>;

    /// A concept header was clicked. Returns whether the concept is now expanded.
    fn on_concept_toggle(&mut self, index: usize) -> bool;

    /// A question button was clicked.
    fn on_question_select(&mut self, question: &str);

    /// The level selector changed.
    fn on_tier_change(&mut self, tier: Tier) -> Option<&Tooltip>;

    /// A view button of the visual panel was clicked.
    ///
    /// # Errors
    ///
    /// Returns an error if the new view cannot be laid out or exported.
    fn on_view_select(&mut self, kind: LayoutKind) -> Result<(), SeewriteError>;
}

/// Enhanced content mounted into `M`.
pub struct EnhancedView<M: MountPoint> {
    analysis: TextAnalysis,
    level: LevelState,
    expanded: Vec<bool>,
    section_id: String,
    tooltips: TooltipSlot,
    visual: Option<VisualPanel>,
    mount: M,
    questions: Box<dyn QuestionSink>,
    preferences: Box<dyn PreferenceStore>,
}

impl<M: MountPoint> EnhancedView<M> {
    /// Creates a view of `analysis` at `tier`. Nothing is rendered until
    /// [`EnhancedView::render`] is called.
    pub fn new(
        analysis: TextAnalysis,
        tier: Tier,
        mount: M,
        questions: Box<dyn QuestionSink>,
        preferences: Box<dyn PreferenceStore>,
    ) -> Self {
        let section_id = section_id(&analysis.original_text);
        let expanded = vec![false; analysis.concepts.len()];

        Self {
            analysis,
            level: LevelState::new(tier),
            expanded,
            section_id,
            tooltips: TooltipSlot::new(),
            visual: None,
            mount,
            questions,
            preferences,
        }
    }

    /// Renders the whole view into the mount point, including the visual
    /// panel if one is attached. A detached mount point is left untouched.
    pub fn render(&mut self) {
        if !self.mount.is_attached() {
            debug!(section = self.section_id.as_str(); "Mount point detached, render skipped");
            return;
        }

        let state = render::RenderState {
            level: &self.level,
            expanded: &self.expanded,
            section_id: &self.section_id,
        };
        let html = render::enhanced_content(&self.analysis, &state);
        debug!(bytes = html.len(), tier = self.level.tier().id(); "Enhanced content rendered");
        self.mount.set_content(html);

        self.mount_visual();
    }

    /// Attaches the visual panel and mounts it into the visual section.
    pub fn attach_visual(&mut self, panel: VisualPanel) {
        self.visual = Some(panel);
        self.mount_visual();
    }

    /// Switches the reading level and re-renders.
    pub fn set_level(&mut self, tier: Tier) {
        self.level.apply(tier);
        self.tooltips.dismiss();
        self.render();
    }

    pub fn analysis(&self) -> &TextAnalysis {
        &self.analysis
    }

    pub fn level(&self) -> &LevelState {
        &self.level
    }

    /// Whether the concept at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Id of the element the visual panel is mounted into.
    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltips.active()
    }

    pub fn dismiss_tooltip(&mut self) {
        self.tooltips.dismiss();
    }

    pub fn visual(&self) -> Option<&VisualPanel> {
        self.visual.as_ref()
    }

    pub fn mount(&self) -> &M {
        &self.mount
    }

    pub fn into_mount(self) -> M {
        self.mount
    }

    fn mount_visual(&mut self) {
        let Some(panel) = &self.visual else {
            return;
        };

        match self.mount.nested_mut(&self.section_id) {
            Some(section) => panel.mount_into(section),
            None => debug!(section = self.section_id.as_str(); "Visual section not mounted, panel skipped"),
        }
    }
}

impl<M: MountPoint> Interactions for EnhancedView<M> {
    fn on_term_click(&mut self, term: &str) -> Option<&Tooltip> {
        let text = self.level.definitions().describe(term);
        self.tooltips
            .show(Tooltip::new(TooltipAnchor::Term(term.to_string()), text))
    }

    fn on_highlight_click(&mut self, text: &str) -> Option<&Tooltip> {
        self.tooltips.show(Tooltip::new(
            TooltipAnchor::Highlight(text.to_string()),
            format!("{text}: Key element in this context"),
        ))
    }

    fn on_concept_toggle(&mut self, index: usize) -> bool {
        let Some(expanded) = self.expanded.get_mut(index) else {
            debug!(index; "No concept at index, toggle ignored");
            return false;
        };
        *expanded = !*expanded;
        let now = *expanded;

        self.render();
        now
    }

    fn on_question_select(&mut self, question: &str) {
        if question.is_empty() {
            return;
        }
        self.questions.submit_question(question);
    }

    fn on_tier_change(&mut self, tier: Tier) -> Option<&Tooltip> {
        self.set_level(tier);

        if let Err(err) = preferences::save_tier(self.preferences.as_mut(), tier) {
            warn!(err:err, tier = tier.id(); "Failed to store reading level");
        }

        self.tooltips
            .show(Tooltip::new(TooltipAnchor::LevelBadge, level_message(tier)))
    }

    fn on_view_select(&mut self, kind: LayoutKind) -> Result<(), SeewriteError> {
        let Some(panel) = self.visual.as_mut() else {
            debug!(view = kind.id(); "No visual panel, view selection ignored");
            return Ok(());
        };
        panel.select(kind)?;

        self.mount_visual();
        Ok(())
    }
}

/// Element id of the visual section, stable for the same text.
fn section_id(text: &str) -> String {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    format!("visual-section-{:016x}", hasher.finish())
}
