//! Tooltips shown for definitions, highlights and level changes.

use std::time::Duration;

/// How long a tooltip stays up unless replaced or dismissed.
pub const TOOLTIP_DURATION: Duration = Duration::from_secs(6);

/// The element a tooltip points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipAnchor {
    /// A key term or an acronym highlight
    Term(String),
    /// A concept or number highlight
    Highlight(String),
    /// The content level badge
    LevelBadge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    anchor: TooltipAnchor,
    text: String,
    duration: Duration,
}

impl Tooltip {
    pub fn new(anchor: TooltipAnchor, text: impl Into<String>) -> Self {
        Self {
            anchor,
            text: text.into(),
            duration: TOOLTIP_DURATION,
        }
    }

    pub fn anchor(&self) -> &TooltipAnchor {
        &self.anchor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Time after which the host removes the tooltip.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Holds the single active tooltip.
#[derive(Debug, Clone, Default)]
pub struct TooltipSlot {
    active: Option<Tooltip>,
}

impl TooltipSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active tooltip. A tooltip without text only clears the slot.
    pub fn show(&mut self, tooltip: Tooltip) -> Option<&Tooltip> {
        self.active = None;
        if tooltip.text.is_empty() {
            return None;
        }
        self.active = Some(tooltip);
        self.active.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&Tooltip> {
        self.active.as_ref()
    }
}
