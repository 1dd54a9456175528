//! Feedback slots and the aggregate feedback area
//!
//! Slots are keyed by [`FieldId`] instead of by position in the layout, so
//! "does this field already have a slot" is a map lookup.

use crate::validation::FieldId;
use std::collections::HashMap;

/// Visual styling of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Error,
    Success,
}

/// Inline feedback shown beneath a single input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackSlot {
    pub message: String,
    pub tone: Tone,
    pub visible: bool,
}

/// Summary shown after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateFeedback {
    pub lines: Vec<String>,
    pub tone: Tone,
    pub visible: bool,
}

impl AggregateFeedback {
    #[cfg(test)]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Owns every feedback element of the form
#[derive(Debug, Clone, Default)]
pub struct FeedbackRenderer {
    slots: HashMap<FieldId, FeedbackSlot>,
    aggregate: AggregateFeedback,
}

impl FeedbackRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` beneath `field`, creating its slot on first use.
    pub fn show_field_feedback(&mut self, field: FieldId, message: impl Into<String>, tone: Tone) {
        let slot = self.slots.entry(field).or_default();
        slot.message = message.into();
        slot.tone = tone;
        slot.visible = true;
    }

    /// Show an error-styled message beneath `field`.
    pub fn show_field_error(&mut self, field: FieldId, message: impl Into<String>) {
        self.show_field_feedback(field, message, Tone::Error);
    }

    /// Hide the slot for `field` if one exists. The message is kept.
    pub fn hide_field_feedback(&mut self, field: FieldId) {
        if let Some(slot) = self.slots.get_mut(&field) {
            slot.visible = false;
        }
    }

    pub fn hide_all_field_feedback(&mut self) {
        for slot in self.slots.values_mut() {
            slot.visible = false;
        }
    }

    pub fn slot(&self, field: FieldId) -> Option<&FeedbackSlot> {
        self.slots.get(&field)
    }

    /// The slot for `field`, but only while it is visible
    pub fn visible_slot(&self, field: FieldId) -> Option<&FeedbackSlot> {
        self.slot(field).filter(|slot| slot.visible)
    }

    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn aggregate(&self) -> &AggregateFeedback {
        &self.aggregate
    }

    /// Hide and clear the aggregate area
    pub fn reset_aggregate(&mut self) {
        self.aggregate.visible = false;
        self.aggregate.lines.clear();
    }

    pub fn hide_aggregate(&mut self) {
        self.aggregate.visible = false;
    }

    pub fn show_aggregate_success(&mut self, text: impl Into<String>) {
        self.aggregate.lines = vec![text.into()];
        self.aggregate.tone = Tone::Success;
        self.aggregate.visible = true;
    }

    /// Show `heading` followed by one line per message
    pub fn show_aggregate_errors(&mut self, heading: impl Into<String>, messages: &[String]) {
        let mut lines = Vec::with_capacity(messages.len() + 1);
        lines.push(heading.into());
        lines.extend(messages.iter().cloned());
        self.aggregate.lines = lines;
        self.aggregate.tone = Tone::Error;
        self.aggregate.visible = true;
    }
}
