//! Condition labels and the stimulus record alias.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stimulus as read from `stimuli.json`. The schema belongs to whoever
/// produced the file; the sampler only requires each sampled entry to be an
/// object so it can carry a `condition` field.
pub type StimulusRecord = serde_json::Value;

/// Experimental condition assigned to a sampled stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Improbable,
    Impossible,
    Inconceivable,
}

impl Condition {
    /// Pool construction order.
    pub const ALL: [Condition; 3] = [
        Condition::Improbable,
        Condition::Impossible,
        Condition::Inconceivable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Improbable => "improbable",
            Condition::Impossible => "impossible",
            Condition::Inconceivable => "inconceivable",
        }
    }

    /// Inverse of [`Condition::as_str`].
    pub fn from_label(label: &str) -> Option<Condition> {
        Condition::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
