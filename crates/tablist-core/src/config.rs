//! Widget configuration

use serde::{Deserialize, Serialize};

use tablist_machine::{ActivationMode, Orientation};

use crate::Result;

/// Host-facing knobs for one tablist widget.
///
/// Both fields default per the WAI-ARIA tabs pattern examples: a horizontal
/// tablist with automatic activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabsConfig {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub activation: ActivationMode,
}

impl TabsConfig {
    pub fn new(orientation: Orientation, activation: ActivationMode) -> Self {
        Self {
            orientation,
            activation,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
