//! Event vocabulary and widget configuration enums
//!
//! Orientation decides which two arrow keys drive forward/backward movement;
//! Home and End always jump to the list endpoints. Activation mode decides
//! whether arrow-key focus movement selects the focused tab on its own.

use serde::{Deserialize, Serialize};

use crate::state::{TabId, TabPhase};

/// Navigation orientation of the tablist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tabs laid out in a row; ArrowRight/ArrowLeft navigate
    #[default]
    Horizontal,
    /// Tabs laid out in a column; ArrowDown/ArrowUp navigate
    Vertical,
}

impl Orientation {
    /// Arrow event that moves focus to the next tab
    pub fn arrow_after(&self) -> TabEvent {
        match self {
            Orientation::Horizontal => TabEvent::ArrowRight,
            Orientation::Vertical => TabEvent::ArrowDown,
        }
    }

    /// Arrow event that moves focus to the previous tab
    pub fn arrow_before(&self) -> TabEvent {
        match self {
            Orientation::Horizontal => TabEvent::ArrowLeft,
            Orientation::Vertical => TabEvent::ArrowUp,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(format!("Unknown orientation: {}", s)),
        }
    }
}

/// Tab activation policy.
///
/// Manual keeps focus movement and selection decoupled; Automatic selects
/// whichever tab receives keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
    Manual,
    #[default]
    Automatic,
}

impl ActivationMode {
    /// The focused-and-selected leaf the global activation events target
    pub fn focused_phase(&self) -> TabPhase {
        match self {
            ActivationMode::Manual => TabPhase::Focused,
            ActivationMode::Automatic => TabPhase::ActiveFocused,
        }
    }

    /// Initial branch of a per-tab node.
    ///
    /// The active tab starts blurred (focus arrives only via a Focus or
    /// activation event); in automatic mode every other tab sits in the
    /// inactive branch.
    pub fn initial_phase(&self, is_active: bool) -> TabPhase {
        match self {
            ActivationMode::Manual => TabPhase::Blurred,
            ActivationMode::Automatic => {
                if is_active {
                    TabPhase::ActiveBlurred
                } else {
                    TabPhase::Inactive
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationMode::Manual => "manual",
            ActivationMode::Automatic => "automatic",
        }
    }
}

impl std::fmt::Display for ActivationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActivationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(ActivationMode::Manual),
            "automatic" => Ok(ActivationMode::Automatic),
            _ => Err(format!("Unknown activation mode: {}", s)),
        }
    }
}

/// Events a running tab machine understands.
///
/// The host translates real keyboard/pointer input into this vocabulary.
/// `Activate` is the per-tab global event the root routing table consumes:
/// it force-focuses (and in automatic mode selects) an arbitrary tab without
/// the dispatcher needing to know which tab is currently active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabEvent {
    ArrowRight,
    ArrowLeft,
    ArrowDown,
    ArrowUp,
    Home,
    End,
    Focus,
    Blur,
    /// Manual-mode activation of the tab currently under the pointer/focus
    Click,
    /// Jump straight to the named tab's focused leaf from anywhere
    Activate(TabId),
}
