//! TABLIST Core
//!
//! Coordination layer for WAI-ARIA tablist widgets: builds the machine
//! description, runs it on the execution engine, and hands the host the
//! per-tab presentation attributes to reflect into the accessibility tree.

mod config;
mod error;
mod widget;

pub use config::TabsConfig;
pub use error::CoreError;
pub use widget::TabsWidget;

// Re-export the machine and engine surfaces
pub use tablist_engine::{Machine, MachineSnapshot};
pub use tablist_machine::{
    sync_activation, ActionId, ActivationMode, AriaAttributes, MachineConfig, Orientation,
    StateRef, TabAttributes, TabContext, TabEvent, TabId, TabMachine, TabMachineBuilder, TabNode,
    TabPhase, TabRing, Transition, MACHINE_ID,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
