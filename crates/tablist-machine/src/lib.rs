//! TABLIST machine construction
//!
//! Builds the behavioral model for a keyboard-navigable tab widget following
//! the WAI-ARIA tabs authoring pattern: one nested sub-state graph per tab,
//! circular arrow-key navigation, Home/End jumps, focus/blur sub-states, and
//! (for automatic activation) a shared context that keeps the roving tabindex
//! and ARIA attributes of every tab consistent.
//!
//! The builder is a pure synthesis pass; all live-state mutation belongs to
//! the interpreter in `tablist-engine`.

mod action;
mod builder;
mod event;
mod machine;
mod ring;
mod state;

pub use action::sync_activation;
pub use builder::TabMachineBuilder;
pub use event::{ActivationMode, Orientation, TabEvent};
pub use machine::{ActionId, MachineConfig, TabContext, TabMachine, TabNode, Transition, MACHINE_ID};
pub use ring::TabRing;
pub use state::{AriaAttributes, StateRef, TabAttributes, TabId, TabPhase};
