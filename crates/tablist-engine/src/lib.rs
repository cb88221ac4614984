//! TABLIST execution engine
//!
//! Interprets a machine description produced by `tablist-machine`: resolves
//! qualified state targets, runs entry actions, and applies replacement
//! contexts. Dispatch is strictly serialized; one event is fully processed,
//! synchronization action included, before the next is looked at, so the
//! single-selected-tab invariant is never observable in a violated state.

mod machine;

pub use machine::{Machine, MachineSnapshot};
