//! Cycle detection handlers.
//!
//! Detection of academic cycle transitions and the active-status query.

// Command handlers
mod detect_cycle_change;

// Query handlers
mod current_cycle_status;

pub use detect_cycle_change::{
    DetectCycleChangeCommand, DetectCycleChangeError, DetectCycleChangeHandler, SUPERSEDED_REASON,
};

pub use current_cycle_status::{CurrentCycleStatusHandler, CurrentCycleStatusQuery};
