//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates the domain services and coordinates between ports. The
//! promotion executor is the only mutating entry point; everything else
//! is a read or a detection that may decide to do nothing.

pub mod handlers;

pub use handlers::{
    AnalyzeEligibilityCommand, AnalyzeEligibilityError, AnalyzeEligibilityHandler,
    CurrentCycleStatusHandler, CurrentCycleStatusQuery, DetectCycleChangeCommand,
    DetectCycleChangeError, DetectCycleChangeHandler, ExecutePromotionCommand,
    ExecutePromotionHandler, SUPERSEDED_REASON,
};
