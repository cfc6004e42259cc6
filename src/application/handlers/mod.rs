//! Operation handlers, one file per operation.

pub mod cycle;
pub mod promotion;

pub use cycle::{
    CurrentCycleStatusHandler, CurrentCycleStatusQuery, DetectCycleChangeCommand,
    DetectCycleChangeError, DetectCycleChangeHandler, SUPERSEDED_REASON,
};
pub use promotion::{
    AnalyzeEligibilityCommand, AnalyzeEligibilityError, AnalyzeEligibilityHandler,
    ExecutePromotionCommand, ExecutePromotionHandler,
};
