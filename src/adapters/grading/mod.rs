//! Grading policy adapters.

mod letter_scale;

pub use letter_scale::{LetterGradePolicy, PASSING_THRESHOLD};
