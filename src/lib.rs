//! Progression Engine - Academic Level & Cycle Progression
//!
//! This crate implements the rules engine behind term-to-term student
//! progression: the level/equivalency catalog for parallel language
//! programs, cycle-transition detection, and transactional promotion
//! batches that materialize next-term classes and enrollments.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
