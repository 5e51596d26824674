//! moodlog - Terminal mood journal
//!
//! A command-line mood-journaling application: pick a mood, write a short
//! reflection, and review streaks, mood statistics, and exports over the
//! entries kept in a local journal directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
