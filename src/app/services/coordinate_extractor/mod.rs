//! Coordinate extraction cascade for ISMN sensor files
//!
//! ISMN distributions collect station files from dozens of networks, each
//! with its own header conventions, and many with corrupt or free-form
//! metadata. This module recovers a (latitude, longitude) pair per file on
//! a best-effort basis using four independent strategies tried in order of
//! decreasing trust:
//!
//! 1. [`strategies::find_header_coordinates`] - explicit labeled fields
//! 2. [`strategies::parse_ismn_metadata`] - ISMN metadata markers
//! 3. [`strategies::find_pattern_coordinates`] - numeric pairs in data rows
//! 4. [`strategies::extract_from_filename`] - values in the file name
//!
//! Every candidate passes through the plausibility rules in [`validator`]
//! before acceptance; files the whole cascade fails on are recorded as
//! structured failures, never guessed at.

pub mod orchestrator;
pub mod strategies;
pub mod validator;

#[cfg(test)]
mod tests;

pub use orchestrator::extract_coordinates;
pub use strategies::extract_coordinate_pair;
pub use validator::is_plausible_pair;
