//! Helper functions used across the application.
//!
//! - [`age`] - Age in whole years from a date of birth
//! - [`dates`] - Lenient date parsing for request payloads

pub mod age;
pub mod dates;
