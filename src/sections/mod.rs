//! Password evaluation sections
//!
//! Each section scores one criterion of password strength.

mod common;
mod complexity;
mod length;
mod pattern;

pub use common::common_section;
pub use complexity::complexity_section;
pub use length::length_section;
pub use pattern::pattern_section;
