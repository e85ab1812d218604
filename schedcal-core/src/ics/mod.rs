//! ICS document generation.

pub mod generate;

pub use generate::generate_ics;
