//! Command implementations.
//!
//! - [`build`] - generate pages and write the output directory
//! - [`check`] - validate the project without writing anything

pub mod build;
pub mod check;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
