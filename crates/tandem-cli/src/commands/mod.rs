//! Command implementations.
//!
//! - [`build`] - validate the build descriptor and run the bundler
//! - [`check`] - validate both sections and list endpoints
//! - [`settings`] - print the resolved runtime settings
//! - [`init`] - write a starter project file
//! - [`schema`] - print the JSON Schema of the project file
//!
//! Each command module provides an `execute` function taking its parsed
//! arguments.

pub mod build;
pub mod check;
pub mod init;
pub mod schema;
pub mod settings;
mod templates;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use schema::execute as schema_execute;
pub use settings::execute as settings_execute;
