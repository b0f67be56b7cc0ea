//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args plus the front-ends it needs, so tests can swap in scripted ones.

pub mod import;
pub mod init;
pub mod query;
pub mod shell;

pub use import::execute as import;
pub use init::execute as init;
pub use query::execute as query;
pub use shell::execute as shell;
