//! One module per subcommand, each exposing an `execute` function.

pub mod audit_cmd;
pub mod backup;
pub mod completions;
pub mod delete;
pub mod generate;
pub mod hash;
pub mod list;
pub mod load;
pub mod store;
pub mod verify;
