mod args;
mod command;
mod list_args;
mod schema_cmd;

pub use args::Cli;
pub use command::{Command, EntityKind};
pub use list_args::ListArgs;
pub use schema_cmd::SchemaCmd;

pub use args::parse;
