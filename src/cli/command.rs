use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::cli::list_args::ListArgs;
use crate::cli::schema_cmd::SchemaCmd;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Group,
    #[value(name = "type")]
    ItemType,
    MarketGroup,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Schema management commands",
        long_about = "Create, drop or reset the full reference-data table set."
    )]
    Schema {
        #[command(subcommand)]
        cmd: SchemaCmd,
    },
    #[command(
        about = "Import records from a JSON file",
        long_about = "Read a JSON array of records of one kind and insert or update each of them, all in one transaction. Unknown fields are ignored, so catalog API payloads can be imported as-is."
    )]
    Import {
        #[arg(value_enum)]
        kind: EntityKind,
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    #[command(
        about = "List stored records",
        long_about = "Print every matching record as one JSON object per line. Filters that are not given do not constrain the result; --name and --description accept SQL LIKE patterns."
    )]
    List {
        #[arg(value_enum)]
        kind: EntityKind,
        #[command(flatten)]
        filter: ListArgs,
    },
    #[command(about = "Delete one record by id")]
    Delete {
        #[arg(value_enum)]
        kind: EntityKind,
        #[arg(value_name = "ID")]
        id: i64,
    },
}
