use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum SchemaCmd {
    #[command(about = "Create missing tables")]
    Create,
    #[command(about = "Drop all tables")]
    Drop,
    #[command(
        about = "Drop and re-create all tables",
        long_about = "Drop every table and create it again, discarding all stored records."
    )]
    Reset,
}
