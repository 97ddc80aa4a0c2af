use clap::Args;

/// Filters for `list`. Each one applies only to kinds that have the column.
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[arg(long, value_name = "ID", help = "Primary key")]
    pub id: Option<i64>,

    #[arg(long, value_name = "PATTERN", help = "Name LIKE pattern, e.g. %Frigate%")]
    pub name: Option<String>,

    #[arg(
        long,
        value_name = "PATTERN",
        help = "Description LIKE pattern (type, market-group)"
    )]
    pub description: Option<String>,

    #[arg(long, value_name = "BOOL", help = "Published flag (category, group, type)")]
    pub published: Option<bool>,

    #[arg(long, value_name = "ID", help = "Owning category (group)")]
    pub category: Option<i64>,

    #[arg(long, value_name = "ID", help = "Owning group (type)")]
    pub group: Option<i64>,

    #[arg(long = "market-group", value_name = "ID", help = "Market group (type)")]
    pub market_group: Option<i64>,

    #[arg(long, value_name = "ID", help = "Parent market group (market-group)")]
    pub parent: Option<i64>,
}
