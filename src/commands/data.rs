use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::{de::DeserializeOwned, Serialize};

use crate::cli::{EntityKind, ListArgs};
use crate::storage::{EntityStore, Repository};
use crate::types::{CategoryFilter, GroupFilter, ItemTypeFilter, MarketGroupFilter};

/// Upsert every record of `kind` found in the JSON array at `file`.
/// Either all records land or none do.
pub fn import(conn: &Connection, kind: EntityKind, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let tx = conn
        .unchecked_transaction()
        .context("starting import transaction")?;
    let repo = Repository::new(&tx);
    let count = match kind {
        EntityKind::Category => upsert_all(repo.categories(), &raw),
        EntityKind::Group => upsert_all(repo.groups(), &raw),
        EntityKind::ItemType => upsert_all(repo.item_types(), &raw),
        EntityKind::MarketGroup => upsert_all(repo.market_groups(), &raw),
    }
    .with_context(|| format!("importing {kind:?} records from {}", file.display()))?;
    tx.commit().context("committing import")?;

    log::info!("📥 Imported {count} {kind:?} records");
    Ok(())
}

fn upsert_all<S>(store: S, raw: &str) -> Result<usize>
where
    S: EntityStore,
    S::Row: DeserializeOwned,
{
    let rows: Vec<S::Row> = serde_json::from_str(raw).context("parsing JSON array")?;
    let mut count = 0;
    for row in &rows {
        count += store.insert_or_update(row)?;
    }
    Ok(count)
}

pub fn list<W: Write>(
    conn: &Connection,
    kind: EntityKind,
    args: &ListArgs,
    out: &mut W,
) -> Result<()> {
    let repo = Repository::new(conn);
    let written = match kind {
        EntityKind::Category => write_rows(
            out,
            repo.categories().get(&CategoryFilter {
                category_id: args.id,
                name: args.name.clone(),
                published: args.published,
            })?,
        ),
        EntityKind::Group => write_rows(
            out,
            repo.groups().get(&GroupFilter {
                group_id: args.id,
                category_id: args.category,
                name: args.name.clone(),
                published: args.published,
            })?,
        ),
        EntityKind::ItemType => write_rows(
            out,
            repo.item_types().get(&ItemTypeFilter {
                type_id: args.id,
                group_id: args.group,
                market_group_id: args.market_group,
                name: args.name.clone(),
                description: args.description.clone(),
                published: args.published,
                ..ItemTypeFilter::default()
            })?,
        ),
        EntityKind::MarketGroup => write_rows(
            out,
            repo.market_groups().get(&MarketGroupFilter {
                market_group_id: args.id,
                parent_group_id: args.parent,
                name: args.name.clone(),
                description: args.description.clone(),
            })?,
        ),
    }?;
    log::debug!("listed {written} {kind:?} records");
    Ok(())
}

fn write_rows<W: Write, T: Serialize>(out: &mut W, rows: Vec<T>) -> Result<usize> {
    for row in &rows {
        serde_json::to_writer(&mut *out, row)?;
        out.write_all(b"\n")?;
    }
    Ok(rows.len())
}

pub fn delete(conn: &Connection, kind: EntityKind, id: i64) -> Result<()> {
    let repo = Repository::new(conn);
    let rows = match kind {
        EntityKind::Category => repo.categories().delete(id),
        EntityKind::Group => repo.groups().delete(id),
        EntityKind::ItemType => repo.item_types().delete(id),
        EntityKind::MarketGroup => repo.market_groups().delete(id),
    }
    .with_context(|| format!("deleting {kind:?} {id}"))?;

    if rows == 0 {
        log::warn!("No {kind:?} with id {id}");
    } else {
        log::info!("🗑️ Deleted {kind:?} {id}");
    }
    Ok(())
}
