use edgeview_types::{ResourceKind, ResourceRecord};
use rusqlite::{Connection, Row, params};

use crate::Result;

fn map_row(row: &Row<'_>) -> rusqlite::Result<ResourceRecord> {
    Ok(ResourceRecord {
        key: row.get(0)?,
        kind: row.get(1)?,
        payload: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}

pub fn list_by_kind(conn: &Connection, kind: ResourceKind) -> Result<Vec<ResourceRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT key, type, value
        FROM meta
        WHERE type = ?1
        ORDER BY key
        "#,
    )?;

    let records = stmt
        .query_map([kind.as_str()], map_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(records)
}

pub fn list_all(conn: &Connection) -> Result<Vec<ResourceRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT key, type, value
        FROM meta
        ORDER BY key
        "#,
    )?;

    let records = stmt
        .query_map([], map_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(records)
}

pub fn insert(conn: &Connection, record: &ResourceRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO meta (key, type, value)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET
            type = ?2,
            value = ?3
        "#,
        params![&record.key, &record.kind, &record.payload],
    )?;

    Ok(())
}
