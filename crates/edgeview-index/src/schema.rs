use rusqlite::Connection;

use crate::Result;

// NOTE: Store Layout
//
// The edge agent owns this schema; we only ever read it. One row per
// object, keyed by "<namespace>/<name>", with the object kind in `type`
// and the full JSON document in `value`. `value` may be NULL.
//
// init_schema exists so tests and fixtures can lay out a store the same way
// the agent does. Database::open never calls it.

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS meta (
            key TEXT PRIMARY KEY,
            type TEXT NOT NULL,
            value TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_meta_type ON meta(type);
        "#,
    )?;

    Ok(())
}
