use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS profile (
            id                INTEGER PRIMARY KEY CHECK (id = 1),
            name              TEXT NOT NULL,
            age               INTEGER NOT NULL,
            sex               TEXT NOT NULL,
            height_cm         REAL NOT NULL,
            initial_weight_kg REAL NOT NULL,
            target_weight_kg  REAL NOT NULL,
            activity_level    TEXT NOT NULL,
            goal_pace         TEXT,
            created_at        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS weight_entries (
            date        TEXT PRIMARY KEY,
            weight_kg   REAL NOT NULL,
            recorded_at TEXT NOT NULL
        );",
    )?;
    Ok(())
}
