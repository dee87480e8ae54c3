use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{OptionalExtension, Row, params};

use crate::models::WeightEntry;

use super::Database;

struct WeightRow {
    date: String,
    weight_kg: f64,
    recorded_at: String,
}

impl WeightRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            date: row.get(0)?,
            weight_kg: row.get(1)?,
            recorded_at: row.get(2)?,
        })
    }
}

fn row_to_entry(r: WeightRow) -> Result<WeightEntry> {
    let date: NaiveDate = r.date.parse()?;
    let recorded_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.recorded_at)?.with_timezone(&Utc);
    Ok(WeightEntry {
        date,
        weight_kg: r.weight_kg,
        recorded_at,
    })
}

impl Database {
    /// Insert or replace the entry for `e.date`.
    pub fn upsert_weight(&self, e: &WeightEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO weight_entries (date, weight_kg, recorded_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(date) DO UPDATE SET
                 weight_kg = excluded.weight_kg,
                 recorded_at = excluded.recorded_at",
            params![e.date.to_string(), e.weight_kg, e.recorded_at.to_rfc3339()],
        )?;
        tracing::debug!(date = %e.date, weight_kg = e.weight_kg, "weight entry saved");
        Ok(())
    }

    /// Record a weight for `date` (today when omitted). Returns the stored entry.
    pub fn add_weight_entry(&self, weight_kg: f64, date: Option<NaiveDate>) -> Result<WeightEntry> {
        let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
        let entry = WeightEntry::new(date, weight_kg);
        self.upsert_weight(&entry)?;
        Ok(entry)
    }

    /// Full history, oldest first.
    pub fn weight_history(&self) -> Result<Vec<WeightEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, weight_kg, recorded_at FROM weight_entries ORDER BY date ASC",
        )?;
        let rows = stmt.query_map([], WeightRow::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row_to_entry(row?)?);
        }
        Ok(entries)
    }

    pub fn latest_weight(&self) -> Result<Option<WeightEntry>> {
        let row = self
            .conn
            .query_row(
                "SELECT date, weight_kg, recorded_at FROM weight_entries
                 ORDER BY date DESC LIMIT 1",
                [],
                WeightRow::from_row,
            )
            .optional()?;
        row.map(row_to_entry).transpose()
    }

    /// Returns false when no entry existed for `date`.
    pub fn delete_weight_entry(&self, date: NaiveDate) -> Result<bool> {
        let count = self.conn.execute(
            "DELETE FROM weight_entries WHERE date = ?1",
            params![date.to_string()],
        )?;
        tracing::debug!(%date, removed = count, "weight entry delete");
        Ok(count > 0)
    }
}
