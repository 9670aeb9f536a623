use crate::model::{Scores, StudentRecord};
use anyhow::Context;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;
use std::path::Path;

/// Owner of the single database connection. Built once and handed to
/// whatever needs it; every call autocommits before returning.
pub struct Store {
    pub(crate) conn: Connection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub records: u64,
    pub last_id: Option<i64>,
    pub by_category: BTreeMap<String, u64>,
}

const SELECT_COLUMNS: &str =
    "SELECT id, name, score_a, score_b, score_c, predicted_category FROM students";

impl Store {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open sqlite db {}", path.display()))?;
        Ok(Self { conn })
    }

    pub fn memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory sqlite db")?;
        Ok(Self { conn })
    }

    pub fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(crate::storage::schema::DDL)
            .context("failed to create students table")?;
        tracing::info!(event = "schema_ready");
        Ok(())
    }

    pub fn create(&self, name: &str, scores: Scores) -> anyhow::Result<i64> {
        let category = scores.category();
        self.conn
            .execute(
                "INSERT INTO students(name, score_a, score_b, score_c, predicted_category)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![name, scores.a, scores.b, scores.c, category.as_str()],
            )
            .context("insert student")?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(event = "record_created", id, category = %category);
        Ok(id)
    }

    pub fn read_all(&self) -> anyhow::Result<Vec<StudentRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;
        let rows = stmt
            .query_map([], record_from_row)?
            .collect::<Result<Vec<_>, _>>()
            .context("read students")?;
        Ok(rows)
    }

    pub fn get(&self, id: i64) -> anyhow::Result<Option<StudentRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;
        let row = stmt
            .query_row(params![id], record_from_row)
            .optional()
            .with_context(|| format!("read student {}", id))?;
        Ok(row)
    }

    /// Overwrites the record and recomputes its category. An unknown id
    /// touches nothing; the returned row count is then 0.
    pub fn update(&self, id: i64, name: &str, scores: Scores) -> anyhow::Result<usize> {
        let category = scores.category();
        let n = self
            .conn
            .execute(
                "UPDATE students
                 SET name=?1, score_a=?2, score_b=?3, score_c=?4, predicted_category=?5
                 WHERE id=?6",
                params![name, scores.a, scores.b, scores.c, category.as_str(), id],
            )
            .with_context(|| format!("update student {}", id))?;
        tracing::debug!(event = "record_updated", id, category = %category, rows = n);
        Ok(n)
    }

    /// Removes the record. An unknown id touches nothing and returns 0.
    pub fn delete(&self, id: i64) -> anyhow::Result<usize> {
        let n = self
            .conn
            .execute("DELETE FROM students WHERE id=?1", params![id])
            .with_context(|| format!("delete student {}", id))?;
        tracing::debug!(event = "record_deleted", id, rows = n);
        Ok(n)
    }

    pub fn stats(&self) -> anyhow::Result<StoreStats> {
        let records: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |r| r.get(0))?;
        let last_id: Option<i64> = self
            .conn
            .query_row("SELECT MAX(id) FROM students", [], |r| r.get(0))?;

        let mut stmt = self.conn.prepare(
            "SELECT COALESCE(predicted_category, ''), COUNT(*)
             FROM students GROUP BY 1 ORDER BY 1",
        )?;
        let mut by_category = BTreeMap::new();
        let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))?;
        for r in rows {
            let (label, n) = r?;
            by_category.insert(label, n as u64);
        }

        Ok(StoreStats {
            records: records as u64,
            last_id,
            by_category,
        })
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<StudentRecord> {
    Ok(StudentRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        score_a: row.get::<_, Option<i64>>(2)?.unwrap_or_default(),
        score_b: row.get::<_, Option<i64>>(3)?.unwrap_or_default(),
        score_c: row.get::<_, Option<i64>>(4)?.unwrap_or_default(),
        predicted_category: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}
