// legacy.rs - One-shot import from the older single-table score databases
//
// Two layouts exist in the wild. Both hold a name, three integer scores and a
// label written in another language; the label is recomputed on import.

use crate::model::Scores;
use crate::storage::Store;
use anyhow::Context;
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyLayout {
    /// `siswa(id, nama, biologi, fisika, inggris, prediksi)`
    Siswa,
    /// `nilai_siswa(id, nama_siswa, biologi, fisika, inggris, prediksi_fakultas)`
    NilaiSiswa,
}

impl LegacyLayout {
    fn table(&self) -> &'static str {
        match self {
            LegacyLayout::Siswa => "siswa",
            LegacyLayout::NilaiSiswa => "nilai_siswa",
        }
    }

    fn name_column(&self) -> &'static str {
        match self {
            LegacyLayout::Siswa => "nama",
            LegacyLayout::NilaiSiswa => "nama_siswa",
        }
    }

    fn required_columns(&self) -> [&'static str; 4] {
        [self.name_column(), "biologi", "fisika", "inggris"]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyImport {
    pub layout: LegacyLayout,
    pub imported: usize,
}

pub fn detect_layout(conn: &Connection) -> anyhow::Result<LegacyLayout> {
    for layout in [LegacyLayout::Siswa, LegacyLayout::NilaiSiswa] {
        let cols = get_columns(conn, layout.table())?;
        if cols.is_empty() {
            continue;
        }
        let missing: Vec<&str> = layout
            .required_columns()
            .into_iter()
            .filter(|c| !cols.contains(*c))
            .collect();
        if !missing.is_empty() {
            anyhow::bail!(
                "legacy table '{}' is missing columns: {}",
                layout.table(),
                missing.join(", ")
            );
        }
        return Ok(layout);
    }
    anyhow::bail!("no legacy score table found (expected 'siswa' or 'nilai_siswa')")
}

impl Store {
    /// Appends every row of a legacy database as a new record. New ids are
    /// assigned; the old ones are not carried over.
    pub fn import_legacy(&mut self, source: &Path) -> anyhow::Result<LegacyImport> {
        let src = Connection::open_with_flags(source, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("failed to open legacy db {}", source.display()))?;
        let layout = detect_layout(&src)?;

        let sql = format!(
            "SELECT {}, biologi, fisika, inggris FROM {} ORDER BY id ASC",
            layout.name_column(),
            layout.table()
        );
        let mut stmt = src.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                let name: Option<String> = row.get(0)?;
                let scores = Scores::new(
                    coerce_score(row.get(1)?),
                    coerce_score(row.get(2)?),
                    coerce_score(row.get(3)?),
                );
                Ok((name.unwrap_or_default(), scores))
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("read legacy rows")?;

        let tx = self.conn.transaction()?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO students(name, score_a, score_b, score_c, predicted_category)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (name, scores) in &rows {
                insert
                    .execute(rusqlite::params![
                        name,
                        scores.a,
                        scores.b,
                        scores.c,
                        scores.category().as_str()
                    ])
                    .context("insert imported student")?;
            }
        }
        tx.commit()?;

        tracing::info!(
            event = "legacy_import",
            table = layout.table(),
            imported = rows.len()
        );
        Ok(LegacyImport {
            layout,
            imported: rows.len(),
        })
    }
}

/// Scores were sometimes written as raw entry text. Anything that is not a
/// number counts as 0.
fn coerce_score(v: Value) -> i64 {
    match v {
        Value::Integer(i) => i,
        Value::Real(f) => f as i64,
        Value::Text(s) => s.trim().parse().unwrap_or(0),
        Value::Null | Value::Blob(_) => 0,
    }
}

fn get_columns(conn: &Connection, table: &str) -> anyhow::Result<HashSet<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    let mut out = HashSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_score() {
        assert_eq!(coerce_score(Value::Integer(7)), 7);
        assert_eq!(coerce_score(Value::Real(7.9)), 7);
        assert_eq!(coerce_score(Value::Text(" 12 ".into())), 12);
        assert_eq!(coerce_score(Value::Text("abc".into())), 0);
        assert_eq!(coerce_score(Value::Null), 0);
    }

    #[test]
    fn test_detect_layout_none() {
        let conn = Connection::open_in_memory().unwrap();
        let err = detect_layout(&conn).unwrap_err();
        assert!(err.to_string().contains("no legacy score table"));
    }

    #[test]
    fn test_detect_layout_missing_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE siswa (id INTEGER PRIMARY KEY, nama TEXT, biologi INTEGER)")
            .unwrap();
        let err = detect_layout(&conn).unwrap_err();
        assert!(err.to_string().contains("fisika, inggris"));
    }
}
