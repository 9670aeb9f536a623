use scorecard_core::classifier::Category;
use scorecard_core::model::Scores;
use scorecard_core::storage::Store;
use tempfile::tempdir;

fn open_temp(dir: &tempfile::TempDir) -> anyhow::Result<Store> {
    let store = Store::open(&dir.path().join("scores.db"))?;
    store.init_schema()?;
    Ok(store)
}

#[test]
fn test_create_then_read_all() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let store = open_temp(&dir)?;

    let id = store.create("Ana", Scores::new(90, 85, 70))?;
    let rows = store.read_all()?;

    assert_eq!(rows.len(), 1);
    let r = &rows[0];
    assert_eq!(r.id, id);
    assert_eq!(r.name, "Ana");
    assert_eq!((r.score_a, r.score_b, r.score_c), (90, 85, 70));
    assert_eq!(r.predicted_category, "Medicine");
    assert_eq!(r.category(), Some(Category::Medicine));
    Ok(())
}

#[test]
fn test_update_recomputes_category() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let store = open_temp(&dir)?;

    let id = store.create("Budi", Scores::new(90, 85, 70))?;
    let n = store.update(id, "Budi S.", Scores::new(60, 70, 99))?;
    assert_eq!(n, 1);

    let r = store.get(id)?.expect("record exists");
    assert_eq!(r.name, "Budi S.");
    assert_eq!(r.scores(), Scores::new(60, 70, 99));
    assert_eq!(r.predicted_category, "Language");
    Ok(())
}

#[test]
fn test_update_missing_id_is_noop() -> anyhow::Result<()> {
    let store = Store::memory()?;
    store.init_schema()?;
    let id = store.create("Citra", Scores::new(1, 2, 3))?;

    let n = store.update(id + 100, "Ghost", Scores::new(9, 9, 9))?;
    assert_eq!(n, 0);

    let rows = store.read_all()?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Citra");
    Ok(())
}

#[test]
fn test_delete_is_idempotent() -> anyhow::Result<()> {
    let store = Store::memory()?;
    store.init_schema()?;
    let id = store.create("Dewi", Scores::new(70, 95, 80))?;

    assert_eq!(store.delete(id)?, 1);
    assert_eq!(store.delete(id)?, 0);
    assert!(store.read_all()?.is_empty());
    assert!(store.get(id)?.is_none());
    Ok(())
}

#[test]
fn test_read_all_orders_by_id_and_ids_not_reused() -> anyhow::Result<()> {
    let store = Store::memory()?;
    store.init_schema()?;

    let a = store.create("a", Scores::new(1, 0, 0))?;
    let b = store.create("b", Scores::new(0, 1, 0))?;
    let c = store.create("c", Scores::new(0, 0, 1))?;
    store.update(a, "a2", Scores::new(5, 5, 5))?;
    store.delete(c)?;
    let d = store.create("d", Scores::new(3, 3, 4))?;
    assert!(d > c, "AUTOINCREMENT must not hand out a deleted id");

    let ids: Vec<i64> = store.read_all()?.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a, b, d]);
    Ok(())
}

#[test]
fn test_records_survive_reopen() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("scores.db");
    {
        let store = Store::open(&path)?;
        store.init_schema()?;
        store.create("Eka", Scores::new(10, 10, 10))?;
    }

    let store = Store::open(&path)?;
    store.init_schema()?;
    let rows = store.read_all()?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].predicted_category, "Medicine");

    // Raw check of the persisted shape.
    let conn = rusqlite::Connection::open(&path)?;
    let (name, label): (String, String) = conn.query_row(
        "SELECT name, predicted_category FROM students WHERE id = ?1",
        [rows[0].id],
        |r| Ok((r.get(0)?, r.get(1)?)),
    )?;
    assert_eq!(name, "Eka");
    assert_eq!(label, "Medicine");
    Ok(())
}

#[test]
fn test_stats() -> anyhow::Result<()> {
    let store = Store::memory()?;
    store.init_schema()?;
    let empty = store.stats()?;
    assert_eq!(empty.records, 0);
    assert_eq!(empty.last_id, None);

    store.create("a", Scores::new(9, 1, 1))?;
    store.create("b", Scores::new(9, 1, 1))?;
    let last = store.create("c", Scores::new(1, 9, 1))?;

    let stats = store.stats()?;
    assert_eq!(stats.records, 3);
    assert_eq!(stats.last_id, Some(last));
    assert_eq!(stats.by_category.get("Medicine"), Some(&2));
    assert_eq!(stats.by_category.get("Engineering"), Some(&1));
    assert_eq!(stats.by_category.get("Language"), None);
    Ok(())
}
