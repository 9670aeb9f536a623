use crate::model::StudentRecord;
use anyhow::Context;
use std::path::Path;

pub fn to_json(records: &[StudentRecord]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn write_json(records: &[StudentRecord], path: &Path) -> anyhow::Result<()> {
    let s = to_json(records)?;
    std::fs::write(path, s).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
