use super::{exit_codes, open_store};
use crate::cli::args::ImportLegacyArgs;
use anyhow::Context;
use std::path::Path;

pub fn cmd_import_legacy(db: &Path, args: ImportLegacyArgs) -> anyhow::Result<i32> {
    if !args.from.exists() {
        anyhow::bail!("legacy db not found: {}", args.from.display());
    }
    let mut store = open_store(db)?;
    let report = store
        .import_legacy(&args.from)
        .with_context(|| format!("import from {}", args.from.display()))?;
    eprintln!(
        "imported {} record(s) from {:?} layout",
        report.imported, report.layout
    );
    Ok(exit_codes::OK)
}
