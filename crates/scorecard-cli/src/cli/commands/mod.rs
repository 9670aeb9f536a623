use super::args::{Cli, Command};
use scorecard_core::config::ScorecardConfig;
use scorecard_core::storage::Store;
use std::path::Path;

pub mod classify;
pub mod import;
pub mod records;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const ERROR: i32 = 2;
}

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let mut cfg = ScorecardConfig::resolve(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        cfg.db_path = db;
    }
    super::logging::init_logging(&cfg.log_level, cli.log_json);
    tracing::debug!(event = "config_resolved", db = %cfg.db_path.display(), log_level = %cfg.log_level);

    match cli.cmd {
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
        Command::Classify(args) => classify::cmd_classify(args),
        Command::Init => {
            open_store(&cfg.db_path)?;
            eprintln!("initialized {}", cfg.db_path.display());
            Ok(exit_codes::OK)
        }
        Command::Submit(args) => records::cmd_submit(&cfg.db_path, args),
        Command::Update(args) => records::cmd_update(&cfg.db_path, args),
        Command::Delete(args) => records::cmd_delete(&cfg.db_path, args),
        Command::Show(args) => records::cmd_show(&cfg.db_path, args),
        Command::List(args) => records::cmd_list(&cfg.db_path, args),
        Command::ImportLegacy(args) => import::cmd_import_legacy(&cfg.db_path, args),
    }
}

/// The one connection for this process, with the table in place.
pub fn open_store(db: &Path) -> anyhow::Result<Store> {
    ensure_parent_dir(db)?;
    let store = Store::open(db)?;
    store.init_schema()?;
    Ok(store)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
