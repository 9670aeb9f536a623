use super::{exit_codes, open_store};
use crate::cli::args::{IdArgs, ListArgs, SubmitArgs, UpdateArgs};
use anyhow::Context;
use scorecard_core::form::{parse_id, ScoreForm};
use scorecard_core::report;
use std::path::Path;

// Each handler validates its input before the database is opened.

pub fn cmd_submit(db: &Path, args: SubmitArgs) -> anyhow::Result<i32> {
    let s = &args.scores;
    let sub = ScoreForm::new(&args.name, &s.score_a, &s.score_b, &s.score_c).validate()?;

    let store = open_store(db)?;
    let id = store.create(&sub.name, sub.scores)?;
    println!("{}", id);
    eprintln!("saved #{}: predicted {}", id, sub.scores.category());
    Ok(exit_codes::OK)
}

pub fn cmd_update(db: &Path, args: UpdateArgs) -> anyhow::Result<i32> {
    let id = parse_id(&args.id)?;
    let s = &args.scores;
    let sub = ScoreForm::new(&args.name, &s.score_a, &s.score_b, &s.score_c).validate()?;

    let store = open_store(db)?;
    if store.update(id, &sub.name, sub.scores)? == 0 {
        eprintln!("note: no record with id {} (nothing updated)", id);
    } else {
        eprintln!("updated #{}: predicted {}", id, sub.scores.category());
    }
    Ok(exit_codes::OK)
}

pub fn cmd_delete(db: &Path, args: IdArgs) -> anyhow::Result<i32> {
    let id = parse_id(&args.id)?;
    let store = open_store(db)?;
    if store.delete(id)? == 0 {
        eprintln!("note: no record with id {} (nothing deleted)", id);
    } else {
        eprintln!("deleted #{}", id);
    }
    Ok(exit_codes::OK)
}

pub fn cmd_show(db: &Path, args: IdArgs) -> anyhow::Result<i32> {
    let id = parse_id(&args.id)?;
    let store = open_store(db)?;
    match store.get(id)? {
        Some(r) => print!("{}", report::console::render_table(std::slice::from_ref(&r))),
        None => eprintln!("note: no record with id {}", id),
    }
    Ok(exit_codes::OK)
}

pub fn cmd_list(db: &Path, args: ListArgs) -> anyhow::Result<i32> {
    if args.format != "json" && args.format != "text" {
        eprintln!(
            "config error: unknown format '{}' (expected text|json)",
            args.format
        );
        return Ok(exit_codes::ERROR);
    }

    let store = open_store(db)?;
    let records = store.read_all()?;

    if args.format == "json" {
        match &args.out {
            Some(p) => {
                report::json::write_json(&records, p)?;
                eprintln!("wrote file: {}", p.display());
            }
            None => println!("{}", report::json::to_json(&records)?),
        }
        return Ok(exit_codes::OK);
    }

    let stats = store.stats()?;
    match &args.out {
        Some(p) => {
            std::fs::write(p, report::console::render_table(&records))
                .with_context(|| format!("failed to write {}", p.display()))?;
            eprintln!("wrote file: {}", p.display());
            eprintln!("{}", report::console::render_summary(&stats));
        }
        None => report::console::print_records(&records, &stats),
    }
    Ok(exit_codes::OK)
}
