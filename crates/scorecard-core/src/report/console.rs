use crate::model::StudentRecord;
use crate::storage::StoreStats;

const NAME_WIDTH: usize = 20;

pub fn render_table(records: &[StudentRecord]) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "{:>5}  {:<w$}  {:>7}  {:>7}  {:>7}  {}\n",
        "ID",
        "Name",
        "A",
        "B",
        "C",
        "Category",
        w = NAME_WIDTH
    ));
    for r in records {
        s.push_str(&format!(
            "{:>5}  {:<w$}  {:>7}  {:>7}  {:>7}  {}\n",
            r.id,
            truncate(&r.name, NAME_WIDTH),
            r.score_a,
            r.score_b,
            r.score_c,
            r.predicted_category,
            w = NAME_WIDTH
        ));
    }
    s
}

pub fn render_summary(stats: &StoreStats) -> String {
    let parts: Vec<String> = stats
        .by_category
        .iter()
        .map(|(label, n)| format!("{}={}", label, n))
        .collect();
    if parts.is_empty() {
        format!("Records: {}", stats.records)
    } else {
        format!("Records: {} ({})", stats.records, parts.join(" "))
    }
}

pub fn print_records(records: &[StudentRecord], stats: &StoreStats) {
    print!("{}", render_table(records));
    eprintln!("{}", render_summary(stats));
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('…');
        out
    }
}
