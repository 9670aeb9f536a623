pub const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS students (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  score_a INTEGER,
  score_b INTEGER,
  score_c INTEGER,
  predicted_category TEXT
);
"#;

pub const TABLE: &str = "students";
