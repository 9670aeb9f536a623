use super::exit_codes;
use crate::cli::args::ScoreArgs;
use scorecard_core::form::ScoreForm;

pub fn cmd_classify(args: ScoreArgs) -> anyhow::Result<i32> {
    let sub = ScoreForm::new("", &args.score_a, &args.score_b, &args.score_c).validate()?;
    println!("{}", sub.scores.category());
    Ok(exit_codes::OK)
}
