//! Eval command: best five-card hand out of seven given cards.

use std::collections::HashSet;
use std::io::Write;

use showdown_engine::cards::Card;
use showdown_engine::hand::evaluate;

use crate::error::CliError;
use crate::formatters::format_board;

pub fn handle_eval_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let parsed: Vec<Card> = cards
        .iter()
        .map(|c| {
            c.parse::<Card>()
                .map_err(|e| CliError::InvalidInput(e.to_string()))
        })
        .collect::<Result<_, _>>()?;

    let mut seen = HashSet::new();
    if let Some(dup) = parsed.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card {}", dup)));
    }

    let key = evaluate(&parsed)?;
    if json {
        let line = serde_json::to_string(&key).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{} => {}", format_board(&parsed), key)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn reports_the_best_hand() {
        let mut out = Vec::new();
        handle_eval_command(&args("As Ad Jh 9c 5d 3s 2h"), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.trim_end().ends_with("=> One Pair (A J 9 5)"), "{}", text);
    }

    #[test]
    fn json_carries_the_category() {
        let mut out = Vec::new();
        handle_eval_command(&args("Ah Kh Qh Jh Th 2c 3d"), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["category"], "StraightFlush");
    }

    #[test]
    fn rejects_bad_and_repeated_cards() {
        let mut out = Vec::new();
        assert!(matches!(
            handle_eval_command(&args("As Ad Jh 9c 5d 3s 1x"), false, &mut out),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            handle_eval_command(&args("As As Jh 9c 5d 3s 2h"), false, &mut out),
            Err(CliError::InvalidInput(_))
        ));
    }
}
