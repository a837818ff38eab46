//! Clue phrasing
//!
//! Renders a scored guess as a French sentence, e.g.
//! `1243 : 2 chiffres sont bien placés, 2 chiffres sont mal placés`.

use super::{Code, Score};

/// Build the human-readable phrase for a scored guess
///
/// Clauses with a zero count are omitted; a zero/zero score gets a neutral
/// phrase instead.
///
/// # Examples
/// ```
/// use mastermind_puzzle::core::{Code, Score, phrase_for};
///
/// let guess = Code::new("1243").unwrap();
/// assert_eq!(
///     phrase_for(&guess, Score::checked(1, 0).unwrap()),
///     "1243 : 1 chiffre est bien placé"
/// );
/// ```
#[must_use]
pub fn phrase_for(guess: &Code, score: Score) -> String {
    let clauses: Vec<String> = [
        clause(score.well_placed(), "bien placé"),
        clause(score.misplaced(), "mal placé"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if clauses.is_empty() {
        format!("{guess} : aucun chiffre n'est intéressant")
    } else {
        format!("{guess} : {}", clauses.join(", "))
    }
}

fn clause(count: u8, qualifier: &str) -> Option<String> {
    match count {
        0 => None,
        1 => Some(format!("1 chiffre est {qualifier}")),
        n => Some(format!("{n} chiffres sont {qualifier}s")),
    }
}
