//! Formatting utilities for terminal output

use crate::generator::Puzzle;

/// Header of the puzzle table
pub const PUZZLE_HEADER: &str = "Énigme";

/// Render a left-justified single-column table
///
/// The header sits above a dash rule as wide as the widest row.
///
/// # Examples
/// ```
/// use mastermind_puzzle::output::formatters::render_table;
///
/// let table = render_table("Title", &["a", "longer row"]);
/// assert_eq!(table, "Title\n----------\na\nlonger row\n");
/// ```
#[must_use]
pub fn render_table<S: AsRef<str>>(header: &str, rows: &[S]) -> String {
    let width = rows
        .iter()
        .map(|r| r.as_ref().chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    out.push_str(&"-".repeat(width));
    out.push('\n');
    for row in rows {
        out.push_str(row.as_ref());
        out.push('\n');
    }
    out
}

/// Rows of the puzzle table: solution announcement, then clue phrases in order
#[must_use]
pub fn puzzle_rows(puzzle: &Puzzle) -> Vec<String> {
    std::iter::once(format!("✅ Solution : {}", puzzle.solution()))
        .chain(puzzle.clues().iter().map(|c| c.phrase().to_string()))
        .collect()
}

/// Render a puzzle as a table
#[must_use]
pub fn render_puzzle(puzzle: &Puzzle) -> String {
    render_table(PUZZLE_HEADER, &puzzle_rows(puzzle))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GeneratorConfig, generate_puzzle};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn table_rule_covers_header() {
        let table = render_table("Énigme", &["ab"]);
        assert_eq!(table, "Énigme\n------\nab\n");
    }

    #[test]
    fn table_without_rows() {
        let table = render_table::<&str>("Énigme", &[]);
        assert_eq!(table, "Énigme\n------\n");
    }

    #[test]
    fn puzzle_table_layout() {
        let mut rng = StdRng::seed_from_u64(8);
        let puzzle = generate_puzzle(&mut rng, &GeneratorConfig::default())
            .unwrap()
            .puzzle;
        let table = render_puzzle(&puzzle);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2 + 1 + puzzle.clues().len());
        assert_eq!(lines[0], PUZZLE_HEADER);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], format!("✅ Solution : {}", puzzle.solution()));
        for (line, clue) in lines[3..].iter().zip(puzzle.clues()) {
            assert_eq!(*line, clue.phrase());
        }
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
