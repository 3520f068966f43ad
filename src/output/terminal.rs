// Colored terminal output for document stats and the final distance.
//
// Everything printed here goes to stdout; logs go to stderr so the two
// never interleave in a pipe.

use std::f64::consts::FRAC_PI_2;

use colored::Colorize;

use super::{format_angle, truncate_chars};
use crate::document::Document;
use crate::pipeline::compare::Comparison;

/// Longest word shown in the frequency listing before truncation.
const MAX_WORD_DISPLAY: usize = 24;

/// Display one document's line, word, and distinct-word counts.
pub fn display_document(document: &Document, top: usize) {
    println!(
        "File {}: {} lines, {} words, {} distinct words",
        document.label.bold(),
        document.line_count,
        document.word_count,
        document.distinct_words()
    );

    if top == 0 || document.table.is_empty() {
        return;
    }

    for (i, entry) in document.table.most_frequent(top).iter().enumerate() {
        println!(
            "  {:>3}. {:<width$} {:>6}",
            i + 1,
            truncate_chars(&entry.word, MAX_WORD_DISPLAY),
            entry.count,
            width = MAX_WORD_DISPLAY + 3,
        );
    }
}

/// Display both documents followed by the computed distance.
pub fn display_comparison(comparison: &Comparison, precision: usize, top: usize) {
    display_document(&comparison.first, top);
    display_document(&comparison.second, top);

    println!(
        "{}",
        format!("  {} shared words", comparison.shared_words).dimmed()
    );
    println!(
        "The distance between the documents is: {} (radians)",
        colorize_angle(comparison.angle, precision)
    );
}

/// Color the angle by how close the documents are.
fn colorize_angle(angle: f64, precision: usize) -> colored::ColoredString {
    let text = format_angle(angle, precision);
    if angle < FRAC_PI_2 / 4.0 {
        text.green().bold()
    } else if angle < FRAC_PI_2 / 2.0 {
        text.yellow()
    } else {
        text.red()
    }
}
