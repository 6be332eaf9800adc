//! Display functions for command results

use super::formatters::{RULES, create_progress_bar, format_grid, grid_header};
use crate::commands::{BatchResult, CheckResult};
use crate::core::{LetterGrid, Selection};
use crate::morph::{ACCEPT_THRESHOLD, ParseMethod};
use colored::Colorize;
use std::path::Path;

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    let verdict = &result.verdict;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {}",
        verdict.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.parses.is_empty() {
        println!("\n  No parses.");
    } else {
        println!("\n📖 {}", "Parses:".bright_cyan().bold());
        for parse in &result.parses {
            let tag = parse.tag.map_or_else(
                || "UNKN".bright_black().to_string(),
                |t| format!("{t} ({})", t.describe()),
            );
            let method = match parse.method {
                ParseMethod::Dictionary => "dictionary",
                ParseMethod::Suffix => "suffix guess",
                ParseMethod::Unknown => "unknown",
            };
            println!(
                "   [{}] {:.3}  {:<28} lemma: {}  ({method})",
                create_progress_bar(parse.score, 1.0, 10).green(),
                parse.score,
                tag,
                parse.normal_form
            );
        }
    }

    println!(
        "\n   Grid:        {}",
        if result.path.is_some() {
            "can be built from the grid".green()
        } else {
            "cannot be built from the grid".yellow()
        }
    );
    println!(
        "   Dictionary:  {}",
        if result.in_dictionary {
            "already saved"
        } else {
            "not saved yet"
        }
    );

    println!();
    if verdict.accepted {
        println!(
            "{}",
            format!("✅ Valid word (+{} points)", verdict.word.chars().count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Not a word (needs a tagged parse scoring ≥ {ACCEPT_THRESHOLD})"
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of a batch run
pub fn print_batch_result(result: &BatchResult, saved: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Words checked:    {}", result.total_words);
    println!(
        "   Accepted:         {} {}",
        result.accepted.len().to_string().green(),
        format!("({:.1}%)", result.acceptance_rate()).bright_black()
    );
    println!(
        "   Rejected:         {}",
        result.rejected.len().to_string().red()
    );
    if saved {
        println!("   Newly saved:      {}", result.stored);
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if !result.rejected.is_empty() {
        println!("\n❌ {}", "Rejected words:".yellow().bold());
        for word in result.rejected.iter().take(20) {
            println!("   {word}");
        }
        if result.rejected.len() > 20 {
            println!("   … and {} more", result.rejected.len() - 20);
        }
    }
}

/// Print the dictionary listing
pub fn print_dictionary(words: &[String], path: &Path) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "DICTIONARY".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!("{}", path.display().to_string().bright_black());

    if words.is_empty() {
        println!("\n  Dictionary is empty");
        return;
    }

    println!();
    for word in words {
        println!("  {word}");
    }
    println!("\n  {} words", words.len().to_string().bright_yellow());
}

/// Print the letter grid with row and column numbers
pub fn print_grid(grid: &LetterGrid, selection: &Selection) {
    println!("\n   {}", grid_header().bright_black());
    for (i, line) in format_grid(grid, selection).lines().enumerate() {
        println!(" {} {}", (i + 1).to_string().bright_black(), line.bold());
    }
    println!();
}

/// Print the rules of the game
pub fn print_rules() {
    println!("\n{}", "Rules".bright_cyan().bold());
    for rule in RULES {
        println!("  {rule}");
    }
    println!();
}
