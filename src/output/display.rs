//! Display functions for command results

use super::formatters::{Likelihood, probability_bar, steal_line};
use crate::commands::{BatchSummary, DefineResult, ExploreResult, SimulationResult};
use colored::{ColoredString, Colorize};

fn paint(text: &str, probability: f64) -> ColoredString {
    match Likelihood::of(probability) {
        Likelihood::High => text.green().bold(),
        Likelihood::Medium => text.yellow(),
        Likelihood::Low => text.bright_black(),
        Likelihood::Impossible => text.red().dimmed(),
    }
}

/// Print a steal tree with its definition and length histogram
pub fn print_explore_result(result: &ExploreResult<'_>) {
    let tree = &result.tree;
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STEALS:".bright_cyan().bold(),
        tree.display_root().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("   {}", result.definition.italic());

    if tree.root().is_leaf() {
        println!("\n   {}", "No steals found".bright_black());
        return;
    }

    println!();
    tree.root().walk(|depth, node| {
        if depth > 0 {
            println!("{}", paint(&steal_line(depth, node), node.probability()));
        }
    });

    println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
    let total = result.stats.nodes as f64;
    for (&length, &count) in &result.histogram {
        let pct = count as f64 / total * 100.0;
        println!(
            "   {length:2}: {} {count:4} ({pct:5.1}%)",
            probability_bar(pct, 40).green()
        );
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Steals:         {}", result.stats.nodes);
    println!("   Distinct words: {}", result.stats.distinct_words);
    println!("   Deepest chain:  {}", result.stats.max_depth);
    if let Some(longest) = &result.stats.longest_word {
        println!("   Longest word:   {}", longest.bright_yellow());
    }
}

pub fn print_define_result(result: &DefineResult<'_>) {
    let word = if result.is_word {
        result.word.bright_yellow().bold()
    } else {
        result.word.to_lowercase().red()
    };
    println!("{word}: {}", result.definition);
}

pub fn print_batch_summary(summary: &BatchSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for entry in &summary.entries {
        match &entry.outcome {
            Ok(counts) => println!(
                "   {:<15} {:5} steals  {:5} words  depth {}",
                entry.word, counts.steals, counts.distinct_words, counts.max_depth
            ),
            Err(reason) => println!("   {:<15} {}", entry.word, reason.red()),
        }
    }

    println!("\n📊 {}", "Aggregate:".bright_cyan().bold());
    println!("   Words explored:   {}", summary.explored);
    println!("   Words rejected:   {}", summary.rejected);
    println!("   Total steals:     {}", summary.total_steals);
    println!(
        "   Average steals:   {}",
        format!("{:.2}", summary.average_steals()).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", summary.duration.as_secs_f64());
}

pub fn print_simulation_result(result: &SimulationResult) {
    println!(
        "\nDrawing {} from the unseen pool ({} trials)",
        result.letters.to_string().bright_yellow().bold(),
        result.trials
    );
    println!(
        "   Analytic:   [{}] {:.4}%",
        probability_bar(result.analytic, 30).green(),
        result.analytic
    );
    println!(
        "   Simulated:  [{}] {:.4}%",
        probability_bar(result.estimate, 30).cyan(),
        result.estimate
    );
    println!("   Difference: {:.4} points", result.difference());
}
