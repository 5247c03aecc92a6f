//! Batch exploration
//!
//! Explores many words in parallel against one shared lexicon.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::info;

use crate::config::ExploreConfig;
use crate::lexicon::LexiconIndex;

use super::explore::explore_word;

/// Outcome for one word of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub word: String,
    /// Tree nodes below the root, or the rejection message
    pub outcome: Result<BatchCounts, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchCounts {
    pub steals: usize,
    pub distinct_words: usize,
    pub max_depth: usize,
}

/// Results of a batch run, in input order
#[derive(Debug)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
    pub explored: usize,
    pub rejected: usize,
    pub total_steals: usize,
    pub duration: Duration,
}

impl BatchSummary {
    /// Mean tree size over explored words
    #[must_use]
    pub fn average_steals(&self) -> f64 {
        if self.explored == 0 {
            0.0
        } else {
            self.total_steals as f64 / self.explored as f64
        }
    }
}

/// Words of a batch file: one per line, blanks and `#` comments skipped
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Explore every word in parallel
pub fn run_batch(
    words: &[String],
    index: &LexiconIndex,
    config: &ExploreConfig,
    show_progress: bool,
) -> BatchSummary {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let entries: Vec<BatchEntry> = words
        .par_iter()
        .map(|word| {
            let outcome = explore_word(word, index, config)
                .map(|result| BatchCounts {
                    steals: result.stats.nodes,
                    distinct_words: result.stats.distinct_words,
                    max_depth: result.stats.max_depth,
                })
                .map_err(|e| e.to_string());
            pb.inc(1);
            BatchEntry {
                word: word.to_uppercase(),
                outcome,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    let explored = entries.iter().filter(|e| e.outcome.is_ok()).count();
    let total_steals = entries
        .iter()
        .filter_map(|e| e.outcome.as_ref().ok())
        .map(|counts| counts.steals)
        .sum();
    let duration = start.elapsed();

    info!(
        words = words.len(),
        explored,
        total_steals,
        elapsed_ms = duration.as_millis(),
        "batch complete"
    );

    BatchSummary {
        rejected: entries.len() - explored,
        entries,
        explored,
        total_steals,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> LexiconIndex {
        let mut index = LexiconIndex::new("TEST");
        for word in ["ACE", "CARE", "RACE", "CARTE", "ACES"] {
            index.insert(word, "");
        }
        index
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn batch_keeps_input_order() {
        let index = index();
        let summary = run_batch(
            &words(&["race", "ACER", "ZZZZ"]),
            &index,
            &ExploreConfig::default(),
            false,
        );

        let order: Vec<&str> = summary.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["RACE", "ACER", "ZZZZ"]);
    }

    #[test]
    fn batch_counts_steals_and_rejections() {
        let index = index();
        let summary = run_batch(
            &words(&["CARE", "ACE", "ZZZZ"]),
            &index,
            &ExploreConfig::default(),
            false,
        );

        assert_eq!(summary.explored, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.total_steals, 1);
        assert_eq!(
            summary.entries[0].outcome,
            Ok(BatchCounts {
                steals: 1,
                distinct_words: 1,
                max_depth: 1,
            })
        );
        assert!(summary.entries[1].outcome.is_err());
        assert!((summary.average_steals() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_batch() {
        let index = index();
        let summary = run_batch(&[], &index, &ExploreConfig::default(), false);

        assert!(summary.entries.is_empty());
        assert!(summary.average_steals().abs() < f64::EPSILON);
    }

    #[test]
    fn parse_word_list_skips_comments_and_blanks() {
        let text = "# openers\nCARE\n\n  race  extra\n#ACE\n";
        assert_eq!(parse_word_list(text), vec!["CARE", "race"]);
    }
}
