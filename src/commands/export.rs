//! Export command
//!
//! Renders a steal tree as an indented word list or as visualisation JSON.

use tracing::warn;

use crate::config::ExploreConfig;
use crate::error::CommandError;
use crate::lexicon::LexiconIndex;
use crate::tree::{StealTree, generate_word_list, to_json_tree};

use super::explore::explore_word;

/// Output format for `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Root word, then one indented line per descendant
    #[default]
    Text,
    /// Nested `{name, children}` objects
    Json,
}

impl ExportFormat {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse a format name, warning and falling back to text
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!(name, "unknown export format, writing text");
            Self::default()
        })
    }
}

/// Render an already built tree
///
/// # Errors
///
/// Returns an error if JSON serialisation fails.
pub fn render_tree(tree: &StealTree<'_>, format: ExportFormat) -> Result<String, CommandError> {
    match format {
        ExportFormat::Text => {
            let mut text = tree.display_root();
            text.push('\n');
            for line in generate_word_list("", tree.root()) {
                text.push_str(&line);
                text.push('\n');
            }
            Ok(text)
        }
        ExportFormat::Json => Ok(to_json_tree(tree)?),
    }
}

/// Explore `word` and render the result
///
/// # Errors
///
/// Returns an error if the query is rejected or serialisation fails.
pub fn export_word(
    word: &str,
    index: &LexiconIndex,
    config: &ExploreConfig,
    format: ExportFormat,
) -> Result<String, CommandError> {
    let result = explore_word(word, index, config)?;
    render_tree(&result.tree, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> LexiconIndex {
        let mut index = LexiconIndex::new("TEST");
        for word in ["CARE", "RACE", "ACRE", "CARTE"] {
            index.insert(word, "");
        }
        index
    }

    #[test]
    fn text_export_lists_root_then_descendants() {
        let index = index();
        let text = export_word("CARE", &index, &ExploreConfig::default(), ExportFormat::Text)
            .unwrap();
        assert_eq!(text, "CARE\n  CARTE\n");
    }

    #[test]
    fn text_export_lowercases_non_word_root() {
        let index = index();
        let text = export_word("ACER", &index, &ExploreConfig::default(), ExportFormat::Text)
            .unwrap();
        assert_eq!(text, "acer\n  CARTE\n");
    }

    #[test]
    fn json_export() {
        let index = index();
        let json = export_word("care", &index, &ExploreConfig::default(), ExportFormat::Json)
            .unwrap();
        assert_eq!(json, r#"{"name":"CARE","children":[{"name":"CARTE"}]}"#);
    }

    #[test]
    fn format_names() {
        assert_eq!(ExportFormat::from_name("JSON"), ExportFormat::Json);
        assert_eq!(ExportFormat::from_name("text"), ExportFormat::Text);
        assert_eq!(ExportFormat::from_name("other"), ExportFormat::Text);
        assert_eq!(ExportFormat::parse("jsno"), None);
    }

    #[test]
    fn export_rejects_short_query() {
        let index = index();
        assert!(matches!(
            export_word("ACE", &index, &ExploreConfig::default(), ExportFormat::Text),
            Err(CommandError::Query(_))
        ));
    }
}
