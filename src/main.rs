//! transreview CLI entry point.
//!
//! Runs the review classifier or the line search over local snapshot files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use transreview::application::review::rows::{
    RowFilter, default_row_filter, record_corpus, review_lines, rows_to_display,
};
use transreview::application::review::prose_lines;
use transreview::application::search::{MatchNavigator, split_into_parts};
use transreview::domain::{LineDiff, MatchLanguage, SearchState, Span};
use transreview::infra::app_config::load_config;
use transreview::infra::files::{load_document, load_snapshot_set};

#[derive(Parser, Debug)]
#[command(name = "transreview")]
#[command(version)]
#[command(about = "Review and search translation branches", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a branch's lines against the trunk
    Review {
        /// Source-language file shared by all snapshots
        #[arg(long)]
        original: PathBuf,
        /// Translation as it was when the branch was created
        #[arg(long)]
        origin: PathBuf,
        /// Current trunk translation
        #[arg(long)]
        base: PathBuf,
        /// Branch translation
        #[arg(long)]
        head: PathBuf,
        /// Show every prose line instead of only the changed ones
        #[arg(long)]
        all: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search a literal pattern in a translation file
    Search {
        /// Source-language file
        #[arg(long)]
        original: PathBuf,
        /// Translated file
        #[arg(long)]
        translated: PathBuf,
        /// Pattern to look for
        pattern: String,
        /// Match case exactly
        #[arg(long, overrides_with = "no_case_sensitive")]
        case_sensitive: bool,
        /// Ignore case even if the config enables case-sensitive search
        #[arg(long, overrides_with = "case_sensitive")]
        no_case_sensitive: bool,
        /// Only match whole words
        #[arg(long, overrides_with = "no_whole_word")]
        whole_word: bool,
        /// Match inside words even if the config enables whole-word search
        #[arg(long, overrides_with = "whole_word")]
        no_whole_word: bool,
        /// Column to search: translated or original
        #[arg(long)]
        language: Option<MatchLanguage>,
        /// Move the selection forward this many times
        #[arg(long, default_value = "0")]
        next: usize,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match args.command {
        Commands::Review {
            original,
            origin,
            base,
            head,
            all,
            json,
        } => {
            let set = load_snapshot_set(&original, &origin, &base, &head)
                .context("Failed to load snapshots")?;
            let mut cache = load_config().review_cache();
            let review = cache.classify(&set);
            let lines = review_lines(&set);
            let filter = if all {
                RowFilter::All
            } else {
                default_row_filter(&review)
            };
            let rows = rows_to_display(&lines, &review, filter);

            if json {
                let output = serde_json::json!({
                    "changed": review.changed,
                    "conflicted": review.conflicted,
                    "has_changes": review.has_changes,
                    "rows": rows,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            println!("changed: {}", join_numbers(&review.changed));
            println!("conflicted: {}", join_numbers(&review.conflicted));
            for row in rows {
                println!(
                    "{:>6} {} {} -> {}",
                    row.line_number,
                    status_marker(review.line_diff(row.line_number)),
                    row.old_translated,
                    row.new_translated
                );
            }
        }

        Commands::Search {
            original,
            translated,
            pattern,
            case_sensitive,
            no_case_sensitive,
            whole_word,
            no_whole_word,
            language,
            next,
            json,
        } => {
            let config = load_config();
            let options = config.search.resolve(
                flag(case_sensitive, no_case_sensitive),
                flag(whole_word, no_whole_word),
            );
            let language = language.unwrap_or(config.search.language);

            let doc = load_document(&original, &translated).context("Failed to load file")?;
            let doc = prose_lines(&doc);
            let corpus = record_corpus(doc.lines(), language);

            let mut navigator = MatchNavigator::new(options);
            navigator.set_pattern(&corpus, &pattern);
            for _ in 0..next {
                navigator.next();
            }

            let Some(state) = navigator.state() else {
                println!("no active search");
                return Ok(());
            };

            if json {
                println!("{}", serde_json::to_string_pretty(state)?);
                return Ok(());
            }

            println!("{}", state.position_label());
            for (&line_index, offsets) in &state.matches_by_line {
                let text = corpus[line_index];
                let pattern_len = state.pattern.chars().count();
                let parts = split_into_parts(offsets, pattern_len, text.chars().count());
                println!(
                    "{:>6}: {}",
                    doc.lines()[line_index].line_number,
                    highlight(text, &parts, state, line_index)
                );
            }
        }
    }

    Ok(())
}

/// An explicit `--x` or `--no-x`, or `None` to defer to the config.
fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn join_numbers<'a>(numbers: impl IntoIterator<Item = &'a usize>) -> String {
    numbers
        .into_iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn status_marker(diff: LineDiff) -> &'static str {
    match (diff.changed, diff.conflicted) {
        (true, true) => "[C!]",
        (true, false) => "[C ]",
        (false, true) => "[ !]",
        (false, false) => "[  ]",
    }
}

/// Brackets matches; the selected match gets braces.
fn highlight(text: &str, parts: &[Span], state: &SearchState, line_index: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + parts.len() * 2);
    for part in parts {
        let segment: String = chars[part.start..part.end].iter().collect();
        if !part.is_match {
            out.push_str(&segment);
        } else if state.is_selected(line_index, part.start) {
            out.push('{');
            out.push_str(&segment);
            out.push('}');
        } else {
            out.push('[');
            out.push_str(&segment);
            out.push(']');
        }
    }
    out
}
