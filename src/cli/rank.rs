//! Rank command implementation

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use snippet_symbols::config::load_config;
use snippet_symbols::{fill_prompt_with_snippets, rank_and_order_snippets, RankedSnippet};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::utils::{load_candidate, read_input};

#[derive(Args)]
pub struct RankArgs {
    /// File holding the text before the cursor
    #[arg(long, value_name = "FILE")]
    pub prefix: PathBuf,

    /// File holding the text after the cursor
    #[arg(long, value_name = "FILE")]
    pub suffix: Option<PathBuf>,

    /// Config file (auto-discovered in the current directory when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Token budget for selected snippets
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<usize>,

    /// Characters around the cursor used as the ranking query
    #[arg(long, value_name = "CHARS")]
    pub window_size: Option<usize>,

    /// Drop snippets scoring below this
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Emit JSONL instead of a table
    #[arg(long)]
    pub json: bool,

    /// Candidate snippets as `path` or `path:START-END` (1-based, inclusive)
    #[arg(value_name = "CANDIDATE", required = true)]
    pub candidates: Vec<String>,
}

pub fn run(args: RankArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = load_config(&cwd, args.config.as_deref())?;
    if let Some(max_tokens) = args.max_tokens {
        config.max_snippet_tokens = max_tokens;
    }
    if let Some(window_size) = args.window_size {
        config.sliding_window_size = window_size;
    }
    if let Some(min_score) = args.min_score {
        config.min_score = min_score;
    }
    config.validate().context("Invalid ranking options")?;

    let prefix = read_input(Some(args.prefix.as_path()))?;
    let suffix = match &args.suffix {
        Some(path) => read_input(Some(path.as_path()))?,
        None => String::new(),
    };

    let snippets = args
        .candidates
        .iter()
        .map(|spec| load_candidate(spec))
        .collect::<Result<Vec<_>>>()?;

    let ranked = rank_and_order_snippets(snippets, &prefix, &suffix, &config);
    let selected = fill_prompt_with_snippets(ranked, config.max_snippet_tokens);

    if args.json {
        print!("{}", render_jsonl(&selected));
    } else {
        for snippet in &selected {
            println!(
                "{:.3} {}:{}-{}",
                snippet.score_or_zero(),
                snippet.path,
                snippet.range.start_line + 1,
                snippet.range.end_line + 1
            );
        }
    }

    Ok(())
}

fn render_jsonl(snippets: &[RankedSnippet]) -> String {
    let mut lines = Vec::with_capacity(snippets.len());
    for snippet in snippets {
        // BTreeMap keeps keys in a stable alphabetical order.
        let mut entry: BTreeMap<&str, Value> = BTreeMap::new();
        entry.insert("contents", Value::String(snippet.contents.clone()));
        entry.insert("end_line", Value::Number((snippet.range.end_line + 1).into()));
        entry.insert("path", Value::String(snippet.path.clone()));
        entry.insert(
            "score",
            serde_json::Number::from_f64((snippet.score_or_zero() * 1000.0).round() / 1000.0)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        );
        entry.insert("start_line", Value::Number((snippet.range.start_line + 1).into()));

        if let Ok(line) = serde_json::to_string(&entry) {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}
