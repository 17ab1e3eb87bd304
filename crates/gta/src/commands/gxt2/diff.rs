use clap::{Args, ValueEnum};
use itertools::{EitherOrBoth, Itertools};
use miette::Result;
use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};
use std::{borrow::Cow, fmt::Display, path::PathBuf};
use tracing::info;

use gta_gxt2::Gxt2Table;

use crate::commands::{gxt2::load, Key};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    /// Report which entries changed
    #[default]
    Semantic,
    /// Also show an inline diff of every changed description
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Change {
    Comparison(String, String, String),
    Added(u32, String),
    Removed(u32, String),
    Modified(u32, Vec<String>),
}

impl Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Change::Comparison(key, old, new) => {
                writeln!(f, "* {}: {} vs {}", key, old.red(), new.green())
            }
            Change::Added(hash, v) => {
                writeln!(f, "✅ {}: {}", Key(*hash), v.green())
            }
            Change::Removed(hash, v) => {
                writeln!(f, "❌ {}: {}", Key(*hash), v.red())
            }
            Change::Modified(hash, context) => {
                writeln!(f, "🔃 {}", Key(*hash).blue())?;
                context
                    .iter()
                    .try_for_each(|line| writeln!(f, "  {}", line.trim_end()))
            }
        }
    }
}

#[derive(Args)]
pub struct DiffArgs {
    /// An input GXT2 file
    #[arg(short, long, value_name = "FILE")]
    left: PathBuf,

    /// An input GXT2 file
    #[arg(short, long, value_name = "FILE")]
    right: PathBuf,

    /// Comparison mode
    #[arg(short, long, value_enum, default_value_t=Mode::Semantic)]
    mode: Mode,
}

impl DiffArgs {
    fn compare_values(&self, old: &str, new: &str) -> Vec<String> {
        if self.mode == Mode::Semantic {
            return vec![
                format!("{} {}", "-".red(), old.red()),
                format!("{} {}", "+".green(), new.green()),
            ];
        }

        let diff = TextDiff::from_words(old, new);
        let mut comparison = Vec::new();
        for op in diff.ops() {
            for change in diff.iter_inline_changes(op) {
                let mut context = match change.tag() {
                    ChangeTag::Delete => format!("{} ", "-".red()),
                    ChangeTag::Insert => format!("{} ", "+".green()),
                    ChangeTag::Equal => "  ".to_string(),
                };
                for (emphasized, value) in change.iter_strings_lossy() {
                    match (emphasized, change.tag()) {
                        (true, ChangeTag::Insert) => {
                            context.push_str(&format!("{}", value.green().underline()))
                        }
                        (true, _) => context.push_str(&format!("{}", value.red().underline())),
                        (false, _) => context.push_str(&format!("{}", value.dimmed())),
                    }
                }
                comparison.push(context);
            }
        }
        comparison
    }

    fn changes(&self, left: &Gxt2Table, right: &Gxt2Table) -> Result<Vec<Change>> {
        let mut result = Vec::new();

        if left.len() != right.len() {
            result.push(Change::Comparison(
                "entries".into(),
                left.len().to_string(),
                right.len().to_string(),
            ));
        }

        if self.mode == Mode::Full && left.as_bytes().len() != right.as_bytes().len() {
            result.push(Change::Comparison(
                "size".into(),
                left.as_bytes().len().to_string(),
                right.as_bytes().len().to_string(),
            ));
        }

        let left_entries = left.entries().collect::<gta_gxt2::error::Result<Vec<_>>>()?;
        let right_entries = right.entries().collect::<gta_gxt2::error::Result<Vec<_>>>()?;

        // Both sides are sorted by hash
        for pair in left_entries
            .into_iter()
            .merge_join_by(right_entries, |(l, _), (r, _)| l.cmp(r))
        {
            match pair {
                EitherOrBoth::Left((hash, value)) => {
                    result.push(Change::Removed(hash, value.into_owned()))
                }
                EitherOrBoth::Right((hash, value)) => {
                    result.push(Change::Added(hash, value.into_owned()))
                }
                EitherOrBoth::Both((hash, old), (_, new)) if old != new => {
                    result.push(Change::Modified(hash, self.compare_values(&old, &new)))
                }
                EitherOrBoth::Both(..) => {}
            }
        }

        Ok(result)
    }

    pub fn handle(&self) -> Result<()> {
        let left = load(&self.left)?;
        let right = load(&self.right)?;

        let changes = self.changes(&left, &right)?;
        if changes.is_empty() {
            info!("tables are identical");
            return Ok(());
        }

        println!(
            "{} {} vs {}",
            "🔃".blue(),
            self.left.display(),
            self.right.display()
        );
        print!(
            "{}",
            changes
                .iter()
                .sorted()
                .map(|c| c.to_string())
                .join("")
        );

        Ok(())
    }
}
