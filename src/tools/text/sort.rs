//! Line sorter.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

use crate::tools::{require_input, ToolResult};

named_options! {
    /// Sort order for lines.
    pub enum SortOrder {
        /// Alphabetical, A to Z
        Asc => "asc",
        /// Alphabetical, Z to A
        Desc => "desc",
        /// Shortest line first
        Length => "length",
        /// By the leading number on each line
        Numeric => "numeric",
        /// Reverse the current order
        Reverse => "reverse",
        /// Random order
        Shuffle => "shuffle",
    }
}

/// Extra sort options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortOptions {
    /// Compare ignoring letter case (alphabetical orders only)
    pub case_insensitive: bool,
    /// Drop blank lines before sorting
    pub remove_empty: bool,
    /// Seed for `shuffle`, for reproducible output
    pub seed: Option<u64>,
}

fn leading_number(line: &str) -> Option<f64> {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let re = NUMBER.get_or_init(|| {
        Regex::new(r"^\s*([-+]?\d+(?:\.\d+)?)").expect("static pattern is valid")
    });
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Sorts the lines of `text`. Sorting is stable; lines without a leading
/// number go last in `numeric` order.
pub fn sort_lines(text: &str, order: SortOrder, options: SortOptions) -> ToolResult<String> {
    require_input(text, "Text")?;

    let mut lines: Vec<&str> = text
        .lines()
        .filter(|line| !(options.remove_empty && line.trim().is_empty()))
        .collect();

    let alphabetical = |a: &&str, b: &&str| {
        if options.case_insensitive {
            a.to_lowercase().cmp(&b.to_lowercase())
        } else {
            a.cmp(b)
        }
    };

    match order {
        SortOrder::Asc => lines.sort_by(alphabetical),
        SortOrder::Desc => lines.sort_by(|a, b| alphabetical(b, a)),
        SortOrder::Length => lines.sort_by_key(|line| line.chars().count()),
        SortOrder::Numeric => lines.sort_by(|a, b| {
            match (leading_number(a), leading_number(b)) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
        SortOrder::Reverse => lines.reverse(),
        SortOrder::Shuffle => match options.seed {
            Some(seed) => lines.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => lines.shuffle(&mut rand::thread_rng()),
        },
    }

    Ok(lines.join("\n"))
}
