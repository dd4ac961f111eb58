//! Duplicate line remover.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::tools::{require_input, ToolResult};

named_options! {
    /// Which occurrences survive.
    pub enum DuplicateMode {
        /// Drop every line that occurs more than once
        All => "all",
        /// Collapse runs of identical adjacent lines
        Consecutive => "consecutive",
        /// Keep the first occurrence of each line
        KeepFirst => "keep-first",
        /// Keep the last occurrence of each line
        KeepLast => "keep-last",
    }
}

/// Comparison options.
#[derive(Debug, Clone, Copy, Default)]
pub struct DedupeOptions {
    /// Compare lines ignoring letter case
    pub case_insensitive: bool,
    /// Compare lines ignoring surrounding whitespace
    pub trim: bool,
    /// Never treat blank lines as duplicates
    pub ignore_empty: bool,
}

/// Surviving lines and how many were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DedupeOutcome {
    /// Lines kept, in original order
    pub lines: Vec<String>,
    /// Number of lines removed
    pub removed: usize,
}

impl DedupeOutcome {
    /// Lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Removes duplicate lines from `text`.
pub fn remove_duplicates(
    text: &str,
    mode: DuplicateMode,
    options: DedupeOptions,
) -> ToolResult<DedupeOutcome> {
    require_input(text, "Text")?;

    let lines: Vec<&str> = text.lines().collect();
    let kept = dedupe_lines(&lines, mode, options);

    Ok(DedupeOutcome {
        removed: lines.len() - kept.len(),
        lines: kept.into_iter().map(str::to_string).collect(),
    })
}

/// Line-level core of [`remove_duplicates`]. Applying it twice gives the
/// same result as applying it once, in every mode.
pub fn dedupe_lines<'a>(
    lines: &[&'a str],
    mode: DuplicateMode,
    options: DedupeOptions,
) -> Vec<&'a str> {
    let key = |line: &str| {
        let line = if options.trim { line.trim() } else { line };
        if options.case_insensitive {
            line.to_lowercase()
        } else {
            line.to_string()
        }
    };
    let exempt = |line: &str| options.ignore_empty && line.trim().is_empty();

    match mode {
        DuplicateMode::KeepFirst => {
            let mut seen = HashSet::new();
            let mut kept = Vec::new();
            for &line in lines {
                if exempt(line) || seen.insert(key(line)) {
                    kept.push(line);
                }
            }
            kept
        }
        DuplicateMode::KeepLast => {
            let mut last_index = HashMap::new();
            for (i, &line) in lines.iter().enumerate() {
                last_index.insert(key(line), i);
            }
            let mut kept = Vec::new();
            for (i, &line) in lines.iter().enumerate() {
                if exempt(line) || last_index.get(&key(line)) == Some(&i) {
                    kept.push(line);
                }
            }
            kept
        }
        DuplicateMode::Consecutive => {
            let mut previous: Option<String> = None;
            let mut kept = Vec::new();
            for &line in lines {
                let current = key(line);
                if exempt(line) || previous.as_ref() != Some(&current) {
                    kept.push(line);
                }
                previous = Some(current);
            }
            kept
        }
        DuplicateMode::All => {
            let mut counts: HashMap<String, usize> = HashMap::new();
            for &line in lines {
                *counts.entry(key(line)).or_default() += 1;
            }
            let mut kept = Vec::new();
            for &line in lines {
                if exempt(line) || counts.get(&key(line)) == Some(&1) {
                    kept.push(line);
                }
            }
            kept
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 5] = ["a", "b", "a", "c", "b"];

    #[test]
    fn test_keep_first() {
        assert_eq!(
            dedupe_lines(&SAMPLE, DuplicateMode::KeepFirst, DedupeOptions::default()),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn test_keep_last() {
        assert_eq!(
            dedupe_lines(&SAMPLE, DuplicateMode::KeepLast, DedupeOptions::default()),
            ["a", "c", "b"]
        );
    }

    #[test]
    fn test_all() {
        assert_eq!(
            dedupe_lines(&SAMPLE, DuplicateMode::All, DedupeOptions::default()),
            ["c"]
        );
    }

    #[test]
    fn test_consecutive() {
        let lines = ["a", "a", "b", "a", "a", "a"];
        assert_eq!(
            dedupe_lines(&lines, DuplicateMode::Consecutive, DedupeOptions::default()),
            ["a", "b", "a"]
        );
    }

    #[test]
    fn test_options() {
        let lines = ["Apple", " apple ", "", "", "pear"];
        let options = DedupeOptions {
            case_insensitive: true,
            trim: true,
            ignore_empty: true,
        };
        assert_eq!(
            dedupe_lines(&lines, DuplicateMode::KeepFirst, options),
            ["Apple", "", "", "pear"]
        );
        assert_eq!(
            dedupe_lines(&lines, DuplicateMode::KeepFirst, DedupeOptions::default()),
            ["Apple", " apple ", "", "pear"]
        );
    }

    #[test]
    fn test_idempotent_in_every_mode() {
        let corpus: [&[&str]; 4] = [
            &SAMPLE,
            &["x", "x", "y", "x", "", "", "Y", "y "],
            &["same", "same", "same"],
            &["one"],
        ];
        let option_sets = [
            DedupeOptions::default(),
            DedupeOptions {
                case_insensitive: true,
                trim: true,
                ignore_empty: false,
            },
            DedupeOptions {
                case_insensitive: false,
                trim: false,
                ignore_empty: true,
            },
        ];

        for mode in DuplicateMode::ALL {
            for options in option_sets {
                for lines in corpus {
                    let once = dedupe_lines(lines, *mode, options);
                    let twice = dedupe_lines(&once, *mode, options);
                    assert_eq!(once, twice, "mode {mode} on {lines:?}");
                }
            }
        }
    }

    #[test]
    fn test_remove_duplicates_counts() {
        let outcome =
            remove_duplicates("a\nb\na\nc\nb", DuplicateMode::KeepFirst, DedupeOptions::default())
                .unwrap();
        assert_eq!(outcome.lines, ["a", "b", "c"]);
        assert_eq!(outcome.removed, 2);
        assert_eq!(outcome.text(), "a\nb\nc");
    }

    #[test]
    fn test_empty_input() {
        assert!(remove_duplicates("\n\n", DuplicateMode::All, DedupeOptions::default()).is_err());
    }
}
