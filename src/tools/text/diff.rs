//! Line diff based on the longest common subsequence.

use serde::Serialize;

use crate::tools::{ToolError, ToolResult};

/// One line of a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "line", rename_all = "lowercase")]
pub enum DiffOp<'a> {
    /// Present in both texts
    Equal(&'a str),
    /// Only in the new text
    Added(&'a str),
    /// Only in the old text
    Removed(&'a str),
}

impl<'a> DiffOp<'a> {
    /// The line this operation refers to.
    pub const fn line(&self) -> &'a str {
        match self {
            Self::Equal(line) | Self::Added(line) | Self::Removed(line) => *line,
        }
    }

    const fn marker(&self) -> &'static str {
        match self {
            Self::Equal(_) => "  ",
            Self::Added(_) => "+ ",
            Self::Removed(_) => "- ",
        }
    }
}

/// Line counts per operation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    /// Unchanged lines
    pub unchanged: usize,
    /// Added lines
    pub added: usize,
    /// Removed lines
    pub removed: usize,
}

/// Result of [`diff_lines`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextDiff<'a> {
    /// Operations in output order
    pub ops: Vec<DiffOp<'a>>,
    /// Counts per kind
    pub stats: DiffStats,
}

impl TextDiff<'_> {
    /// True when both texts had identical lines.
    pub fn is_identical(&self) -> bool {
        self.stats.added == 0 && self.stats.removed == 0
    }

    /// Unified-style rendering: `"  "`, `"+ "` or `"- "` before each line.
    pub fn render(&self) -> String {
        self.ops
            .iter()
            .map(|op| format!("{}{}", op.marker(), op.line()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Compares `old` and `new` line by line. Fails when both are blank.
pub fn diff_lines<'a>(old: &'a str, new: &'a str) -> ToolResult<TextDiff<'a>> {
    if old.trim().is_empty() && new.trim().is_empty() {
        return Err(ToolError::EmptyInput { field: "Both texts" });
    }

    let a: Vec<&str> = old.lines().collect();
    let b: Vec<&str> = new.lines().collect();

    // lcs[i][j] = LCS length of a[i..] and b[j..]
    let mut lcs = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(a.len().max(b.len()));
    let mut stats = DiffStats::default();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            ops.push(DiffOp::Equal(a[i]));
            stats.unchanged += 1;
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            ops.push(DiffOp::Removed(a[i]));
            stats.removed += 1;
            i += 1;
        } else {
            ops.push(DiffOp::Added(b[j]));
            stats.added += 1;
            j += 1;
        }
    }
    for &line in &a[i..] {
        ops.push(DiffOp::Removed(line));
        stats.removed += 1;
    }
    for &line in &b[j..] {
        ops.push(DiffOp::Added(line));
        stats.added += 1;
    }

    Ok(TextDiff { ops, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        let diff = diff_lines("a\nb", "a\nb").unwrap();
        assert!(diff.is_identical());
        assert_eq!(diff.stats.unchanged, 2);
    }

    #[test]
    fn test_change_in_middle() {
        let diff = diff_lines("a\nb\nc", "a\nx\nc").unwrap();
        assert_eq!(
            diff.ops,
            vec![
                DiffOp::Equal("a"),
                DiffOp::Removed("b"),
                DiffOp::Added("x"),
                DiffOp::Equal("c"),
            ]
        );
        assert_eq!(diff.render(), "  a\n- b\n+ x\n  c");
    }

    #[test]
    fn test_one_side_empty() {
        let diff = diff_lines("", "new line").unwrap();
        assert_eq!(diff.ops, vec![DiffOp::Added("new line")]);
        assert_eq!(diff.stats.added, 1);
    }

    #[test]
    fn test_both_empty() {
        assert!(diff_lines(" ", "\n").is_err());
    }

    #[test]
    fn test_serializes_with_op_tag() {
        let json = serde_json::to_string(&DiffOp::Added("x")).unwrap();
        assert_eq!(json, r#"{"op":"added","line":"x"}"#);
    }
}
