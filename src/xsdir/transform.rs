//! The line pipeline turning an MCNP xsdir into the Serpent variant.
//!
//! Each input line goes through, in order:
//! 1. comment filtering (any `#` drops the line)
//! 2. `xdata/` and `xmc/` removal
//! 3. date-line removal: a `directory` line pops the last *retained* line if
//!    that line carries a `DD/DD/DDDD` stamp
//! 4. append
//!
//! Once every line is in, [`Transformer::finish`] puts the `datapath=` header
//! in front of the first retained line. Line terminators are never touched, so
//! the output elements concatenate back into the file contents.
//!
//! The date check runs for every `directory` line, not just the first one.

use super::rules::{self, DATAPATH_HEADER};

/// Counters collected over one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub lines_read: usize,
    pub comments_dropped: usize,
    pub date_lines_removed: usize,
    pub lines_written: usize,
}

/// Result of a finished pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    lines: Vec<String>,
    stats: TransformStats,
}

impl TransformOutput {
    /// Output elements. The first one holds the header and the first retained
    /// line joined by a newline.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn stats(&self) -> TransformStats {
        self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Concatenates every element verbatim.
    pub fn into_text(self) -> String {
        self.lines.concat()
    }
}

/// Incremental transformer; feed lines with [`push_line`](Self::push_line).
#[derive(Debug, Default)]
pub struct Transformer {
    lines: Vec<String>,
    stats: TransformStats,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one input line (terminator included) through steps 1-4.
    pub fn push_line(&mut self, line: &str) {
        self.stats.lines_read += 1;

        if rules::is_comment(line) {
            self.stats.comments_dropped += 1;
            return;
        }

        let line = rules::strip_path_tokens(line);

        if rules::is_directory_line(&line)
            && self.lines.last().is_some_and(|prev| rules::is_date_line(prev))
        {
            self.lines.pop();
            self.stats.date_lines_removed += 1;
        }

        self.lines.push(line);
    }

    /// Adds the header and hands back the output. Empty input stays empty.
    pub fn finish(mut self) -> TransformOutput {
        if let Some(first) = self.lines.first_mut() {
            first.insert(0, '\n');
            first.insert_str(0, DATAPATH_HEADER);
        }
        self.stats.lines_written = self.lines.len();
        TransformOutput {
            lines: self.lines,
            stats: self.stats,
        }
    }
}

/// Transforms an already split line sequence.
pub fn transform_lines<I, S>(lines: I) -> TransformOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut transformer = Transformer::new();
    for line in lines {
        transformer.push_line(line.as_ref());
    }
    transformer.finish()
}

/// Splits `text` after every `\n`, keeping terminators, and transforms it.
/// A final line without terminator is kept as is.
pub fn transform_text(text: &str) -> TransformOutput {
    transform_lines(text.split_inclusive('\n'))
}
