//! Fixed literals and per-line predicates used by the transformer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Line put in front of the first output line.
pub const DATAPATH_HEADER: &str = "datapath=home/mobaxterm/serpent/Serpent2xsdata";

/// Any line containing this character is dropped.
pub const COMMENT_MARKER: char = '#';

/// Path fragments deleted from every retained line, applied in this order.
pub const STRIPPED_TOKENS: [&str; 2] = ["xdata/", "xmc/"];

/// Marker whose preceding date stamp gets removed.
pub const DIRECTORY_MARKER: &str = "directory";

/// Name of the file written into the working directory.
pub const OUTPUT_FILE_NAME: &str = "xsdir_serpent";

/// `DD/DD/DDDD` anywhere in the line.
pub static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{2}/\d{2}/\d{4}").unwrap());

pub fn is_comment(line: &str) -> bool {
    line.contains(COMMENT_MARKER)
}

/// Deletes each of [`STRIPPED_TOKENS`] in turn.
///
/// Every replacement is a single left-to-right pass, so fragments that only
/// become a token once an inner token is removed (`xxmc/data/`) survive.
pub fn strip_path_tokens(line: &str) -> String {
    STRIPPED_TOKENS
        .iter()
        .fold(line.to_string(), |acc, token| acc.replace(token, ""))
}

pub fn is_directory_line(line: &str) -> bool {
    line.contains(DIRECTORY_MARKER)
}

pub fn is_date_line(line: &str) -> bool {
    DATE_PATTERN.is_match(line)
}
