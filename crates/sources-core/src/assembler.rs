//! Line scanner that groups a sources file into [`SourceRecord`]s.
//!
//! The format looks like a YAML list but is not parsed as YAML. Each line is
//! matched on its own against a handful of field patterns:
//!
//! ```text
//! - name: github-mcp-server
//!   type: mcp
//!   package: "@github/mcp-server"
//!   enabled: true
//! ```
//!
//! A `- name:` line opens a new record. Field lines attach to the open record
//! and are dropped when no record is open yet. Anything else is ignored.

use regex::Regex;
use std::sync::LazyLock;

use crate::record::SourceRecord;

/// Whitespace inside patterns: the Unicode space separators and line
/// terminators plus the byte-order mark, without U+0085.
const SPACE: &str = r"[\t\n\x{0B}\x{0C}\r\x{20}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// A non-empty value that stops at any line terminator, so a bare `\r`
/// after the key never counts as a value.
const VALUE: &str = r"([^\n\r\x{2028}\x{2029}]+)";

fn pattern(template: &str) -> Regex {
    Regex::new(&template.replace("{ws}", SPACE).replace("{value}", VALUE)).unwrap()
}

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern("^{ws}*-{ws}*name:{ws}*{value}"));

static TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern("^{ws}*type:{ws}*{value}"));

/// Quoted fields: one layer of `"` or `'` is stripped, and the value stops at
/// the first quote character.
static PACKAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"^{ws}*package:{ws}*["']?([^"']+)["']?"#));

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"^{ws}*url:{ws}*["']?([^"']+)["']?"#));

static ENABLED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| pattern("^{ws}*enabled:{ws}*{value}"));

/// Scan `text` and return its records in source order.
///
/// Never fails: lines that match nothing are skipped.
pub fn assemble(text: &str) -> Vec<SourceRecord> {
    let (mut records, current) = text.split('\n').fold(
        (Vec::<SourceRecord>::new(), None::<SourceRecord>),
        |(mut records, current), line| {
            if let Some(name) = capture(&NAME_PATTERN, line) {
                records.extend(current);
                return (records, Some(SourceRecord::new(name)));
            }
            let current = current.map(|record| apply_fields(record, line));
            (records, current)
        },
    );
    records.extend(current);

    tracing::debug!(count = records.len(), "Assembled source records");
    records
}

fn apply_fields(mut record: SourceRecord, line: &str) -> SourceRecord {
    if let Some(kind) = capture(&TYPE_PATTERN, line) {
        record.kind = Some(kind);
    }
    if let Some(package) = capture(&PACKAGE_PATTERN, line) {
        record.package = Some(package);
    }
    if let Some(url) = capture(&URL_PATTERN, line) {
        record.url = Some(url);
    }
    if let Some(enabled) = capture(&ENABLED_PATTERN, line) {
        record.enabled = enabled == "true";
    }
    record
}

/// First capture group of `pattern` in `line`, trimmed.
fn capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_matches(is_space).to_string())
}

/// Same set as [`SPACE`].
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
