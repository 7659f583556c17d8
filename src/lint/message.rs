//! Conventional commit message parsing
//!
//! Message layout:
//! ```text
//! type(scope)!: subject
//!
//! body
//!
//! BREAKING CHANGE: footer
//! ```
//! The scope and the breaking-change marker are optional. A header that does
//! not follow the grammar still parses; its type, scope and subject are `None`.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<type>\w*)(?:\((?P<scope>[^)]*)\))?(?P<breaking>!)?: (?P<subject>.*)$")
        .expect("valid header regex")
});

/// First footer line: a breaking-change note, a git trailer or an issue reference
static FOOTER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:BREAKING[ -]CHANGE: |[\w-]+(?:: | #)\S)").expect("valid footer regex")
});

/// Headers git or review tools generate; these are never linted
static IGNORED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^Merge pull request ",
        r"^Merge (?:remote-tracking )?branch ",
        r"^Merge .+ into .+",
        r"^Merged .+ (?:in|into) .+",
        r"^Auto-merged .+ into .+",
        r"^Automatic merge",
        r"^[Rr]evert .+",
        r"^(?:fixup|squash|amend)! ",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid ignore regex"))
    .collect()
});

/// Line written by `git commit --verbose`; everything below it is the diff
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// Separators allowed between several scopes in one header
const SCOPE_DELIMITERS: &[char] = &[',', '/', '\\'];

/// A parsed commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line, untrimmed
    pub header: String,
    pub body: Option<String>,
    /// Trailing notes and trailers (`BREAKING CHANGE: ..`, `Refs #12`)
    pub footer: Option<String>,
    pub commit_type: Option<String>,
    /// Raw scope text between the parentheses
    pub scope: Option<String>,
    pub subject: Option<String>,
    pub breaking: bool,
    /// The line after the header is blank (or there is none)
    pub body_leading_blank: bool,
    /// The line before the footer is blank (or there is no footer)
    pub footer_leading_blank: bool,
}

impl CommitMessage {
    /// Parse a raw commit message as git writes it to `COMMIT_EDITMSG`.
    ///
    /// Comment lines (starting with `#`) are dropped, and everything below
    /// the scissors line is discarded, as git does for `commit --verbose`.
    pub fn parse(raw: &str) -> Self {
        let lines = strip_comments(raw);
        let header = lines.first().cloned().unwrap_or_default();
        let rest = lines.get(1..).unwrap_or_default();

        let footer_start = rest
            .iter()
            .position(|line| FOOTER_PATTERN.is_match(line))
            .unwrap_or(rest.len());

        let mut message = Self {
            header,
            body: join_block(&rest[..footer_start]),
            footer: join_block(&rest[footer_start..]),
            commit_type: None,
            scope: None,
            subject: None,
            breaking: false,
            body_leading_blank: rest.first().is_none_or(|l| l.trim().is_empty()),
            footer_leading_blank: footer_start == rest.len()
                || (footer_start > 0 && rest[footer_start - 1].trim().is_empty()),
        };

        if let Some(caps) = HEADER_PATTERN.captures(&message.header) {
            message.commit_type = caps
                .name("type")
                .map(|m| m.as_str().to_string())
                .filter(|t| !t.is_empty());
            message.scope = caps
                .name("scope")
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty());
            message.subject = caps
                .name("subject")
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty());
            message.breaking = caps.name("breaking").is_some();
        }

        message
    }

    /// True when nothing but comments and whitespace was given
    pub fn is_empty(&self) -> bool {
        self.header.trim().is_empty() && self.body.is_none() && self.footer.is_none()
    }

    /// Individual scopes, split on `,`, `/` and `\`
    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_deref()
            .map(|s| {
                s.split(SCOPE_DELIMITERS)
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the header is one generated by git (merges, reverts, fixups)
    pub fn is_ignored(&self) -> bool {
        IGNORED_PATTERNS.iter().any(|re| re.is_match(&self.header))
    }

    /// Header length, measured like commitlint does
    pub fn header_len(&self) -> usize {
        text_len(&self.header)
    }
}

/// Length in UTF-16 code units, the unit commitlint's length limits use.
/// An emoji outside the BMP counts as 2.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Message lines without comments, leading blank lines and trailing blank lines
fn strip_comments(raw: &str) -> Vec<String> {
    let mut kept = Vec::new();
    for line in raw.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim_end() == SCISSORS {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        kept.push(line.to_string());
    }

    // Leading blank lines would otherwise become an empty header
    let start = kept.iter().position(|l| !l.trim().is_empty()).unwrap_or(kept.len());
    let end = kept.iter().rposition(|l| !l.trim().is_empty()).map_or(start, |i| i + 1);
    kept.drain(start..end).collect()
}

fn join_block(lines: &[String]) -> Option<String> {
    let text = lines.join("\n").trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}
