use chunky_shared_kernel::{DomainError, DomainResult};
use globset::{GlobBuilder, GlobMatcher};

/// One compiled line of an ignore file.
///
/// Grammar (gitignore subset):
/// - blank lines and lines starting with `#` carry no pattern; `\#` / `\!` escape a leading `#` / `!`
/// - trailing spaces and tabs are dropped unless escaped with `\`
/// - a leading `!` re-includes paths matched by earlier lines
/// - a trailing `/` restricts the pattern to directories
/// - a `/` anywhere else anchors the pattern to the ignore file's directory,
///   otherwise it may match at any depth
/// - `*` and `?` stay within one segment, `**` spans segments
///
/// A pattern matches a path if it matches the path itself or any directory above it,
/// so a matched directory carries all of its descendants with it.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    original: String,
    negated: bool,
    dir_only: bool,
    matcher: GlobMatcher,
}

impl IgnorePattern {
    /// Compile one line. `Ok(None)` for blank and comment lines.
    ///
    /// `line_no` is 1-based and only used for error reporting.
    pub fn parse(line: &str, line_no: usize) -> DomainResult<Option<Self>> {
        let text = trim_trailing_whitespace(line);
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }

        let (negated, body) = match text.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let body = if body.starts_with("\\#") || body.starts_with("\\!") { &body[1..] } else { body };
        let (dir_only, body) = match body.strip_suffix('/') {
            Some(rest) => (true, rest),
            None => (false, body),
        };

        let anchored = body.contains('/');
        let body = body.strip_prefix('/').unwrap_or(body);
        if body.is_empty() {
            return Err(invalid(text, line_no, "pattern is empty"));
        }

        let glob = if anchored { body.to_string() } else { format!("**/{body}") };
        let matcher = GlobBuilder::new(&glob)
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|err| invalid(text, line_no, &err.kind().to_string()))?
            .compile_matcher();

        Ok(Some(Self { original: text.to_string(), negated, dir_only, matcher }))
    }

    /// The line as written (after trailing whitespace removal).
    pub fn pattern(&self) -> &str {
        &self.original
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// Test a `/`-separated path relative to the ignore file's directory.
    pub fn matches(&self, relative: &str) -> bool {
        if !self.dir_only && self.matcher.is_match(relative) {
            return true;
        }
        relative
            .match_indices('/')
            .any(|(idx, _)| self.matcher.is_match(&relative[..idx]))
    }
}

fn invalid(pattern: &str, line: usize, details: &str) -> DomainError {
    DomainError::InvalidPattern { pattern: pattern.to_string(), line, details: details.to_string() }
}

fn trim_trailing_whitespace(line: &str) -> &str {
    let line = line.trim_end_matches(['\r', '\n']);
    let bytes = line.as_bytes();
    let mut end = bytes.len();
    while end > 0 && matches!(bytes[end - 1], b' ' | b'\t') {
        if end >= 2 && bytes[end - 2] == b'\\' {
            break;
        }
        end -= 1;
    }
    &line[..end]
}
