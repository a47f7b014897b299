use chunky_shared_kernel::DomainError;

use super::pattern::IgnorePattern;

/// Outcome of a rule set that has an opinion about a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The last matching line was a plain pattern.
    Ignore,
    /// The last matching line was a `!` negation.
    Include,
}

/// A rule set the registry can consult.
///
/// Paths are `/`-separated and relative to the directory the rules belong to.
/// `None` means no rule matched, so an outer directory gets to decide.
pub trait IgnoreRules: Send + Sync {
    fn decide(&self, relative: &str) -> Option<Decision>;

    fn matches(&self, relative: &str) -> bool {
        self.decide(relative) == Some(Decision::Ignore)
    }
}

/// Compiled text of one ignore file. Immutable once built.
///
/// Lines that fail to compile are skipped; they are kept in [`IgnoreSpec::rejected`]
/// so the caller can report them. Construction never fails.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSpec {
    patterns: Vec<IgnorePattern>,
    rejected: Vec<DomainError>,
}

impl IgnoreSpec {
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = Self::default();
        for (idx, line) in lines.into_iter().enumerate() {
            match IgnorePattern::parse(line.as_ref(), idx + 1) {
                Ok(Some(pattern)) => spec.patterns.push(pattern),
                Ok(None) => {}
                Err(err) => spec.rejected.push(err),
            }
        }
        spec
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    pub fn rejected(&self) -> &[DomainError] {
        &self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl IgnoreRules for IgnoreSpec {
    // last matching line wins
    fn decide(&self, relative: &str) -> Option<Decision> {
        self.patterns.iter().rev().find(|p| p.matches(relative)).map(|p| {
            if p.is_negated() { Decision::Include } else { Decision::Ignore }
        })
    }
}
