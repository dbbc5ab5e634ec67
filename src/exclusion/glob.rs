use regex::Regex;

/// Ceiling on wildcard tokens per pattern. Patterns above this compile to a
/// matcher that matches nothing, bounding the worst-case cost of the
/// generated regex.
pub const MAX_WILDCARDS: usize = 10;

/// A compiled exclusion glob.
///
/// `Never` is the degraded form: produced for patterns over the wildcard
/// ceiling or patterns whose translation fails to compile. It matches no
/// input, so a bad pattern can only widen the scan, never break it.
#[derive(Debug, Clone)]
pub enum CompiledGlob {
    Never,
    Matcher(Regex),
}

impl CompiledGlob {
    /// Compile a glob-style exclude pattern.
    ///
    /// `*` and `**` are both translated to "match any sequence", with no
    /// directory-boundary distinction. All other regex metacharacters are
    /// escaped literally. Never fails: unsafe or invalid patterns degrade
    /// to `Never`.
    #[must_use]
    pub fn compile(pattern: &str) -> Self {
        if pattern.matches('*').count() > MAX_WILDCARDS {
            return Self::Never;
        }

        let mut source = String::with_capacity(pattern.len() + 8);
        source.push('^');
        for segment in WildcardSegments::new(pattern) {
            match segment {
                Segment::Wildcard => source.push_str(".*"),
                Segment::Literal(text) => source.push_str(&regex::escape(text)),
            }
        }
        source.push('$');

        Regex::new(&source).map_or(Self::Never, Self::Matcher)
    }

    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Never => false,
            Self::Matcher(re) => re.is_match(text),
        }
    }
}

enum Segment<'a> {
    /// A run of one or more `*` characters.
    Wildcard,
    Literal(&'a str),
}

/// Splits a pattern into literal runs and wildcard runs. Consecutive stars
/// collapse into a single wildcard segment, which is what gives `*` and
/// `**` their identical semantics.
struct WildcardSegments<'a> {
    rest: &'a str,
}

impl<'a> WildcardSegments<'a> {
    const fn new(pattern: &'a str) -> Self {
        Self { rest: pattern }
    }
}

impl<'a> Iterator for WildcardSegments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if self.rest.starts_with('*') {
            self.rest = self.rest.trim_start_matches('*');
            return Some(Segment::Wildcard);
        }

        let end = self.rest.find('*').unwrap_or(self.rest.len());
        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Literal(literal))
    }
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
