use std::sync::Mutex;

use serde::Deserialize;

use super::bounded::BoundedMap;
use super::glob::CompiledGlob;

/// Capacities for the two exclusion caches. Zero disables a cache; results
/// are identical either way, only compile/match work is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheCapacities {
    pub compiled_globs: usize,
    pub exclusion_results: usize,
}

impl CacheCapacities {
    pub const DEFAULT: Self = Self {
        compiled_globs: 50,
        exclusion_results: 200,
    };
}

impl Default for CacheCapacities {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Decides whether a file is excluded for a rule by its exclude globs.
///
/// Both caches are protected by a mutex so one matcher can be shared across
/// rayon workers. Lock scope is a single map operation; the compile itself
/// runs outside the lock.
#[derive(Debug)]
pub struct ExclusionMatcher {
    compiled: Mutex<BoundedMap<String, CompiledGlob>>,
    results: Mutex<BoundedMap<ResultKey, bool>>,
}

/// (file path, exclusion-pattern-set) identity for the result cache.
type ResultKey = (String, String);

impl ExclusionMatcher {
    #[must_use]
    pub fn new(capacities: CacheCapacities) -> Self {
        Self {
            compiled: Mutex::new(BoundedMap::new(capacities.compiled_globs)),
            results: Mutex::new(BoundedMap::new(capacities.exclusion_results)),
        }
    }

    /// True when `path` matches any of `globs`.
    ///
    /// Never fails: a glob that cannot be compiled safely matches nothing,
    /// so a bad pattern widens the scan instead of breaking it. Paths are
    /// normalized to forward slashes before matching.
    #[must_use]
    pub fn is_excluded(&self, path: &str, globs: &[&str]) -> bool {
        if globs.is_empty() {
            return false;
        }

        let path = path.replace('\\', "/");
        let key = (path.clone(), globs.join("\n"));
        if let Ok(results) = self.results.lock()
            && let Some(&hit) = results.get(&key)
        {
            return hit;
        }

        let excluded = globs.iter().any(|glob| self.glob_matches(glob, &path));

        if let Ok(mut results) = self.results.lock() {
            results.insert(key, excluded);
        }
        excluded
    }

    fn glob_matches(&self, pattern: &str, path: &str) -> bool {
        if let Ok(cache) = self.compiled.lock()
            && let Some(glob) = cache.get(&pattern.to_string())
        {
            return glob.is_match(path);
        }

        let glob = CompiledGlob::compile(pattern);
        let matched = glob.is_match(path);
        if let Ok(mut cache) = self.compiled.lock() {
            cache.insert(pattern.to_string(), glob);
        }
        matched
    }
}

impl Default for ExclusionMatcher {
    fn default() -> Self {
        Self::new(CacheCapacities::DEFAULT)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
