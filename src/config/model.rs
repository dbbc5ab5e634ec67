use serde::Deserialize;

use crate::analyzer::{
    ClaimThresholds, DocRatioThresholds, StructureThresholds, VerbosityThresholds,
};
use crate::engine::ScanOptions;
use crate::error::{Result, SlopGuardError};
use crate::exclusion::CacheCapacities;
use crate::language::known_extensions;
use crate::rules::Severity;

/// Exclude patterns applied to file discovery out of the box. These feed
/// the scan-level filter, not the per-rule exclusion matcher.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "**/target/**",
    "**/node_modules/**",
    "**/.git/**",
    "**/vendor/**",
    "**/dist/**",
    "**/build/**",
];

/// `.slop-guard.toml`, fully defaulted: an absent file and an empty file
/// behave identically.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanSection,
    pub thresholds: ThresholdsSection,
    pub cache: CacheCapacities,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// File extensions eligible for scanning.
    pub extensions: Vec<String>,
    /// Glob patterns removed from discovery entirely.
    pub exclude: Vec<String>,
    /// Respect .gitignore during directory discovery.
    pub gitignore: bool,
    /// Findings at or above this severity fail the scan.
    pub fail_on: Severity,
    /// Restrict scanning to these language families; empty means all.
    pub languages: Vec<String>,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            extensions: known_extensions(),
            exclude: DEFAULT_EXCLUDES.iter().map(|p| (*p).to_string()).collect(),
            gitignore: true,
            fail_on: Severity::High,
            languages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ThresholdsSection {
    pub doc_ratio: DocRatioThresholds,
    pub verbosity: VerbosityThresholds,
    pub structure: StructureThresholds,
    pub claims: ClaimThresholds,
}

impl Config {
    /// Checks the parts serde cannot: glob syntax, language names, and
    /// threshold ranges.
    ///
    /// # Errors
    /// Returns `SlopGuardError::Config` or `InvalidPattern` describing the
    /// first offending entry.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.scan.exclude {
            globset::Glob::new(pattern).map_err(|e| SlopGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        }

        for language in &self.scan.languages {
            language
                .parse::<crate::language::Lang>()
                .map_err(SlopGuardError::Config)?;
        }

        if self.thresholds.doc_ratio.max_ratio <= 0.0 {
            return Err(SlopGuardError::Config(
                "thresholds.doc_ratio.max_ratio must be positive".to_string(),
            ));
        }
        if self.thresholds.verbosity.max_comment_ratio <= 0.0 {
            return Err(SlopGuardError::Config(
                "thresholds.verbosity.max_comment_ratio must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Builds engine options from the config.
    ///
    /// # Errors
    /// Returns `SlopGuardError::Config` when a language name is unknown.
    pub fn scan_options(&self) -> Result<ScanOptions> {
        let languages = self
            .scan
            .languages
            .iter()
            .map(|name| name.parse().map_err(SlopGuardError::Config))
            .collect::<Result<Vec<_>>>()?;

        Ok(ScanOptions {
            languages,
            min_severity: None,
            doc_ratio: self.thresholds.doc_ratio,
            verbosity: self.thresholds.verbosity,
            structure: self.thresholds.structure,
            claims: self.thresholds.claims,
            caches: self.cache,
        })
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
