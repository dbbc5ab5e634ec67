use std::path::Path;

use serde::Serialize;

use crate::analyzer::{
    ClaimReport, StructureReport, Verdict, analyze_claim_evidence, analyze_over_engineering,
};

use super::scan::ScanEngine;

/// Combined output of the project-level analyzers: over-engineering
/// metrics and claim-evidence checks, with an overall verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectAnalysis {
    pub structure: StructureReport,
    pub claims: ClaimReport,
    pub verdict: Verdict,
}

impl ScanEngine {
    /// Runs the repository-scoped analyzers against `root`.
    ///
    /// Separate from the per-file scan loop: these rules measure the whole
    /// tree, and running them once per file would rescan it N times.
    #[must_use]
    pub fn analyze_project(&self, root: &Path) -> ProjectAnalysis {
        let structure = analyze_over_engineering(root, &self.options().structure);
        let claims = analyze_claim_evidence(root, &self.options().claims);
        let verdict = structure.verdict.worst(claims.verdict);

        ProjectAnalysis {
            structure,
            claims,
            verdict,
        }
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
