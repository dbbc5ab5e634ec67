mod claims;
mod delimiter;
mod doc_ratio;
mod functions;
mod structure;
mod types;
mod verbosity;

pub use claims::analyze_claim_evidence;
pub use delimiter::{SCAN_WINDOW, find_matching_delimiter};
pub use doc_ratio::analyze_doc_ratio;
pub use functions::{FunctionSpan, function_spans};
pub use structure::analyze_over_engineering;
pub use types::{
    Claim, ClaimReport, ClaimThresholds, DocRatioThresholds, StructureMetrics, StructureReport,
    StructureThresholds, VerbosityThresholds, Verdict, Violation, ViolationDetails,
};
pub use verbosity::analyze_verbosity_ratio;
