mod builtin;
mod model;
mod registry;

pub use model::{
    Certainty, Remediation, RuleDefinition, RuleMatcher, Severity, StructuralKind, Thresholds,
};
pub use registry::{RuleQuery, RuleRegistry};
