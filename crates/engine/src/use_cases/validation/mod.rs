//! The validation engine.
//!
//! `ValidationEngine::validate` walks the rule registry over a read-only
//! snapshot of the world and every case, and returns the findings as one
//! stable, ordered list. The run is pure: no I/O, no clock, no shared
//! state, so it is idempotent (identical input, byte-identical report) and
//! safe to execute on a background task against a cloned snapshot.
//!
//! No rule's failure aborts a run. An evaluator that returns an error or
//! panics is converted into a single synthetic Error-severity finding and
//! the run continues; validation must never crash its host.

pub mod evaluators;
pub mod registry;

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use casewright_domain::{CaseFile, CaseId, Finding, Rule, Severity, WorldData};

pub use registry::{Evaluator, RegisteredRule, RuleRegistry};

/// An evaluator could not complete against the given snapshot.
///
/// These are internal faults (a structurally impossible state), not
/// findings. The engine renders each as one Error-severity finding so the
/// report still surfaces the problem.
#[derive(Debug, thiserror::Error)]
pub enum RuleEvaluationError {
    #[error("Rule evaluation failed: {0}")]
    Internal(String),
}

impl RuleEvaluationError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Rule-driven integrity checker over a world + cases snapshot.
pub struct ValidationEngine {
    registry: RuleRegistry,
}

impl ValidationEngine {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Engine with the full standard rule set.
    pub fn standard() -> Self {
        Self::new(RuleRegistry::standard())
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run every registered rule: world-scope rules once against `world`,
    /// case-scope rules once per case, each case finding tagged with its
    /// owning case id. Findings are concatenated in registry order, then in
    /// the iteration order of whatever each evaluator walks; they are never
    /// re-sorted.
    pub fn validate(
        &self,
        world: &WorldData,
        cases: &BTreeMap<CaseId, CaseFile>,
    ) -> Vec<Finding> {
        let mut findings = Vec::new();
        for registered in self.registry.rules() {
            match registered.evaluator {
                Evaluator::World(evaluate) => {
                    findings.extend(guarded(&registered.rule, || {
                        evaluate(&registered.rule, world)
                    }));
                }
                Evaluator::Case(evaluate) => {
                    for (case_id, case) in cases {
                        let case_findings = guarded(&registered.rule, || {
                            evaluate(&registered.rule, world, case)
                        });
                        findings.extend(
                            case_findings
                                .into_iter()
                                .map(|f| f.in_case(case_id.clone())),
                        );
                    }
                }
            }
        }
        tracing::debug!(
            rules = self.registry.len(),
            cases = cases.len(),
            findings = findings.len(),
            "Validation run complete"
        );
        findings
    }
}

/// Run one evaluator, converting an `Err` or a panic into a single
/// synthetic finding.
fn guarded(
    rule: &Rule,
    run: impl FnOnce() -> Result<Vec<Finding>, RuleEvaluationError>,
) -> Vec<Finding> {
    match catch_unwind(AssertUnwindSafe(run)) {
        Ok(Ok(findings)) => findings,
        Ok(Err(err)) => {
            tracing::error!(rule_id = rule.id, error = %err, "Rule evaluation failed");
            vec![internal_fault(rule, &err.to_string())]
        }
        Err(panic) => {
            let detail = panic_message(panic.as_ref());
            tracing::error!(rule_id = rule.id, detail = %detail, "Rule evaluator panicked");
            vec![internal_fault(rule, &detail)]
        }
    }
}

fn internal_fault(rule: &Rule, detail: &str) -> Finding {
    Finding {
        rule_id: rule.id.to_string(),
        category: rule.category,
        // internal faults are always errors, whatever the rule's severity
        severity: Severity::Error,
        message: format!("Internal fault while evaluating rule {}: {}", rule.id, detail),
        offending_ids: Vec::new(),
        case_id: None,
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
