//! The rule registry - ordered, named, typed.
//!
//! Each rule is one `Rule` definition paired with one evaluator function
//! registered under the same id. Registry order is report order; the engine
//! never sorts findings. Adding a rule means adding one entry to
//! `RuleRegistry::standard` and nothing else.

use casewright_domain::{CaseFile, Finding, Rule, RuleCategory, Severity, WorldData};

use super::evaluators::{deception, ground_truth, playability, referential};
use super::RuleEvaluationError;

/// World-scope evaluator: runs once per validation pass. Receives its own
/// rule definition so findings inherit the rule's metadata.
pub type WorldEvaluator = fn(&Rule, &WorldData) -> Result<Vec<Finding>, RuleEvaluationError>;

/// Case-scope evaluator: runs once per case.
pub type CaseEvaluator =
    fn(&Rule, &WorldData, &CaseFile) -> Result<Vec<Finding>, RuleEvaluationError>;

/// Typed indirection from rule id to evaluation function. A plain enum of
/// function pointers: no shared state, no dynamic lookup.
#[derive(Clone, Copy)]
pub enum Evaluator {
    World(WorldEvaluator),
    Case(CaseEvaluator),
}

/// One registry entry: the rule definition plus its evaluator.
pub struct RegisteredRule {
    pub rule: Rule,
    pub evaluator: Evaluator,
}

/// Ordered set of validation rules, indexed by rule id.
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
}

impl RuleRegistry {
    pub fn new(rules: Vec<RegisteredRule>) -> Self {
        Self { rules }
    }

    /// The full standard rule set. World-scope rules come first so a full
    /// report reads world problems, then per-case problems.
    pub fn standard() -> Self {
        Self::new(vec![
            // --- Referential Integrity (world scope) ---
            RegisteredRule {
                rule: Rule {
                    id: "world-entity-named",
                    category: RuleCategory::ReferentialIntegrity,
                    severity: Severity::Warning,
                    description: "Every world entity has a non-empty display name",
                    suggested_fix: "Give the entity a name in its editor form",
                },
                evaluator: Evaluator::World(referential::entities_named),
            },
            // --- Ground Truth ---
            RegisteredRule {
                rule: Rule {
                    id: "gt-victim-exists",
                    category: RuleCategory::GroundTruth,
                    severity: Severity::Error,
                    description: "The ground-truth victim resolves to an existing character",
                    suggested_fix: "Point the victim field at an existing character, or create the character",
                },
                evaluator: Evaluator::Case(ground_truth::victim_exists),
            },
            RegisteredRule {
                rule: Rule {
                    id: "gt-perpetrator-exists",
                    category: RuleCategory::GroundTruth,
                    severity: Severity::Error,
                    description: "The ground-truth perpetrator resolves to an existing character",
                    suggested_fix: "Point the perpetrator field at an existing character, or create the character",
                },
                evaluator: Evaluator::Case(ground_truth::perpetrator_exists),
            },
            RegisteredRule {
                rule: Rule {
                    id: "gt-motive-clue-exists",
                    category: RuleCategory::GroundTruth,
                    severity: Severity::Error,
                    description: "The motive clue id resolves to a clue in this case",
                    suggested_fix: "Add the clue to the case or fix the motive clue id",
                },
                evaluator: Evaluator::Case(ground_truth::motive_clue_exists),
            },
            RegisteredRule {
                rule: Rule {
                    id: "gt-means-clue-exists",
                    category: RuleCategory::GroundTruth,
                    severity: Severity::Error,
                    description: "The means clue id resolves to a clue in this case",
                    suggested_fix: "Add the clue to the case or fix the means clue id",
                },
                evaluator: Evaluator::Case(ground_truth::means_clue_exists),
            },
            RegisteredRule {
                rule: Rule {
                    id: "gt-opportunity-clue-exists",
                    category: RuleCategory::GroundTruth,
                    severity: Severity::Error,
                    description: "The opportunity clue id resolves to a clue in this case",
                    suggested_fix: "Add the clue to the case or fix the opportunity clue id",
                },
                evaluator: Evaluator::Case(ground_truth::opportunity_clue_exists),
            },
            // --- Referential Integrity (case scope) ---
            RegisteredRule {
                rule: Rule {
                    id: "case-victim-set",
                    category: RuleCategory::ReferentialIntegrity,
                    severity: Severity::Error,
                    description: "The case names a victim",
                    suggested_fix: "Set the victim in the case's ground truth",
                },
                evaluator: Evaluator::Case(referential::victim_set),
            },
            RegisteredRule {
                rule: Rule {
                    id: "case-culprit-set",
                    category: RuleCategory::ReferentialIntegrity,
                    severity: Severity::Error,
                    description: "The case names a culprit",
                    suggested_fix: "Set the perpetrator in the case's ground truth",
                },
                evaluator: Evaluator::Case(referential::culprit_set),
            },
            RegisteredRule {
                rule: Rule {
                    id: "case-crime-scene-set",
                    category: RuleCategory::ReferentialIntegrity,
                    severity: Severity::Warning,
                    description: "The case names a crime scene",
                    suggested_fix: "Set the crime scene in the case's ground truth",
                },
                evaluator: Evaluator::Case(referential::crime_scene_set),
            },
            // --- Logical Consistency (deception integrity) ---
            RegisteredRule {
                rule: Rule {
                    id: "lie-missing-debunk",
                    category: RuleCategory::LogicalConsistency,
                    severity: Severity::Warning,
                    description: "Every recorded lie names a debunking clue",
                    suggested_fix: "Attach a debunking clue to the lying interview",
                },
                evaluator: Evaluator::Case(deception::lie_missing_debunk),
            },
            RegisteredRule {
                rule: Rule {
                    id: "lie-dangling-debunk",
                    category: RuleCategory::LogicalConsistency,
                    severity: Severity::Error,
                    description: "Every named debunking clue exists in the case's clue list",
                    suggested_fix: "Add the clue to the case or fix the interview's debunking clue id",
                },
                evaluator: Evaluator::Case(deception::lie_dangling_debunk),
            },
            // --- Playability ---
            RegisteredRule {
                rule: Rule {
                    id: "case-has-suspects",
                    category: RuleCategory::Playability,
                    severity: Severity::Warning,
                    description: "A case with a culprit has at least one suspect",
                    suggested_fix: "Add suspects to the case",
                },
                evaluator: Evaluator::Case(playability::case_has_suspects),
            },
            RegisteredRule {
                rule: Rule {
                    id: "culprit-among-suspects",
                    category: RuleCategory::Playability,
                    severity: Severity::Warning,
                    description: "The culprit appears in the suspect list",
                    suggested_fix: "Add the culprit to the suspect list so the player can accuse them",
                },
                evaluator: Evaluator::Case(playability::culprit_among_suspects),
            },
        ])
    }

    /// Keep only the rules whose ids appear in `ids`, preserving registry
    /// order. Ids that are not registered are silently skipped, which lets
    /// callers describe lightweight partial rule sets without caring what
    /// this build actually ships.
    pub fn retain(mut self, ids: &[&str]) -> Self {
        self.rules.retain(|r| ids.contains(&r.rule.id));
        self
    }

    pub fn get(&self, id: &str) -> Option<&RegisteredRule> {
        self.rules.iter().find(|r| r.rule.id == id)
    }

    pub fn rules(&self) -> impl Iterator<Item = &RegisteredRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
