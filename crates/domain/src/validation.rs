//! Validation value objects - rules and findings
//!
//! `Rule` is immutable configuration describing one check; `Finding` is one
//! result of running a check. Findings are transient output, recomputed on
//! demand, never persisted with the data they describe.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CaseId;

/// How seriously a finding should be treated downstream.
///
/// The engine attaches no policy to this; a surface layer may block
/// publishing on `Error` and merely advise on `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warning" => Ok(Self::Warning),
            "Error" => Ok(Self::Error),
            _ => Err(DomainError::parse(format!("Unknown severity: {}", s))),
        }
    }
}

/// The family a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleCategory {
    GroundTruth,
    ReferentialIntegrity,
    LogicalConsistency,
    Playability,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroundTruth => write!(f, "Ground Truth"),
            Self::ReferentialIntegrity => write!(f, "Referential Integrity"),
            Self::LogicalConsistency => write!(f, "Logical Consistency"),
            Self::Playability => write!(f, "Playability"),
        }
    }
}

impl FromStr for RuleCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ground Truth" => Ok(Self::GroundTruth),
            "Referential Integrity" => Ok(Self::ReferentialIntegrity),
            "Logical Consistency" => Ok(Self::LogicalConsistency),
            "Playability" => Ok(Self::Playability),
            _ => Err(DomainError::parse(format!("Unknown rule category: {}", s))),
        }
    }
}

/// One validation rule definition, loaded once per process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub id: &'static str,
    pub category: RuleCategory,
    pub severity: Severity,
    pub description: &'static str,
    pub suggested_fix: &'static str,
}

/// One validation result
///
/// `offending_ids` carries every identifier involved so a consumer can
/// implement "jump to issue"; `case_id` is set for case-scoped findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub rule_id: String,
    pub category: RuleCategory,
    pub severity: Severity,
    pub message: String,
    pub offending_ids: Vec<String>,
    pub case_id: Option<CaseId>,
}

impl Finding {
    /// Build a finding for `rule`, inheriting its category and severity.
    pub fn for_rule(rule: &Rule, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule.id.to_string(),
            category: rule.category,
            severity: rule.severity,
            message: message.into(),
            offending_ids: Vec::new(),
            case_id: None,
        }
    }

    pub fn with_offender(mut self, id: impl Into<String>) -> Self {
        self.offending_ids.push(id.into());
        self
    }

    pub fn with_offenders<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.offending_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Tag this finding as belonging to `case_id` (set by the engine when
    /// running case-scoped rules).
    pub fn in_case(mut self, case_id: CaseId) -> Self {
        self.case_id = Some(case_id);
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.rule_id, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_RULE: Rule = Rule {
        id: "test-rule",
        category: RuleCategory::ReferentialIntegrity,
        severity: Severity::Warning,
        description: "a test rule",
        suggested_fix: "fix it",
    };

    #[test]
    fn severity_orders_warning_below_error() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_round_trips_through_display() {
        for sev in [Severity::Warning, Severity::Error] {
            let parsed: Severity = sev.to_string().parse().expect("parse");
            assert_eq!(parsed, sev);
        }
    }

    #[test]
    fn category_parse_rejects_unknown() {
        let err = "Style".parse::<RuleCategory>().expect_err("should reject");
        assert!(err.to_string().contains("Style"));
    }

    #[test]
    fn finding_inherits_rule_metadata() {
        let finding = Finding::for_rule(&TEST_RULE, "something is off").with_offender("c1");
        assert_eq!(finding.rule_id, "test-rule");
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.category, RuleCategory::ReferentialIntegrity);
        assert_eq!(finding.offending_ids, vec!["c1".to_string()]);
        assert!(finding.case_id.is_none());
    }

    #[test]
    fn finding_display_includes_severity_and_rule() {
        let finding = Finding::for_rule(&TEST_RULE, "something is off");
        assert_eq!(
            finding.to_string(),
            "[Warning] test-rule: something is off"
        );
    }
}
