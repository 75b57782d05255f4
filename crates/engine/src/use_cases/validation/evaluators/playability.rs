//! Playability rules - the case can actually be played to its solution.
//!
//! Advisory checks, all Warning severity. They only engage once a culprit
//! has been authored; a case without a culprit is already flagged by the
//! required-field rules and piling on here would be noise.

use casewright_domain::{CaseFile, Finding, Rule, WorldData};

use crate::use_cases::validation::RuleEvaluationError;

/// A case with a culprit but no suspects gives the player no one to
/// investigate.
pub fn case_has_suspects(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    if case.ground_truth.perpetrator_id.is_some() && case.suspects.is_empty() {
        return Ok(vec![Finding::for_rule(
            rule,
            "The case has a culprit but no suspects to investigate",
        )]);
    }
    Ok(Vec::new())
}

/// The culprit should be accusable: present in the suspect list. Only
/// checked when the list is non-empty, so an empty list is reported once
/// (by `case_has_suspects`) rather than twice.
pub fn culprit_among_suspects(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    let Some(culprit) = &case.ground_truth.perpetrator_id else {
        return Ok(Vec::new());
    };
    if case.suspects.is_empty() {
        return Ok(Vec::new());
    }
    if case.suspects.iter().any(|s| &s.character_id == culprit) {
        return Ok(Vec::new());
    }
    Ok(vec![Finding::for_rule(
        rule,
        format!("Culprit \"{}\" is not in the suspect list", culprit),
    )
    .with_offender(culprit.as_str())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use casewright_domain::{CaseId, CharacterId, RuleCategory, Severity, Suspect};

    fn rule() -> Rule {
        Rule {
            id: "play-test",
            category: RuleCategory::Playability,
            severity: Severity::Warning,
            description: "",
            suggested_fix: "",
        }
    }

    #[test]
    fn culprit_with_no_suspects_fires_has_suspects_only() {
        let mut case = CaseFile::new(CaseId::new("t"), "t");
        case.ground_truth.perpetrator_id = Some(CharacterId::new("c2"));
        let world = WorldData::new();
        assert_eq!(
            case_has_suspects(&rule(), &world, &case).expect("evaluate").len(),
            1
        );
        assert!(culprit_among_suspects(&rule(), &world, &case)
            .expect("evaluate")
            .is_empty());
    }

    #[test]
    fn culprit_missing_from_nonempty_suspect_list_is_flagged() {
        let mut case = CaseFile::new(CaseId::new("t"), "t");
        case.ground_truth.perpetrator_id = Some(CharacterId::new("c2"));
        case.suspects.push(Suspect::new(CharacterId::new("c3")));
        let world = WorldData::new();
        let findings = culprit_among_suspects(&rule(), &world, &case).expect("evaluate");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].offending_ids, vec!["c2".to_string()]);
        assert!(case_has_suspects(&rule(), &world, &case)
            .expect("evaluate")
            .is_empty());
    }

    #[test]
    fn listed_culprit_is_clean() {
        let mut case = CaseFile::new(CaseId::new("t"), "t");
        case.ground_truth.perpetrator_id = Some(CharacterId::new("c2"));
        case.suspects.push(Suspect::new(CharacterId::new("c2")));
        let world = WorldData::new();
        assert!(case_has_suspects(&rule(), &world, &case)
            .expect("evaluate")
            .is_empty());
        assert!(culprit_among_suspects(&rule(), &world, &case)
            .expect("evaluate")
            .is_empty());
    }

    #[test]
    fn no_culprit_means_no_playability_findings() {
        let case = CaseFile::new(CaseId::new("t"), "t");
        let world = WorldData::new();
        assert!(case_has_suspects(&rule(), &world, &case)
            .expect("evaluate")
            .is_empty());
        assert!(culprit_among_suspects(&rule(), &world, &case)
            .expect("evaluate")
            .is_empty());
    }
}
