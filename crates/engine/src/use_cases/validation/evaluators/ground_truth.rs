//! Ground Truth rules - the case's solution facts resolve to real records.
//!
//! Each rule checks exactly one ground-truth field. An unset (`None`) field
//! yields no finding here: absence is a missing fact (the case-scope
//! required-field rules), not a dangling reference.

use casewright_domain::{CaseFile, CharacterId, ClueId, Finding, Rule, WorldData};

use crate::use_cases::validation::RuleEvaluationError;

pub fn victim_exists(
    rule: &Rule,
    world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    Ok(dangling_character(
        rule,
        world,
        case.ground_truth.victim_id.as_ref(),
        "victim",
    ))
}

pub fn perpetrator_exists(
    rule: &Rule,
    world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    Ok(dangling_character(
        rule,
        world,
        case.ground_truth.perpetrator_id.as_ref(),
        "perpetrator",
    ))
}

pub fn motive_clue_exists(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    Ok(dangling_clue(
        rule,
        case,
        case.ground_truth.motive_clue_id.as_ref(),
        "motive",
    ))
}

pub fn means_clue_exists(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    Ok(dangling_clue(
        rule,
        case,
        case.ground_truth.means_clue_id.as_ref(),
        "means",
    ))
}

pub fn opportunity_clue_exists(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    Ok(dangling_clue(
        rule,
        case,
        case.ground_truth.opportunity_clue_id.as_ref(),
        "opportunity",
    ))
}

/// Zero-or-one finding: set character id that is absent from the world.
fn dangling_character(
    rule: &Rule,
    world: &WorldData,
    id: Option<&CharacterId>,
    field: &str,
) -> Vec<Finding> {
    match id {
        Some(id) if !world.has_character(id) => vec![Finding::for_rule(
            rule,
            format!("Ground truth {} \"{}\" does not exist", field, id),
        )
        .with_offender(id.as_str())],
        _ => Vec::new(),
    }
}

/// Zero-or-one finding: set clue id that is absent from the case's clue list.
fn dangling_clue(rule: &Rule, case: &CaseFile, id: Option<&ClueId>, field: &str) -> Vec<Finding> {
    match id {
        Some(id) if !case.has_clue(id) => vec![Finding::for_rule(
            rule,
            format!(
                "Ground truth {} clue \"{}\" is not in the case's clue list",
                field, id
            ),
        )
        .with_offender(id.as_str())],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casewright_domain::{CaseId, Character, Clue};

    fn rule() -> Rule {
        Rule {
            id: "gt-test",
            category: casewright_domain::RuleCategory::GroundTruth,
            severity: casewright_domain::Severity::Error,
            description: "",
            suggested_fix: "",
        }
    }

    fn world() -> WorldData {
        let mut world = WorldData::new();
        world.insert_character(Character::new(CharacterId::new("c1"), "Ada Marlowe"));
        world
    }

    fn case() -> CaseFile {
        let mut case = CaseFile::new(CaseId::new("t"), "t");
        case.clues.push(Clue::new(ClueId::new("clue1"), "Boots"));
        case
    }

    #[test]
    fn unset_victim_yields_no_finding() {
        let findings = victim_exists(&rule(), &world(), &case()).expect("evaluate");
        assert!(findings.is_empty());
    }

    #[test]
    fn resolvable_victim_yields_no_finding() {
        let mut case = case();
        case.ground_truth.victim_id = Some(CharacterId::new("c1"));
        let findings = victim_exists(&rule(), &world(), &case).expect("evaluate");
        assert!(findings.is_empty());
    }

    #[test]
    fn dangling_perpetrator_yields_one_finding_naming_the_id() {
        let mut case = case();
        case.ground_truth.perpetrator_id = Some(CharacterId::new("c2"));
        let findings = perpetrator_exists(&rule(), &world(), &case).expect("evaluate");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("\"c2\""));
        assert_eq!(findings[0].offending_ids, vec!["c2".to_string()]);
    }

    #[test]
    fn fixing_the_reference_removes_the_finding() {
        let mut case = case();
        case.ground_truth.perpetrator_id = Some(CharacterId::new("c2"));
        assert_eq!(
            perpetrator_exists(&rule(), &world(), &case)
                .expect("evaluate")
                .len(),
            1
        );
        case.ground_truth.perpetrator_id = Some(CharacterId::new("c1"));
        assert!(perpetrator_exists(&rule(), &world(), &case)
            .expect("evaluate")
            .is_empty());
    }

    #[test]
    fn motive_clue_resolves_against_the_case_clue_list() {
        let mut case = case();
        case.ground_truth.motive_clue_id = Some(ClueId::new("clue1"));
        assert!(motive_clue_exists(&rule(), &world(), &case)
            .expect("evaluate")
            .is_empty());

        case.ground_truth.motive_clue_id = Some(ClueId::new("clue9"));
        let findings = motive_clue_exists(&rule(), &world(), &case).expect("evaluate");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].offending_ids, vec!["clue9".to_string()]);
    }

    #[test]
    fn unset_means_and_opportunity_clues_are_silent() {
        let case = case();
        assert!(means_clue_exists(&rule(), &world(), &case)
            .expect("evaluate")
            .is_empty());
        assert!(opportunity_clue_exists(&rule(), &world(), &case)
            .expect("evaluate")
            .is_empty());
    }
}
