//! Referential Integrity rules.
//!
//! World scope: every entity carries a display name. Case scope: the case
//! metadata names its required facts (victim, culprit, crime scene).

use casewright_domain::{CaseFile, Finding, NamedEntity, Rule, WorldData};

use crate::use_cases::validation::RuleEvaluationError;

/// One finding per empty-named entity, walking the world collections in a
/// fixed order: districts, locations, factions, characters, items.
pub fn entities_named(
    rule: &Rule,
    world: &WorldData,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    let mut findings = Vec::new();
    collect_unnamed(rule, world.districts.values(), &mut findings);
    collect_unnamed(rule, world.locations.values(), &mut findings);
    collect_unnamed(rule, world.factions.values(), &mut findings);
    collect_unnamed(rule, world.characters.values(), &mut findings);
    collect_unnamed(rule, world.items.values(), &mut findings);
    Ok(findings)
}

fn collect_unnamed<'a, E: NamedEntity + 'a>(
    rule: &Rule,
    entities: impl Iterator<Item = &'a E>,
    findings: &mut Vec<Finding>,
) {
    for entity in entities {
        if entity.display_name().trim().is_empty() {
            findings.push(
                Finding::for_rule(
                    rule,
                    format!("{} \"{}\" has no display name", entity.kind(), entity.entity_id()),
                )
                .with_offender(entity.entity_id()),
            );
        }
    }
}

pub fn victim_set(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    Ok(require_set(
        rule,
        case.ground_truth
            .victim_id
            .as_ref()
            .map(|id| id.as_str()),
        "The case has no victim",
    ))
}

pub fn culprit_set(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    Ok(require_set(
        rule,
        case.ground_truth
            .perpetrator_id
            .as_ref()
            .map(|id| id.as_str()),
        "The case has no culprit",
    ))
}

pub fn crime_scene_set(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    Ok(require_set(
        rule,
        case.ground_truth
            .crime_scene_id
            .as_ref()
            .map(|id| id.as_str()),
        "The case has no crime scene",
    ))
}

/// Zero-or-one finding: the field is unset or blank.
fn require_set(rule: &Rule, value: Option<&str>, message: &str) -> Vec<Finding> {
    match value {
        Some(v) if !v.trim().is_empty() => Vec::new(),
        _ => vec![Finding::for_rule(rule, message)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casewright_domain::{
        CaseId, Character, CharacterId, Location, LocationId, RuleCategory, Severity,
    };

    fn rule() -> Rule {
        Rule {
            id: "ref-test",
            category: RuleCategory::ReferentialIntegrity,
            severity: Severity::Warning,
            description: "",
            suggested_fix: "",
        }
    }

    #[test]
    fn empty_named_entities_each_yield_one_finding() {
        let mut world = WorldData::new();
        world.insert_character(Character::new(CharacterId::new("c1"), ""));
        world.insert_character(Character::new(CharacterId::new("c2"), "Named"));
        world.insert_location(Location::new(LocationId::new("l1"), "   "));

        let findings = entities_named(&rule(), &world).expect("evaluate");
        assert_eq!(findings.len(), 2);
        // locations walk before characters
        assert!(findings[0].message.starts_with("Location"));
        assert_eq!(findings[0].offending_ids, vec!["l1".to_string()]);
        assert!(findings[1].message.starts_with("Character"));
        assert_eq!(findings[1].offending_ids, vec!["c1".to_string()]);
    }

    #[test]
    fn fully_named_world_is_clean() {
        let mut world = WorldData::new();
        world.insert_character(Character::new(CharacterId::new("c1"), "Ada"));
        assert!(entities_named(&rule(), &world).expect("evaluate").is_empty());
    }

    #[test]
    fn missing_victim_and_culprit_each_yield_a_finding() {
        let case = CaseFile::new(CaseId::new("t"), "t");
        let world = WorldData::new();
        assert_eq!(victim_set(&rule(), &world, &case).expect("evaluate").len(), 1);
        assert_eq!(culprit_set(&rule(), &world, &case).expect("evaluate").len(), 1);
        assert_eq!(
            crime_scene_set(&rule(), &world, &case).expect("evaluate").len(),
            1
        );
    }

    #[test]
    fn set_fields_are_clean_even_if_dangling() {
        // Resolution is the ground-truth rules' job; this rule only checks
        // presence.
        let mut case = CaseFile::new(CaseId::new("t"), "t");
        case.ground_truth.victim_id = Some(CharacterId::new("ghost"));
        let world = WorldData::new();
        assert!(victim_set(&rule(), &world, &case).expect("evaluate").is_empty());
    }
}
