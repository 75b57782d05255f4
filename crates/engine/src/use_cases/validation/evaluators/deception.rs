//! Deception integrity rules.
//!
//! Every recorded lie must be debunkable: the interview names a clue, and
//! that clue exists in the case. The two failure modes are separate rules
//! with separate severities, and exactly one of them can fire per lying
//! interview: a lie either names no clue (missing, Warning) or names one
//! that does not resolve (dangling, Error). Truthful interviews never
//! produce either finding, whatever their `debunking_clue` holds.
//!
//! Interviews are walked across suspects, top-level witnesses, and
//! case-location witnesses alike.

use casewright_domain::{CaseFile, Finding, Rule, WorldData};

use crate::use_cases::validation::RuleEvaluationError;

/// Branch 1: a lie with no debunking clue at all.
pub fn lie_missing_debunk(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    let findings = case
        .all_interviews()
        .filter(|(_, interview)| interview.is_lie && interview.debunking_clue.is_none())
        .map(|(character_id, interview)| {
            Finding::for_rule(
                rule,
                format!(
                    "Lie by \"{}\" (\"{}\") has no debunking clue",
                    character_id,
                    truncate(&interview.answer)
                ),
            )
            .with_offender(character_id.as_str())
        })
        .collect();
    Ok(findings)
}

/// Branch 2: a lie whose debunking clue is not in the case's clue list.
pub fn lie_dangling_debunk(
    rule: &Rule,
    _world: &WorldData,
    case: &CaseFile,
) -> Result<Vec<Finding>, RuleEvaluationError> {
    let mut findings = Vec::new();
    for (character_id, interview) in case.all_interviews() {
        if !interview.is_lie {
            continue;
        }
        let Some(clue_id) = &interview.debunking_clue else {
            continue;
        };
        if !case.has_clue(clue_id) {
            findings.push(
                Finding::for_rule(
                    rule,
                    format!(
                        "Lie by \"{}\" references a non-existent debunking clue \"{}\"",
                        character_id, clue_id
                    ),
                )
                .with_offender(character_id.as_str())
                .with_offender(clue_id.as_str()),
            );
        }
    }
    Ok(findings)
}

/// Keep interview excerpts in messages readable.
fn truncate(answer: &str) -> String {
    const MAX: usize = 40;
    if answer.chars().count() <= MAX {
        answer.to_string()
    } else {
        let head: String = answer.chars().take(MAX).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casewright_domain::{
        CaseId, CharacterId, Clue, ClueId, Interview, RuleCategory, Severity, Suspect, Witness,
        CaseLocation, LocationId,
    };

    fn warning_rule() -> Rule {
        Rule {
            id: "lie-missing-debunk",
            category: RuleCategory::LogicalConsistency,
            severity: Severity::Warning,
            description: "",
            suggested_fix: "",
        }
    }

    fn error_rule() -> Rule {
        Rule {
            id: "lie-dangling-debunk",
            category: RuleCategory::LogicalConsistency,
            severity: Severity::Error,
            description: "",
            suggested_fix: "",
        }
    }

    fn case_with_clue() -> CaseFile {
        let mut case = CaseFile::new(CaseId::new("t"), "t");
        case.clues.push(Clue::new(ClueId::new("clue1"), "Boots"));
        case
    }

    #[test]
    fn lie_without_clue_is_one_warning_naming_the_character() {
        let mut case = case_with_clue();
        case.suspects.push(
            Suspect::new(CharacterId::new("s1"))
                .with_interview(Interview::lie("Where?", "At home.")),
        );

        let missing =
            lie_missing_debunk(&warning_rule(), &WorldData::new(), &case).expect("evaluate");
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].severity, Severity::Warning);
        assert_eq!(missing[0].offending_ids, vec!["s1".to_string()]);

        // branch 2 does not also fire
        let dangling =
            lie_dangling_debunk(&error_rule(), &WorldData::new(), &case).expect("evaluate");
        assert!(dangling.is_empty());
    }

    #[test]
    fn lie_with_unknown_clue_is_one_error_and_no_warning() {
        let mut case = case_with_clue();
        case.suspects.push(
            Suspect::new(CharacterId::new("s1")).with_interview(
                Interview::lie("Where?", "At home.").debunked_by(ClueId::new("clue9")),
            ),
        );

        let dangling =
            lie_dangling_debunk(&error_rule(), &WorldData::new(), &case).expect("evaluate");
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].severity, Severity::Error);
        assert_eq!(
            dangling[0].offending_ids,
            vec!["s1".to_string(), "clue9".to_string()]
        );

        let missing =
            lie_missing_debunk(&warning_rule(), &WorldData::new(), &case).expect("evaluate");
        assert!(missing.is_empty());
    }

    #[test]
    fn lie_with_resolvable_clue_is_clean() {
        let mut case = case_with_clue();
        case.suspects.push(
            Suspect::new(CharacterId::new("s1")).with_interview(
                Interview::lie("Where?", "At home.").debunked_by(ClueId::new("clue1")),
            ),
        );
        assert!(lie_missing_debunk(&warning_rule(), &WorldData::new(), &case)
            .expect("evaluate")
            .is_empty());
        assert!(lie_dangling_debunk(&error_rule(), &WorldData::new(), &case)
            .expect("evaluate")
            .is_empty());
    }

    #[test]
    fn truthful_interviews_never_fire_either_branch() {
        let mut case = case_with_clue();
        // truthful with a stale clue reference attached
        case.witnesses.push(
            Witness::new(CharacterId::new("w1")).with_interview(
                Interview::truthful("What?", "Fog.").debunked_by(ClueId::new("clue9")),
            ),
        );
        // truthful with nothing
        case.witnesses.push(
            Witness::new(CharacterId::new("w2"))
                .with_interview(Interview::truthful("What?", "Nothing.")),
        );
        assert!(lie_missing_debunk(&warning_rule(), &WorldData::new(), &case)
            .expect("evaluate")
            .is_empty());
        assert!(lie_dangling_debunk(&error_rule(), &WorldData::new(), &case)
            .expect("evaluate")
            .is_empty());
    }

    #[test]
    fn location_witness_lies_are_walked_too() {
        let mut case = case_with_clue();
        case.locations.push(
            CaseLocation::new(LocationId::new("docks")).with_witness(
                Witness::new(CharacterId::new("w3"))
                    .with_interview(Interview::lie("See anything?", "No one was there.")),
            ),
        );
        let missing =
            lie_missing_debunk(&warning_rule(), &WorldData::new(), &case).expect("evaluate");
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].offending_ids, vec!["w3".to_string()]);
    }
}
