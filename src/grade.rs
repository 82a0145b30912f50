/**
 * Grading of user answers against the canonical answer stored in the bank.
 *
 * Both sides of the comparison are normalized (lowercased, then trimmed)
 * before any rule applies. True-or-false questions accept the common
 * shorthand forms of "true" and "false"; identification questions are graded
 * leniently, so an answer that is contained in the canonical text (or
 * contains it) counts as correct.
 */
use super::bank::QuestionKind;

const TRUE_VARIANTS: [&str; 4] = ["true", "t", "yes", "y"];
const FALSE_VARIANTS: [&str; 4] = ["false", "f", "no", "n"];


/// Lowercase `answer` and strip leading and trailing whitespace. Internal
/// whitespace and punctuation are left alone.
pub fn normalize(answer: &str) -> String {
    answer.to_lowercase().trim().to_string()
}


/// Return `true` if `user_answer` is an acceptable answer to a question of
/// the given kind whose canonical answer is `canonical_answer`. Every input
/// produces a verdict; there are no error cases.
pub fn grade(user_answer: &str, canonical_answer: &str, kind: QuestionKind) -> bool {
    let normalized = normalize(user_answer);
    let normalized_canonical = normalize(canonical_answer);

    match kind {
        QuestionKind::TrueFalse => {
            check_true_false(&normalized, &normalized_canonical)
        },
        QuestionKind::Identification => {
            check_identification(&normalized, &normalized_canonical)
        },
    }
}


/// The canonical answer resolves to true-intent if it contains "true"
/// anywhere, so answer text like "True (the poll rate is configurable)"
/// still grades correctly. An answer in neither variant set is wrong.
fn check_true_false(normalized: &str, normalized_canonical: &str) -> bool {
    let user_true = TRUE_VARIANTS.contains(&normalized);
    let user_false = FALSE_VARIANTS.contains(&normalized);
    let canonical_true = normalized_canonical.contains("true");

    (user_true && canonical_true) || (user_false && !canonical_true)
}


/// Exact match, or either string contains the other. An empty user answer
/// would trivially satisfy the containment check, so callers must not submit
/// blank answers (the command-line prompt re-reads until the input is
/// non-blank).
fn check_identification(normalized: &str, normalized_canonical: &str) -> bool {
    normalized == normalized_canonical
        || normalized_canonical.contains(normalized)
        || normalized.contains(normalized_canonical)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_true_false_variants() {
        assert!(grade("true", "True", QuestionKind::TrueFalse));
        assert!(grade("T", "True", QuestionKind::TrueFalse));
        assert!(grade("yes", "True", QuestionKind::TrueFalse));
        assert!(grade("Y", "True", QuestionKind::TrueFalse));

        assert!(grade("false", "False", QuestionKind::TrueFalse));
        assert!(grade("F", "False", QuestionKind::TrueFalse));
        assert!(grade("no", "False", QuestionKind::TrueFalse));
        assert!(grade("N", "False", QuestionKind::TrueFalse));
    }

    #[test]
    fn rejects_wrong_true_false_answers() {
        assert!(!grade("false", "True", QuestionKind::TrueFalse));
        assert!(!grade("yes", "False", QuestionKind::TrueFalse));
    }

    #[test]
    fn unrecognized_true_false_answer_is_wrong() {
        assert!(!grade("maybe", "True", QuestionKind::TrueFalse));
        assert!(!grade("maybe", "False", QuestionKind::TrueFalse));
    }

    #[test]
    fn canonical_true_intent_is_a_substring_test() {
        assert!(grade("true", "True (explanation)", QuestionKind::TrueFalse));
        assert!(grade("no", "False, see the report", QuestionKind::TrueFalse));
    }

    #[test]
    fn identification_matches_exactly() {
        assert!(grade(" PARIS ", "paris", QuestionKind::Identification));
        assert!(grade("Arduino Uno", "arduino uno", QuestionKind::Identification));
    }

    #[test]
    fn identification_matches_by_containment() {
        // User answer inside the canonical answer.
        assert!(grade("Paris", "Paris, France", QuestionKind::Identification));
        // Canonical answer inside the user answer.
        assert!(grade("the city of Paris", "Paris", QuestionKind::Identification));
    }

    #[test]
    fn identification_rejects_near_misses() {
        assert!(!grade("pariss", "Paris", QuestionKind::Identification));
        assert!(!grade("London", "Paris", QuestionKind::Identification));
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  True\t"), "true");
        assert_eq!(normalize("Arduino  Uno"), "arduino  uno");
    }
}
