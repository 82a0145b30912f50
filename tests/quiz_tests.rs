use rand::rngs::StdRng;
use rand::SeedableRng;

use bankquiz::bank::{flatten, Project, Question, QuestionKind, TestBank};
use bankquiz::export::render_review;
use bankquiz::grade::grade;
use bankquiz::select::sample;
use bankquiz::session::{Session, Tally};


/// A full run: flatten a two-project bank, oversample it, grade a scripted
/// set of answers, and check the tally and the review document.
#[test]
fn can_run_a_full_session() {
    let bank = test_bank();

    let pool = flatten(&bank);
    assert_eq!(pool.len(), 5);

    // Asking for more questions than exist returns the whole pool.
    let mut rng = StdRng::seed_from_u64(99);
    let questions = sample(&pool, 20, &mut rng);
    assert_eq!(questions.len(), 5);

    let mut session = Session::new(questions);
    for index in 0..session.questions.len() {
        let question = session.questions[index].clone();
        // Answer the first project's questions correctly and miss the rest.
        let guess = if question.project_number == 1 {
            question.answer.clone()
        } else {
            String::from("not even close")
        };
        let is_correct = grade(&guess, &question.answer, question.kind);
        session.record(index, guess, is_correct);
    }

    assert_eq!(session.tally(), Tally { correct: 3, total: 5 });
    assert_eq!(session.tally().percentage(), 60);

    let review = render_review(&bank.title, &session);
    assert!(review.contains("Score: 3/5 (60%)"));
    assert!(review.contains("(incorrect)"));
    assert_eq!(review.matches("Correct answer:").count(), 2);
}


#[test]
fn sampled_questions_come_from_the_pool() {
    let bank = test_bank();
    let pool = flatten(&bank);
    let mut rng = StdRng::seed_from_u64(7);

    let chosen = sample(&pool, 3, &mut rng);
    assert_eq!(chosen.len(), 3);
    for question in chosen.iter() {
        assert!(pool.contains(question));
    }

    // Sampling never duplicates a question.
    for (i, a) in chosen.iter().enumerate() {
        for b in chosen[i + 1..].iter() {
            assert_ne!(a, b);
        }
    }

    // The pool is left intact.
    assert_eq!(pool.len(), 5);
    assert_eq!(pool, flatten(&bank));
}


#[test]
fn flattened_questions_carry_their_project() {
    let bank = test_bank();
    let pool = flatten(&bank);

    assert_eq!(pool[0].project_name, "Irrigation Controller");
    assert_eq!(pool[2].project_number, 1);
    assert_eq!(pool[3].project_name, "Smart Doorbell");
    assert_eq!(pool[4].project_number, 2);
}


fn test_bank() -> TestBank {
    TestBank {
        title: String::from("PTF50 Test Bank"),
        source: String::from("integration test"),
        total_projects: 2,
        total_questions: 5,
        projects: vec![
            Project {
                project_number: 1,
                project_name: String::from("Irrigation Controller"),
                authors: vec![String::from("M. Reyes")],
                questions: vec![
                    Question {
                        kind: QuestionKind::TrueFalse,
                        number: 1,
                        text: String::from("The valve defaults to closed."),
                        answer: String::from("True"),
                    },
                    Question {
                        kind: QuestionKind::TrueFalse,
                        number: 2,
                        text: String::from("The pump runs on mains power."),
                        answer: String::from("False"),
                    },
                    Question {
                        kind: QuestionKind::Identification,
                        number: 3,
                        text: String::from("Which sensor measures soil moisture?"),
                        answer: String::from("capacitive probe"),
                    },
                ],
            },
            Project {
                project_number: 2,
                project_name: String::from("Smart Doorbell"),
                authors: Vec::new(),
                questions: vec![
                    Question {
                        kind: QuestionKind::TrueFalse,
                        number: 1,
                        text: String::from("The camera records continuously."),
                        answer: String::from("False"),
                    },
                    Question {
                        kind: QuestionKind::Identification,
                        number: 2,
                        text: String::from("Name the wireless protocol used."),
                        answer: String::from("Wi-Fi"),
                    },
                ],
            },
        ],
    }
}
