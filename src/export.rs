/**
 * Rendering of the plain-text review document.
 *
 * After a session the user can save a reviewer: the score followed by every
 * question asked, the answer they gave, and the canonical answer for the ones
 * they missed.
 */
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::common::{QuizError, Result};
use super::session::Session;

const WIDTH: usize = 79;


/// Default path for the review document, in the current directory.
pub fn default_review_path() -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    PathBuf::from(format!("quiz-review-{}.txt", timestamp))
}


/// Render the review document for a finished session.
pub fn render_review(title: &str, session: &Session) -> String {
    let tally = session.tally();
    let mut out = String::new();

    out.push_str(&format!("{}: quiz review\n", title));
    out.push_str(&format!("Generated: {}\n\n", Local::now().format("%Y-%m-%d %H:%M")));
    out.push_str(&format!(
        "Score: {}/{} ({}%)\n\n",
        tally.correct, tally.total, tally.percentage(),
    ));

    for (i, answer) in session.answers.iter().enumerate() {
        let question = &session.questions[answer.question_index];

        out.push_str(&format!(
            "Q{}. [Project {}: {}]\n",
            i + 1, question.project_number, question.project_name,
        ));
        out.push_str(&format!("Type: {}\n", question.kind));
        out.push_str(&textwrap::fill(&format!("Question: {}", question.text), WIDTH));
        out.push('\n');

        let verdict = if answer.is_correct { "correct" } else { "incorrect" };
        out.push_str(&textwrap::fill(
            &format!("Your answer: {} ({})", answer.answer, verdict),
            WIDTH,
        ));
        out.push('\n');

        if !answer.is_correct {
            out.push_str(&textwrap::fill(
                &format!("Correct answer: {}", question.answer),
                WIDTH,
            ));
            out.push('\n');
        }

        out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
    }

    out
}


/// Write the review document to `path`.
pub fn write_review(path: &Path, title: &str, session: &Session) -> Result<()> {
    let rendered = render_review(title, session);
    fs::write(path, rendered)
        .or(Err(QuizError::CannotWriteToFile(path.to_path_buf())))
}
