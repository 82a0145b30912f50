/**
 * The question bank: data structures, JSON loading, and flattening into a
 * quiz-ready pool.
 *
 * A bank groups its questions by the project they were written for. The quiz
 * itself does not care about the grouping, so `flatten` copies every question
 * into a flat list, stamping each one with the name and number of its project.
 */
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::common::{QuizError, Result};


/// An enumeration for the `kind` field of `Question` objects.
///
/// The bank format only defines these two kinds; any other string in the
/// `type` field is a parse error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    #[serde(rename = "True or False")]
    TrueFalse,
    Identification,
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            QuestionKind::TrueFalse => write!(f, "True or False"),
            QuestionKind::Identification => write!(f, "Identification"),
        }
    }
}


/// Represents a question as it is stored in the bank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// The position of the question within its project.
    pub number: u32,
    #[serde(rename = "question")]
    pub text: String,
    /// The authoritative correct-answer text.
    pub answer: String,
}


/// A group of questions written for one project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_number: u32,
    pub project_name: String,
    /// Informational only; never consulted by the quiz.
    #[serde(default)]
    pub authors: Vec<String>,
    pub questions: Vec<Question>,
}


/// The root of the question bank file.
///
/// `total_projects` and `total_questions` are the counts the bank declares
/// about itself. They are carried for display but never validated against the
/// actual array lengths.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestBank {
    pub title: String,
    pub source: String,
    pub total_projects: u32,
    pub total_questions: u32,
    pub projects: Vec<Project>,
}


/// A question ready to be asked: a copy of a bank question plus the name and
/// number of the project it came from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub kind: QuestionKind,
    pub number: u32,
    pub text: String,
    pub answer: String,
    pub project_number: u32,
    pub project_name: String,
}


/// Copy every question in the bank into a flat list, in stored traversal
/// order: projects in bank order, then each project's questions in project
/// order. A bank with no projects or no questions yields an empty list.
pub fn flatten(bank: &TestBank) -> Vec<QuizQuestion> {
    let mut pool = Vec::new();
    for project in bank.projects.iter() {
        for question in project.questions.iter() {
            pool.push(QuizQuestion {
                kind: question.kind,
                number: question.number,
                text: question.text.clone(),
                answer: question.answer.clone(),
                project_number: project.project_number,
                project_name: project.project_name.clone(),
            });
        }
    }
    pool
}


/// Load a `TestBank` from a JSON file and check that it has something to ask.
pub fn load_bank(path: &Path) -> Result<TestBank> {
    let data = fs::read_to_string(path)
        .or(Err(QuizError::BankNotFound(path.to_path_buf())))?;
    let bank: TestBank = serde_json::from_str(&data).map_err(QuizError::Json)?;
    validate_bank(&bank)?;
    Ok(bank)
}


/// Reject banks that would produce an empty pool or that contain a project
/// with nothing in it. The declared counts are deliberately not checked.
fn validate_bank(bank: &TestBank) -> Result<()> {
    if bank.projects.len() == 0 {
        return Err(QuizError::EmptyBank);
    }
    for project in bank.projects.iter() {
        if project.questions.len() == 0 {
            return Err(QuizError::EmptyProject(project.project_number));
        }
    }
    Ok(())
}
