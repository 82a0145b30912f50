/**
 * Definitions of data structures used by several modules, such as `QuizError` and the
 * various structs that hold command-line arguments.
 */
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use structopt::StructOpt;


pub type Result<T> = ::std::result::Result<T, QuizError>;


#[derive(Debug)]
pub enum QuizError {
    /// For when the question bank file cannot be read.
    BankNotFound(PathBuf),
    /// For JSON errors.
    Json(serde_json::Error),
    /// For a bank with no projects at all.
    EmptyBank,
    /// For a project with no questions. The payload is the project number.
    EmptyProject(u32),
    CannotWriteToFile(PathBuf),
    Io(io::Error),
    ReadlineInterrupted,
    EmptyQuiz,
}


impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuizError::BankNotFound(ref path) => {
                write!(f, "could not read question bank at '{}'", path.to_string_lossy())
            },
            QuizError::Json(ref err) => {
                write!(f, "could not parse JSON ({})", err)
            },
            QuizError::EmptyBank => {
                write!(f, "question bank has no projects")
            },
            QuizError::EmptyProject(number) => {
                write!(f, "project {} has no questions", number)
            },
            QuizError::CannotWriteToFile(ref path) => {
                write!(f, "cannot write to file '{}'", path.to_string_lossy())
            },
            QuizError::Io(ref err) => {
                write!(f, "IO error ({})", err)
            },
            QuizError::ReadlineInterrupted => {
                Ok(())
            },
            QuizError::EmptyQuiz => {
                write!(f, "no questions to ask")
            },
        }
    }
}


impl error::Error for QuizError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            QuizError::Json(ref err) => Some(err),
            QuizError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}


pub fn is_broken_pipe(e: &QuizError) -> bool {
    if let QuizError::Io(e) = e {
        if let io::ErrorKind::BrokenPipe = e.kind() {
            return true;
        }
    }
    false
}


/// Holds the command-line configuration for the application.
#[derive(StructOpt)]
#[structopt(name = "bankquiz", about = "Take randomized quizzes from a question bank.")]
pub enum Options {
    /// Take a quiz.
    #[structopt(name = "take")]
    Take(TakeOptions),
    /// Count the questions in a bank.
    #[structopt(name = "count")]
    Count(CountOptions),
}

#[derive(StructOpt)]
pub struct TakeOptions {
    /// Path to the question bank file.
    pub bank: PathBuf,
    /// Limit the total number of questions.
    #[structopt(short = "n", default_value = "20")]
    pub num_to_ask: usize,
    /// Ask the questions in the order they appear in the bank.
    #[structopt(long = "in-order")]
    pub in_order: bool,
    /// Write the review document without prompting.
    #[structopt(long = "save")]
    pub save: bool,
    /// Where to write the review document.
    #[structopt(long = "review-file")]
    pub review_file: Option<PathBuf>,
    /// Do not emit colorized output.
    #[structopt(long = "no-color")]
    pub no_color: bool,
}

#[derive(StructOpt)]
pub struct CountOptions {
    /// Path to the question bank file.
    pub bank: PathBuf,
    /// Show a per-project breakdown instead of a single total.
    #[structopt(long = "by-project")]
    pub by_project: bool,
}


impl TakeOptions {
    #[allow(dead_code)]
    pub fn new() -> Self {
        TakeOptions {
            bank: PathBuf::new(), num_to_ask: 20, in_order: false, save: false,
            review_file: None, no_color: true,
        }
    }
}
