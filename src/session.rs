/**
 * The state of one quiz run: the sampled question list, the answers recorded
 * so far, and the screen the user is looking at.
 */
use super::bank::QuizQuestion;


/// One graded response. `question_index` is the position of the question in
/// the session's question list, not its number in the bank.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAnswer {
    pub question_index: usize,
    pub answer: String,
    pub is_correct: bool,
}


/// The aggregate result of a session, handed to the results screen and the
/// review document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tally {
    pub correct: usize,
    pub total: usize,
}

impl Tally {
    /// Percentage of correct answers, rounded to the nearest whole number.
    /// An empty session scores zero.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
        }
    }
}


/// A session lives from quiz start to restart. It owns the question list and
/// the accumulated answers; the grading and selection functions never touch
/// either.
#[derive(Debug)]
pub struct Session {
    pub questions: Vec<QuizQuestion>,
    pub answers: Vec<UserAnswer>,
}

impl Session {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Session { questions, answers: Vec::new() }
    }

    /// Append a graded answer. `question_index` must index into
    /// `self.questions`.
    pub fn record(&mut self, question_index: usize, answer: String, is_correct: bool) {
        debug_assert!(question_index < self.questions.len());
        self.answers.push(UserAnswer { question_index, answer, is_correct });
    }

    pub fn tally(&self) -> Tally {
        Tally {
            correct: self.answers.iter().filter(|a| a.is_correct).count(),
            total: self.answers.len(),
        }
    }
}


/// The three screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Quiz,
    Results,
}

/// Everything that can move the application from one screen to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Begin,
    Finished,
    Restart,
}

impl Screen {
    /// The transition table. Events that do not apply to the current screen
    /// leave it unchanged.
    pub fn next(self, event: ScreenEvent) -> Screen {
        match (self, event) {
            (Screen::Welcome, ScreenEvent::Begin) => Screen::Quiz,
            (Screen::Quiz, ScreenEvent::Finished) => Screen::Results,
            (Screen::Results, ScreenEvent::Restart) => Screen::Welcome,
            (screen, _) => screen,
        }
    }
}
