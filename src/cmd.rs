/**
 * Drivers for the `take` and `count` subcommands.
 */
use std::io::Write;

use super::bank::{self, TestBank};
use super::common::{CountOptions, QuizError, Result, TakeOptions};
use super::export;
use super::grade;
use super::iohelper::prompt;
use super::select;
use super::session::{Screen, ScreenEvent, Session};
use super::ui::CmdUI;


/// The main function for the `take` subcommand. Runs the welcome -> quiz ->
/// results loop until the user declines another round.
pub fn main_take(options: TakeOptions) -> Result<()> {
    if options.no_color {
        colored::control::set_override(false);
    }

    let bank = bank::load_bank(&options.bank)?;
    let pool_size = bank::flatten(&bank).len();
    let mut ui = CmdUI::new();
    let mut session = Session::new(Vec::new());
    let mut screen = Screen::Welcome;

    loop {
        screen = match screen {
            Screen::Welcome => {
                ui.welcome(&bank, pool_size, options.num_to_ask)?;
                if !confirm("Begin the quiz? ") {
                    break;
                }
                screen.next(ScreenEvent::Begin)
            }
            Screen::Quiz => {
                ui.reset();
                session = run_quiz(&bank, &options, &mut ui)?;
                screen.next(ScreenEvent::Finished)
            }
            Screen::Results => {
                let tally = session.tally();
                ui.results(&tally)?;

                if tally.total > 0 && (options.save || confirm("\nSave a review document? ")) {
                    let path = options
                        .review_file
                        .clone()
                        .unwrap_or_else(export::default_review_path);
                    export::write_review(&path, &bank.title, &session)?;
                    ui.status(&format!("Review written to {}.", path.to_string_lossy()))?;
                }

                if !confirm("\nTake another quiz? ") {
                    break;
                }
                screen.next(ScreenEvent::Restart)
            }
        };
    }
    Ok(())
}


/// Ask every question of a fresh session and record the graded answers.
/// Ctrl+C or Ctrl+D ends the session early with the answers recorded so far.
fn run_quiz(bank: &TestBank, options: &TakeOptions, ui: &mut CmdUI) -> Result<Session> {
    let questions = if options.in_order {
        let mut pool = bank::flatten(bank);
        pool.truncate(options.num_to_ask);
        pool
    } else {
        select::draw_questions(bank, options.num_to_ask)
    };

    if questions.len() == 0 {
        return Err(QuizError::EmptyQuiz);
    }

    let mut session = Session::new(questions);
    for index in 0..session.questions.len() {
        let question = session.questions[index].clone();
        ui.question(&question)?;

        match ui.prompt() {
            Ok(Some(guess)) => {
                let is_correct = grade::grade(&guess, &question.answer, question.kind);
                if is_correct {
                    ui.correct()?;
                } else {
                    ui.incorrect(&question.answer)?;
                }
                session.record(index, guess, is_correct);
            }
            Ok(None) | Err(QuizError::ReadlineInterrupted) => {
                break;
            }
            Err(e) => {
                return Err(e);
            }
        }
    }
    Ok(session)
}


/// The main function for the `count` subcommand.
pub fn main_count(options: CountOptions) -> Result<()> {
    let bank = bank::load_bank(&options.bank)?;
    if options.by_project {
        for project in bank.projects.iter() {
            my_println!(
                "{:>4}  Project {}: {}",
                project.questions.len(),
                project.project_number,
                project.project_name,
            )?;
        }
        my_println!("{:>4}  total", bank::flatten(&bank).len())?;
    } else {
        my_println!("{}", bank::flatten(&bank).len())?;
    }
    Ok(())
}


/// Prompt the user with a yes-no question and return `true` if they enter yes.
pub fn confirm(message: &str) -> bool {
    match prompt(message) {
        Ok(Some(response)) => {
            response.trim_start().to_lowercase().starts_with("y")
        },
        _ => false,
    }
}
