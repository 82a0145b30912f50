/**
 * The command-line user interface for taking quizzes.
 */
use std::io::Write;

use colored::*;

use super::bank::{QuizQuestion, TestBank};
use super::common::{QuizError, Result};
use super::iohelper::{prettyprint, prettyprint_colored, prompt};
use super::session::Tally;


pub struct CmdUI {
    number: usize,
}


impl CmdUI {
    pub fn new() -> Self {
        Self { number: 0 }
    }

    /// Reset the question counter for a fresh session.
    pub fn reset(&mut self) {
        self.number = 0;
    }

    pub fn welcome(&mut self, bank: &TestBank, pool_size: usize, num_to_ask: usize) -> Result<()> {
        my_print!("\n")?;
        prettyprint_colored(&bank.title, "  ", Some(Color::BrightBlue), None)?;
        prettyprint_colored(&format!("Source: {}", bank.source), "  ", Some(Color::White), None)?;
        let summary = format!(
            "{} questions will be drawn from a bank of {}.",
            num_to_ask.min(pool_size),
            pool_size,
        );
        prettyprint(&summary, "  ")?;
        my_print!("\n")
    }

    pub fn question(&mut self, question: &QuizQuestion) -> Result<()> {
        self.number += 1;
        my_print!("\n")?;
        let prefix = format!("  ({}) ", self.number);
        prettyprint_colored(&question.text, &prefix, None, Some(Color::Cyan))?;
        let context = format!(
            "[{} | Project {}: {}]",
            question.kind, question.project_number, question.project_name,
        );
        prettyprint_colored(&context, &" ".repeat(prefix.len()), Some(Color::White), None)?;
        my_print!("\n")
    }

    pub fn prompt(&mut self) -> Result<Option<String>> {
        prompt("> ")
    }

    pub fn correct(&mut self) -> Result<()> {
        prettyprint(&"Correct!".green(), "")
    }

    pub fn incorrect(&mut self, correction: &str) -> Result<()> {
        let message = format!(
            "{} The correct answer was {}.",
            "Incorrect.".red(),
            correction.green(),
        );
        prettyprint(&message, "")
    }

    pub fn results(&mut self, tally: &Tally) -> Result<()> {
        if tally.total == 0 {
            return my_println!("\nNo questions were answered.");
        }

        let score_as_str = format!("{}%", tally.percentage());
        my_print!("\n\n")?;
        my_print!("{}", "Score: ".white())?;
        my_print!("{}", score_as_str.cyan())?;
        my_print!("{}", " out of ".white())?;
        my_print!("{}", format!("{}", tally.total).cyan())?;
        if tally.total == 1 {
            my_println!("{}", " question".white())?;
        } else {
            my_println!("{}", " questions".white())?;
        }
        my_print!("  {}", format!("{}", tally.correct).bright_green())?;
        my_print!("{}\n", " correct".white())?;
        my_print!("  {}", format!("{}", tally.total - tally.correct).red())?;
        my_print!("{}\n", " incorrect".white())
    }

    pub fn status(&mut self, text: &str) -> Result<()> {
        my_println!("{}", text)
    }
}
