/**
 * Library interface of the bankquiz application.
 *
 * The core logic lives in three small modules: `bank` flattens the nested
 * question bank into a quiz-ready pool, `select` draws a random subset of it,
 * and `grade` decides whether an answer is correct. `session` holds the state
 * of one quiz run, and the remaining modules are the command-line surface.
 */
#[macro_use]
pub mod iohelper;

pub mod bank;
pub mod cmd;
pub mod common;
pub mod export;
pub mod grade;
pub mod select;
pub mod session;
pub mod ui;
