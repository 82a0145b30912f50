/**
 * Random selection of quiz questions from the flattened pool.
 */
use rand::seq::SliceRandom;
use rand::thread_rng;
use rand::Rng;

use super::bank::{self, QuizQuestion, TestBank};


/// Draw up to `count` elements from `pool`, uniformly at random and without
/// replacement. The pool itself is never modified; the draw shuffles a copy
/// (`SliceRandom::shuffle` is a Fisher-Yates shuffle, so every permutation is
/// equally likely) and keeps its first `count` elements.
///
/// Asking for more elements than the pool holds returns the whole pool in a
/// random order. Asking for zero returns an empty list.
///
/// The random source is a parameter so that tests can pass a seeded generator.
pub fn sample<T: Clone, R: Rng>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}


/// Flatten the bank and draw a random session's worth of questions from it.
pub fn draw_questions(bank: &TestBank, count: usize) -> Vec<QuizQuestion> {
    let pool = bank::flatten(bank);
    let mut rng = thread_rng();
    sample(&pool, count, &mut rng)
}
