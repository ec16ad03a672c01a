//! Numbered-heart puzzle
//!
//! Controls 1-9 must be pressed in sequence. Each correct press reveals its
//! control for good and one more secret word; a wrong press only shakes the
//! control. After the last word the completion message follows a short
//! delay, exactly once.

use super::timeline::Timeline;
use crate::consts::PUZZLE_COMPLETE_DELAY_MS;
use crate::content::{PUZZLE_COMPLETE_MESSAGE, SECRET_WORDS};

/// Required press order
pub const PUZZLE_SEQUENCE: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Where the puzzle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzlePhase {
    Idle,
    /// `n` controls revealed so far
    Progressing(usize),
    Complete,
}

/// Result of pressing one control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// Correct control: it is now revealed and `message` holds every word so far.
    /// `finished` is set on the last word; poll for the completion message.
    Revealed { message: String, finished: bool },
    /// Wrong control: shake it, nothing else changes
    Shake,
    /// Already revealed or unknown control
    Inert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Completion;

#[derive(Debug, Clone)]
pub struct HeartPuzzle {
    step: usize,
    revealed: [bool; PUZZLE_SEQUENCE.len()],
    celebrated: bool,
    cues: Timeline<Completion>,
}

impl Default for HeartPuzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl HeartPuzzle {
    pub fn new() -> Self {
        Self {
            step: 0,
            revealed: [false; PUZZLE_SEQUENCE.len()],
            celebrated: false,
            cues: Timeline::new(),
        }
    }

    /// Start over; a pending completion from the old round is dropped
    pub fn reset(&mut self) {
        self.cues.invalidate();
        self.step = 0;
        self.revealed = [false; PUZZLE_SEQUENCE.len()];
        self.celebrated = false;
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn phase(&self) -> PuzzlePhase {
        if self.celebrated {
            PuzzlePhase::Complete
        } else if self.step == 0 {
            PuzzlePhase::Idle
        } else {
            PuzzlePhase::Progressing(self.step)
        }
    }

    /// Solved, with the completion message not yet delivered by `poll`
    pub fn awaiting_completion(&self) -> bool {
        self.step == PUZZLE_SEQUENCE.len() && !self.celebrated
    }

    pub fn is_revealed(&self, id: u8) -> bool {
        Self::slot(id).is_some_and(|i| self.revealed[i])
    }

    /// Words revealed so far, space separated
    pub fn message(&self) -> String {
        SECRET_WORDS[..self.step].join(" ")
    }

    fn slot(id: u8) -> Option<usize> {
        PUZZLE_SEQUENCE.iter().position(|&n| n == id)
    }

    /// Press control `id` at `now_ms`
    pub fn press(&mut self, id: u8, now_ms: f64) -> PressOutcome {
        let Some(slot) = Self::slot(id) else {
            return PressOutcome::Inert;
        };
        if self.revealed[slot] {
            return PressOutcome::Inert;
        }
        if PUZZLE_SEQUENCE.get(self.step) != Some(&id) {
            log::debug!("heart {} pressed out of order at step {}", id, self.step);
            return PressOutcome::Shake;
        }

        self.revealed[slot] = true;
        self.step += 1;

        let finished = self.step == PUZZLE_SEQUENCE.len();
        if finished {
            self.cues.schedule(now_ms + PUZZLE_COMPLETE_DELAY_MS, Completion);
            log::info!("puzzle solved, completion in {}ms", PUZZLE_COMPLETE_DELAY_MS);
        }
        PressOutcome::Revealed {
            message: self.message(),
            finished,
        }
    }

    /// The completion message, once its delay has passed. Returns `Some`
    /// exactly once per solved round.
    pub fn poll(&mut self, now_ms: f64) -> Option<&'static str> {
        let due = !self.cues.drain_due(now_ms).is_empty();
        if due && !self.celebrated && self.step == PUZZLE_SEQUENCE.len() {
            self.celebrated = true;
            return Some(PUZZLE_COMPLETE_MESSAGE);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(puzzle: &mut HeartPuzzle, now_ms: f64) -> Vec<PressOutcome> {
        PUZZLE_SEQUENCE.iter().map(|&id| puzzle.press(id, now_ms)).collect()
    }

    #[test]
    fn test_correct_press_advances_one_word() {
        let mut puzzle = HeartPuzzle::new();
        assert_eq!(puzzle.phase(), PuzzlePhase::Idle);
        assert_eq!(
            puzzle.press(1, 0.0),
            PressOutcome::Revealed {
                message: "Keep".to_string(),
                finished: false
            }
        );
        assert_eq!(puzzle.phase(), PuzzlePhase::Progressing(1));
        assert!(puzzle.is_revealed(1));
    }

    #[test]
    fn test_wrong_press_shakes_without_change() {
        let mut puzzle = HeartPuzzle::new();
        puzzle.press(1, 0.0);
        assert_eq!(puzzle.press(5, 0.0), PressOutcome::Shake);
        assert_eq!(puzzle.step(), 1);
        assert!(!puzzle.is_revealed(5));
        assert_eq!(puzzle.message(), "Keep");
    }

    #[test]
    fn test_revealed_control_is_inert() {
        let mut puzzle = HeartPuzzle::new();
        puzzle.press(1, 0.0);
        puzzle.press(2, 0.0);
        assert_eq!(puzzle.press(1, 0.0), PressOutcome::Inert);
        assert_eq!(puzzle.step(), 2);
        assert_eq!(puzzle.press(0, 0.0), PressOutcome::Inert);
        assert_eq!(puzzle.press(10, 0.0), PressOutcome::Inert);
    }

    #[test]
    fn test_full_solve_reveals_message_then_completes_once() {
        let mut puzzle = HeartPuzzle::new();
        let outcomes = solve(&mut puzzle, 1000.0);
        assert_eq!(
            outcomes.last(),
            Some(&PressOutcome::Revealed {
                message: "Keep Going You're Doing An Amazing Job . 💜".to_string(),
                finished: true
            })
        );
        assert_eq!(puzzle.phase(), PuzzlePhase::Progressing(9));

        assert_eq!(puzzle.poll(1499.0), None);
        assert_eq!(puzzle.poll(1500.0), Some(PUZZLE_COMPLETE_MESSAGE));
        assert_eq!(puzzle.phase(), PuzzlePhase::Complete);
        assert_eq!(puzzle.poll(5000.0), None);
        assert_eq!(puzzle.press(9, 5000.0), PressOutcome::Inert);
    }

    #[test]
    fn test_early_poll_keeps_completion_pending() {
        let mut puzzle = HeartPuzzle::new();
        assert!(!puzzle.awaiting_completion());
        solve(&mut puzzle, 1000.0);
        assert!(puzzle.awaiting_completion());

        // A timer firing before the delay has passed must not lose the message
        assert_eq!(puzzle.poll(1497.0), None);
        assert!(puzzle.awaiting_completion());
        assert_eq!(puzzle.poll(1520.0), Some(PUZZLE_COMPLETE_MESSAGE));
        assert!(!puzzle.awaiting_completion());
    }

    #[test]
    fn test_reset_drops_pending_completion() {
        let mut puzzle = HeartPuzzle::new();
        solve(&mut puzzle, 0.0);
        puzzle.reset();
        assert_eq!(puzzle.poll(10_000.0), None);
        assert_eq!(puzzle.phase(), PuzzlePhase::Idle);
        assert!(!puzzle.is_revealed(1));
    }
}
