//! Name/color login gate with a limited number of attempts

use crate::consts::MAX_LOGIN_ATTEMPTS;

const ACCEPTED_NAMES: [&str; 2] = ["mikylla gicale", "gicale mikylla"];
const ACCEPTED_COLOR: &str = "red";

/// Result of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Granted,
    Denied { remaining: u32 },
    /// No further attempts are accepted this session
    LockedOut,
}

#[derive(Debug, Clone)]
pub struct LoginGate {
    failures: u32,
    max_attempts: u32,
}

impl Default for LoginGate {
    fn default() -> Self {
        Self::new(MAX_LOGIN_ATTEMPTS)
    }
}

impl LoginGate {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            failures: 0,
            max_attempts,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.failures >= self.max_attempts
    }

    /// Check a name/color pair; input is trimmed and case-insensitive
    pub fn submit(&mut self, name: &str, color: &str) -> GateOutcome {
        if self.is_locked() {
            return GateOutcome::LockedOut;
        }

        let name = name.trim().to_lowercase();
        let color = color.trim().to_lowercase();
        if ACCEPTED_NAMES.contains(&name.as_str()) && color == ACCEPTED_COLOR {
            self.failures = 0;
            return GateOutcome::Granted;
        }

        self.failures += 1;
        log::debug!("login attempt {} failed", self.failures);
        if self.is_locked() {
            GateOutcome::LockedOut
        } else {
            GateOutcome::Denied {
                remaining: self.max_attempts - self.failures,
            }
        }
    }
}

/// "N attempt(s) remaining"
pub fn remaining_text(remaining: u32) -> String {
    let plural = if remaining == 1 { "" } else { "s" };
    format!("{} attempt{} remaining", remaining, plural)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_name_orders() {
        let mut gate = LoginGate::default();
        assert_eq!(gate.submit("  Mikylla Gicale ", "RED"), GateOutcome::Granted);
        assert_eq!(gate.submit("gicale mikylla", "red"), GateOutcome::Granted);
    }

    #[test]
    fn test_locks_after_three_failures() {
        let mut gate = LoginGate::default();
        assert_eq!(gate.submit("someone", "red"), GateOutcome::Denied { remaining: 2 });
        assert_eq!(gate.submit("mikylla gicale", "blue"), GateOutcome::Denied { remaining: 1 });
        assert_eq!(gate.submit("x", "y"), GateOutcome::LockedOut);
        assert_eq!(gate.submit("mikylla gicale", "red"), GateOutcome::LockedOut);
    }

    #[test]
    fn test_success_resets_failures() {
        let mut gate = LoginGate::default();
        gate.submit("x", "y");
        gate.submit("x", "y");
        assert_eq!(gate.submit("mikylla gicale", "red"), GateOutcome::Granted);
        assert_eq!(gate.submit("x", "y"), GateOutcome::Denied { remaining: 2 });
    }

    #[test]
    fn test_remaining_text() {
        assert_eq!(remaining_text(2), "2 attempts remaining");
        assert_eq!(remaining_text(1), "1 attempt remaining");
    }
}
