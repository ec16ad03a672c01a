//! One-shot delayed cues
//!
//! Cues are stamped with the timeline's generation when scheduled.
//! `invalidate` bumps the generation, so cues scheduled before a reset are
//! dropped when they come due instead of acting on the new state.

/// A cue waiting for its due time
#[derive(Debug, Clone)]
struct Pending<E> {
    due_ms: f64,
    generation: u64,
    event: E,
}

/// Queue of delayed events measured in wall-clock milliseconds
#[derive(Debug, Clone)]
pub struct Timeline<E> {
    pending: Vec<Pending<E>>,
    generation: u64,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            generation: 0,
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` once `now_ms` reaches `due_ms`
    pub fn schedule(&mut self, due_ms: f64, event: E) {
        self.pending.push(Pending {
            due_ms,
            generation: self.generation,
            event,
        });
    }

    /// Mark every cue scheduled so far as stale
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Cues not yet fired, stale ones included
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every live cue due at `now_ms`, earliest first.
    /// Stale cues that are due are discarded.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<E> {
        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due_ms <= now_ms);
        self.pending = waiting;

        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        let generation = self.generation;
        due.into_iter()
            .filter(|p| p.generation == generation)
            .map(|p| p.event)
            .collect()
    }
}
