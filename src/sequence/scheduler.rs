use crate::foundation::core::SessionTime;

#[derive(Clone, Debug)]
struct Entry<E> {
    due: SessionTime,
    seq: u64,
    event: E,
}

/// Fire-and-forget timers keyed on [`SessionTime`].
///
/// Events fire in `(due, scheduling order)` order when the owner calls
/// [`Scheduler::drain_due`]. Dropping the scheduler (stage teardown) cancels everything pending.
#[derive(Clone, Debug)]
pub struct Scheduler<E> {
    entries: Vec<Entry<E>>,
    next_seq: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: SessionTime, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { due, seq, event });
    }

    pub fn schedule_after(&mut self, now: SessionTime, delay_ms: u64, event: E) {
        self.schedule(now.after_millis(delay_ms), event);
    }

    /// Remove and return every event due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: SessionTime) -> Vec<E> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.entries).into_iter().partition(|e| e.due <= now);
        self.entries = pending;
        due.sort_by_key(|e| (e.due, e.seq));
        due.into_iter().map(|e| e.event).collect()
    }

    pub fn next_due(&self) -> Option<SessionTime> {
        self.entries.iter().map(|e| e.due).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/scheduler.rs"]
mod tests;
