//! Frame-tick countdowns.
//!
//! Each entry owns a [`ScheduledTask`] record instead of a closure, so the
//! scheduler can be cleared or inspected without capturing ambient state.
//! Tasks only see their target (the actor roster), never the scheduler, which
//! rules out clearing or scheduling from inside a tick.

/// A deferred effect driven by the [`Scheduler`].
pub trait ScheduledTask {
    type Target;

    /// Runs on every tick the entry is alive, including the tick it expires on.
    fn on_tick(&mut self, _target: &mut Self::Target) {}

    /// Runs exactly once, after the final `on_tick`.
    fn on_expire(self, target: &mut Self::Target);
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry<T> {
    remaining: u32,
    task: T,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: ScheduledTask> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `task` to expire after `delay` ticks. A zero delay is treated
    /// as one tick.
    pub fn schedule(&mut self, delay: u32, task: T) {
        self.entries.push(Entry {
            remaining: delay.max(1),
            task,
        });
    }

    /// Advances every entry by one tick in registration order. Returns how
    /// many entries expired.
    pub fn tick(&mut self, target: &mut T::Target) -> usize {
        let entries = std::mem::take(&mut self.entries);
        let mut alive = Vec::with_capacity(entries.len());
        let mut expired = 0;

        for mut entry in entries {
            entry.remaining -= 1;
            entry.task.on_tick(target);
            if entry.remaining == 0 {
                entry.task.on_expire(target);
                expired += 1;
            } else {
                alive.push(entry);
            }
        }

        self.entries = alive;
        expired
    }

    /// Drops every pending entry without running its callbacks.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tasks(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.task)
    }
}
