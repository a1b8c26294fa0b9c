//! Tracks which rendered item is currently in focus.
//!
//! Feed intersection ratios in through [`VisibilityTracker::observe`] as the
//! browser reports them. The tracker keeps at most one item active; of all
//! items at or above the threshold the most recently observed one wins.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub index: usize,
    /// Item that lost focus because of this activation
    pub previous: Option<usize>,
    /// The activated item is the last one currently rendered
    pub is_last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    Activated(Activation),
    /// Nothing qualifies any more
    Deactivated { previous: usize },
}

#[derive(Debug, Clone, Copy)]
struct Observation {
    ratio: f64,
    seq: u64,
}

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    threshold: f64,
    len: usize,
    observations: HashMap<usize, Observation>,
    seq: u64,
    active: Option<usize>,
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            len: 0,
            observations: HashMap::new(),
            seq: 0,
            active: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_last(&self, index: usize) -> bool {
        self.len > 0 && index == self.len - 1
    }

    /// Update the number of rendered items. Observations past the new end
    /// are forgotten; an active item past the end is silently dropped.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.observations.retain(|index, _| *index < len);
        if self.active.is_some_and(|index| index >= len) {
            self.active = None;
        }
    }

    /// Forget everything, e.g. after the collection was refiltered
    pub fn reset(&mut self) {
        self.observations.clear();
        self.active = None;
        self.seq = 0;
    }

    /// Record the visible fraction of item `index`.
    ///
    /// Returns an event only when the active item changes.
    pub fn observe(&mut self, index: usize, ratio: f64) -> Option<TrackerEvent> {
        if index >= self.len {
            return None;
        }
        self.seq += 1;
        self.observations.insert(
            index,
            Observation {
                ratio,
                seq: self.seq,
            },
        );

        if ratio >= self.threshold {
            if self.active == Some(index) {
                return None;
            }
            let previous = self.active.replace(index);
            return Some(TrackerEvent::Activated(Activation {
                index,
                previous,
                is_last: self.is_last(index),
            }));
        }

        if self.active != Some(index) {
            return None;
        }

        match self.most_recent_qualifier() {
            Some(next) => {
                self.active = Some(next);
                Some(TrackerEvent::Activated(Activation {
                    index: next,
                    previous: Some(index),
                    is_last: self.is_last(next),
                }))
            }
            None => {
                self.active = None;
                Some(TrackerEvent::Deactivated { previous: index })
            }
        }
    }

    fn most_recent_qualifier(&self) -> Option<usize> {
        self.observations
            .iter()
            .filter(|(_, obs)| obs.ratio >= self.threshold)
            .max_by_key(|(_, obs)| obs.seq)
            .map(|(index, _)| *index)
    }
}
