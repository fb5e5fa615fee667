use std::collections::VecDeque;

/// Fixed-capacity FIFO that is always full.
///
/// Construction fills every slot with an explicit invalid value, so the
/// length is exactly `capacity` from the first instant — the chart downstream
/// always receives a full window and never needs a "not enough data yet"
/// path. Each push evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct Fifo<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> Fifo<T> {
    /// New buffer with `capacity` slots, all set to `invalid`.
    ///
    /// `capacity` must be at least 1; it is validated at the config boundary.
    pub fn new(capacity: usize, invalid: T) -> Self {
        debug_assert!(capacity > 0, "Fifo capacity must be positive");
        let mut buffer = VecDeque::with_capacity(capacity);
        buffer.resize(capacity, invalid);
        Self { buffer, capacity }
    }

    /// Append `value` as the newest entry, evicting the oldest. O(1).
    pub fn push(&mut self, value: T) {
        self.buffer.pop_front();
        self.buffer.push_back(value);
    }

    /// Point-in-time copy of the contents, oldest first, length == capacity.
    ///
    /// Later pushes never mutate a snapshot already handed out.
    pub fn snapshot(&self) -> Vec<T> {
        self.buffer.iter().cloned().collect()
    }

    /// The fixed capacity (and therefore the constant length).
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
