//! Fixed-capacity ring buffer with index-based eviction

/// Bounded FIFO window
///
/// Storage is allocated once up to `capacity`; after that every push
/// overwrites the oldest slot in place. Iteration runs oldest to newest.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Slots, filled in order until capacity is reached
    slots: Vec<T>,
    /// Maximum number of retained elements
    capacity: usize,
    /// Index of the oldest element once the buffer is full
    head: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer; a zero capacity is raised to one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    /// Append a value, returning the evicted oldest value when full
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.slots.len() < self.capacity {
            self.slots.push(value);
            return None;
        }
        let evicted = std::mem::replace(&mut self.slots[self.head], value);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    /// Element at logical position `index` (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.slots.len() {
            return None;
        }
        self.slots.get((self.head + index) % self.slots.len())
    }

    /// Most recently pushed element
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Remove every element, returning them oldest to newest
    pub fn drain(&mut self) -> Vec<T> {
        let mut slots = std::mem::take(&mut self.slots);
        slots.rotate_left(self.head);
        self.head = 0;
        self.slots = Vec::with_capacity(self.capacity);
        slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copy out the contents, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
