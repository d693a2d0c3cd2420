//! Growable circular block storage.

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{EmptyBufferError, Result};

/// A growable FIFO ring buffer.
///
/// `RingBuffer<T>` keeps its blocks in a fixed-length array of optional slots
/// addressed by a `start` and an `end` index that wrap around the array.
/// One slot is always left empty, so a buffer with `n` slots stores up to
/// `n - 1` blocks. Inserting into a full buffer doubles the storage and lays
/// the live blocks out again from index 0 in FIFO order.
///
/// # Semantics
///
/// - **Insert**: Appends at the back, growing first when full. Never fails.
/// - **Archive**: Removes from the front. Returns [`EmptyBufferError`] when empty.
/// - **Peek**: `front()` is the oldest block, `back()` the newest.
///
/// # Example
///
/// ```
/// use giztoy_ringbuffer::RingBuffer;
///
/// let mut buf = RingBuffer::new(4);
/// buf.insert(1);
/// buf.insert(2);
/// buf.insert(3);
/// assert!(buf.is_full());
///
/// buf.insert(4); // grows to 8 slots
/// assert_eq!(buf.capacity(), 7);
///
/// assert_eq!(buf.archive(), Ok(1));
/// assert_eq!(buf.to_string(), "[2,3,4]");
/// ```
#[derive(Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    start: usize, // oldest live block
    end: usize,   // newest live block; the slot before `start` when empty
    len: usize,
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<T> RingBuffer<T> {
    /// Creates a new RingBuffer backed by `slots` slots.
    ///
    /// The buffer can hold `slots - 1` blocks before it grows.
    pub fn new(slots: usize) -> Self {
        assert!(slots > 0, "slots must be greater than 0");
        let mut storage = Vec::with_capacity(slots);
        storage.resize_with(slots, || None);

        RingBuffer {
            slots: storage,
            start: 0,
            end: slots - 1,
            len: 0,
        }
    }

    /// Creates a new RingBuffer from a [`Config`].
    pub fn with_config(cfg: Config) -> Self {
        Self::new(cfg.with_defaults().slots)
    }

    /// Returns the number of live blocks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of blocks the buffer holds before it has to grow.
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns the length of the backing storage, reserved slot included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the buffer holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next insert will grow the storage.
    pub fn is_full(&self) -> bool {
        self.slots.len() - self.len <= 1
    }

    /// Index of the oldest block in the backing storage.
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Index of the newest block in the backing storage.
    pub fn end_index(&self) -> usize {
        self.end
    }

    /// Appends a block at the back, doubling the storage first if full.
    pub fn insert(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }
        self.end = self.advance(self.end);
        self.len += 1;
        self.slots[self.end] = Some(value);
    }

    /// Removes and returns the oldest block.
    pub fn archive(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(EmptyBufferError);
        }
        let value = self.slots[self.start].take().ok_or(EmptyBufferError)?;
        self.start = self.advance(self.start);
        self.len -= 1;
        Ok(value)
    }

    /// Drops every block in FIFO order and returns how many were removed.
    ///
    /// Returns [`EmptyBufferError`] if the buffer was already empty. Either
    /// way the buffer is empty and usable afterwards.
    pub fn archive_all(&mut self) -> Result<usize> {
        if self.is_empty() {
            trace!("ring buffer: archive_all on empty buffer");
            return Err(EmptyBufferError);
        }
        let drained = self.len;
        while self.len != 0 {
            self.slots[self.start] = None;
            self.start = self.advance(self.start);
            self.len -= 1;
        }
        Ok(drained)
    }

    /// Returns the oldest block without removing it.
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(EmptyBufferError);
        }
        self.slots[self.start].as_ref().ok_or(EmptyBufferError)
    }

    /// Returns the newest block without removing it.
    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(EmptyBufferError);
        }
        self.slots[self.end].as_ref().ok_or(EmptyBufferError)
    }

    /// Doubles the backing storage.
    ///
    /// Live blocks are copied in FIFO order into slots `0..len` of the new
    /// storage; afterwards `start_index() == 0`.
    pub fn grow(&mut self) {
        let old_slots = self.slots.len();
        let new_slots = old_slots * 2;

        let mut storage: Vec<Option<T>> = Vec::with_capacity(new_slots);
        storage.resize_with(new_slots, || None);

        let mut idx = self.start;
        for slot in storage.iter_mut().take(self.len) {
            *slot = self.slots[idx].take();
            idx = (idx + 1) % old_slots;
        }

        self.start = 0;
        // With no live blocks `end` sits just before `start`.
        self.end = (self.len + new_slots - 1) % new_slots;
        self.slots = storage;

        debug!(old_slots, new_slots, len = self.len, "ring buffer: grew storage");
    }

    /// Returns a borrowing iterator over the live blocks, oldest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            pos: self.start,
            remaining: self.len,
            budget: self.slots.len(),
        }
    }

    /// Storage index of the live block following `idx`, or `None` once `idx`
    /// is the newest block. Empty slots are stepped over.
    pub(crate) fn next_live(&self, idx: usize) -> Option<usize> {
        if self.is_empty() || idx == self.end {
            return None;
        }
        let mut i = self.advance(idx);
        loop {
            if self.slots[i].is_some() {
                return Some(i);
            }
            if i == self.end {
                return None;
            }
            i = self.advance(i);
        }
    }

    /// Storage index of the live block preceding `idx`, or `None` once `idx`
    /// is the oldest block. Empty slots are stepped over.
    pub(crate) fn prev_live(&self, idx: usize) -> Option<usize> {
        if self.is_empty() || idx == self.start {
            return None;
        }
        let mut i = self.retreat(idx);
        loop {
            if self.slots[i].is_some() {
                return Some(i);
            }
            if i == self.start {
                return None;
            }
            i = self.retreat(i);
        }
    }

    pub(crate) fn slot(&self, idx: usize) -> Option<&T> {
        self.slots[idx].as_ref()
    }

    pub(crate) fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    fn advance(&self, idx: usize) -> usize {
        (idx + 1) % self.slots.len()
    }

    fn retreat(&self, idx: usize) -> usize {
        (idx + self.slots.len() - 1) % self.slots.len()
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Returns a copy of all live blocks, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Display> fmt::Display for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = RingBuffer::default();
        buf.extend(iter);
        buf
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { buf: self }
    }
}

/// Borrowing iterator over a ring buffer's live blocks, oldest first.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    pos: usize,
    remaining: usize,
    budget: usize, // slots left to scan
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        while self.remaining > 0 && self.budget > 0 {
            let slot = &slots[self.pos];
            self.pos = (self.pos + 1) % slots.len();
            self.budget -= 1;
            if let Some(value) = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Consuming iterator that archives blocks front to back.
pub struct IntoIter<T> {
    buf: RingBuffer<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.buf.archive().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buf.len(), Some(self.buf.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
