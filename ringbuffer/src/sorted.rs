//! Ring buffer that keeps its blocks in ascending order.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::config::Config;
use crate::error::Result;
use crate::ring_buffer::{IntoIter, Iter, RingBuffer};

/// A ring buffer that re-orders its blocks ascending after every insert.
///
/// `SortedRingBuffer<T>` shares the storage layout and growth rules of
/// [`RingBuffer`], but `front()` always yields the smallest block and
/// `back()` the largest, which makes it an array-backed priority queue.
/// Equal blocks keep their insertion order.
///
/// # Example
///
/// ```
/// use giztoy_ringbuffer::SortedRingBuffer;
///
/// let mut buf = SortedRingBuffer::new(8);
/// buf.insert(5);
/// buf.insert(1);
/// buf.insert(3);
/// assert_eq!(buf.to_string(), "[1,3,5]");
///
/// assert_eq!(buf.archive(), Ok(1));
/// buf.insert(2);
/// assert_eq!(buf.to_string(), "[2,3,5]");
/// ```
#[derive(Clone)]
pub struct SortedRingBuffer<T> {
    inner: RingBuffer<T>,
}

impl<T: Ord> Default for SortedRingBuffer<T> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<T: Ord> SortedRingBuffer<T> {
    /// Creates a new SortedRingBuffer backed by `slots` slots.
    pub fn new(slots: usize) -> Self {
        Self {
            inner: RingBuffer::new(slots),
        }
    }

    /// Creates a new SortedRingBuffer from a [`Config`].
    pub fn with_config(cfg: Config) -> Self {
        Self {
            inner: RingBuffer::with_config(cfg),
        }
    }

    /// Appends a block and moves it to its ordered position.
    pub fn insert(&mut self, value: T) {
        self.inner.insert(value);
        if self.inner.len() > 1 {
            self.sift_back();
        }
    }

    /// Re-sorts every live block.
    ///
    /// Only needed after the buffer was built from unsorted storage; inserts
    /// keep the order on their own.
    pub fn resort(&mut self) {
        let n = self.inner.len();
        let mut passes = 0;
        for _ in 0..n {
            passes += 1;
            if !self.bubble_pass() {
                break;
            }
        }
        trace!(len = n, passes, "sorted ring buffer: resorted");
    }

    /// Removes and returns the smallest block.
    pub fn archive(&mut self) -> Result<T> {
        self.inner.archive()
    }

    /// Drops every block, see [`RingBuffer::archive_all`].
    pub fn archive_all(&mut self) -> Result<usize> {
        self.inner.archive_all()
    }

    /// Returns the smallest block.
    pub fn front(&self) -> Result<&T> {
        self.inner.front()
    }

    /// Returns the largest block.
    pub fn back(&self) -> Result<&T> {
        self.inner.back()
    }

    /// Returns the number of blocks the buffer holds before it has to grow.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the length of the backing storage, reserved slot included.
    pub fn slot_count(&self) -> usize {
        self.inner.slot_count()
    }

    /// Returns the number of live blocks.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the buffer holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns true if the next insert will grow the storage.
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Index of the smallest block in the backing storage.
    pub fn start_index(&self) -> usize {
        self.inner.start_index()
    }

    /// Index of the largest block in the backing storage.
    pub fn end_index(&self) -> usize {
        self.inner.end_index()
    }

    /// Doubles the backing storage. Order is preserved.
    pub fn grow(&mut self) {
        self.inner.grow();
    }

    /// Returns a borrowing iterator over the live blocks, smallest first.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns the wrapped ring buffer.
    pub fn into_inner(self) -> RingBuffer<T> {
        self.inner
    }

    /// Walks backwards from the newest block, swapping it past every greater
    /// predecessor. The blocks before it are already ordered, so this stops
    /// at the first predecessor that is not greater.
    fn sift_back(&mut self) {
        let mut current = self.inner.end_index();
        while let Some(prev) = self.inner.prev_live(current) {
            if !self.out_of_order(prev, current) {
                break;
            }
            self.inner.swap_slots(prev, current);
            current = prev;
        }
    }

    /// One circular pass over adjacent live pairs from `start` up to `end`.
    /// Returns whether anything was swapped.
    fn bubble_pass(&mut self) -> bool {
        let mut swapped = false;
        let mut current = self.inner.start_index();
        while let Some(next) = self.inner.next_live(current) {
            if self.out_of_order(current, next) {
                self.inner.swap_slots(current, next);
                swapped = true;
            }
            current = next;
        }
        swapped
    }

    fn out_of_order(&self, earlier: usize, later: usize) -> bool {
        match (self.inner.slot(earlier), self.inner.slot(later)) {
            (Some(a), Some(b)) => a.cmp(b) == Ordering::Greater,
            _ => false,
        }
    }
}

impl<T: Clone> SortedRingBuffer<T> {
    /// Returns a copy of all live blocks, smallest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.to_vec()
    }
}

impl<T: Ord> From<RingBuffer<T>> for SortedRingBuffer<T> {
    fn from(inner: RingBuffer<T>) -> Self {
        let mut buf = Self { inner };
        buf.resort();
        buf
    }
}

impl<T: fmt::Display> fmt::Display for SortedRingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedRingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<T: Ord> Extend<T> for SortedRingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedRingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = SortedRingBuffer::default();
        buf.extend(iter);
        buf
    }
}

impl<'a, T> IntoIterator for &'a SortedRingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T> IntoIterator for SortedRingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
