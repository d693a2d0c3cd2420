//! The operations every circular block store exposes.

use crate::error::Result;
use crate::ring_buffer::RingBuffer;
use crate::sorted::SortedRingBuffer;

/// Capability contract shared by [`RingBuffer`] and [`SortedRingBuffer`].
///
/// Code that only needs to queue and drain blocks can be written once
/// against this trait and handed either variant.
///
/// ```
/// use giztoy_ringbuffer::{CircularBuffer, RingBuffer, SortedRingBuffer};
///
/// fn drain<B: CircularBuffer<u32>>(buf: &mut B) -> Vec<u32> {
///     let mut out = Vec::new();
///     while let Ok(v) = buf.archive() {
///         out.push(v);
///     }
///     out
/// }
///
/// let mut fifo = RingBuffer::new(4);
/// let mut sorted = SortedRingBuffer::new(4);
/// for v in [3, 1, 2] {
///     fifo.insert(v);
///     sorted.insert(v);
/// }
/// assert_eq!(drain(&mut fifo), vec![3, 1, 2]);
/// assert_eq!(drain(&mut sorted), vec![1, 2, 3]);
/// ```
pub trait CircularBuffer<T> {
    /// Adds a block, growing the storage if needed.
    fn insert(&mut self, value: T);

    /// Removes and returns the block at the front.
    fn archive(&mut self) -> Result<T>;

    /// Removes every block. Errors if there was nothing to remove.
    fn archive_all(&mut self) -> Result<usize>;

    /// Peeks at the block at the front.
    fn front(&self) -> Result<&T>;

    /// Peeks at the block at the back.
    fn back(&self) -> Result<&T>;

    /// Number of blocks that fit without growing.
    fn capacity(&self) -> usize;

    /// Number of live blocks.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.capacity() <= self.len()
    }
}

impl<T> CircularBuffer<T> for RingBuffer<T> {
    fn insert(&mut self, value: T) {
        RingBuffer::insert(self, value)
    }

    fn archive(&mut self) -> Result<T> {
        RingBuffer::archive(self)
    }

    fn archive_all(&mut self) -> Result<usize> {
        RingBuffer::archive_all(self)
    }

    fn front(&self) -> Result<&T> {
        RingBuffer::front(self)
    }

    fn back(&self) -> Result<&T> {
        RingBuffer::back(self)
    }

    fn capacity(&self) -> usize {
        RingBuffer::capacity(self)
    }

    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    fn is_empty(&self) -> bool {
        RingBuffer::is_empty(self)
    }

    fn is_full(&self) -> bool {
        RingBuffer::is_full(self)
    }
}

impl<T: Ord> CircularBuffer<T> for SortedRingBuffer<T> {
    fn insert(&mut self, value: T) {
        SortedRingBuffer::insert(self, value)
    }

    fn archive(&mut self) -> Result<T> {
        SortedRingBuffer::archive(self)
    }

    fn archive_all(&mut self) -> Result<usize> {
        SortedRingBuffer::archive_all(self)
    }

    fn front(&self) -> Result<&T> {
        SortedRingBuffer::front(self)
    }

    fn back(&self) -> Result<&T> {
        SortedRingBuffer::back(self)
    }

    fn capacity(&self) -> usize {
        SortedRingBuffer::capacity(self)
    }

    fn len(&self) -> usize {
        SortedRingBuffer::len(self)
    }

    fn is_empty(&self) -> bool {
        SortedRingBuffer::is_empty(self)
    }

    fn is_full(&self) -> bool {
        SortedRingBuffer::is_full(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmptyBufferError;

    fn fill<B: CircularBuffer<i32>>(buf: &mut B, values: &[i32]) {
        for &v in values {
            buf.insert(v);
        }
    }

    fn check_empty_contract<B: CircularBuffer<i32>>(mut buf: B) {
        assert!(CircularBuffer::is_empty(&buf));
        assert_eq!(CircularBuffer::archive(&mut buf), Err(EmptyBufferError));
        assert_eq!(CircularBuffer::front(&buf), Err(EmptyBufferError));
        assert_eq!(CircularBuffer::back(&buf), Err(EmptyBufferError));
        assert_eq!(CircularBuffer::archive_all(&mut buf), Err(EmptyBufferError));
        assert!(CircularBuffer::is_empty(&buf));
    }

    #[test]
    fn test_empty_contract() {
        check_empty_contract(RingBuffer::new(4));
        check_empty_contract(SortedRingBuffer::new(4));
    }

    #[test]
    fn test_growth_through_trait() {
        let mut fifo = RingBuffer::new(4);
        fill(&mut fifo, &[4, 3, 2]);
        assert!(CircularBuffer::is_full(&fifo));
        fill(&mut fifo, &[1]);
        assert!(!CircularBuffer::is_full(&fifo));
        assert_eq!(CircularBuffer::len(&fifo), 4);
        assert_eq!(CircularBuffer::capacity(&fifo), 7);

        let mut sorted = SortedRingBuffer::new(4);
        fill(&mut sorted, &[4, 3, 2, 1]);
        assert_eq!(CircularBuffer::front(&sorted), Ok(&1));
        assert_eq!(CircularBuffer::back(&sorted), Ok(&4));
    }

    struct Counting {
        inner: Vec<i32>,
    }

    impl CircularBuffer<i32> for Counting {
        fn insert(&mut self, value: i32) {
            self.inner.push(value);
        }
        fn archive(&mut self) -> Result<i32> {
            if self.inner.is_empty() {
                return Err(EmptyBufferError);
            }
            Ok(self.inner.remove(0))
        }
        fn archive_all(&mut self) -> Result<usize> {
            let n = self.inner.len();
            self.inner.clear();
            if n == 0 { Err(EmptyBufferError) } else { Ok(n) }
        }
        fn front(&self) -> Result<&i32> {
            self.inner.first().ok_or(EmptyBufferError)
        }
        fn back(&self) -> Result<&i32> {
            self.inner.last().ok_or(EmptyBufferError)
        }
        fn capacity(&self) -> usize {
            2
        }
        fn len(&self) -> usize {
            self.inner.len()
        }
    }

    #[test]
    fn test_default_predicates() {
        let mut c = Counting { inner: Vec::new() };
        assert!(c.is_empty());
        c.insert(1);
        assert!(!c.is_full());
        c.insert(2);
        assert!(c.is_full());
    }
}
