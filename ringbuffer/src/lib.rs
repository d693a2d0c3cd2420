//! Growable circular block storage.
//!
//! This crate provides an in-memory ring buffer that grows instead of
//! overwriting or blocking, plus a variant that keeps its blocks sorted:
//!
//! - [`RingBuffer<T>`]: A FIFO queue over a circular array that doubles when full
//! - [`SortedRingBuffer<T>`]: The same storage, re-ordered ascending on every insert
//!
//! Both implement the [`CircularBuffer`] trait.
//!
//! # RingBuffer (FIFO)
//!
//! Blocks are archived in the order they were inserted. One backing slot is
//! always kept empty, so a buffer created with `n` slots holds `n - 1` blocks
//! before its storage is doubled.
//!
//! ```
//! use giztoy_ringbuffer::RingBuffer;
//!
//! let mut buf = RingBuffer::new(4);
//! buf.insert(1);
//! buf.insert(2);
//! buf.insert(3);
//! assert_eq!(buf.to_string(), "[1,2,3]");
//!
//! buf.insert(4); // triggers growth
//! assert_eq!(buf.archive(), Ok(1));
//! assert_eq!(buf.archive(), Ok(2));
//! assert_eq!(buf.to_string(), "[3,4]");
//! ```
//!
//! ## SortedRingBuffer (Priority)
//!
//! [`SortedRingBuffer<T>`] requires `T: Ord`. `front()` is always the smallest
//! block and `archive()` removes it.
//!
//! ```
//! use giztoy_ringbuffer::SortedRingBuffer;
//!
//! let mut buf = SortedRingBuffer::default();
//! buf.insert(5);
//! buf.insert(1);
//! buf.insert(3);
//! assert_eq!(buf.to_string(), "[1,3,5]");
//! assert_eq!(buf.archive(), Ok(1));
//! ```
//!
//! # Empty Buffers
//!
//! Operations that need a block return [`EmptyBufferError`] instead of a
//! stale value. The buffer is never modified when that happens.
//!
//! ```
//! use giztoy_ringbuffer::{EmptyBufferError, RingBuffer};
//!
//! let mut buf = RingBuffer::<i32>::default();
//! assert_eq!(buf.front(), Err(EmptyBufferError));
//! assert_eq!(buf.archive_all(), Err(EmptyBufferError));
//! assert!(buf.is_empty());
//! ```
//!
//! # Configuration
//!
//! [`Config`] carries the initial slot count and can be deserialized as part
//! of a larger application config.
//!
//! # Thread Safety
//!
//! Buffers are plain owned values: mutation takes `&mut self`. Wrap them in a
//! lock to share them between threads.

mod config;
mod contract;
mod error;
mod ring_buffer;
mod sorted;

pub use config::{Config, DEFAULT_SLOTS};
pub use contract::CircularBuffer;
pub use error::{EmptyBufferError, Result};
pub use ring_buffer::{IntoIter, Iter, RingBuffer};
pub use sorted::SortedRingBuffer;
