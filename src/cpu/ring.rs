use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicU32, Ordering};

use zerocopy::FromZeros;

use super::datagram::{Body, GlobalHeader};
use super::params::BUF_SIZE;

/// Bounded single-producer/single-consumer ring handing frames from the
/// receive context to the periodic context.
///
/// Only the receive context calls [`push`](Ring::push) and only the periodic
/// context calls [`pop`](Ring::pop). Slot payloads are published with a
/// release store of `write_cursor` and acquired before the consumer reads
/// them, so the consumer never observes a partially written frame.
pub struct Ring {
    head_buf: [UnsafeCell<GlobalHeader>; BUF_SIZE as usize],
    body_buf: [UnsafeCell<Body>; BUF_SIZE as usize],
    write_cursor: AtomicU32,
    read_cursor: AtomicU32,
}

// The cursor protocol guarantees that a slot is only ever accessed by one
// context at a time.
unsafe impl Sync for Ring {}

impl Ring {
    pub fn new() -> Self {
        Self {
            head_buf: std::array::from_fn(|_| UnsafeCell::new(GlobalHeader::new_zeroed())),
            body_buf: std::array::from_fn(|_| UnsafeCell::new(Body::new_zeroed())),
            write_cursor: AtomicU32::new(0),
            read_cursor: AtomicU32::new(0),
        }
    }

    /// Returns `false` when the ring is full; the caller must retry.
    pub fn push(&self, head: &GlobalHeader, body: &Body) -> bool {
        let write = self.write_cursor.load(Ordering::Relaxed);
        let mut next = write + 1;
        if next >= BUF_SIZE {
            next = 0;
        }

        if next == self.read_cursor.load(Ordering::Acquire) {
            return false;
        }

        unsafe {
            *self.head_buf[write as usize].get() = *head;
            *self.body_buf[write as usize].get() = *body;
        }

        self.write_cursor.store(next, Ordering::Release);

        true
    }

    /// Returns `false` when the ring is empty.
    pub fn pop(&self, head: &mut GlobalHeader, body: &mut Body) -> bool {
        let read = self.read_cursor.load(Ordering::Relaxed);

        if read == self.write_cursor.load(Ordering::Acquire) {
            return false;
        }

        unsafe {
            *head = *self.head_buf[read as usize].get();
            *body = *self.body_buf[read as usize].get();
        }

        let mut next = read + 1;
        if next >= BUF_SIZE {
            next = 0;
        }

        self.read_cursor.store(next, Ordering::Release);

        true
    }

    /// Zeroes every slot payload. The cursors are left untouched.
    pub fn reset_slots(&self) {
        self.head_buf.iter().for_each(|h| unsafe {
            *h.get() = GlobalHeader::new_zeroed();
        });
        self.body_buf.iter().for_each(|b| unsafe {
            *b.get() = Body::new_zeroed();
        });
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::new()
    }
}
