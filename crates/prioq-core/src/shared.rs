//! # Shared Scheduler
//!
//! Thread-safe handle for multiple producers and consumers. The whole
//! scheduler sits behind one mutex: admission and victim selection read every
//! queue, so there is no finer-grained lock to split out.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::{ConfigError, SchedulerConfig};
use crate::packet::SchedPacket;
use crate::scheduler::{Dropped, PriorityScheduler};
use crate::stats::SchedStats;

pub struct SharedScheduler<P> {
    inner: Arc<Mutex<PriorityScheduler<P>>>,
}

impl<P> Clone for SharedScheduler<P> {
    fn clone(&self) -> Self {
        SharedScheduler {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: SchedPacket> SharedScheduler<P> {
    pub fn new(capacity: u32) -> Self {
        Self::from_scheduler(PriorityScheduler::new(capacity))
    }

    pub fn with_config(capacity: u32, config: SchedulerConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_scheduler(PriorityScheduler::with_config(
            capacity, config,
        )?))
    }

    pub fn from_scheduler(sch: PriorityScheduler<P>) -> Self {
        SharedScheduler {
            inner: Arc::new(Mutex::new(sch)),
        }
    }

    /// A panic while holding the lock cannot leave the scheduler half-updated
    /// (every operation completes before returning), so a poisoned lock is
    /// still safe to use.
    fn lock(&self) -> MutexGuard<'_, PriorityScheduler<P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn enqueue(&self, packet: P, priority: u32) -> Result<(), Dropped<P>> {
        self.lock().enqueue(packet, priority)
    }

    pub fn dequeue(&self) -> Option<P> {
        self.lock().dequeue()
    }

    /// Run `f` on the packet the next dequeue would return, under the lock.
    pub fn peek_with<R>(&self, f: impl FnOnce(&P) -> R) -> Option<R> {
        self.lock().peek().map(f)
    }

    /// Run several operations under a single lock acquisition.
    pub fn with<R>(&self, f: impl FnOnce(&mut PriorityScheduler<P>) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn reset(&self) -> usize {
        self.lock().reset()
    }

    pub fn reset_with_capacity(&self, capacity: u32) -> usize {
        self.lock().reset_with_capacity(capacity)
    }

    pub fn set_capacity(&self, capacity: u32) {
        self.lock().set_capacity(capacity)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn stats(&self) -> SchedStats {
        self.lock().stats()
    }
}
