//! # prioq-core
//!
//! Four-level priority output queue discipline.
//!
//! Packets tagged with a traffic-control priority class are spread across
//! four FIFO sub-queues. Dequeue is strict priority, softened by per-queue
//! packet/byte service quotas so a saturated high-priority queue cannot
//! starve the lower ones. When the aggregate is full, one packet is evicted
//! from the queue that is furthest over its length threshold.
//!
//! ## Crate structure
//!
//! - [`prio`]: Priority class domain and the priority → queue table
//! - [`packet`]: Packet handle trait and a `Bytes`-backed packet type
//! - [`config`]: Quotas, length ratios, TOML loading
//! - `queue`: Single FIFO sub-queue with quota and threshold state
//! - [`scheduler`]: The scheduler: enqueue, dequeue, peek, reset
//! - [`stats`]: Enqueue/dequeue/drop counters and snapshots
//! - [`metrics`]: Prometheus text rendering of a stats snapshot
//! - [`shared`]: Lock-protected handle for multi-threaded producers/consumers

pub mod config;
pub mod metrics;
pub mod packet;
pub mod prio;
mod queue;
pub mod scheduler;
pub mod shared;
pub mod stats;

pub use config::{ConfigError, SchedulerConfig};
pub use packet::{Packet, SchedPacket};
pub use prio::{PrioMap, QueueIndex, NUM_QUEUES};
pub use scheduler::{Dropped, PriorityScheduler};
pub use shared::SharedScheduler;

/// Scheduler implementation version, reported once at startup.
pub const VERSION: &str = "1.2";

pub fn init() {
    tracing::info!(version = VERSION, "prioq scheduler initialized");
}
