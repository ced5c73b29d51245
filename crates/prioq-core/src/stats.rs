//! # Scheduler Statistics
//!
//! Monotonic counters kept alongside the queues, and serializable snapshots
//! of them for logging, JSON output and Prometheus export.
//! Counters survive [`reset`](crate::PriorityScheduler::reset); only queue
//! contents and quotas are cleared.

use serde::Serialize;

use crate::prio::NUM_QUEUES;

// ─── Counters ───────────────────────────────────────────────────────────────

/// Per-queue running totals.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct QueueCounters {
    pub packets_enqueued: u64,
    pub bytes_enqueued: u64,
    pub packets_dequeued: u64,
    pub bytes_dequeued: u64,
    pub evictions: u64,
    pub tail_drops: u64,
}

/// Scheduler-wide running totals.
#[derive(Debug, Clone, Default)]
pub(crate) struct Counters {
    pub queues: [QueueCounters; NUM_QUEUES],
    pub quota_rounds: u64,
    pub resets: u64,
    pub released_on_reset: u64,
}

impl Counters {
    pub fn record_enqueue(&mut self, qn: usize, len: u32) {
        let q = &mut self.queues[qn];
        q.packets_enqueued += 1;
        q.bytes_enqueued += u64::from(len);
    }

    pub fn record_dequeue(&mut self, qn: usize, len: u32) {
        let q = &mut self.queues[qn];
        q.packets_dequeued += 1;
        q.bytes_dequeued += u64::from(len);
    }

    pub fn record_eviction(&mut self, qn: usize) {
        self.queues[qn].evictions += 1;
    }

    pub fn record_tail_drop(&mut self, qn: usize) {
        self.queues[qn].tail_drops += 1;
    }
}

// ─── Snapshots ──────────────────────────────────────────────────────────────

/// Point-in-time view of one sub-queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    /// Queue index, 0 = highest priority.
    pub queue: usize,
    /// Packets currently queued.
    pub qlen: usize,
    /// Bytes currently queued.
    pub backlog_bytes: u64,
    /// Remaining packet quota this round (may be negative).
    pub pkts_quota: i64,
    /// Remaining byte quota this round (may be negative).
    pub bytes_quota: i64,
    pub qlen_thresh: u32,
    pub qlen_thresh2: u32,
    pub packets_enqueued: u64,
    pub bytes_enqueued: u64,
    pub packets_dequeued: u64,
    pub bytes_dequeued: u64,
    /// Packets removed from the head of this queue to make room.
    pub evictions: u64,
    /// Incoming packets for this queue rejected because the scheduler was full.
    pub tail_drops: u64,
}

/// Point-in-time view of the whole scheduler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchedStats {
    pub capacity: u32,
    /// Total packets queued across all sub-queues.
    pub qlen: usize,
    /// Total bytes queued across all sub-queues.
    pub backlog_bytes: u64,
    pub packets_enqueued: u64,
    pub bytes_enqueued: u64,
    pub packets_dequeued: u64,
    pub bytes_dequeued: u64,
    /// Evictions plus tail drops.
    pub drops: u64,
    pub evictions: u64,
    pub tail_drops: u64,
    /// Times all quotas were restored because every backlogged queue had
    /// exhausted its own.
    pub quota_rounds: u64,
    pub resets: u64,
    /// Packets released by resets.
    pub released_on_reset: u64,
    pub queues: Vec<QueueStats>,
}

impl SchedStats {
    pub(crate) fn from_parts(
        capacity: u32,
        counters: &Counters,
        queues: Vec<QueueStats>,
    ) -> Self {
        let mut stats = SchedStats {
            capacity,
            quota_rounds: counters.quota_rounds,
            resets: counters.resets,
            released_on_reset: counters.released_on_reset,
            ..Default::default()
        };
        for q in &queues {
            stats.qlen += q.qlen;
            stats.backlog_bytes += q.backlog_bytes;
            stats.packets_enqueued += q.packets_enqueued;
            stats.bytes_enqueued += q.bytes_enqueued;
            stats.packets_dequeued += q.packets_dequeued;
            stats.bytes_dequeued += q.bytes_dequeued;
            stats.evictions += q.evictions;
            stats.tail_drops += q.tail_drops;
        }
        stats.drops = stats.evictions + stats.tail_drops;
        stats.queues = queues;
        stats
    }

    /// Fraction of offered packets that were dropped (evicted or rejected).
    pub fn drop_rate(&self) -> f64 {
        let offered = self.packets_enqueued + self.tail_drops;
        if offered == 0 {
            0.0
        } else {
            self.drops as f64 / offered as f64
        }
    }

    /// Share of dequeued packets served from each queue.
    pub fn service_share(&self) -> [f64; NUM_QUEUES] {
        let mut out = [0.0; NUM_QUEUES];
        if self.packets_dequeued == 0 {
            return out;
        }
        for (slot, q) in out.iter_mut().zip(self.queues.iter()) {
            *slot = q.packets_dequeued as f64 / self.packets_dequeued as f64;
        }
        out
    }
}
