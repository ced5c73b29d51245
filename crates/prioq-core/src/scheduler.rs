//! # Priority Scheduler
//!
//! Strict-priority service over four FIFO sub-queues with a quota safety
//! valve, plus threshold-driven eviction when the aggregate is full.
//!
//! ## Dequeue
//!
//! Queues are scanned from 0 (highest) to 3. The first non-empty queue with
//! both packet and byte quota left is served, and the served packet is
//! charged against those quotas. Once every backlogged queue has exhausted
//! its quota, all quotas are restored and the highest non-empty queue is
//! served. A saturated queue 0 therefore yields to lower queues after at most
//! its packet quota.
//!
//! ## Eviction
//!
//! When `len() >= capacity()`, one victim queue loses its head packet before
//! the new packet is appended:
//!
//! 1. The queue furthest beyond `qlen_thresh2` (ties go to the lower index).
//! 2. Otherwise, the lowest-priority queue beyond `qlen_thresh`.
//! 3. If there is no victim, or the victim is the queue the new packet is
//!    headed for, the new packet is dropped instead.

use std::fmt;

use crate::config::{ConfigError, SchedulerConfig};
use crate::packet::SchedPacket;
use crate::prio::{QueueIndex, NUM_QUEUES};
use crate::queue::SubQueue;
use crate::stats::{Counters, QueueStats, SchedStats};

// ─── Dropped ────────────────────────────────────────────────────────────────

/// Tail drop: the scheduler was full and the incoming packet was not
/// admitted. Ownership of the packet goes back to the caller.
#[derive(Debug)]
pub struct Dropped<P> {
    packet: P,
    queue: QueueIndex,
}

impl<P> Dropped<P> {
    /// Queue the packet would have been appended to.
    pub fn queue(&self) -> QueueIndex {
        self.queue
    }

    pub fn packet(&self) -> &P {
        &self.packet
    }

    pub fn into_inner(self) -> P {
        self.packet
    }
}

impl<P> fmt::Display for Dropped<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scheduler full, packet for {} dropped", self.queue)
    }
}

impl<P: fmt::Debug> std::error::Error for Dropped<P> {}

// ─── PriorityScheduler ──────────────────────────────────────────────────────

pub struct PriorityScheduler<P> {
    queues: [SubQueue<P>; NUM_QUEUES],
    /// Sum of all sub-queue lengths.
    total_len: usize,
    /// Aggregate length at which eviction kicks in.
    capacity: u32,
    config: SchedulerConfig,
    counters: Counters,
}

impl<P: SchedPacket> PriorityScheduler<P> {
    /// Scheduler with the default quotas, ratios and priority table.
    pub fn new(capacity: u32) -> Self {
        Self::build(capacity, SchedulerConfig::default())
    }

    pub fn with_config(capacity: u32, config: SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(capacity, config))
    }

    fn build(capacity: u32, config: SchedulerConfig) -> Self {
        let mut sch = PriorityScheduler {
            queues: std::array::from_fn(|_| SubQueue::new()),
            total_len: 0,
            capacity,
            config,
            counters: Counters::default(),
        };
        for qn in QueueIndex::all() {
            sch.set_quota(qn);
            sch.set_qlen(qn);
        }
        tracing::info!(
            capacity,
            pkts_limit = ?sch.config.pkts_limit,
            bytes_limit = ?sch.config.bytes_limit,
            "priority scheduler created"
        );
        sch
    }

    // ── Admission ───────────────────────────────────────────────

    /// Queue `packet` according to its traffic-control `priority`.
    ///
    /// At capacity this either evicts the head of a victim queue and admits
    /// the packet, or rejects the packet with [`Dropped`].
    pub fn enqueue(&mut self, packet: P, priority: u32) -> Result<(), Dropped<P>> {
        let qn = self.config.prio_map.queue_for(priority);

        if self.total_len >= self.capacity as usize {
            match self.next_to_drop() {
                Some(victim) if victim != qn => self.evict_head(victim),
                victim => {
                    self.counters.record_tail_drop(qn.get());
                    tracing::trace!(
                        queue = %qn,
                        victim = ?victim,
                        len = packet.wire_len(),
                        "tail drop"
                    );
                    return Err(Dropped { packet, queue: qn });
                }
            }
        }

        let len = packet.wire_len();
        self.queues[qn.get()].push_back(packet);
        self.total_len += 1;
        self.counters.record_enqueue(qn.get(), len);
        self.check_invariants();
        Ok(())
    }

    /// Queue that would lose its head packet if an enqueue happened at
    /// capacity right now.
    pub fn next_to_drop(&self) -> Option<QueueIndex> {
        let mut worst: Option<(QueueIndex, usize)> = None;
        let mut lowest_over_thresh = None;

        for qn in QueueIndex::all() {
            let q = &self.queues[qn.get()];
            if let Some(excess) = q.excess_over_thresh2() {
                if worst.map_or(true, |(_, max)| excess > max) {
                    worst = Some((qn, excess));
                }
            }
            if q.over_thresh() {
                lowest_over_thresh = Some(qn);
            }
        }

        worst.map(|(qn, _)| qn).or(lowest_over_thresh)
    }

    fn evict_head(&mut self, victim: QueueIndex) {
        if let Some(evicted) = self.queues[victim.get()].pop_front() {
            self.total_len -= 1;
            self.counters.record_eviction(victim.get());
            tracing::trace!(queue = %victim, len = evicted.wire_len(), "evicted head packet");
        }
    }

    // ── Service ─────────────────────────────────────────────────

    /// Pop the next packet in priority/quota order.
    pub fn dequeue(&mut self) -> Option<P> {
        let qn = self.next_to_dequeue()?;
        let packet = self.queues[qn.get()].serve()?;
        let len = packet.wire_len();
        self.total_len -= 1;
        self.counters.record_dequeue(qn.get(), len);
        self.check_invariants();
        Some(packet)
    }

    /// The packet the next [`dequeue`](Self::dequeue) would return.
    ///
    /// Takes `&mut self` because selection may restore exhausted quotas,
    /// exactly as a dequeue would.
    pub fn peek(&mut self) -> Option<&P> {
        let qn = self.next_to_dequeue()?;
        self.queues[qn.get()].front()
    }

    /// Pop packets in dequeue order until empty.
    pub fn drain(&mut self) -> impl Iterator<Item = P> + '_ {
        std::iter::from_fn(move || self.dequeue())
    }

    fn next_to_dequeue(&mut self) -> Option<QueueIndex> {
        let mut exhausted = None;

        for qn in QueueIndex::all() {
            let q = &self.queues[qn.get()];
            if q.is_empty() {
                continue;
            }
            if !q.has_quota() {
                exhausted.get_or_insert(qn);
                continue;
            }
            return Some(qn);
        }

        // Every backlogged queue used up its quota: start a new round.
        if exhausted.is_some() {
            self.refill_quotas();
        }
        exhausted
    }

    fn refill_quotas(&mut self) {
        for qn in QueueIndex::all() {
            self.set_quota(qn);
        }
        self.counters.quota_rounds += 1;
        tracing::trace!(round = self.counters.quota_rounds, "quotas restored");
    }

    // ── Reconfiguration ─────────────────────────────────────────

    /// Release every queued packet and restore quotas, keeping the capacity.
    /// Returns the number of packets released.
    pub fn reset(&mut self) -> usize {
        self.reset_with_capacity(self.capacity)
    }

    /// Release every queued packet, restore quotas and recompute length
    /// thresholds for `capacity`.
    pub fn reset_with_capacity(&mut self, capacity: u32) -> usize {
        let released: usize = self.queues.iter_mut().map(SubQueue::purge).sum();
        self.total_len = 0;
        self.capacity = capacity;
        for qn in QueueIndex::all() {
            self.set_quota(qn);
            self.set_qlen(qn);
        }
        self.counters.resets += 1;
        self.counters.released_on_reset += released as u64;
        tracing::debug!(capacity, released, "scheduler reset");
        self.check_invariants();
        released
    }

    /// Change the capacity and recompute per-queue length thresholds.
    /// Queued packets and quotas are left alone, so the scheduler may sit
    /// above a reduced capacity until dequeues catch up.
    pub fn set_capacity(&mut self, capacity: u32) {
        let old = self.capacity;
        self.capacity = capacity;
        for qn in QueueIndex::all() {
            self.set_qlen(qn);
        }
        tracing::debug!(old, new = capacity, queued = self.total_len, "capacity changed");
    }

    fn set_quota(&mut self, qn: QueueIndex) {
        let i = qn.get();
        self.queues[i].set_quota(self.config.pkts_limit[i], self.config.bytes_limit[i]);
    }

    fn set_qlen(&mut self, qn: QueueIndex) {
        let thresh = self.config.qlen_thresh(self.capacity, qn);
        self.queues[qn.get()].set_qlen(thresh);
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert_eq!(
            self.total_len,
            self.queues.iter().map(SubQueue::len).sum::<usize>(),
            "aggregate length out of sync with sub-queues"
        );
    }

    // ── Introspection ───────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.total_len
    }

    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn backlog_bytes(&self) -> u64 {
        self.queues.iter().map(SubQueue::backlog_bytes).sum()
    }

    pub fn queue_len(&self, qn: QueueIndex) -> usize {
        self.queues[qn.get()].len()
    }

    /// Remaining `(packets, bytes)` quota of `qn` this round.
    pub fn quota(&self, qn: QueueIndex) -> (i64, i64) {
        let q = &self.queues[qn.get()];
        (q.pkts_quota, q.bytes_quota)
    }

    /// `(qlen_thresh, qlen_thresh2)` of `qn`.
    pub fn thresholds(&self, qn: QueueIndex) -> (u32, u32) {
        let q = &self.queues[qn.get()];
        (q.qlen_thresh, q.qlen_thresh2)
    }

    pub fn stats(&self) -> SchedStats {
        let queues = QueueIndex::all()
            .map(|qn| {
                let i = qn.get();
                let q = &self.queues[i];
                let c = &self.counters.queues[i];
                QueueStats {
                    queue: i,
                    qlen: q.len(),
                    backlog_bytes: q.backlog_bytes(),
                    pkts_quota: q.pkts_quota,
                    bytes_quota: q.bytes_quota,
                    qlen_thresh: q.qlen_thresh,
                    qlen_thresh2: q.qlen_thresh2,
                    packets_enqueued: c.packets_enqueued,
                    bytes_enqueued: c.bytes_enqueued,
                    packets_dequeued: c.packets_dequeued,
                    bytes_dequeued: c.bytes_dequeued,
                    evictions: c.evictions,
                    tail_drops: c.tail_drops,
                }
            })
            .collect();
        SchedStats::from_parts(self.capacity, &self.counters, queues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::Packet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // Default table: priority 6 → q0, 7 → q1, 8 → q2, 0 → q3.
    const P0: u32 = 6;
    const P1: u32 = 7;
    const P2: u32 = 8;
    const P3: u32 = 0;

    fn q(i: usize) -> QueueIndex {
        QueueIndex::new(i).unwrap()
    }

    fn fill(sch: &mut PriorityScheduler<Packet>, prio: u32, n: usize, seq: &mut u64) {
        for _ in 0..n {
            sch.enqueue(Packet::zeroed(*seq, prio, 100), prio).unwrap();
            *seq += 1;
        }
    }

    fn lens(sch: &PriorityScheduler<Packet>) -> [usize; NUM_QUEUES] {
        std::array::from_fn(|i| sch.queue_len(q(i)))
    }

    #[test]
    fn thresholds_follow_capacity() {
        let sch: PriorityScheduler<Packet> = PriorityScheduler::new(10);
        let got: Vec<_> = QueueIndex::all().map(|qn| sch.thresholds(qn)).collect();
        assert_eq!(got, vec![(4, 8), (3, 6), (2, 4), (1, 2)]);
    }

    #[test]
    fn enqueue_then_dequeue_returns_same_packet() {
        let mut sch = PriorityScheduler::new(100);
        let pkt = Packet::new(42, P2, bytes::Bytes::from_static(b"payload"));
        sch.enqueue(pkt.clone(), P2).unwrap();
        assert_eq!(sch.dequeue(), Some(pkt));
        assert!(sch.is_empty());
    }

    #[test]
    fn dequeue_empty_leaves_counters_untouched() {
        let mut sch = PriorityScheduler::new(100);
        sch.enqueue(Packet::zeroed(0, P0, 10), P0).unwrap();
        sch.dequeue().unwrap();
        let before = sch.stats();

        assert_eq!(sch.dequeue(), None);
        assert!(sch.peek().is_none());
        assert_eq!(sch.stats(), before);
        assert_eq!(sch.quota(q(0)), (7, 256 * 1024 - 10));
        assert_eq!(before.quota_rounds, 0);
    }

    #[test]
    fn strict_priority_while_quota_remains() {
        let mut sch = PriorityScheduler::new(100);
        let mut seq = 0;
        fill(&mut sch, P3, 3, &mut seq);
        fill(&mut sch, P1, 3, &mut seq);
        fill(&mut sch, P0, 3, &mut seq);

        let order: Vec<u64> = sch.drain().map(|p| p.sequence).collect();
        assert_eq!(order, vec![6, 7, 8, 3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn packet_quota_lets_lower_queue_through() {
        let mut sch = PriorityScheduler::new(100);
        let mut seq = 0;
        fill(&mut sch, P0, 20, &mut seq);
        fill(&mut sch, P3, 5, &mut seq);

        let served: Vec<u32> = (0..10).map(|_| sch.dequeue().unwrap().priority).collect();
        assert_eq!(served, [vec![P0; 8], vec![P3; 2]].concat());
        assert_eq!(sch.stats().quota_rounds, 0);

        // Both backlogged queues exhausted: new round, queue 0 first again.
        assert_eq!(sch.dequeue().unwrap().priority, P0);
        assert_eq!(sch.stats().quota_rounds, 1);
        assert_eq!(sch.quota(q(0)).0, 7);
        assert_eq!(sch.quota(q(3)).0, 2);
    }

    #[test]
    fn byte_quota_can_go_negative() {
        let mut sch = PriorityScheduler::new(100);
        for i in 0..5 {
            sch.enqueue(Packet::zeroed(i, P0, 100 * 1024), P0).unwrap();
        }
        sch.enqueue(Packet::zeroed(99, P3, 64), P3).unwrap();

        for _ in 0..3 {
            assert_eq!(sch.dequeue().unwrap().priority, P0);
        }
        assert_eq!(sch.quota(q(0)), (5, 256 * 1024 - 300 * 1024));
        assert_eq!(sch.dequeue().unwrap().sequence, 99);
    }

    #[test]
    fn peek_matches_dequeue_and_restores_quota() {
        let mut sch = PriorityScheduler::new(100);
        let mut seq = 0;
        fill(&mut sch, P0, 10, &mut seq);
        for _ in 0..8 {
            sch.dequeue().unwrap();
        }
        assert_eq!(sch.quota(q(0)).0, 0);

        let peeked = sch.peek().cloned().unwrap();
        assert_eq!(sch.stats().quota_rounds, 1);
        assert_eq!(sch.quota(q(0)).0, 8);
        assert_eq!(sch.len(), 2);
        assert_eq!(sch.dequeue().unwrap(), peeked);
        assert_eq!(sch.quota(q(0)).0, 7);
    }

    #[test]
    fn massive_overshoot_is_evicted_first() {
        // capacity 10: thresh {4,3,2,1}, thresh2 {8,6,4,2}
        let mut sch = PriorityScheduler::new(10);
        let mut seq = 0;
        fill(&mut sch, P3, 5, &mut seq);
        fill(&mut sch, P0, 5, &mut seq);
        assert_eq!(sch.len(), 10);
        assert_eq!(sch.next_to_drop(), Some(q(3)));

        sch.enqueue(Packet::zeroed(100, P0, 100), P0).unwrap();
        assert_eq!(lens(&sch), [6, 0, 0, 4]);
        assert_eq!(sch.len(), 10);

        let s = sch.stats();
        assert_eq!(s.queues[3].evictions, 1);
        // oldest queue-3 packet went first
        let rest: Vec<u64> = sch.drain().filter(|p| p.priority == P3).map(|p| p.sequence).collect();
        assert_eq!(rest, vec![1, 2, 3, 4]);
    }

    #[test]
    fn over_thresh_evicts_lowest_priority_queue() {
        let mut sch = PriorityScheduler::new(10);
        let mut seq = 0;
        fill(&mut sch, P0, 2, &mut seq);
        fill(&mut sch, P1, 3, &mut seq);
        fill(&mut sch, P2, 3, &mut seq); // over thresh 2, not thresh2 4
        fill(&mut sch, P3, 2, &mut seq); // over thresh 1, not thresh2 2
        assert_eq!(sch.next_to_drop(), Some(q(3)));

        sch.enqueue(Packet::zeroed(100, P1, 100), P1).unwrap();
        assert_eq!(lens(&sch), [2, 4, 3, 1]);
    }

    #[test]
    fn only_queue3_over_thresh_is_the_victim() {
        let mut sch = PriorityScheduler::new(10);
        let mut seq = 0;
        fill(&mut sch, P0, 4, &mut seq); // at thresh 4
        fill(&mut sch, P1, 3, &mut seq); // at thresh 3
        fill(&mut sch, P2, 1, &mut seq);
        fill(&mut sch, P3, 2, &mut seq); // over thresh 1, not thresh2 2
        assert_eq!(sch.next_to_drop(), Some(q(3)));

        sch.enqueue(Packet::zeroed(100, P0, 100), P0).unwrap();
        assert_eq!(lens(&sch), [5, 3, 1, 1]);
        assert_eq!(sch.stats().queues[3].evictions, 1);

        let rest: Vec<u64> = sch.drain().filter(|p| p.priority == P3).map(|p| p.sequence).collect();
        assert_eq!(rest, vec![9]);
    }

    #[test]
    fn over_thresh2_beats_lower_priority_candidate() {
        let mut sch = PriorityScheduler::new(10);
        let mut seq = 0;
        fill(&mut sch, P0, 1, &mut seq);
        fill(&mut sch, P1, 7, &mut seq); // 1 past thresh2 6
        fill(&mut sch, P3, 2, &mut seq); // past thresh 1 only
        assert_eq!(sch.next_to_drop(), Some(q(1)));

        sch.enqueue(Packet::zeroed(100, P0, 100), P0).unwrap();
        assert_eq!(lens(&sch), [2, 6, 0, 2]);
    }

    #[test]
    fn equal_overshoot_picks_lower_index() {
        let mut sch = PriorityScheduler::new(10);
        let mut seq = 0;
        fill(&mut sch, P0, 2, &mut seq);
        fill(&mut sch, P2, 5, &mut seq); // 1 past thresh2 4
        fill(&mut sch, P3, 3, &mut seq); // 1 past thresh2 2
        assert_eq!(sch.next_to_drop(), Some(q(2)));

        sch.enqueue(Packet::zeroed(100, P0, 100), P0).unwrap();
        assert_eq!(lens(&sch), [3, 0, 4, 3]);
    }

    #[test]
    fn victim_is_incoming_queue_drops_incoming() {
        let mut sch = PriorityScheduler::new(10);
        let mut seq = 0;
        fill(&mut sch, P3, 10, &mut seq);

        let err = sch.enqueue(Packet::zeroed(100, P3, 100), P3).unwrap_err();
        assert_eq!(err.queue(), q(3));
        assert_eq!(err.into_inner().sequence, 100);
        assert_eq!(sch.len(), 10);

        let s = sch.stats();
        assert_eq!(s.tail_drops, 1);
        assert_eq!(s.evictions, 0);
    }

    #[test]
    fn no_victim_drops_incoming() {
        let mut sch = PriorityScheduler::new(10);
        let mut seq = 0;
        fill(&mut sch, P0, 4, &mut seq);
        fill(&mut sch, P1, 3, &mut seq);
        fill(&mut sch, P2, 2, &mut seq);
        fill(&mut sch, P3, 1, &mut seq);
        assert_eq!(sch.next_to_drop(), None);

        let err = sch.enqueue(Packet::zeroed(100, P0, 100), P0).unwrap_err();
        assert_eq!(err.to_string(), "scheduler full, packet for q0 dropped");
        assert_eq!(lens(&sch), [4, 3, 2, 1]);
    }

    #[test]
    fn zero_capacity_admits_nothing() {
        let mut sch = PriorityScheduler::new(0);
        assert!(sch.enqueue(Packet::zeroed(0, P0, 10), P0).is_err());
        assert!(sch.is_empty());
    }

    #[test]
    fn set_capacity_keeps_packets_and_quotas() {
        let mut sch = PriorityScheduler::new(10);
        let mut seq = 0;
        fill(&mut sch, P0, 6, &mut seq);
        sch.dequeue().unwrap();
        let quota = sch.quota(q(0));

        sch.set_capacity(100);
        assert_eq!(sch.len(), 5);
        assert_eq!(sch.quota(q(0)), quota);
        assert_eq!(sch.thresholds(q(0)), (40, 80));
        assert_eq!(sch.capacity(), 100);
    }

    #[test]
    fn reduced_capacity_evicts_but_does_not_trim() {
        let mut sch = PriorityScheduler::new(100);
        let mut seq = 0;
        fill(&mut sch, P3, 20, &mut seq);
        sch.set_capacity(10);

        // q3 is far beyond thresh2 2, incoming q0 packet evicts one q3 head.
        sch.enqueue(Packet::zeroed(100, P0, 100), P0).unwrap();
        assert_eq!(sch.len(), 20);
        assert_eq!(lens(&sch), [1, 0, 0, 19]);
    }

    #[derive(Debug)]
    struct Tracked {
        drops: Arc<AtomicUsize>,
    }

    impl SchedPacket for Tracked {
        fn wire_len(&self) -> u32 {
            64
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn reset_releases_each_packet_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut sch = PriorityScheduler::new(100);
        for prio in [P0, P1, P2, P3, P3] {
            sch.enqueue(Tracked { drops: drops.clone() }, prio).unwrap();
        }
        drop(sch.dequeue());
        assert_eq!(drops.load(Ordering::SeqCst), 1);

        assert_eq!(sch.reset_with_capacity(20), 4);
        assert_eq!(drops.load(Ordering::SeqCst), 5);
        assert!(sch.is_empty());
        assert_eq!(sch.backlog_bytes(), 0);
        assert_eq!(sch.quota(q(0)), (8, 256 * 1024));
        assert_eq!(sch.thresholds(q(3)), (2, 4));

        let s = sch.stats();
        assert_eq!(s.resets, 1);
        assert_eq!(s.released_on_reset, 4);
    }

    #[test]
    fn eviction_and_teardown_release_each_packet_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut sch = PriorityScheduler::new(10);
        for _ in 0..10 {
            sch.enqueue(Tracked { drops: drops.clone() }, P3).unwrap();
        }
        sch.enqueue(Tracked { drops: drops.clone() }, P0).unwrap();
        assert_eq!(drops.load(Ordering::SeqCst), 1);

        // rejected packet comes back to the caller and is dropped here
        let rejected = sch.enqueue(Tracked { drops: drops.clone() }, P3);
        assert!(rejected.is_err());
        drop(rejected);
        assert_eq!(drops.load(Ordering::SeqCst), 2);

        drop(sch);
        assert_eq!(drops.load(Ordering::SeqCst), 12);
    }

    #[test]
    fn backlog_tracks_bytes() {
        let mut sch = PriorityScheduler::new(10);
        sch.enqueue(Packet::zeroed(0, P0, 100), P0).unwrap();
        sch.enqueue(Packet::zeroed(1, P3, 50), P3).unwrap();
        assert_eq!(sch.backlog_bytes(), 150);
        sch.dequeue().unwrap();
        assert_eq!(sch.backlog_bytes(), 50);
        assert_eq!(sch.stats().bytes_dequeued, 100);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SchedulerConfig {
            qlen_ratio: [1, 1, 1, 1],
            ..Default::default()
        };
        assert!(PriorityScheduler::<Packet>::with_config(10, cfg).is_err());
    }
}
