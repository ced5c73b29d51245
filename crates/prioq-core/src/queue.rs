//! # Sub-queue
//!
//! One FIFO of owned packets plus the service quota and length thresholds
//! the scheduler consults when picking a queue to serve or to evict from.

use std::collections::VecDeque;

use crate::packet::SchedPacket;

pub(crate) struct SubQueue<P> {
    packets: VecDeque<P>,
    /// Sum of `wire_len` over queued packets.
    backlog_bytes: u64,
    /// Remaining packets this round. Goes negative only transiently.
    pub(crate) pkts_quota: i64,
    /// Remaining bytes this round. May go below zero after a large packet.
    pub(crate) bytes_quota: i64,
    pub(crate) qlen_thresh: u32,
    pub(crate) qlen_thresh2: u32,
}

impl<P: SchedPacket> SubQueue<P> {
    pub(crate) fn new() -> Self {
        SubQueue {
            packets: VecDeque::new(),
            backlog_bytes: 0,
            pkts_quota: 0,
            bytes_quota: 0,
            qlen_thresh: 0,
            qlen_thresh2: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.packets.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    pub(crate) fn backlog_bytes(&self) -> u64 {
        self.backlog_bytes
    }

    /// Both quotas still positive.
    #[inline]
    pub(crate) fn has_quota(&self) -> bool {
        self.pkts_quota > 0 && self.bytes_quota > 0
    }

    pub(crate) fn set_quota(&mut self, pkts: u32, bytes: u32) {
        self.pkts_quota = i64::from(pkts);
        self.bytes_quota = i64::from(bytes);
    }

    pub(crate) fn set_qlen(&mut self, thresh: u32) {
        self.qlen_thresh = thresh;
        self.qlen_thresh2 = thresh.saturating_mul(2);
    }

    /// How far the queue is past `qlen_thresh2`, if at all.
    pub(crate) fn excess_over_thresh2(&self) -> Option<usize> {
        self.len().checked_sub(self.qlen_thresh2 as usize).filter(|&d| d > 0)
    }

    pub(crate) fn over_thresh(&self) -> bool {
        self.len() > self.qlen_thresh as usize
    }

    pub(crate) fn push_back(&mut self, packet: P) {
        self.backlog_bytes += u64::from(packet.wire_len());
        self.packets.push_back(packet);
    }

    pub(crate) fn pop_front(&mut self) -> Option<P> {
        let packet = self.packets.pop_front()?;
        self.backlog_bytes -= u64::from(packet.wire_len());
        Some(packet)
    }

    /// Pop the head and charge it against this round's quota.
    pub(crate) fn serve(&mut self) -> Option<P> {
        let packet = self.pop_front()?;
        self.pkts_quota -= 1;
        self.bytes_quota -= i64::from(packet.wire_len());
        Some(packet)
    }

    pub(crate) fn front(&self) -> Option<&P> {
        self.packets.front()
    }

    /// Drop every queued packet and return how many there were.
    pub(crate) fn purge(&mut self) -> usize {
        let n = self.packets.len();
        self.packets.clear();
        self.backlog_bytes = 0;
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn pkt(len: usize) -> Bytes {
        Bytes::from(vec![0u8; len])
    }

    #[test]
    fn fifo_order_and_backlog() {
        let mut q = SubQueue::new();
        q.push_back(Bytes::from_static(b"a"));
        q.push_back(Bytes::from_static(b"bb"));
        assert_eq!(q.len(), 2);
        assert_eq!(q.backlog_bytes(), 3);
        assert_eq!(q.pop_front().unwrap(), Bytes::from_static(b"a"));
        assert_eq!(q.backlog_bytes(), 2);
        assert_eq!(q.front().unwrap(), &Bytes::from_static(b"bb"));
    }

    #[test]
    fn serve_charges_quota_without_clamping() {
        let mut q = SubQueue::new();
        q.set_quota(1, 100);
        q.push_back(pkt(1500));
        q.serve().unwrap();
        assert_eq!(q.pkts_quota, 0);
        assert_eq!(q.bytes_quota, -1400);
        assert!(!q.has_quota());
    }

    #[test]
    fn thresholds() {
        let mut q: SubQueue<Bytes> = SubQueue::new();
        q.set_qlen(2);
        assert_eq!(q.qlen_thresh2, 4);
        for _ in 0..4 {
            q.push_back(pkt(1));
        }
        assert!(q.over_thresh());
        assert_eq!(q.excess_over_thresh2(), None);
        q.push_back(pkt(1));
        assert_eq!(q.excess_over_thresh2(), Some(1));
    }

    #[test]
    fn purge_clears_everything() {
        let mut q = SubQueue::new();
        q.push_back(pkt(10));
        q.push_back(pkt(10));
        assert_eq!(q.purge(), 2);
        assert!(q.is_empty());
        assert_eq!(q.backlog_bytes(), 0);
    }
}
