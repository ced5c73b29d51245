//! # Packet Handles
//!
//! The scheduler stores packets as opaque owned values. The only thing it
//! needs to know about a packet is its length on the wire, which is charged
//! against the byte quota of the queue it leaves from.

use bytes::Bytes;

/// Anything the scheduler can queue.
pub trait SchedPacket {
    /// Length in bytes charged against queue byte quotas and backlog.
    fn wire_len(&self) -> u32;
}

impl SchedPacket for Bytes {
    fn wire_len(&self) -> u32 {
        u32::try_from(self.len()).unwrap_or(u32::MAX)
    }
}

impl SchedPacket for Vec<u8> {
    fn wire_len(&self) -> u32 {
        u32::try_from(self.len()).unwrap_or(u32::MAX)
    }
}

impl<P: SchedPacket + ?Sized> SchedPacket for Box<P> {
    fn wire_len(&self) -> u32 {
        (**self).wire_len()
    }
}

/// A packet with a sequence number, the priority it was submitted with and
/// its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Caller-assigned sequence number.
    pub sequence: u64,
    /// Traffic-control priority class.
    pub priority: u32,
    pub payload: Bytes,
}

impl Packet {
    pub fn new(sequence: u64, priority: u32, payload: Bytes) -> Self {
        Packet {
            sequence,
            priority,
            payload,
        }
    }

    /// Packet of `len` zero bytes. Handy for simulations where only the
    /// length matters.
    pub fn zeroed(sequence: u64, priority: u32, len: usize) -> Self {
        Packet::new(sequence, priority, Bytes::from(vec![0u8; len]))
    }
}

impl SchedPacket for Packet {
    fn wire_len(&self) -> u32 {
        self.payload.wire_len()
    }
}
