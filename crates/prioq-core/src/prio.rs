//! # Priority Classes
//!
//! Maps the caller-supplied traffic-control priority of a packet onto one of
//! the four scheduler queues. Queue 0 is served first, queue 3 last.

use std::fmt;

use crate::config::ConfigError;

/// Number of scheduler sub-queues.
pub const NUM_QUEUES: usize = 4;

/// Highest traffic-control priority band. Priorities are reduced into
/// `0..=TC_PRIO_MAX` by masking before the table lookup.
pub const TC_PRIO_MAX: u32 = 15;

/// Number of entries in a priority table.
pub const PRIO_BANDS: usize = TC_PRIO_MAX as usize + 1;

// ─── QueueIndex ─────────────────────────────────────────────────────────────

/// Index of a scheduler sub-queue. Always in `0..NUM_QUEUES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueueIndex(u8);

impl QueueIndex {
    /// Highest-priority queue.
    pub const HIGHEST: QueueIndex = QueueIndex(0);
    /// Lowest-priority queue, also the default for unmapped priorities.
    pub const LOWEST: QueueIndex = QueueIndex(NUM_QUEUES as u8 - 1);

    /// Returns `None` if `idx` is not a valid queue.
    pub fn new(idx: usize) -> Option<Self> {
        if idx < NUM_QUEUES {
            Some(QueueIndex(idx as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// All queues in service order (highest priority first).
    pub fn all() -> impl Iterator<Item = QueueIndex> {
        (0..NUM_QUEUES as u8).map(QueueIndex)
    }
}

impl fmt::Display for QueueIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

// ─── PrioMap ────────────────────────────────────────────────────────────────

/// Total priority → queue table.
///
/// The default routes priority 6 to queue 0, 7 to queue 1, 8 to queue 2 and
/// everything else to queue 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrioMap {
    table: [QueueIndex; PRIO_BANDS],
}

const DEFAULT_TABLE: [u8; PRIO_BANDS] = [3, 3, 3, 3, 3, 3, 0, 1, 2, 3, 3, 3, 3, 3, 3, 3];

impl Default for PrioMap {
    fn default() -> Self {
        let mut table = [QueueIndex::LOWEST; PRIO_BANDS];
        for (slot, &qn) in table.iter_mut().zip(DEFAULT_TABLE.iter()) {
            *slot = QueueIndex(qn);
        }
        PrioMap { table }
    }
}

impl PrioMap {
    /// Build a map from a full 16-entry table.
    pub fn from_table(table: [u8; PRIO_BANDS]) -> Result<Self, ConfigError> {
        Self::from_entries(table.iter().enumerate().map(|(p, &q)| (p as u32, q)))
    }

    /// Build a map from sparse `(priority, queue)` pairs. Priorities not
    /// listed go to [`QueueIndex::LOWEST`]; later pairs override earlier ones.
    pub fn from_entries<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (u32, u8)>,
    {
        let mut table = [QueueIndex::LOWEST; PRIO_BANDS];
        for (priority, queue) in entries {
            if priority > TC_PRIO_MAX {
                return Err(ConfigError::PriorityOutOfRange { priority });
            }
            let qn = QueueIndex::new(queue as usize)
                .ok_or(ConfigError::QueueOutOfRange { priority, queue })?;
            table[priority as usize] = qn;
        }
        Ok(PrioMap { table })
    }

    /// Queue for a packet priority. Any `u32` is accepted; only the low bits
    /// (`priority & TC_PRIO_MAX`) select the table entry.
    #[inline]
    pub fn queue_for(&self, priority: u32) -> QueueIndex {
        self.table[(priority & TC_PRIO_MAX) as usize]
    }

    pub fn as_table(&self) -> [u8; PRIO_BANDS] {
        let mut out = [0u8; PRIO_BANDS];
        for (dst, qn) in out.iter_mut().zip(self.table.iter()) {
            *dst = qn.0;
        }
        out
    }
}
