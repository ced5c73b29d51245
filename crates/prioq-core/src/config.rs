//! # Scheduler Configuration
//!
//! Per-queue service quotas, length-threshold ratios and the priority table.
//! TOML is parsed into [`SchedulerConfigInput`], where every field is
//! optional, and [`SchedulerConfigInput::resolve`] fills defaults and
//! validates into a [`SchedulerConfig`].

use serde::Deserialize;
use thiserror::Error;

use crate::prio::{PrioMap, QueueIndex, NUM_QUEUES, TC_PRIO_MAX};

pub const CONFIG_VERSION: u32 = 1;

/// Per-queue length ratios are expressed in tenths of the total capacity.
pub const RATIO_DENOMINATOR: u32 = 10;

/// Packets dequeued from a queue before it yields to lower-priority queues.
pub const DEFAULT_PKTS_LIMIT: [u32; NUM_QUEUES] = [8, 6, 4, 2];

/// Bytes dequeued from a queue before it yields to lower-priority queues.
pub const DEFAULT_BYTES_LIMIT: [u32; NUM_QUEUES] = [256 * 1024, 128 * 1024, 64 * 1024, 32 * 1024];

/// Share of the total capacity (out of [`RATIO_DENOMINATOR`]) used as each
/// queue's soft length threshold.
pub const DEFAULT_QLEN_RATIO: [u32; NUM_QUEUES] = [4, 3, 2, 1];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("queue {queue}: packet quota must be positive")]
    ZeroPacketQuota { queue: usize },
    #[error("queue {queue}: byte quota must be positive")]
    ZeroByteQuota { queue: usize },
    #[error("queue length ratios must sum to {denom}, got {sum}", denom = RATIO_DENOMINATOR)]
    RatioSum { sum: u32 },
    #[error("priority {priority} is outside 0..={max}", max = TC_PRIO_MAX)]
    PriorityOutOfRange { priority: u32 },
    #[error("priority {priority} maps to queue {queue}, which does not exist")]
    QueueOutOfRange { priority: u32, queue: u8 },
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

// ─── Input layer ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchedulerConfigInput {
    pub version: u32,
    pub pkts_limit: Option<[u32; NUM_QUEUES]>,
    pub bytes_limit: Option<[u32; NUM_QUEUES]>,
    pub qlen_ratio: Option<[u32; NUM_QUEUES]>,
    /// Sparse priority table; empty keeps the default table.
    pub priority_map: Vec<PrioEntryInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrioEntryInput {
    pub priority: u32,
    pub queue: u8,
}

// ─── Resolved config ────────────────────────────────────────────────────────

/// Static scheduler configuration. Everything here is fixed for the lifetime
/// of a scheduler; only the capacity changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub pkts_limit: [u32; NUM_QUEUES],
    pub bytes_limit: [u32; NUM_QUEUES],
    pub qlen_ratio: [u32; NUM_QUEUES],
    pub prio_map: PrioMap,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            pkts_limit: DEFAULT_PKTS_LIMIT,
            bytes_limit: DEFAULT_BYTES_LIMIT,
            qlen_ratio: DEFAULT_QLEN_RATIO,
            prio_map: PrioMap::default(),
        }
    }
}

impl SchedulerConfigInput {
    pub fn resolve(self) -> Result<SchedulerConfig, ConfigError> {
        let version = if self.version == 0 {
            CONFIG_VERSION
        } else {
            self.version
        };
        if version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(version));
        }

        let prio_map = if self.priority_map.is_empty() {
            PrioMap::default()
        } else {
            PrioMap::from_entries(self.priority_map.iter().map(|e| (e.priority, e.queue)))?
        };

        let config = SchedulerConfig {
            pkts_limit: self.pkts_limit.unwrap_or(DEFAULT_PKTS_LIMIT),
            bytes_limit: self.bytes_limit.unwrap_or(DEFAULT_BYTES_LIMIT),
            qlen_ratio: self.qlen_ratio.unwrap_or(DEFAULT_QLEN_RATIO),
            prio_map,
        };
        config.validate()?;
        Ok(config)
    }
}

impl SchedulerConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(SchedulerConfig::default());
        }
        let parsed: SchedulerConfigInput = toml::from_str(input)?;
        parsed.resolve()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for queue in 0..NUM_QUEUES {
            if self.pkts_limit[queue] == 0 {
                return Err(ConfigError::ZeroPacketQuota { queue });
            }
            if self.bytes_limit[queue] == 0 {
                return Err(ConfigError::ZeroByteQuota { queue });
            }
        }
        let sum: u32 = self.qlen_ratio.iter().sum();
        if sum != RATIO_DENOMINATOR {
            return Err(ConfigError::RatioSum { sum });
        }
        Ok(())
    }

    /// Soft length threshold of `qn` for a total capacity. The division
    /// happens before the multiplication, so capacities below
    /// [`RATIO_DENOMINATOR`] yield zero thresholds.
    pub fn qlen_thresh(&self, capacity: u32, qn: QueueIndex) -> u32 {
        capacity / RATIO_DENOMINATOR * self.qlen_ratio[qn.get()]
    }
}
