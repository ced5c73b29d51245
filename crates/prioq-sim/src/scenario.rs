use std::collections::HashSet;

use anyhow::{bail, Context};
use prioq_core::config::SchedulerConfigInput;
use prioq_core::SchedulerConfig;
use serde::Deserialize;

pub const SCENARIO_VERSION: u32 = 1;

// ─── Input layer ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScenarioInput {
    pub version: u32,
    pub seed: Option<u64>,
    pub ticks: Option<u64>,
    pub capacity: Option<u32>,
    pub dequeue_per_tick: Option<u32>,
    pub resize_at_tick: Option<u64>,
    pub resize_to: Option<u32>,
    pub scheduler: SchedulerConfigInput,
    pub flows: Vec<FlowInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlowInput {
    pub name: String,
    pub priority: u32,
    pub packet_len: Option<usize>,
    /// Expected packets per tick.
    pub rate: f64,
}

// ─── Resolved scenario ──────────────────────────────────────────────────────

/// One traffic source: a fixed priority and packet size, arriving at a
/// mean `rate` packets per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    pub name: String,
    pub priority: u32,
    pub packet_len: usize,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    pub at_tick: u64,
    pub capacity: u32,
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub seed: u64,
    pub ticks: u64,
    pub capacity: u32,
    /// Packets the link can take per tick.
    pub dequeue_per_tick: u32,
    pub resize: Option<Resize>,
    pub scheduler: SchedulerConfig,
    pub flows: Vec<Flow>,
}

const DEFAULT_PACKET_LEN: usize = 1200;

impl Default for Scenario {
    /// Overloaded link: roughly 10.5 packets offered per tick against 8
    /// served, with bulk traffic making up most of the excess.
    fn default() -> Self {
        let flow = |name: &str, priority, packet_len, rate| Flow {
            name: name.to_string(),
            priority,
            packet_len,
            rate,
        };
        Scenario {
            seed: 1,
            ticks: 1000,
            capacity: 1000,
            dequeue_per_tick: 8,
            resize: None,
            scheduler: SchedulerConfig::default(),
            flows: vec![
                flow("voice", 6, 200, 1.0),
                flow("video", 7, 1200, 3.0),
                flow("control", 8, 100, 0.5),
                flow("bulk", 0, 1500, 6.0),
            ],
        }
    }
}

impl ScenarioInput {
    pub fn resolve(self) -> anyhow::Result<Scenario> {
        let version = if self.version == 0 {
            SCENARIO_VERSION
        } else {
            self.version
        };
        if version != SCENARIO_VERSION {
            bail!("unsupported scenario version {version}");
        }

        let defaults = Scenario::default();
        let scheduler = self
            .scheduler
            .resolve()
            .context("invalid [scheduler] section")?;

        let resize = match (self.resize_at_tick, self.resize_to) {
            (Some(at_tick), Some(capacity)) => Some(Resize { at_tick, capacity }),
            (None, None) => None,
            _ => bail!("resize_at_tick and resize_to must be given together"),
        };

        let flows = if self.flows.is_empty() {
            defaults.flows
        } else {
            let mut names = HashSet::new();
            let mut out = Vec::with_capacity(self.flows.len());
            for (idx, f) in self.flows.into_iter().enumerate() {
                let name = match f.name.trim() {
                    "" => format!("flow{idx}"),
                    trimmed => trimmed.to_string(),
                };
                if !names.insert(name.clone()) {
                    bail!("duplicate flow name '{name}'");
                }
                if !f.rate.is_finite() || f.rate < 0.0 {
                    bail!("flow '{name}': rate must be a non-negative number, got {}", f.rate);
                }
                let packet_len = f.packet_len.unwrap_or(DEFAULT_PACKET_LEN);
                if packet_len == 0 {
                    bail!("flow '{name}': packet_len must be positive");
                }
                out.push(Flow {
                    name,
                    priority: f.priority,
                    packet_len,
                    rate: f.rate,
                });
            }
            out
        };

        Ok(Scenario {
            seed: self.seed.unwrap_or(defaults.seed),
            ticks: self.ticks.unwrap_or(defaults.ticks),
            capacity: self.capacity.unwrap_or(defaults.capacity),
            dequeue_per_tick: self.dequeue_per_tick.unwrap_or(defaults.dequeue_per_tick),
            resize,
            scheduler,
            flows,
        })
    }
}

impl Scenario {
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        if input.trim().is_empty() {
            return Ok(Scenario::default());
        }
        let parsed: ScenarioInput = toml::from_str(input).context("invalid scenario TOML")?;
        parsed.resolve()
    }

    /// Mean packets offered per tick across all flows.
    pub fn offered_per_tick(&self) -> f64 {
        self.flows.iter().map(|f| f.rate).sum()
    }
}
