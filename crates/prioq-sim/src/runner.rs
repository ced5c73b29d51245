//! # Simulation Runner
//!
//! Each tick, every flow offers a random number of packets (mean = its rate).
//! The tick's arrivals are offered in a seeded random order, so any flow can
//! be the one that meets a full scheduler. Then up to `dequeue_per_tick`
//! packets are served.

use std::fmt::Write;

use prioq_core::stats::SchedStats;
use prioq_core::{Packet, PriorityScheduler, SchedPacket};
use rand::rngs::StdRng;
use rand::RngExt as _;
use rand::SeedableRng;
use serde::Serialize;

use crate::scenario::Scenario;

/// Packet tagged with the flow that produced it.
#[derive(Debug)]
struct SimPacket {
    flow: usize,
    inner: Packet,
}

impl SchedPacket for SimPacket {
    fn wire_len(&self) -> u32 {
        self.inner.wire_len()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FlowReport {
    pub name: String,
    pub priority: u32,
    /// Scheduler queue the flow maps to.
    pub queue: usize,
    pub offered: u64,
    pub admitted: u64,
    /// Rejected at enqueue because the scheduler was full.
    pub tail_dropped: u64,
    pub delivered: u64,
    pub delivered_bytes: u64,
}

impl FlowReport {
    /// Delivered packets over offered packets.
    pub fn delivery_ratio(&self) -> f64 {
        if self.offered == 0 {
            0.0
        } else {
            self.delivered as f64 / self.offered as f64
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub seed: u64,
    pub ticks: u64,
    pub flows: Vec<FlowReport>,
    pub scheduler: SchedStats,
}

impl SimReport {
    /// Human-readable per-flow table plus scheduler totals.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        writeln!(
            out,
            "{:<12} {:>4} {:>3} {:>9} {:>9} {:>9} {:>9} {:>7}",
            "flow", "prio", "q", "offered", "admitted", "dropped", "deliver", "ratio"
        )
        .unwrap();
        for f in &self.flows {
            writeln!(
                out,
                "{:<12} {:>4} {:>3} {:>9} {:>9} {:>9} {:>9} {:>6.1}%",
                f.name,
                f.priority,
                f.queue,
                f.offered,
                f.admitted,
                f.tail_dropped,
                f.delivered,
                f.delivery_ratio() * 100.0
            )
            .unwrap();
        }
        let s = &self.scheduler;
        writeln!(
            out,
            "ticks={} queued={} evictions={} tail_drops={} quota_rounds={}",
            self.ticks, s.qlen, s.evictions, s.tail_drops, s.quota_rounds
        )
        .unwrap();
        out
    }
}

pub struct Simulation {
    scenario: Scenario,
    sch: PriorityScheduler<SimPacket>,
    rng: StdRng,
    flows: Vec<FlowReport>,
    next_seq: u64,
    tick: u64,
}

impl Simulation {
    pub fn new(scenario: Scenario) -> anyhow::Result<Self> {
        let sch = PriorityScheduler::with_config(scenario.capacity, scenario.scheduler.clone())?;
        let flows = scenario
            .flows
            .iter()
            .map(|f| FlowReport {
                name: f.name.clone(),
                priority: f.priority,
                queue: scenario.scheduler.prio_map.queue_for(f.priority).get(),
                ..Default::default()
            })
            .collect();
        let rng = StdRng::seed_from_u64(scenario.seed);

        tracing::info!(
            seed = scenario.seed,
            ticks = scenario.ticks,
            capacity = scenario.capacity,
            flows = scenario.flows.len(),
            offered_per_tick = scenario.offered_per_tick(),
            served_per_tick = scenario.dequeue_per_tick,
            "simulation configured"
        );

        Ok(Simulation {
            scenario,
            sch,
            rng,
            flows,
            next_seq: 0,
            tick: 0,
        })
    }

    /// Packets flow `idx` offers this tick: the integer part of its rate,
    /// plus one more with probability equal to the fractional part.
    fn arrivals(&mut self, idx: usize) -> u64 {
        let rate = self.scenario.flows[idx].rate;
        let whole = rate.trunc() as u64;
        let extra = u64::from(self.rng.random::<f64>() < rate.fract());
        whole + extra
    }

    /// Fisher-Yates over the tick's arrivals.
    fn shuffle(&mut self, arrivals: &mut [usize]) {
        for i in (1..arrivals.len()).rev() {
            let j = self.rng.random_range(0..=i);
            arrivals.swap(i, j);
        }
    }

    pub fn step(&mut self) {
        if let Some(resize) = self.scenario.resize {
            if resize.at_tick == self.tick {
                tracing::info!(tick = self.tick, capacity = resize.capacity, "capacity change");
                self.sch.set_capacity(resize.capacity);
            }
        }

        let mut arrivals = Vec::new();
        for idx in 0..self.flows.len() {
            let n = self.arrivals(idx);
            arrivals.extend(std::iter::repeat_n(idx, n as usize));
        }
        self.shuffle(&mut arrivals);
        for idx in arrivals {
            self.offer(idx);
        }

        for _ in 0..self.scenario.dequeue_per_tick {
            let Some(pkt) = self.sch.dequeue() else {
                break;
            };
            let report = &mut self.flows[pkt.flow];
            report.delivered += 1;
            report.delivered_bytes += u64::from(pkt.wire_len());
        }

        tracing::debug!(tick = self.tick, queued = self.sch.len(), "tick done");
        self.tick += 1;
    }

    fn offer(&mut self, idx: usize) {
        let flow = &self.scenario.flows[idx];
        let pkt = SimPacket {
            flow: idx,
            inner: Packet::zeroed(self.next_seq, flow.priority, flow.packet_len),
        };
        let priority = flow.priority;
        self.next_seq += 1;

        let report = &mut self.flows[idx];
        report.offered += 1;
        match self.sch.enqueue(pkt, priority) {
            Ok(()) => report.admitted += 1,
            Err(_) => report.tail_dropped += 1,
        }
    }

    pub fn run(mut self) -> SimReport {
        while self.tick < self.scenario.ticks {
            self.step();
        }
        let report = SimReport {
            seed: self.scenario.seed,
            ticks: self.tick,
            flows: self.flows,
            scheduler: self.sch.stats(),
        };
        tracing::info!(
            queued = report.scheduler.qlen,
            evictions = report.scheduler.evictions,
            tail_drops = report.scheduler.tail_drops,
            drop_rate = report.scheduler.drop_rate(),
            "simulation finished"
        );
        report
    }
}
