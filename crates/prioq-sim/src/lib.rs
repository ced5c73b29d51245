//! # prioq-sim
//!
//! Deterministic traffic simulator for the prioq scheduler. A scenario
//! describes a set of flows (priority, packet size, mean rate per tick), a
//! per-tick service budget and the scheduler configuration; the runner
//! reports per-flow delivery next to the scheduler's own statistics.

pub mod runner;
pub mod scenario;

pub use runner::{FlowReport, SimReport, Simulation};
pub use scenario::{Flow, Scenario};
