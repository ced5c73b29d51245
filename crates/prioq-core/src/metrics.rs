//! # Prometheus Metrics
//!
//! Renders a [`SchedStats`] snapshot in Prometheus text exposition format.

use std::fmt::Write;

use crate::stats::{QueueStats, SchedStats};

/// Render scheduler statistics as Prometheus text exposition format.
pub fn render_prometheus(stats: &SchedStats) -> String {
    let mut out = String::with_capacity(4096);

    // ── Per-queue series ────────────────────────────────────────

    per_queue(&mut out, stats, "prioq_queue_length", "gauge", "Packets currently queued.", |q| {
        q.qlen as i64
    });
    per_queue(
        &mut out,
        stats,
        "prioq_queue_backlog_bytes",
        "gauge",
        "Bytes currently queued.",
        |q| q.backlog_bytes as i64,
    );
    per_queue(
        &mut out,
        stats,
        "prioq_queue_pkts_quota",
        "gauge",
        "Remaining packet quota in the current round (may be negative).",
        |q| q.pkts_quota,
    );
    per_queue(
        &mut out,
        stats,
        "prioq_queue_bytes_quota",
        "gauge",
        "Remaining byte quota in the current round (may be negative).",
        |q| q.bytes_quota,
    );
    per_queue(
        &mut out,
        stats,
        "prioq_queue_threshold",
        "gauge",
        "Soft length threshold used for eviction.",
        |q| i64::from(q.qlen_thresh),
    );
    per_queue(
        &mut out,
        stats,
        "prioq_queue_enqueued_packets_total",
        "counter",
        "Packets admitted to the queue.",
        |q| q.packets_enqueued as i64,
    );
    per_queue(
        &mut out,
        stats,
        "prioq_queue_dequeued_packets_total",
        "counter",
        "Packets served from the queue.",
        |q| q.packets_dequeued as i64,
    );
    per_queue(
        &mut out,
        stats,
        "prioq_queue_dequeued_bytes_total",
        "counter",
        "Bytes served from the queue.",
        |q| q.bytes_dequeued as i64,
    );
    per_queue(
        &mut out,
        stats,
        "prioq_queue_evictions_total",
        "counter",
        "Head packets evicted from the queue to make room.",
        |q| q.evictions as i64,
    );
    per_queue(
        &mut out,
        stats,
        "prioq_queue_tail_drops_total",
        "counter",
        "Incoming packets for the queue rejected while full.",
        |q| q.tail_drops as i64,
    );

    // ── Aggregate series ────────────────────────────────────────

    scalar(
        &mut out,
        "prioq_capacity",
        "gauge",
        "Aggregate length limit.",
        u64::from(stats.capacity),
    );
    scalar(
        &mut out,
        "prioq_length",
        "gauge",
        "Packets queued across all queues.",
        stats.qlen as u64,
    );
    scalar(
        &mut out,
        "prioq_backlog_bytes",
        "gauge",
        "Bytes queued across all queues.",
        stats.backlog_bytes,
    );
    scalar(&mut out, "prioq_drops_total", "counter", "Evictions plus tail drops.", stats.drops);
    scalar(
        &mut out,
        "prioq_quota_rounds_total",
        "counter",
        "Times all quotas were restored.",
        stats.quota_rounds,
    );
    scalar(&mut out, "prioq_resets_total", "counter", "Scheduler resets.", stats.resets);

    out
}

fn header(out: &mut String, name: &str, kind: &str, help: &str) {
    writeln!(out, "# HELP {name} {help}").unwrap();
    writeln!(out, "# TYPE {name} {kind}").unwrap();
}

fn per_queue(
    out: &mut String,
    stats: &SchedStats,
    name: &str,
    kind: &str,
    help: &str,
    value: impl Fn(&QueueStats) -> i64,
) {
    header(out, name, kind, help);
    for q in &stats.queues {
        writeln!(out, "{name}{{queue=\"{}\"}} {}", q.queue, value(q)).unwrap();
    }
}

fn scalar(out: &mut String, name: &str, kind: &str, help: &str, value: u64) {
    header(out, name, kind, help);
    writeln!(out, "{name} {value}").unwrap();
}
