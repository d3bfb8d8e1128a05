// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] takes records from a [`Recording`](super::recorder::Recording)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Paints and tier changes become instant events; the target frame rate is
//! additionally emitted as a `target_fps` counter so rate switches show up as
//! a step in the timeline.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use halo_core::time::{HostTime, Timebase};

use crate::recorder::{Record, RecordedEvent};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
pub fn export(records: &[Record], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for record in records {
        let ts = ticks_to_us(record.at, timebase);
        match &record.event {
            RecordedEvent::Mount(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Mount",
                    "cat": "Lifecycle",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "painter": e.painter,
                        "tier": e.tier.as_str(),
                        "width": e.dims.width,
                        "height": e.dims.height,
                        "handle": e.handle.get(),
                    }
                }));
                events.push(fps_counter(ts, e.target_fps));
            }
            RecordedEvent::TierChange(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "TierChange",
                    "cat": "Lifecycle",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "from": e.from.as_str(),
                        "to": e.to.as_str(),
                        "viewport_width": e.viewport_width,
                        "handle": e.handle.get(),
                    }
                }));
                events.push(fps_counter(ts, e.target_fps));
            }
            RecordedEvent::FrameDecision(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "FrameDecision",
                    "cat": "Scheduler",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "handle": e.handle.get(),
                        "delivery": format!("{:?}", e.delivery),
                    }
                }));
            }
            RecordedEvent::Paint(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Paint",
                    "cat": "Render",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "elapsed_us": ticks_to_us(HostTime(e.elapsed.ticks()), timebase),
                        "tier": e.tier.as_str(),
                        "outcome": format!("{:?}", e.outcome),
                    }
                }));
            }
            RecordedEvent::PointerTracking(attached) => {
                events.push(json!({
                    "ph": "i",
                    "name": "PointerTracking",
                    "cat": "Input",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": { "attached": attached }
                }));
            }
            RecordedEvent::Resize(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Resize",
                    "cat": "Lifecycle",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "from": format!("{}x{}", e.from.width, e.from.height),
                        "to": format!("{}x{}", e.to.width, e.to.height),
                    }
                }));
            }
            RecordedEvent::ConfigError(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "ConfigError",
                    "cat": "Lifecycle",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": { "message": e.to_string() }
                }));
            }
            RecordedEvent::Unmount(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Unmount",
                    "cat": "Lifecycle",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "accepted_frames": e.accepted_frames,
                        "cancelled": e.cancelled,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn fps_counter(ts: f64, fps: u32) -> Value {
    json!({
        "ph": "C",
        "name": "target_fps",
        "ts": ts,
        "pid": 0,
        "tid": 0,
        "args": { "fps": fps }
    })
}

fn ticks_to_us(t: HostTime, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(t.ticks()) as f64 / 1000.0
}
