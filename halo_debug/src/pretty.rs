// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to milliseconds using a [`Timebase`].

use std::io::Write;

use halo_core::surface::LengthError;
use halo_core::time::{Duration, HostTime, Timebase};
use halo_core::trace::{
    FrameDecisionEvent, MountEvent, PaintEvent, ResizeEvent, TierChangeEvent, TraceSink,
    UnmountEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
    frames: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self::new(Box::new(std::io::stderr()), timebase)
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self::with_writer(writer, timebase)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self {
            writer,
            timebase,
            frames: true,
        }
    }

    /// Leaves out per-tick `[tick]` lines, keeping paints and lifecycle
    /// events.
    #[must_use]
    pub fn without_ticks(mut self) -> Self {
        self.frames = false;
        self
    }

    /// Returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ticks_to_ms(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1_000_000.0
    }

    fn host_ms(&self, t: HostTime) -> f64 {
        self.ticks_to_ms(t.ticks())
    }

    fn duration_ms(&self, d: Duration) -> f64 {
        self.ticks_to_ms(d.ticks())
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_mount(&mut self, e: &MountEvent) {
        let _ = writeln!(
            self.writer,
            "[mount] painter={} size={}x{} tier={} fps={} handle={}",
            e.painter,
            e.dims.width,
            e.dims.height,
            e.tier.as_str(),
            e.target_fps,
            e.handle.get(),
        );
    }

    fn on_tier_change(&mut self, e: &TierChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[tier] at={:.3}ms {} -> {} viewport={}px fps={} handle={}",
            self.host_ms(e.at),
            e.from.as_str(),
            e.to.as_str(),
            e.viewport_width,
            e.target_fps,
            e.handle.get(),
        );
    }

    fn on_frame_decision(&mut self, e: &FrameDecisionEvent) {
        if !self.frames {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[tick] now={:.3}ms handle={} delivery={:?}",
            self.host_ms(e.now),
            e.handle.get(),
            e.delivery,
        );
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        let _ = writeln!(
            self.writer,
            "[paint] frame={} now={:.3}ms t={:.3}ms tier={} outcome={:?}",
            e.frame_index,
            self.host_ms(e.now),
            self.duration_ms(e.elapsed),
            e.tier.as_str(),
            e.outcome,
        );
    }

    fn on_pointer_tracking(&mut self, attached: bool) {
        let state = if attached { "on" } else { "off" };
        let _ = writeln!(self.writer, "[pointer] tracking={state}");
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        let _ = writeln!(
            self.writer,
            "[resize] {}x{} -> {}x{}",
            e.from.width, e.from.height, e.to.width, e.to.height,
        );
    }

    fn on_config_error(&mut self, e: &LengthError) {
        let _ = writeln!(self.writer, "[config] {e}");
    }

    fn on_unmount(&mut self, e: &UnmountEvent) {
        let _ = writeln!(
            self.writer,
            "[unmount] frames={} cancelled={}",
            e.accepted_frames, e.cancelled,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_core::scheduler::FrameScheduler;
    use halo_core::surface::SurfaceDimensions;
    use halo_core::tier::CapabilityTier;
    use halo_core::timing::Delivery;
    use halo_core::trace::PaintOutcome;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_paint() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::MICROS);
        sink.on_paint(&PaintEvent {
            frame_index: 3,
            now: HostTime(1_500_000),
            elapsed: Duration(100_000),
            tier: CapabilityTier::Full,
            outcome: PaintOutcome::Painted,
        });
        let output = output(sink);
        assert!(output.starts_with("[paint]"), "got: {output}");
        assert!(output.contains("frame=3"), "got: {output}");
        assert!(output.contains("now=1500.000ms"), "got: {output}");
        assert!(output.contains("t=100.000ms"), "got: {output}");
        assert!(output.contains("tier=full"), "got: {output}");
    }

    #[test]
    fn lifecycle_lines() {
        let handle = FrameScheduler::new(Timebase::MICROS).start(30);
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::MICROS);
        sink.on_mount(&MountEvent {
            painter: "orb",
            tier: CapabilityTier::Constrained,
            dims: SurfaceDimensions::DEFAULT,
            target_fps: 15,
            handle,
        });
        sink.on_resize(&ResizeEvent {
            from: SurfaceDimensions::DEFAULT,
            to: SurfaceDimensions::new(64, 64),
        });
        sink.on_config_error(&LengthError::NotANumber("auto".into()));
        sink.on_unmount(&UnmountEvent {
            accepted_frames: 9,
            cancelled: true,
        });
        let output = output(sink);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4, "got: {output}");
        assert!(lines[0].contains("painter=orb size=40x40"), "got: {output}");
        assert_eq!(lines[1], "[resize] 40x40 -> 64x64");
        assert!(lines[2].starts_with("[config]"), "got: {output}");
        assert_eq!(lines[3], "[unmount] frames=9 cancelled=true");
    }

    #[test]
    fn ticks_can_be_left_out() {
        let handle = FrameScheduler::new(Timebase::MICROS).start(30);
        let mut sink =
            PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::MICROS).without_ticks();
        sink.on_frame_decision(&FrameDecisionEvent {
            handle,
            now: HostTime(0),
            delivery: Delivery::Skipped,
        });
        sink.on_pointer_tracking(true);
        assert_eq!(output(sink), "[pointer] tracking=on\n");
    }
}
