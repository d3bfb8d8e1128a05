// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory trace recording.
//!
//! A [`SurfaceLifecycle`](halo_core::lifecycle::SurfaceLifecycle) owns its
//! sink as a `Box<dyn TraceSink>`, so [`RecorderSink`] stores events in a
//! shared buffer. Take a [`Recording`] handle before handing the sink over
//! and read the events back through it at any point.
//!
//! Events without a timestamp of their own (mount, pointer tracking, resize,
//! configuration errors, unmount) are stamped with the most recent host time
//! the recorder has seen.

use std::cell::RefCell;
use std::rc::Rc;

use halo_core::surface::LengthError;
use halo_core::time::HostTime;
use halo_core::trace::{
    FrameDecisionEvent, MountEvent, PaintEvent, ResizeEvent, TierChangeEvent, TraceSink,
    UnmountEvent,
};

/// A recorded trace event.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_mount`].
    Mount(MountEvent),
    /// See [`TraceSink::on_tier_change`].
    TierChange(TierChangeEvent),
    /// See [`TraceSink::on_frame_decision`].
    FrameDecision(FrameDecisionEvent),
    /// See [`TraceSink::on_paint`].
    Paint(PaintEvent),
    /// See [`TraceSink::on_pointer_tracking`].
    PointerTracking(bool),
    /// See [`TraceSink::on_resize`].
    Resize(ResizeEvent),
    /// See [`TraceSink::on_config_error`].
    ConfigError(LengthError),
    /// See [`TraceSink::on_unmount`].
    Unmount(UnmountEvent),
}

/// A [`RecordedEvent`] with the host time it was recorded at.
#[derive(Clone, Debug)]
pub struct Record {
    /// Event time, or the latest time seen before an untimed event.
    pub at: HostTime,
    /// The event.
    pub event: RecordedEvent,
}

#[derive(Debug, Default)]
struct Buffer {
    records: Vec<Record>,
    last_time: HostTime,
}

impl Buffer {
    fn push(&mut self, at: Option<HostTime>, event: RecordedEvent) {
        if let Some(at) = at {
            self.last_time = self.last_time.max(at);
        }
        let at = at.unwrap_or(self.last_time);
        self.records.push(Record { at, event });
    }
}

/// Records trace events into a shared buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buffer: Rc<RefCell<Buffer>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle onto this recorder's buffer.
    #[must_use]
    pub fn recording(&self) -> Recording {
        Recording {
            buffer: Rc::clone(&self.buffer),
        }
    }

    fn push(&self, at: Option<HostTime>, event: RecordedEvent) {
        self.buffer.borrow_mut().push(at, event);
    }
}

impl TraceSink for RecorderSink {
    fn on_mount(&mut self, e: &MountEvent) {
        self.push(None, RecordedEvent::Mount(*e));
    }

    fn on_tier_change(&mut self, e: &TierChangeEvent) {
        self.push(Some(e.at), RecordedEvent::TierChange(*e));
    }

    fn on_frame_decision(&mut self, e: &FrameDecisionEvent) {
        self.push(Some(e.now), RecordedEvent::FrameDecision(*e));
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        self.push(Some(e.now), RecordedEvent::Paint(*e));
    }

    fn on_pointer_tracking(&mut self, attached: bool) {
        self.push(None, RecordedEvent::PointerTracking(attached));
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.push(None, RecordedEvent::Resize(*e));
    }

    fn on_config_error(&mut self, e: &LengthError) {
        self.push(None, RecordedEvent::ConfigError(e.clone()));
    }

    fn on_unmount(&mut self, e: &UnmountEvent) {
        self.push(None, RecordedEvent::Unmount(*e));
    }
}

/// Read access to a [`RecorderSink`]'s buffer.
///
/// Stays valid after the sink itself has been dropped.
#[derive(Clone, Debug)]
pub struct Recording {
    buffer: Rc<RefCell<Buffer>>,
}

impl Recording {
    /// Returns a copy of everything recorded so far.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.buffer.borrow().records.clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.borrow().records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Record> {
        std::mem::take(&mut self.buffer.borrow_mut().records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_core::lifecycle::SurfaceLifecycle;
    use halo_core::surface::LogoConfig;
    use halo_core::tier::{CapabilityTier, TierClassifier, Viewport};
    use halo_core::time::Timebase;
    use halo_core::timing::Delivery;
    use halo_core::trace::{PaintOutcome, Tracer};
    use halo_render::{DrawList, OrbPainter};

    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64)";

    fn mount(config: LogoConfig, sink: RecorderSink) -> SurfaceLifecycle<DrawList, OrbPainter> {
        SurfaceLifecycle::mount_with(
            config,
            Some(DrawList::new()),
            OrbPainter::default(),
            &Viewport::new(1280.0, DESKTOP),
            Timebase::MICROS,
            TierClassifier::DEFAULT,
            Tracer::new(Box::new(sink)),
        )
    }

    #[test]
    fn records_mount_frames_and_unmount() {
        let sink = RecorderSink::new();
        let recording = sink.recording();
        let mut logo = mount(LogoConfig::default(), sink);
        let handle = logo.live_handle().unwrap();

        logo.frame(handle, HostTime(1_000));
        logo.frame(handle, HostTime(2_000));
        logo.unmount();

        let records = recording.records();
        assert!(
            matches!(
                records[0].event,
                RecordedEvent::Mount(MountEvent {
                    tier: CapabilityTier::Full,
                    target_fps: 30,
                    ..
                })
            ),
            "got: {records:?}"
        );
        let paints: Vec<_> = records
            .iter()
            .filter_map(|r| match &r.event {
                RecordedEvent::Paint(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(paints.len(), 1, "second tick is inside the interval");
        assert_eq!(paints[0].outcome, PaintOutcome::Painted);
        assert!(
            records.iter().any(|r| matches!(
                r.event,
                RecordedEvent::FrameDecision(FrameDecisionEvent {
                    delivery: Delivery::Skipped,
                    ..
                })
            )),
            "skipped tick is recorded"
        );

        let last = records.last().unwrap();
        assert!(
            matches!(
                last.event,
                RecordedEvent::Unmount(UnmountEvent {
                    accepted_frames: 1,
                    cancelled: true,
                })
            ),
            "got: {last:?}"
        );
        assert_eq!(last.at, HostTime(2_000), "untimed events take the last time");
    }

    #[test]
    fn records_config_error() {
        let sink = RecorderSink::new();
        let recording = sink.recording();
        let _logo = mount(LogoConfig::new("auto", "40px"), sink);

        let records = recording.drain();
        assert!(
            records
                .iter()
                .any(|r| matches!(r.event, RecordedEvent::ConfigError(LengthError::NotANumber(_)))),
            "got: {records:?}"
        );
        assert_eq!(records[0].at, HostTime(0));
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut sink = RecorderSink::new();
        let recording = sink.recording();
        sink.on_pointer_tracking(true);
        assert_eq!(recording.len(), 1);
        assert_eq!(recording.drain().len(), 1);
        assert!(recording.is_empty());
    }
}
