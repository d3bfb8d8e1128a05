// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`TraceSink`] that logs to the browser console.

use alloc::format;
use alloc::string::String;

use halo_core::surface::LengthError;
use halo_core::trace::{
    FrameDecisionEvent, MountEvent, PaintEvent, ResizeEvent, TierChangeEvent,
    TraceSink, UnmountEvent,
};
use web_sys::console;

/// Logs engine events with `console.log` / `console.warn` / `console.debug`.
///
/// Lifecycle events are always logged. Per-frame events are only logged when
/// constructed with [`verbose`](Self::verbose), since they fire up to 60 times
/// a second.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    prefix: String,
    verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that logs lifecycle events with a `[halo]` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: String::from("[halo]"),
            verbose: false,
        }
    }

    /// Creates a sink that also logs every frame decision and paint.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            ..Self::new()
        }
    }

    /// Replaces the message prefix, e.g. to tell instances apart.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn log(&self, msg: &str) {
        console::log_1(&format!("{} {msg}", self.prefix).into());
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceSink for ConsoleSink {
    fn on_mount(&mut self, e: &MountEvent) {
        self.log(&format!(
            "mount {} {}x{} tier={} fps={} handle={:?}",
            e.painter,
            e.dims.width,
            e.dims.height,
            e.tier.as_str(),
            e.target_fps,
            e.handle
        ));
    }

    fn on_tier_change(&mut self, e: &TierChangeEvent) {
        self.log(&format!(
            "tier {} -> {} (viewport {}px) fps={} handle={:?}",
            e.from.as_str(),
            e.to.as_str(),
            e.viewport_width,
            e.target_fps,
            e.handle
        ));
    }

    fn on_frame_decision(&mut self, e: &FrameDecisionEvent) {
        if self.verbose {
            console::debug_1(
                &format!("{} tick {:?} {:?} {:?}", self.prefix, e.handle, e.now, e.delivery).into(),
            );
        }
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        if self.verbose {
            console::debug_1(
                &format!(
                    "{} frame #{} t={:?} tier={} {:?}",
                    self.prefix,
                    e.frame_index,
                    e.elapsed,
                    e.tier.as_str(),
                    e.outcome
                )
                .into(),
            );
        }
    }

    fn on_pointer_tracking(&mut self, attached: bool) {
        self.log(if attached {
            "pointer tracking on"
        } else {
            "pointer tracking off"
        });
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.log(&format!(
            "resize {}x{} -> {}x{}",
            e.from.width, e.from.height, e.to.width, e.to.height
        ));
    }

    fn on_config_error(&mut self, e: &LengthError) {
        console::warn_1(&format!("{} {e}; drawing nothing", self.prefix).into());
    }

    fn on_unmount(&mut self, e: &UnmountEvent) {
        self.log(&format!(
            "unmount after {} frames (cancelled live loop: {})",
            e.accepted_frames, e.cancelled
        ));
    }
}
