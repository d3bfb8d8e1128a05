// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for halo.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`CanvasSurface`]: [`Surface`] over a canvas 2D context
//! - [`LogoMount`]: DOM mounting, listener management, and teardown
//! - [`ConsoleSink`]: trace sink logging to the browser console
//!
//! [`Surface`]: halo_core::backend::Surface
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Forward engine events to the sink passed in
//!   [`MountOptions::trace`].

#![no_std]

extern crate alloc;

mod canvas;
mod console;
mod mount;
mod raf;

pub use canvas::CanvasSurface;
pub use console::ConsoleSink;
pub use mount::{LogoMount, MountOptions};
pub use raf::RafLoop;

use halo_core::tier::Viewport;
use halo_core::time::{HostTime, Timebase};
use web_sys::Window;

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks. Use [`timebase`] to
/// convert to nanoseconds.
#[must_use]
pub fn now() -> HostTime {
    raf::millis_to_host_time(raf::performance_now())
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::MICROS
}

/// Samples the window's viewport signal: `innerWidth` and the user agent.
///
/// A missing width becomes `NaN`, which never classifies as constrained on
/// its own. A missing user agent becomes empty.
#[must_use]
pub fn viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::NAN);
    let agent = window.navigator().user_agent().unwrap_or_default();
    Viewport::new(width, agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timebase_is_microsecond() {
        let tb = timebase();
        // 1 tick = 1 µs = 1000 ns
        assert_eq!(tb.ticks_to_nanos(1), 1000);
        assert_eq!(tb.ticks_to_nanos(1_000_000), 1_000_000_000);
    }

    #[test]
    fn raf_timestamps_become_microseconds() {
        assert_eq!(raf::millis_to_host_time(16.5), HostTime(16_500));
        assert_eq!(raf::millis_to_host_time(0.0), HostTime(0));
        assert_eq!(raf::millis_to_host_time(-1.0), HostTime(0), "saturates");
    }
}
