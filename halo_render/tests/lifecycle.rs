// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end lifecycle: mount, paced frames, tier switch, unmount.

use halo_core::lifecycle::{FrameOutcome, SurfaceLifecycle};
use halo_core::surface::{LogoConfig, SurfaceDimensions};
use halo_core::tier::{CapabilityTier, Viewport};
use halo_core::time::{HostTime, Timebase};
use halo_render::{DrawCommand, DrawList, OrbPainter, RayFanPainter};
use kurbo::{Point, Rect};

const MS: u64 = 1_000;

fn desktop() -> Viewport {
    Viewport::new(1024.0, "Mozilla/5.0 (Windows NT 10.0; Win64; x64)")
}

fn phone() -> Viewport {
    Viewport::new(1024.0, "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)")
}

#[test]
fn orb_mount_frames_switch_unmount() {
    let mut lc = SurfaceLifecycle::mount(
        LogoConfig::default(),
        Some(DrawList::new()),
        OrbPainter::default(),
        &desktop(),
        Timebase::MICROS,
    );
    assert_eq!(
        lc.surface().unwrap().commands,
        [DrawCommand::SetDimensions(SurfaceDimensions::DEFAULT)]
    );
    lc.surface_mut().unwrap().clear_commands();

    let h = lc.live_handle().unwrap();
    // 60 Hz display: every other tick passes the 30 fps gate.
    let mut accepted = 0;
    for i in 0..60_u64 {
        let now = HostTime(i * 16_667);
        if lc.frame(h, now) == FrameOutcome::Accepted {
            accepted += 1;
        }
    }
    assert_eq!(accepted, 30);
    // Every accepted Full-tier frame draws a disc and a glow.
    assert_eq!(lc.surface().unwrap().fills().count(), 60);

    // Rotate the phone-sized viewport in; after the debounce the tier flips.
    lc.viewport_changed(Viewport::new(400.0, ""), HostTime(1_000 * MS));
    let outcome = lc.frame(h, HostTime(1_150 * MS));
    let FrameOutcome::Restarted(h2) = outcome else {
        panic!("expected a restart, got {outcome:?}");
    };
    assert_eq!(lc.tier(), CapabilityTier::Constrained);
    assert_eq!(lc.scheduler().target_fps(), 15);
    assert!(!lc.pointer_tracking());

    // Stale handle is cancelled; the new one keeps going at 15 fps.
    assert_eq!(lc.frame(h, HostTime(1_250 * MS)), FrameOutcome::Cancelled);
    assert_eq!(lc.frame(h2, HostTime(1_160 * MS)), FrameOutcome::Skipped);

    lc.unmount();
    assert_eq!(lc.live_handle(), None);
    let before = lc.surface().unwrap().len();
    assert_eq!(lc.frame(h2, HostTime(2_000 * MS)), FrameOutcome::Cancelled);
    assert_eq!(lc.surface().unwrap().len(), before, "nothing drawn after unmount");
}

#[test]
fn mobile_signature_starts_constrained() {
    let mut lc = SurfaceLifecycle::mount(
        LogoConfig::new("64px", "64px"),
        Some(DrawList::new()),
        RayFanPainter::default(),
        &phone(),
        Timebase::MICROS,
    );
    assert_eq!(lc.tier(), CapabilityTier::Constrained);
    assert_eq!(lc.scheduler().target_fps(), 30);
    assert!(!lc.pointer_tracking());
    assert_eq!(
        lc.pointer_moved(Point::new(1.0, 1.0), Rect::new(0.0, 0.0, 64.0, 64.0)),
        None
    );

    let h = lc.live_handle().unwrap();
    lc.surface_mut().unwrap().clear_commands();
    assert_eq!(lc.frame(h, HostTime(0)), FrameOutcome::Accepted);
    // t = 0: floor(0) mod 2 == 0, so the six rays are drawn.
    assert_eq!(lc.surface().unwrap().strokes().count(), 6);
}

#[test]
fn pointer_glow_appears_after_first_move() {
    let mut lc = SurfaceLifecycle::mount(
        LogoConfig::default(),
        Some(DrawList::new()),
        RayFanPainter::default(),
        &desktop(),
        Timebase::MICROS,
    );
    let h = lc.live_handle().unwrap();
    lc.surface_mut().unwrap().clear_commands();

    lc.frame(h, HostTime(0));
    assert_eq!(lc.surface().unwrap().fills().count(), 1, "no pointer glow yet");

    lc.pointer_moved(Point::new(130.0, 210.0), Rect::new(100.0, 200.0, 140.0, 240.0));
    lc.surface_mut().unwrap().clear_commands();
    lc.frame(h, HostTime(20 * MS));
    let list = lc.surface().unwrap();
    let glow = list.fills().nth(1).map(|(c, _)| c.center);
    assert_eq!(glow, Some(Point::new(30.0, 10.0)));
}

#[test]
fn detached_surface_skips_painting_but_keeps_pacing() {
    let mut lc = SurfaceLifecycle::mount(
        LogoConfig::default(),
        Some(DrawList::new()),
        OrbPainter::default(),
        &desktop(),
        Timebase::MICROS,
    );
    let h = lc.live_handle().unwrap();
    lc.surface_mut().unwrap().clear_commands();
    lc.surface_mut().unwrap().set_available(false);
    assert_eq!(lc.frame(h, HostTime(0)), FrameOutcome::Accepted);
    assert!(lc.surface().unwrap().is_empty());
    assert_eq!(lc.frame(h, HostTime(MS)), FrameOutcome::Skipped);
}

#[test]
fn drop_unmounts() {
    let lc = SurfaceLifecycle::mount(
        LogoConfig::default(),
        Some(DrawList::new()),
        OrbPainter::default(),
        &desktop(),
        Timebase::MICROS,
    );
    assert!(lc.is_mounted());
    drop(lc);
}
