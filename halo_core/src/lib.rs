// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tier classification, frame pacing, and surface lifecycle for procedurally
//! animated logos.
//!
//! `halo_core` holds everything about the animation engine that does not
//! depend on a particular drawing backend. It is `no_std` compatible (with
//! `alloc`) so the same logic runs inside a browser (via
//! `halo_backend_web`) and in plain host-side tests.
//!
//! # Architecture
//!
//! ```text
//!   Viewport ──► TierClassifier ──► CapabilityTier
//!                                        │
//!          ┌─────────────────────────────┤
//!          ▼                             ▼
//!   platform tick ──► FrameScheduler::deliver() ──► FrameTick
//!                                                      │
//!                 ┌────────────────────────────────────┘
//!                 ▼
//!   Painter::paint(surface, PaintInput { t, tier, size, pointer })
//! ```
//!
//! **[`tier`]**: Capability tiers, the injected [`Viewport`](tier::Viewport)
//! signal, and the classifier.
//!
//! **[`debounce`]**: Timestamp-driven trailing-edge debouncer used for
//! resize-triggered re-classification.
//!
//! **[`time`]**: Integral host time, durations, and timebase conversion.
//!
//! **[`clock`]**: [`RenderClock`](clock::RenderClock): loop origin and
//! drift-corrected accepted-frame timestamp.
//!
//! **[`timing`]**: [`FrameTick`](timing::FrameTick) and the per-tier
//! [`PacingConfig`](timing::PacingConfig).
//!
//! **[`scheduler`]**: Minimum-interval frame gate with explicit
//! start/cancel handles.
//!
//! **[`pointer`]**: Pointer normalization for the pointer-reactive glow.
//!
//! **[`surface`]**: Surface dimensions and CSS length configuration.
//!
//! **[`paint`]**: Colors, gradients, and compositing modes.
//!
//! **[`backend`]**: The [`Surface`](backend::Surface) and
//! [`Painter`](backend::Painter) traits backends and painters implement.
//!
//! **[`lifecycle`]**: [`SurfaceLifecycle`](lifecycle::SurfaceLifecycle),
//! which wires everything together per mounted instance.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! engine instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` dispatch (one branch per
//!   call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod clock;
pub mod debounce;
pub mod lifecycle;
pub mod paint;
pub mod pointer;
pub mod scheduler;
pub mod surface;
pub mod tier;
pub mod time;
pub mod timing;
pub mod trace;
