// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedural logo painters for halo.
//!
//! This crate provides the [`Painter`](halo_core::backend::Painter)
//! implementations and a recording surface:
//!
//! - [`OrbPainter`]: a gradient disc with a wandering core and a centered
//!   glow
//! - [`RayFanPainter`]: a gradient disc with a rotating fan of light rays
//! - [`DrawList`]: a [`Surface`](halo_core::backend::Surface) that records
//!   [`DrawCommand`]s, for tests and deferred replay
//! - [`Sway`]: the eased rocking rotation applied to the logo's container
//!
//! Both painters add a pointer-following glow under
//! [`CapabilityTier::Full`](halo_core::tier::CapabilityTier::Full) once the
//! pointer has moved.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Use `std` float math instead of `libm`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod draw_list;
mod glow;
mod motion;
mod orb;
mod rays;
mod sway;

pub use draw_list::{DrawCommand, DrawList};
pub use glow::{POINTER_GLOW_RADIUS, pointer_glow};
pub use motion::{Motion, TierMotion, overlay_due};
pub use orb::{OrbPainter, OrbStyle};
pub use rays::{RayFanPainter, RayFanStyle};
pub use sway::{Sway, SwayConfig};
