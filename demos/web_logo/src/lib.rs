// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: both logo effects mounted side by side with `halo_backend_web`.
//!
//! On start, a row is appended to `<body>` holding a gradient orb and a ray
//! fan. Both log their lifecycle to the console. Narrow the window below
//! 768 px to watch them drop to the constrained tier.
//!
//! The exported [`mount_orb`] and [`mount_ray_fan`] functions mount further
//! logos from JavaScript and return a [`LogoHandle`] to resize or unmount them.
//!
//! Build with: `wasm-pack build --target web demos/web_logo`
//!
//! Then serve `demos/web_logo/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use halo_backend_web::{ConsoleSink, LogoMount, MountOptions};
use halo_core::surface::LogoConfig;
use halo_render::{OrbPainter, RayFanPainter};

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let row = create_row(&document)?;
    body.append_child(&row)?;

    let orb_slot = create_slot(&document)?;
    let rays_slot = create_slot(&document)?;
    row.append_child(&orb_slot)?;
    row.append_child(&rays_slot)?;

    let orb = mount_orb(&orb_slot, "96px".into(), "96px".into())?;
    let rays = mount_ray_fan(&rays_slot, "96px".into(), "96px".into())?;

    // Keep both logos alive for the lifetime of the page.
    core::mem::forget(orb);
    core::mem::forget(rays);
    Ok(())
}

enum Mounted {
    Orb(LogoMount<OrbPainter>),
    RayFan(LogoMount<RayFanPainter>),
}

/// A mounted logo, returned to JavaScript.
///
/// Dropping the handle (or calling `free()` from JavaScript) unmounts it.
#[wasm_bindgen]
pub struct LogoHandle {
    inner: Mounted,
}

impl core::fmt::Debug for LogoHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.inner {
            Mounted::Orb(m) => f.debug_tuple("LogoHandle::Orb").field(m).finish(),
            Mounted::RayFan(m) => f.debug_tuple("LogoHandle::RayFan").field(m).finish(),
        }
    }
}

#[wasm_bindgen]
impl LogoHandle {
    /// Applies new CSS `width` / `height` values.
    #[wasm_bindgen(js_name = "setSize")]
    pub fn set_size(&self, width: String, height: String) -> Result<(), JsValue> {
        let config = LogoConfig::new(width, height);
        match &self.inner {
            Mounted::Orb(m) => m.set_size(config),
            Mounted::RayFan(m) => m.set_size(config),
        }
    }

    /// The tier in force: `"full"` or `"constrained"`.
    pub fn tier(&self) -> Option<String> {
        let tier = match &self.inner {
            Mounted::Orb(m) => m.tier(),
            Mounted::RayFan(m) => m.tier(),
        };
        tier.map(|t| t.as_str().into())
    }

    /// Stops the animation and removes the canvas. Idempotent.
    pub fn unmount(&mut self) {
        match &mut self.inner {
            Mounted::Orb(m) => m.unmount(),
            Mounted::RayFan(m) => m.unmount(),
        }
    }
}

/// Mounts a gradient orb into `container`.
#[wasm_bindgen(js_name = "mountOrb")]
pub fn mount_orb(
    container: &HtmlElement,
    width: String,
    height: String,
) -> Result<LogoHandle, JsValue> {
    let mount = LogoMount::new(
        container,
        LogoConfig::new(width, height),
        OrbPainter::default(),
        options("[halo orb]"),
    )?;
    Ok(LogoHandle {
        inner: Mounted::Orb(mount),
    })
}

/// Mounts a ray fan into `container`.
#[wasm_bindgen(js_name = "mountRayFan")]
pub fn mount_ray_fan(
    container: &HtmlElement,
    width: String,
    height: String,
) -> Result<LogoHandle, JsValue> {
    let mount = LogoMount::new(
        container,
        LogoConfig::new(width, height),
        RayFanPainter::default(),
        options("[halo rays]"),
    )?;
    Ok(LogoHandle {
        inner: Mounted::RayFan(mount),
    })
}

fn options(prefix: &str) -> MountOptions {
    MountOptions {
        trace: Some(Box::new(ConsoleSink::new().with_prefix(prefix))),
        ..MountOptions::default()
    }
}

fn create_row(document: &Document) -> Result<HtmlElement, JsValue> {
    let row: HtmlElement = document.create_element("div")?.dyn_into()?;
    let s = row.style();
    s.set_property("display", "flex")?;
    s.set_property("gap", "48px")?;
    s.set_property("padding", "48px")?;
    s.set_property("align-items", "center")?;
    Ok(row)
}

fn create_slot(document: &Document) -> Result<HtmlElement, JsValue> {
    let slot: HtmlElement = document.create_element("div")?.dyn_into()?;
    slot.style().set_property("flex", "none")?;
    Ok(slot)
}
