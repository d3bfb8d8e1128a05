// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounting a logo into a DOM container.
//!
//! [`LogoMount`] creates a `<canvas>` inside a host element, wires the engine's
//! [`SurfaceLifecycle`] to a [`RafLoop`] and to window `resize` / `mousemove`
//! listeners, and tears all of it down again on [`unmount`](LogoMount::unmount)
//! or drop.
//!
//! State shared between the frame callback and the listeners lives in an
//! `Rc<RefCell<..>>`. Every callback takes it with `try_borrow_mut`, so a
//! callback that races teardown (or re-enters) is a no-op.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use halo_core::backend::Painter;
use halo_core::lifecycle::{FrameOutcome, SurfaceLifecycle};
use halo_core::scheduler::AnimationHandle;
use halo_core::surface::LogoConfig;
use halo_core::tier::{CapabilityTier, TierClassifier};
use halo_core::time::HostTime;
use halo_core::trace::{TraceSink, Tracer};
use halo_render::Sway;
use kurbo::{Point, Rect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use crate::canvas::CanvasSurface;
use crate::raf::RafLoop;

/// Optional knobs for [`LogoMount::new`].
pub struct MountOptions {
    /// Tier classifier.
    pub classifier: TierClassifier,
    /// Container rocking; `None` leaves the container still.
    pub sway: Option<Sway>,
    /// Receives engine events when the `trace` feature is on.
    pub trace: Option<Box<dyn TraceSink>>,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            classifier: TierClassifier::DEFAULT,
            sway: Some(Sway::DEFAULT),
            trace: None,
        }
    }
}

impl core::fmt::Debug for MountOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MountOptions")
            .field("classifier", &self.classifier)
            .field("sway", &self.sway)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}

/// Everything the frame callback and listeners touch.
struct Instance<P: Painter> {
    lifecycle: SurfaceLifecycle<CanvasSurface, P>,
    handle: Option<AnimationHandle>,
    canvas: HtmlCanvasElement,
    container: HtmlElement,
    sway: Option<Sway>,
}

impl<P: Painter> Instance<P> {
    /// Runs one platform tick. Returns whether to request another.
    fn on_frame(&mut self, now: HostTime, listeners: &Listeners) -> bool {
        let Some(handle) = self.handle else {
            return false;
        };
        let outcome = self.lifecycle.frame(handle, now);
        match outcome {
            FrameOutcome::Restarted(h) => self.handle = Some(h),
            FrameOutcome::Cancelled => self.handle = None,
            FrameOutcome::Accepted | FrameOutcome::Skipped => {}
        }
        if matches!(
            outcome,
            FrameOutcome::Accepted | FrameOutcome::Restarted(_)
        ) {
            self.apply_sway(now);
        }
        listeners.sync_pointer(self.lifecycle.pointer_tracking());
        outcome.should_continue()
    }

    fn apply_sway(&self, now: HostTime) {
        let Some(sway) = &self.sway else {
            return;
        };
        let scheduler = self.lifecycle.scheduler();
        let t = scheduler
            .clock()
            .elapsed(now)
            .as_secs_f64(scheduler.timebase());
        let degrees = sway.rotation_degrees(t, self.lifecycle.tier());
        let _ = self
            .container
            .style()
            .set_property("transform", &format!("rotate({degrees}deg)"));
    }
}

/// Window listeners owned by one mount.
struct Listeners {
    window: Window,
    resize: Closure<dyn FnMut()>,
    pointer: Closure<dyn FnMut(MouseEvent)>,
    resize_attached: Cell<bool>,
    pointer_attached: Cell<bool>,
}

impl Listeners {
    /// Adds or removes the `mousemove` listener to match `want`.
    fn sync_pointer(&self, want: bool) {
        if want == self.pointer_attached.get() {
            return;
        }
        let callback = self.pointer.as_ref().unchecked_ref();
        let _ = if want {
            self.window
                .add_event_listener_with_callback("mousemove", callback)
        } else {
            self.window
                .remove_event_listener_with_callback("mousemove", callback)
        };
        self.pointer_attached.set(want);
    }

    fn detach_all(&self) {
        self.sync_pointer(false);
        if self.resize_attached.replace(false) {
            let _ = self.window.remove_event_listener_with_callback(
                "resize",
                self.resize.as_ref().unchecked_ref(),
            );
        }
    }
}

/// A logo mounted into a DOM container.
///
/// Dropping the mount unmounts it.
pub struct LogoMount<P: Painter + 'static> {
    instance: Rc<RefCell<Instance<P>>>,
    listeners: Rc<Listeners>,
    raf: RafLoop,
    mounted: bool,
}

impl<P: Painter + 'static> core::fmt::Debug for LogoMount<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LogoMount")
            .field("raf", &self.raf)
            .field("pointer_listener", &self.listeners.pointer_attached.get())
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<P: Painter + 'static> LogoMount<P> {
    /// Mounts `painter` into `container`, sized by `config`.
    ///
    /// The container is styled as a clipped circle and receives a new
    /// `<canvas>` child. The tier is classified synchronously from the current
    /// window before the first frame is requested.
    pub fn new(
        container: &HtmlElement,
        config: LogoConfig,
        painter: P,
        options: MountOptions,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        style_container(container, &config)?;
        let canvas = create_canvas(&document)?;
        container.append_child(&canvas)?;

        // Without a 2D context the loop still runs but paints nothing.
        let surface = CanvasSurface::new(canvas.clone()).ok();
        let tracer = options.trace.map_or_else(Tracer::none, Tracer::new);
        let lifecycle = SurfaceLifecycle::mount_with(
            config,
            surface,
            painter,
            &crate::viewport(&window),
            crate::timebase(),
            options.classifier,
            tracer,
        );
        let handle = lifecycle.live_handle();
        let instance = Rc::new(RefCell::new(Instance {
            lifecycle,
            handle,
            canvas,
            container: container.clone(),
            sway: options.sway,
        }));

        let resize = {
            let instance = Rc::clone(&instance);
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                if let Ok(mut inst) = instance.try_borrow_mut() {
                    inst.lifecycle
                        .viewport_changed(crate::viewport(&window), crate::now());
                }
            }) as Box<dyn FnMut()>)
        };
        let pointer = {
            let instance = Rc::clone(&instance);
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let Ok(mut inst) = instance.try_borrow_mut() else {
                    return;
                };
                let r = inst.canvas.get_bounding_client_rect();
                let bounds = Rect::new(r.left(), r.top(), r.right(), r.bottom());
                let raw = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
                inst.lifecycle.pointer_moved(raw, bounds);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

        let listeners = Rc::new(Listeners {
            window,
            resize,
            pointer,
            resize_attached: Cell::new(true),
            pointer_attached: Cell::new(false),
        });
        listeners.sync_pointer(instance.borrow().lifecycle.pointer_tracking());

        let raf = {
            let instance = Rc::clone(&instance);
            let listeners = Rc::clone(&listeners);
            RafLoop::new(move |now| match instance.try_borrow_mut() {
                Ok(mut inst) => inst.on_frame(now, &listeners),
                Err(_) => true,
            })
        };
        raf.start();

        Ok(Self {
            instance,
            listeners,
            raf,
            mounted: true,
        })
    }

    /// Re-sizes the logo after the host's configured size changed.
    pub fn set_size(&self, config: LogoConfig) -> Result<(), JsValue> {
        let mut inst = self
            .instance
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("logo is busy"))?;
        style_container(&inst.container, &config)?;
        inst.lifecycle.resize_surface(config);
        Ok(())
    }

    /// The tier in force, or `None` while a callback holds the state.
    #[must_use]
    pub fn tier(&self) -> Option<CapabilityTier> {
        self.instance.try_borrow().ok().map(|i| i.lifecycle.tier())
    }

    /// Returns `true` until [`unmount`](Self::unmount).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Stops the frame loop, removes all listeners and the canvas, and
    /// releases the engine instance. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.raf.stop();
        self.listeners.detach_all();
        if let Ok(mut inst) = self.instance.try_borrow_mut() {
            inst.lifecycle.unmount();
            inst.handle = None;
            inst.canvas.remove();
            let _ = inst.container.style().remove_property("transform");
        }
    }
}

impl<P: Painter + 'static> Drop for LogoMount<P> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Sizes and clips the host container.
fn style_container(container: &HtmlElement, config: &LogoConfig) -> Result<(), JsValue> {
    let s = container.style();
    s.set_property("width", &config.width)?;
    s.set_property("height", &config.height)?;
    s.set_property("border-radius", "50%")?;
    s.set_property("overflow", "hidden")?;
    Ok(())
}

/// Creates the drawing canvas, stretched over its container.
fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let s = canvas.style();
    s.set_property("width", "100%")?;
    s.set_property("height", "100%")?;
    s.set_property("display", "block")?;
    s.set_property("border-radius", "50%")?;
    s.set_property("will-change", "transform")?;
    Ok(canvas)
}
