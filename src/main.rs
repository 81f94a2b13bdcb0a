//! Scratch Reveal entry point
//!
//! On the web, binds the scratch surface to a `<canvas>` and forwards pointer
//! input. Natively, runs a scripted scratch to exercise the core.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_card {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::Clamped;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, ImageData, MouseEvent, TouchEvent,
    };

    use scratch_reveal::platform::client_to_local;
    use scratch_reveal::renderer::{RevealFade, as_bytes};
    use scratch_reveal::{ScratchSettings, ScratchSurface, StrokeInput};

    const CANVAS_ID: &str = "scratch-canvas";
    const CELEBRATION_ID: &str = "scratch-celebration";
    const SETTINGS_ATTR: &str = "data-scratch-settings";

    /// Widget instance holding the surface and its canvas
    struct Card {
        surface: ScratchSurface,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        /// Set by the surface's reveal callback
        revealed: Rc<Cell<bool>>,
        fade: Option<RevealFade>,
    }

    impl Card {
        /// Convert a client-space position into surface pixels
        fn local_point(&self, client_x: f32, client_y: f32) -> (f32, f32) {
            let rect = self.canvas.get_bounding_client_rect();
            let p = client_to_local(
                Vec2::new(client_x, client_y),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
                Vec2::new(self.surface.width() as f32, self.surface.height() as f32),
            );
            (p.x, p.y)
        }

        /// Push changed pixels to the canvas
        fn present(&mut self) {
            let Some(rect) = self.surface.take_dirty() else {
                return;
            };
            let pixels = self.surface.frame_region(rect);
            match ImageData::new_with_u8_clamped_array_and_sh(
                Clamped(as_bytes(&pixels)),
                rect.width(),
                rect.height(),
            ) {
                Ok(data) => {
                    if let Err(e) = self.ctx.put_image_data(&data, rect.x0 as f64, rect.y0 as f64) {
                        log::warn!("putImageData failed: {:?}", e);
                    }
                }
                Err(e) => log::warn!("ImageData creation failed: {:?}", e),
            }
        }

        /// Forward one input; returns true if this input revealed the prize
        fn handle(&mut self, input: StrokeInput) -> bool {
            let outcome = self.surface.apply(input);
            if outcome.cleared > 0 {
                self.present();
            }
            if self.revealed.get() && self.fade.is_none() {
                self.fade = Some(RevealFade::start(js_sys::Date::now()));
                let _ = self.canvas.set_attribute("data-state", "revealed");
                if let Ok(event) = web_sys::Event::new("scratch-revealed") {
                    let _ = self.canvas.dispatch_event(&event);
                }
                return true;
            }
            false
        }

        /// Advance the fade; returns false once it has finished
        fn animate(&self, now: f64) -> bool {
            let Some(fade) = self.fade else {
                return false;
            };
            let _ = self
                .canvas
                .style()
                .set_property("opacity", &format!("{:.3}", fade.mask_opacity(now)));

            let document = web_sys::window().and_then(|w| w.document());
            if let Some(el) = document
                .and_then(|d| d.get_element_by_id(CELEBRATION_ID))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = el
                    .style()
                    .set_property("opacity", &format!("{:.3}", fade.celebration_opacity(now)));
            }
            !fade.is_finished(now)
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Scratch Reveal starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(element) = document.get_element_by_id(CANVAS_ID) else {
            log::error!("No #{} element found", CANVAS_ID);
            return;
        };
        let canvas: HtmlCanvasElement = match element.dyn_into() {
            Ok(canvas) => canvas,
            Err(_) => {
                log::error!("#{} is not a canvas", CANVAS_ID);
                return;
            }
        };

        let settings = match canvas.get_attribute(SETTINGS_ATTR) {
            Some(json) => match ScratchSettings::from_json(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("Invalid {}: {}", SETTINGS_ATTR, e);
                    return;
                }
            },
            None => ScratchSettings::default(),
        };

        let mut surface = match ScratchSurface::from_settings(&settings) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Cannot create scratch surface: {}", e);
                return;
            }
        };
        let revealed = Rc::new(Cell::new(false));
        {
            let revealed = revealed.clone();
            surface.on_revealed(move || revealed.set(true));
        }

        canvas.set_width(settings.width);
        canvas.set_height(settings.height);

        let ctx: CanvasRenderingContext2d = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
        {
            Some(ctx) => ctx,
            None => {
                log::error!("2D canvas context unavailable");
                return;
            }
        };

        let card = Rc::new(RefCell::new(Card {
            surface,
            canvas: canvas.clone(),
            ctx,
            revealed,
            fade: None,
        }));
        card.borrow_mut().present();

        setup_input_handlers(&canvas, card);

        log::info!(
            "Scratch card ready ({}x{}, reveal at {}%)",
            settings.width,
            settings.height,
            settings.threshold_percent
        );
    }

    /// Forward an input and kick off the fade loop if it revealed
    fn dispatch(card: &Rc<RefCell<Card>>, input: StrokeInput) {
        let revealed_now = card.borrow_mut().handle(input);
        if revealed_now {
            request_animation_frame(card.clone());
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, card: Rc<RefCell<Card>>) {
        // Mouse down - begin stroke
        {
            let card = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, y) = card
                    .borrow()
                    .local_point(event.client_x() as f32, event.client_y() as f32);
                dispatch(&card, StrokeInput::Begin { x, y });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - ignored by the surface unless a stroke is active
        {
            let card = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, y) = card
                    .borrow()
                    .local_point(event.client_x() as f32, event.client_y() as f32);
                dispatch(&card, StrokeInput::Continue { x, y });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up / leave - end stroke
        for name in ["mouseup", "mouseleave"] {
            let card = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&card, StrokeInput::End);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start / move
        for (name, begin) in [("touchstart", true), ("touchmove", false)] {
            let card = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let (x, y) = card
                        .borrow()
                        .local_point(touch.client_x() as f32, touch.client_y() as f32);
                    let input = if begin {
                        StrokeInput::Begin { x, y }
                    } else {
                        StrokeInput::Continue { x, y }
                    };
                    dispatch(&card, input);
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end / cancel
        for name in ["touchend", "touchcancel"] {
            let card = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                dispatch(&card, StrokeInput::End);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(card: Rc<RefCell<Card>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            fade_loop(card);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn fade_loop(card: Rc<RefCell<Card>>) {
        let running = card.borrow().animate(js_sys::Date::now());
        if running {
            request_animation_frame(card);
        } else {
            log::info!("Reveal fade finished");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_card::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Scratch Reveal (native) starting...");
    log::info!("Native mode runs a scripted scratch - build for wasm32 to use the canvas widget");

    if let Err(e) = run_demo() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Zig-zag across a default card until it reveals, then print the mask
#[cfg(not(target_arch = "wasm32"))]
fn run_demo() -> scratch_reveal::ScratchResult<()> {
    use scratch_reveal::{ScratchSettings, ScratchSurface, StrokeInput};
    use std::cell::Cell;
    use std::rc::Rc;

    let settings = match std::env::args().nth(1) {
        Some(json) => ScratchSettings::from_json(&json)?,
        None => ScratchSettings::default(),
    };
    let mut surface = ScratchSurface::from_settings(&settings)?;

    let fired = Rc::new(Cell::new(0u32));
    {
        let fired = fired.clone();
        surface.on_revealed(move || fired.set(fired.get() + 1));
    }

    let (w, h) = (settings.width as f32, settings.height as f32);
    let step = settings.brush_radius * 1.5;
    let mut y = 0.0;
    let mut events = 0;
    while y <= h && !surface.is_revealed() {
        surface.apply(StrokeInput::Begin { x: 0.0, y });
        let mut x = 0.0;
        while x < w {
            x += step;
            surface.apply(StrokeInput::Continue { x, y: y + step * 0.25 });
            events += 1;
        }
        surface.apply(StrokeInput::End);
        log::info!(
            "Row at y={:.0}: {:.1}% cleared ({})",
            y,
            surface.coverage_percent(),
            surface.state().as_str()
        );
        y += step;
    }

    println!(
        "{} after {} move events, {:.1}% cleared, reveal fired {} time(s)",
        surface.state().as_str(),
        events,
        surface.coverage_percent(),
        fired.get()
    );

    // Coarse preview: '#' covered, '.' cleared
    let cell = (settings.width / 60).max(1);
    for row in (0..settings.height).step_by((cell * 2) as usize) {
        let line: String = (0..settings.width)
            .step_by(cell as usize)
            .map(|col| match surface.mask().alpha_at(col, row) {
                Some(0) => '.',
                _ => '#',
            })
            .collect();
        println!("{line}");
    }

    Ok(())
}
