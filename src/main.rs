//! Role Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use role_drop::Settings;
    use role_drop::audio::{AudioManager, SoundEffect};
    use role_drop::consts::*;
    use role_drop::renderer::{RenderState, build_scene};
    use role_drop::sim::{Game, TickInput, Viewport};

    /// Game instance holding all state
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        audio: AudioManager,
        input: TickInput,
        last_time: f64,
        /// Sub-millisecond remainder carried between frames
        carry_ms: f64,
        /// Pointer x (CSS px) while the icon is being dragged
        drag_from: Option<f32>,
        density: f32,
    }

    impl App {
        /// Run simulation for the time since the last frame
        fn update(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                (time - self.last_time).max(0.0) + self.carry_ms
            } else {
                0.0
            };
            self.last_time = time;

            let whole = elapsed.floor();
            self.carry_ms = elapsed - whole;
            let dt_ms = (whole as u64).min(MAX_FRAME_MS);

            let events = self.game.advance(dt_ms, &self.input);
            self.input.drag_dx = 0.0;

            for event in &events {
                self.audio.play(SoundEffect::for_event(event));
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.game);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let state = self.game.state();

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&state.score().to_string()));
            }

            if let Some(el) = document.get_element_by_id("status") {
                el.set_text_content(Some(state.status_message()));
            }

            if let Some(el) = document.get_element_by_id("popup") {
                if state.popup_message().is_empty() {
                    let _ = el.set_attribute("class", "hidden");
                } else {
                    el.set_text_content(Some(state.popup_message()));
                    let _ = el.set_attribute("class", "");
                }
            }

            if let Some(el) = document.get_element_by_id("hud-next") {
                match self.game.resume_in_ms() {
                    Some(ms) => {
                        el.set_text_content(Some(&format!("Next icon in {}s", ms.div_ceil(1000))));
                        let _ = el.set_attribute("class", "");
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            if let Some(el) = document.get_element_by_id("hud-autopilot") {
                let class = if self.input.autopilot { "hud-item" } else { "hud-item hidden" };
                let _ = el.set_attribute("class", class);
            }
        }

        /// Pin each role label just above its zone
        fn place_zone_labels(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            for zone in &self.game.layout().zones {
                let id = format!("zone-label-{}", zone.role.slug());
                if let Some(el) = document.get_element_by_id(&id) {
                    let b = zone.bounds;
                    let style = format!(
                        "left:{:.1}px;top:{:.1}px;width:{:.1}px",
                        b.min.x / self.density,
                        b.min.y / self.density,
                        b.width() / self.density,
                    );
                    let _ = el.set_attribute("style", &style);
                    el.set_text_content(Some(zone.role.as_str()));
                }
            }
        }
    }

    /// Size the canvas backing store to its CSS size times the pixel ratio
    fn fit_canvas(canvas: &HtmlCanvasElement) -> Viewport {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        Viewport::new(width as f32, height as f32, dpr as f32)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Role Drop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let viewport = fit_canvas(&canvas);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Game::new(seed, viewport, settings.tuning.clone(), settings.catalog());
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            render_state: None,
            audio: AudioManager::new(&settings.audio),
            input: TickInput {
                drag_dx: 0.0,
                autopilot: settings.autopilot,
            },
            last_time: 0.0,
            carry_ms: 0.0,
            drag_from: None,
            density: viewport.density,
        }));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            viewport.width as u32,
            viewport.height as u32,
        )
        .await;
        app.borrow_mut().render_state = Some(render_state);
        app.borrow().place_zone_labels();

        setup_input_handlers(&canvas, app.clone());
        setup_resize(&canvas, app.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(app);

        log::info!("Role Drop running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Pointer down - grab the icon if the pointer is on it
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut a = app.borrow_mut();
                a.audio.resume();
                let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32) * a.density;
                if a.game.grabs_icon(point) {
                    event.prevent_default();
                    a.drag_from = Some(event.client_x() as f32);
                    let _ = canvas_clone.set_pointer_capture(event.pointer_id());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move - drag delivered immediately
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut a = app.borrow_mut();
                let Some(from) = a.drag_from else { return };
                let x = event.client_x() as f32;
                let dx = (x - from) * a.density;
                a.game.drag(dx);
                a.drag_from = Some(x);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up / cancel - release
        for name in ["pointerup", "pointercancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                app.borrow_mut().drag_from = None;
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let app = app.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let nudge = KEY_NUDGE_DP * a.density;
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => a.input.drag_dx -= nudge,
                    "ArrowRight" | "d" | "D" => a.input.drag_dx += nudge,
                    "i" | "I" => {
                        a.input.autopilot = !a.input.autopilot;
                        log::info!("Autopilot: {}", a.input.autopilot);
                    }
                    "m" | "M" => {
                        let muted = a.audio.toggle_muted();
                        log::info!("Muted: {}", muted);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let viewport = fit_canvas(&canvas);
            let mut a = app.borrow_mut();
            if let Some(ref mut render_state) = a.render_state {
                render_state.resize(viewport.width as u32, viewport.height as u32);
            }
            a.density = viewport.density;
            a.game.resize(viewport);
            a.place_zone_labels();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Headless demo: the autopilot plays a number of rounds on a phone-sized screen.
///
/// Usage: `role-drop [settings.json] [rounds]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use role_drop::Settings;
    use role_drop::sim::{Game, GameEvent, TickInput, Viewport};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Role Drop (native) starting...");
    log::info!("Native mode runs the autopilot headless - run with `trunk serve` for the web version");

    let args: Vec<String> = std::env::args().collect();
    let settings_path = args.get(1).map(std::path::PathBuf::from);
    let rounds: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(8);

    let settings = Settings::load(settings_path.as_deref());
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Seed: {}", seed);

    let mut game = Game::new(
        seed,
        Viewport::new(1080.0, 1920.0, 1.0),
        settings.tuning.clone(),
        settings.catalog(),
    );
    let input = TickInput {
        drag_dx: 0.0,
        autopilot: true,
    };

    const FRAME_MS: u64 = 16;
    while game.stats().rounds() < rounds {
        for event in game.advance(FRAME_MS, &input) {
            if let GameEvent::Landed(outcome) = event {
                println!(
                    "[{:>7} ms] {:<16} {} | {}",
                    game.time_ms(),
                    outcome.service(),
                    outcome.status_message(),
                    outcome.popup_message()
                );
            }
        }
    }

    let stats = game.stats();
    println!(
        "\n{} rounds: {} correct, {} wrong, {} missed. Final score {}",
        stats.rounds(),
        stats.correct,
        stats.wrong,
        stats.missed,
        game.state().score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
