//! Star Grabber entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use star_grabber::Settings;
    use star_grabber::audio::AudioManager;
    use star_grabber::consts::*;
    use star_grabber::renderer::{RenderState, scene};
    use star_grabber::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    /// Last values written to the HUD, so the DOM is only touched on change
    #[derive(Default)]
    struct HudCache {
        score: Option<u32>,
        high_score: Option<u32>,
        game_over: Option<bool>,
        fps: Option<(bool, u32)>,
    }

    pub struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        settings: Settings,
        audio: AudioManager,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        hud: HudCache,
        /// New best already announced this life
        high_score_logged: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let audio = AudioManager::new(&settings);
            Self {
                state: GameState::new(seed),
                render_state: None,
                settings,
                audio,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                hud: HudCache::default(),
                high_score_logged: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.restart = false;
            }

            for event in self.state.drain_events() {
                self.handle_event(&event);
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        fn handle_event(&mut self, event: &GameEvent) {
            match event {
                GameEvent::HighScore { score } if !self.high_score_logged => {
                    log::info!("New high score: {}", score);
                    self.high_score_logged = true;
                }
                GameEvent::Restarted => self.high_score_logged = false,
                _ => {}
            }
            self.audio.play_event(event);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene::build(&self.state, &self.settings);
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
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let score = self.state.score;
            if self.hud.score != Some(score) {
                set_text(&document, "#hud-score", &format!("Score: {}", score));
                self.hud.score = Some(score);
            }

            let high_score = self.state.high_score;
            if self.hud.high_score != Some(high_score) {
                set_text(
                    &document,
                    "#hud-high-score",
                    &format!("High Score: {}", high_score),
                );
                self.hud.high_score = Some(high_score);
            }

            let game_over = self.state.phase == GamePhase::GameOver;
            if self.hud.game_over != Some(game_over) {
                set_visible(&document, "#try-again", game_over);
                self.hud.game_over = Some(game_over);
            }

            let fps = (self.settings.show_fps, self.fps);
            if self.hud.fps != Some(fps) {
                set_visible(&document, "#hud-fps", fps.0);
                if fps.0 {
                    set_text(&document, "#hud-fps", &format!("FPS: {}", fps.1));
                }
                self.hud.fps = Some(fps);
            }
        }

        /// Request a restart; honored by the next tick only after game over
        fn request_restart(&mut self) {
            self.audio.resume();
            self.input.restart = true;
        }

        fn set_key(&mut self, key: &str, down: bool) -> bool {
            let slot = match key {
                "ArrowUp" => &mut self.input.up,
                "ArrowDown" => &mut self.input.down,
                "ArrowLeft" => &mut self.input.left,
                "ArrowRight" => &mut self.input.right,
                _ => return false,
            };
            *slot = down;
            true
        }

        fn release_keys(&mut self) {
            self.input.up = false;
            self.input.down = false;
            self.input.left = false;
            self.input.right = false;
        }

        fn settings_changed(&mut self) {
            self.audio.apply_settings(&self.settings);
            self.settings.save();
        }
    }

    fn set_text(document: &Document, selector: &str, text: &str) {
        if let Some(el) = document.query_selector(selector).ok().flatten() {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, selector: &str, visible: bool) {
        if let Some(el) = document.query_selector(selector).ok().flatten() {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Star Grabber starting...");

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

        // Backing store follows the device pixel ratio
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Game initialized with seed: {}", seed);

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
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        // Listeners are registered exactly once for the whole session
        setup_input_handlers(game.clone());
        setup_try_again(game.clone());
        setup_blur(game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Star Grabber running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.set_key(&key, true) {
                    event.prevent_default();
                    return;
                }
                if event.repeat() {
                    return;
                }
                match key.as_str() {
                    " " => {
                        event.prevent_default();
                        g.request_restart();
                    }
                    "m" | "M" => {
                        g.settings.toggle_mute();
                        g.settings_changed();
                    }
                    "b" | "B" => {
                        g.settings.toggle_debug_bodies();
                        g.settings_changed();
                    }
                    "f" | "F" => {
                        g.settings.toggle_fps();
                        g.settings_changed();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if game.borrow_mut().set_key(&event.key(), false) {
                    event.prevent_default();
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_try_again(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("try-again") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                game.borrow_mut().request_restart();
            });
            let _ = btn
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("#try-again element missing; restart is keyboard only");
        }
    }

    fn setup_blur(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keys released while unfocused never send keyup
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            game.borrow_mut().release_keys();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Star Grabber (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    let tuning = load_tuning();
    headless_demo(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Optional balance overrides from the JSON file named by STAR_GRABBER_TUNING
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> star_grabber::Tuning {
    use star_grabber::Tuning;

    let Ok(path) = std::env::var("STAR_GRABBER_TUNING") else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Bad tuning file {}: {}; using defaults", path, e);
                Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("Cannot read tuning file {}: {}; using defaults", path, e);
            Tuning::default()
        }
    }
}

/// Run a scripted session: pace the floor and hop until a bomb connects
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo(tuning: star_grabber::Tuning) {
    use star_grabber::consts::SIM_DT;
    use star_grabber::sim::{GameEvent, GameState, TickInput, tick};

    const SECONDS: u64 = 120;

    let seed = 0x5747_4152;
    let mut state = GameState::with_tuning(seed, tuning);
    log::info!("Game initialized with seed: {}", seed);

    let mut stars = 0;
    for frame in 0..SECONDS * 60 {
        // Sweep right then left every four seconds, hopping each second
        let heading_right = (frame / 240).is_multiple_of(2);
        let input = TickInput {
            up: frame % 60 == 30,
            left: !heading_right,
            right: heading_right,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            if let GameEvent::StarCollected { .. } = event {
                stars += 1;
            }
        }
        if state.is_game_over() {
            break;
        }
    }

    log::info!(
        "Demo finished after {:.1}s: score {}, {} stars, {} bombs in play",
        state.time_ticks as f32 * SIM_DT,
        state.score,
        stars,
        state.bombs.len()
    );
    println!(
        "score {} / high score {} / bombs {}",
        state.score,
        state.high_score,
        state.bombs.len()
    );
}
