//! Zombie Siege entry point
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
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use zombie_siege::audio::{AudioManager, SoundEffect};
    use zombie_siege::consts::*;
    use zombie_siege::format_clock;
    use zombie_siege::highscores::save_score;
    use zombie_siege::renderer::{RenderState, build_scene};
    use zombie_siege::sim::GameEvent;
    use zombie_siege::{FrameOutcome, Session, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<RenderState>,
        audio: AudioManager,
        settings: Settings,
        /// Live `setInterval` handles (spawn, countdown)
        intervals: Vec<i32>,
        /// Leaderboard shown, page replaced
        finished: bool,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
            Self {
                session: Session::new(seed, tuning),
                render_state: None,
                audio: AudioManager::new(&settings),
                settings,
                intervals: Vec::new(),
                finished: false,
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if self.finished {
                return;
            }
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = build_scene(
                self.session.state(),
                self.session.aim_line(),
                &self.settings,
            );
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

        /// React to everything the session reported since the last call
        fn handle_events(&mut self) {
            for event in self.session.drain_events() {
                match event {
                    GameEvent::ZombieKilled { score } => {
                        set_text("scoreValue", &score.to_string());
                        self.audio.play(SoundEffect::ZombieKill);
                    }
                    GameEvent::ClockTick { seconds_remaining } => {
                        set_text("timerValue", &format_clock(seconds_remaining));
                    }
                    GameEvent::ShotFired => self.audio.play(SoundEffect::Gunshot),
                    GameEvent::BlockDestroyed => self.audio.play(SoundEffect::BlockBreak),
                    GameEvent::GameOver { score, .. } => {
                        self.clear_intervals();
                        self.audio.play(SoundEffect::GameOver);
                        self.finish(score);
                    }
                    GameEvent::ZombieSpawned { .. } | GameEvent::PauseToggled { .. } => {}
                }
            }
        }

        fn clear_intervals(&mut self) {
            if let Some(window) = web_sys::window() {
                for handle in self.intervals.drain(..) {
                    window.clear_interval_with_handle(handle);
                }
            }
        }

        /// Persist the score, tell the player, swap the page for the leaderboard
        fn finish(&mut self, score: u64) {
            if self.finished {
                return;
            }
            self.finished = true;

            let board = save_score(score);
            let Some(window) = web_sys::window() else {
                return;
            };
            let _ = window.alert_with_message(&format!("Game Over! Your score: {}", score));
            if let Some(body) = window.document().and_then(|d| d.body()) {
                body.set_inner_html(&board.to_html());
            }
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.settings.save();
            self.audio.apply_settings(&self.settings);
            log::info!("Muted: {}", self.settings.muted);
        }
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.set_text_content(Some(text));
        }
    }

    /// Mouse offset (CSS pixels) to playfield pixels
    fn pointer_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let sx = GAME_WIDTH / canvas.client_width().max(1) as f32;
        let sy = GAME_HEIGHT / canvas.client_height().max(1) as f32;
        Vec2::new(event.offset_x() as f32 * sx, event.offset_y() as f32 * sy)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Zombie Siege starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store follows the display's pixel ratio; the playfield stays 900x600
        let dpr = window.device_pixel_ratio();
        let width = (GAME_WIDTH as f64 * dpr) as u32;
        let height = (GAME_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let tuning = Tuning::load();
        let settings = Settings::load();
        set_text("scoreValue", "0");
        set_text("timerValue", &format_clock(tuning.round_seconds));

        let game = Rc::new(RefCell::new(Game::new(seed, tuning, settings)));
        log::info!("Game initialized with seed: {}", game.borrow().session.seed());

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

        setup_keyboard(game.clone());
        setup_pointer(&canvas, game.clone());
        setup_auto_pause(game.clone());
        start_intervals(&game);

        request_animation_frame(game);

        log::info!("Zombie Siege running!");
    }

    fn start_intervals(game: &Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let spawn_ms = game.borrow().session.state().tuning.spawn_interval_ms;

        let callbacks: [(f64, fn(&mut Session)); 2] = [
            (spawn_ms, Session::on_spawn_interval),
            (COUNTDOWN_INTERVAL_MS, Session::on_countdown_interval),
        ];
        for (period_ms, callback) in callbacks {
            let game_cb = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game_cb.borrow_mut();
                callback(&mut g.session);
                g.handle_events();
            });
            match window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            ) {
                Ok(handle) => game.borrow_mut().intervals.push(handle),
                Err(e) => log::error!("setInterval failed: {:?}", e),
            }
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key.starts_with("Arrow") {
                    event.prevent_default();
                }
                if event.repeat() {
                    return;
                }
                let mut g = game.borrow_mut();
                match key.as_str() {
                    "m" | "M" => g.toggle_mute(),
                    _ => g.session.key_down(&key),
                }
                g.handle_events();
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Press: start aiming (also unlocks audio)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                g.session.pointer_down(pointer_pos(&canvas_clone, &event));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .session
                    .pointer_move(pointer_pos(&canvas_clone, &event));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release: fire if the cooldown allows
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.session.pointer_up(js_sys::Date::now());
                g.handle_events();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    g.session.release_keys();
                    if g.settings.auto_pause {
                        g.session.pause();
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.session.release_keys();
                if g.settings.auto_pause {
                    g.session.pause();
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let outcome = {
            let mut g = game.borrow_mut();
            let outcome = g.session.frame();
            g.handle_events();
            if outcome == FrameOutcome::Stepped {
                g.render();
            }
            outcome
        };

        if outcome != FrameOutcome::Halted {
            request_animation_frame(game);
        } else {
            log::info!("Game loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Headless run: simulated 60 Hz frames and 1 s timers until the round ends
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use zombie_siege::highscores::save_score;
    use zombie_siege::sim::GameEvent;
    use zombie_siege::{FrameOutcome, Session, Tuning};

    env_logger::init();
    log::info!("Zombie Siege (native) starting...");
    log::info!("Native mode runs a headless round - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_file(std::path::Path::new(&path)),
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut session = Session::new(seed, tuning);
    log::info!("Headless round with seed {}", session.seed());
    let (mut spawn, mut countdown) = session.timers(0.0);
    let frame_ms = 1000.0 / 60.0;
    let mut now_ms = 0.0;
    let mut shots = 0u32;

    loop {
        now_ms += frame_ms;
        session.run_timers(&mut spawn, &mut countdown, now_ms);

        // Fire at the nearest zombie once the cooldown allows
        let survivor = session.state().survivor.weapon_origin();
        let target = session
            .state()
            .zombies
            .iter()
            .map(|z| z.pos)
            .min_by(|a, b| {
                (a.x - survivor.x)
                    .abs()
                    .total_cmp(&(b.x - survivor.x).abs())
            });
        if let Some(target) = target {
            session.pointer_down(target);
            if session.pointer_up(now_ms) {
                shots += 1;
            }
        }

        if session.frame() == FrameOutcome::Halted {
            break;
        }
    }

    for event in session.drain_events() {
        if let GameEvent::GameOver { reason, score } = event {
            let board = save_score(score);
            println!(
                "Game over ({:?}) after {:.1}s: score {}, {} shots, best {:?}",
                reason,
                now_ms / 1000.0,
                score,
                shots,
                board.top_score()
            );
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
