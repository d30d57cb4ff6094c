//! Coin Crawl entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use coin_crawl::audio::{AudioManager, SoundEffect};
    use coin_crawl::consts::*;
    use coin_crawl::persistence::LocalStore;
    use coin_crawl::sim::{EntityRef, Facing, GamePhase, GameSession, TickInput, tick};
    use coin_crawl::ui::{self, Hud};
    use coin_crawl::{Action, Settings};

    /// Frame deltas above this are treated as a stall
    const MAX_FRAME_DT: f32 = 4.0;

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        store: LocalStore,
        settings: Settings,
        audio: AudioManager,
        input: TickInput,
        last_time: f64,
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let store = LocalStore;
            let settings = Settings::default();
            let audio = AudioManager::new(&settings);
            Self {
                session: GameSession::new(seed),
                store,
                settings,
                audio,
                input: TickInput::default(),
                last_time: 0.0,
                last_phase: GamePhase::Menu,
            }
        }

        /// Run one simulation tick and route its events
        fn update(&mut self, dt: f32) {
            let dt = dt.min(MAX_FRAME_DT);
            let input = std::mem::take(&mut self.input);
            tick(&mut self.session, &input, dt, &mut self.store);

            for event in self.session.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }
        }

        /// Draw the arena as flat boxes
        fn render(&self, ctx: &CanvasRenderingContext2d) {
            ctx.set_fill_style_str("#1d2b2f");
            ctx.fill_rect(0.0, 0.0, WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64);

            ctx.set_fill_style_str("#355157");
            ctx.fill_rect(
                ARENA_MIN_X as f64,
                ARENA_TOP as f64,
                (ARENA_MAX_X - ARENA_MIN_X) as f64,
                (ARENA_BOTTOM - ARENA_TOP) as f64,
            );

            for entity in self.session.entities() {
                let color = match entity {
                    EntityRef::Player(_) => "#e8e8e8",
                    EntityRef::Enemy(_) => "#b22222",
                    EntityRef::Coin(_) => "#f2c230",
                };
                let pos = entity.pos();
                let size = entity.size();
                ctx.set_fill_style_str(color);
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);

                // Facing notch on walkers
                if let Some(facing) = entity.facing() {
                    let (nx, ny) = match facing {
                        Facing::Left => (0.0, size.y / 2.0 - 3.0),
                        Facing::Right => (size.x - 6.0, size.y / 2.0 - 3.0),
                        Facing::Up => (size.x / 2.0 - 3.0, 0.0),
                        Facing::Down => (size.x / 2.0 - 3.0, size.y - 6.0),
                    };
                    ctx.set_fill_style_str("#151c23");
                    ctx.fill_rect((pos.x + nx) as f64, (pos.y + ny) as f64, 6.0, 6.0);
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = Hud::from_session(&self.session);

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&hud.score));
            }
            if let Some(el) = document.get_element_by_id("hud-health") {
                el.set_text_content(Some(&hud.health));
            }
            if let Some(el) = document.get_element_by_id("hud-health-bar") {
                let _ = el.set_attribute("style", &format!("width: {}px", hud.health_bar_width));
            }

            let phase = self.session.phase;
            if phase == self.last_phase {
                return;
            }
            self.last_phase = phase;

            if let Some(el) = document.get_element_by_id("menu") {
                let class = if phase == GamePhase::Menu { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("end-screen") {
                let class = if phase == GamePhase::End { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
            if phase == GamePhase::End {
                if let Some(el) = document.get_element_by_id("end-title") {
                    el.set_text_content(Some(ui::GAME_OVER_TITLE));
                }
                if let Some(el) = document.get_element_by_id("end-summary") {
                    el.set_text_content(hud.summary.as_deref());
                }
                if let Some(el) = document.get_element_by_id("end-best") {
                    el.set_text_content(hud.best.as_deref());
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Coin Crawl starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas");
            return;
        };
        canvas.set_width(WINDOW_WIDTH as u32);
        canvas.set_height(WINDOW_HEIGHT as u32);

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("No 2d context");
            return;
        };

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        if let Some(el) = document.get_element_by_id("start-btn") {
            el.set_text_content(Some(ui::START_LABEL));
        }

        setup_key_handlers(game.clone());
        setup_start_button(game.clone());
        setup_focus_handlers(game.clone());

        // Start game loop
        request_animation_frame(game, Rc::new(ctx));

        log::info!("Coin Crawl running!");
    }

    fn setup_key_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key_code(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().session.controls.press(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key_code(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().session.controls.release(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                // Audio needs a user gesture before it will play
                g.audio.resume();
                g.input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_focus_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };

        // Window blur: keyup never arrives, so let go of everything
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.session.controls.release_all();
                let blurred = g.settings.blurred();
                g.audio.apply_settings(&blurred);
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                let settings = g.settings.clone();
                g.audio.apply_settings(&settings);
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, ctx: Rc<CanvasRenderingContext2d>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, ctx, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, ctx: Rc<CanvasRenderingContext2d>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Delta in frames at the nominal rate
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) * FRAMES_PER_SECOND as f64 / 1000.0) as f32
            } else {
                FRAME_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render(&ctx);
            g.update_hud();
        }

        request_animation_frame(game, ctx);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Crawl (native) starting...");
    log::info!("Native mode plays a headless demo run - build for wasm32 to play yourself");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless driver: a greedy bot chases the nearest coin until it dies
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use coin_crawl::consts::*;
    use coin_crawl::sim::{GameEvent, GamePhase, GameSession, TickInput, tick};
    use coin_crawl::ui::Hud;
    use coin_crawl::{Action, Controls, MemoryStore, Tuning};

    /// Give up after five minutes of game time
    const MAX_TICKS: u64 = 5 * 60 * FRAMES_PER_SECOND as u64;
    /// Dead zone so the bot doesn't jitter around a coin
    const STEER_SLACK: f32 = 4.0;

    pub fn run() {
        let seed = std::env::args()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0)
            });

        // Native runs keep the high score in memory; only the browser build persists it
        let mut store = MemoryStore::new();

        let mut session = GameSession::with_tuning(seed, load_tuning());
        log::info!("Seed {} (high score is not kept between native runs)", seed);

        tick(&mut session, &TickInput { start: true }, FRAME_DT, &mut store);

        while session.phase == GamePhase::Playing && session.time_ticks < MAX_TICKS {
            let wanted = wanted_actions(&session);
            apply(&mut session.controls, &wanted);

            tick(&mut session, &TickInput::default(), FRAME_DT, &mut store);

            for event in session.drain_events() {
                match event {
                    GameEvent::PlayerHit { health, .. } => log::debug!("Ouch, {} HP", health),
                    GameEvent::CoinsRespawned { count } => log::info!("{} new coins", count),
                    _ => {}
                }
            }
        }

        if session.phase == GamePhase::Playing {
            log::info!("Time limit reached");
            session.end_game(&mut store);
        }

        let hud = Hud::from_session(&session);
        match serde_json::to_string_pretty(&hud) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not encode summary: {}", e),
        }
    }

    /// Tuning overrides from the file named by `COIN_CRAWL_TUNING`
    fn load_tuning() -> Tuning {
        let Ok(path) = std::env::var("COIN_CRAWL_TUNING") else {
            return Tuning::default();
        };
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}", path, e);
                return Tuning::default();
            }
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    /// Directions toward the nearest coin
    fn wanted_actions(session: &GameSession) -> Vec<Action> {
        let player = &session.player;
        let center = player.pos + player.size / 2.0;

        let Some(target) = session
            .coins
            .coins()
            .iter()
            .map(|c| c.pos + c.size / 2.0)
            .min_by(|a, b| {
                a.distance_squared(center)
                    .total_cmp(&b.distance_squared(center))
            })
        else {
            return Vec::new();
        };

        let delta = target - center;
        let mut wanted = Vec::with_capacity(2);
        if delta.x < -STEER_SLACK {
            wanted.push(Action::MoveLeft);
        } else if delta.x > STEER_SLACK {
            wanted.push(Action::MoveRight);
        }
        if delta.y < -STEER_SLACK {
            wanted.push(Action::MoveUp);
        } else if delta.y > STEER_SLACK {
            wanted.push(Action::MoveDown);
        }
        wanted
    }

    fn apply(controls: &mut Controls, wanted: &[Action]) {
        for action in Action::ALL {
            if wanted.contains(&action) {
                controls.press(action);
            } else {
                controls.release(action);
            }
        }
    }
}
