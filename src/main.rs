//! Enviro-Lytix entry point
//!
//! On the web this hosts Eco Jumper on a 2D canvas. Natively it prints a
//! dashboard for the demo history and plays one scripted run.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use enviro_lytix::consts::{GAME_HEIGHT, GAME_WIDTH};
    use enviro_lytix::driver::{GameDriver, LoopControl};
    use enviro_lytix::persistence::Storage;
    use enviro_lytix::platform;
    use enviro_lytix::renderer::shapes::{QUAD_VERTICES, from_clip, scene_vertices};
    use enviro_lytix::renderer::{Scene, build_scene};
    use enviro_lytix::settings::Settings;
    use enviro_lytix::sim::GameAction;

    const CANVAS_ID: &str = "eco-jumper";

    /// Game instance holding the driver and its canvas
    struct Game {
        driver: GameDriver<Box<dyn Storage>>,
        ctx: CanvasRenderingContext2d,
        frame_pending: bool,
    }

    impl Game {
        fn paint(&self) {
            paint_scene(&self.ctx, &build_scene(self.driver.state()));
        }
    }

    fn css(color: [f32; 4]) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (color[0] * 255.0).round() as u8,
            (color[1] * 255.0).round() as u8,
            (color[2] * 255.0).round() as u8,
            color[3]
        )
    }

    fn paint_scene(ctx: &CanvasRenderingContext2d, scene: &Scene) {
        ctx.clear_rect(0.0, 0.0, GAME_WIDTH as f64, GAME_HEIGHT as f64);
        // Each quad is axis-aligned, so its outer corners are enough
        for quad in scene_vertices(scene).chunks_exact(QUAD_VERTICES) {
            let [x0, y0] = from_clip(quad[0]).position;
            let [x1, y1] = from_clip(quad[QUAD_VERTICES - 1]).position;
            ctx.set_fill_style_str(&css(quad[0].color));
            ctx.fill_rect(x0 as f64, y0 as f64, (x1 - x0) as f64, (y1 - y0) as f64);
        }
        for t in &scene.texts {
            let weight = if t.bold { "bold " } else { "" };
            ctx.set_font(&format!("{weight}{}px monospace", t.size));
            ctx.set_text_align(t.anchor.as_css());
            ctx.set_fill_style_str(&css(t.color));
            let _ = ctx.fill_text(&t.text, t.x as f64, t.y as f64);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Enviro-Lytix starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let mut storage = platform::open_storage();
        let settings = Settings::load(&*storage, platform::preferred_theme());
        if let Some(root) = document.document_element() {
            root.class_list()
                .toggle_with_force("dark", settings.theme.is_dark())?;
        }
        // Keep the stored theme in sync with what is displayed
        settings.save(&mut *storage);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(GAME_WIDTH as u32);
        canvas.set_height(GAME_HEIGHT as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let game = Rc::new(RefCell::new(Game {
            driver: GameDriver::new(platform::seed(), storage),
            ctx,
            frame_pending: false,
        }));
        game.borrow().paint();

        setup_input_handlers(&window, &canvas, game)?;

        log::info!("Eco Jumper ready");
        Ok(())
    }

    fn handle_input(game: &Rc<RefCell<Game>>, action: GameAction) {
        let start_loop = {
            let mut g = game.borrow_mut();
            let started = g.driver.input(action);
            g.paint();
            let start = (started || g.driver.state().is_running()) && !g.frame_pending;
            if start {
                g.frame_pending = true;
            }
            start
        };
        if start_loop {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let action = match event.code().as_str() {
                    "Space" | "ArrowUp" => GameAction::InputStart,
                    "ArrowDown" => GameAction::DuckStart,
                    _ => return,
                };
                event.prevent_default();
                handle_input(&game, action);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let action = match event.code().as_str() {
                    "Space" | "ArrowUp" => GameAction::InputEnd,
                    "ArrowDown" => GameAction::DuckEnd,
                    _ => return,
                };
                event.prevent_default();
                handle_input(&game, action);
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse and touch press/release on the canvas
        for (name, action) in [
            ("mousedown", GameAction::InputStart),
            ("touchstart", GameAction::InputStart),
            ("mouseup", GameAction::InputEnd),
            ("touchend", GameAction::InputEnd),
        ] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                handle_input(&game, action);
            });
            canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
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
        let control = {
            let mut g = game.borrow_mut();
            let control = g.driver.frame(time);
            g.paint();
            g.frame_pending = control == LoopControl::Continue;
            control
        };

        if control == LoopControl::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Enviro-Lytix (native) starting...");

    let now = enviro_lytix::platform::now();
    let storage = enviro_lytix::platform::open_storage();
    let settings = enviro_lytix::Settings::load(&*storage, enviro_lytix::platform::preferred_theme());
    let app = enviro_lytix::App::with_sample_data(settings, now);

    print_dashboard(&app, now);
    play_demo_run(storage);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn print_dashboard(app: &enviro_lytix::App, now: chrono::NaiveDateTime) {
    use enviro_lytix::badges;
    use enviro_lytix::coach::{Coach, CoachContext};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    let stats = app.dashboard(now);
    println!("Today: {:.2} kg CO2e (goal {:.2})", stats.total_today, stats.daily_goal);
    println!("This week: {:.2} kg CO2e", stats.total_this_week);
    println!("{}", stats.trend_text());
    println!("EcoPoints: {}  Streak: {} days", stats.total_eco_points, stats.current_streak);
    for day in &stats.weekly_chart {
        println!("  {} {:>6} {:6.2}", day.name, day.label, day.co2e);
    }

    println!("\nBadges:");
    for status in app.badges(now) {
        let mark = if status.unlocked { "x" } else { " " };
        println!("  [{mark}] {} - {}", status.badge.name, status.badge.description);
    }

    let unlocked = badges::unlocked(app.activities(), now.date());
    let ctx = CoachContext {
        activities: app.activities(),
        unlocked_badges: &unlocked,
        daily_goal: app.daily_goal,
        today: now.date(),
    };
    let mut coach = Coach::canned();
    let mut rng = Pcg32::seed_from_u64(enviro_lytix::platform::seed());
    let mut tip = coach.proactive_tip(&ctx, &mut rng);
    log::debug!("Coach tip latency {:?}", tip.delay);
    println!("\nGreen Coach: {}", tip.value.collect_text());
}

/// Let a simple bot play one Eco Jumper run with 16 ms frames
#[cfg(not(target_arch = "wasm32"))]
fn play_demo_run(storage: Box<dyn enviro_lytix::persistence::Storage>) {
    use enviro_lytix::consts::{PLAYER_WIDTH, PLAYER_X};
    use enviro_lytix::driver::{GameDriver, LoopControl};
    use enviro_lytix::renderer::build_scene;
    use enviro_lytix::renderer::shapes::scene_vertices;
    use enviro_lytix::sim::GameAction;

    const MAX_FRAMES: u32 = 20_000;

    let mut driver = GameDriver::new(enviro_lytix::platform::seed(), storage);
    driver.input(GameAction::InputStart);

    let mut time = 0.0;
    for _ in 0..MAX_FRAMES {
        let state = driver.state();
        let front = PLAYER_X + PLAYER_WIDTH;
        let threat = state
            .obstacles
            .iter()
            .any(|o| o.x + o.width > PLAYER_X && o.x - front < state.speed * 7.0);
        if threat && state.player.is_grounded() {
            driver.input(GameAction::InputStart);
        } else if !threat && state.is_jumping {
            driver.input(GameAction::InputEnd);
        }

        if driver.frame(time) == LoopControl::Stop {
            break;
        }
        time += 16.0;
    }

    let state = driver.state();
    let vertices = scene_vertices(&build_scene(state));
    println!(
        "\nEco Jumper: {:?} after {} frames, score {}, best {}",
        state.status,
        state.frame_count,
        state.display_score(),
        state.high_score
    );
    log::debug!("Final frame: {} vertices", vertices.len());
}
