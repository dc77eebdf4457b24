//! Duel Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use duel_pong::assets::{self, ResourceCache, TextureHandle};
    use duel_pong::consts::*;
    use duel_pong::input::{self, KeyTable};
    use duel_pong::renderer::{RenderState, SpriteFrame, WHITE};
    use duel_pong::sim::{MatchState, Score, tick};
    use glam::Vec2;

    /// Handles drawn every frame, resolved from the cache once at init
    struct SceneTextures {
        background: TextureHandle,
        paddle: TextureHandle,
        ball: TextureHandle,
    }

    /// Game instance holding all state
    struct Game {
        state: MatchState,
        keys: KeyTable,
        render_state: RenderState,
        cache: ResourceCache,
        textures: SceneTextures,
        frame: SpriteFrame,
        last_time: Option<f64>,
        last_score: Score,
    }

    impl Game {
        /// One animation frame: sample input, advance the match by the
        /// elapsed time, draw.
        fn frame(&mut self, time_ms: f64) {
            let dt = match self.last_time {
                Some(last) => ((time_ms - last) / 1000.0) as f32,
                None => 0.0,
            };
            self.last_time = Some(time_ms);

            let input = input::sample(&self.keys);
            tick(&mut self.state, &input, dt);

            if self.state.score != self.last_score {
                log::info!(
                    "Point! Score {} - {}",
                    self.state.score.left,
                    self.state.score.right
                );
                self.last_score = self.state.score;
            }

            self.update_hud();
            self.render();
        }

        /// Compose and submit the frame. Fixed order, background first
        /// and ball last, so the ball always renders on top.
        fn render(&mut self) {
            let background = self.textures.background;
            let paddle = self.textures.paddle;
            let ball = self.textures.ball;

            self.frame.clear();
            self.frame
                .draw(background, Vec2::ZERO, self.state.field, 0.0, WHITE);
            self.frame.draw(
                paddle,
                self.state.left_paddle.position,
                self.state.left_paddle.size,
                0.0,
                WHITE,
            );
            self.frame.draw(
                paddle,
                self.state.right_paddle.position,
                self.state.right_paddle.size,
                0.0,
                WHITE,
            );
            self.frame.draw(
                ball,
                self.state.ball.body.position,
                self.state.ball.body.size,
                0.0,
                WHITE,
            );

            match self.render_state.render(&self.frame, &self.cache) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Mirror the score into the DOM scoreboard, if present
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score-left") {
                el.set_text_content(Some(&self.state.score.left.to_string()));
            }
            if let Some(el) = document.get_element_by_id("score-right") {
                el.set_text_content(Some(&self.state.score.right.to_string()));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duel Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the backing store to CSS pixels
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
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

        // Session assets live in one cache for the whole run
        let mut cache = ResourceCache::new();
        let render_state = RenderState::new(surface, &adapter, width, height, &mut cache).await;

        let textures = SceneTextures {
            background: render_state.load_texture(&mut cache, "background", &assets::background_data()),
            paddle: render_state.load_texture(&mut cache, "paddle", &assets::paddle_data()),
            ball: render_state.load_texture(&mut cache, "ball", &assets::ball_data()),
        };

        let game = Rc::new(RefCell::new(Game {
            state: MatchState::new(FIELD_WIDTH, FIELD_HEIGHT),
            keys: KeyTable::new(),
            render_state,
            cache,
            textures,
            frame: SpriteFrame::new(FIELD_WIDTH, FIELD_HEIGHT),
            last_time: None,
            last_score: Score::default(),
        }));

        setup_keyboard(game.clone());
        request_animation_frame(game);

        log::info!("Duel Pong running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.key_code() as usize;
                if KeyTable::is_bound(code) {
                    // Keep Space/arrows from scrolling the page
                    event.prevent_default();
                }
                game.borrow_mut().keys.set(code, true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.set(event.key_code() as usize, false);
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up events stop arriving once focus leaves, so drop all
        // held state on blur
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.clear();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
            Rc::new(RefCell::new(None));
        let starter = callback.clone();

        *starter.borrow_mut() = Some(Closure::new(move |time: f64| {
            game.borrow_mut().frame(time);
            schedule(callback.borrow().as_ref().unwrap());
        }));
        schedule(starter.borrow().as_ref().unwrap());
    }

    fn schedule(callback: &Closure<dyn FnMut(f64)>) {
        web_sys::window()
            .expect("no window")
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .expect("failed to schedule frame");
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
    log::info!("Duel Pong (native) starting...");
    log::info!("Native windowing is not wired up - serve the web build to play");

    println!("\nRunning headless rally...");
    headless_rally();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_rally() {
    use duel_pong::consts::{FIELD_HEIGHT, FIELD_WIDTH};
    use duel_pong::sim::{MatchState, TickInput, tick};

    let mut state = MatchState::new(FIELD_WIDTH, FIELD_HEIGHT);
    let dt = 1.0_f32 / 120.0;

    let launch = TickInput {
        launch: true,
        ..Default::default()
    };
    tick(&mut state, &launch, dt);
    assert!(!state.ball.stuck, "launch should release the ball");

    let idle = TickInput::default();
    for _ in 0..1200 {
        tick(&mut state, &idle, dt);
        let y = state.ball.body.position.y;
        assert!(
            (0.0..=FIELD_HEIGHT - state.ball.body.size.y).contains(&y),
            "ball left the vertical bounds"
        );
    }

    println!(
        "✓ Rally complete, score {}-{}",
        state.score.left, state.score.right
    );
}
