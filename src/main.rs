//! Drift Canvas entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use drift_canvas::Settings;
    use drift_canvas::consts::*;
    use drift_canvas::renderer::CanvasRenderer;
    use drift_canvas::sim::{self, SceneState};

    /// Scene instance holding all state
    struct Scene {
        state: SceneState,
        renderer: CanvasRenderer,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Scene {
        fn new(seed: u64, renderer: CanvasRenderer, settings: Settings) -> Self {
            Self {
                state: SceneState::new(seed),
                renderer,
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks at a fixed timestep
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                sim::tick(&mut self.state, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            self.renderer.render(&self.state, &self.settings);
        }

        /// Update the FPS readout when the page provides a slot for it
        fn update_hud(&self) {
            if !self.settings.show_fps {
                return;
            }
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("hud-fps") {
                el.set_text_content(Some(&self.fps.to_string()));
            }
        }
    }

    /// Map a mouse event to scene coordinates
    fn mouse_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let sx = CANVAS_WIDTH / canvas.client_width().max(1) as f32;
        let sy = CANVAS_HEIGHT / canvas.client_height().max(1) as f32;
        Vec2::new(event.offset_x() as f32 * sx, event.offset_y() as f32 * sy)
    }

    /// Map a touch to scene coordinates
    fn touch_pos(canvas: &HtmlCanvasElement, touch: &web_sys::Touch) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let sx = CANVAS_WIDTH / canvas.client_width().max(1) as f32;
        let sy = CANVAS_HEIGHT / canvas.client_height().max(1) as f32;
        Vec2::new(
            (touch.client_x() as f32 - rect.left() as f32) * sx,
            (touch.client_y() as f32 - rect.top() as f32) * sy,
        )
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Drift Canvas starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let settings = Settings::load();
        let renderer = CanvasRenderer::new(&canvas).expect("Failed to get 2d context");

        let seed = js_sys::Date::now() as u64;
        let scene = Rc::new(RefCell::new(Scene::new(seed, renderer, settings)));

        log::info!("Scene initialized with seed: {}", seed);

        setup_input_handlers(&canvas, scene.clone());
        request_animation_frame(scene);

        log::info!("Drift Canvas running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
        // Pointer hover attracts nearby shapes
        {
            let scene = scene.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = mouse_pos(&canvas_clone, &event);
                sim::pointer_move(&mut scene.borrow_mut().state, pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click spawns a ripple burst and repels nearby shapes
        {
            let scene = scene.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = mouse_pos(&canvas_clone, &event);
                sim::pointer_down(&mut scene.borrow_mut().state, pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move mirrors hover
        {
            let scene = scene.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = touch_pos(&canvas_clone, &touch);
                    sim::pointer_move(&mut scene.borrow_mut().state, pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start mirrors click
        {
            let scene = scene.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = touch_pos(&canvas_clone, &touch);
                    sim::pointer_down(&mut scene.borrow_mut().state, pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(scene: Rc<RefCell<Scene>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(scene, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(scene: Rc<RefCell<Scene>>, time: f64) {
        {
            let mut s = scene.borrow_mut();

            let dt = if s.last_time > 0.0 {
                ((time - s.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            s.last_time = time;

            s.update(dt, time);
            s.render();
            s.update_hud();
        }

        request_animation_frame(scene);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Drift Canvas (native) starting...");
    log::info!("Rendering requires a browser - run with `trunk serve` for the web version");

    // Headless smoke run of the simulation
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use drift_canvas::consts::SIM_DT;
    use drift_canvas::sim::{self, SceneState};
    use glam::Vec2;

    let mut state = SceneState::new(42);
    sim::pointer_down(&mut state, Vec2::new(400.0, 300.0));
    for _ in 0..1200 {
        sim::tick(&mut state, SIM_DT);
    }

    assert!(state.armed, "title easing should arm after the startup delay");
    assert!(state.ripples.is_empty(), "burst should have fully expired");
    println!(
        "✓ Smoke run passed (fade {:.1}, scale {:.3}, {} shapes)",
        state.text_alpha,
        state.text_scale,
        state.shapes.len()
    );
}
