use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::clock::{FixedStep, FpsCounter, FrameLimiter};
use crate::error::LootError;
use crate::image_grid::{ImageGrid, SpriteSheet};
use crate::input::InputState;
use crate::renderer::Renderer;
use crate::renderer::batch::{SpriteCommand, build_batches};
use crate::scene::SceneHost;

// ── Color ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
}

// ── Game trait ──────────────────────────────────────────────────────────────

pub trait Game {
    fn on_enter(&mut self, _engine: &mut Engine) {}
    fn update(&mut self, engine: &mut Engine);
    fn render(&mut self, engine: &mut Engine);
}

// ── Engine ──────────────────────────────────────────────────────────────────

pub struct Engine {
    /// GPU renderer: WGPU surface, sprite pipeline and uploaded textures.
    pub renderer: Renderer,
    /// Unified input state (keyboard, mouse, pending events).
    pub input: InputState,
    /// Queued sprite draw calls; cleared before each render.
    sprite_commands: Vec<SpriteCommand>,
    dt: f32,
    started: Instant,
    /// Set to `true` by `request_quit()`; the event loop exits after the current tick.
    quit_requested: bool,
    fps: FpsCounter,
    title: String,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    fn from_builder(renderer: Renderer, title: String) -> Self {
        Self {
            renderer,
            input: InputState::new(),
            sprite_commands: Vec::new(),
            dt: 0.0,
            started: Instant::now(),
            quit_requested: false,
            fps: FpsCounter::default(),
            title,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn dt(&self) -> f32 { self.dt }

    /// Seconds since the engine started.
    pub fn elapsed(&self) -> f64 { self.started.elapsed().as_secs_f64() }

    pub fn window_size(&self) -> (u32, u32) {
        let size = self.renderer.window.inner_size();
        (size.width, size.height)
    }

    /// Signal that the application should exit.  The event loop will call
    /// `exit()` after the current update tick completes.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    // ── Resources ──────────────────────────────────────────────────────────

    /// Decode the PNG at `path`, slice it into `rows × cols` cells and upload it.
    pub fn load_sprite_sheet(
        &mut self,
        path: impl AsRef<Path>,
        rows: u32,
        cols: u32,
    ) -> Result<SpriteSheet, LootError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| LootError::Image { path: path.to_path_buf(), source })?
            .to_rgba8();
        let (w, h) = img.dimensions();
        let grid = ImageGrid::new(w, h, rows, cols)?;
        let texture = self.renderer.load_texture(&img, &path.display().to_string());
        log::info!("loaded sprite sheet {} ({rows}x{cols} cells of {}x{})",
            path.display(), grid.cell_w, grid.cell_h);
        Ok(SpriteSheet { texture, grid })
    }

    // ── Drawing ────────────────────────────────────────────────────────────

    /// Queue cell `index` of `sheet` with its top-left corner at window pixel
    /// `(x, y)`, scaled by `scale`.  Out-of-range indices draw nothing.
    pub fn draw_sprite(&mut self, sheet: &SpriteSheet, index: u32, x: f32, y: f32, scale: f32) {
        let Some(cell) = sheet.grid.cell(index) else { return };
        self.sprite_commands.push(SpriteCommand {
            texture: sheet.texture,
            x,
            y,
            width: cell.width as f32 * scale,
            height: cell.height as f32 * scale,
            uv_min: cell.uv_min,
            uv_max: cell.uv_max,
            tint: Color::WHITE.0,
        });
    }

    fn record_frame(&mut self, frame_time: f32) {
        if let Some(fps) = self.fps.record(frame_time) {
            self.renderer
                .window
                .set_title(&format!("{} | {fps:.1} fps", self.title));
        }
    }
}

impl SceneHost for Engine {
    fn dt(&self) -> f32 { self.dt }

    fn drain_events(&mut self) -> Vec<crate::input::InputEvent> {
        self.input.drain_events()
    }

    fn request_quit(&mut self) {
        self.quit_requested = true;
    }
}

// ── EngineBuilder ───────────────────────────────────────────────────────────

pub struct EngineBuilder {
    title: String,
    width: u32,
    height: u32,
    resizable: bool,
    target_ups: u32,
    fps_limit: u32,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            title: "loot".into(),
            width: 800,
            height: 600,
            resizable: true,
            target_ups: 60,
            fps_limit: 30,
        }
    }
}

impl EngineBuilder {
    pub fn with_title(mut self, title: &str) -> Self { self.title = title.into(); self }
    pub fn with_size(mut self, width: u32, height: u32) -> Self { self.width = width; self.height = height; self }
    pub fn with_resizable(mut self, resizable: bool) -> Self { self.resizable = resizable; self }
    pub fn with_ups(mut self, ups: u32) -> Self { self.target_ups = ups; self }

    /// Present at most `fps` frames per second.
    pub fn with_fps_limit(mut self, fps: u32) -> Self { self.fps_limit = fps; self }

    pub fn run(self, game: impl Game + 'static) -> Result<(), winit::error::EventLoopError> {
        let event_loop = EventLoop::new()?;
        let mut app = App {
            step: FixedStep::new(self.target_ups),
            limiter: FrameLimiter::new(self.fps_limit),
            config: self,
            game: Box::new(game),
            engine: None,
            last_instant: None,
        };
        event_loop.run_app(&mut app)
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: EngineBuilder,
    game: Box<dyn Game>,
    engine: Option<Engine>,
    last_instant: Option<Instant>,
    step: FixedStep,
    limiter: FrameLimiter,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(&self.config.title)
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    self.config.width,
                    self.config.height,
                ))
                .with_resizable(self.config.resizable),
        ) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("cannot create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window)) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("{e}");
                event_loop.exit();
                return;
            }
        };

        let mut engine = Engine::from_builder(renderer, self.config.title.clone());

        // Scenes lay themselves out from a resize, so announce the initial size.
        let (w, h) = engine.window_size();
        engine.input.resized(w, h);

        self.game.on_enter(&mut engine);
        if engine.quit_requested {
            event_loop.exit();
        }
        self.engine = Some(engine);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(engine) = self.engine.as_ref() else { return };
        if self.limiter.poll(Instant::now()) {
            engine.renderer.window.request_redraw();
        }
        if let Some(deadline) = self.limiter.deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(engine) = self.engine.as_mut() else { return };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                engine.renderer.resize(size);
                engine.input.resized(size.width, size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                engine.input.mouse_moved(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { button, state, .. } => match state {
                ElementState::Pressed => engine.input.mouse_down(button),
                ElementState::Released => engine.input.mouse_up(button),
            },

            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(x, y) => engine.input.scrolled(x, y),
                MouseScrollDelta::PixelDelta(pos) => {
                    engine.input.scrolled((pos.x / 100.0) as f32, (pos.y / 100.0) as f32)
                }
            },

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => engine.input.key_down(code),
                ElementState::Released => engine.input.key_up(code),
            },

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let elapsed = match self.last_instant {
                    Some(prev) => now.duration_since(prev).as_secs_f32(),
                    None => self.step.step(),
                };
                self.last_instant = Some(now);

                for _ in 0..self.step.advance(elapsed) {
                    engine.dt = self.step.step();
                    self.game.update(engine);
                    if engine.quit_requested {
                        event_loop.exit();
                        return;
                    }
                }

                engine.record_frame(elapsed);

                engine.sprite_commands.clear();
                self.game.render(engine);

                let (vertices, batches) = build_batches(&engine.sprite_commands);
                match engine.renderer.render(&vertices, &batches) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let size = engine.renderer.window.inner_size();
                        engine.renderer.resize(size);
                    }
                    Err(e) => log::error!("render error: {e}"),
                }

                // End of frame cleanup
                engine.input.clear_frame_state();
            }

            _ => {}
        }
    }
}
