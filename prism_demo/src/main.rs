//! # Prism Demo
//!
//! Opens a window and runs the Prism frame loop over a small spinning scene.
//!
//! Controls: WASD / arrows move, Space / X go up / down, Shift faster,
//! Ctrl slower, hold the right mouse button to look around, Escape quits.

mod config;
mod console_renderer;
mod demo_scene;
mod log_bridge;

use prism_engine::prism::frame::{FrameDriver, FrameOutcome, FrameTimer};
use prism_engine::prism::input::InputState;
use prism_engine::prism::resource::ResourceManager;
use prism_engine::prism::scene::Scene;
use prism_engine::prism::Engine;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use config::DemoConfig;
use console_renderer::ConsoleRenderer;
use log_bridge::LogBridge;

/// Main application state
struct App {
    config: DemoConfig,
    window: Option<Window>,
    /// Keeps the registry references alive for the whole run
    _resources: ResourceManager,
    scene: Scene,
    renderer: ConsoleRenderer,
    driver: FrameDriver,
    input: InputState,
    timer: FrameTimer,
}

impl App {
    fn new(config: DemoConfig) -> prism_engine::prism::Result<Self> {
        let (resources, scene) = demo_scene::build(&config)?;
        let renderer = ConsoleRenderer::new(config.width, config.height, config.stats_interval);

        Ok(Self {
            config,
            window: None,
            _resources: resources,
            scene,
            renderer,
            driver: FrameDriver::new(),
            input: InputState::new(),
            timer: FrameTimer::new(),
        })
    }

    /// Runs one update + render pass.
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let time = self.timer.tick();
        match self.driver.run_frame(&mut self.scene, &mut self.renderer, &self.input, time) {
            Ok(FrameOutcome::Continue) => {}
            Ok(FrameOutcome::Quit) => {
                log::info!("Escape pressed, exiting...");
                event_loop.exit();
            }
            Err(e) => {
                log::error!("Frame failed: {}", e);
                event_loop.exit();
            }
        }
        self.input.end_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let size = window.inner_size();
                log::info!("Window created ({}x{})", size.width, size.height);
                // physical size may differ from the requested logical size
                self.driver.notify_resize(size.width, size.height);
                self.timer = FrameTimer::new();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.driver.notify_resize(size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.set_key(code, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { state, button: MouseButton::Right, .. } => {
                self.input.set_look_active(state == ElementState::Pressed);
            }
            WindowEvent::Focused(false) => {
                self.input.clear();
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.input.add_mouse_delta(dx as f32, dy as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Engine::set_logger(LogBridge);

    log::info!("Starting Prism Demo");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(DemoConfig::default())?;
    event_loop.run_app(&mut app)?;

    let stats = app.driver.stats();
    log::info!("Stopped after {} frames ({} draws, {} bytes of constants and vertices)",
        stats.frames_rendered, stats.draws_submitted, app.renderer.bytes_uploaded());
    Ok(())
}
