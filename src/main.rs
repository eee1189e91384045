//! Skyguard - air-defense arcade game and Phong lighting demo
//!
//! Runs one of two demos in a single window:
//! `skyguard air-defense` (default) or `skyguard lighting`.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use skyguard::config::{AppConfig, DemoKind};
use skyguard::input::{InputAction, InputMapper};
use skyguard::systems::{ActiveDemo, FramePacer, RenderError, RenderSystem, WindowSystem};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    demo: ActiveDemo,
    pacer: FramePacer,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let demo = ActiveDemo::from_config(&config);
        let pacer = FramePacer::new(
            config.rendering.target_fps,
            config.rendering.max_frame_time,
        );

        Self {
            config,
            window: None,
            render: None,
            demo,
            pacer,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.pacer.begin_frame();
        self.demo.update(dt);

        if let Some(window) = &mut self.window {
            window.update_title(&self.demo.status());
        }

        if let Some(render) = &mut self.render {
            match render.render_frame(&self.demo) {
                Ok(()) => {}
                // Surface was reconfigured; the next frame draws normally
                Err(RenderError::SurfaceLost) => {}
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        self.pacer.end_frame();

        // Request next frame
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let title = self.config.window_title();
        let window = match WindowSystem::create(event_loop, &self.config.window, &title) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.camera.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        log::info!("Window ready: {} ({}x{})", title, render.size().0, render.size().1);
        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.demo.clear_input();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let action =
                        InputMapper::map_keyboard(self.demo.kind(), key, event.state, event.repeat);
                    match action {
                        Some(InputAction::Exit) => {
                            event_loop.exit();
                            return;
                        }
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        Some(action) => {
                            self.demo.apply(action);
                        }
                        None => {}
                    }

                    // Held keys go to the demo's controller
                    self.demo.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging; RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<DemoKind>() {
            Ok(kind) => config.demo.kind = kind,
            Err(e) => {
                log::error!("{}", e);
                return Err(e.into());
            }
        }
    }

    log::info!("Starting Skyguard: {:?}", config.demo.kind);

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
