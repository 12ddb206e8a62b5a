use anyhow::Result;
use log::{info, warn};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Fullscreen, Window, WindowBuilder},
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::InputManager;
use game::menu::Scene;
use game::session::Session;
use game::settings::{DisplayMode, DisplaySink, JsonFileStore, SettingsService};

/// Applies display settings to the winit window
struct WindowDisplay<'a> {
    window: &'a Window,
}

impl DisplaySink for WindowDisplay<'_> {
    fn apply_display(&mut self, mode: DisplayMode) {
        match mode {
            DisplayMode::Fullscreen => {
                self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            }
            DisplayMode::Windowed { width, height } => {
                self.window.set_fullscreen(None);
                let _ = self.window.request_inner_size(LogicalSize::new(width, height));
            }
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger; RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Swordman...");

    let store = JsonFileStore::in_config_dir().unwrap_or_else(|e| {
        warn!("{}, keeping settings in the working directory", e);
        JsonFileStore::new("settings.json")
    });
    info!("Settings file: {}", store.path().display());
    let settings = SettingsService::init(store);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Swordman")
        .with_inner_size(LogicalSize::new(
            settings.settings().windowed_width,
            settings.settings().windowed_height,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut started = Session::new(settings, Scene::Menu);
    started.start(&mut WindowDisplay { window: &window });
    // Taken on loop exit so the session can be shut down by value
    let mut session = Some(started);

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Main event loop
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                input.process_keyboard_event(&event);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                input.process_mouse_button(button, state);
            }
            WindowEvent::Focused(false) => {
                input.reset();
                game_loop.pause();
            }
            WindowEvent::Focused(true) => {
                game_loop.resume();
            }
            WindowEvent::Resized(physical_size) => {
                info!("Window resized to {:?}", physical_size);
            }
            _ => {}
        },
        Event::AboutToWait => {
            let Some(active) = session.as_mut() else {
                return;
            };

            let timing = game_loop.begin_frame();
            active.frame(input.player(), timing, &mut WindowDisplay { window: &window });
            input.update();

            if active.exit_requested() {
                elwt.exit();
            } else {
                window.request_redraw();
            }
        }
        Event::LoopExiting => {
            if let Some(active) = session.take() {
                active.shutdown();
            }
        }
        _ => {}
    })
    .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
