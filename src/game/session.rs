// Game session: scenes, settings and the swordsman wired to the host loop

use glam::Vec2;

use crate::engine::game_loop::{FrameTiming, FIXED_TIMESTEP};
use crate::engine::input::{Action, PlayerInput};
use crate::engine::physics::PhysicsWorld;

use super::characters::{Swordman, SwordmanStats};
use super::menu::{MenuController, Scene, SceneNavigator, SceneRouter};
use super::settings::{DisplaySink, MixerLevels, SettingsScreen, SettingsService, SettingsStore};

/// Volume change per key press
const VOLUME_STEP: f32 = 0.1;

/// Everything the running game owns
///
/// The host calls [`frame`](Self::frame) once per rendered frame with that
/// frame's timing; the session runs one logical frame and the requested
/// number of fixed physics steps.
pub struct Session<S> {
    router: SceneRouter,
    settings: SettingsService<S>,
    settings_screen: Option<SettingsScreen>,
    mixer: MixerLevels,
    physics: PhysicsWorld,
    swordman: Option<Swordman>,
    stats: SwordmanStats,
}

impl<S: SettingsStore> Session<S> {
    pub fn new(settings: SettingsService<S>, start: Scene) -> Self {
        Self {
            router: SceneRouter::new(start),
            settings,
            settings_screen: None,
            mixer: MixerLevels::new(),
            physics: PhysicsWorld::new(),
            swordman: None,
            stats: SwordmanStats::default(),
        }
    }

    /// Apply loaded settings to the audio mixer and the window
    pub fn start(&mut self, display: &mut dyn DisplaySink) {
        self.settings.apply(&mut self.mixer, display);
    }

    /// Run one rendered frame
    pub fn frame(&mut self, input: &PlayerInput, timing: FrameTiming, display: &mut dyn DisplaySink) {
        self.enter_pending_scene();

        match self.router.current() {
            Scene::Menu => self.menu_frame(input),
            Scene::Settings => self.settings_frame(input, display),
            Scene::Play => self.play_frame(input, timing),
        }
    }

    fn enter_pending_scene(&mut self) {
        let Some(scene) = self.router.take_entered() else {
            return;
        };

        self.settings_screen = None;
        self.swordman = None;

        match scene {
            Scene::Menu => {}
            Scene::Settings => {
                self.settings_screen = Some(SettingsScreen::open(&mut self.settings));
            }
            Scene::Play => {
                self.physics = PhysicsWorld::new();
                self.swordman = Some(Swordman::spawn(
                    self.stats.clone(),
                    &mut self.physics,
                    Vec2::ZERO,
                ));
            }
        }
    }

    fn menu_frame(&mut self, input: &PlayerInput) {
        if input.just_pressed(Action::Confirm) {
            MenuController::play(&mut self.router);
        } else if input.just_pressed(Action::OpenSettings) {
            MenuController::open_settings(&mut self.router);
        } else if input.just_pressed(Action::Back) {
            MenuController::exit(&mut self.router);
        }
    }

    fn settings_frame(&mut self, input: &PlayerInput, display: &mut dyn DisplaySink) {
        let Some(screen) = self.settings_screen.as_mut() else {
            return;
        };

        if input.just_pressed(Action::ToggleFullscreen) {
            let fullscreen = !self.settings.settings().fullscreen;
            self.settings.set_fullscreen(fullscreen, display);
        }
        if input.just_pressed(Action::ToggleKeyboardGuide) {
            let show = !screen.keyboard_panel_visible();
            screen.set_keyboard_panel(show, &mut self.settings);
        }

        let music = self.settings.settings().music_volume;
        if input.just_pressed(Action::MusicVolumeDown) {
            self.settings.set_music_volume(music - VOLUME_STEP, &mut self.mixer);
        } else if input.just_pressed(Action::MusicVolumeUp) {
            self.settings.set_music_volume(music + VOLUME_STEP, &mut self.mixer);
        }

        let sfx = self.settings.settings().sfx_volume;
        if input.just_pressed(Action::SfxVolumeDown) {
            self.settings.set_sfx_volume(sfx - VOLUME_STEP, &mut self.mixer);
        } else if input.just_pressed(Action::SfxVolumeUp) {
            self.settings.set_sfx_volume(sfx + VOLUME_STEP, &mut self.mixer);
        }

        if input.just_pressed(Action::Confirm) {
            if let Err(e) = screen.save_and_return(&mut self.settings, &mut self.router) {
                log::warn!("Failed to save settings: {}", e);
            }
        } else if input.just_pressed(Action::Back) {
            if screen.keyboard_panel_visible() {
                screen.close_keyboard_panel(&mut self.settings);
            } else {
                screen.back(&mut self.settings, &mut self.mixer, display, &mut self.router);
            }
        }
    }

    fn play_frame(&mut self, input: &PlayerInput, timing: FrameTiming) {
        if input.just_pressed(Action::Back) {
            self.router.load_scene(Scene::Menu);
            return;
        }

        let Some(swordman) = self.swordman.as_mut() else {
            return;
        };

        swordman.controller.on_frame(&input.snapshot(), timing.frame_dt);

        for _ in 0..timing.physics_steps {
            swordman.physics_step(&mut self.physics, FIXED_TIMESTEP);
            self.physics.step();
        }
    }

    pub fn scene(&self) -> Scene {
        self.router.current()
    }

    pub fn exit_requested(&self) -> bool {
        self.router.exit_requested()
    }

    pub fn swordman(&self) -> Option<&Swordman> {
        self.swordman.as_ref()
    }

    pub fn swordman_mut(&mut self) -> Option<&mut Swordman> {
        self.swordman.as_mut()
    }

    /// Swordsman position in the world, if one is spawned
    pub fn swordman_position(&self) -> Option<Vec2> {
        self.swordman
            .as_ref()
            .and_then(|swordman| swordman.position(&self.physics))
    }

    pub fn settings(&self) -> &SettingsService<S> {
        &self.settings
    }

    pub fn settings_screen(&self) -> Option<&SettingsScreen> {
        self.settings_screen.as_ref()
    }

    pub fn mixer(&self) -> &MixerLevels {
        &self.mixer
    }

    /// Tear down, handing back the settings store
    pub fn shutdown(self) -> S {
        log::info!("Shutting down session in scene {}", self.router.current().name());
        self.settings.shutdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::ActionMode;
    use crate::game::settings::{DisplayMode, MemoryStore, MixerGroup};
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct NullDisplay {
        modes: Vec<DisplayMode>,
    }

    impl DisplaySink for NullDisplay {
        fn apply_display(&mut self, mode: DisplayMode) {
            self.modes.push(mode);
        }
    }

    fn timing(steps: u32) -> FrameTiming {
        FrameTiming {
            frame_dt: FIXED_TIMESTEP * steps as f32,
            physics_steps: steps,
        }
    }

    fn session(start: Scene) -> Session<MemoryStore> {
        Session::new(SettingsService::init(MemoryStore::new()), start)
    }

    /// Press `action` for one frame, then release it
    fn tap(session: &mut Session<MemoryStore>, display: &mut NullDisplay, action: Action) {
        let mut input = PlayerInput::new();
        input.press(action);
        session.frame(&input, timing(0), display);
    }

    #[test]
    fn test_start_applies_settings() {
        let mut s = session(Scene::Menu);
        let mut display = NullDisplay::default();
        s.start(&mut display);

        assert_eq!(display.modes, vec![DisplayMode::Fullscreen]);
        assert_relative_eq!(
            s.mixer().linear_volume(MixerGroup::Music).unwrap(),
            0.75,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_menu_to_play_spawns_swordman() {
        let mut s = session(Scene::Menu);
        let mut display = NullDisplay::default();

        tap(&mut s, &mut display, Action::Confirm);
        assert_eq!(s.scene(), Scene::Play);
        assert!(s.swordman().is_none());

        s.frame(&PlayerInput::new(), timing(0), &mut display);
        assert!(s.swordman().is_some());
        assert_eq!(s.swordman_position(), Some(Vec2::ZERO));
    }

    #[test]
    fn test_play_moves_swordman() {
        let mut s = session(Scene::Play);
        let mut display = NullDisplay::default();

        let mut input = PlayerInput::new();
        input.press(Action::MoveRight);
        input.press(Action::Run);
        s.frame(&input, timing(2), &mut display);

        let pos = s.swordman_position().unwrap();
        assert_relative_eq!(pos.x, 6.0 * FIXED_TIMESTEP * 2.0, epsilon = 1e-4);
        assert_relative_eq!(pos.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_attack_holds_position() {
        let mut s = session(Scene::Play);
        let mut display = NullDisplay::default();

        let mut input = PlayerInput::new();
        input.press(Action::MoveUp);
        input.press(Action::Attack);
        s.frame(&input, timing(3), &mut display);

        let swordman = s.swordman().unwrap();
        assert_eq!(swordman.controller.mode(), ActionMode::Attacking);
        assert_eq!(s.swordman_position(), Some(Vec2::ZERO));
    }

    #[test]
    fn test_back_from_play_returns_to_menu() {
        let mut s = session(Scene::Play);
        let mut display = NullDisplay::default();
        s.frame(&PlayerInput::new(), timing(0), &mut display);

        tap(&mut s, &mut display, Action::Back);
        assert_eq!(s.scene(), Scene::Menu);

        s.frame(&PlayerInput::new(), timing(0), &mut display);
        assert!(s.swordman().is_none());
    }

    #[test]
    fn test_settings_edit_then_back_reverts() {
        let mut s = session(Scene::Settings);
        let mut display = NullDisplay::default();
        s.frame(&PlayerInput::new(), timing(0), &mut display);
        assert!(s.settings_screen().is_some());

        tap(&mut s, &mut display, Action::ToggleFullscreen);
        tap(&mut s, &mut display, Action::MusicVolumeDown);
        assert!(!s.settings().settings().fullscreen);
        assert!(s.settings().is_dirty());

        tap(&mut s, &mut display, Action::Back);
        assert_eq!(s.scene(), Scene::Menu);
        assert!(s.settings().settings().fullscreen);
        assert_eq!(s.settings().settings().music_volume, 0.75);
        assert_eq!(display.modes.last(), Some(&DisplayMode::Fullscreen));
    }

    #[test]
    fn test_settings_confirm_saves() {
        let mut s = session(Scene::Settings);
        let mut display = NullDisplay::default();
        s.frame(&PlayerInput::new(), timing(0), &mut display);

        tap(&mut s, &mut display, Action::SfxVolumeUp);
        tap(&mut s, &mut display, Action::Confirm);

        assert_eq!(s.scene(), Scene::Menu);
        let store = s.shutdown();
        assert_relative_eq!(store.stored().unwrap().sfx_volume, 0.85, epsilon = 1e-5);
    }

    #[test]
    fn test_back_closes_keyboard_guide_first() {
        let mut s = session(Scene::Settings);
        let mut display = NullDisplay::default();
        s.frame(&PlayerInput::new(), timing(0), &mut display);

        tap(&mut s, &mut display, Action::ToggleKeyboardGuide);
        assert!(s.settings_screen().unwrap().keyboard_panel_visible());

        tap(&mut s, &mut display, Action::Back);
        assert_eq!(s.scene(), Scene::Settings);
        assert!(!s.settings_screen().unwrap().keyboard_panel_visible());
    }

    #[test]
    fn test_back_from_menu_exits() {
        let mut s = session(Scene::Menu);
        let mut display = NullDisplay::default();

        tap(&mut s, &mut display, Action::Back);
        assert!(s.exit_requested());
    }
}
