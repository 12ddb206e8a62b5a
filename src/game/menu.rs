// Scene navigation

/// Every scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    #[default]
    Menu,
    Settings,
    Play,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Menu => "Menu",
            Scene::Settings => "Settings",
            Scene::Play => "Play",
        }
    }
}

/// Carries out scene changes and application exit
pub trait SceneNavigator {
    fn load_scene(&mut self, scene: Scene);
    fn exit_application(&mut self);
}

/// Tracks the active scene; the host loop reads it each frame
#[derive(Debug, Default)]
pub struct SceneRouter {
    current: Scene,
    /// Scene entered since the host last asked
    pending_enter: Option<Scene>,
    exit_requested: bool,
}

impl SceneRouter {
    pub fn new(start: Scene) -> Self {
        Self {
            current: start,
            pending_enter: Some(start),
            exit_requested: false,
        }
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    /// Take the scene entered since the last call, if any
    pub fn take_entered(&mut self) -> Option<Scene> {
        self.pending_enter.take()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

impl SceneNavigator for SceneRouter {
    fn load_scene(&mut self, scene: Scene) {
        log::info!("Loading scene {} (from {})", scene.name(), self.current.name());
        self.current = scene;
        self.pending_enter = Some(scene);
    }

    fn exit_application(&mut self) {
        log::info!("Exit requested");
        self.exit_requested = true;
    }
}

/// Main menu buttons
pub struct MenuController;

impl MenuController {
    pub fn play(navigator: &mut dyn SceneNavigator) {
        navigator.load_scene(Scene::Play);
    }

    pub fn open_settings(navigator: &mut dyn SceneNavigator) {
        navigator.load_scene(Scene::Settings);
    }

    pub fn exit(navigator: &mut dyn SceneNavigator) {
        navigator.exit_application();
    }
}
