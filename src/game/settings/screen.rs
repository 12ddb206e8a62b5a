// Settings scene controller

use super::service::{AudioMixer, DisplaySink, SettingsService};
use super::store::SettingsStore;
use super::SettingsError;
use crate::game::menu::{Scene, SceneNavigator};

/// State of the settings scene's panels
///
/// The keyboard guide and the main settings panel are never shown together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsScreen {
    keyboard_panel_visible: bool,
}

impl SettingsScreen {
    /// Open the screen; the keyboard guide starts as the live preference says
    pub fn open<S: SettingsStore>(service: &mut SettingsService<S>) -> Self {
        service.mark_clean();
        Self {
            keyboard_panel_visible: service.settings().keyboard_panel,
        }
    }

    pub fn keyboard_panel_visible(&self) -> bool {
        self.keyboard_panel_visible
    }

    pub fn settings_panel_visible(&self) -> bool {
        !self.keyboard_panel_visible
    }

    /// Keyboard guide toggle changed
    pub fn set_keyboard_panel<S: SettingsStore>(
        &mut self,
        show: bool,
        service: &mut SettingsService<S>,
    ) {
        self.keyboard_panel_visible = show;
        service.set_keyboard_panel(show);
    }

    /// Close button on the keyboard guide
    pub fn close_keyboard_panel<S: SettingsStore>(&mut self, service: &mut SettingsService<S>) {
        if self.keyboard_panel_visible {
            self.set_keyboard_panel(false, service);
        }
    }

    /// Save everything and go back to the menu
    ///
    /// On failure the screen stays open and the edits stay live.
    pub fn save_and_return<S: SettingsStore>(
        &mut self,
        service: &mut SettingsService<S>,
        navigator: &mut dyn SceneNavigator,
    ) -> Result<(), SettingsError> {
        service.save()?;
        navigator.load_scene(Scene::Menu);
        Ok(())
    }

    /// Go back to the menu, undoing unsaved edits
    pub fn back<S: SettingsStore>(
        &mut self,
        service: &mut SettingsService<S>,
        mixer: &mut dyn AudioMixer,
        display: &mut dyn DisplaySink,
        navigator: &mut dyn SceneNavigator,
    ) {
        service.revert(mixer, display);
        self.keyboard_panel_visible = service.settings().keyboard_panel;
        navigator.load_scene(Scene::Menu);
    }
}
