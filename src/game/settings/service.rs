// Settings service: load, preview, save, revert

use std::collections::HashMap;

use super::store::SettingsStore;
use super::{sanitize_volume, Settings, SettingsError};
use crate::core::math::{decibels_to_linear, linear_to_decibels};

/// Audio mixer channel groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixerGroup {
    Sfx,
    Music,
}

impl MixerGroup {
    /// Name of the exposed mixer parameter
    pub fn name(&self) -> &'static str {
        match self {
            MixerGroup::Sfx => "SFX",
            MixerGroup::Music => "Music",
        }
    }
}

/// Audio mixer that takes group volumes in decibels
pub trait AudioMixer {
    fn set_volume_db(&mut self, group: MixerGroup, db: f32);
    fn volume_db(&self, group: MixerGroup) -> Option<f32>;
}

/// How the game window should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Borderless fullscreen at the monitor's native resolution
    Fullscreen,
    Windowed { width: u32, height: u32 },
}

/// Applies display mode changes to the window
pub trait DisplaySink {
    fn apply_display(&mut self, mode: DisplayMode);
}

/// Mixer levels as last requested, in decibels
///
/// Audio playback reads these when mixing.
#[derive(Debug, Clone, Default)]
pub struct MixerLevels {
    levels: HashMap<MixerGroup, f32>,
}

impl MixerLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group volume converted back to linear
    pub fn linear_volume(&self, group: MixerGroup) -> Option<f32> {
        self.volume_db(group).map(decibels_to_linear)
    }
}

impl AudioMixer for MixerLevels {
    fn set_volume_db(&mut self, group: MixerGroup, db: f32) {
        log::debug!("Mixer {} -> {:.1} dB", group.name(), db);
        self.levels.insert(group, db);
    }

    fn volume_db(&self, group: MixerGroup) -> Option<f32> {
        self.levels.get(&group).copied()
    }
}

/// Owns the user's settings for the lifetime of the app
///
/// `live` holds what is currently applied (including unsaved previews),
/// `saved` holds what is on disk.
#[derive(Debug)]
pub struct SettingsService<S> {
    store: S,
    saved: Settings,
    live: Settings,
    dirty: bool,
}

impl<S: SettingsStore> SettingsService<S> {
    /// Load settings from `store`, falling back to defaults
    pub fn init(store: S) -> Self {
        let saved = match store.load() {
            Ok(Some(settings)) => settings.sanitized(),
            Ok(None) => {
                log::info!("No saved settings, using defaults");
                Settings::default()
            }
            Err(e) => {
                log::warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            }
        };

        Self {
            store,
            live: saved.clone(),
            saved,
            dirty: false,
        }
    }

    /// Currently applied settings
    pub fn settings(&self) -> &Settings {
        &self.live
    }

    /// Last saved settings
    pub fn saved(&self) -> &Settings {
        &self.saved
    }

    /// Check if there are edits that have not been saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag if the live values match what is saved
    ///
    /// Real unsaved edits keep the flag so a later revert still undoes them.
    pub fn mark_clean(&mut self) {
        if self.live == self.saved {
            self.dirty = false;
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Push every live value to the mixer and the window
    pub fn apply(&self, mixer: &mut dyn AudioMixer, display: &mut dyn DisplaySink) {
        self.apply_audio(mixer);
        display.apply_display(self.live.display_mode());
    }

    fn apply_audio(&self, mixer: &mut dyn AudioMixer) {
        mixer.set_volume_db(MixerGroup::Sfx, linear_to_decibels(self.live.sfx_volume));
        mixer.set_volume_db(MixerGroup::Music, linear_to_decibels(self.live.music_volume));
    }

    /// Preview a new sound effect volume
    pub fn set_sfx_volume(&mut self, volume: f32, mixer: &mut dyn AudioMixer) {
        self.live.sfx_volume = sanitize_volume(volume);
        mixer.set_volume_db(MixerGroup::Sfx, linear_to_decibels(self.live.sfx_volume));
        self.dirty = true;
    }

    /// Preview a new music volume
    pub fn set_music_volume(&mut self, volume: f32, mixer: &mut dyn AudioMixer) {
        self.live.music_volume = sanitize_volume(volume);
        mixer.set_volume_db(MixerGroup::Music, linear_to_decibels(self.live.music_volume));
        self.dirty = true;
    }

    /// Preview fullscreen on or off
    pub fn set_fullscreen(&mut self, fullscreen: bool, display: &mut dyn DisplaySink) {
        self.live.fullscreen = fullscreen;
        display.apply_display(self.live.display_mode());
        log::info!(
            "Fullscreen changed to: {}, mode: {:?}",
            fullscreen,
            self.live.display_mode()
        );
        self.dirty = true;
    }

    /// Change whether the keyboard guide opens with the settings screen
    pub fn set_keyboard_panel(&mut self, show: bool) {
        self.live.keyboard_panel = show;
        self.dirty = true;
    }

    /// Persist the live settings
    pub fn save(&mut self) -> Result<(), SettingsError> {
        self.store.save(&self.live)?;
        self.saved = self.live.clone();
        self.dirty = false;
        log::info!(
            "Settings saved! Fullscreen: {}, Keyboard Panel: {}",
            self.saved.fullscreen,
            self.saved.keyboard_panel
        );
        Ok(())
    }

    /// Throw away unsaved edits and re-apply the saved values
    ///
    /// Returns true if anything was reverted.
    pub fn revert(&mut self, mixer: &mut dyn AudioMixer, display: &mut dyn DisplaySink) -> bool {
        if !self.dirty {
            return false;
        }

        self.live = self.saved.clone();
        self.apply(mixer, display);
        self.dirty = false;
        log::info!("Unsaved settings reverted");
        true
    }

    /// Tear down the service, handing back its store
    pub fn shutdown(self) -> S {
        if self.dirty {
            log::info!("Discarding unsaved settings on shutdown");
        }
        self.store
    }
}
