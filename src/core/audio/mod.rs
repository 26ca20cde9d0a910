//=========================================================================
// Audio Manager
//=========================================================================
//
// Playback state for one music track and a fixed bank of sound-effect
// channels. Clips are resolved through the AssetManager, which is passed
// in by reference.
//
// Decoding and device output are left to a mixer backend; this manager
// owns what is playing, where, and how many times.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Dependencies ===============================================

use log::{debug, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::assets::{AssetError, AssetManager};

//=== Constants ===========================================================

/// Number of sound-effect channels.
pub const SFX_CHANNELS: usize = 8;

//=== Loops ===============================================================

/// How many times a clip plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loops {
    /// Plays `n` extra times after the first (0 = once).
    Times(u32),
    Forever,
}

//=== AudioError ==========================================================

#[derive(Debug, Error)]
pub enum AudioError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("All {0} sound-effect channels are busy")]
    NoFreeChannel(usize),

    #[error("Channel {channel} is out of range (0..{max})")]
    ChannelOutOfRange { channel: usize, max: usize },
}

pub type AudioResult<T> = Result<T, AudioError>;

//=== Playback State ======================================================

/// A clip bound to the music slot or a channel.
#[derive(Debug, Clone)]
pub struct Voice {
    pub name: String,
    pub loops: Loops,
    pub paused: bool,
    data: Arc<[u8]>,
}

impl Voice {
    fn new(name: &str, loops: Loops, data: Arc<[u8]>) -> Self {
        Self {
            name: name.to_owned(),
            loops,
            paused: false,
            data,
        }
    }

    /// Encoded clip bytes as loaded from the asset root.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

//=== AudioManager ========================================================

pub struct AudioManager {
    music: Option<Voice>,
    channels: Vec<Option<Voice>>,
}

impl AudioManager {
    pub fn new() -> Self {
        info!(target: "audio", "Audio manager initialized ({} sfx channels)", SFX_CHANNELS);
        Self {
            music: None,
            channels: vec![None; SFX_CHANNELS],
        }
    }

    //--- Music ------------------------------------------------------------

    /// Starts `name` as the music track, replacing any current one.
    pub fn play_music(
        &mut self,
        assets: &mut AssetManager,
        name: &str,
        loops: Loops,
    ) -> AudioResult<()> {
        let data = assets.load(name)?;
        debug!(target: "audio", "Music {:?} ({:?})", name, loops);
        self.music = Some(Voice::new(name, loops, data));
        Ok(())
    }

    pub fn pause_music(&mut self) {
        if let Some(music) = &mut self.music {
            music.paused = true;
        }
    }

    pub fn resume_music(&mut self) {
        if let Some(music) = &mut self.music {
            music.paused = false;
        }
    }

    pub fn stop_music(&mut self) {
        self.music = None;
    }

    pub fn music(&self) -> Option<&Voice> {
        self.music.as_ref()
    }

    pub fn music_playing(&self) -> bool {
        self.music.as_ref().is_some_and(|music| !music.paused)
    }

    //--- Sound Effects ----------------------------------------------------

    /// Plays `name` on `channel`, or on the first free channel if `None`.
    ///
    /// An explicit channel is taken over even if busy. Returns the channel
    /// used.
    pub fn play_sfx(
        &mut self,
        assets: &mut AssetManager,
        name: &str,
        loops: Loops,
        channel: Option<usize>,
    ) -> AudioResult<usize> {
        let channel = match channel {
            Some(channel) if channel >= self.channels.len() => {
                return Err(AudioError::ChannelOutOfRange {
                    channel,
                    max: self.channels.len(),
                });
            }
            Some(channel) => channel,
            None => self
                .channels
                .iter()
                .position(Option::is_none)
                .ok_or(AudioError::NoFreeChannel(self.channels.len()))?,
        };

        let data = assets.load(name)?;
        self.channels[channel] = Some(Voice::new(name, loops, data));
        Ok(channel)
    }

    /// Stops whatever plays on `channel`.
    pub fn halt_channel(&mut self, channel: usize) {
        if let Some(slot) = self.channels.get_mut(channel) {
            *slot = None;
        }
    }

    pub fn channel(&self, channel: usize) -> Option<&Voice> {
        self.channels.get(channel).and_then(Option::as_ref)
    }

    pub fn active_channels(&self) -> usize {
        self.channels.iter().filter(|slot| slot.is_some()).count()
    }

    /// Stops music and every channel.
    pub fn halt_all(&mut self) {
        self.music = None;
        self.channels.iter_mut().for_each(|slot| *slot = None);
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AudioManager {
    fn drop(&mut self) {
        debug!(target: "audio", "Releasing audio ({} active channels)", self.active_channels());
        self.halt_all();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixtures() -> (tempfile::TempDir, AssetManager) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("theme.ogg"), b"OggS").unwrap();
        fs::write(dir.path().join("click.wav"), b"RIFF").unwrap();
        let assets = AssetManager::new(dir.path());
        (dir, assets)
    }

    #[test]
    fn music_pause_resume_stop() {
        let (_dir, mut assets) = fixtures();
        let mut audio = AudioManager::new();

        audio.play_music(&mut assets, "theme.ogg", Loops::Forever).unwrap();
        assert!(audio.music_playing());
        assert_eq!(audio.music().unwrap().data(), b"OggS");

        audio.pause_music();
        assert!(!audio.music_playing());
        audio.resume_music();
        assert!(audio.music_playing());

        audio.stop_music();
        assert!(audio.music().is_none());
    }

    #[test]
    fn sfx_takes_first_free_channel() {
        let (_dir, mut assets) = fixtures();
        let mut audio = AudioManager::new();

        assert_eq!(audio.play_sfx(&mut assets, "click.wav", Loops::Times(0), None).unwrap(), 0);
        assert_eq!(audio.play_sfx(&mut assets, "click.wav", Loops::Times(0), None).unwrap(), 1);
        audio.halt_channel(0);
        assert_eq!(audio.play_sfx(&mut assets, "click.wav", Loops::Times(2), None).unwrap(), 0);
        assert_eq!(audio.active_channels(), 2);
    }

    #[test]
    fn sfx_fails_when_all_channels_busy() {
        let (_dir, mut assets) = fixtures();
        let mut audio = AudioManager::new();

        for _ in 0..SFX_CHANNELS {
            audio.play_sfx(&mut assets, "click.wav", Loops::Times(0), None).unwrap();
        }
        let err = audio.play_sfx(&mut assets, "click.wav", Loops::Times(0), None).unwrap_err();
        assert!(matches!(err, AudioError::NoFreeChannel(SFX_CHANNELS)));
    }

    #[test]
    fn explicit_channel_is_validated() {
        let (_dir, mut assets) = fixtures();
        let mut audio = AudioManager::new();

        let err = audio
            .play_sfx(&mut assets, "click.wav", Loops::Times(0), Some(SFX_CHANNELS))
            .unwrap_err();
        assert!(matches!(err, AudioError::ChannelOutOfRange { .. }));

        assert_eq!(audio.play_sfx(&mut assets, "click.wav", Loops::Times(0), Some(3)).unwrap(), 3);
        assert_eq!(audio.channel(3).unwrap().name, "click.wav");
    }

    #[test]
    fn missing_clip_surfaces_asset_error() {
        let (_dir, mut assets) = fixtures();
        let mut audio = AudioManager::new();

        let err = audio.play_music(&mut assets, "nope.ogg", Loops::Times(0)).unwrap_err();
        assert!(matches!(err, AudioError::Asset(AssetError::Io { .. })));
        assert!(audio.music().is_none());
    }
}
