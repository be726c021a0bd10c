//! Audio capability and music switching
//!
//! The scene never mixes audio. It asks an [`AudioSink`] to start or stop a
//! loaded sound and keeps the voice handle of the current music track.

/// Opaque handle to loaded sound data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

/// Opaque handle to a playing voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceHandle(pub u32);

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Title,
    GamePlay,
    GameOver,
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A beam destroyed an enemy
    EnemyHit,
    /// An enemy rammed the player
    PlayerHit,
}

/// Audio capability consumed by the scene (fire and forget)
pub trait AudioSink {
    fn play(&mut self, sound: SoundId, looping: bool) -> VoiceHandle;
    fn stop(&mut self, voice: VoiceHandle);
}

/// Loaded sound ids for every track and effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundBank {
    pub title_bgm: SoundId,
    pub gameplay_bgm: SoundId,
    pub game_over_bgm: SoundId,
    pub enemy_hit: SoundId,
    pub player_hit: SoundId,
}

impl SoundBank {
    pub fn track(&self, track: Track) -> SoundId {
        match track {
            Track::Title => self.title_bgm,
            Track::GamePlay => self.gameplay_bgm,
            Track::GameOver => self.game_over_bgm,
        }
    }

    pub fn effect(&self, effect: SoundEffect) -> SoundId {
        match effect {
            SoundEffect::EnemyHit => self.enemy_hit,
            SoundEffect::PlayerHit => self.player_hit,
        }
    }
}

/// Keeps exactly one music track looping
#[derive(Debug, Clone)]
pub struct Jukebox {
    bank: SoundBank,
    current: Option<(Track, VoiceHandle)>,
}

impl Jukebox {
    pub fn new(bank: SoundBank) -> Self {
        Self {
            bank,
            current: None,
        }
    }

    /// Stop whatever is playing and loop `track`
    pub fn switch_to(&mut self, sink: &mut impl AudioSink, track: Track) {
        if let Some((previous, voice)) = self.current.take() {
            log::debug!("stopping {previous:?} music");
            sink.stop(voice);
        }
        let voice = sink.play(self.bank.track(track), true);
        log::info!("playing {track:?} music");
        self.current = Some((track, voice));
    }

    /// One-shot effect
    pub fn play_effect(&self, sink: &mut impl AudioSink, effect: SoundEffect) {
        sink.play(self.bank.effect(effect), false);
    }

    pub fn current_track(&self) -> Option<Track> {
        self.current.map(|(track, _)| track)
    }
}

/// Audio command as seen by [`RecordingAudio`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play {
        sound: SoundId,
        looping: bool,
        voice: VoiceHandle,
    },
    Stop(VoiceHandle),
}

/// Headless sink: hands out sequential voice handles and records commands
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    next_voice: u32,
    pub commands: Vec<AudioCommand>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of one-shot plays of `sound`
    pub fn effect_count(&self, sound: SoundId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, AudioCommand::Play { sound: s, looping: false, .. } if *s == sound))
            .count()
    }

    /// Voices started with looping and not yet stopped
    pub fn looping_voices(&self) -> Vec<(SoundId, VoiceHandle)> {
        let mut playing = Vec::new();
        for command in &self.commands {
            match *command {
                AudioCommand::Play {
                    sound,
                    looping: true,
                    voice,
                } => playing.push((sound, voice)),
                AudioCommand::Stop(voice) => playing.retain(|(_, v)| *v != voice),
                _ => {}
            }
        }
        playing
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: SoundId, looping: bool) -> VoiceHandle {
        let voice = VoiceHandle(self.next_voice);
        self.next_voice += 1;
        log::trace!("play {sound:?} looping={looping} -> {voice:?}");
        self.commands.push(AudioCommand::Play {
            sound,
            looping,
            voice,
        });
        voice
    }

    fn stop(&mut self, voice: VoiceHandle) {
        log::trace!("stop {voice:?}");
        self.commands.push(AudioCommand::Stop(voice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> SoundBank {
        SoundBank {
            title_bgm: SoundId(1),
            gameplay_bgm: SoundId(2),
            game_over_bgm: SoundId(3),
            enemy_hit: SoundId(4),
            player_hit: SoundId(5),
        }
    }

    #[test]
    fn test_switch_stops_previous_track() {
        let mut sink = RecordingAudio::new();
        let mut jukebox = Jukebox::new(bank());

        jukebox.switch_to(&mut sink, Track::Title);
        jukebox.switch_to(&mut sink, Track::GamePlay);

        assert_eq!(jukebox.current_track(), Some(Track::GamePlay));
        assert_eq!(sink.looping_voices(), vec![(SoundId(2), VoiceHandle(1))]);
        assert_eq!(sink.commands[1], AudioCommand::Stop(VoiceHandle(0)));
    }

    #[test]
    fn test_effects_do_not_touch_music() {
        let mut sink = RecordingAudio::new();
        let mut jukebox = Jukebox::new(bank());
        jukebox.switch_to(&mut sink, Track::Title);
        jukebox.play_effect(&mut sink, SoundEffect::EnemyHit);
        jukebox.play_effect(&mut sink, SoundEffect::EnemyHit);
        jukebox.play_effect(&mut sink, SoundEffect::PlayerHit);

        assert_eq!(sink.effect_count(SoundId(4)), 2);
        assert_eq!(sink.effect_count(SoundId(5)), 1);
        assert_eq!(sink.looping_voices().len(), 1);
    }
}
