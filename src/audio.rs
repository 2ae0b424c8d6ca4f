//! Audio system using Web Audio API
//!
//! Every effect is synthesized from oscillators; there are no sound files.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Star picked up
    StarCollect,
    /// Score passed the previous best
    HighScore,
    /// Bomb entered play
    BombDrop,
    /// All stars came back
    WaveRespawn,
    /// Player touched a bomb
    Death,
    /// Fresh life
    Restart,
}

impl SoundEffect {
    /// Effect for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Jumped => SoundEffect::Jump,
            GameEvent::StarCollected { .. } => SoundEffect::StarCollect,
            GameEvent::HighScore { .. } => SoundEffect::HighScore,
            GameEvent::WaveRespawned => SoundEffect::WaveRespawn,
            GameEvent::BombDropped { .. } => SoundEffect::BombDrop,
            GameEvent::PlayerDied { .. } => SoundEffect::Death,
            GameEvent::Restarted => SoundEffect::Restart,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
        }
    }

    /// Pick up volume or mute changes
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Play the sound for a simulation event
    pub fn play_event(&self, event: &GameEvent) {
        self.play(SoundEffect::for_event(event));
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Jump => self.play_jump(ctx, vol),
            SoundEffect::StarCollect => self.play_star(ctx, vol),
            SoundEffect::HighScore => self.play_high_score(ctx, vol),
            SoundEffect::BombDrop => self.play_bomb_drop(ctx, vol),
            SoundEffect::WaveRespawn => self.play_wave(ctx, vol),
            SoundEffect::Death => self.play_death(ctx, vol),
            SoundEffect::Restart => self.play_restart(ctx, vol),
        }
    }

    // === Sound generators ===

    /// Create an oscillator routed through its own gain node
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Short rising blip starting `delay` seconds from now
    fn blip(
        &self,
        ctx: &AudioContext,
        (from, to): (f32, f32),
        osc_type: OscillatorType,
        vol: f32,
        delay: f64,
        length: f64,
    ) {
        let Some((osc, gain)) = self.create_osc(ctx, from, osc_type) else {
            return;
        };
        let t = ctx.current_time() + delay;

        gain.gain().set_value_at_time(vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + length)
            .ok();
        osc.frequency().set_value_at_time(from, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(to, t + length)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + length + 0.05).ok();
    }

    /// Jump - springy upward sweep
    fn play_jump(&self, ctx: &AudioContext, vol: f32) {
        self.blip(ctx, (220.0, 660.0), OscillatorType::Square, vol * 0.15, 0.0, 0.15);
    }

    /// Star - two bright chimes
    fn play_star(&self, ctx: &AudioContext, vol: f32) {
        self.blip(ctx, (880.0, 880.0), OscillatorType::Triangle, vol * 0.3, 0.0, 0.08);
        self.blip(ctx, (1320.0, 1320.0), OscillatorType::Triangle, vol * 0.3, 0.06, 0.12);
    }

    /// High score - celebratory arpeggio
    fn play_high_score(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [523.0, 659.0, 784.0, 1047.0].iter().enumerate() {
            let delay = 0.1 + i as f64 * 0.07;
            self.blip(ctx, (*freq, *freq), OscillatorType::Triangle, vol * 0.2, delay, 0.2);
        }
    }

    /// Bomb drop - falling whistle
    fn play_bomb_drop(&self, ctx: &AudioContext, vol: f32) {
        self.blip(ctx, (1200.0, 300.0), OscillatorType::Sine, vol * 0.2, 0.0, 0.4);
    }

    /// Wave respawn - shimmering run
    fn play_wave(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [400.0, 500.0, 600.0, 800.0].iter().enumerate() {
            let delay = i as f64 * 0.1;
            self.blip(ctx, (*freq, *freq), OscillatorType::Triangle, vol * 0.3, delay, 0.4);
        }
    }

    /// Death - low boom then a sad descent
    fn play_death(&self, ctx: &AudioContext, vol: f32) {
        self.blip(ctx, (150.0, 40.0), OscillatorType::Sawtooth, vol * 0.4, 0.0, 0.3);
        for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
            let delay = 0.3 + i as f64 * 0.2;
            self.blip(ctx, (*freq, *freq * 0.95), OscillatorType::Sine, vol * 0.3, delay, 0.3);
        }
    }

    /// Restart - quick upbeat pair
    fn play_restart(&self, ctx: &AudioContext, vol: f32) {
        self.blip(ctx, (330.0, 330.0), OscillatorType::Square, vol * 0.15, 0.0, 0.08);
        self.blip(ctx, (494.0, 494.0), OscillatorType::Square, vol * 0.15, 0.09, 0.12);
    }
}
