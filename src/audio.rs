//! Audio cues using Web Audio API
//!
//! Short oscillator sequences, no sample files.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::AudioSettings;
use crate::sim::{GameEvent, Outcome};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// New icon starts falling
    Spawn,
    /// Landed on the right role
    Correct,
    /// Landed on another role
    Wrong,
    /// Reached the bottom
    Missed,
}

impl SoundEffect {
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::Spawned(_) => SoundEffect::Spawn,
            GameEvent::Landed(Outcome::Correct { .. }) => SoundEffect::Correct,
            GameEvent::Landed(Outcome::Wrong { .. }) => SoundEffect::Wrong,
            GameEvent::Landed(Outcome::Missed { .. }) => SoundEffect::Missed,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: &AudioSettings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Spawn => self.play_spawn(ctx, vol),
            SoundEffect::Correct => self.play_correct(ctx, vol),
            SoundEffect::Wrong => self.play_wrong(ctx, vol),
            SoundEffect::Missed => self.play_missed(ctx, vol),
        }
    }

    /// Create an oscillator with gain envelope
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

    /// Notes played one after another
    fn play_sequence(
        &self,
        ctx: &AudioContext,
        vol: f32,
        notes: &[f32],
        spacing: f64,
        length: f64,
        osc_type: OscillatorType,
    ) {
        for (i, freq) in notes.iter().enumerate() {
            let delay = i as f64 * spacing;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, osc_type) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + length)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + length + 0.05).ok();
            }
        }
    }

    /// Spawn - soft drop
    fn play_spawn(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 500.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.2, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.15)
            .ok();
        osc.frequency().set_value_at_time(500.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(300.0, t + 0.15)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.2).ok();
    }

    /// Correct - rising chime
    fn play_correct(&self, ctx: &AudioContext, vol: f32) {
        self.play_sequence(
            ctx,
            vol * 0.3,
            &[523.0, 659.0, 784.0],
            0.09,
            0.25,
            OscillatorType::Triangle,
        );
    }

    /// Wrong - low buzz
    fn play_wrong(&self, ctx: &AudioContext, vol: f32) {
        self.play_sequence(
            ctx,
            vol * 0.25,
            &[220.0, 180.0],
            0.15,
            0.2,
            OscillatorType::Square,
        );
    }

    /// Missed - falling tone
    fn play_missed(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 400.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.5)
            .ok();
        osc.frequency().set_value_at_time(400.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(100.0, t + 0.5)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.6).ok();
    }
}
