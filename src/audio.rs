//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects, no asset files.

use std::cell::RefCell;

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bullet fired
    Gunshot,
    /// Zombie hit and removed
    ZombieKill,
    /// Block worn down to nothing
    BlockBreak,
    /// Run ended
    GameOver,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
    /// Last gunshot voice; a new shot cuts it off and restarts
    gunshot: RefCell<Option<OscillatorNode>>,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
            gunshot: RefCell::new(None),
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

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Gunshot => self.play_gunshot(ctx, vol),
            SoundEffect::ZombieKill => self.play_zombie_kill(ctx, vol),
            SoundEffect::BlockBreak => self.play_block_break(ctx, vol),
            SoundEffect::GameOver => self.play_game_over(ctx, vol),
        }
    }

    // === Sound generators ===

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

    /// Gunshot - sharp sawtooth crack, restarted on every shot
    fn play_gunshot(&self, ctx: &AudioContext, vol: f32) {
        if let Some(previous) = self.gunshot.borrow_mut().take() {
            previous.stop().ok();
        }

        let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.5, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.12)
            .ok();
        osc.frequency().set_value_at_time(220.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(40.0, t + 0.12)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.15).ok();
        *self.gunshot.borrow_mut() = Some(osc);
    }

    /// Zombie kill - low squelch
    fn play_zombie_kill(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 120.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.2)
            .ok();
        osc.frequency().set_value_at_time(120.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(50.0, t + 0.2)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.25).ok();
    }

    /// Block break - short crunch
    fn play_block_break(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.15)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency()
            .linear_ramp_to_value_at_time(90.0, t + 0.15)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.2).ok();
    }

    /// Game over - descending tones
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        let notes = [392.0, 329.63, 261.63, 196.0];
        for (i, &freq) in notes.iter().enumerate() {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Triangle) else {
                continue;
            };
            let t = ctx.current_time() + i as f64 * 0.25;

            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain()
                .linear_ramp_to_value_at_time(vol * 0.3, t + 0.05)
                .ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.45).ok();
        }
    }
}
