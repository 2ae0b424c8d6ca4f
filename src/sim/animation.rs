//! Named sprite-sheet clips and a frame-accurate clip player

/// Sprite sheets the player draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sheet {
    Run,
    Jump,
    Dead,
    Idle,
}

/// Playback description of one clip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub sheet: Sheet,
    pub first_frame: u32,
    pub last_frame: u32,
    pub frame_rate: f32,
    pub looping: bool,
}

impl Clip {
    pub fn frame_count(&self) -> u32 {
        self.last_frame - self.first_frame + 1
    }

    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frame_rate
    }
}

/// Player animations, keyed the same way the sheets are authored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    RunRight,
    RunLeft,
    JumpUp,
    Crouch,
    Die,
    Idle,
}

impl Animation {
    pub const fn clip(self) -> Clip {
        match self {
            Animation::RunRight | Animation::RunLeft => Clip {
                sheet: Sheet::Run,
                first_frame: 0,
                last_frame: 7,
                frame_rate: 15.0,
                looping: true,
            },
            Animation::JumpUp => Clip {
                sheet: Sheet::Jump,
                first_frame: 0,
                last_frame: 9,
                frame_rate: 5.0,
                looping: false,
            },
            Animation::Crouch => Clip {
                sheet: Sheet::Jump,
                first_frame: 8,
                last_frame: 8,
                frame_rate: 10.0,
                looping: true,
            },
            Animation::Die => Clip {
                sheet: Sheet::Dead,
                first_frame: 0,
                last_frame: 9,
                frame_rate: 8.0,
                looping: false,
            },
            Animation::Idle => Clip {
                sheet: Sheet::Idle,
                first_frame: 2,
                last_frame: 7,
                frame_rate: 4.0,
                looping: false,
            },
        }
    }

    /// Clip name as authored in the sprite sheets
    pub const fn key(self) -> &'static str {
        match self {
            Animation::RunRight => "runRight",
            Animation::RunLeft => "runLeft",
            Animation::JumpUp => "jumpUp",
            Animation::Crouch => "crouch",
            Animation::Die => "die",
            Animation::Idle => "notMoving",
        }
    }
}

/// Plays one clip at a time
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    current: Animation,
    /// Frame index within the clip (0-based)
    frame: u32,
    /// Time spent on the current frame
    elapsed: f32,
    playing: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        // Nothing has been played yet
        Self {
            current: Animation::Idle,
            frame: 0,
            elapsed: 0.0,
            playing: false,
        }
    }
}

impl AnimationPlayer {
    /// Start a clip from its first frame.
    ///
    /// With `ignore_if_playing`, calling this for the clip that is already
    /// running does nothing. A finished clip always restarts.
    pub fn play(&mut self, anim: Animation, ignore_if_playing: bool) {
        if ignore_if_playing && self.playing && self.current == anim {
            return;
        }
        log::trace!("Clip {} started", anim.key());
        self.current = anim;
        self.frame = 0;
        self.elapsed = 0.0;
        self.playing = true;
    }

    /// Advance the clip clock
    pub fn advance(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let clip = self.current.clip();
        let frame_time = clip.frame_duration();
        self.elapsed += dt;
        while self.elapsed >= frame_time {
            self.elapsed -= frame_time;
            if self.frame + 1 < clip.frame_count() {
                self.frame += 1;
            } else if clip.looping {
                self.frame = 0;
            } else {
                self.playing = false;
                self.elapsed = 0.0;
                break;
            }
        }
    }

    pub fn current(&self) -> Animation {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Cell index in the clip's sprite sheet
    pub fn sheet_frame(&self) -> u32 {
        self.current.clip().first_frame + self.frame
    }

    /// Progress through the clip (0-1)
    pub fn progress(&self) -> f32 {
        let len = self.current.clip().frame_count();
        if len <= 1 {
            return 1.0;
        }
        self.frame as f32 / (len - 1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_ignores_running_clip() {
        let mut player = AnimationPlayer::default();
        player.play(Animation::RunRight, true);
        player.advance(0.21); // 3 frames at 15 fps
        assert_eq!(player.sheet_frame(), 3);

        player.play(Animation::RunRight, true);
        assert_eq!(player.sheet_frame(), 3);

        // Without the flag the clip restarts
        player.play(Animation::RunRight, false);
        assert_eq!(player.sheet_frame(), 0);
    }

    #[test]
    fn test_one_shot_clip_stops_on_last_frame() {
        let mut player = AnimationPlayer::default();
        player.play(Animation::JumpUp, true);
        // 10 frames at 5 fps = 2 seconds
        player.advance(1.9);
        assert!(player.is_playing());
        assert_eq!(player.sheet_frame(), 9);
        player.advance(0.2);
        assert!(!player.is_playing());
        assert_eq!(player.current(), Animation::JumpUp);
        assert_eq!(player.sheet_frame(), 9);

        // Finished clip restarts even with ignore_if_playing
        player.play(Animation::JumpUp, true);
        assert!(player.is_playing());
        assert_eq!(player.sheet_frame(), 0);
    }

    #[test]
    fn test_looping_clip_wraps() {
        let mut player = AnimationPlayer::default();
        player.play(Animation::RunLeft, true);
        for _ in 0..9 {
            player.advance(1.0 / 15.0 + 1e-4);
        }
        assert!(player.is_playing());
        assert_eq!(player.sheet_frame(), 1);
    }

    #[test]
    fn test_idle_uses_offset_frames() {
        let mut player = AnimationPlayer::default();
        assert!(!player.is_playing());
        player.play(Animation::Idle, true);
        assert_eq!(player.sheet_frame(), 2);
        assert_eq!(Animation::Idle.key(), "notMoving");
    }
}
