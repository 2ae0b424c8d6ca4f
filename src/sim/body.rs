//! Arcade physics bodies
//!
//! A body follows its sprite: `pos` is the sprite center, and the hitbox is
//! placed relative to the sprite frame's top-left corner. Changing the hitbox
//! never moves the sprite, only the collision box.

use glam::Vec2;

use super::rect::Rect;

/// Contact flags for each side of a body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touching {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Touching {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Collision box placement relative to the sprite frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub size: Vec2,
    pub offset: Vec2,
}

impl Hitbox {
    pub const fn new(width: f32, height: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::new(offset_x, offset_y),
        }
    }
}

/// A dynamic physics body
#[derive(Debug, Clone)]
pub struct Body {
    /// Sprite center
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite frame size (hitbox offsets are measured from its top-left)
    pub frame: Vec2,
    pub hitbox: Hitbox,
    /// Restitution per axis
    pub bounce: Vec2,
    pub allow_gravity: bool,
    pub collide_world_bounds: bool,
    /// Contact with static bodies during the last step
    pub touching: Touching,
    /// Contact with the world bounds during the last step
    pub blocked: Touching,
}

impl Body {
    /// New body whose hitbox covers the whole frame
    pub fn new(pos: Vec2, frame: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            frame,
            hitbox: Hitbox {
                size: frame,
                offset: Vec2::ZERO,
            },
            bounce: Vec2::ZERO,
            allow_gravity: true,
            collide_world_bounds: false,
            touching: Touching::default(),
            blocked: Touching::default(),
        }
    }

    /// Current collision box in world space
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos - self.frame / 2.0 + self.hitbox.offset, self.hitbox.size)
    }

    pub fn set_hitbox(&mut self, hitbox: Hitbox) {
        self.hitbox = hitbox;
    }

    /// Move the body so its collision box starts at `min`
    pub fn set_rect_min(&mut self, min: Vec2) {
        self.pos = min + self.frame / 2.0 - self.hitbox.offset;
    }

    /// Teleport and stop (used when a star re-enters play)
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.touching = Touching::default();
        self.blocked = Touching::default();
    }

    /// Standing on something solid
    pub fn on_floor(&self) -> bool {
        self.touching.down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_follows_offset() {
        let mut body = Body::new(Vec2::new(100.0, 475.0), Vec2::splat(128.0));
        body.set_hitbox(Hitbox::new(35.0, 65.0, 55.0, 55.0));
        let rect = body.rect();
        assert_eq!(rect.min, Vec2::new(91.0, 466.0));
        assert_eq!(rect.size, Vec2::new(35.0, 65.0));

        // Sprite stays put when the hitbox moves
        body.set_hitbox(Hitbox::new(35.0, 65.0, 30.0, 55.0));
        assert_eq!(body.pos, Vec2::new(100.0, 475.0));
        assert_eq!(body.rect().min.x, 66.0);
    }

    #[test]
    fn test_set_rect_min_round_trips() {
        let mut body = Body::new(Vec2::new(10.0, 10.0), Vec2::splat(128.0));
        body.set_hitbox(Hitbox::new(35.0, 65.0, 45.0, 65.0));
        body.set_rect_min(Vec2::new(200.0, 300.0));
        assert_eq!(body.rect().min, Vec2::new(200.0, 300.0));
    }
}
