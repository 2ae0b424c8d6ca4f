//! Arcade physics step: gravity, integration, static separation, world bounds
//!
//! Bodies are separated from static platforms along the axis of least
//! penetration. A body moving into a surface rebounds by `-v * bounce` on that
//! axis; a body resting on a floor is pulled back in by gravity every step,
//! which keeps `touching.down` set while it stands still.

use glam::Vec2;

use super::body::{Body, Touching};
use super::rect::Rect;

/// Clear per-step contact flags (call before integrating)
pub fn begin_step(body: &mut Body) {
    body.touching = Touching::default();
    body.blocked = Touching::default();
}

/// Apply gravity and advance position
pub fn integrate(body: &mut Body, gravity: f32, dt: f32) {
    if body.allow_gravity {
        body.vel.y += gravity * dt;
    }
    body.pos += body.vel * dt;
}

/// Rebound a velocity component that points into a surface
#[inline]
fn rebound(v: f32, into_surface: bool, bounce: f32) -> f32 {
    if into_surface { -v * bounce } else { v }
}

/// Push a body out of a static rect, updating contact flags and velocity.
///
/// Returns true if the body was overlapping.
pub fn separate_static(body: &mut Body, solid: &Rect) -> bool {
    let rect = body.rect();
    let Some(pen) = rect.penetration(solid) else {
        return false;
    };
    let body_center = rect.center();
    let solid_center = solid.center();

    let push = if pen.y <= pen.x {
        if body_center.y < solid_center.y {
            // Landed on top
            body.touching.down = true;
            body.vel.y = rebound(body.vel.y, body.vel.y > 0.0, body.bounce.y);
            Vec2::new(0.0, -pen.y)
        } else {
            // Head bump
            body.touching.up = true;
            body.vel.y = rebound(body.vel.y, body.vel.y < 0.0, body.bounce.y);
            Vec2::new(0.0, pen.y)
        }
    } else if body_center.x < solid_center.x {
        body.touching.right = true;
        body.vel.x = rebound(body.vel.x, body.vel.x > 0.0, body.bounce.x);
        Vec2::new(-pen.x, 0.0)
    } else {
        body.touching.left = true;
        body.vel.x = rebound(body.vel.x, body.vel.x < 0.0, body.bounce.x);
        Vec2::new(pen.x, 0.0)
    };

    body.pos += push;
    true
}

/// Keep a body inside the world, bouncing off the edges
///
/// Returns true if any edge was hit.
pub fn collide_world_bounds(body: &mut Body, bounds: &Rect) -> bool {
    if !body.collide_world_bounds {
        return false;
    }

    let rect = body.rect();
    let mut min = rect.min;
    let max_allowed = bounds.max() - rect.size;

    if min.x < bounds.min.x {
        min.x = bounds.min.x;
        body.blocked.left = true;
        body.vel.x = rebound(body.vel.x, body.vel.x < 0.0, body.bounce.x);
    } else if min.x > max_allowed.x {
        min.x = max_allowed.x;
        body.blocked.right = true;
        body.vel.x = rebound(body.vel.x, body.vel.x > 0.0, body.bounce.x);
    }

    if min.y < bounds.min.y {
        min.y = bounds.min.y;
        body.blocked.up = true;
        body.vel.y = rebound(body.vel.y, body.vel.y < 0.0, body.bounce.y);
    } else if min.y > max_allowed.y {
        min.y = max_allowed.y;
        body.blocked.down = true;
        body.vel.y = rebound(body.vel.y, body.vel.y > 0.0, body.bounce.y);
    }

    if min != rect.min {
        body.set_rect_min(min);
        true
    } else {
        false
    }
}

/// Full step for one body against the static world
pub fn step_body(body: &mut Body, solids: &[Rect], bounds: &Rect, gravity: f32, dt: f32) {
    begin_step(body);
    integrate(body, gravity, dt);
    for solid in solids {
        separate_static(body, solid);
    }
    collide_world_bounds(body, bounds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SIM_DT, WORLD_HEIGHT, WORLD_WIDTH};

    fn world() -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(WORLD_WIDTH, WORLD_HEIGHT))
    }

    fn ground() -> Rect {
        Rect::new(Vec2::new(0.0, 536.0), Vec2::new(800.0, 64.0))
    }

    #[test]
    fn test_body_falls_and_lands() {
        let mut body = Body::new(Vec2::new(100.0, 400.0), Vec2::splat(20.0));
        let solids = [ground()];
        for _ in 0..300 {
            step_body(&mut body, &solids, &world(), 300.0, SIM_DT);
        }
        assert!(body.on_floor());
        let bottom = body.rect().max().y;
        assert!((bottom - 536.0).abs() < 0.5, "bottom = {}", bottom);
    }

    #[test]
    fn test_resting_body_stays_grounded() {
        let mut body = Body::new(Vec2::new(100.0, 526.0), Vec2::splat(20.0));
        body.bounce = Vec2::splat(0.1);
        let solids = [ground()];
        for _ in 0..120 {
            step_body(&mut body, &solids, &world(), 300.0, SIM_DT);
            assert!(body.on_floor());
        }
    }

    #[test]
    fn test_side_hit_rebounds_horizontally() {
        let wall = Rect::new(Vec2::new(50.0, 0.0), Vec2::new(20.0, 100.0));
        let mut body = Body::new(Vec2::new(47.0, 50.0), Vec2::splat(10.0));
        body.vel = Vec2::new(100.0, 0.0);
        body.bounce = Vec2::ONE;
        assert!(separate_static(&mut body, &wall));
        assert!(body.touching.right);
        assert!(!body.touching.down);
        assert_eq!(body.vel.x, -100.0);
        assert!(!body.rect().overlaps(&wall));
        // Now clear of the wall
        assert!(!separate_static(&mut body, &wall));
    }

    #[test]
    fn test_world_bounds_bounce() {
        let mut body = Body::new(Vec2::new(795.0, 300.0), Vec2::splat(14.0));
        body.collide_world_bounds = true;
        body.bounce = Vec2::ONE;
        body.vel = Vec2::new(150.0, 0.0);
        assert!(collide_world_bounds(&mut body, &world()));
        assert!(body.blocked.right);
        assert_eq!(body.vel.x, -150.0);
        assert_eq!(body.rect().max().x, WORLD_WIDTH);
    }

    #[test]
    fn test_gravity_exempt_body_keeps_velocity() {
        let mut body = Body::new(Vec2::new(400.0, 100.0), Vec2::splat(14.0));
        body.allow_gravity = false;
        body.vel = Vec2::new(50.0, 20.0);
        integrate(&mut body, 300.0, SIM_DT);
        assert_eq!(body.vel, Vec2::new(50.0, 20.0));
    }
}
