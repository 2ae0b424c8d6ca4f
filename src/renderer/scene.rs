//! Scene assembly: game state to a triangle list in world pixels
//!
//! Draw order is back to front: sky, platforms, stars, bombs, player,
//! then the optional physics body outlines.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{SIM_DT, WORLD_HEIGHT, WORLD_WIDTH};
use crate::settings::Settings;
use crate::sim::{Animation, Body, GameState, Player, Rect, Sheet};

/// Gradient bands in the sky
const SKY_BANDS: u32 = 100;
/// Grass strip on top of each platform
const GRASS_HEIGHT: f32 = 6.0;
const BOMB_SEGMENTS: u32 = 16;
const DEBUG_LINE: f32 = 1.0;

/// Build every vertex for one frame
pub fn build(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let time = state.time_ticks as f32 * SIM_DT;
    let mut vertices = Vec::with_capacity(4096);

    let world = Rect::new(Vec2::ZERO, Vec2::new(WORLD_WIDTH, WORLD_HEIGHT));
    vertices.extend(shapes::vertical_gradient(
        &world,
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
        SKY_BANDS,
    ));

    for platform in &state.platforms {
        vertices.extend(shapes::rect(&platform.rect, colors::PLATFORM));
        let grass = Rect::new(
            platform.rect.min,
            Vec2::new(platform.rect.size.x, GRASS_HEIGHT),
        );
        vertices.extend(shapes::rect(&grass, colors::PLATFORM_GRASS));
    }

    for star in state.stars.iter().filter(|s| s.active) {
        let rect = star.body.rect();
        let center = rect.center();
        let outer = rect.size.y / 2.0 + 1.0;
        // Gentle twinkle, phase-shifted per star
        let pulse = 1.0 + 0.08 * (time * 4.0 + star.id as f32).sin();
        vertices.extend(shapes::star(center, outer * pulse, outer * 0.45, colors::STAR));
        vertices.extend(shapes::circle(center, outer * 0.25, colors::STAR_CORE, 8));
    }

    for bomb in &state.bombs {
        let rect = bomb.body.rect();
        let center = rect.center();
        let radius = rect.size.x / 2.0;
        vertices.extend(shapes::circle(center, radius, colors::BOMB, BOMB_SEGMENTS));
        // Fuse spark flickers while the world runs
        let spark = if state.physics_paused {
            1.5
        } else {
            1.5 + (time * 20.0 + bomb.id as f32).sin().abs() * 1.5
        };
        vertices.extend(shapes::circle(
            center + Vec2::new(radius * 0.6, -radius * 0.8),
            spark,
            colors::BOMB_SPARK,
            6,
        ));
    }

    player_vertices(&state.player, &mut vertices);

    if settings.debug_bodies {
        debug_body(&state.player.body, &mut vertices);
        for star in state.stars.iter().filter(|s| s.active) {
            debug_body(&star.body, &mut vertices);
        }
        for bomb in &state.bombs {
            debug_body(&bomb.body, &mut vertices);
        }
    }

    vertices
}

/// The player is drawn inside its hitbox so what you see is what collides
fn player_vertices(player: &Player, out: &mut Vec<Vertex>) {
    let hitbox = player.body.rect();
    let facing = if player.flip_x { -1.0 } else { 1.0 };
    let anim = player.animation();
    let sheet = anim.clip().sheet;
    let frame = player.anim.sheet_frame();

    if sheet == Sheet::Dead {
        // Fades into a heap on the floor as the clip plays out
        let t = player.anim.progress();
        let color = mix(colors::PLAYER, colors::PLAYER_DEAD, t);
        let length = hitbox.size.y;
        let height = 18.0;
        let body = Rect::new(
            Vec2::new(hitbox.center().x - length / 2.0, hitbox.max().y - height),
            Vec2::new(length, height),
        );
        out.extend(shapes::rect(&body, color));
        let head = Vec2::new(
            body.center().x + facing * (length / 2.0),
            body.max().y - 11.0,
        );
        out.extend(shapes::circle(head, 11.0, color, 12));
        return;
    }

    // Vertical squash per pose
    let (drop, bob) = match (anim, sheet) {
        (Animation::Crouch, _) => (22.0, 0.0),
        (_, Sheet::Run) => (0.0, (frame % 2) as f32 * 2.0),
        _ => (0.0, 0.0),
    };
    let top = hitbox.min.y + drop + bob;
    let head_radius = 12.0;
    let head = Vec2::new(hitbox.center().x + facing * 4.0, top + head_radius);
    let torso = Rect::new(
        Vec2::new(hitbox.min.x + 3.0, top + head_radius * 1.5),
        Vec2::new(
            hitbox.size.x - 6.0,
            (hitbox.max().y - 10.0 - (top + head_radius * 1.5)).max(6.0),
        ),
    );

    // Tail trails behind
    let tail_root = Vec2::new(torso.center().x - facing * torso.size.x / 2.0, torso.min.y + 8.0);
    out.extend(shapes::triangle(
        tail_root,
        tail_root + Vec2::new(-facing * 14.0, -10.0),
        tail_root + Vec2::new(0.0, 8.0),
        colors::PLAYER,
    ));

    // Legs alternate while running, tuck in the air
    let stride = match sheet {
        Sheet::Run if frame.is_multiple_of(2) => 4.0,
        Sheet::Run => -4.0,
        _ => 0.0,
    };
    let leg_top = torso.max().y;
    let leg_height = if anim == Animation::JumpUp {
        6.0
    } else {
        (hitbox.max().y - leg_top).max(2.0)
    };
    for side in [-1.0, 1.0] {
        let x = torso.center().x + side * 8.0 + side * stride - 3.0;
        let leg = Rect::new(Vec2::new(x, leg_top), Vec2::new(6.0, leg_height));
        out.extend(shapes::rect(&leg, colors::PLAYER));
    }

    out.extend(shapes::rect(&torso, colors::PLAYER));
    let belly = Rect::new(
        torso.min + Vec2::new(torso.size.x * 0.25, torso.size.y * 0.2),
        Vec2::new(torso.size.x * 0.5, torso.size.y * 0.6),
    );
    out.extend(shapes::rect(&belly, colors::PLAYER_BELLY));

    // Ears
    for side in [-1.0, 1.0] {
        let base = head + Vec2::new(side * 7.0, -head_radius * 0.6);
        out.extend(shapes::triangle(
            base + Vec2::new(-4.0, 0.0),
            base + Vec2::new(4.0, 0.0),
            base + Vec2::new(side * 2.0, -9.0),
            colors::PLAYER,
        ));
    }
    out.extend(shapes::circle(head, head_radius, colors::PLAYER, 14));
    out.extend(shapes::circle(
        head + Vec2::new(facing * 5.0, -2.0),
        2.0,
        colors::EYE,
        6,
    ));
}

/// Outline a body's collision rect; green while it touches anything
fn debug_body(body: &Body, out: &mut Vec<Vertex>) {
    let color = if body.touching.any() {
        colors::DEBUG_TOUCHING
    } else {
        colors::DEBUG_BODY
    };
    out.extend(shapes::rect_outline(&body.rect(), DEBUG_LINE, color));
}

fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}
