//! Physics boundary and the built-in arcade backend
//!
//! The simulation never reacts to engine callbacks. Each tick it asks a
//! [`PhysicsBackend`] to advance the world once and hand back the contacts it
//! found, then resolves them itself.

use glam::Vec2;

use super::body::{Aabb, Body, Platform};
use super::state::World;

/// A gameplay-relevant contact found during a physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Player overlaps an active pickup (no physical response)
    PlayerPickup { slot: usize },
    /// Player collided with a hazard
    PlayerHazard { id: u32 },
}

/// Anything that can advance bodies and report contacts
pub trait PhysicsBackend {
    /// Integrate every dynamic body in `world` by `dt` seconds, resolve
    /// platform and world-bound collisions, and return the player's pickup
    /// overlaps followed by hazard collisions.
    fn step(&mut self, world: &mut World, dt: f32) -> Vec<Contact>;
}

/// Axis-aligned arcade physics: constant gravity, immovable platforms,
/// minimum-axis separation and per-axis bounce
#[derive(Debug, Clone, Default)]
pub struct ArcadePhysics;

impl PhysicsBackend for ArcadePhysics {
    fn step(&mut self, world: &mut World, dt: f32) -> Vec<Contact> {
        let gravity = world.gravity;
        let bounds = world.bounds;

        step_body(&mut world.player.body, gravity, dt, &world.platforms, &bounds);
        for pickup in world.pickups.iter_mut().filter(|p| p.active) {
            step_body(&mut pickup.body, gravity, dt, &world.platforms, &bounds);
        }
        for hazard in world.hazards.iter_mut() {
            step_body(&mut hazard.body, gravity, dt, &world.platforms, &bounds);
        }

        let player = world.player.body.aabb();
        let mut contacts: Vec<Contact> = world
            .pickups
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active && p.body.aabb().overlaps(&player))
            .map(|(slot, _)| Contact::PlayerPickup { slot })
            .collect();
        contacts.extend(
            world
                .hazards
                .iter()
                .filter(|h| h.body.aabb().overlaps(&player))
                .map(|h| Contact::PlayerHazard { id: h.id }),
        );
        contacts
    }
}

fn step_body(body: &mut Body, gravity: f32, dt: f32, platforms: &[Platform], bounds: &Aabb) {
    body.integrate(gravity, dt);
    for platform in platforms {
        if let Some(normal) = separate(body, &platform.bounds) {
            body.touching.mark(normal);
        }
    }
    if body.collide_world_bounds {
        constrain_to_bounds(body, bounds);
    }
}

/// Reflect velocity about a surface normal
pub fn reflect_velocity(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Push `body` out of an immovable `solid` along the axis of least
/// penetration, bouncing the velocity component on that axis.
///
/// Returns the unit axis the body was pushed along. Contact flags are left
/// to the caller.
pub fn separate(body: &mut Body, solid: &Aabb) -> Option<Vec2> {
    let b = body.aabb();
    if !b.overlaps(solid) {
        return None;
    }

    let push_left = b.max.x - solid.min.x;
    let push_right = solid.max.x - b.min.x;
    let push_up = b.max.y - solid.min.y;
    let push_down = solid.max.y - b.min.y;

    let (normal, penetration) = [
        (Vec2::NEG_X, push_left),
        (Vec2::X, push_right),
        (Vec2::NEG_Y, push_up),
        (Vec2::Y, push_down),
    ]
    .into_iter()
    .min_by(|a, b| a.1.total_cmp(&b.1))?;

    body.pos += normal * penetration;

    let approach = body.vel.dot(normal);
    if approach < 0.0 {
        let restitution = if normal.x != 0.0 { body.bounce.x } else { body.bounce.y };
        // Reflect, then damp the reflected component
        let reflected = reflect_velocity(body.vel, normal);
        body.vel = reflected - (1.0 - restitution) * reflected.dot(normal) * normal;
    }

    Some(normal)
}

/// Keep `body` inside `bounds`, bouncing off the edges
pub fn constrain_to_bounds(body: &mut Body, bounds: &Aabb) {
    let half = body.half_size;

    if body.pos.x - half.x < bounds.min.x {
        body.pos.x = bounds.min.x + half.x;
        if body.vel.x < 0.0 {
            body.vel.x = -body.vel.x * body.bounce.x;
        }
        body.blocked.left = true;
    } else if body.pos.x + half.x > bounds.max.x {
        body.pos.x = bounds.max.x - half.x;
        if body.vel.x > 0.0 {
            body.vel.x = -body.vel.x * body.bounce.x;
        }
        body.blocked.right = true;
    }

    if body.pos.y - half.y < bounds.min.y {
        body.pos.y = bounds.min.y + half.y;
        if body.vel.y < 0.0 {
            body.vel.y = -body.vel.y * body.bounce.y;
        }
        body.blocked.up = true;
    } else if body.pos.y + half.y > bounds.max.y {
        body.pos.y = bounds.max.y - half.y;
        if body.vel.y > 0.0 {
            body.vel.y = -body.vel.y * body.bounce.y;
        }
        body.blocked.down = true;
    }
}
