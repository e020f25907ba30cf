//! Rectangle bodies and axis-aligned bounds
//!
//! A [`Body`] is what the physics backend integrates: a center position,
//! velocity, per-axis bounce and the contact flags from the last step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (y grows downward, screen convention)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_size: Vec2) -> Self {
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Which sides were in contact during the last physics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Touching {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Touching {
    /// Record a push out of a solid along `normal` (pointing away from it)
    pub fn mark(&mut self, normal: Vec2) {
        if normal.y < 0.0 {
            self.down = true;
        } else if normal.y > 0.0 {
            self.up = true;
        } else if normal.x < 0.0 {
            self.right = true;
        } else {
            self.left = true;
        }
    }
}

/// A dynamic rectangle body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub half_size: Vec2,
    /// Restitution per axis (0 = dead stop, 1 = perfectly elastic)
    pub bounce: Vec2,
    /// Clamp (and bounce) against the world rectangle
    pub collide_world_bounds: bool,
    /// Contact against other bodies (platforms) this step
    pub touching: Touching,
    /// Contact against the world rectangle this step
    pub blocked: Touching,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half_size: size * 0.5,
            bounce: Vec2::ZERO,
            collide_world_bounds: false,
            touching: Touching::default(),
            blocked: Touching::default(),
        }
    }

    pub fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = Vec2::splat(bounce);
        self
    }

    pub fn with_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_size)
    }

    /// Standing on a platform or on the world floor
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.touching.down || self.blocked.down
    }

    /// Move to `pos` at rest with cleared contact flags
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.touching = Touching::default();
        self.blocked = Touching::default();
    }

    /// Semi-implicit Euler step under constant downward gravity
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        self.touching = Touching::default();
        self.blocked = Touching::default();
        self.vel.y += gravity * dt;
        self.pos += self.vel * dt;
    }
}

/// An immovable platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub bounds: Aabb,
}

impl Platform {
    /// Platform art centered at `center`, scaled from the base platform size
    pub fn new(id: u32, center: Vec2, scale: Vec2) -> Self {
        use crate::consts::{PLATFORM_HEIGHT, PLATFORM_WIDTH};
        let size = Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT) * scale;
        Self {
            id,
            bounds: Aabb::from_center(center, size * 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&b));

        let c = Aabb::from_center(Vec2::new(19.0, 5.0), Vec2::splat(10.0));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_integrate_applies_gravity_and_clears_contacts() {
        let mut body = Body::new(Vec2::new(100.0, 100.0), Vec2::splat(20.0));
        body.touching.down = true;
        body.integrate(300.0, 0.5);
        assert_eq!(body.vel, Vec2::new(0.0, 150.0));
        assert_eq!(body.pos, Vec2::new(100.0, 175.0));
        assert_eq!(body.touching, Touching::default());
    }

    #[test]
    fn test_mark_maps_push_axis_to_side() {
        let mut touching = Touching::default();
        touching.mark(Vec2::NEG_Y);
        assert!(touching.down);
        touching.mark(Vec2::NEG_X);
        assert!(touching.right);
        assert!(!touching.up && !touching.left);

        let mut touching = Touching::default();
        touching.mark(Vec2::Y);
        touching.mark(Vec2::X);
        assert!(touching.up && touching.left);
    }

    #[test]
    fn test_scaled_platform_extent() {
        let ground = Platform::new(0, Vec2::new(360.0, 1270.0), Vec2::splat(2.0));
        assert_eq!(ground.bounds.min, Vec2::new(-40.0, 1238.0));
        assert_eq!(ground.bounds.max, Vec2::new(760.0, 1302.0));
    }
}
