//! Bouncing fire hazards
//!
//! One is spawned per level-up and none are ever removed, so the screen gets
//! busier every level.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::HAZARD_SIZE;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub body: Body,
    pub scale: f32,
}

/// Create a hazard at the top-center spawn point with a random sideways
/// launch. Bounce is fully elastic so it never comes to rest.
pub fn spawn_hazard<R: Rng>(tuning: &Tuning, rng: &mut R, id: u32, scale: f32) -> Hazard {
    let (x, y) = tuning.hazard_spawn;
    let max_vx = tuning.hazard_max_speed_x;
    let vx = if max_vx > 0.0 {
        rng.random_range(-max_vx..=max_vx)
    } else {
        0.0
    };

    let mut body = Body::new(Vec2::new(x, y), Vec2::splat(HAZARD_SIZE * scale))
        .with_bounce(tuning.hazard_bounce)
        .with_world_bounds();
    body.vel = Vec2::new(vx, tuning.hazard_speed_y);

    log::debug!("Spawned hazard {} at ({}, {}) vel=({:.1}, {})", id, x, y, vx, tuning.hazard_speed_y);

    Hazard { id, body, scale }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_parameters() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..200 {
            let hazard = spawn_hazard(&tuning, &mut rng, id, 1.0);
            assert_eq!(hazard.id, id);
            assert_eq!(hazard.body.pos, Vec2::new(360.0, 0.0));
            assert!((-500.0..=500.0).contains(&hazard.body.vel.x));
            assert_eq!(hazard.body.vel.y, 20.0);
            assert_eq!(hazard.body.bounce, Vec2::ONE);
            assert!(hazard.body.collide_world_bounds);
            assert_eq!(hazard.scale, 1.0);
        }
    }

    #[test]
    fn test_scale_sizes_body() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let hazard = spawn_hazard(&tuning, &mut rng, 0, 2.0);
        assert_eq!(hazard.body.half_size, Vec2::splat(HAZARD_SIZE));
    }

    #[test]
    fn test_same_seed_same_launch() {
        let tuning = Tuning::default();
        let a = spawn_hazard(&tuning, &mut Pcg32::seed_from_u64(9), 0, 1.0);
        let b = spawn_hazard(&tuning, &mut Pcg32::seed_from_u64(9), 0, 1.0);
        assert_eq!(a.body.vel, b.body.vel);
    }
}
