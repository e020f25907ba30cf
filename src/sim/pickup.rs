//! Heart pickups
//!
//! A fixed pool of [`PICKUP_COUNT`] slots. Collecting a heart only clears its
//! `active` flag; a level-up re-enables every slot on a fresh row.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::{PICKUP_COUNT, PICKUP_SIZE};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub body: Body,
    pub active: bool,
}

/// Fixed-capacity pickup arena with per-slot liveness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupPool {
    slots: [Pickup; PICKUP_COUNT],
}

impl PickupPool {
    /// Opening row: hearts staggered upward so they rain in one by one
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let slots = std::array::from_fn(|slot| {
            let x = row_x(tuning, slot);
            let y = tuning.pickup_row_start_y + tuning.pickup_row_step_y * slot as f32;
            let mut body = Body::new(Vec2::new(x, y), Vec2::splat(PICKUP_SIZE));
            body.bounce.y = random_bounce(tuning, rng);
            Pickup { body, active: true }
        });
        Self { slots }
    }

    pub fn get(&self, slot: usize) -> Option<&Pickup> {
        self.slots.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pickup> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pickup> {
        self.slots.iter_mut()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    /// Deactivate a slot. Returns false if it was already inactive (or out of
    /// range) so callers can skip scoring.
    pub fn deactivate(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(pickup) if pickup.active => {
                pickup.active = false;
                pickup.body.vel = Vec2::ZERO;
                true
            }
            _ => false,
        }
    }

    /// Re-enable every slot on a fresh row at the respawn height, each with a
    /// newly rolled vertical bounce
    pub fn respawn_row<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) {
        for (slot, pickup) in self.slots.iter_mut().enumerate() {
            pickup
                .body
                .reset(Vec2::new(row_x(tuning, slot), tuning.pickup_respawn_y));
            pickup.body.bounce.y = random_bounce(tuning, rng);
            pickup.active = true;
        }
    }
}

fn row_x(tuning: &Tuning, slot: usize) -> f32 {
    tuning.pickup_row_start_x + tuning.pickup_row_step_x() * slot as f32
}

fn random_bounce<R: Rng>(tuning: &Tuning, rng: &mut R) -> f32 {
    rng.random_range(tuning.pickup_bounce_min..=tuning.pickup_bounce_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn pool() -> (PickupPool, Tuning, Pcg32) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let pool = PickupPool::new(&tuning, &mut rng);
        (pool, tuning, rng)
    }

    #[test]
    fn test_opening_row_layout() {
        let (pool, _, _) = pool();
        assert_eq!(pool.active_count(), PICKUP_COUNT);
        let first = pool.get(0).unwrap();
        let last = pool.get(9).unwrap();
        assert_eq!(first.body.pos, Vec2::new(30.0, 5.0));
        assert_eq!(last.body.pos, Vec2::new(30.0 + 9.0 * 72.0, 5.0 - 270.0));
        for p in pool.iter() {
            assert!((0.2..=0.5).contains(&p.body.bounce.y));
        }
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let (mut pool, _, _) = pool();
        assert!(pool.deactivate(4));
        assert!(!pool.deactivate(4));
        assert!(!pool.deactivate(PICKUP_COUNT));
        assert_eq!(pool.active_count(), PICKUP_COUNT - 1);
    }

    #[test]
    fn test_respawn_reactivates_all_on_fresh_row() {
        let (mut pool, tuning, mut rng) = pool();
        for slot in 0..PICKUP_COUNT {
            pool.deactivate(slot);
        }
        assert_eq!(pool.active_count(), 0);

        pool.respawn_row(&tuning, &mut rng);
        assert_eq!(pool.active_count(), PICKUP_COUNT);
        for (slot, p) in pool.iter().enumerate() {
            assert_eq!(p.body.pos, Vec2::new(30.0 + 72.0 * slot as f32, 0.0));
            assert_eq!(p.body.vel, Vec2::ZERO);
            assert!((0.2..=0.5).contains(&p.body.bounce.y));
        }
    }
}
