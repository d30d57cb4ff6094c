//! Coin scattering and pickup

use glam::Vec2;
use rand::Rng;

use super::entity::{Coin, Player};
use super::geometry::overlaps;
use crate::consts::*;
use crate::tuning::Tuning;

/// Random whole-unit position in `[min, max]` on both axes
pub(crate) fn scatter_position<R: Rng>(rng: &mut R, min: f32, max: Vec2) -> Vec2 {
    let lo = min as i32;
    let hi_x = (max.x.floor() as i32).max(lo);
    let hi_y = (max.y.floor() as i32).max(lo);
    Vec2::new(
        rng.random_range(lo..=hi_x) as f32,
        rng.random_range(lo..=hi_y) as f32,
    )
}

/// Result of one pickup pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectReport {
    /// Coins picked up this pass
    pub collected: u32,
    /// Size of the fresh batch, if the field ran dry
    pub respawned: Option<u32>,
}

/// The live coins in the arena
#[derive(Debug, Clone, Default)]
pub struct CoinField {
    coins: Vec<Coin>,
    next_id: u32,
}

impl CoinField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Scatter a new batch; the size is rolled once per batch
    pub fn spawn_batch<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) -> u32 {
        let count = rng.random_range(tuning.coin_batch_min..=tuning.coin_batch_max);
        let max = Vec2::new(COIN_FIELD_LIMIT - COIN_SIZE.x, COIN_FIELD_LIMIT - COIN_SIZE.y);

        self.coins.reserve(count as usize);
        for _ in 0..count {
            let pos = scatter_position(rng, WALL_MARGIN, max);
            let id = self.next_id;
            self.next_id += 1;
            self.coins.push(Coin::new(id, pos));
        }

        log::debug!("Spawned {} coins", count);
        count
    }

    /// Pick up every coin the player touches, refilling the field if it empties.
    ///
    /// The field is never empty when this returns.
    pub fn collect<R: Rng>(&mut self, player: &Player, rng: &mut R, tuning: &Tuning) -> CollectReport {
        let mut report = CollectReport::default();

        if self.coins.is_empty() {
            report.respawned = Some(self.spawn_batch(rng, tuning));
            return report;
        }

        let mut i = 0;
        while i < self.coins.len() {
            if !overlaps(player, &self.coins[i]) {
                i += 1;
                continue;
            }

            // Removal shifts the next coin into slot i
            self.coins.remove(i);
            report.collected += 1;

            if self.coins.is_empty() {
                report.respawned = Some(self.spawn_batch(rng, tuning));
                break;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field_with(positions: &[(f32, f32)]) -> CoinField {
        let mut field = CoinField::new();
        for &(x, y) in positions {
            let id = field.next_id;
            field.next_id += 1;
            field.coins.push(Coin::new(id, Vec2::new(x, y)));
        }
        field
    }

    #[test]
    fn test_batch_size_and_bounds() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = Tuning::default();
        for _ in 0..20 {
            let mut field = CoinField::new();
            let count = field.spawn_batch(&mut rng, &tuning);
            assert!((10..=40).contains(&count));
            assert_eq!(field.len(), count as usize);
            for coin in field.coins() {
                assert!(coin.pos.x >= WALL_MARGIN && coin.pos.y >= WALL_MARGIN);
                assert!(coin.pos.x + coin.size.x <= COIN_FIELD_LIMIT);
                assert!(coin.pos.y + coin.size.y <= COIN_FIELD_LIMIT);
                assert!(coin.animating);
            }
        }
    }

    #[test]
    fn test_adjacent_coins_are_not_skipped() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = Tuning::default();
        let player = Player::new(Vec2::new(100.0, 100.0));
        // Two touching coins back to back, then one far away
        let mut field = field_with(&[(105.0, 105.0), (110.0, 110.0), (600.0, 600.0)]);

        let report = field.collect(&player, &mut rng, &tuning);
        assert_eq!(report.collected, 2);
        assert_eq!(report.respawned, None);
        assert_eq!(field.len(), 1);
        assert_eq!(field.coins()[0].pos, Vec2::new(600.0, 600.0));
    }

    #[test]
    fn test_last_coin_refills_field() {
        let mut rng = Pcg32::seed_from_u64(9);
        let tuning = Tuning::default();
        let player = Player::new(Vec2::new(100.0, 100.0));
        let mut field = field_with(&[(100.0, 100.0)]);

        let report = field.collect(&player, &mut rng, &tuning);
        assert_eq!(report.collected, 1);
        let refill = report.respawned.unwrap();
        assert_eq!(field.len(), refill as usize);
        assert!(!field.is_empty());
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = Tuning::default();
        let player = Player::new(Vec2::new(400.0, 400.0));
        let mut field = field_with(&[(100.0, 100.0), (700.0, 100.0)]);

        assert_eq!(field.collect(&player, &mut rng, &tuning), CollectReport::default());
        assert_eq!(field.len(), 2);
    }
}
