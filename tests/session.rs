use coin_crawl::consts::*;
use coin_crawl::highscores;
use coin_crawl::sim::{Enemy, GameEvent, GamePhase, GameSession, TickInput, tick};
use coin_crawl::{Action, KeyValueStore, MemoryStore, Tuning};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A playing session with no skeletons, so tests place their own
fn empty_arena(seed: u64) -> GameSession {
    let tuning = Tuning {
        enemy_count: 0,
        ..Default::default()
    };
    let mut session = GameSession::with_tuning(seed, tuning);
    session.start();
    session.drain_events();
    session
}

fn step(session: &mut GameSession, store: &mut MemoryStore) {
    tick(session, &TickInput::default(), FRAME_DT, store);
}

fn standing_enemy(id: u32, x: f32, y: f32, damage: u32) -> Enemy {
    let mut enemy = Enemy::new(id, Vec2::new(x, y), Vec2::ZERO, damage);
    enemy.size = Vec2::splat(32.0);
    enemy
}

// ── Attacks ───────────────────────────────────────────────────────────────────

#[test]
fn skeleton_bite_then_cooldown() {
    let mut store = MemoryStore::new();
    let mut session = empty_arena(1);
    session.player.pos = Vec2::new(100.0, 100.0);
    session.player.size = Vec2::splat(32.0);
    session.enemies.push(standing_enemy(1, 100.0, 100.0, 7));

    step(&mut session, &mut store);
    assert_eq!(session.player.health, 93);
    assert_eq!(session.enemies[0].attack_cooldown, 300);

    step(&mut session, &mut store);
    assert_eq!(session.player.health, 93);
    assert!(session.enemies[0].attack_cooldown > 0);

    let hits = session
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::PlayerHit { .. }))
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn cooldown_runs_out_after_300_ticks() {
    let mut store = MemoryStore::new();
    let mut session = empty_arena(2);
    session.player.pos = Vec2::new(100.0, 100.0);
    let mut enemy = standing_enemy(1, 600.0, 600.0, 3);
    enemy.attack_cooldown = 300;
    session.enemies.push(enemy);

    for _ in 0..299 {
        step(&mut session, &mut store);
    }
    assert_eq!(session.enemies[0].attack_cooldown, 1);
    assert!(!session.enemies[0].can_attack());

    step(&mut session, &mut store);
    assert_eq!(session.enemies[0].attack_cooldown, 0);
    assert!(session.enemies[0].can_attack());

    step(&mut session, &mut store);
    assert_eq!(session.enemies[0].attack_cooldown, 0);
}

#[test]
fn fatal_bite_ends_the_run_in_the_same_tick() {
    let mut store = MemoryStore::new();
    let mut session = empty_arena(3);
    session.player.pos = Vec2::new(200.0, 200.0);
    session.player.health = 5;
    session.enemies.push(standing_enemy(1, 210.0, 210.0, 7));
    // A second skeleton that would bite too if the pass kept going
    session.enemies.push(standing_enemy(2, 205.0, 205.0, 9));

    step(&mut session, &mut store);

    assert_eq!(session.phase, GamePhase::End);
    assert_eq!(session.player.health, 0);
    assert_eq!(session.enemies[1].attack_cooldown, 0);
    assert_eq!(session.high_score, Some(session.score));

    let events = session.drain_events();
    assert!(matches!(
        events[events.len() - 2],
        GameEvent::PlayerHit { health: 0, .. }
    ));
    assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
}

// ── High score policy ─────────────────────────────────────────────────────────

fn finish_with(store: &mut MemoryStore, score: u64) -> GameSession {
    let mut session = empty_arena(4);
    session.score = score;
    session.end_game(store);
    session
}

#[test]
fn first_run_records_zero() {
    let mut store = MemoryStore::new();
    let session = finish_with(&mut store, 0);
    assert_eq!(session.high_score, Some(0));
    assert_eq!(highscores::load(&store), Some(0));
}

#[test]
fn equal_score_overwrites() {
    let mut store = MemoryStore::new();
    store.set(highscores::STORAGE_KEY, "5").unwrap();
    let session = finish_with(&mut store, 5);
    assert_eq!(session.high_score, Some(5));
    assert_eq!(store.get(highscores::STORAGE_KEY).as_deref(), Some("5"));
}

#[test]
fn lower_score_keeps_record() {
    let mut store = MemoryStore::new();
    store.set(highscores::STORAGE_KEY, "10").unwrap();
    let session = finish_with(&mut store, 3);
    assert_eq!(session.high_score, Some(10));
    assert_eq!(highscores::load(&store), Some(10));
}

#[test]
fn high_score_lives_as_long_as_its_store() {
    let mut store = MemoryStore::new();
    finish_with(&mut store, 8);
    let next = finish_with(&mut store, 2);
    assert_eq!(next.high_score, Some(8));

    // A fresh store knows nothing of earlier runs
    let mut fresh = MemoryStore::new();
    assert_eq!(highscores::load(&fresh), None);
    assert_eq!(finish_with(&mut fresh, 2).high_score, Some(2));
}

// ── Coins and score ───────────────────────────────────────────────────────────

#[test]
fn standing_on_a_coin_scores_one() {
    let mut store = MemoryStore::new();
    let mut session = empty_arena(5);
    // A tiny player dropped on the first coin
    let target = session.coins.coins()[0].pos;
    session.player.pos = target;
    session.player.size = Vec2::splat(1.0);

    step(&mut session, &mut store);
    assert!(session.score >= 1);
    let collected = session
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::CoinCollected { .. }))
        .count() as u64;
    assert_eq!(collected, session.score);
}

#[test]
fn emptied_field_refills_before_tick_returns() {
    let mut store = MemoryStore::new();
    let mut session = empty_arena(6);
    session.player.size = Vec2::splat(1.0);
    let mut refilled = false;

    for _ in 0..200 {
        let target = session.coins.coins()[0].pos;
        session.player.pos = target;
        step(&mut session, &mut store);
        assert!(!session.coins.is_empty());

        if session
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::CoinsRespawned { .. }))
        {
            refilled = true;
            break;
        }
    }
    assert!(refilled);
}

#[test]
fn random_play_keeps_invariants() {
    let mut store = MemoryStore::new();
    let mut session = GameSession::new(777);
    let mut keys = Pcg32::seed_from_u64(777);
    tick(&mut session, &TickInput { start: true }, FRAME_DT, &mut store);

    let mut last_score = 0;
    for t in 0..3_000 {
        if t % 20 == 0 {
            for action in Action::ALL {
                if keys.random_bool(0.3) {
                    session.controls.press(action);
                } else {
                    session.controls.release(action);
                }
            }
        }
        step(&mut session, &mut store);

        let gained = session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::CoinCollected { .. }))
            .count() as u64;
        assert_eq!(session.score, last_score + gained);
        last_score = session.score;

        assert!(!session.coins.is_empty());
        let p = &session.player;
        assert!(p.pos.x >= ARENA_MIN_X && p.pos.x + p.size.x <= ARENA_MAX_X + 1e-3);
        assert!(p.pos.y >= ARENA_TOP && p.pos.y + p.size.y <= ARENA_BOTTOM + 1e-3);
        for enemy in &session.enemies {
            assert!(enemy.pos.x >= ARENA_MIN_X && enemy.pos.x + enemy.size.x <= ARENA_MAX_X + 1e-3);
            assert!(enemy.pos.y >= ARENA_TOP && enemy.pos.y + enemy.size.y <= ARENA_BOTTOM + 1e-3);
        }

        if session.phase == GamePhase::End {
            break;
        }
    }
}
