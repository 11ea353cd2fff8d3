//! Per-frame simulation tick
//!
//! Core game loop that advances the session one frame at a time.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, SessionState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raw movement direction from held keys (y grows downward)
    pub movement: Vec2,
    /// Confirm was pressed this frame (edge, not hold)
    pub confirm: bool,
    /// Demo mode - steer toward items automatically
    pub autopilot: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut SessionState, input: &TickInput, dt: f32) {
    state.frame += 1;

    let mut input = input.clone();
    if input.autopilot {
        if state.phase == GamePhase::Opening {
            input.confirm = true;
        }
        input.movement = autopilot_direction(state);
    }
    let input = &input;

    match state.phase {
        GamePhase::Opening => {
            if input.confirm {
                state.begin_session();
            }
        }

        GamePhase::Playing => {
            move_player(state, input.movement, dt);

            let config = state.config;
            let center = state.player.center(config.player_size);
            state
                .camera
                .follow(center, config.world_size, config.viewport_size);

            collect_overlapping(state);

            if state.all_collected() {
                state.phase = GamePhase::Success;
                log::info!("All items collected, final score {}", state.player.score);
            }
        }

        GamePhase::Success => {}
    }

    if state.phase == GamePhase::Success && !state.end_sound_played {
        state.end_sound_played = true;
        state.events.push(GameEvent::SessionCompleted {
            score: state.player.score,
        });
    }
}

/// Apply movement, normalizing diagonals, then clamp to the world
fn move_player(state: &mut SessionState, movement: Vec2, dt: f32) {
    let dir = movement.normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let config = &state.config;
    let next = state.player.pos + dir * config.player_speed * dt;
    state.player.pos = config.clamp_player(next);
}

/// Collect every uncollected item the player overlaps
fn collect_overlapping(state: &mut SessionState) {
    let player_bounds = state.player.bounds(state.config.player_size);
    let item_size = state.config.item_size;

    for item in state.items.iter_mut().filter(|i| !i.collected) {
        if !player_bounds.intersects(&item.bounds(item_size)) {
            continue;
        }
        if let Some(value) = item.collect() {
            state.player.score += u64::from(value);
            state.events.push(GameEvent::ItemCollected { id: item.id, value });
            log::debug!(
                "Collected item {} worth {} (score {})",
                item.id,
                value,
                state.player.score
            );
        }
    }
}

/// Direction toward the nearest uncollected item, or zero if none
pub fn autopilot_direction(state: &SessionState) -> Vec2 {
    if state.phase != GamePhase::Playing {
        return Vec2::ZERO;
    }
    let config = &state.config;
    let from = state.player.center(config.player_size);

    let target = state
        .items
        .iter()
        .filter(|i| !i.collected)
        .map(|i| i.bounds(config.item_size).center())
        .min_by(|a, b| {
            a.distance_squared(from)
                .partial_cmp(&b.distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = target else {
        return Vec2::ZERO;
    };

    // Move one axis at a time once aligned to avoid jitter around the target
    let delta = target - from;
    let dead_zone = 2.0;
    Vec2::new(
        if delta.x.abs() > dead_zone { delta.x.signum() } else { 0.0 },
        if delta.y.abs() > dead_zone { delta.y.signum() } else { 0.0 },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::WorldConfig;
    use proptest::prelude::*;

    fn playing_state(seed: u64) -> SessionState {
        let mut state = SessionState::new(seed, WorldConfig::default());
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, FRAME_DT);
        state.drain_events();
        state
    }

    #[test]
    fn test_tick_opening_to_playing() {
        let mut state = SessionState::new(12345, WorldConfig::default());
        assert_eq!(state.phase, GamePhase::Opening);

        // Tick without confirm - should stay on the Opening screen
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.phase, GamePhase::Opening);
        assert!(state.items.is_empty());

        let input = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.items.len(), ITEM_COUNT);
        assert_eq!(state.player.pos, PLAYER_SPAWN);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.camera.offset, Vec2::ZERO);
        assert_eq!(state.drain_events(), vec![GameEvent::SessionStarted]);
    }

    #[test]
    fn test_item_at_spawn_collected_after_transition_frame() {
        // An item filling the whole world always lands on the spawn point
        let config = WorldConfig {
            world_size: Vec2::splat(128.0),
            item_size: Vec2::splat(128.0),
            item_count: 1,
            ..Default::default()
        };
        let mut state = SessionState::new(21, config);
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, PLAYER_SPAWN);
        assert!(
            state
                .player
                .bounds(config.player_size)
                .intersects(&state.items[0].bounds(config.item_size))
        );
        assert!(!state.items[0].collected);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.drain_events(), vec![GameEvent::SessionStarted]);

        tick(&mut state, &TickInput::default(), FRAME_DT);
        let item = state.items[0].clone();
        assert!(item.collected);
        assert_eq!(state.player.score, u64::from(item.value));
        assert_eq!(state.phase, GamePhase::Success);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::ItemCollected {
                    id: item.id,
                    value: item.value
                },
                GameEvent::SessionCompleted {
                    score: u64::from(item.value)
                },
            ]
        );
    }

    #[test]
    fn test_confirm_ignored_while_playing() {
        let mut state = playing_state(1);
        let layout: Vec<(Vec2, u32)> = state.items.iter().map(|i| (i.pos, i.value)).collect();
        let input = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        let after: Vec<(Vec2, u32)> = state.items.iter().map(|i| (i.pos, i.value)).collect();
        assert_eq!(layout, after);
        assert_eq!(state.sessions_started, 1);
    }

    #[test]
    fn test_diagonal_speed_matches_axis_speed() {
        let mut axis = playing_state(2);
        let mut diag = playing_state(2);
        axis.items.clear();
        diag.items.clear();
        axis.items.push(far_item());
        diag.items.push(far_item());
        let start = axis.player.pos;

        let right = TickInput {
            movement: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        let down_right = TickInput {
            movement: Vec2::new(1.0, 1.0),
            ..Default::default()
        };
        tick(&mut axis, &right, FRAME_DT);
        tick(&mut diag, &down_right, FRAME_DT);

        let axis_dist = axis.player.pos.distance(start);
        let diag_dist = diag.player.pos.distance(start);
        assert!((axis_dist - PLAYER_SPEED * FRAME_DT).abs() < 1e-3);
        assert!((axis_dist - diag_dist).abs() < 1e-3);
    }

    #[test]
    fn test_player_clamped_at_world_edge() {
        let mut state = playing_state(3);
        state.items = vec![far_item()];
        let up_left = TickInput {
            movement: Vec2::new(-1.0, -1.0),
            ..Default::default()
        };
        for _ in 0..120 {
            tick(&mut state, &up_left, FRAME_DT);
        }
        assert_eq!(state.player.pos, Vec2::ZERO);
    }

    #[test]
    fn test_camera_follows_player() {
        let mut state = playing_state(4);
        state.items = vec![far_item()];
        state.player.pos = Vec2::new(1500.0, 1500.0);
        tick(&mut state, &TickInput::default(), FRAME_DT);
        // Player center (1532, 1532) minus half the viewport
        assert_eq!(state.camera.offset, Vec2::new(1132.0, 1232.0));
    }

    #[test]
    fn test_collect_item_on_overlap() {
        let mut state = playing_state(5);
        let target = state.items[2].clone();
        state.items.retain(|i| i.id == target.id);
        state.items.push(far_item());
        state.player.pos = target.pos;
        tick(&mut state, &TickInput::default(), FRAME_DT);

        assert!(state.items[0].collected);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.score, u64::from(target.value));
        assert!(state.drain_events().contains(&GameEvent::ItemCollected {
            id: target.id,
            value: target.value
        }));

        // Standing on it again changes nothing
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.player.score, u64::from(target.value));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_overlapping_items_collected_together() {
        let mut state = playing_state(6);
        let spot = Vec2::new(1000.0, 1000.0);
        state.items.truncate(2);
        state.items.push(far_item());
        state.items[0].pos = spot;
        state.items[1].pos = spot + Vec2::new(5.0, 5.0);
        state.player.pos = spot;
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(state.items[0].collected && state.items[1].collected);
        assert_eq!(
            state.player.score,
            u64::from(state.items[0].value + state.items[1].value)
        );
    }

    #[test]
    fn test_full_session_reaches_success_once() {
        let mut state = playing_state(7);

        for idx in 0..ITEM_COUNT {
            state.player.pos = state.config.clamp_player(state.items[idx].pos);
            tick(&mut state, &TickInput::default(), FRAME_DT);
            assert!(state.items[idx].collected);
            assert_eq!(state.player.score, state.collected_total());
        }

        assert_eq!(state.phase, GamePhase::Success);
        let expected = state.player.score;
        let completions = |events: &[GameEvent]| {
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::SessionCompleted { .. }))
                .count()
        };
        let mut events = state.drain_events();
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), FRAME_DT);
            events.extend(state.drain_events());
        }
        assert_eq!(completions(events.as_slice()), 1);
        assert!(events.contains(&GameEvent::SessionCompleted { score: expected }));
        assert_eq!(state.phase, GamePhase::Success);
    }

    #[test]
    fn test_confirm_ignored_in_success() {
        let mut state = playing_state(8);
        for item in &mut state.items {
            item.collect();
        }
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.phase, GamePhase::Success);

        let input = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Success);
        assert_eq!(state.sessions_started, 1);
    }

    #[test]
    fn test_autopilot_completes_session() {
        let mut state = SessionState::new(99, WorldConfig::default());
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        // Generous frame budget: 5 items across a 3000x3000 world at 300 u/s
        for _ in 0..60 * 120 {
            tick(&mut state, &input, FRAME_DT);
            if state.phase == GamePhase::Success {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::Success);
        assert_eq!(state.player.score, state.collected_total());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = SessionState::new(99999, WorldConfig::default());
        let mut state2 = SessionState::new(99999, WorldConfig::default());

        let inputs = [
            TickInput {
                confirm: true,
                ..Default::default()
            },
            TickInput {
                movement: Vec2::new(1.0, 0.0),
                ..Default::default()
            },
            TickInput {
                movement: Vec2::new(0.0, 1.0),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in &inputs {
            tick(&mut state1, input, FRAME_DT);
            tick(&mut state2, input, FRAME_DT);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.items, state2.items);
        assert_eq!(state1.player, state2.player);
    }

    fn far_item() -> crate::sim::Collectable {
        crate::sim::Collectable {
            id: 0,
            pos: Vec2::new(2900.0, 2900.0),
            value: 10,
            collected: false,
        }
    }

    fn direction() -> impl Strategy<Value = Vec2> {
        (-1i8..=1, -1i8..=1).prop_map(|(x, y)| Vec2::new(x as f32, y as f32))
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_world(
            seed in any::<u64>(),
            moves in proptest::collection::vec((direction(), 1usize..200), 1..20),
        ) {
            let mut state = playing_state(seed);
            let max = WORLD_SIZE - PLAYER_SIZE;
            for (dir, frames) in moves {
                let input = TickInput { movement: dir, ..Default::default() };
                for _ in 0..frames {
                    tick(&mut state, &input, FRAME_DT);
                    let p = state.player.pos;
                    prop_assert!(p.x >= 0.0 && p.x <= max.x);
                    prop_assert!(p.y >= 0.0 && p.y <= max.y);
                    let c = state.camera.offset;
                    prop_assert!(c.x >= 0.0 && c.x <= WORLD_SIZE.x - VIEWPORT_SIZE.x);
                    prop_assert!(c.y >= 0.0 && c.y <= WORLD_SIZE.y - VIEWPORT_SIZE.y);
                    prop_assert_eq!(state.player.score, state.collected_total());
                }
            }
        }

        #[test]
        fn prop_collected_items_stay_collected(
            seed in any::<u64>(),
            moves in proptest::collection::vec((direction(), 1usize..300), 1..10),
        ) {
            let mut state = playing_state(seed);
            let mut seen = vec![false; state.items.len()];
            for (dir, frames) in moves {
                let input = TickInput { movement: dir, autopilot: false, confirm: false };
                for _ in 0..frames {
                    tick(&mut state, &input, FRAME_DT);
                    for (i, item) in state.items.iter().enumerate() {
                        prop_assert!(!seen[i] || item.collected);
                        seen[i] = item.collected;
                    }
                }
            }
        }
    }
}
