//! Game state module - owns the crane, the stack, the combo timer and the miss counter
//!
//! All mutation goes through [`GameState::tick`]. Each tick advances the combo
//! timer and the crane, resolves a drop against the post-movement crane position,
//! then checks the reset and win conditions.

use log::{debug, info};

use crate::attempt::classify;
use crate::combo::ComboTimer;
use crate::crane::Crane;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::stack::Stack;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    crane: Crane,
    /// Crane used for restarts.
    initial_crane: Crane,
    stack: Stack,
    combo: ComboTimer,
    miss_count: u32,
    won: bool,
    rng: R,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Ticks processed in the current episode.
    ticks: u64,
    /// Last `now` seen by `tick`.
    now_ms: u64,
    last_attempt: Option<Attempt>,
    perfect_hits: u32,
    acceptable_hits: u32,
    /// Misses over the whole episode; not cleared by a stack reset.
    total_misses: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Current RNG state (seed for a game continuing the same stream)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing person counts from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self::from_parts(Crane::default(), rng)
    }

    /// Create a new game with a custom crane swing
    pub fn from_parts(crane: Crane, rng: R) -> Self {
        Self {
            crane,
            initial_crane: crane,
            stack: Stack::new(),
            combo: ComboTimer::new(),
            miss_count: 0,
            won: false,
            rng,
            episode_id: 0,
            ticks: 0,
            now_ms: 0,
            last_attempt: None,
            perfect_hits: 0,
            acceptable_hits: 0,
            total_misses: 0,
        }
    }

    pub fn crane(&self) -> &Crane {
        &self.crane
    }

    pub fn crane_x(&self) -> i32 {
        self.crane.position()
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn combo(&self) -> &ComboTimer {
        &self.combo
    }

    pub fn combo_multiplier(&self) -> u32 {
        self.combo.multiplier()
    }

    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_attempt(&self) -> Option<Attempt> {
        self.last_attempt
    }

    pub fn perfect_hits(&self) -> u32 {
        self.perfect_hits
    }

    pub fn acceptable_hits(&self) -> u32 {
        self.acceptable_hits
    }

    pub fn total_misses(&self) -> u32 {
        self.total_misses
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.crane_x = self.crane.position();
        out.crane_direction = self.crane.direction();
        out.crane_left_bound = self.crane.left_bound();
        out.crane_right_bound = self.crane.right_bound();
        out.held_block_x = self.crane.held_block_x();
        out.miss_count = self.miss_count;
        out.combo_multiplier = self.combo.multiplier();
        out.combo_remaining_ms = self.combo.remaining_ms(self.now_ms);
        out.blocks.clear();
        out.blocks.extend(self.stack.blocks().iter().copied());
        out.last_attempt = self.last_attempt;
        out.won = self.won;
        out.episode_id = self.episode_id;
        out.ticks = self.ticks;
        out.perfect_hits = self.perfect_hits;
        out.acceptable_hits = self.acceptable_hits;
        out.total_misses = self.total_misses;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Main game tick.
    ///
    /// `elapsed` is the number of crane steps since the previous tick and
    /// `now_ms` a monotonic host timestamp. Once the game is won every further
    /// tick is a no-op returning [`StateChangeNotice::None`].
    pub fn tick(&mut self, elapsed: u32, drop_requested: bool, now_ms: u64) -> StateChangeNotice {
        if self.won {
            return StateChangeNotice::None;
        }

        debug_assert!(
            now_ms >= self.now_ms,
            "time went backwards: {} < {}",
            now_ms,
            self.now_ms
        );
        self.now_ms = now_ms;
        self.ticks = self.ticks.wrapping_add(1);

        // Movement always lands before the drop is judged.
        self.combo.tick(now_ms);
        self.crane.advance(elapsed);

        let mut notice = if drop_requested {
            self.resolve_drop(now_ms)
        } else {
            StateChangeNotice::None
        };

        if self.miss_count >= MISS_THRESHOLD {
            info!(
                "stack reset after {} misses ({} blocks cleared)",
                self.miss_count,
                self.stack.size()
            );
            self.stack.clear();
            self.miss_count = 0;
            notice = StateChangeNotice::StackReset;
        } else if self.stack.size() > WIN_HEIGHT {
            info!(
                "tower complete: {} blocks, {} residents",
                self.stack.size(),
                self.stack.population()
            );
            self.won = true;
            notice = StateChangeNotice::Won;
        }

        notice
    }

    fn resolve_drop(&mut self, now_ms: u64) -> StateChangeNotice {
        let crane_x = self.crane.position();
        let attempt = classify(crane_x, PLATFORM_CENTER_X);
        self.last_attempt = Some(attempt);

        match attempt {
            Attempt::Perfect => {
                self.combo.on_perfect_hit(now_ms);
                self.perfect_hits += 1;
                self.place_block(crane_x, attempt)
            }
            Attempt::Acceptable => {
                self.acceptable_hits += 1;
                self.place_block(crane_x, attempt)
            }
            Attempt::Miss => {
                self.miss_count += 1;
                self.total_misses += 1;
                debug!(
                    "miss at x={} ({} of {})",
                    crane_x, self.miss_count, MISS_THRESHOLD
                );
                StateChangeNotice::Missed
            }
        }
    }

    fn place_block(&mut self, crane_x: i32, attempt: Attempt) -> StateChangeNotice {
        let person_count = self.rng.next_person_count();
        let block = self
            .stack
            .add_block(crane_x - HELD_BLOCK_OFFSET, person_count);
        debug!(
            "{} drop at x={}: block {} placed, height {}, combo x{}",
            attempt.as_str(),
            crane_x,
            block.id,
            self.stack.size(),
            self.combo.multiplier()
        );
        StateChangeNotice::BlockPlaced(block)
    }

    /// Start a new episode. The RNG stream continues and `now` stays monotonic.
    pub fn restart(&mut self) {
        self.crane = self.initial_crane;
        self.stack = Stack::new();
        self.combo = ComboTimer::new();
        self.miss_count = 0;
        self.won = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.ticks = 0;
        self.last_attempt = None;
        self.perfect_hits = 0;
        self.acceptable_hits = 0;
        self.total_misses = 0;
        info!("restart: episode {}", self.episode_id);
    }

    /// Apply a host action outside of the tick (drops are passed to `tick`).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Drop => false,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, clamped into range.
    #[derive(Debug, Clone)]
    struct Scripted {
        values: Vec<u32>,
        next: usize,
    }

    impl Scripted {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_range(&mut self, max: u32) -> u32 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v % max
        }
    }

    /// A crane that never moves, parked `offset` units right of the platform center.
    fn parked(offset: i32) -> GameState<Scripted> {
        let crane = Crane::new(
            PLATFORM_CENTER_X,
            CRANE_AMPLITUDE,
            0,
            PLATFORM_CENTER_X + offset,
            Direction::Right,
        );
        GameState::from_parts(crane, Scripted::new(&[7, 93, 50]))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.crane_x(), CRANE_START_X);
        assert_eq!(state.miss_count, 0);
        assert_eq!(state.combo_multiplier(), 1);
        assert!(state.stack.is_empty());
        assert!(!state.won);
        assert_eq!(state.episode_id, 0);
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_tick_without_drop_moves_crane() {
        let mut state = GameState::new(1);
        assert_eq!(state.tick(1, false, 0), StateChangeNotice::None);
        // Starts on the right bound: first step flips.
        assert_eq!(state.crane_x(), 600);
        assert_eq!(state.crane.direction(), Direction::Left);

        state.tick(1, false, 10);
        assert_eq!(state.crane_x(), 597);
        assert_eq!(state.ticks, 2);
    }

    #[test]
    fn test_perfect_drop_places_block_and_grows_combo() {
        let mut state = parked(0);
        let notice = state.tick(1, true, 0);

        let StateChangeNotice::BlockPlaced(block) = notice else {
            panic!("expected a placed block, got {:?}", notice);
        };
        assert_eq!(block.x, PLATFORM_CENTER_X - HELD_BLOCK_OFFSET);
        assert_eq!(block.y, BLOCK_REST_Y);
        assert_eq!(block.person_count, 7);
        assert_eq!(state.stack.size(), 1);
        assert_eq!(state.combo_multiplier(), 2);
        assert_eq!(state.last_attempt, Some(Attempt::Perfect));
        assert_eq!(state.perfect_hits, 1);
    }

    #[test]
    fn test_acceptable_drop_keeps_combo() {
        let mut state = parked(35);
        let notice = state.tick(1, true, 0);

        assert!(matches!(notice, StateChangeNotice::BlockPlaced(_)));
        assert_eq!(state.stack.size(), 1);
        assert_eq!(state.combo_multiplier(), 1);
        assert_eq!(state.last_attempt, Some(Attempt::Acceptable));
    }

    #[test]
    fn test_miss_counts_and_leaves_stack() {
        let mut state = parked(80);
        assert_eq!(state.tick(1, true, 0), StateChangeNotice::Missed);
        assert_eq!(state.miss_count, 1);
        assert!(state.stack.is_empty());
    }

    #[test]
    fn test_drop_uses_post_movement_position() {
        // 18 right of center moving right at 3/step: one step lands on 21 (acceptable).
        let crane = Crane::new(PLATFORM_CENTER_X, 200, 3, PLATFORM_CENTER_X + 18, Direction::Right);
        let mut state = GameState::from_parts(crane, Scripted::new(&[1]));
        state.tick(1, true, 0);
        assert_eq!(state.last_attempt, Some(Attempt::Acceptable));
    }

    #[test]
    fn test_third_miss_resets_stack() {
        let mut state = parked(0);
        state.tick(1, true, 0);
        state.tick(1, true, 10);
        assert_eq!(state.stack.size(), 2);

        // Move the crane out of range.
        state.crane = Crane::new(PLATFORM_CENTER_X, 200, 0, 600, Direction::Left);
        assert_eq!(state.tick(1, true, 20), StateChangeNotice::Missed);
        assert_eq!(state.tick(1, true, 30), StateChangeNotice::Missed);
        assert_eq!(state.tick(1, true, 40), StateChangeNotice::StackReset);

        assert!(state.stack.is_empty());
        assert_eq!(state.miss_count, 0);
        assert_eq!(state.total_misses, 3);
    }

    #[test]
    fn test_win_after_exceeding_height() {
        let mut state = parked(0);
        for i in 0..WIN_HEIGHT as u64 {
            let notice = state.tick(1, true, i * 10);
            assert!(matches!(notice, StateChangeNotice::BlockPlaced(_)));
        }
        assert!(!state.won);

        assert_eq!(state.tick(1, true, 1_000), StateChangeNotice::Won);
        assert!(state.won);
        assert_eq!(state.stack.size(), WIN_HEIGHT + 1);

        // Frozen afterwards.
        assert_eq!(state.tick(1, true, 2_000), StateChangeNotice::None);
        assert_eq!(state.stack.size(), WIN_HEIGHT + 1);
        assert_eq!(state.ticks, WIN_HEIGHT as u64 + 1);
    }

    #[test]
    fn test_combo_lapses_between_hits() {
        let mut state = parked(0);
        state.tick(1, true, 0);
        assert_eq!(state.combo_multiplier(), 2);

        state.tick(1, false, 8_001);
        assert_eq!(state.combo_multiplier(), 1);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = parked(0);
        state.tick(1, true, 1_000);
        let snap = state.snapshot();

        assert_eq!(snap.crane_x, PLATFORM_CENTER_X);
        assert_eq!(snap.blocks.len(), 1);
        assert_eq!(snap.combo_multiplier, 2);
        assert_eq!(snap.combo_remaining_ms, 8_000);
        assert_eq!(snap.last_attempt, Some(Attempt::Perfect));
        assert!(!snap.won);
    }

    #[test]
    fn test_restart_increments_episode_id() {
        let mut state = parked(0);
        state.tick(1, true, 0);
        assert!(state.apply_action(GameAction::Restart));

        assert_eq!(state.episode_id, 1);
        assert!(state.stack.is_empty());
        assert_eq!(state.combo_multiplier(), 1);
        assert_eq!(state.crane_x(), PLATFORM_CENTER_X);
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_drop_action_is_not_applied_outside_tick() {
        let mut state = parked(0);
        assert!(!state.apply_action(GameAction::Drop));
        assert!(state.stack.is_empty());
    }
}
