use arrayvec::ArrayVec;

use crate::types::{
    Attempt, Block, Direction, CRANE_AMPLITUDE, CRANE_START_X, HELD_BLOCK_OFFSET,
    PLATFORM_CENTER_X, STACK_CAPACITY,
};

/// Read-only view of the game between two ticks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub crane_x: i32,
    pub crane_direction: Direction,
    pub crane_left_bound: i32,
    pub crane_right_bound: i32,
    pub held_block_x: i32,
    pub miss_count: u32,
    pub combo_multiplier: u32,
    /// Milliseconds until the combo lapses (0 when no combo is running).
    pub combo_remaining_ms: u64,
    /// Bottom block first.
    pub blocks: ArrayVec<Block, STACK_CAPACITY>,
    pub last_attempt: Option<Attempt>,
    pub won: bool,
    pub episode_id: u32,
    pub ticks: u64,
    pub perfect_hits: u32,
    pub acceptable_hits: u32,
    pub total_misses: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.crane_x = CRANE_START_X;
        self.crane_direction = Direction::Right;
        self.crane_left_bound = PLATFORM_CENTER_X - CRANE_AMPLITUDE;
        self.crane_right_bound = PLATFORM_CENTER_X + CRANE_AMPLITUDE;
        self.held_block_x = CRANE_START_X - HELD_BLOCK_OFFSET;
        self.miss_count = 0;
        self.combo_multiplier = 1;
        self.combo_remaining_ms = 0;
        self.blocks.clear();
        self.last_attempt = None;
        self.won = false;
        self.episode_id = 0;
        self.ticks = 0;
        self.perfect_hits = 0;
        self.acceptable_hits = 0;
        self.total_misses = 0;
    }

    pub fn playable(&self) -> bool {
        !self.won
    }

    pub fn stack_height(&self) -> usize {
        self.blocks.len()
    }

    pub fn population(&self) -> u32 {
        self.blocks.iter().map(|b| b.person_count).sum()
    }

    /// Cheap fingerprint of everything that affects a rendered frame.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new();
        h.write_i32(self.crane_x);
        h.write_u32(self.miss_count);
        h.write_u32(self.combo_multiplier);
        // Combo bar resolution is one second.
        h.write_u64(self.combo_remaining_ms / 1000);
        h.write_u32(self.blocks.len() as u32);
        for b in &self.blocks {
            h.write_u32(b.id);
            h.write_i32(b.x);
            h.write_i32(b.y);
        }
        h.write_u32(self.won as u32);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            crane_x: 0,
            crane_direction: Direction::Right,
            crane_left_bound: 0,
            crane_right_bound: 0,
            held_block_x: 0,
            miss_count: 0,
            combo_multiplier: 1,
            combo_remaining_ms: 0,
            blocks: ArrayVec::new(),
            last_attempt: None,
            won: false,
            episode_id: 0,
            ticks: 0,
            perfect_hits: 0,
            acceptable_hits: 0,
            total_misses: 0,
        };
        s.clear();
        s
    }
}

struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn write_u32(&mut self, v: u32) {
        self.write(&v.to_le_bytes());
    }

    fn write_i32(&mut self, v: i32) {
        self.write(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write(&v.to_le_bytes());
    }

    fn finish(&self) -> u64 {
        self.state
    }
}
