//! Stack module - the tower of placed blocks
//!
//! Blocks are kept in stacking order (index 0 is the bottom block). A new block
//! always lands at the platform's resting height and every block already placed
//! moves up by one block height, so the tower stays contiguous.
//! Storage is a fixed-capacity `ArrayVec`: the game is won before the tower can
//! outgrow it, so placing a block never allocates.

use arrayvec::ArrayVec;

use crate::types::{Block, BLOCK_HEIGHT, BLOCK_REST_Y, STACK_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    blocks: ArrayVec<Block, STACK_CAPACITY>,
    /// Next block id. Not reset by `clear`, so ids stay unique within a game.
    next_id: u32,
}

impl Stack {
    pub fn new() -> Self {
        Self {
            blocks: ArrayVec::new(),
            next_id: 0,
        }
    }

    /// Push a block released at `x` onto the tower and return it.
    ///
    /// # Panics
    ///
    /// Panics if the stack already holds `STACK_CAPACITY` blocks. The game ends
    /// on reaching that height, so callers never place past it.
    pub fn add_block(&mut self, x: i32, person_count: u32) -> Block {
        assert!(!self.is_full(), "stack is full ({} blocks)", STACK_CAPACITY);

        for block in self.blocks.iter_mut() {
            block.y -= BLOCK_HEIGHT;
        }

        let block = Block {
            id: self.next_id,
            person_count,
            x,
            y: BLOCK_REST_Y,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.blocks.push(block);
        block
    }

    pub fn size(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.blocks.is_full()
    }

    /// Blocks in stacking order, bottom first
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The most recently placed block
    pub fn top(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Sum of residents over the whole tower
    pub fn population(&self) -> u32 {
        self.blocks.iter().map(|b| b.person_count).sum()
    }

    /// Remove every block. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
