//! Address-ordered block sequence.
//!
//! One reusable abstraction backs both the hole list and the allocation
//! list. Blocks are owned by the list that currently holds them; moving a
//! range between lists is a remove followed by an insert, so a removed
//! block can never be reached through a stale entry.

/// A contiguous range `[start, start + size)` inside the managed space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Offset of the first unit in the range.
    pub start: usize,
    /// Number of units covered; always positive for blocks held by a list.
    pub size: usize,
}

impl Block {
    pub fn new(start: usize, size: usize) -> Self {
        Self { start, size }
    }

    /// First offset past the range.
    pub fn end(&self) -> usize {
        self.start + self.size
    }

    /// True when `self` ends exactly where `other` begins.
    pub fn abuts(&self, other: &Block) -> bool {
        self.end() == other.start
    }
}

/// An owned sequence of blocks kept strictly ascending by `start`.
///
/// `insert` performs no merge or overlap check; callers are responsible
/// for feeding it ranges that keep the list a valid partition piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Inserts a block at its address-ordered position.
    ///
    /// Linear scan from the head: the block lands before the first element
    /// whose `start` exceeds its own, or at the tail.
    pub fn insert(&mut self, block: Block) {
        let at = self
            .blocks
            .iter()
            .position(|b| b.start > block.start)
            .unwrap_or(self.blocks.len());
        self.blocks.insert(at, block);
    }

    /// Removes and returns the block beginning at `start`, or `None` when
    /// no block begins there.
    pub fn remove_by_start(&mut self, start: usize) -> Option<Block> {
        let at = self.blocks.iter().position(|b| b.start == start)?;
        Some(self.blocks.remove(at))
    }

    /// Looks up the block beginning at `start`.
    pub fn get(&self, start: usize) -> Option<&Block> {
        self.blocks.iter().find(|b| b.start == start)
    }

    /// Forward iteration in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Sum of the sizes of all held blocks.
    pub fn total_size(&self) -> usize {
        self.blocks.iter().map(|b| b.size).sum()
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
