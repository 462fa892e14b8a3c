//! Block and buffer types for Balloon.
//!
//! A block is a single 32-byte SHA-256 digest. The buffer is the
//! `space_cost`-long sequence of blocks one Balloon instance expands,
//! mixes and extracts from. It is owned by exactly one instance and is
//! zeroed when dropped, whichever path the instance leaves by.

use std::num::{NonZeroU32, NonZeroU64};
use std::ops::{Index, IndexMut};

use zeroize::Zeroize;

use super::HASH_SIZE;
use super::params::{BalloonError, Result};

/// A 32-byte Balloon block.
pub(crate) type Block = [u8; HASH_SIZE];

/// The working memory of one Balloon instance.
///
/// Indexing is plain (`0..len`); the circular predecessor lookup used by
/// the mixing rounds is provided by [`Buffer::prev`].
pub(crate) struct Buffer {
    blocks: Vec<Block>,
    space_cost: NonZeroU32,
}

impl Buffer {
    /// Allocates `space_cost` zeroed blocks.
    ///
    /// Allocation failure is reported instead of aborting.
    pub(crate) fn allocate(space_cost: NonZeroU32) -> Result<Self> {
        let len = space_cost.get() as usize;

        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(len)
            .map_err(|_| BalloonError::SpaceCostTooLarge(space_cost.get()))?;
        blocks.resize(len, [0u8; HASH_SIZE]);

        Ok(Self { blocks, space_cost })
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Block count as a divisor for index reduction.
    pub(crate) fn modulus(&self) -> NonZeroU64 {
        NonZeroU64::from(self.space_cost)
    }

    /// Index of the block preceding `m`; block 0 wraps to the last block.
    #[inline]
    pub(crate) fn prev(&self, m: usize) -> usize {
        if m == 0 { self.blocks.len() - 1 } else { m - 1 }
    }

    pub(crate) fn last(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    /// Overwrites every block with zeros, keeping the length.
    pub(crate) fn wipe(&mut self) {
        self.blocks.iter_mut().for_each(Zeroize::zeroize);
    }
}

impl Index<usize> for Buffer {
    type Output = Block;

    #[inline]
    fn index(&self, m: usize) -> &Block {
        &self.blocks[m]
    }
}

impl IndexMut<usize> for Buffer {
    #[inline]
    fn index_mut(&mut self, m: usize) -> &mut Block {
        &mut self.blocks[m]
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.wipe();
    }
}
