use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::BlockId;

const NONE_SLOT: u32 = u32::MAX;

/// Fixed-capacity run of element slots linked into the ring
pub(crate) struct Block<T> {
    slots: Box<[Option<T>]>,
    pub(crate) next: BlockId,
    pub(crate) prev: BlockId,
}

impl<T> Block<T> {
    fn new(capacity: usize) -> Self {
        Self {
            slots: core::iter::repeat_with(|| None).take(capacity).collect(),
            next: BlockId::NONE,
            prev: BlockId::NONE,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub(crate) fn get(&self, offset: usize) -> Option<&T> {
        self.slots[offset].as_ref()
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, offset: usize, value: T) {
        debug_assert!(self.slots[offset].is_none(), "slot {} already occupied", offset);
        self.slots[offset] = Some(value);
    }

    /// Moves the value out, leaving the slot cleared
    #[inline(always)]
    pub(crate) fn take(&mut self, offset: usize) -> Option<T> {
        self.slots[offset].take()
    }
}

/// Metadata for each arena slot
struct Slot<T> {
    generation: u32,
    next_free: u32, // next vacant slot index (for free list)
    block: Option<Block<T>>,
}

/// Growable slab of blocks with generation-tracked handles
///
/// Freed slots keep their index on a free list; their block storage is dropped
/// immediately, so only the small slot header stays resident.
pub(crate) struct BlockArena<T> {
    slots: Vec<Slot<T>>,
    free_head: u32, // head of free list
    used_count: usize,
}

impl<T> BlockArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: NONE_SLOT,
            used_count: 0,
        }
    }

    /// Allocates an unlinked block of `capacity` slots
    pub(crate) fn alloc(&mut self, capacity: usize) -> BlockId {
        let block = Block::new(capacity);
        self.used_count += 1;

        // Pop from free list
        if self.free_head != NONE_SLOT {
            let slot = self.free_head;
            let meta = &mut self.slots[slot as usize];
            self.free_head = meta.next_free;
            meta.next_free = NONE_SLOT;
            meta.block = Some(block);
            return BlockId::new(slot, meta.generation);
        }

        let slot = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            next_free: NONE_SLOT,
            block: Some(block),
        });
        BlockId::new(slot, 0)
    }

    pub(crate) fn get(&self, id: BlockId) -> Option<&Block<T>> {
        let meta = self.slots.get(id.slot as usize)?;

        // Verify generation and that slot is allocated
        if meta.generation != id.generation {
            return None;
        }
        meta.block.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: BlockId) -> Option<&mut Block<T>> {
        let meta = self.slots.get_mut(id.slot as usize)?;
        if meta.generation != id.generation {
            return None;
        }
        meta.block.as_mut()
    }

    /// Drops the block's storage and recycles the slot, invalidating `id`
    pub(crate) fn free(&mut self, id: BlockId) -> bool {
        let Some(meta) = self.slots.get_mut(id.slot as usize) else {
            return false;
        };
        if meta.generation != id.generation || meta.block.is_none() {
            return false;
        }

        // Increment generation to invalidate old handles
        meta.generation = meta.generation.wrapping_add(1);
        meta.block = None;

        // Push to free list
        meta.next_free = self.free_head;
        self.free_head = id.slot;

        self.used_count -= 1;
        true
    }

    /// Number of blocks currently allocated
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.used_count
    }
}

impl<T> core::ops::Index<BlockId> for BlockArena<T> {
    type Output = Block<T>;

    #[inline(always)]
    fn index(&self, id: BlockId) -> &Block<T> {
        match self.get(id) {
            Some(block) => block,
            None => panic!("stale block handle {:?}", id),
        }
    }
}

impl<T> core::ops::IndexMut<BlockId> for BlockArena<T> {
    #[inline(always)]
    fn index_mut(&mut self, id: BlockId) -> &mut Block<T> {
        match self.get_mut(id) {
            Some(block) => block,
            None => panic!("stale block handle {:?}", id),
        }
    }
}
