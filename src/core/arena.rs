//! Typed bump arena backing every declared entity.
//!
//! Slots are reserved once at creation and handed out in order. Nothing is
//! freed individually: the high-water mark can only be rewound with
//! [`Arena::pop`], [`Arena::pop_to`] or [`Arena::clear`], and the backing
//! storage stays allocated for reuse until the arena is dropped.
//!
//! Every handle records the arena that issued it and the generation of its
//! slot. Rewinding bumps the generation of each released slot, so a handle
//! is only resolved by its own arena and only while its value is live.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(1);

/// What happens when a push would exceed the reserved capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Growth {
    /// Refuse the push.
    #[default]
    Fixed,
    /// Double the capacity and continue.
    Doubling,
}

/// Returned by [`Arena::push`] when a [`Growth::Fixed`] arena is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaFull {
    /// Capacity the arena was created with.
    pub capacity: usize,
}

/// Stable reference to a value allocated in an [`Arena`].
///
/// Valid until the arena is rewound past it. A handle from another arena
/// never resolves.
pub struct Handle<T> {
    arena: u64,
    index: usize,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(arena: u64, index: usize, generation: u32) -> Self {
        Self {
            arena,
            index,
            generation,
            _marker: PhantomData,
        }
    }

    /// Position of the value in allocation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.arena == other.arena
            && self.index == other.index
            && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.arena.hash(state);
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}#{}@{})", self.index, self.generation, self.arena)
    }
}

/// Bump allocator for values of one type.
pub struct Arena<T> {
    id: u64,
    slots: Vec<T>,
    /// Generation per slot ever used; outlives the values it tags.
    generations: Vec<u32>,
    capacity: usize,
    growth: Growth,
}

impl<T> Arena<T> {
    /// Reserves room for `capacity` values in one contiguous block.
    #[must_use]
    pub fn with_capacity(capacity: usize, growth: Growth) -> Self {
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
            capacity,
            growth,
        }
    }

    /// Allocates `value` at the high-water mark.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaFull`] when the arena is [`Growth::Fixed`] and every
    /// reserved slot is in use.
    pub fn push(&mut self, value: T) -> Result<Handle<T>, ArenaFull> {
        if self.slots.len() >= self.capacity {
            match self.growth {
                Growth::Fixed => {
                    return Err(ArenaFull {
                        capacity: self.capacity,
                    })
                }
                Growth::Doubling => {
                    let grown = self.capacity.saturating_mul(2).max(1);
                    self.slots.reserve_exact(grown - self.slots.len());
                    self.capacity = grown;
                }
            }
        }

        let index = self.slots.len();
        if index == self.generations.len() {
            self.generations.push(0);
        }
        self.slots.push(value);
        Ok(Handle::new(self.id, index, self.generations[index]))
    }

    /// Releases the `count` most recent allocations. Over-popping stops at empty.
    pub fn pop(&mut self, count: usize) {
        let keep = self.slots.len().saturating_sub(count);
        for generation in &mut self.generations[keep..self.slots.len()] {
            *generation = generation.wrapping_add(1);
        }
        self.slots.truncate(keep);
    }

    /// Rewinds the high-water mark to `position`. Does nothing if already below it.
    pub fn pop_to(&mut self, position: usize) {
        let count = self.slots.len().saturating_sub(position);
        self.pop(count);
    }

    /// Releases every allocation, keeping the reserved storage.
    pub fn clear(&mut self) {
        self.pop_to(0);
    }

    /// Current high-water mark, usable as a [`Arena::pop_to`] target.
    #[must_use]
    pub fn position(&self) -> usize {
        self.slots.len()
    }

    /// Number of values the arena can hold before it refuses or grows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value behind `handle`, or `None` if the arena was rewound past it.
    #[must_use]
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        if self.owns(handle) {
            self.slots.get(handle.index)
        } else {
            None
        }
    }

    /// Mutable access to the value behind `handle`.
    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        if self.owns(handle) {
            self.slots.get_mut(handle.index)
        } else {
            None
        }
    }

    /// True when `handle` was issued by this arena and its slot is still live.
    #[must_use]
    pub fn owns(&self, handle: Handle<T>) -> bool {
        handle.arena == self.id
            && handle.index < self.slots.len()
            && self.generations[handle.index] == handle.generation
    }

    /// Live values in allocation order, with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, value)| (Handle::new(self.id, i, self.generations[i]), value))
    }
}

impl<T> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("id", &self.id)
            .field("position", &self.slots.len())
            .field("capacity", &self.capacity)
            .field("growth", &self.growth)
            .finish()
    }
}
