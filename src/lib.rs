//! # boundary-arena — a fixed-capacity boundary-tag heap allocator
//!
//! This crate provides a **fixed-capacity boundary-tag allocator**
//! ([`Arena<T, N>`](Arena)): a single contiguous `N`-byte region, carved
//! into variable-sized blocks for `T`-aligned storage. Clients request
//! `n` contiguous `T` slots; the arena returns a pointer to the first
//! slot or fails with [`AllocError::OutOfMemory`]. On release, adjacent
//! free blocks coalesce.
//!
//! ## Overview
//!
//! Every block is wrapped by a pair of signed 32-bit *sentinels* — one
//! immediately before the payload, one immediately after:
//!
//! ```text
//!   Boundary-tag block layout:
//!
//!   ┌──────────┬─────────────────────────────┬──────────┐
//!   │   head    │           payload           │   tail    │
//!   │ sentinel  │        |s| bytes            │ sentinel  │
//!   │  (4 B)    │                             │  (4 B)    │
//!   └──────────┴─────────────────────────────┴──────────┘
//!
//!   sentinel s > 0  -> block is FREE, |s| is the payload size
//!   sentinel s < 0  -> block is BUSY, |s| is the payload size
//! ```
//!
//! Blocks tile the arena with no gaps, so walking forward from offset 0
//! by `|s| + 8` bytes at a time visits every block exactly once and lands
//! exactly on the end of the arena. That walk is [`BlockCursor`]; running
//! it and checking every head/tail pair agree is [`Arena::is_valid`].
//!
//! ```text
//!   A 1000-byte arena after allocate(50) (size_of::<T>() == 8):
//!
//!   ┌──────┬───────────────────┬──────┬──────┬───────────────┬──────┐
//!   │ -400 │   400-byte BUSY   │ -400 │  584 │  584-byte FREE │  584 │
//!   └──────┴───────────────────┴──────┴──────┴───────────────┴──────┘
//!    offset 0                   408    412                    996
//! ```
//!
//! ## Allocation: first-fit with a minimum-residual split
//!
//! `allocate(n)` scans blocks in arena order and takes the first FREE
//! block whose payload is at least `n * size_of::<T>()` bytes. If enough
//! is left over to host another legal block (`size_of::<T>()` bytes at
//! minimum), the block is split in two; otherwise the whole block is
//! handed to the caller, absorbing the small remainder as internal
//! fragmentation (§4.4 of the design spec — this is the stricter of two
//! behaviors the original C++ this crate is ported from exhibited; see
//! `DESIGN.md` for why the looser one was rejected).
//!
//! ## Deallocation: free, then coalesce both ways
//!
//! `deallocate(p)` marks the block at `p` free, then checks its
//! immediate neighbors on both sides; any that are also free get merged
//! in, so three adjacent blocks can become one. This is the only way
//! fragmentation is ever reduced — the arena does not compact.
//!
//! ## Crate structure
//!
//! ```text
//!   boundary-arena
//!   ├── align      - sentinel-word alignment helpers (align4!)
//!   ├── error      - ConfigError / AllocError / DeallocError
//!   ├── sentinel   - raw word access + sentinel encode/decode
//!   ├── block      - BlockInfo, a decoded view of one block
//!   ├── iter       - BlockCursor, the block-granularity iterator
//!   ├── validator  - is_valid, the read-only invariant check
//!   └── arena      - Arena<T, N>: allocate / deallocate / construct_at / destroy_at
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use boundary_arena::Arena;
//!
//! let mut arena = Arena::<u64, 1000>::new().unwrap();
//!
//! let p = arena.allocate(3).unwrap();
//! unsafe {
//!     arena.construct_at(p, 42);
//!     assert_eq!(*p, 42);
//!     arena.destroy_at(p);
//! }
//! arena.deallocate(p).unwrap();
//! assert!(arena.is_valid());
//! ```
//!
//! ## Safety
//!
//! This crate deals in raw memory management: `allocate`/`deallocate`
//! operate on raw pointers, and `construct_at`/`destroy_at` are `unsafe`.
//! Callers must uphold the obligations documented on each method — in
//! particular, a pointer returned by `allocate` must be passed to
//! `deallocate` at most once, and `construct_at`/`destroy_at` must only
//! ever touch memory inside a currently-BUSY block of the same arena.
//!
//! ## Non-goals
//!
//! Thread safety, growth/shrinking of the backing region, alignment
//! beyond the implicit 4-byte sentinel/`T` alignment, and any allocator
//! equality beyond "two distinct arenas are never equal".

pub mod align;
mod arena;
mod block;
mod error;
mod iter;
mod sentinel;
mod validator;

pub use arena::Arena;
pub use error::{AllocError, ConfigError, DeallocError};
pub use iter::BlockCursor;
