//! Growable array with geometric resizing, checked invariants and fallible
//! allocation.
//!
//! `DynamicArray` keeps its elements in one exclusively owned buffer. Appends
//! double the buffer when it is full; pops halve it once occupancy drops to a
//! quarter. Both are amortized O(1), and a sequence of appends and pops sitting
//! on one threshold does not reallocate on every call.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  policy.rs  │────▶│   array.rs   │◀────│  buffer.rs  │
//! │ (grow/shrink│     │(DynamicArray,│     │(BufferAlloc-│
//! │  targets)   │     │  Snapshot)   │     │  ator, Heap)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    contracts.rs                      │
//! │  (len <= cap, cap >= INIT_CAP, resize preserves)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Failure model
//!
//! | Error                   | Raised by     | Array afterwards     |
//! |-------------------------|---------------|----------------------|
//! | `EmptyArray`            | `pop`         | unchanged            |
//! | `IndexOutOfRange`       | `get`, `at`   | unchanged            |
//! | `AllocationFailure`     | `push`, `pop` | unchanged, usable    |
//!
//! # Usage
//!
//! ```
//! use dynarray::{IntArray, INIT_CAP};
//!
//! let mut array = IntArray::new();
//! for value in 1..=5 {
//!     array.push(value).unwrap();
//! }
//! assert_eq!(array.capacity(), INIT_CAP * 2);
//! assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
//! ```

// Module declarations
mod array;
pub mod buffer;
pub mod contracts;
mod error;
pub mod policy;
pub mod testing;

// Re-exports for public API
pub use array::{DynamicArray, IntArray, Snapshot};
pub use buffer::{BufferAllocator, Heap};
pub use error::{ArrayError, InvariantError};
pub use policy::INIT_CAP;
