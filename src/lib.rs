//! A pairing heap for Rust
//!
//! This crate provides [`PairingTree`], a self-adjusting heap-ordered
//! multi-way tree usable as a min-priority queue:
//!
//! - **insert / merge**: O(1) amortized
//! - **find_min**: O(1)
//! - **delete_min**: O(log n) amortized
//! - **delete / adjust / find**: O(n) search plus O(log n) amortized repair
//!
//! Unlike `std::collections::BinaryHeap`, arbitrary elements can be removed
//! or have their keys changed in place, which makes the structure a good fit
//! for algorithms such as shortest-path search or event scheduling. The heap
//! is single-threaded; it is meant to be embedded in a larger algorithm, not
//! shared across tasks.
//!
//! # Example
//!
//! ```rust
//! use pairing_tree::PairingTree;
//!
//! let mut queue = PairingTree::new();
//! queue.insert("banana");
//! queue.insert("apple");
//! queue.insert("cherry");
//!
//! assert_eq!(queue.find_min(), Some(&"apple"));
//! assert_eq!(queue.delete_min(), Some("apple"));
//! assert_eq!(queue.delete(&"cherry"), Some("cherry"));
//! assert_eq!(queue.find_min(), Some(&"banana"));
//! ```

pub mod pairing;

// Re-export the heap type for convenience
pub use pairing::PairingTree;
