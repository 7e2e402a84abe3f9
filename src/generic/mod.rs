//! Generic search tree containers.
//!
//! Types defined in this module are independent of the actual node storage type.
//! The crate root reexports them with [`slab::Slab`] storage.
pub mod node;
pub use node::{Item, Keyed, Node, Payload, Run};

pub mod tree;
pub use tree::{Position, Tree};

pub mod map;
pub use map::Map;

pub mod set;
pub use set::Set;

pub mod multiset;
pub use multiset::Multiset;
