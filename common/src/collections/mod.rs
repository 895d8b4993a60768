pub mod list;
pub use list::{Iter, LinkedList, NodeId};
