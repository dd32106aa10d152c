//! Linear containers.

pub mod iter;
pub mod linked_list;

pub use iter::Iter;
pub use linked_list::LinkedList;
