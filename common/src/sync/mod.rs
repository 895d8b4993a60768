pub mod shared;
pub use shared::SharedList;
