//! Adapter implementations of the board persistence port.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileBoardRepository;
pub use memory::InMemoryBoardRepository;
