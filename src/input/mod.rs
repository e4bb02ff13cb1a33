pub mod mapper;

pub use mapper::{InputMapper, KeyAction};
