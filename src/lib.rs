pub mod core;
pub mod input;
pub mod rendering;
pub mod session;

pub use session::{Flow, Session};
