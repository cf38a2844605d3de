pub mod ai;
pub mod constants;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod session;
pub mod tick;
pub mod types;
