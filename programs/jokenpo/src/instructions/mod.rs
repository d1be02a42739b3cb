//! Instruction handlers

pub mod admin;
pub mod player;
pub mod views;

pub use admin::*;
pub use player::*;
pub use views::*;
