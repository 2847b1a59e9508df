//! Data model shared by every pipeline stage.

pub mod shot;

pub use shot::ShotRecord;
