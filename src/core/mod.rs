//! Core building blocks shared by the domain and systems layers

pub mod logging;
pub mod random;
pub mod vec2;

pub use random::Rng;
pub use vec2::Vec2;
