pub mod clock;
pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod hero;
pub mod image_grid;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod tilemap;

pub use error::LootError;
