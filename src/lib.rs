pub mod audio;
pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod cosmetics;
pub mod entities;
pub mod input;
pub mod obstacles;
pub mod persistence;
pub mod physics;
