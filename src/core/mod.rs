pub mod engine;
pub mod menu;
pub mod renderer; // Screens delegate drawing through this
pub mod screen;
