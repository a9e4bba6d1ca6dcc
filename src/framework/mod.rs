pub mod application;
pub mod camera;
pub mod clock;
pub mod gpu;
pub mod renderer;
pub mod updater;
