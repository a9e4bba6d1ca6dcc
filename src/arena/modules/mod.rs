mod raytrace;
pub use raytrace::RaytraceRenderModule;

mod controls;
pub use controls::ControlsUpdater;

mod scene_sync;
pub use scene_sync::SceneSyncUpdater;
