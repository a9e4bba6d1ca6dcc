use crate::framework::{
    application::Context,
    camera::CameraUpdater,
    updater::Updater,
};

use super::{
    scene::Scene,
    modules::{ControlsUpdater, SceneSyncUpdater},
};

pub fn define_updater(_context: &Context) -> Updater<Scene> {
    Updater::new()
        .with_module(ControlsUpdater)
        .with_module(CameraUpdater)
        .with_module(SceneSyncUpdater)
}
