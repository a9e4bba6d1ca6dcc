use crate::framework::updater::{
    AfterRenderContext, InputUpdateResult, ResizeContext, UpdateContext, UpdateResultAction,
    UpdaterModule,
};

use super::super::scene::{Scene, SceneDirtyFlags};

/// Acknowledges scene uploads: once a frame was rendered, every dirty record
/// has reached its uniform slot and the flags can be dropped.
#[derive(Default)]
pub struct SceneSyncUpdater;

impl UpdaterModule<Scene> for SceneSyncUpdater {
    fn input(&mut self, _: &mut UpdateContext<Scene>) -> InputUpdateResult {
        InputUpdateResult::default()
    }

    fn update(&mut self, _: &mut UpdateContext<Scene>) -> UpdateResultAction {
        UpdateResultAction::None
    }

    fn resize(&mut self, _: &mut ResizeContext<Scene>) -> UpdateResultAction {
        UpdateResultAction::None
    }

    #[profiling::function]
    fn after_render(&mut self, context: &mut AfterRenderContext<Scene>) {
        context.scene.dirty = SceneDirtyFlags::empty();
    }
}
