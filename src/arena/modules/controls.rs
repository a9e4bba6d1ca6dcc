use winit::event::VirtualKeyCode;

use crate::framework::updater::{
    AfterRenderContext, InputUpdateResult, ResizeContext, UpdateContext, UpdateResultAction,
    UpdaterModule,
};

use super::super::scene::Scene;

/// Application-level key bindings, currently just Escape to quit.
#[derive(Default)]
pub struct ControlsUpdater;

impl UpdaterModule<Scene> for ControlsUpdater {
    fn input(&mut self, context: &mut UpdateContext<Scene>) -> InputUpdateResult {
        if context.input.key_pressed(VirtualKeyCode::Escape) {
            return InputUpdateResult {
                handled: true,
                result: UpdateResultAction::Exit,
            };
        }
        InputUpdateResult::default()
    }

    fn update(&mut self, _: &mut UpdateContext<Scene>) -> UpdateResultAction {
        UpdateResultAction::None
    }

    fn resize(&mut self, _: &mut ResizeContext<Scene>) -> UpdateResultAction {
        UpdateResultAction::None
    }

    fn after_render(&mut self, _: &mut AfterRenderContext<Scene>) {}
}
