use crate::framework::{
    application::Context,
    renderer::{Renderer, RenderPass},
};

use super::{
    scene::Scene,
    modules::RaytraceRenderModule,
};

pub fn define_renderer(context: &Context) -> Renderer<Scene> {
    let mut renderer = Renderer::new(context.gpu.clone(), context.window);

    // load modules
    let raytrace_module = renderer.register_module(RaytraceRenderModule::new);

    // passes are executed in order of their registration
    renderer.register_render_pass(RenderPass::base, &[
        raytrace_module,
    ]);

    renderer
}
