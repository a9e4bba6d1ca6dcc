use std::sync::Arc;

use log::info;
use slotmap::{SlotMap, new_key_type};
use winit::window::Window;

use crate::framework::{gpu, camera::SceneWithCamera};

use super::{
    RenderPass,
    RenderModule,
    camera::Camera,
    RenderContext,
};

new_key_type! { pub struct RenderModuleID; }
new_key_type! { pub struct RenderPassID; }


#[derive(Debug)]
struct RegisteredRenderPass {
    attachment: RenderPass,
    modules:    Vec<RenderModuleID>,
}

#[derive(Debug)]
pub struct Renderer<S: SceneWithCamera> {
    context: RenderContext,
    modules: SlotMap<RenderModuleID, Box<dyn RenderModule<S>>>,
    passes:  SlotMap<RenderPassID, RegisteredRenderPass>,
}

// Renderer construction methods
impl<S: SceneWithCamera> Renderer<S> {
    pub fn new(gpu: Arc<gpu::Context>, window: &Window) -> Self {
        #[cfg(feature = "no_vsync")]
        let present_mode = wgpu::PresentMode::Immediate;
        #[cfg(not(feature = "no_vsync"))]
        let present_mode = wgpu::PresentMode::Fifo;
        info!("Present mode: {:?}", present_mode);

        // setup surface for rendering
        let surface_capabilities = gpu.surface.get_capabilities(&gpu.adapter);
        let surface_config = wgpu::SurfaceConfiguration {
            usage:        wgpu::TextureUsages::RENDER_ATTACHMENT, // texture will be used to draw on screen
            format:       surface_capabilities.formats[0],        // texture format - select first supported one
            present_mode,                                         // VSync essentially - capping renders on display frame rate
            width:        window.inner_size().width,
            height:       window.inner_size().height,
            alpha_mode:   surface_capabilities.alpha_modes[0],
            view_formats: vec![],
        };
        gpu.surface.configure(&gpu.device, &surface_config);

        Self {
            context: RenderContext {
                camera: Camera::new(0, &gpu),
                gpu,
                surface_config,
                scale_factor: window.scale_factor(),
            },
            modules: SlotMap::with_key(),
            passes:  SlotMap::with_key(),
        }
    }

    /// Adds a new render module to the renderer
    pub fn register_module<M, F>(&mut self, get_module: F) -> RenderModuleID
        where
            M: RenderModule<S> + 'static,
            F: FnOnce(&RenderContext) -> M,
    {
        let module = get_module(&self.context);
        self.modules.insert(Box::new(module))
    }

    /// Passes are executed in order of their registration
    pub fn register_render_pass<F>(&mut self, get_pass: F, modules: &[RenderModuleID]) -> RenderPassID
        where
            F: FnOnce(&RenderContext) -> RenderPass,
    {
        let pass = get_pass(&self.context);

        // Check if modules are registered, panic if not.
        for module in modules {
            if !self.modules.contains_key(*module) {
                panic!("\
                    Cannot set render pass:\n\
                        {:?}\n\
                        Render module is not registered: \n\
                        {:?}\n\
                ", pass, module);
            }
        }

        self.passes.insert(RegisteredRenderPass {
            attachment: pass,
            modules:    modules.to_vec(),
        })
    }
}

// renderer runtime methods
impl<S: SceneWithCamera> Renderer<S> {

    #[profiling::function]
    pub fn resize(&mut self, size: &winit::dpi::PhysicalSize<u32>, scale_factor: f64) {
        if size.width > 0 && size.height > 0 {
            info!("Surface resized to {}x{}", size.width, size.height);

            // update surface config
            self.context.surface_config.width = size.width;
            self.context.surface_config.height = size.height;

            // update scale factor
            self.context.scale_factor = scale_factor;

            // re-configure surface with updated config
            self.context.gpu.surface.configure(&self.context.gpu.device, &self.context.surface_config);

            // resize all passes
            for pass in self.passes.values_mut() {
                pass.attachment.resize(&self.context, scale_factor);
            }
        }
    }

    #[profiling::function]
    pub fn prepare(&mut self, scene: &S) {

        // Update shared GPU resources outside of individual render module scopes

        // camera goes into its uniform buffer before every draw, exactly as the scene sees it
        self.context.camera.update(&self.context.gpu, scene.get_camera_rig().camera());

        // Prepare all modules
        for module in self.modules.values_mut() {
            module.prepare(scene, &self.context);
        }
    }

    #[profiling::function]
    pub fn render(&mut self) {

        // ask surface to provide us a texture we will draw into
        let output = self.context.gpu
            .surface
            .get_current_texture()
            .expect("Failed to acquire next swap chain texture");

        // View on surface texture understandable by RenderPassColorAttachment
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Create an encoder for building a GPU commands for this frame
        let mut encoder = self.context.gpu.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") }
        );

        // for each render pass, call render
        {
            profiling::scope!("Render Passes");
            for pass in self.passes.values_mut() {
                let mut render_pass_context = pass.attachment.start(&mut encoder, &view, &self.context);
                for module_id in pass.modules.iter() {
                    let module = self.modules.get(*module_id).unwrap();
                    module.render(&self.context, &mut render_pass_context);
                }
            }
        }

        self.context.gpu.queue.submit(Some(encoder.finish()));
        output.present();
    }

}
