use super::RenderContext;

#[derive(Debug)]
pub enum RenderPass {
    /// Main render pass drawing color values to the screen.
    /// The full-screen raytracing quad covers every pixel, no depth buffer is involved.
    Base {
        clear_color: wgpu::Color,
    },
}

#[derive(Debug)]
pub struct RenderPassContext<'pass> {
    pub attachment:  &'pass RenderPass,
    pub render_pass: wgpu::RenderPass<'pass>,
}

// Construction
impl RenderPass {

    pub fn base(_context: &RenderContext) -> Self {
        Self::Base {
            // matches the original arena backdrop
            clear_color: wgpu::Color { r: 0.2, g: 0.3, b: 0.3, a: 1.0 },
        }
    }

}

impl RenderPass {
    pub fn resize(&mut self, _context: &RenderContext, _scale_factor: f64) {
        match self {
            Self::Base { .. } => {},
        }
    }

    pub fn start<'pass>(
        &'pass self,
        encoder: &'pass mut wgpu::CommandEncoder,
        view: &'pass wgpu::TextureView,
        _context: &'pass RenderContext,
    ) -> RenderPassContext<'pass> {
        match self {
            Self::Base { clear_color } => RenderPassContext {
                attachment: self,
                render_pass: encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Render Pass"),

                    // Color frame buffer
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(clear_color.clone()),
                            store: true
                        }
                    })],

                    depth_stencil_attachment: None,
                })
            },
        }
    }
}
