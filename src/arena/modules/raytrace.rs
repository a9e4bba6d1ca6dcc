use std::borrow::Cow;

use glam::Vec3;

use crate::framework::{
    gpu::{self, vertices::{SimpleVertex, Vertex}},
    renderer::{RenderContext, RenderModule, RenderPassContext},
};

use super::super::{
    scene::Scene,
    uniforms::SceneUniform,
};

/// The quad covering the whole screen in clip space. The raytracer runs in its
/// fragment shader, the vertex stage only passes positions through.
const QUAD_VERTICES: &[SimpleVertex] = &[
    SimpleVertex(Vec3::new( 1.0,  1.0, 0.0)), // top right
    SimpleVertex(Vec3::new( 1.0, -1.0, 0.0)), // bottom right
    SimpleVertex(Vec3::new(-1.0, -1.0, 0.0)), // bottom left
    SimpleVertex(Vec3::new(-1.0,  1.0, 0.0)), // top left
];

const QUAD_INDICES: &[u32] = &[
    0, 1, 3,
    1, 2, 3,
];

#[derive(Debug)]
pub struct RaytraceRenderModule {
    pipeline: wgpu::RenderPipeline,
    quad_vertices: gpu::VertexBuffer,
    quad_indices: gpu::IndexBuffer,
    scene_uniform: gpu::UniformBuffer<SceneUniform>,
    scene_bind_group: wgpu::BindGroup,
}

impl RaytraceRenderModule {

    #[profiling::function]
    pub fn new(context: &RenderContext) -> Self {
        let gpu = &context.gpu;

        // static quad geometry, uploaded once
        let quad_vertices = gpu::VertexBuffer::new(Some("Quad Vertex Buffer"), QUAD_VERTICES, gpu);
        let quad_indices = gpu::IndexBuffer::new(Some("Quad Index Buffer"), QUAD_INDICES, gpu);

        // scene uniform starts zeroed, the first prepare() fills it
        let scene_uniform = gpu::UniformBuffer::new(
            Some("Scene Uniform Buffer"),
            &SceneUniform::zeroed(),
            gpu,
        );

        let scene_bind_group_layout = gpu.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[gpu::UniformBuffer::<SceneUniform>::layout_entry(
                0,
                wgpu::ShaderStages::FRAGMENT,
            )],
        });

        let scene_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &scene_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform.buffer.as_entire_binding(),
            }],
        });

        // load and compile wgsl shader code
        let shader = gpu.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Raytrace Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("../../../resources/shaders/raytrace.wgsl"))),
        });

        let pipeline_layout = gpu.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Raytrace Render Pipeline Layout"),
            bind_group_layouts: &[
                &context.camera.bind_group_layout,
                &scene_bind_group_layout,
            ],
            push_constant_ranges: &[],
        });

        let pipeline = gpu.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Raytrace Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[SimpleVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.surface_config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // the quad is the only geometry, winding does not matter
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        Self {
            pipeline,
            quad_vertices,
            quad_indices,
            scene_uniform,
            scene_bind_group,
        }
    }
}

impl RenderModule<Scene> for RaytraceRenderModule {

    #[profiling::function]
    fn prepare(&mut self, scene: &Scene, context: &RenderContext) {
        // scene records go to the GPU only when something changed
        if !scene.dirty.is_empty() {
            self.scene_uniform.update(&context.gpu, &SceneUniform::pack(scene));
        }
    }

    #[profiling::function]
    fn render<'pass, 'a: 'pass>(
        &'a self,
        context: &'a RenderContext,
        render_pass_context: &mut RenderPassContext<'pass>,
    ) {
        let render_pass = &mut render_pass_context.render_pass;
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &context.camera.bind_group, &[]);
        render_pass.set_bind_group(1, &self.scene_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.quad_vertices.buffer.slice(..));
        render_pass.set_index_buffer(self.quad_indices.buffer.slice(..), gpu::IndexBuffer::FORMAT);
        render_pass.draw_indexed(0..self.quad_indices.size as u32, 0, 0..1);
    }
}
