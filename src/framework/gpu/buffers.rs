use std::marker::PhantomData;

use wgpu::util::DeviceExt;

use super::{
    Context,
    vertices::Vertex,
};

#[derive(Debug)]
pub struct VertexBuffer {
    /// Label of buffer on GPU.
    pub label: Option<&'static str>,
    /// Vertex buffer on GPU.
    pub buffer: wgpu::Buffer,
    /// The number of vertices in the buffer.
    pub size: usize,
}

impl VertexBuffer {
    /// Create a new vertex buffer, uploaded once.
    #[profiling::function]
    pub fn new<V: Vertex>(label: Option<&'static str>, vertices: &[V], context: &Context) -> Self {
        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label,
                contents: bytemuck::cast_slice(vertices), // <- vertex buffer casted as array of bytes
                usage: wgpu::BufferUsages::VERTEX,
            }
        );
        Self { label, buffer, size: vertices.len() }
    }
}

#[derive(Debug)]
pub struct IndexBuffer {
    /// Label of buffer on GPU.
    pub label: Option<&'static str>,
    /// Index buffer on GPU.
    pub buffer: wgpu::Buffer,
    /// The number of indices in the buffer.
    pub size: usize,
}

impl IndexBuffer {
    pub const FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

    /// Create a new index buffer, uploaded once.
    #[profiling::function]
    pub fn new(label: Option<&'static str>, indices: &[u32], context: &Context) -> Self {
        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label,
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            }
        );
        Self { label, buffer, size: indices.len() }
    }
}

/// A uniform buffer holding a single `repr(C)` value of type `U`.
#[derive(Debug)]
pub struct UniformBuffer<U: Copy + Clone + bytemuck::Pod + bytemuck::Zeroable> {
    /// Label of buffer on GPU.
    pub label: Option<&'static str>,
    /// Uniform buffer on GPU.
    pub buffer: wgpu::Buffer,
    _phantom: PhantomData<U>,
}

impl<U: Copy + Clone + bytemuck::Pod + bytemuck::Zeroable> UniformBuffer<U> {

    #[profiling::function]
    pub fn new(label: Option<&'static str>, value: &U, context: &Context) -> Self {
        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label,
                contents: bytemuck::bytes_of(value),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            }
        );
        Self { label, buffer, _phantom: PhantomData }
    }

    /// Overwrite the uniform value on the GPU using the wgpu queue.
    #[profiling::function]
    pub fn update(&self, context: &Context, value: &U) {
        context.queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }

    /// Layout entry for binding this uniform in a bind group layout.
    pub fn layout_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }
    }
}
