use crate::framework::{self, gpu};

/// Camera state as the raytracing shader consumes it: a camera-to-world
/// rotation, the ray origin and the image-plane parameters.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub rotation: glam::Mat4,
    pub position: glam::Vec4,
    /// x: aspect ratio, y: focal length, zw: unused padding.
    pub image_plane: glam::Vec4,
}

impl CameraUniform {
    pub fn from_camera(camera: &framework::camera::Camera) -> Self {
        Self {
            rotation: camera.rotation_matrix(),
            position: glam::Vec4::from((camera.position, 1.0)),
            image_plane: glam::Vec4::new(camera.aspect_ratio, camera.focal_length(), 0.0, 0.0),
        }
    }
}

/// A camera GPU resource shared by all render modules.
#[derive(Debug)]
pub struct Camera {
    pub camera: framework::camera::Camera,
    pub binding: u32,
    pub uniform_buffer: gpu::UniformBuffer<CameraUniform>,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl Camera {
    #[profiling::function]
    pub fn new(binding: u32, gpu: &gpu::Context) -> Self {
        let camera = framework::camera::Camera::default();

        let uniform_buffer = gpu::UniformBuffer::new(
            Some("Camera Uniform Buffer"),
            &CameraUniform::from_camera(&camera),
            gpu,
        );

        let bind_group_layout = gpu.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[gpu::UniformBuffer::<CameraUniform>::layout_entry(
                binding,
                wgpu::ShaderStages::FRAGMENT,
            )],
        });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding,
                resource: uniform_buffer.buffer.as_entire_binding(),
            }],
        });

        Self {
            camera,
            binding,
            uniform_buffer,
            bind_group_layout,
            bind_group,
        }
    }

    #[profiling::function]
    pub fn update(&mut self, gpu: &gpu::Context, camera: &framework::camera::Camera) {
        self.camera = camera.clone();
        self.uniform_buffer.update(gpu, &CameraUniform::from_camera(&self.camera));
    }
}

#[cfg(test)]
mod tests {
    use super::CameraUniform;
    use crate::framework;

    #[test]
    fn uniform_layout_is_tightly_packed() {
        // mat4 + two vec4, no implicit padding allowed
        assert_eq!(std::mem::size_of::<CameraUniform>(), 96);
    }

    #[test]
    fn image_plane_carries_aspect_and_focal_length() {
        let camera = framework::camera::Camera {
            aspect_ratio: 800.0 / 600.0,
            fov: 90.0,
            ..Default::default()
        };
        let uniform = CameraUniform::from_camera(&camera);
        assert!((uniform.image_plane.x - 800.0 / 600.0).abs() < 1e-6);
        assert!((uniform.image_plane.y - 1.0).abs() < 1e-6);
    }
}
