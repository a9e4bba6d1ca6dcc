#[derive(Debug, Clone)]
pub struct Camera {
    pub aspect_ratio: f32,
    pub fov:          f32,
    pub position:     glam::Vec3,
    pub rotation:     glam::Quat,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            fov:          90.0,
            position:     glam::Vec3::ZERO,
            rotation:     glam::Quat::IDENTITY,
        }
    }
}

impl Camera {

    pub fn look_at(mut self, target: glam::Vec3) -> Self {
        let look_at_matrix = glam::Mat4::look_at_rh(self.position, target, glam::Vec3::Y);
        self.rotation = glam::Quat::from_mat4(&look_at_matrix).inverse();
        self
    }

    /// Camera-to-world rotation, the raytracer rotates generated rays by this matrix.
    pub fn rotation_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_quat(self.rotation)
    }

    pub fn focal_length(&self) -> f32 {
        1.0 / (self.fov.to_radians() * 0.5).tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focal_length_of_90_degree_fov_is_one() {
        let camera = Camera { fov: 90.0, ..Default::default() };
        assert!((camera.focal_length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn default_rotation_looks_down_negative_z() {
        let camera = Camera::default();
        let forward = camera.rotation_matrix().transform_vector3(glam::Vec3::NEG_Z);
        assert!((forward - glam::Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn look_at_rotates_forward_towards_target() {
        let camera = Camera {
            position: glam::Vec3::new(0.0, 1.0, 2.0),
            ..Default::default()
        }.look_at(glam::Vec3::ZERO);
        let forward = camera.rotation_matrix().transform_vector3(glam::Vec3::NEG_Z);
        let expected = (glam::Vec3::ZERO - camera.position).normalize();
        assert!((forward - expected).length() < 1e-4);
    }
}
