use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::framework::{
    application::Context,
    camera::{Camera, CameraRig, FreeCameraRig, SceneWithCamera},
};

/// Surface description shared by spheres and the ground plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub albedo:    glam::Vec3,
    pub specular:  glam::Vec3,
    pub emission:  glam::Vec3,
    pub roughness: f32,
    pub metallic:  f32,
}

impl Material {
    /// A single-color material with middling surface response.
    pub fn flat(color: glam::Vec3) -> Self {
        Self {
            albedo:    color,
            specular:  color,
            emission:  color,
            roughness: 0.5,
            metallic:  0.5,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::flat(glam::Vec3::ZERO)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sphere {
    pub position: glam::Vec3,
    pub radius:   f32,
    pub material: Material,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLight {
    pub position:  glam::Vec3,
    pub color:     glam::Vec3,
    pub radius:    f32,
    pub intensity: f32,
    /// Distance beyond which the light contributes nothing.
    pub reach:     f32,
}

bitflags! {
    /// Which parts of the scene changed since their last upload to the GPU.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SceneDirtyFlags: u32 {
        const SPHERES = 0b001;
        const LIGHTS  = 0b010;
        const PLANE   = 0b100;
    }
}

/// Serializable scene content, either decoded from a JSON file or produced by a preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDescription,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<PointLight>,
    pub plane_material: Material,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraDescription {
    pub position: glam::Vec3,
    pub look_at:  glam::Vec3,
    pub fov:      f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            position: glam::Vec3::new(0.0, 1.0, 2.0),
            look_at:  glam::Vec3::new(0.0, 1.0, 0.0),
            fov:      60.0,
        }
    }
}

pub struct Scene {
    pub camera_rig: FreeCameraRig,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<PointLight>,
    pub plane_material: Material,
    pub dirty: SceneDirtyFlags,
}

impl Scene {
    /// Mouse degrees per pixel of movement.
    const LOOK_SPEED: f32 = 0.6;
    /// World units per update tick.
    const MOVE_SPEED: f32 = 0.05;

    pub fn new(context: &Context, description: SceneDescription) -> Self {
        let camera = Camera {
            aspect_ratio: context.params.window_width as f32 / context.params.window_height as f32,
            fov:          description.camera.fov,
            position:     description.camera.position,
            ..Default::default()
        }.look_at(description.camera.look_at);

        Self {
            camera_rig: FreeCameraRig::from_camera(camera, Self::LOOK_SPEED, Self::MOVE_SPEED),
            spheres: description.spheres,
            lights: description.lights,
            plane_material: description.plane_material,
            // everything is pending its first upload
            dirty: SceneDirtyFlags::all(),
        }
    }
}

impl SceneWithCamera for Scene {
    fn get_camera_rig(&self) -> &dyn CameraRig {
        &self.camera_rig
    }

    fn get_camera_rig_mut(&mut self) -> &mut dyn CameraRig {
        &mut self.camera_rig
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_material_copies_color_into_all_terms() {
        let m = Material::flat(glam::Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(m.albedo, m.specular);
        assert_eq!(m.albedo, m.emission);
        assert_eq!(m.roughness, 0.5);
        assert_eq!(m.metallic, 0.5);
    }

    #[test]
    fn scene_description_decodes_from_json() {
        let json = r#"{
            "camera": { "position": [0.0, 1.0, 4.0], "look_at": [0.0, 0.5, 0.0], "fov": 75.0 },
            "spheres": [{
                "position": [0.0, 1.0, 0.0],
                "radius": 0.5,
                "material": {
                    "albedo": [0.5, 0.5, 0.5],
                    "specular": [1.0, 1.0, 1.0],
                    "emission": [0.0, 0.0, 0.0],
                    "roughness": 0.0,
                    "metallic": 0.0
                }
            }],
            "lights": [{
                "position": [0.0, 5.0, 0.0],
                "color": [1.0, 1.0, 1.0],
                "radius": 0.5,
                "intensity": 1.0,
                "reach": 100.0
            }],
            "plane_material": {
                "albedo": [0.5, 0.5, 0.5],
                "specular": [0.75, 0.75, 0.75],
                "emission": [0.0, 0.0, 0.0],
                "roughness": 0.0,
                "metallic": 0.0
            }
        }"#;
        let description: SceneDescription = serde_json::from_str(json).unwrap();
        assert_eq!(description.spheres.len(), 1);
        assert_eq!(description.lights.len(), 1);
        assert_eq!(description.camera.fov, 75.0);
        assert_eq!(description.spheres[0].radius, 0.5);
        assert_eq!(description.lights[0].reach, 100.0);
    }

    #[test]
    fn camera_description_defaults_when_missing() {
        let json = r#"{ "spheres": [], "lights": [], "plane_material": {
            "albedo": [0.5, 0.5, 0.5],
            "specular": [0.75, 0.75, 0.75],
            "emission": [0.0, 0.0, 0.0],
            "roughness": 0.0,
            "metallic": 0.0
        } }"#;
        let description: SceneDescription = serde_json::from_str(json).unwrap();
        assert_eq!(description.camera.position, glam::Vec3::new(0.0, 1.0, 2.0));
    }
}
