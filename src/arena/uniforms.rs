//! GPU-side layout of the scene: one uniform struct with fixed-capacity
//! record arrays, padded to WGSL uniform address space rules (every array
//! stride and the struct size are multiples of 16 bytes).

use log::warn;

use super::scene::{Material, PointLight, Scene, Sphere};

pub const MAX_SPHERES: usize = 16;
pub const MAX_LIGHTS:  usize = 8;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub albedo:    glam::Vec3,
    pub roughness: f32,
    pub specular:  glam::Vec3,
    pub metallic:  f32,
    pub emission:  glam::Vec3,
    _pad:          f32,
}

impl From<&Material> for MaterialUniform {
    fn from(material: &Material) -> Self {
        Self {
            albedo:    material.albedo,
            roughness: material.roughness,
            specular:  material.specular,
            metallic:  material.metallic,
            emission:  material.emission,
            _pad:      0.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniform {
    pub position: glam::Vec3,
    pub radius:   f32,
    pub material: MaterialUniform,
}

impl From<&Sphere> for SphereUniform {
    fn from(sphere: &Sphere) -> Self {
        Self {
            position: sphere.position,
            radius:   sphere.radius,
            material: (&sphere.material).into(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position:  glam::Vec3,
    pub radius:    f32,
    pub color:     glam::Vec3,
    pub intensity: f32,
    pub reach:     f32,
    _pad:          [f32; 3],
}

impl From<&PointLight> for PointLightUniform {
    fn from(light: &PointLight) -> Self {
        Self {
            position:  light.position,
            radius:    light.radius,
            color:     light.color,
            intensity: light.intensity,
            reach:     light.reach,
            _pad:      [0.0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub spheres:        [SphereUniform; MAX_SPHERES],
    pub lights:         [PointLightUniform; MAX_LIGHTS],
    pub plane_material: MaterialUniform,
    pub sphere_count:   u32,
    pub light_count:    u32,
    _pad:               [u32; 2],
}

impl SceneUniform {
    /// Packs scene records into the fixed-capacity uniform arrays.
    /// Records beyond capacity are dropped, so shader-side indices stay in bounds.
    pub fn pack(scene: &Scene) -> Self {
        if scene.spheres.len() > MAX_SPHERES {
            warn!("Scene has {} spheres, uniform holds {}, extra ones are dropped", scene.spheres.len(), MAX_SPHERES);
        }
        if scene.lights.len() > MAX_LIGHTS {
            warn!("Scene has {} lights, uniform holds {}, extra ones are dropped", scene.lights.len(), MAX_LIGHTS);
        }

        let mut uniform = Self::zeroed();

        for (slot, sphere) in uniform.spheres.iter_mut().zip(scene.spheres.iter()) {
            *slot = sphere.into();
        }
        for (slot, light) in uniform.lights.iter_mut().zip(scene.lights.iter()) {
            *slot = light.into();
        }

        uniform.plane_material = (&scene.plane_material).into();
        uniform.sphere_count = scene.spheres.len().min(MAX_SPHERES) as u32;
        uniform.light_count = scene.lights.len().min(MAX_LIGHTS) as u32;
        uniform
    }

    pub fn zeroed() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::presets::ScenePreset;
    use crate::arena::scene::SceneDirtyFlags;
    use crate::framework::camera::{Camera, FreeCameraRig};

    fn scene_from(preset: ScenePreset) -> Scene {
        let description = preset.description();
        Scene {
            camera_rig: FreeCameraRig::from_camera(Camera::default(), 1.0, 1.0),
            spheres: description.spheres,
            lights: description.lights,
            plane_material: description.plane_material,
            dirty: SceneDirtyFlags::all(),
        }
    }

    #[test]
    fn uniform_sizes_follow_wgsl_rules() {
        // strides of uniform-space arrays must be multiples of 16
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 48);
        assert_eq!(std::mem::size_of::<SphereUniform>(), 64);
        assert_eq!(std::mem::size_of::<PointLightUniform>(), 48);
        assert_eq!(
            std::mem::size_of::<SceneUniform>(),
            MAX_SPHERES * 64 + MAX_LIGHTS * 48 + 48 + 16,
        );
    }

    #[test]
    fn pack_copies_records_and_counts() {
        let scene = scene_from(ScenePreset::Basic);
        let uniform = SceneUniform::pack(&scene);

        assert_eq!(uniform.sphere_count, 1);
        assert_eq!(uniform.light_count, 1);
        assert_eq!(uniform.spheres[0], SphereUniform::from(&scene.spheres[0]));
        assert_eq!(uniform.lights[0], PointLightUniform::from(&scene.lights[0]));
        assert_eq!(uniform.plane_material, MaterialUniform::from(&scene.plane_material));
        // unused slots stay zeroed
        assert_eq!(uniform.spheres[1], bytemuck::Zeroable::zeroed());
    }

    #[test]
    fn pack_truncates_beyond_capacity() {
        let mut scene = scene_from(ScenePreset::Basic);
        let sphere = scene.spheres[0].clone();
        let light = scene.lights[0].clone();
        scene.spheres = std::iter::repeat(sphere).take(MAX_SPHERES + 3).collect();
        scene.lights = std::iter::repeat(light).take(MAX_LIGHTS + 3).collect();

        let uniform = SceneUniform::pack(&scene);
        assert_eq!(uniform.sphere_count as usize, MAX_SPHERES);
        assert_eq!(uniform.light_count as usize, MAX_LIGHTS);
    }
}
