use std::path::PathBuf;

use log::info;
use rand::Rng;
use strum_macros::{Display, EnumString};
use thiserror::Error;

use super::scene::{CameraDescription, Material, PointLight, SceneDescription, Sphere};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ScenePreset {
    /// One grey sphere above the plane, one white light.
    Basic,
    /// A randomized field of spheres under a handful of colored lights.
    Scatter,
}

#[derive(Debug, Error)]
pub enum SceneLoadError {
    #[error("unknown scene preset '{0}' (expected 'basic', 'scatter' or a .json path)")]
    UnknownPreset(String),
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode scene file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the scene content comes from: a built-in preset or a JSON file.
#[derive(Debug, Clone)]
pub enum SceneSource {
    Preset(ScenePreset),
    File(PathBuf),
}

impl SceneSource {
    /// Interprets the optional first CLI argument. No argument means the basic preset,
    /// a path ending in `.json` means a scene file, anything else must name a preset.
    pub fn from_arg(arg: Option<String>) -> Result<Self, SceneLoadError> {
        match arg {
            None => Ok(Self::Preset(ScenePreset::Basic)),
            Some(arg) if arg.ends_with(".json") => Ok(Self::File(PathBuf::from(arg))),
            Some(arg) => arg
                .parse::<ScenePreset>()
                .map(Self::Preset)
                .map_err(|_| SceneLoadError::UnknownPreset(arg)),
        }
    }

    pub fn load(&self) -> Result<SceneDescription, SceneLoadError> {
        match self {
            Self::Preset(preset) => {
                info!("Using scene preset '{}'", preset);
                Ok(preset.description())
            },
            Self::File(path) => {
                info!("Loading scene file {:?}", path);
                let content = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            },
        }
    }
}

impl ScenePreset {
    pub fn description(&self) -> SceneDescription {
        match self {
            Self::Basic => basic(),
            Self::Scatter => scatter(),
        }
    }
}

fn plane_material() -> Material {
    Material {
        albedo:    glam::Vec3::splat(0.5),
        specular:  glam::Vec3::splat(0.75),
        emission:  glam::Vec3::ZERO,
        roughness: 0.0,
        metallic:  0.0,
    }
}

fn basic() -> SceneDescription {
    SceneDescription {
        camera: CameraDescription::default(),
        spheres: vec![
            Sphere {
                position: glam::Vec3::new(0.0, 1.0, 0.0),
                radius:   0.5,
                material: Material {
                    albedo:    glam::Vec3::splat(0.5),
                    specular:  glam::Vec3::ONE,
                    emission:  glam::Vec3::ZERO,
                    roughness: 0.0,
                    metallic:  0.0,
                },
            },
        ],
        lights: vec![
            PointLight {
                position:  glam::Vec3::new(0.0, 5.0, 0.0),
                color:     glam::Vec3::ONE,
                radius:    0.5,
                intensity: 1.0,
                reach:     100.0,
            },
        ],
        plane_material: plane_material(),
    }
}

fn scatter() -> SceneDescription {
    let mut rng = rand::thread_rng();

    let spheres = (0..12).map(|_| {
        let radius = rng.gen_range(0.2..0.8);
        Sphere {
            position: glam::Vec3::new(
                rng.gen_range(-6.0..6.0),
                radius,
                rng.gen_range(-6.0..6.0),
            ),
            radius,
            material: Material {
                albedo: glam::Vec3::new(rng.gen(), rng.gen(), rng.gen()),
                specular: glam::Vec3::ONE,
                emission: glam::Vec3::ZERO,
                roughness: rng.gen(),
                metallic: rng.gen(),
            },
        }
    }).collect();

    let lights = vec![
        PointLight {
            position:  glam::Vec3::new(0.0, 6.0, 0.0),
            color:     glam::Vec3::ONE,
            radius:    0.5,
            intensity: 1.0,
            reach:     100.0,
        },
        PointLight {
            position:  glam::Vec3::new(-5.0, 3.0, 5.0),
            color:     glam::Vec3::new(1.0, 0.6, 0.3),
            radius:    0.3,
            intensity: 0.7,
            reach:     40.0,
        },
        PointLight {
            position:  glam::Vec3::new(5.0, 3.0, -5.0),
            color:     glam::Vec3::new(0.3, 0.6, 1.0),
            radius:    0.3,
            intensity: 0.7,
            reach:     40.0,
        },
    ];

    SceneDescription {
        camera: CameraDescription {
            position: glam::Vec3::new(0.0, 3.0, 10.0),
            look_at:  glam::Vec3::new(0.0, 0.5, 0.0),
            fov:      60.0,
        },
        spheres,
        lights,
        plane_material: plane_material(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::uniforms::{MAX_LIGHTS, MAX_SPHERES};

    #[test]
    fn preset_names_parse() {
        assert_eq!("basic".parse::<ScenePreset>().unwrap(), ScenePreset::Basic);
        assert_eq!("scatter".parse::<ScenePreset>().unwrap(), ScenePreset::Scatter);
        assert!("garbage".parse::<ScenePreset>().is_err());
    }

    #[test]
    fn no_argument_falls_back_to_basic() {
        match SceneSource::from_arg(None).unwrap() {
            SceneSource::Preset(ScenePreset::Basic) => {},
            other => panic!("unexpected source: {:?}", other),
        }
    }

    #[test]
    fn json_argument_becomes_a_file_source() {
        match SceneSource::from_arg(Some("scenes/demo.json".into())).unwrap() {
            SceneSource::File(path) => assert_eq!(path, PathBuf::from("scenes/demo.json")),
            other => panic!("unexpected source: {:?}", other),
        }
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(matches!(
            SceneSource::from_arg(Some("garbage".into())),
            Err(SceneLoadError::UnknownPreset(_))
        ));
    }

    #[test]
    fn presets_fit_uniform_capacity() {
        for preset in [ScenePreset::Basic, ScenePreset::Scatter] {
            let description = preset.description();
            assert!(description.spheres.len() <= MAX_SPHERES);
            assert!(description.lights.len() <= MAX_LIGHTS);
        }
    }

    #[test]
    fn scatter_spheres_rest_on_their_radius() {
        for sphere in scatter().spheres {
            assert!((sphere.position.y - sphere.radius).abs() < 1e-6);
        }
    }
}
