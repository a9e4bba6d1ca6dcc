use winit_input_helper::WinitInputHelper;

mod camera;
pub use camera::*;

mod free_camera_rig;
pub use free_camera_rig::*;

mod camera_updater;
pub use camera_updater::*;

pub trait CameraRig {
    fn camera(&self) -> &Camera;
    fn set_camera(&mut self, camera: Camera);
    fn on_input(&mut self, input: &WinitInputHelper);
    fn update(&mut self, delta_time_seconds: f32, input: &WinitInputHelper) -> &Camera;
}

pub trait SceneWithCamera {
    fn get_camera_rig(&self) -> &dyn CameraRig;
    fn get_camera_rig_mut(&mut self) -> &mut dyn CameraRig;
}
