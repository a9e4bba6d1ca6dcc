mod framework;
mod arena;

use log::error;

use crate::{
    arena::{
        presets::SceneSource,
        scene::Scene,
    },
    framework::application::{self, ApplicationDescriptor, RunParams},
};

fn main() {
    env_logger::init();

    // Scene content is resolved before the window opens so a bad argument or
    // file fails fast instead of tearing down a live GPU context.
    let description = SceneSource::from_arg(std::env::args().nth(1))
        .and_then(|source| source.load())
        .unwrap_or_else(|err| {
            error!("{}", err);
            std::process::exit(1);
        });

    pollster::block_on(application::run(
        ApplicationDescriptor {
            init_renderer: arena::define_renderer,
            init_updater:  arena::define_updater,
            init_scene:    move |context: &application::Context| Scene::new(context, description),
        },
        RunParams::default(),
    ));
}
