use std::sync::Arc;

use log::info;
use winit_input_helper::WinitInputHelper;
use winit::{
    event::Event,
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder},
    event_loop::{EventLoop, ControlFlow},
};

use super::{
    gpu,
    renderer::Renderer,
    clock::Clock,
    camera::SceneWithCamera,
    updater::{
        Updater,
        ResizeContext,
        UpdateContext,
        AfterRenderContext,
        UpdateResultAction,
    },
};

#[derive(Clone, Debug)]
pub struct RunParams {
    pub window_name: &'static str,
    pub window_width: u32,
    pub window_height: u32,
    pub tick_per_second: u32,
}
impl Default for RunParams {
    fn default() -> Self {
        Self {
            window_name: "Ray Arena",
            window_width: 800,
            window_height: 600,
            tick_per_second: 60,
        }
    }
}

pub struct Context<'a> {
    pub params: &'a RunParams,
    pub window: &'a Window,
    pub gpu: Arc<gpu::Context>,
}

pub struct ApplicationDescriptor<A, B, C> {
    pub init_renderer: A,
    pub init_updater: B,
    pub init_scene: C,
}

pub async fn run<S, DR, DU, IS>(app_desc: ApplicationDescriptor<DR, DU, IS>, params: RunParams)
where
    S:          SceneWithCamera + Sized,
    for<'a> DR: FnOnce(&'a Context) -> Renderer<S>, // init_renderer
    DU:         FnOnce(&Context)    -> Updater<S>,  // init_updater
    IS:         FnOnce(&Context)    -> S,           // init_scene
{
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(params.window_name)
        .with_inner_size(winit::dpi::LogicalSize::new(params.window_width, params.window_height))
        .build(&event_loop)
        .expect("Failed to create window");

    info!(
        "Window created: {}x{}, \"{}\"",
        params.window_width, params.window_height, params.window_name
    );

    let gpu = Arc::new(gpu::Context::new(&window).await);

    let context = Context {
        params: &params,
        window: &window,
        gpu:    gpu.clone(),
    };

    // init application specifics
    let mut updater = (app_desc.init_updater)(&context);
    let mut renderer = (app_desc.init_renderer)(&context);
    let mut scene = (app_desc.init_scene)(&context);

    // Execution control
    let mut input = WinitInputHelper::new();
    let mut clock = Clock::now(params.tick_per_second as u64);

    // Main loop
    event_loop.run_return(move |event, _, control_flow| {

        let mut flow_result_action = UpdateResultAction::None;

        match event {
            Event::NewEvents(_) |
            Event::MainEventsCleared |
            Event::WindowEvent { .. } => {

                // Let input helper process event to somewhat coherent input state and work with that.
                //   (input.update(..) returns true only on Event::MainEventsCleared, once per event batch)
                if input.update(&event) {
                    let input_result = if let Some(size) = input.window_resized() {
                        let scale_factor = input.scale_factor().unwrap_or(1.0);
                        renderer.resize(&size, scale_factor);
                        updater.resize(ResizeContext {
                            scene: &mut scene,
                            size:  &size,
                            scale_factor,
                        })
                    } else if let Some(scale_factor) = input.scale_factor_changed() {
                        let size = window.inner_size();
                        renderer.resize(&size, scale_factor);
                        updater.resize(ResizeContext {
                            scene: &mut scene,
                            size:  &size,
                            scale_factor,
                        })
                    } else if input.close_requested() || input.destroyed() {
                        UpdateResultAction::Exit
                    } else {
                        updater.input(UpdateContext {
                            scene:  &mut scene,
                            input:  &input,
                            tick:   clock.current_tick(),
                            window: &window,
                        })
                    };

                    flow_result_action = flow_result_action.combine(input_result);
                }
            },

            // Render frame when window requests a redraw, not on every update.
            // This way the application only redraws when there are changes, saving CPU time and power.
            Event::RedrawRequested(_) => {
                renderer.prepare(&scene);
                renderer.render();

                updater.after_render(AfterRenderContext {
                    scene: &mut scene,
                });

                flow_result_action = UpdateResultAction::Redraw;
            },
            _ => {} // Ignore other events
        }

        // Update application only when it is its time to do so
        if clock.tick() {
            let update_result = updater.update(UpdateContext {
                scene:  &mut scene,
                input:  &input,
                tick:   clock.current_tick(),
                window: &window,
            });
            flow_result_action = flow_result_action.combine(update_result);
        } else {
            // Schedule next tick as a time to wake up in case of idling
            *control_flow = ControlFlow::WaitUntil(clock.next_scheduled_tick().clone())
        };

        // Decide on final control flow based on combination of all result actions
        match flow_result_action {
            UpdateResultAction::Exit => {
                info!("Terminating");
                *control_flow = ControlFlow::Exit;
            },
            UpdateResultAction::Redraw => window.request_redraw(),
            _ => {},
        }
    });
}
