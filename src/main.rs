// src/main.rs
use log::{debug, info, warn};
use nannou::prelude::*;
use std::time::Instant;

use movingline::{
    animation::scale::NODES,
    config::Config,
    draw::{DrawParams, NannouSurface, NodeLayout},
    render::Renderer,
};

struct Model {
    // Core components:
    renderer: Renderer,

    // Style & layout:
    layout: NodeLayout,
    params: DrawParams,
    back_color: Rgb<f32>,

    // Frame timing:
    last_update: Instant,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to built-in defaults
    let config = Config::load().unwrap_or_else(|err| {
        warn!("config.toml not loaded ({err}); using defaults");
        Config::default()
    });

    // Create window
    let _window_id = app
        .new_window()
        .title("movingline 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .build()
        .expect("Failed to create window");

    let width = config.window.width as f32;
    let height = config.window.height as f32;
    let layout = NodeLayout::new(width, height, NODES, config.style.size_factor);
    let params = DrawParams {
        color: rgb(
            config.style.fore_color[0],
            config.style.fore_color[1],
            config.style.fore_color[2],
        ),
        stroke_weight: width.min(height) / config.style.stroke_factor,
    };
    let back_color = rgb(
        config.style.back_color[0],
        config.style.back_color[1],
        config.style.back_color[2],
    );

    info!(
        "movingline ready: {} nodes, tick every {:.0} ms",
        NODES,
        config.animation.tick_interval * 1000.0
    );

    Model {
        renderer: Renderer::new(NODES, config.animation.tick_interval),
        layout,
        params,
        back_color,
        last_update: Instant::now(),
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    if model.renderer.handle_tap() {
        debug!(
            "tap accepted, animating node {}",
            model.renderer.row().active_index()
        );
    } else {
        debug!("tap ignored, half-cycle in flight");
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    model.renderer.update(dt);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.back_color);

    let mut surface = NannouSurface::new(&draw, &model.layout, &model.params);
    model.renderer.render(&mut surface);

    draw.to_frame(app, &frame).expect("Failed to draw frame");
}
