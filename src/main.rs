mod fruit;
mod game;
mod grid;
mod rendering;
mod snake;
mod ui;

use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use fruit::FruitPlugin;
use game::{BACKGROUND_COLOR, GamePlugin, TARGET_FPS, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use grid::GridPlugin;
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() -> AppExit {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                    title: WINDOW_TITLE.to_string(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            ShapePlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // One simulation tick per frame at the target frame rate
        .insert_resource(Time::<Fixed>::from_hz(TARGET_FPS as f64))
        .add_plugins((
            GamePlugin,
            GridPlugin,
            SnakePlugin,
            FruitPlugin,
            RenderingPlugin,
            UiPlugin,
        ))
        .run()
}
