//! Rendering plugin - maps grid tiles to world space and keeps the snake and fruit sprites in sync.

use bevy::prelude::*;

use crate::fruit::Fruit;
use crate::game::{
    FRUIT_COLOR, FruitSprite, SNAKE_COLOR, SnakeSprite, Tile, WINDOW_HEIGHT, WINDOW_WIDTH,
    Z_FRUIT, Z_SNAKE,
};
use crate::snake::Snake;

/// Plugin for drawing the snake and the fruit.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_fruit_sprite)
            .add_systems(Update, (sync_snake_sprites, sync_fruit_sprite).chain());
    }
}

// Type alias for the snake sprite query
type SnakeSpriteQuery<'w, 's> = Query<'w, 's, (&'static SnakeSprite, &'static mut Transform)>;

/// Converts a tile's screen-space rectangle (top-left origin, y down) into the
/// world-space center used by the 2D camera (window center origin, y up).
pub fn tile_translation(tile: &Tile, z: f32) -> Vec3 {
    let center = tile.rect.center();
    Vec3::new(
        center.x - WINDOW_WIDTH as f32 / 2.0,
        WINDOW_HEIGHT as f32 / 2.0 - center.y,
        z,
    )
}

fn tile_sprite(tile: &Tile, color: Color) -> Sprite {
    Sprite {
        color,
        custom_size: Some(tile.rect.size()),
        ..default()
    }
}

fn spawn_fruit_sprite(mut commands: Commands, fruit: Res<Fruit>) {
    let tile = fruit.tile();
    commands.spawn((
        tile_sprite(&tile, FRUIT_COLOR),
        Transform::from_translation(tile_translation(&tile, Z_FRUIT)),
        FruitSprite,
    ));
}

/// System to give every snake tile a sprite and move each sprite onto its tile.
fn sync_snake_sprites(mut commands: Commands, snake: Res<Snake>, mut sprites: SnakeSpriteQuery) {
    if !snake.is_changed() {
        return;
    }

    let tiles: Vec<Tile> = snake.tiles().copied().collect();
    let mut drawn = 0;

    for (sprite, mut transform) in sprites.iter_mut() {
        if let Some(tile) = tiles.get(sprite.index) {
            transform.translation = tile_translation(tile, Z_SNAKE);
            drawn += 1;
        }
    }

    // The snake never shrinks, so new segments always take the next indices.
    for (index, tile) in tiles.iter().enumerate().skip(drawn) {
        commands.spawn((
            tile_sprite(tile, SNAKE_COLOR),
            Transform::from_translation(tile_translation(tile, Z_SNAKE)),
            SnakeSprite { index },
        ));
    }
}

/// System to move the fruit sprite after a respawn.
fn sync_fruit_sprite(fruit: Res<Fruit>, mut sprites: Query<&mut Transform, With<FruitSprite>>) {
    if !fruit.is_changed() {
        return;
    }

    if let Ok(mut transform) = sprites.single_mut() {
        transform.translation = tile_translation(&fruit.tile(), Z_FRUIT);
    }
}
