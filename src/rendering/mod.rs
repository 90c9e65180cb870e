use macroquad::prelude::*;
use tracing::{info, warn};

use crate::domain::Grid;

pub const BACKGROUND: Color = WHITE;
/// Used for live cells when no tile image is available
pub const CELL_COLOR: Color = Color { r: 0.0, g: 0.6, b: 0.35, a: 1.0 };
pub const CAPTION_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };

/// What a live cell is drawn with
pub enum Tile {
    Texture(Texture2D),
    Solid(Color),
}

/// Load the cell image, falling back to a solid tile if it is missing
/// or unreadable.
pub async fn load_tile(path: &str) -> Tile {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            info!(path, "cell image loaded");
            Tile::Texture(texture)
        }
        Err(err) => {
            warn!(path, %err, "cell image unavailable, drawing solid tiles");
            Tile::Solid(CELL_COLOR)
        }
    }
}

/// Draw one generation: a `tile_size` square per live cell.
pub fn draw_generation(grid: &Grid, tile: &Tile, tile_size: f32) {
    for (row, col) in grid.live_cells() {
        let x = col as f32 * tile_size;
        let y = row as f32 * tile_size;
        match tile {
            Tile::Texture(texture) => draw_texture_ex(
                texture,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(tile_size, tile_size)),
                    ..Default::default()
                },
            ),
            Tile::Solid(color) => draw_rectangle(x, y, tile_size, tile_size, *color),
        }
    }
}

/// Overlay the frame-rate caption in the top-left corner
pub fn draw_caption(caption: &str, generation: u64) {
    draw_text(caption, 4.0, 12.0, 14.0, CAPTION_COLOR);
    draw_text(&format!("gen {}", generation), 4.0, 24.0, 14.0, CAPTION_COLOR);
}
