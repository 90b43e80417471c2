//! Theme constants for the N-in-a-row GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 239, 244);
pub const CELL_BG: Color32 = Color32::from_rgb(250, 251, 253);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 64, 72);

// Mark colors
pub const MARK_X: Color32 = Color32::from_rgb(214, 69, 65);
pub const MARK_O: Color32 = Color32::from_rgb(52, 120, 198);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 90);

pub fn hover_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const ERROR_BG: Color32 = Color32::from_rgb(110, 40, 40);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const MAX_CELL_SIZE: f32 = 90.0;
pub const MARK_RADIUS_RATIO: f32 = 0.32;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const WIN_STROKE_WIDTH: f32 = 3.0;
