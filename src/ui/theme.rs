//! Color theme constants for the circdesk UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for panel titles
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Table header row
pub const COLOR_TABLE_HEADER: Color = Color::Cyan;

/// Selected row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 40, 60);

/// Success notices - green
pub const COLOR_OK: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error notices and inline validation marks - red
pub const COLOR_ERROR: Color = Color::Red;

/// Outstanding loans - yellow until the book comes back
pub const COLOR_OUTSTANDING: Color = Color::Yellow;

/// Background for dialog boxes (delete confirmation)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
