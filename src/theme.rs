// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,

    pub(crate) text_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) heading_fg: Color,
    pub(crate) tag_fg: Color,
    pub(crate) error_fg: Color,
    pub(crate) success_fg: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_category_fg: Color,
    pub(crate) table_year_fg: Color,
    pub(crate) table_stars_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(16, 20, 32),
            accent_colour: Color::Rgb(56, 189, 248),
            border_colour: Color::Rgb(71, 85, 105),
            gauge_track_colour: Color::Rgb(30, 41, 59),
            commander_colour: Color::Rgb(226, 232, 240),

            text_fg: Color::Rgb(226, 232, 240),
            muted_fg: Color::Rgb(148, 163, 184),
            heading_fg: Color::Rgb(255, 255, 255),
            tag_fg: Color::Rgb(167, 139, 250),
            error_fg: Color::Rgb(248, 113, 113),
            success_fg: Color::Rgb(74, 222, 128),
            highlight_bg: Color::Rgb(56, 189, 248),
            highlight_fg: Color::Rgb(16, 20, 32),

            table_title_fg: Color::Rgb(255, 255, 255),
            table_category_fg: Color::Rgb(56, 189, 248),
            table_year_fg: Color::Rgb(148, 163, 184),
            table_stars_fg: Color::Rgb(250, 204, 21),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Only [`Color::Rgb`] has a hex form; any other
    /// variant yields `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(16, 20, 255)), Some("#1014ff".to_string()));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
