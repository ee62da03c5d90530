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

//! Colour palette for the TUI.
//!
//! The background colour is also pushed to the terminal emulator itself, so
//! it must be an RGB colour for that to take effect.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) text_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) info_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) card_title_fg: Color,
    pub(crate) card_year_fg: Color,
    pub(crate) card_rating_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(20, 24, 36),
            accent_colour: Color::Rgb(1, 180, 228),
            border_colour: Color::Rgb(90, 96, 112),

            text_fg: Color::Rgb(235, 235, 240),
            muted_fg: Color::Rgb(150, 152, 165),
            info_fg: Color::Rgb(144, 206, 161),
            error_fg: Color::Rgb(240, 98, 98),

            card_title_fg: Color::Rgb(255, 255, 255),
            card_year_fg: Color::Rgb(162, 161, 166),
            card_rating_fg: Color::Rgb(250, 189, 47),
        }
    }

    /// Converts a colour into a CSS-style hexadecimal string.
    ///
    /// Returns `None` for anything other than [`Color::Rgb`], as named and
    /// indexed colours depend on the terminal's own palette.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(1, 180, 228)).as_deref(), Some("#01b4e4"));
    }

    #[test]
    fn named_colour_has_no_hex() {
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
