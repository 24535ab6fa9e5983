//! Terminal colours for map symbols.

use crossterm::style::Color;

/// Visited-cell marker.
pub const TRAIL: Color = Color::Rgb { r: 220, g: 40, b: 40 };
/// Title and status text.
pub const LABEL: Color = Color::Rgb { r: 248, g: 248, b: 242 };

/// Background for an overworld symbol.
pub fn world_color(ch: char) -> Color {
    match ch {
        '0' => Color::Rgb { r: 144, g: 238, b: 144 },
        '1' => Color::Rgb { r: 240, g: 230, b: 140 },
        '2' => Color::Rgb { r: 34, g: 139, b: 34 },
        '3' => Color::Rgb { r: 139, g: 69, b: 19 },
        '4' => Color::Rgb { r: 40, g: 70, b: 220 },
        '5' => Color::Rgb { r: 255, g: 215, b: 0 },
        // Gates
        'A'..='Z' => Color::Rgb { r: 200, g: 30, b: 30 },
        '7' => Color::Rgb { r: 128, g: 0, b: 128 },
        '8' => Color::Rgb { r: 255, g: 165, b: 0 },
        _ => Color::Black,
    }
}

/// Background for a dungeon symbol.
pub fn dungeon_color(ch: char) -> Color {
    match ch {
        '0' => Color::Black,
        '1' => Color::White,
        '3' => Color::Rgb { r: 255, g: 165, b: 0 },
        '4' => Color::Rgb { r: 128, g: 0, b: 128 },
        _ => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_stand_out() {
        assert_eq!(world_color('A'), world_color('C'));
        assert_ne!(world_color('7'), world_color('0'));
        assert_eq!(world_color('?'), Color::Black);
        assert_eq!(dungeon_color('0'), Color::Black);
        assert_eq!(dungeon_color('x'), Color::Grey);
    }
}
