//! `ConsoleColor`: The 16-entry symbolic color table of the script format.
//!
//! The replay visualizer identifies colors by their qualified .NET-style
//! names (`System.ConsoleColor.DarkCyan` and friends). The table order is
//! part of the wire format and must not drift.

use std::fmt;

/// One of the 16 console colors understood by the visualizer.
///
/// The discriminant is the wire code: raw integer codes index this table
/// after being masked to their low 4 bits, so out-of-range codes silently
/// alias instead of erroring. The visualizer's behavior for rejected codes
/// is unspecified, so the aliasing is kept as-is for compatibility.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    /// Code 0.
    Black = 0,
    /// Code 1.
    DarkRed = 1,
    /// Code 2.
    DarkGreen = 2,
    /// Code 3.
    DarkYellow = 3,
    /// Code 4.
    DarkBlue = 4,
    /// Code 5.
    DarkMagenta = 5,
    /// Code 6.
    DarkCyan = 6,
    /// Code 7. The console's default foreground.
    Gray = 7,
    /// Code 8.
    DarkGray = 8,
    /// Code 9.
    Red = 9,
    /// Code 10.
    Green = 10,
    /// Code 11.
    Yellow = 11,
    /// Code 12.
    Blue = 12,
    /// Code 13.
    Magenta = 13,
    /// Code 14.
    Cyan = 14,
    /// Code 15.
    White = 15,
}

impl ConsoleColor {
    /// Look up a color by integer code.
    ///
    /// Only the low 4 bits are honored; `from_code(7)` and `from_code(23)`
    /// are the same color.
    #[inline]
    pub const fn from_code(code: i32) -> Self {
        match code & 0xF {
            0 => Self::Black,
            1 => Self::DarkRed,
            2 => Self::DarkGreen,
            3 => Self::DarkYellow,
            4 => Self::DarkBlue,
            5 => Self::DarkMagenta,
            6 => Self::DarkCyan,
            7 => Self::Gray,
            8 => Self::DarkGray,
            9 => Self::Red,
            10 => Self::Green,
            11 => Self::Yellow,
            12 => Self::Blue,
            13 => Self::Magenta,
            14 => Self::Cyan,
            _ => Self::White,
        }
    }

    /// The wire code of this color (0-15).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The qualified name the visualizer expects on `Set ForegroundColor`
    /// and friends.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "System.ConsoleColor.Black",
            Self::DarkRed => "System.ConsoleColor.DarkRed",
            Self::DarkGreen => "System.ConsoleColor.DarkGreen",
            Self::DarkYellow => "System.ConsoleColor.DarkYellow",
            Self::DarkBlue => "System.ConsoleColor.DarkBlue",
            Self::DarkMagenta => "System.ConsoleColor.DarkMagenta",
            Self::DarkCyan => "System.ConsoleColor.DarkCyan",
            Self::Gray => "System.ConsoleColor.Gray",
            Self::DarkGray => "System.ConsoleColor.DarkGray",
            Self::Red => "System.ConsoleColor.Red",
            Self::Green => "System.ConsoleColor.Green",
            Self::Yellow => "System.ConsoleColor.Yellow",
            Self::Blue => "System.ConsoleColor.Blue",
            Self::Magenta => "System.ConsoleColor.Magenta",
            Self::Cyan => "System.ConsoleColor.Cyan",
            Self::White => "System.ConsoleColor.White",
        }
    }

    /// Classic console palette entry for this color.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::DarkRed => (128, 0, 0),
            Self::DarkGreen => (0, 128, 0),
            Self::DarkYellow => (128, 128, 0),
            Self::DarkBlue => (0, 0, 128),
            Self::DarkMagenta => (128, 0, 128),
            Self::DarkCyan => (0, 128, 128),
            Self::Gray => (192, 192, 192),
            Self::DarkGray => (128, 128, 128),
            Self::Red => (255, 0, 0),
            Self::Green => (0, 255, 0),
            Self::Yellow => (255, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::Magenta => (255, 0, 255),
            Self::Cyan => (0, 255, 255),
            Self::White => (255, 255, 255),
        }
    }

    /// Nearest table entry to a true-color value, by squared distance over
    /// the classic palette.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let mut best = Self::Black;
        let mut best_dist = u32::MAX;
        for code in 0..16 {
            let candidate = Self::from_code(code);
            let (pr, pg, pb) = candidate.rgb();
            let dr = i32::from(r) - i32::from(pr);
            let dg = i32::from(g) - i32::from(pg);
            let db = i32::from(b) - i32::from(pb);
            let dist = (dr * dr + dg * dg + db * db).unsigned_abs();
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }
        best
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<i32> for ConsoleColor {
    #[inline]
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<u8> for ConsoleColor {
    #[inline]
    fn from(code: u8) -> Self {
        Self::from_code(i32::from(code))
    }
}

impl From<crossterm::style::Color> for ConsoleColor {
    /// Map a crossterm color onto the script's 16-color table.
    ///
    /// Named variants map directly; `AnsiValue` goes through the 4-bit mask
    /// like any raw code; true-color values snap to the nearest palette
    /// entry. `Reset` becomes the console's default foreground.
    fn from(color: crossterm::style::Color) -> Self {
        use crossterm::style::Color;
        match color {
            Color::Reset | Color::Grey => Self::Gray,
            Color::Black => Self::Black,
            Color::DarkGrey => Self::DarkGray,
            Color::Red => Self::Red,
            Color::DarkRed => Self::DarkRed,
            Color::Green => Self::Green,
            Color::DarkGreen => Self::DarkGreen,
            Color::Yellow => Self::Yellow,
            Color::DarkYellow => Self::DarkYellow,
            Color::Blue => Self::Blue,
            Color::DarkBlue => Self::DarkBlue,
            Color::Magenta => Self::Magenta,
            Color::DarkMagenta => Self::DarkMagenta,
            Color::Cyan => Self::Cyan,
            Color::DarkCyan => Self::DarkCyan,
            Color::White => Self::White,
            Color::Rgb { r, g, b } => Self::from_rgb(r, g, b),
            Color::AnsiValue(v) => Self::from_code(i32::from(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in 0..16 {
            assert_eq!(i32::from(ConsoleColor::from_code(code).code()), code);
        }
    }

    #[test]
    fn test_out_of_range_aliases() {
        for code in 0..16 {
            assert_eq!(
                ConsoleColor::from_code(code),
                ConsoleColor::from_code(code + 16)
            );
            assert_eq!(
                ConsoleColor::from_code(code),
                ConsoleColor::from_code(code + 160)
            );
        }
        // Negative codes alias through the same mask.
        assert_eq!(ConsoleColor::from_code(-1), ConsoleColor::White);
        assert_eq!(ConsoleColor::from_code(-16), ConsoleColor::Black);
    }

    #[test]
    fn test_table_order() {
        assert_eq!(ConsoleColor::from_code(0), ConsoleColor::Black);
        assert_eq!(ConsoleColor::from_code(7), ConsoleColor::Gray);
        assert_eq!(ConsoleColor::from_code(8), ConsoleColor::DarkGray);
        assert_eq!(ConsoleColor::from_code(15), ConsoleColor::White);
    }

    #[test]
    fn test_qualified_names() {
        assert_eq!(ConsoleColor::Black.name(), "System.ConsoleColor.Black");
        assert_eq!(
            ConsoleColor::DarkYellow.to_string(),
            "System.ConsoleColor.DarkYellow"
        );
        assert_eq!(ConsoleColor::White.name(), "System.ConsoleColor.White");
    }

    #[test]
    fn test_from_rgb_exact_palette() {
        for code in 0..16 {
            let color = ConsoleColor::from_code(code);
            let (r, g, b) = color.rgb();
            assert_eq!(ConsoleColor::from_rgb(r, g, b), color);
        }
    }

    #[test]
    fn test_from_crossterm_named() {
        use crossterm::style::Color;
        assert_eq!(ConsoleColor::from(Color::DarkCyan), ConsoleColor::DarkCyan);
        assert_eq!(ConsoleColor::from(Color::Grey), ConsoleColor::Gray);
        assert_eq!(ConsoleColor::from(Color::DarkGrey), ConsoleColor::DarkGray);
        assert_eq!(ConsoleColor::from(Color::Reset), ConsoleColor::Gray);
    }

    #[test]
    fn test_from_crossterm_ansi_masks() {
        use crossterm::style::Color;
        assert_eq!(
            ConsoleColor::from(Color::AnsiValue(23)),
            ConsoleColor::Gray
        );
    }

    #[test]
    fn test_from_crossterm_rgb_snaps() {
        use crossterm::style::Color;
        assert_eq!(
            ConsoleColor::from(Color::Rgb { r: 250, g: 10, b: 5 }),
            ConsoleColor::Red
        );
        assert_eq!(
            ConsoleColor::from(Color::Rgb { r: 10, g: 10, b: 10 }),
            ConsoleColor::Black
        );
    }
}
