use supports_color::Stream;

const BASIC: [u8; 6] = [6, 2, 3, 4, 5, 1];

const EXTENDED: [u8; 76] = [
    20, 21, 26, 27, 32, 33, 38, 39, 40, 41, 42, 43, 44, 45, 56, 57, 62, 63, 68, 69, 74, 75, 76,
    77, 78, 79, 80, 81, 92, 93, 98, 99, 112, 113, 128, 129, 134, 135, 148, 149, 160, 161, 162,
    163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 178, 179, 184, 185, 196, 197, 198,
    199, 200, 201, 202, 203, 204, 205, 206, 207, 208, 209, 214, 215, 220, 221,
];

/// An ANSI color code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8);

impl Color {
    /// The escape sequence selecting this color, minus its final `m`
    pub fn escape(&self) -> String {
        if self.0 < 8 {
            format!("\x1b[3{}", self.0)
        } else {
            format!("\x1b[38;5;{}", self.0)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    Basic,
    Extended,
}

impl Palette {
    pub fn detect() -> Self {
        match supports_color::on(Stream::Stderr) {
            Some(level) if level.has_256 => Palette::Extended,
            _ => Palette::Basic,
        }
    }

    pub fn colors(&self) -> &'static [u8] {
        match self {
            Palette::Basic => &BASIC,
            Palette::Extended => &EXTENDED,
        }
    }
}

pub fn stderr_supports_color() -> bool {
    supports_color::on(Stream::Stderr).map_or(false, |level| level.has_basic)
}

/// Picks a stable color for `namespace` by hashing it into `palette`
pub fn select_color(namespace: &str, palette: Palette) -> Color {
    let mut hash: i32 = 0;
    for unit in namespace.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }

    let colors = palette.colors();
    let index = (hash as i64).unsigned_abs() as usize % colors.len();
    Color(colors[index])
}
