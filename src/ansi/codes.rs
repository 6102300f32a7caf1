//! Generation of ANSI escape sequences for coloured and styled text

/// A terminal colour, for either the foreground or the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// An index into the terminal's 256-colour palette.
    Fixed(u8),
    /// A 24-bit "true colour" value.
    Rgb(u8, u8, u8),
}

/// A text style attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Bold,
    Underline,
}

const CSI: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// Build the pair of escape sequences that surrounds a span of styled
/// text: the start sequence selecting the given colours and effects, and
/// the end sequence resetting the terminal back to its defaults.
///
/// With no colours and no effects the pair is empty and the text passes
/// through unchanged.
pub fn ansi_format(
    foreground: Option<Color>,
    background: Option<Color>,
    effects: &[Effect],
) -> (String, String) {
    let mut codes: Vec<String> = Vec::new();

    for effect in effects {
        codes.push(match effect {
            Effect::Bold => "1".to_string(),
            Effect::Underline => "4".to_string(),
        });
    }

    if let Some(color) = foreground {
        codes.push(color_code(color, 30));
    }

    if let Some(color) = background {
        codes.push(color_code(color, 40));
    }

    if codes.is_empty() {
        return (String::new(), String::new());
    }

    let start = format!("{}{}m", CSI, codes.join(";"));
    (start, RESET.to_string())
}

fn color_code(color: Color, base: u8) -> String {
    match color {
        Color::Black => base.to_string(),
        Color::Red => (base + 1).to_string(),
        Color::Green => (base + 2).to_string(),
        Color::Yellow => (base + 3).to_string(),
        Color::Blue => (base + 4).to_string(),
        Color::Magenta => (base + 5).to_string(),
        Color::Cyan => (base + 6).to_string(),
        Color::White => (base + 7).to_string(),
        Color::Fixed(index) => format!("{};5;{}", base + 8, index),
        Color::Rgb(r, g, b) => format!("{};2;{};{};{}", base + 8, r, g, b),
    }
}
