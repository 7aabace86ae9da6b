//! ANSI colorization keyed by color name.

use owo_colors::{AnsiColors, OwoColorize};

/// Colorize a string with optional foreground and background color names.
///
/// Names follow the classic terminal palette (`red`, `light_red`,
/// `dark_gray`, `purple`, `brown`, ...). Unrecognized or absent names apply
/// no styling; with neither name recognized the text is returned unchanged.
pub fn colorize(text: &str, foreground: Option<&str>, background: Option<&str>) -> String {
    let fg = foreground.and_then(foreground_color);
    let bg = background.and_then(background_color);

    match (fg, bg) {
        (Some(fg), Some(bg)) => text.color(fg).on_color(bg).to_string(),
        (Some(fg), None) => text.color(fg).to_string(),
        (None, Some(bg)) => text.on_color(bg).to_string(),
        (None, None) => text.to_string(),
    }
}

fn foreground_color(name: &str) -> Option<AnsiColors> {
    let color = match name {
        "black" => AnsiColors::Black,
        "dark_gray" => AnsiColors::BrightBlack,
        "blue" => AnsiColors::Blue,
        "light_blue" => AnsiColors::BrightBlue,
        "green" => AnsiColors::Green,
        "light_green" => AnsiColors::BrightGreen,
        "cyan" => AnsiColors::Cyan,
        "light_cyan" => AnsiColors::BrightCyan,
        "red" => AnsiColors::Red,
        "light_red" => AnsiColors::BrightRed,
        "purple" => AnsiColors::Magenta,
        "light_purple" => AnsiColors::BrightMagenta,
        "brown" => AnsiColors::Yellow,
        "yellow" => AnsiColors::BrightYellow,
        "light_gray" => AnsiColors::White,
        "white" => AnsiColors::BrightWhite,
        _ => return None,
    };
    Some(color)
}

fn background_color(name: &str) -> Option<AnsiColors> {
    let color = match name {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "light_gray" => AnsiColors::White,
        _ => return None,
    };
    Some(color)
}
