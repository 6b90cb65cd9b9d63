use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

/// Build the app theme following the system light/dark preference.
///
/// Detection may spawn a process, so call this once at startup.
pub fn resolve_theme() -> Theme {
    theme_for(detect_system_dark_mode())
}

fn theme_for(is_dark: bool) -> Theme {
    let palette = if is_dark {
        dark_palette()
    } else {
        light_palette()
    };

    Theme::custom("Blur Image", palette)
}

/// Secondary text color for hints and status lines.
pub fn tertiary_color(theme: &Theme) -> Color {
    let p = theme.palette();
    Color { a: 0.55, ..p.text }
}

/// Background of the preview area.
pub fn surface_color(theme: &Theme) -> Color {
    let p = theme.palette();
    Color { a: 0.04, ..p.text }
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x1c, 0x1c, 0x1e),
        text: color!(0xcc, 0xcc, 0xcc),
        primary: color!(0x5e, 0x9f, 0xf5),
        success: color!(0x30, 0xd1, 0x58),
        warning: color!(0xff, 0xcc, 0x00),
        danger: color!(0xff, 0x45, 0x3a),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xf5, 0xf5, 0xf7),
        text: color!(0x1d, 0x1d, 0x1f),
        primary: color!(0x34, 0x78, 0xf6),
        success: color!(0x34, 0xc7, 0x59),
        warning: color!(0xff, 0x9f, 0x0a),
        danger: color!(0xff, 0x3b, 0x30),
    }
}

fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| {
                String::from_utf8_lossy(&o.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(true)
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}
