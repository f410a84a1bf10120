use plotters::style::RGBColor;

pub const PLAYER_COLORS: [RGBColor; 4] = [
    RGBColor(0xFF, 0x6B, 0x6B),
    RGBColor(0x4E, 0xCD, 0xC4),
    RGBColor(0x45, 0xB7, 0xD1),
    RGBColor(0x96, 0xCE, 0xB4),
];
pub const BAD_HOLE_COLOR: RGBColor = RGBColor(0xE7, 0x4C, 0x3C);
pub const GOOD_HOLE_COLOR: RGBColor = RGBColor(0x27, 0xAE, 0x60);

// YlOrRd, light to dark
const HEAT_STOPS: [RGBColor; 3] = [
    RGBColor(0xFF, 0xFF, 0xCC),
    RGBColor(0xFD, 0x8D, 0x3C),
    RGBColor(0xBD, 0x00, 0x26),
];

/// Colour for the nth player; the palette repeats past four players.
#[must_use]
pub fn player_color(idx: usize) -> RGBColor {
    PLAYER_COLORS[idx % PLAYER_COLORS.len()]
}

#[must_use]
pub fn hex_color(color: RGBColor) -> String {
    format!("#{:02X}{:02X}{:02X}", color.0, color.1, color.2)
}

fn blend(from: u8, to: u8, weight: f64) -> u8 {
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * weight;
    value.round().clamp(0.0, 255.0) as u8
}

/// Heatmap colour for a cell filled to `fraction` of the busiest cell.
#[must_use]
pub fn heat_color(fraction: f64) -> RGBColor {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (from, to, weight) = if fraction <= 0.5 {
        (HEAT_STOPS[0], HEAT_STOPS[1], fraction * 2.0)
    } else {
        (HEAT_STOPS[1], HEAT_STOPS[2], (fraction - 0.5) * 2.0)
    };
    RGBColor(
        blend(from.0, to.0, weight),
        blend(from.1, to.1, weight),
        blend(from.2, to.2, weight),
    )
}

/// Shorten long names for axis labels: "Alexandra Smith" -> "A. Smith".
/// Names that already fit are kept as they are.
#[must_use]
pub fn short_player_name(player_name: &str, max_chars: usize) -> String {
    if player_name.chars().count() <= max_chars {
        return player_name.to_string();
    }

    let parts: Vec<&str> = player_name.split_whitespace().collect();
    let shortened = if parts.len() >= 2 {
        let first_initial = parts[0].chars().next().unwrap_or(' ');
        let last_name = parts[parts.len() - 1];
        format!("{first_initial}. {last_name}")
    } else {
        player_name.to_string()
    };

    if shortened.chars().count() <= max_chars {
        shortened
    } else {
        shortened.chars().take(max_chars).collect()
    }
}

#[must_use]
pub fn format_holes(holes: &[usize]) -> String {
    let holes: Vec<String> = holes.iter().map(ToString::to_string).collect();
    format!("[{}]", holes.join(", "))
}
