use bevy::prelude::*;

/// Tuning knobs for the particle field. All of these are fixed once the field
/// is built.
#[derive(Clone, Debug)]
pub struct FieldSettings {
    pub min_size: f32,
    pub max_size: f32,
    /// Surface area, in square pixels, covered by each particle. The particle
    /// count is `floor(width * height / particle_density)`.
    pub particle_density: f32,
    pub particle_color: Color,
}

impl Default for FieldSettings {
    fn default() -> Self {
        FieldSettings {
            min_size: 0.4,
            max_size: 1.0,
            particle_density: 1200.0,
            particle_color: Color::WHITE,
        }
    }
}

/// Accepts `#RRGGBB` / `#RRGGBBAA` hex (leading `#` optional) or the keyword
/// `transparent`.
pub fn parse_color(value: &str) -> Option<Color> {
    if value.eq_ignore_ascii_case("transparent") {
        return Some(Color::NONE);
    }
    Srgba::hex(value).ok().map(Color::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("#FFFFFF"), Some(Color::WHITE));
        assert_eq!(parse_color("ff0000"), Some(Color::srgb(1.0, 0.0, 0.0)));
    }

    #[test]
    fn parses_transparent_keyword() {
        let color = parse_color("Transparent").unwrap();
        assert_eq!(color.alpha(), 0.0);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_color("not-a-color"), None);
        assert_eq!(parse_color(""), None);
    }
}
