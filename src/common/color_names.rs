use crate::common::color::Color;

// Reference palette for human-readable color names. Matching is nearest
// neighbour by squared RGB distance.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color { r: 0, g: 0, b: 0 }),
    (
        "white",
        Color {
            r: 255,
            g: 255,
            b: 255,
        },
    ),
    (
        "gray",
        Color {
            r: 128,
            g: 128,
            b: 128,
        },
    ),
    ("red", Color { r: 255, g: 0, b: 0 }),
    (
        "orange",
        Color {
            r: 255,
            g: 140,
            b: 0,
        },
    ),
    (
        "yellow",
        Color {
            r: 255,
            g: 220,
            b: 0,
        },
    ),
    ("green", Color { r: 0, g: 160, b: 0 }),
    (
        "teal",
        Color {
            r: 0,
            g: 128,
            b: 128,
        },
    ),
    (
        "cyan",
        Color {
            r: 0,
            g: 255,
            b: 255,
        },
    ),
    ("blue", Color { r: 0, g: 80, b: 255 }),
    ("navy", Color { r: 0, g: 0, b: 96 }),
    (
        "purple",
        Color {
            r: 128,
            g: 0,
            b: 160,
        },
    ),
    (
        "pink",
        Color {
            r: 255,
            g: 105,
            b: 180,
        },
    ),
    (
        "brown",
        Color {
            r: 139,
            g: 80,
            b: 30,
        },
    ),
    (
        "beige",
        Color {
            r: 222,
            g: 206,
            b: 170,
        },
    ),
];

/// Nearest named color for `color`.
pub fn name_of(color: &Color) -> &'static str {
    NAMED_COLORS
        .iter()
        .min_by_key(|(_, reference)| color.distance_squared(reference))
        .map(|(name, _)| *name)
        .unwrap_or("unknown")
}

pub fn names_of(colors: &[Color]) -> Vec<String> {
    colors.iter().map(|c| name_of(c).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_entries_map_to_their_names() {
        assert_eq!(name_of(&Color::new(0, 0, 0)), "black");
        assert_eq!(name_of(&Color::new(255, 255, 255)), "white");
        assert_eq!(name_of(&Color::new(255, 0, 0)), "red");
        assert_eq!(name_of(&Color::new(0, 255, 255)), "cyan");
    }

    #[test]
    fn near_misses_snap_to_the_closest_entry() {
        assert_eq!(name_of(&Color::new(250, 10, 5)), "red");
        assert_eq!(name_of(&Color::new(10, 10, 10)), "black");
    }

    #[test]
    fn names_of_preserves_order() {
        let names = names_of(&[Color::new(255, 0, 0), Color::new(0, 0, 0)]);
        assert_eq!(names, vec!["red".to_string(), "black".to_string()]);
    }
}
