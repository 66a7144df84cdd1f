//! Pastel fill colours for timetable labels.

/// Cell colour for labels without an assigned colour.
pub const BLANK: [u8; 3] = [255, 255, 255];

/// Header fill.
pub const HEADER: [u8; 3] = [200, 220, 255];

const PASTELS: [[u8; 3]; 20] = [
    [200, 220, 255], // light steel blue
    [200, 255, 200], // pale green
    [255, 215, 160], // peach puff
    [230, 230, 250], // lavender
    [255, 240, 200], // lemon chiffon
    [220, 220, 220], // gainsboro
    [245, 205, 150], // light goldenrod
    [200, 220, 200], // light mint
    [210, 255, 220], // honeydew
    [255, 190, 190], // light coral
    [245, 245, 220], // beige
    [240, 200, 200], // light pink
    [230, 240, 200], // pale olive
    [245, 240, 245], // lavender blush
    [255, 180, 180], // pink
    [245, 245, 220], // old lace
    [220, 180, 180], // misty rose
    [240, 225, 185], // light khaki
    [200, 210, 255], // light sky blue
    [230, 230, 230], // light gray
];

/// Pair labels with pastels in order.
///
/// Labels past the 20th get no colour. A repeated label keeps its first colour.
#[must_use]
pub fn colours(labels: Vec<String>) -> Vec<(String, [u8; 3])> {
    let mut out: Vec<(String, [u8; 3])> = Vec::new();
    for (label, rgb) in labels.into_iter().zip(PASTELS) {
        if !out.iter().any(|(seen, _)| *seen == label) {
            out.push((label, rgb));
        }
    }
    out
}

/// Colour for `label`, or [`BLANK`].
#[must_use]
pub fn lookup(colours: &[(String, [u8; 3])], label: &str) -> [u8; 3] {
    colours
        .iter()
        .find(|(name, _)| name == label)
        .map_or(BLANK, |(_, rgb)| *rgb)
}

/// `#rrggbb` for CSS.
#[must_use]
pub fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_pastels_in_order_and_keeps_first_duplicate() {
        let labels = vec!["Gym".to_owned(), "Read".to_owned(), "Gym".to_owned()];
        let colours = colours(labels);
        assert_eq!(colours, vec![("Gym".to_owned(), PASTELS[0]), ("Read".to_owned(), PASTELS[1])]);
        assert_eq!(lookup(&colours, "Read"), PASTELS[1]);
        assert_eq!(lookup(&colours, "Other"), BLANK);
    }

    #[test]
    fn stops_after_palette_runs_out() {
        let labels: Vec<String> = (0..25).map(|i| format!("p{i}")).collect();
        assert_eq!(colours(labels).len(), 20);
    }

    #[test]
    fn hex_formats_lowercase() {
        assert_eq!(hex([255, 215, 160]), "#ffd7a0");
    }
}
