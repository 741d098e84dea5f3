// src/globe/frame.rs
// =============================================================================
// Draws one frame of a rotating ASCII globe.
//
// For every character cell inside the circle we work out the point on the
// unit sphere it shows, turn it into longitude/latitude (shifted by the
// current rotation), decide land vs ocean from a cheap procedural map, and
// pick a character by how brightly that point is lit.
//
// Terminal cells are roughly twice as tall as they are wide, so a frame is
// `rows` lines of `2 * rows` characters.
// =============================================================================

const OCEAN: &[char] = &['.', ',', ':', ';'];
const LAND: &[char] = &['o', 'O', '0', '#', '@'];

// Lit from the upper left, slightly in front
const LIGHT: (f64, f64, f64) = (-0.45, 0.5, 0.74);
const AMBIENT: f64 = 0.35;

/// Renders the globe rotated by `rotation` radians around its vertical axis
pub fn render_frame(rotation: f64, rows: usize) -> Vec<String> {
    let cols = rows * 2;
    let light = normalize(LIGHT);

    (0..rows)
        .map(|row| {
            let y = cell_center(row, rows);
            (0..cols)
                .map(|col| {
                    let x = cell_center(col, cols);
                    shade(x, y, rotation, light)
                })
                .collect()
        })
        .collect()
}

// Maps cell index -> [-1, 1]
fn cell_center(index: usize, count: usize) -> f64 {
    (index as f64 + 0.5) / count as f64 * 2.0 - 1.0
}

fn shade(x: f64, y: f64, rotation: f64, light: (f64, f64, f64)) -> char {
    let d = x * x + y * y;
    if d > 1.0 {
        return ' ';
    }

    // Screen y grows downwards, the sphere's y grows upwards
    let (nx, ny, nz) = (x, -y, (1.0 - d).sqrt());

    let longitude = nx.atan2(nz) + rotation;
    let latitude = ny.asin();

    let diffuse = (nx * light.0 + ny * light.1 + nz * light.2).max(0.0);
    let brightness = (AMBIENT + (1.0 - AMBIENT) * diffuse).min(1.0);

    let ramp = if is_land(longitude, latitude) { LAND } else { OCEAN };
    let index = (brightness * (ramp.len() - 1) as f64).round() as usize;
    ramp[index.min(ramp.len() - 1)]
}

// Blobby continents. Only integer multiples of longitude appear, so the map
// repeats every full turn.
fn is_land(longitude: f64, latitude: f64) -> bool {
    let shape = (longitude * 2.0).sin() * (latitude * 3.0).cos()
        + 0.5 * (longitude * 5.0 + latitude * 2.0).sin();
    shape > 0.35
}

fn normalize((x, y, z): (f64, f64, f64)) -> (f64, f64, f64) {
    let length = (x * x + y * y + z * z).sqrt();
    (x / length, y / length, z / length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_frame_dimensions() {
        let frame = render_frame(0.0, 11);
        assert_eq!(frame.len(), 11);
        assert!(frame.iter().all(|line| line.chars().count() == 22));
    }

    #[test]
    fn test_corners_are_blank_center_is_not() {
        let frame = render_frame(0.0, 11);
        assert!(frame[0].starts_with(' '));
        assert!(frame[10].ends_with(' '));
        assert_ne!(frame[5].chars().nth(11), Some(' '));
    }

    #[test]
    fn test_rotation_changes_frame() {
        assert_ne!(render_frame(0.0, 15), render_frame(1.0, 15));
    }

    #[test]
    fn test_full_turn_repeats() {
        assert_eq!(render_frame(0.3, 15), render_frame(0.3 + TAU, 15));
    }
}
