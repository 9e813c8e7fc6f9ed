//! ASCII schematics of the two coupling topologies.
//!
//! Box-drawing renderings sized to the resonator count: Top-C shows the
//! coupling capacitors in series on the signal line, Shunt-C shows the
//! bottom-coupled rail (Cohn-style capacitive bottom coupling).

use crate::synthesis::Topology;

/// Render the topology diagram for an n-resonator filter.
pub fn render(topology: Topology, n: usize) -> String {
    match topology {
        Topology::Top => top_c(n),
        Topology::Shunt => shunt_c(n),
    }
}

// ---------------------------------------------------------------------------
// Shared line building
// ---------------------------------------------------------------------------

/// Overwrite `chars` so `text` is centered on `center`.
fn place(chars: &mut [char], center: usize, text: &str) {
    let width = text.chars().count();
    let start = center.saturating_sub(width / 2);
    for (j, ch) in text.chars().enumerate() {
        if start + j < chars.len() {
            chars[start + j] = ch;
        }
    }
}

/// A blank line of `len` with one element centered on each tank position.
fn tank_row(len: usize, positions: &[usize], elements: &[String]) -> String {
    let mut chars = vec![' '; len];
    for (&pos, elem) in positions.iter().zip(elements) {
        place(&mut chars, pos, elem);
    }
    chars.into_iter().collect()
}

fn repeated_row(len: usize, positions: &[usize], element: &str) -> String {
    let elements = vec![element.to_string(); positions.len()];
    tank_row(len, positions, &elements)
}

/// `"Cp1  L1"`-style component row, one entry per tank.
fn component_row(len: usize, positions: &[usize], n: usize) -> String {
    let elements: Vec<String> = (1..=n).map(|i| format!("Cp{i:<2} L{i}")).collect();
    tank_row(len, positions, &elements)
}

// ---------------------------------------------------------------------------
// Top-C (series coupling on the main line)
// ---------------------------------------------------------------------------

fn top_c(n: usize) -> String {
    let seg = "──────┤├──────┬";
    let main_line = format!("  IN ──────┬{}────── OUT", seg.repeat(n - 1));
    let len = main_line.chars().count();
    let positions: Vec<usize> = (0..n).map(|i| 11 + i * 15).collect();

    // Coupling-capacitor labels above the line, centered between tanks.
    let mut label = vec![' '; len];
    for i in 0..n - 1 {
        let mid = (positions[i] + positions[i + 1]) / 2;
        place(&mut label, mid, &format!("Cs{}{}", i + 1, i + 2));
    }

    [
        label.into_iter().collect::<String>(),
        main_line,
        repeated_row(len, &positions, "   │   "),
        repeated_row(len, &positions, "┌──┴──┐"),
        repeated_row(len, &positions, "│     │"),
        component_row(len, &positions, n),
        repeated_row(len, &positions, "│     │"),
        repeated_row(len, &positions, "└──┬──┘"),
        repeated_row(len, &positions, "   │   "),
        repeated_row(len, &positions, "  GND  "),
    ]
    .join("\n")
}

// ---------------------------------------------------------------------------
// Shunt-C (bottom-coupled rail)
// ---------------------------------------------------------------------------

fn shunt_c(n: usize) -> String {
    let seg = "────────────┬";
    let main_line = format!("  IN ──────┬{}────── OUT", seg.repeat(n - 1));
    let len = main_line.chars().count();
    let positions: Vec<usize> = (0..n).map(|i| 11 + i * 13).collect();

    // Bottom rail: tank feet joined by the coupling capacitors.
    let mut rail = vec![' '; len];
    for (i, &pos) in positions.iter().enumerate() {
        rail[pos] = if i == 0 {
            '├'
        } else if i == n - 1 {
            '┤'
        } else {
            '┼'
        };
        if i < n - 1 {
            let next = positions[i + 1];
            for slot in rail.iter_mut().take(next).skip(pos + 1) {
                *slot = '─';
            }
            place(&mut rail, (pos + next) / 2, &format!("Cs{}{}", i + 1, i + 2));
        }
    }

    // Single ground drop from the center of the rail.
    let center = positions[n / 2];
    let mut gnd_wire = vec![' '; len];
    gnd_wire[center] = '│';
    let mut gnd = vec![' '; len];
    place(&mut gnd, center, "GND");

    [
        main_line,
        repeated_row(len, &positions, "   │   "),
        repeated_row(len, &positions, "┌──┴──┐"),
        repeated_row(len, &positions, "│     │"),
        component_row(len, &positions, n),
        repeated_row(len, &positions, "│     │"),
        repeated_row(len, &positions, "└──┬──┘"),
        repeated_row(len, &positions, "   │   "),
        rail.into_iter().collect::<String>(),
        gnd_wire.into_iter().collect::<String>(),
        gnd.into_iter().collect::<String>(),
    ]
    .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
