//! Position bounds for a panel dragged inside a parent container.

/// Clamp a candidate position along one axis to the parent's drawable area.
///
/// The lower bound is 0; the upper bound is `parent_size + padding - size`,
/// allowing the panel to rest with a small margin past the nominal edge.
/// Pure and idempotent; applied independently to x and y on every move.
pub fn clamp_axis(position: f32, size: f32, parent_size: f32, padding: f32) -> f32 {
    let max = (parent_size + padding - size).max(0.0);
    position.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_stays_within_bounds() {
        let cases = [
            (-50.0, 100.0, 400.0, 20.0),
            (0.0, 100.0, 400.0, 20.0),
            (150.0, 100.0, 400.0, 20.0),
            (319.9, 100.0, 400.0, 20.0),
            (320.0, 100.0, 400.0, 20.0),
            (9999.0, 100.0, 400.0, 20.0),
        ];
        for (pos, size, parent, padding) in cases {
            let clamped = clamp_axis(pos, size, parent, padding);
            assert!(clamped >= 0.0);
            assert!(clamped <= parent + padding - size);
        }
    }

    #[test]
    fn is_idempotent() {
        for pos in [-10.0, 0.0, 55.5, 320.0, 1000.0] {
            let once = clamp_axis(pos, 100.0, 400.0, 20.0);
            let twice = clamp_axis(once, 100.0, 400.0, 20.0);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn interior_positions_pass_through() {
        assert_eq!(clamp_axis(150.0, 100.0, 400.0, 20.0), 150.0);
    }

    #[test]
    fn upper_bound_includes_padding_overhang() {
        // parent 400, padding 20, size 100 -> max 320
        assert_eq!(clamp_axis(400.0, 100.0, 400.0, 20.0), 320.0);
    }

    #[test]
    fn oversized_panel_pins_to_origin() {
        // Panel larger than parent: upper bound would be negative.
        assert_eq!(clamp_axis(37.0, 500.0, 400.0, 20.0), 0.0);
    }
}
