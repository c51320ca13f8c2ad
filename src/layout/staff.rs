//! Staff stacking — system height from the parts stacked in it.
//!
//! A part with `n` staves is a grand staff: `n` staff heights separated by
//! the grand-staff gap. Parts are separated by the part gap.

use crate::options::LayoutOptions;

/// Height of one part with `num_staves` staves.
pub fn part_height(num_staves: usize, options: &LayoutOptions) -> f64 {
    if num_staves == 0 {
        return 0.0;
    }
    options.staff_height
        + (num_staves as f64 - 1.0) * (options.staff_height + options.grand_staff_gap)
}

/// Height of a system stacking one part per entry of `parts_staves`.
pub fn stacked_height(parts_staves: &[usize], options: &LayoutOptions) -> f64 {
    let mut y_offset = 0.0;
    for (i, &num_staves) in parts_staves.iter().enumerate() {
        y_offset += part_height(num_staves, options);
        if i < parts_staves.len() - 1 {
            y_offset += options.part_gap;
        }
    }
    y_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_staff_is_one_staff_height() {
        let opts = LayoutOptions::default();
        assert_eq!(stacked_height(&[1], &opts), 40.0);
    }

    #[test]
    fn grand_staff_adds_gap() {
        let opts = LayoutOptions::default();
        assert_eq!(part_height(2, &opts), 40.0 + 40.0 + 60.0);
    }

    #[test]
    fn parts_separated_by_part_gap() {
        let opts = LayoutOptions::default();
        // piano (2 staves) + voice (1 staff)
        assert_eq!(stacked_height(&[2, 1], &opts), 140.0 + 80.0 + 40.0);
        assert_eq!(stacked_height(&[], &opts), 0.0);
    }
}
