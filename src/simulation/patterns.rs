/// Gosper glider gun as `(column, row)` pairs, already placed at its anchor
/// near the top-left of the default 90x90 field.
pub const GLIDER_GUN: [(i32, i32); 36] = [
    // Left block
    (12, 22), (12, 23), (13, 22), (13, 23),
    // Left ship
    (22, 22), (22, 23), (22, 24),
    (23, 21), (23, 25),
    (24, 20), (24, 26),
    (25, 20), (25, 26),
    (26, 23),
    (27, 21), (27, 25),
    (28, 22), (28, 23), (28, 24),
    (29, 23),
    // Right ship
    (32, 20), (32, 21), (32, 22),
    (33, 20), (33, 21), (33, 22),
    (34, 19), (34, 23),
    (36, 18), (36, 19), (36, 23), (36, 24),
    // Right block
    (46, 20), (46, 21), (47, 20), (47, 21),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_glider_gun_has_no_duplicates() {
        let unique: HashSet<_> = GLIDER_GUN.iter().collect();
        assert_eq!(unique.len(), 36);
    }

    #[test]
    fn test_glider_gun_fits_default_field() {
        for &(column, row) in &GLIDER_GUN {
            assert!((0..90).contains(&column));
            assert!((0..90).contains(&row));
        }
    }
}
