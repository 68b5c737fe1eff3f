//! Small numeric helpers shared by generation, meshing and scheduling.

/// Rounds to the nearest integer, sending exact halves to the even neighbour.
///
/// Occupancy noise, material noise, layer thresholds and the camera's chunk centre
/// all round this way, so a value of exactly `0.5` becomes `0` and `2.5` becomes `2`.
pub fn round_to_int(value: f32) -> i32 {
    value.round_ties_even() as i32
}

/// Linear interpolation between `a` and `b` with `t` clamped to `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.49, 0 ; "below half")]
    #[test_case(0.5, 0 ; "half goes to even zero")]
    #[test_case(1.5, 2 ; "half goes to even two")]
    #[test_case(2.5, 2 ; "two and a half goes to two")]
    #[test_case(0.51, 1 ; "above half")]
    #[test_case(-0.5, 0 ; "negative half")]
    #[test_case(-1.6, -2 ; "negative rounds away")]
    fn rounds_half_to_even(value: f32, expected: i32) {
        assert_eq!(round_to_int(value), expected);
    }

    #[test]
    fn lerp_clamps_parameter() {
        assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
        assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
    }
}
