//! Scalar helpers

/// Clamp `value` into the interval spanned by `a` and `b`
///
/// Unlike [`f32::clamp`] this never panics: the bounds may come in either
/// order, a single NaN bound collapses the interval onto the other bound, and
/// two NaN bounds leave `value` untouched. Limits read from configuration go
/// through here.
pub fn clamp_between(value: f32, a: f32, b: f32) -> f32 {
    let lo = a.min(b);
    let hi = a.max(b);
    value.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_bounds() {
        assert_eq!(clamp_between(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp_between(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp_between(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_swapped_bounds() {
        assert_eq!(clamp_between(5.0, 1.0, 0.0), 1.0);
        assert_eq!(clamp_between(-5.0, 1.0, 0.0), 0.0);
        assert_eq!(clamp_between(0.5, 1.0, 0.0), 0.5);
    }

    #[test]
    fn test_nan_bounds_do_not_panic() {
        assert_eq!(clamp_between(5.0, 0.0, f32::NAN), 0.0);
        assert_eq!(clamp_between(-5.0, f32::NAN, 0.0), 0.0);
        assert_eq!(clamp_between(0.5, f32::NAN, f32::NAN), 0.5);
    }
}
