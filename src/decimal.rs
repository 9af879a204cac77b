//! Decimal-exact arithmetic over `f64`.
//!
//! Binary floating point cannot represent most decimal fractions, so
//! plain `0.1 + 0.2` yields `0.30000000000000004`. [`compute`] scales
//! both operands into integers by the larger decimal-digit count, applies
//! the operator on the scaled values, and undoes the scaling. The result
//! is exact for any operands representable with finitely many decimal
//! digits.
//!
//! The operator is a closed enum, so there is no "unknown operator"
//! failure mode to handle.

/// Arithmetic operator accepted by [`compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

/// Number of decimal fractional digits in the shortest rendering of `n`.
///
/// Integers (and non-finite values) have zero fractional digits.
///
/// # Examples
/// ```
/// use kitbag::decimal::fraction_digits;
/// assert_eq!(fraction_digits(0.125), 3);
/// assert_eq!(fraction_digits(42.0), 0);
/// ```
pub fn fraction_digits(n: f64) -> u32 {
    match n.to_string().split_once('.') {
        Some((_, frac)) => frac.len() as u32,
        None => 0,
    }
}

/// Computes `a <op> b` without binary floating-point rounding artifacts.
///
/// # Algorithm
/// Let `scale = 10^max(fraction_digits(a), fraction_digits(b))`. Both
/// operands are scaled by `scale` and rounded to the integers they
/// represent, the operator is applied, and the scale is cancelled:
/// divided out once for `+`/`-`, squared for `*`, and not at all for `/`
/// (where it cancels on its own). Each operator gets the correction its
/// algebra requires, so all four are exact for decimal-representable
/// operands.
///
/// # Examples
/// ```
/// use kitbag::decimal::{compute, Op};
/// assert_eq!(compute(0.1, Op::Add, 0.2), 0.3);
/// assert_eq!(compute(0.3, Op::Sub, 0.1), 0.2);
/// assert_eq!(compute(0.07, Op::Mul, 100.0), 7.0);
/// assert_eq!(compute(0.3, Op::Div, 0.1), 3.0);
/// ```
pub fn compute(a: f64, op: Op, b: f64) -> f64 {
    let scale = 10f64.powi(fraction_digits(a).max(fraction_digits(b)) as i32);
    let sa = (a * scale).round();
    let sb = (b * scale).round();
    match op {
        Op::Add => (sa + sb) / scale,
        Op::Sub => (sa - sb) / scale,
        Op::Mul => (sa * sb) / (scale * scale),
        Op::Div => sa / sb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_exact() {
        // The canonical binary-float failure case.
        assert_eq!(compute(0.1, Op::Add, 0.2), 0.3);
        assert_eq!(compute(0.7, Op::Add, 0.1), 0.8);
    }

    #[test]
    fn test_sub_exact() {
        assert_eq!(compute(0.3, Op::Sub, 0.2), 0.1);
        assert_eq!(compute(1.5, Op::Sub, 1.2), 0.3);
    }

    #[test]
    fn test_mul_exact() {
        assert_eq!(compute(0.1, Op::Mul, 0.2), 0.02);
        assert_eq!(compute(1.1, Op::Mul, 1.1), 1.21);
    }

    #[test]
    fn test_div_exact() {
        assert_eq!(compute(0.3, Op::Div, 0.1), 3.0);
        assert_eq!(compute(0.69, Op::Div, 10.0), 0.069);
    }

    #[test]
    fn test_integer_operands() {
        assert_eq!(compute(7.0, Op::Add, 3.0), 10.0);
        assert_eq!(compute(7.0, Op::Mul, 3.0), 21.0);
        assert_eq!(compute(7.0, Op::Div, 2.0), 3.5);
    }

    #[test]
    fn test_mixed_digit_counts() {
        assert_eq!(compute(1.005, Op::Add, 0.005), 1.01);
        assert_eq!(compute(2.5, Op::Sub, 0.125), 2.375);
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(compute(-0.1, Op::Add, 0.3), 0.2);
        assert_eq!(compute(-0.2, Op::Mul, 0.3), -0.06);
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        assert_eq!(compute(1.0, Op::Div, 0.0), f64::INFINITY);
        assert!(compute(0.0, Op::Div, 0.0).is_nan());
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(fraction_digits(0.0), 0);
        assert_eq!(fraction_digits(10.0), 0);
        assert_eq!(fraction_digits(0.5), 1);
        assert_eq!(fraction_digits(3.25), 2);
        assert_eq!(fraction_digits(-1.005), 3);
        assert_eq!(fraction_digits(f64::NAN), 0);
    }
}
