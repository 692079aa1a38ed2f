use std::fmt::Debug;

use verdict_core::{enforce, AssertionFailure};

/// Decimal places used by [`assert_almost_equal`].
pub const DEFAULT_PLACES: i32 = 7;

/// Numbers compared by the tolerance helpers, widened to `f64`.
///
/// Integers wider than 53 bits lose precision in the conversion.
pub trait AsFloat {
    /// The value as an `f64`.
    fn as_f64(&self) -> f64;
}

impl<T: AsFloat + ?Sized> AsFloat for &T {
    fn as_f64(&self) -> f64 {
        (**self).as_f64()
    }
}

macro_rules! impl_as_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFloat for $ty {
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_as_float!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Rounds `value` to `places` decimal places, ties to even.
///
/// Negative `places` round to tens, hundreds and so on. The tie test runs on
/// the product `value * 10^places` after it has been rounded to `f64`, so a
/// value one ulp off an exact half can round the other way than a decimal
/// exact rounding would, e.g. `5.0000000000000004e-08` at 7 places rounds to 0.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places);
    if scale == 0.0 {
        return 0.0;
    }
    let scaled = value * scale;
    if !scaled.is_finite() {
        // Finer than f64 can resolve: rounding is the identity.
        return value;
    }
    scaled.round_ties_even() / scale
}

/// Checks that `round(expected - actual, places) == 0`.
pub fn check_almost_equal_places<E, A>(
    expected: E,
    actual: A,
    places: i32,
) -> Result<(), AssertionFailure>
where
    E: AsFloat + Debug,
    A: AsFloat + Debug,
{
    let difference = expected.as_f64() - actual.as_f64();
    if round_to_places(difference, places) != 0.0 {
        return Err(AssertionFailure::new(
            "verdict.almost_equal",
            format!("{actual:?} is not almost equal to {expected:?}"),
        )
        .with_context("places", places.to_string())
        .with_context("difference", difference.to_string()));
    }
    Ok(())
}

/// [`check_almost_equal_places`] with [`DEFAULT_PLACES`].
pub fn check_almost_equal<E, A>(expected: E, actual: A) -> Result<(), AssertionFailure>
where
    E: AsFloat + Debug,
    A: AsFloat + Debug,
{
    check_almost_equal_places(expected, actual, DEFAULT_PLACES)
}

/// Asserts that `expected` and `actual` agree to seven decimal places.
#[track_caller]
pub fn assert_almost_equal<E, A>(expected: E, actual: A)
where
    E: AsFloat + Debug,
    A: AsFloat + Debug,
{
    enforce(check_almost_equal(expected, actual));
}

/// Asserts that `expected` and `actual` agree to `places` decimal places.
#[track_caller]
pub fn assert_almost_equal_places<E, A>(expected: E, actual: A, places: i32)
where
    E: AsFloat + Debug,
    A: AsFloat + Debug,
{
    enforce(check_almost_equal_places(expected, actual, places));
}
