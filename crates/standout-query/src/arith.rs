//! Arithmetic operators for use inside predicates and projections.
//!
//! Integer and floating point types follow different rules:
//!
//! | Type | Division by zero | Overflow |
//! |------|------------------|----------|
//! | Integers | [`QueryError::DivisionByZero`] | [`QueryError::Overflow`] |
//! | `f32`/`f64` | IEEE 754 (`inf`, `-inf` or NaN) | IEEE 754 (`inf`) |

use crate::error::{QueryError, Result};

/// Numeric types usable with [`add`], [`sub`], [`mul`], [`div`] and [`rem`].
pub trait Arithmetic: Copy {
    /// `self + rhs`.
    fn try_add(self, rhs: Self) -> Result<Self>;
    /// `self - rhs`.
    fn try_sub(self, rhs: Self) -> Result<Self>;
    /// `self * rhs`.
    fn try_mul(self, rhs: Self) -> Result<Self>;
    /// `self / rhs`.
    fn try_div(self, rhs: Self) -> Result<Self>;
    /// `self % rhs`.
    fn try_rem(self, rhs: Self) -> Result<Self>;
}

macro_rules! impl_integer_arithmetic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Arithmetic for $ty {
                fn try_add(self, rhs: Self) -> Result<Self> {
                    self.checked_add(rhs).ok_or(QueryError::Overflow { op: "add" })
                }

                fn try_sub(self, rhs: Self) -> Result<Self> {
                    self.checked_sub(rhs).ok_or(QueryError::Overflow { op: "sub" })
                }

                fn try_mul(self, rhs: Self) -> Result<Self> {
                    self.checked_mul(rhs).ok_or(QueryError::Overflow { op: "mul" })
                }

                fn try_div(self, rhs: Self) -> Result<Self> {
                    if rhs == 0 {
                        return Err(QueryError::DivisionByZero { op: "div" });
                    }
                    // MIN / -1
                    self.checked_div(rhs).ok_or(QueryError::Overflow { op: "div" })
                }

                fn try_rem(self, rhs: Self) -> Result<Self> {
                    if rhs == 0 {
                        return Err(QueryError::DivisionByZero { op: "rem" });
                    }
                    self.checked_rem(rhs).ok_or(QueryError::Overflow { op: "rem" })
                }
            }
        )*
    };
}

macro_rules! impl_float_arithmetic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Arithmetic for $ty {
                fn try_add(self, rhs: Self) -> Result<Self> {
                    Ok(self + rhs)
                }

                fn try_sub(self, rhs: Self) -> Result<Self> {
                    Ok(self - rhs)
                }

                fn try_mul(self, rhs: Self) -> Result<Self> {
                    Ok(self * rhs)
                }

                fn try_div(self, rhs: Self) -> Result<Self> {
                    Ok(self / rhs)
                }

                fn try_rem(self, rhs: Self) -> Result<Self> {
                    Ok(self % rhs)
                }
            }
        )*
    };
}

impl_integer_arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_arithmetic!(f32, f64);

/// Adds two numbers.
pub fn add<N: Arithmetic>(lhs: N, rhs: N) -> Result<N> {
    lhs.try_add(rhs)
}

/// Subtracts `rhs` from `lhs`.
pub fn sub<N: Arithmetic>(lhs: N, rhs: N) -> Result<N> {
    lhs.try_sub(rhs)
}

/// Multiplies two numbers.
pub fn mul<N: Arithmetic>(lhs: N, rhs: N) -> Result<N> {
    lhs.try_mul(rhs)
}

/// Divides `lhs` by `rhs`.
///
/// ```
/// use standout_query::{div, QueryError};
///
/// assert_eq!(div(7, 2).unwrap(), 3);
/// assert!(matches!(div(5, 0), Err(QueryError::DivisionByZero { .. })));
/// assert_eq!(div(5.0, 0.0).unwrap(), f64::INFINITY);
/// ```
pub fn div<N: Arithmetic>(lhs: N, rhs: N) -> Result<N> {
    lhs.try_div(rhs)
}

/// Remainder of `lhs / rhs`.
pub fn rem<N: Arithmetic>(lhs: N, rhs: N) -> Result<N> {
    lhs.try_rem(rhs)
}
