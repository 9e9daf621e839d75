//! Comparison, logical, null and membership operators.
//!
//! These are plain functions meant to be called inside the closures handed
//! to [`Query::filter`](crate::Query::filter). They carry no state and never
//! touch the pipeline.
//!
//! Comparisons take both operands by reference and accept any pair of types
//! with a `PartialOrd`/`PartialEq` relation, so `eq(&user.name, "Alice")`
//! compares a `String` field against a `&str` literal without allocating.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::QueryError;

/// Comparison operator.
///
/// Each variant evaluates with the host `PartialOrd`/`PartialEq` semantics
/// of its operands. For floats this means every ordering operator is
/// `false` when either side is NaN, while `Ne` is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
}

impl Op {
    /// Compares `lhs` against `rhs` with this operator.
    ///
    /// ```
    /// use standout_query::Op;
    ///
    /// assert!(Op::Gt.eval(&30, &28));
    /// assert!(Op::Lt.eval("Alice", "Bob"));
    /// ```
    pub fn eval<A, B>(self, lhs: &A, rhs: &B) -> bool
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        match self {
            Op::Eq => lhs == rhs,
            Op::Ne => lhs != rhs,
            _ => self.eval_ordering(lhs.partial_cmp(rhs)),
        }
    }

    /// Evaluates an ordering-based operator given a comparison result.
    ///
    /// `None` (incomparable operands) satisfies only `Ne`.
    pub fn eval_ordering(self, ordering: Option<Ordering>) -> bool {
        let Some(ordering) = ordering else {
            return self == Op::Ne;
        };
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Gt => "gt",
            Op::Gte => "ge",
            Op::Lt => "lt",
            Op::Lte => "le",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Op {
    type Err = QueryError;

    /// Parses an operator name (`gt`, `ge`, ...), the long forms `gte`/`lte`,
    /// or a symbol (`>`, `>=`, `<`, `<=`, `==`, `!=`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "eq" | "==" => Op::Eq,
            "ne" | "!=" => Op::Ne,
            "gt" | ">" => Op::Gt,
            "ge" | "gte" | ">=" => Op::Gte,
            "lt" | "<" => Op::Lt,
            "le" | "lte" | "<=" => Op::Lte,
            other => return Err(QueryError::UnknownOperator(other.to_string())),
        };
        Ok(op)
    }
}

// ============================================================================
// Comparison functions
// ============================================================================

/// `lhs > rhs`.
pub fn gt<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    Op::Gt.eval(lhs, rhs)
}

/// `lhs < rhs`.
pub fn lt<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    Op::Lt.eval(lhs, rhs)
}

/// `lhs >= rhs`.
pub fn ge<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    Op::Gte.eval(lhs, rhs)
}

/// `lhs <= rhs`.
pub fn le<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    Op::Lte.eval(lhs, rhs)
}

/// `lhs == rhs`. Only needs `PartialEq`.
pub fn eq<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    lhs == rhs
}

/// `lhs != rhs`. Only needs `PartialEq`.
pub fn ne<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    lhs != rhs
}

// ============================================================================
// Logical combinators
// ============================================================================

/// Logical AND of two already-evaluated conditions.
pub fn and(lhs: bool, rhs: bool) -> bool {
    lhs && rhs
}

/// Logical OR of two already-evaluated conditions.
pub fn or(lhs: bool, rhs: bool) -> bool {
    lhs || rhs
}

/// Logical negation.
pub fn not(value: bool) -> bool {
    !value
}

// ============================================================================
// Null checks
// ============================================================================

/// Returns `true` if the optional value is absent.
pub fn is_null<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Returns `true` if the optional value is present.
pub fn is_not_null<T>(value: &Option<T>) -> bool {
    value.is_some()
}

// ============================================================================
// Membership
// ============================================================================

/// Returns `true` if `value` equals any element of `collection`.
///
/// An empty collection never contains anything.
///
/// ```
/// use standout_query::is_in;
///
/// assert!(is_in(&30, &[25, 30, 35]));
/// assert!(is_in(&String::from("Bob"), &["Alice", "Bob"]));
/// ```
pub fn is_in<'c, A, B, I>(value: &A, collection: I) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: 'c + ?Sized,
    I: IntoIterator<Item = &'c B>,
{
    collection.into_iter().any(|item| value == item)
}

/// Exact negation of [`is_in`].
pub fn not_in<'c, A, B, I>(value: &A, collection: I) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: 'c + ?Sized,
    I: IntoIterator<Item = &'c B>,
{
    !is_in(value, collection)
}

/// Method-call form of [`is_in`] and [`not_in`].
///
/// ```
/// use standout_query::MembershipExt;
///
/// assert!(3i32.is_in(&[1, 2, 3]));
/// assert!(String::from("x").not_in(&["a", "b"]));
/// ```
pub trait MembershipExt {
    /// Returns `true` if `self` equals any element of `collection`.
    fn is_in<'c, B, I>(&self, collection: I) -> bool
    where
        Self: PartialEq<B>,
        B: 'c + ?Sized,
        I: IntoIterator<Item = &'c B>;

    /// Returns `true` if `self` equals no element of `collection`.
    fn not_in<'c, B, I>(&self, collection: I) -> bool
    where
        Self: PartialEq<B>,
        B: 'c + ?Sized,
        I: IntoIterator<Item = &'c B>,
    {
        !self.is_in(collection)
    }
}

impl<T: ?Sized> MembershipExt for T {
    fn is_in<'c, B, I>(&self, collection: I) -> bool
    where
        Self: PartialEq<B>,
        B: 'c + ?Sized,
        I: IntoIterator<Item = &'c B>,
    {
        is_in(self, collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_eval_integers() {
        assert!(Op::Eq.eval(&10, &10));
        assert!(!Op::Eq.eval(&10, &11));
        assert!(Op::Ne.eval(&10, &11));

        assert!(Op::Gt.eval(&11, &10));
        assert!(!Op::Gt.eval(&10, &10));
        assert!(Op::Gte.eval(&10, &10));
        assert!(!Op::Gte.eval(&9, &10));

        assert!(Op::Lt.eval(&9, &10));
        assert!(!Op::Lt.eval(&10, &10));
        assert!(Op::Lte.eval(&10, &10));
        assert!(!Op::Lte.eval(&11, &10));
    }

    #[test]
    fn op_eval_mixed_string_types() {
        let name = String::from("Alice");
        assert!(Op::Eq.eval(name.as_str(), "Alice"));
        assert!(Op::Lt.eval(name.as_str(), "Bob"));
        assert!(!Op::Eq.eval(name.as_str(), "alice")); // case sensitive
    }

    #[test]
    fn op_eval_nan() {
        for op in [Op::Eq, Op::Gt, Op::Gte, Op::Lt, Op::Lte] {
            assert!(!op.eval(&f64::NAN, &1.0), "{op} should be false for NaN");
            assert!(!op.eval(&f64::NAN, &f64::NAN));
        }
        assert!(Op::Ne.eval(&f64::NAN, &f64::NAN));
        assert!(ne(&f64::NAN, &f64::NAN));
    }

    #[test]
    fn op_eval_ordering() {
        assert!(Op::Gte.eval_ordering(Some(Ordering::Equal)));
        assert!(!Op::Gt.eval_ordering(Some(Ordering::Equal)));
        assert!(Op::Lte.eval_ordering(Some(Ordering::Less)));
        assert!(!Op::Lte.eval_ordering(Some(Ordering::Greater)));

        assert!(Op::Ne.eval_ordering(None));
        assert!(!Op::Eq.eval_ordering(None));
        assert!(!Op::Gt.eval_ordering(None));
    }

    #[test]
    fn op_display_and_parse() {
        assert_eq!(Op::Gte.to_string(), "ge");
        let names = [
            (Op::Eq, "=="),
            (Op::Ne, "!="),
            (Op::Gt, ">"),
            (Op::Gte, ">="),
            (Op::Lt, "<"),
            (Op::Lte, "<="),
        ];
        for (op, symbol) in names {
            assert_eq!(op.as_str().parse::<Op>().unwrap(), op);
            assert_eq!(symbol.parse::<Op>().unwrap(), op);
        }
        assert_eq!("gte".parse::<Op>().unwrap(), Op::Gte);
        assert_eq!("lte".parse::<Op>().unwrap(), Op::Lte);
        assert!(matches!(
            "like".parse::<Op>(),
            Err(QueryError::UnknownOperator(name)) if name == "like"
        ));
    }

    #[test]
    fn comparison_functions() {
        assert!(gt(&30, &28));
        assert!(!gt(&28, &28));
        assert!(ge(&28, &28));
        assert!(lt(&25, &28));
        assert!(le(&28, &28));
        assert!(eq("a", "a"));
        assert!(ne("a", "b"));
        assert!(eq(&String::from("Alice"), "Alice"));
    }

    #[test]
    fn logical_combinators() {
        assert!(and(true, true));
        assert!(!and(true, false));
        assert!(or(false, true));
        assert!(!or(false, false));
        assert!(not(false));
        assert!(!not(true));
    }

    #[test]
    fn null_checks() {
        let email: Option<String> = None;
        assert!(is_null(&email));
        assert!(!is_not_null(&email));

        let email = Some("a@example.com".to_string());
        assert!(!is_null(&email));
        assert!(is_not_null(&email));
    }

    #[test]
    fn membership() {
        assert!(is_in(&30, &[25, 30, 35]));
        assert!(!is_in(&31, &[25, 30, 35]));
        assert!(not_in(&31, &[25, 30, 35]));
        assert!(is_in(&String::from("Bob"), &["Alice", "Bob"]));
    }

    #[test]
    fn membership_empty_collection() {
        let empty: Vec<i32> = Vec::new();
        assert!(!is_in(&1, &empty));
        assert!(not_in(&1, &empty));
    }

    #[test]
    fn membership_ext() {
        let ages = vec![25, 30];
        assert!(30i32.is_in(&ages));
        assert!(40i32.not_in(&ages));
        assert!(String::from("Alice").is_in(&["Alice"]));
    }
}
