// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composable ordering policies.
//!
//! A policy is a pure two-argument comparison. Any `Fn(&T, &T) -> Ordering`
//! closure already is one; the combinators below wrap an inner policy and return
//! a fresh value, leaving the original untouched.
//!
//! ```text
//! comparing(|r: &Record| r.age)            age ascending
//!     .reversed()                          age descending
//!     .then_by(comparing(|r| r.name()))    ties broken by name ascending
//! ```
//!
//! Absent values are `Option<T>`. [`nulls_first`] and [`nulls_last`] lift a
//! policy over `T` into one over `Option<T>`.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A total order over `T`.
///
/// For a well-formed policy `compare(a, b)` and `compare(b, a)` are inverses and
/// the relation is transitive. This is not enforced; a malformed policy gives an
/// unspecified (but memory-safe) permutation when used for sorting. A policy that
/// panics propagates the panic to the caller of the sort.
pub trait OrderingPolicy<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Whether `items` is non-decreasing under this policy.
    fn is_sorted(&self, items: &[T]) -> bool
    where
        T: Sized,
    {
        items
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}

/// Combinators available on every policy value.
///
/// Kept apart from [`OrderingPolicy`] because a single value (e.g. [`Natural`])
/// can be a policy for many element types at once.
pub trait Compose: Sized {
    /// Swap `Less` and `Greater`.
    fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }

    /// Use `next` to break ties left by `self`.
    fn then_by<Q>(self, next: Q) -> ThenBy<Self, Q> {
        ThenBy { first: self, next }
    }
}

impl<P> Compose for P {}

impl<T: ?Sized, F> OrderingPolicy<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// The type's own `Ord` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> OrderingPolicy<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// `Ord` order.
pub fn natural() -> Natural {
    Natural
}

/// Reverse of `Ord` order.
pub fn reverse_order() -> Reversed<Natural> {
    Natural.reversed()
}

/// Order by an extracted key, compared with `policy`.
pub struct ByKey<F, P, K> {
    key: F,
    policy: P,
    _key: PhantomData<fn() -> K>,
}

impl<F: Clone, P: Clone, K> Clone for ByKey<F, P, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            policy: self.policy.clone(),
            _key: PhantomData,
        }
    }
}

impl<T, K, F, P> OrderingPolicy<T> for ByKey<F, P, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    P: OrderingPolicy<K>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.policy.compare(&(self.key)(a), &(self.key)(b))
    }
}

/// Order by the natural order of `key(element)`.
pub fn comparing<T, K, F>(key: F) -> ByKey<F, Natural, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    ByKey {
        key,
        policy: Natural,
        _key: PhantomData,
    }
}

/// Order by `key(element)` compared with `policy`.
pub fn comparing_with<T, K, F, P>(key: F, policy: P) -> ByKey<F, P, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    P: OrderingPolicy<K>,
{
    ByKey {
        key,
        policy,
        _key: PhantomData,
    }
}

/// Char-wise lower-case comparison of strings.
///
/// Lower-casing is per `char` and locale independent; no collation is attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl<S: AsRef<str> + ?Sized> OrderingPolicy<S> for CaseInsensitive {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        let a = a.as_ref().chars().flat_map(char::to_lowercase);
        let b = b.as_ref().chars().flat_map(char::to_lowercase);
        a.cmp(b)
    }
}

pub fn case_insensitive() -> CaseInsensitive {
    CaseInsensitive
}

// =============================================================================
// COMBINATORS
// =============================================================================

/// See [`Compose::reversed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<P>(P);

impl<T: ?Sized, P: OrderingPolicy<T>> OrderingPolicy<T> for Reversed<P> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

/// See [`Compose::then_by`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThenBy<P, Q> {
    first: P,
    next: Q,
}

impl<T: ?Sized, P, Q> OrderingPolicy<T> for ThenBy<P, Q>
where
    P: OrderingPolicy<T>,
    Q: OrderingPolicy<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.next.compare(a, b),
            decided => decided,
        }
    }
}

/// `None` sorts before every `Some`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullsFirst<P>(P);

/// `None` sorts after every `Some`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullsLast<P>(P);

impl<T, P: OrderingPolicy<T>> OrderingPolicy<Option<T>> for NullsFirst<P> {
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.0.compare(a, b),
        }
    }
}

impl<T, P: OrderingPolicy<T>> OrderingPolicy<Option<T>> for NullsLast<P> {
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => self.0.compare(a, b),
        }
    }
}

/// Lift `policy` over `Option<T>`, absent values first.
pub fn nulls_first<P>(policy: P) -> NullsFirst<P> {
    NullsFirst(policy)
}

/// Lift `policy` over `Option<T>`, absent values last.
pub fn nulls_last<P>(policy: P) -> NullsLast<P> {
    NullsLast(policy)
}
