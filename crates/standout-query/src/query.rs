//! Query pipeline: stage filters and a projection, then execute.
//!
//! A [`Query`] borrows a source slice and collects:
//!
//! - any number of **filters** (the `where` stage), applied in registration
//!   order with cumulative AND semantics
//! - at most one **projection** (the `select` stage); registering another
//!   one replaces it
//!
//! Nothing runs until [`Query::execute`] (or [`Query::iter`]). Execution is
//! a single left-to-right pass over the source: for each record the filters
//! run first, then the projection. Filtering always precedes projection,
//! whatever order the builder calls were made in.

use std::fmt;
use std::slice;

use crate::error::Result;

type Predicate<'a, T> = Box<dyn Fn(&'a T) -> Result<bool> + 'a>;
type Projection<'a, T, R> = Box<dyn Fn(&'a T) -> Result<R> + 'a>;

/// A staged filter/projection pipeline over a borrowed slice.
///
/// `R` is the output element type. Until [`select`](Query::select) is
/// called it is `&'a T`, a view of the source records.
///
/// # Example
///
/// ```
/// use standout_query::{gt, Query};
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let users = vec![
///     User { name: "Alice".into(), age: 25 },
///     User { name: "Bob".into(), age: 30 },
/// ];
///
/// let names = Query::new(&users)
///     .filter(|u| gt(&u.age, &25))
///     .select(|u| u.name.clone())
///     .execute()
///     .unwrap();
///
/// assert_eq!(names, vec!["Bob".to_string()]);
/// ```
pub struct Query<'a, T, R = &'a T> {
    source: &'a [T],
    predicates: Vec<Predicate<'a, T>>,
    projection: Projection<'a, T, R>,
    has_projection: bool,
}

impl<'a, T> Query<'a, T> {
    /// Creates a query over `source` with no filters and no projection.
    ///
    /// Executing it returns every record, in source order.
    pub fn new(source: &'a [T]) -> Self {
        Query {
            source,
            predicates: Vec::new(),
            projection: Box::new(|item: &'a T| Ok(item)),
            has_projection: false,
        }
    }
}

impl<'a, T, R> Query<'a, T, R> {
    // ========================================================================
    // Filtering
    // ========================================================================

    /// Adds a filter.
    ///
    /// Each call narrows the already-filtered view: a record must satisfy
    /// every registered filter, and a filter is never invoked on a record
    /// an earlier filter rejected.
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&'a T) -> bool + 'a,
    {
        self.predicates.push(Box::new(move |item: &'a T| Ok(predicate(item))));
        self
    }

    /// Adds a fallible filter.
    ///
    /// An `Err` aborts execution and is returned unchanged from
    /// [`execute`](Query::execute). The record is not skipped.
    pub fn try_filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&'a T) -> Result<bool> + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Sets the projection, replacing any earlier one.
    ///
    /// The replaced projection is dropped without ever being called.
    pub fn select<S, F>(self, projection: F) -> Query<'a, T, S>
    where
        F: Fn(&'a T) -> S + 'a,
    {
        self.try_select(move |item| Ok(projection(item)))
    }

    /// Sets a fallible projection, replacing any earlier one.
    pub fn try_select<S, F>(self, projection: F) -> Query<'a, T, S>
    where
        F: Fn(&'a T) -> Result<S> + 'a,
    {
        Query {
            source: self.source,
            predicates: self.predicates,
            projection: Box::new(projection),
            has_projection: true,
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the number of records in the source.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Returns the number of registered filters.
    pub fn filter_count(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if a projection has been set.
    pub fn has_projection(&self) -> bool {
        self.has_projection
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests a single record against every filter, in order.
    ///
    /// Stops at the first filter that rejects the record or fails.
    pub fn accepts(&self, item: &'a T) -> Result<bool> {
        for predicate in &self.predicates {
            if !predicate(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns a lazy iterator over the projected results.
    ///
    /// Each step advances through the source until a record passes every
    /// filter, then yields its projection. A failing filter or projection
    /// yields that `Err` in place of the record.
    pub fn iter(&self) -> Rows<'_, 'a, T, R> {
        let source: &'a [T] = self.source;
        Rows {
            items: source.iter(),
            query: self,
        }
    }

    /// Runs the pipeline and collects the results.
    ///
    /// Results keep source order. The first error from a filter or
    /// projection aborts the pass; no partial result is returned.
    ///
    /// Executing the same query again yields the same output.
    pub fn execute(&self) -> Result<Vec<R>> {
        let results = self.iter().collect::<Result<Vec<R>>>()?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            source = self.source_len(),
            filters = self.filter_count(),
            projected = self.has_projection(),
            matched = results.len(),
            "query executed"
        );

        Ok(results)
    }
}

impl<T, R> fmt::Debug for Query<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("source_len", &self.source_len())
            .field("filters", &self.filter_count())
            .field("has_projection", &self.has_projection())
            .finish()
    }
}

impl<'q, 'a, T, R> IntoIterator for &'q Query<'a, T, R> {
    type Item = Result<R>;
    type IntoIter = Rows<'q, 'a, T, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator returned by [`Query::iter`].
pub struct Rows<'q, 'a, T, R> {
    items: slice::Iter<'a, T>,
    query: &'q Query<'a, T, R>,
}

impl<T, R> Iterator for Rows<'_, '_, T, R> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.items.by_ref() {
            match self.query.accepts(item) {
                Ok(true) => return Some((self.query.projection)(item)),
                Ok(false) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.items.len()))
    }
}

/// Builds a query over `source`, lets `configure` stage its filters and
/// projection, and executes it.
///
/// `configure` receives the builder and returns it with any number of
/// [`filter`](Query::filter) and [`select`](Query::select) calls applied.
/// Returning it untouched yields the whole source.
///
/// ```
/// use standout_query::{query, ge};
///
/// let ages = [25, 30, 35];
/// let doubled = query(&ages, |q| q.filter(|a| ge(a, &30)).select(|a| a * 2)).unwrap();
/// assert_eq!(doubled, vec![60, 70]);
/// ```
pub fn query<'a, T, R, F>(source: &'a [T], configure: F) -> Result<Vec<R>>
where
    F: FnOnce(Query<'a, T>) -> Query<'a, T, R>,
{
    configure(Query::new(source)).execute()
}
