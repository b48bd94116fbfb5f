//! Left fold over a sequence with an optional seed
//!
//! [`reduce`] differs from [`Iterator::fold`] in one place: a sequence of
//! fewer than two elements is returned as-is (`None` or the sole element)
//! without calling `combine`, even when a seed is supplied.
//!
//! ```
//! use todolist_core::fold::reduce;
//!
//! assert_eq!(reduce([1, 2, 3, 4, 5], Some(10), |acc, n| acc + n), Some(25));
//! assert_eq!(reduce([7], Some(10), |acc, n| acc + n), Some(7));
//! ```

use std::convert::Infallible;

/// Folds `sequence` into a single value
///
/// With a seed, the accumulator starts at `initial` and every element is
/// combined into it. Without one, the first element is the accumulator and
/// combining starts at the second.
#[must_use]
pub fn reduce<I, F>(sequence: I, initial: Option<I::Item>, mut combine: F) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let folded: Result<_, Infallible> =
        try_reduce(sequence, initial, |acc, element| Ok(combine(acc, element)));
    match folded {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Folds `sequence` with a fallible `combine`
///
/// Same rules as [`reduce`]. The first error returned by `combine` stops the
/// fold and is handed back unchanged.
///
/// # Errors
///
/// Returns whatever error `combine` returns.
///
/// # Example
///
/// ```
/// use todolist_core::fold::try_reduce;
///
/// let sum = try_reduce([u8::MAX, 1], None, |acc, n| acc.checked_add(n).ok_or("overflow"));
/// assert_eq!(sum, Err("overflow"));
/// ```
#[must_use]
pub fn try_reduce<I, F, E>(
    sequence: I,
    initial: Option<I::Item>,
    mut combine: F,
) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    F: FnMut(I::Item, I::Item) -> Result<I::Item, E>,
{
    let mut elements = sequence.into_iter();
    if elements.len() < 2 {
        return Ok(elements.next());
    }

    let Some(mut accumulator) = initial.or_else(|| elements.next()) else {
        return Ok(None);
    };

    for element in elements {
        accumulator = combine(accumulator, element)?;
    }

    Ok(Some(accumulator))
}
