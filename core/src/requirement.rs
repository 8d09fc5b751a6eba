//! Batch-of-assertions helpers for writing contract rules.
//!
//! A rule is a message paired with a boolean predicate. Requirements in one batch are
//! evaluated in order and the first false one becomes the [`Rejection`].

use crate::error::{Rejection, Result};

/// Evaluates `message => condition` pairs in order.
///
/// Expands to a `Result<(), Rejection>` holding the first failed message. Messages are
/// only built when their condition fails, so `format!` arguments are free on success.
///
/// # Example
///
/// ```
/// use ticket_ledger_core::require_that;
///
/// let capacity = 0;
/// let result = require_that! {
///     "Capacity must be greater than zero." => capacity > 0,
///     format!("Capacity {capacity} is too large.") => capacity < 1_000,
/// };
/// assert_eq!(
///     result.unwrap_err().message(),
///     "Capacity must be greater than zero."
/// );
/// ```
#[macro_export]
macro_rules! require_that {
    ($($message:expr => $condition:expr),+ $(,)?) => {
        'requirements: {
            $(
                if !($condition) {
                    break 'requirements ::std::result::Result::Err(
                        $crate::error::Rejection::requirement($message),
                    );
                }
            )+
            ::std::result::Result::<(), $crate::error::Rejection>::Ok(())
        }
    };
}

/// Requires that `items` holds exactly one element and returns it.
///
/// # Errors
///
/// Returns a [`Rejection::Requirement`] with `message` for any other count.
pub fn require_single<'a, T: ?Sized>(message: &str, items: &[&'a T]) -> Result<&'a T> {
    match items {
        [item] => Ok(*item),
        _ => Err(Rejection::requirement(message)),
    }
}

/// Requires that `items` is empty.
///
/// # Errors
///
/// Returns a [`Rejection::Requirement`] with `message` if anything is present.
pub fn require_none<T>(message: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        Ok(())
    } else {
        Err(Rejection::requirement(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_require_that_reports_first_failure() {
        let result = require_that! {
            "first" => true,
            "second" => false,
            "third" => false,
        };
        assert_eq!(result, Err(Rejection::requirement("second")));
    }

    #[test]
    fn test_require_that_passes() {
        let value = 3;
        let result = require_that! {
            "positive" => value > 0,
            format!("{value} is odd") => value % 2 == 1,
        };
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_require_single() {
        let one = 1;
        let two = 2;
        assert_eq!(require_single("one", &[&one]), Ok(&1));
        assert_eq!(
            require_single("one", &[&one, &two]),
            Err(Rejection::requirement("one"))
        );
        assert_eq!(
            require_single::<i32>("one", &[]),
            Err(Rejection::requirement("one"))
        );
    }

    #[test]
    fn test_require_none() {
        assert_eq!(require_none::<u8>("none", &[]), Ok(()));
        assert_eq!(require_none("none", &[1]), Err(Rejection::requirement("none")));
    }

    proptest! {
        #[test]
        fn prop_require_single_accepts_exactly_one(items in proptest::collection::vec(any::<u8>(), 0..4)) {
            let refs: Vec<&u8> = items.iter().collect();
            prop_assert_eq!(require_single("one", &refs).is_ok(), items.len() == 1);
            prop_assert_eq!(require_none("none", &items).is_ok(), items.is_empty());
        }
    }
}
