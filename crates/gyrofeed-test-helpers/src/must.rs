//! Unwrap helpers for tests.
//!
//! `must` is `#[track_caller]`, so a failure points at the test line
//! rather than at this module.

use std::fmt::Debug;

/// Unwrap a `Result`, panicking with the error on failure.
///
/// ```rust
/// use gyrofeed_test_helpers::must;
///
/// let port: u16 = must("16384".parse());
/// assert_eq!(port, 16384);
/// ```
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_ok() {
        assert_eq!(must(Ok::<i32, &str>(7)), 7);
    }

    #[test]
    #[should_panic(expected = "must: unexpected Err")]
    fn test_must_err_panics() {
        let _ = must(Err::<i32, &str>("boom"));
    }
}
