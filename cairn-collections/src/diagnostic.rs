//! Self-verification helpers.
//!
//! [`verify!`](crate::verify) is a release-mode assertion for scenario
//! checks: a failed condition prints its source location and terminates the
//! process with status 1 instead of unwinding. [`fatal`] is the same exit
//! path for conditions that have no recovery.

use std::process;

/// Exit status used for every fatal termination.
pub const FAILURE_STATUS: i32 = 1;

/// Prints `message` to stderr and terminates the process with status 1.
#[cold]
pub fn fatal(message: &str) -> ! {
    tracing::error!(reason = message, "fatal condition");
    eprintln!("🔥 {message}");
    process::exit(FAILURE_STATUS)
}

/// Reports a failed verification and terminates the process with status 1.
///
/// Not meant to be called directly; use [`verify!`](crate::verify).
#[doc(hidden)]
#[cold]
pub fn verification_failed(file: &str, line: u32, condition: &str, message: &str) -> ! {
    tracing::error!(
        file,
        line,
        condition,
        detail = message,
        "verification failed"
    );
    eprintln!("{file}:{line}: assertion {condition} failed: {message}");
    process::exit(FAILURE_STATUS)
}

/// Terminates the process with a diagnostic if `condition` is false.
///
/// The diagnostic names the file, line and source text of the condition.
///
/// ```
/// use cairn_collections::{Array, verify};
///
/// let mut items = Array::with_capacity(2);
/// items.append(5);
/// verify!(items.get(0) == Ok(5), "first element");
/// ```
#[macro_export]
macro_rules! verify {
    ($condition:expr, $message:expr $(,)?) => {
        if !$condition {
            $crate::diagnostic::verification_failed(
                file!(),
                line!(),
                stringify!($condition),
                $message,
            );
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn passing_verification_returns() {
        let values = [1, 2, 3];
        verify!(values.len() == 3, "length");
        verify!(values.contains(&2), "membership",);
    }
}
