use alloc::vec::Vec;

use crate::SetError;

// -----------------------------------------------------------------------------
// DiagnosticSink

/// Receives the reason a robust assignment failed.
///
/// [`set_robust`](crate::set_robust) reports through [`LogSink`]; the
/// `_with` variants take any sink.
///
/// ```
/// use kit_convert::{SetError, set_robust_with};
///
/// let mut errors: Vec<SetError> = Vec::new();
/// let mut dst: Vec<i32> = Vec::new();
///
/// assert!(!set_robust_with(&mut dst, &String::from("[1, oops]"), &mut errors));
/// assert!(matches!(errors[0], SetError::Json { .. }));
/// ```
pub trait DiagnosticSink {
    fn report(&mut self, error: SetError);
}

/// Forwards diagnostics to the `log` facade.
///
/// Structural failures are logged at `warn`, value mismatches at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, error: SetError) {
        if error.is_structural() {
            log::warn!("kit::set_robust: {error}");
        } else {
            log::debug!("kit::set_robust: {error}");
        }
    }
}

impl DiagnosticSink for Vec<SetError> {
    #[inline]
    fn report(&mut self, error: SetError) {
        self.push(error);
    }
}

/// Adapts a closure into a [`DiagnosticSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(&SetError)> DiagnosticSink for FnSink<F> {
    #[inline]
    fn report(&mut self, error: SetError) {
        (self.0)(&error);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    #[inline]
    fn report(&mut self, error: SetError) {
        (**self).report(error);
    }
}

// -----------------------------------------------------------------------------
// Tests
