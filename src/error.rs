//! Error types and the glue that keeps failures on the native side of the
//! boundary.

use std::panic::{catch_unwind, AssertUnwindSafe};

use jni::JNIEnv;
use log::error;

/// Result type alias for native method bodies.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while servicing a native method call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error raised by the JNI layer
    #[error("JNI error: {0}")]
    Jni(#[from] jni::errors::Error),

    /// The method body panicked
    #[error("native method panicked")]
    Panic,
}

/// Runs a native method body, keeping any failure out of the managed caller's
/// way.
///
/// Unwinding across `extern "system"` is undefined behavior, so the body runs
/// under `catch_unwind`. On an error or a panic, a `java.lang.RuntimeException`
/// is thrown unless the thread already has an exception pending (as it does
/// when the body failed with [`jni::errors::Error::JavaException`]), and
/// `error_value` is returned for the JVM to discard.
pub fn catch_and_throw<'local, T, F>(env: &mut JNIEnv<'local>, error_value: T, f: F) -> T
where
    F: FnOnce(&mut JNIEnv<'local>) -> Result<T>,
{
    let result = match catch_unwind(AssertUnwindSafe(|| f(&mut *env))) {
        Ok(result) => result,
        Err(_panic) => Err(Error::Panic),
    };

    match result {
        Ok(value) => value,
        Err(err) => {
            match env.exception_check() {
                Ok(true) => {}
                Ok(false) => {
                    if let Err(e) = env.throw_new("java/lang/RuntimeException", err.to_string()) {
                        error!("error throwing java exception: {:#?}", e);
                    }
                }
                Err(e) => error!("error checking for a pending exception: {:#?}", e),
            }
            error_value
        }
    }
}
