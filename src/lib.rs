//! Native side of the `jni_runtime_deps.NativeGreeter` class.
//!
//! The JVM binds [`Java_jni_1runtime_1deps_NativeGreeter_greet`] by symbol
//! name once the library has been loaded with
//! `System.loadLibrary("native_greeter")`, or explicitly through
//! `JNIEnv::register_native_methods`. Either way, every call returns the
//! same greeting.

use jni::objects::JObject;
use jni::sys::jstring;
use jni::JNIEnv;

pub mod error;
pub mod greeting;

pub use error::{Error, Result};
pub use greeting::GREETING;

/// Implementation of `jni_runtime_deps.NativeGreeter#greet`.
///
/// Returns a new Java string containing [`GREETING`]. The receiver is unused;
/// the method carries no state.
///
/// A failure to allocate the string leaves a `java.lang.RuntimeException`
/// pending and returns a null pointer, which the JVM discards when it
/// propagates the exception.
#[no_mangle]
pub extern "system" fn Java_jni_1runtime_1deps_NativeGreeter_greet(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    error::catch_and_throw(&mut env, std::ptr::null_mut(), |env| {
        Ok(greeting::new_greeting(env)?.into_raw())
    })
}
