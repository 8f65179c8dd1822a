//! The greeting handed back to managed callers.

use jni::objects::JString;
use jni::JNIEnv;

use crate::error::Result;

/// The exact string every call returns.
pub const GREETING: &str = "Hello from JNI!";

/// Builds the Java string returned over the boundary.
///
/// Allocates one new local reference in the caller's frame. The contents
/// never vary between calls.
pub fn new_greeting<'local>(env: &mut JNIEnv<'local>) -> Result<JString<'local>> {
    Ok(env.new_string(GREETING)?)
}
