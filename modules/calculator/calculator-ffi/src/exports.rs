#![allow(unsafe_code)]

use std::borrow::Cow;
use std::ffi::{CStr, c_char, c_int};

use calculator::{CalculatorApi, Service};

use crate::diagnostics::ensure_sink;
use crate::status;

static SERVICE: Service = Service;

/// Host load notification.
///
/// A null `param` is treated as the empty string; invalid UTF-8 is replaced
/// lossily.
///
/// # Safety
///
/// `param` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[unsafe(export_name = "Load")]
pub unsafe extern "C" fn load(param: *const c_char) {
    ensure_sink();

    let param = if param.is_null() {
        Cow::Borrowed("")
    } else {
        // SAFETY: non-null and NUL-terminated per the function contract.
        unsafe { CStr::from_ptr(param) }.to_string_lossy()
    };

    SERVICE.load(&param);
}

#[must_use]
#[unsafe(export_name = "Add")]
pub extern "C" fn add(a: c_int, b: c_int) -> c_int {
    SERVICE.add(a, b)
}

/// Returns `b - a`.
#[must_use]
#[unsafe(export_name = "Subtract")]
pub extern "C" fn subtract(a: c_int, b: c_int) -> c_int {
    SERVICE.subtract(a, b)
}

#[must_use]
#[unsafe(export_name = "Multiply")]
pub extern "C" fn multiply(a: c_int, b: c_int) -> c_int {
    SERVICE.multiply(a, b)
}

/// Returns `a / b`, or `0` on failure with the status left for [`last_error`].
#[must_use]
#[unsafe(export_name = "Divide")]
pub extern "C" fn divide(a: c_int, b: c_int) -> c_int {
    status::record(SERVICE.divide(a, b))
}

/// Status of the last `Divide` on the calling thread.
///
/// `0` success, `1` division by zero, `2` overflow.
#[must_use]
#[unsafe(export_name = "CalculatorLastError")]
pub extern "C" fn last_error() -> c_int {
    status::current()
}
