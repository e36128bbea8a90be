use std::{cell::RefCell, ffi::CString, os::raw::c_char};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Name of the function that failed.
    pub function: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, function: CString) -> Self {
        LastErrorData {
            error_msg,
            function,
        }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

/// Set last error information.
///
/// `error_msg` and `function` are turned into CStrings from bytes, bytes must not include any
/// nulls.
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T, function: T) {
    let msg = CString::new(error_msg)
        .unwrap_or_else(|_| CString::new("Failed to create error message string!").unwrap());
    let function = CString::new(function)
        .unwrap_or_else(|_| CString::new("Failed to create function name string!").unwrap());

    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = Some(LastErrorData::new(msg, function));
    });
}

/// Clear the last error.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_result| {
        *last_result.borrow_mut() = None;
    });
}

/// Pointer to the last error message, null if no error is set. The pointer stays valid until the
/// next error is set or cleared on the same thread.
pub fn last_error_msg_ptr() -> *const c_char {
    LAST_ERROR.with(|last_result| {
        last_result
            .borrow()
            .as_ref()
            .map_or(std::ptr::null(), |e| e.error_msg.as_ptr())
    })
}

/// Pointer to the name of the function that set the last error, null if no error is set.
pub fn last_error_function_ptr() -> *const c_char {
    LAST_ERROR.with(|last_result| {
        last_result
            .borrow()
            .as_ref()
            .map_or(std::ptr::null(), |e| e.function.as_ptr())
    })
}
