//! Logging helpers for MEI export

/// Log a message for MEI export
pub fn log_mei(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&format!("[MEI] {}", message).into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("[MEI] {}", message);
    }
}

/// Logging macro for MEI export
#[macro_export]
macro_rules! mei_log {
    ($($arg:tt)*) => {
        $crate::renderers::mei::helpers::log_mei(&format!($($arg)*));
    };
}
