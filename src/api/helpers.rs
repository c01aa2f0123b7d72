//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for serialization,
//! deserialization, error handling, and logging across all API operations.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RenderError;
use crate::models::Identifier;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&format!("[WASM] {}", msg).into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        println!("[WASM] {}", msg);
    }
}

pub fn log_info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::info_1(&format!("[WASM] {}", msg).into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        println!("[WASM] {}", msg);
    }
}

pub fn log_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&format!("[WASM] ⚠️ {}", msg).into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[WASM] ⚠️ {}", msg);
    }
}

pub fn log_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::error_1(&format!("[WASM] ❌ {}", msg).into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[WASM] ❌ {}", msg);
    }
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Largest integer a JS number represents exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Build an identifier from a JS string or non-negative integral number
pub fn identifier_from_js(id: &JsValue) -> Result<Identifier, RenderError> {
    if let Some(s) = id.as_string() {
        return Identifier::new(s);
    }

    match id.as_f64() {
        Some(n) if n.fract() == 0.0 && (0.0..=MAX_SAFE_INTEGER).contains(&n) => {
            Ok(Identifier::from(n as u64))
        }
        _ => Err(RenderError::InvalidIdentifier(format!("{:?}", id))),
    }
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a render error to a JsValue
pub fn render_error(err: RenderError) -> JsValue {
    let msg = err.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}
