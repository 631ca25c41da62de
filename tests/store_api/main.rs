//! Store API Test Suite
//!
//! Exercises both stores through their public API.
//!
//! ## Modules
//!
//! - `basic_ops`: CRUD semantics and the per-key state machine
//! - `dynamic_keys`: Value-keyed store, comparability rejection
//! - `concurrency`: Multi-threaded creates, reads, updates, deletes
//! - `properties`: Model-based property tests against a sequential HashMap
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test store_api
//! cargo test --test store_api concurrency::
//! ```

use std::collections::HashMap;
use std::sync::Once;

use memkv::prelude::*;

pub mod concurrency;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

static TRACING: Once = Once::new();

/// Route store tracing output through the test harness
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Create a typed string store for testing
pub fn create_store() -> RwLockStore<String, String> {
    init_tracing();
    StoreOptions::new().name("test").open()
}

/// Create a dynamic store for testing
pub fn create_dynamic_store() -> DynamicStore {
    init_tracing();
    StoreOptions::new().name("test-dynamic").open_dynamic()
}

/// Standard keys that ARE usable as dynamic keys
pub fn comparable_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("null", Value::Null),
        ("bool", Value::Bool(true)),
        ("int", Value::Int(42)),
        ("int_neg", Value::Int(-42)),
        ("float", Value::Float(3.5)),
        ("float_inf", Value::Float(f64::INFINITY)),
        ("string", Value::String("exp_key".into())),
        ("string_empty", Value::String("".into())),
        ("bytes", Value::Bytes(vec![0x00, 0xFF])),
        (
            "array",
            Value::Array(vec![Value::Int(1), Value::String("two".into())]),
        ),
        ("array_empty", Value::Array(vec![])),
    ]
}

/// Standard keys that are NOT usable as dynamic keys
pub fn non_comparable_keys() -> Vec<(&'static str, Value)> {
    let mut object = HashMap::new();
    object.insert("nested".to_string(), Value::Int(123));

    vec![
        ("object_empty", Value::Object(HashMap::new())),
        ("object", Value::Object(object.clone())),
        ("nan", Value::Float(f64::NAN)),
        (
            "array_with_object",
            Value::Array(vec![Value::Int(1), Value::Object(object)]),
        ),
        (
            "nested_array_with_nan",
            Value::Array(vec![Value::Array(vec![Value::Float(f64::NAN)])]),
        ),
    ]
}
