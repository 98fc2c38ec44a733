//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_configuration_display() {
    let err = Error::InvalidConfiguration("near plane must be positive".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid configuration"));
    assert!(display.contains("near plane must be positive"));
}

#[test]
fn test_missing_dependency_display() {
    let err = Error::MissingDependency("mesh 'cube' not found".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Missing dependency: mesh 'cube' not found");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("index out of range".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid resource"));
    assert!(display.contains("index out of range"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Window creation failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Window creation failed"));
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("device lost".to_string());
    assert_eq!(format!("{}", err), "Backend error: device lost");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::BackendError("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::InvalidConfiguration("fov".to_string()));
    assert!(debug.contains("InvalidConfiguration"));

    let debug = format!("{:?}", Error::MissingDependency("mat".to_string()));
    assert!(debug.contains("MissingDependency"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::InvalidResource("test".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::InvalidResource("other".to_string()));
}

// ============================================================================
// RESULT ALIAS
// ============================================================================

#[test]
fn test_result_propagation() {
    fn inner() -> Result<u32> {
        Err(Error::InvalidConfiguration("bad".to_string()))
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert!(matches!(outer(), Err(Error::InvalidConfiguration(_))));
}
