// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 NoteIn

//! Ownership enforcement for stored resources.
//!
//! Every note access is scoped to the authenticated principal. A failed
//! ownership check surfaces as `NotFound` rather than a permission error,
//! so a caller cannot probe whether someone else's note id exists.

use super::{StorageError, StorageResult};

/// Trait for resources that have an owner.
pub trait OwnedResource {
    /// Get the owner's user ID.
    fn owner_user_id(&self) -> &str;

    /// Human-readable resource kind, used in error messages.
    fn resource_kind() -> &'static str;
}

/// Extension trait that collapses "missing" and "owned by someone else"
/// into the same `NotFound` result.
pub trait OwnershipCheck<T> {
    /// Return the resource only if `user_id` owns it.
    fn owned_by(self, user_id: &str) -> StorageResult<T>;
}

impl<T: OwnedResource> OwnershipCheck<T> for StorageResult<T> {
    fn owned_by(self, user_id: &str) -> StorageResult<T> {
        match self {
            Ok(resource) if resource.owner_user_id() == user_id => Ok(resource),
            Ok(_) => Err(StorageError::NotFound(T::resource_kind().to_string())),
            Err(StorageError::NotFound(_)) => {
                Err(StorageError::NotFound(T::resource_kind().to_string()))
            }
            Err(other) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestResource {
        owner: String,
    }

    impl OwnedResource for TestResource {
        fn owner_user_id(&self) -> &str {
            &self.owner
        }

        fn resource_kind() -> &'static str {
            "Note"
        }
    }

    #[test]
    fn owned_by_passes_for_owner() {
        let result: StorageResult<TestResource> = Ok(TestResource {
            owner: "user_123".to_string(),
        });
        assert!(result.owned_by("user_123").is_ok());
    }

    #[test]
    fn owned_by_reports_not_found_for_non_owner() {
        let result: StorageResult<TestResource> = Ok(TestResource {
            owner: "user_123".to_string(),
        });
        let err = result.owned_by("user_456").unwrap_err();
        assert!(matches!(err, StorageError::NotFound(kind) if kind == "Note"));
    }

    #[test]
    fn missing_and_foreign_resources_are_indistinguishable() {
        let missing: StorageResult<TestResource> =
            Err(StorageError::NotFound("n-42".to_string()));
        let missing_err = missing.owned_by("user_456").unwrap_err();

        let foreign: StorageResult<TestResource> = Ok(TestResource {
            owner: "user_123".to_string(),
        });
        let foreign_err = foreign.owned_by("user_456").unwrap_err();

        assert_eq!(missing_err.to_string(), foreign_err.to_string());
    }

    #[test]
    fn owned_by_propagates_other_errors() {
        let result: StorageResult<TestResource> = Err(StorageError::NotInitialized);
        assert!(matches!(
            result.owned_by("user_123"),
            Err(StorageError::NotInitialized)
        ));
    }
}
