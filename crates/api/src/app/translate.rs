//! Response translator: maps every declared use-case failure to a category.
//!
//! One exhaustive `match` per error enum, with no wildcard arm, so adding a
//! variant without choosing its category does not compile. Conflicts are
//! declared failures that are neither client input errors nor absences; they
//! map to the generic failure category with their precise code.

use hireboard_core::DomainFailure;
use hireboard_offers::{CreateOfferError, DeleteOfferError, GetOfferError};
use hireboard_users::{CreateRoleError, CreateUserError, DeleteRoleError, GetUserError};

use super::response::{ApiResponse, ResponseCategory};

pub trait TranslateFailure: DomainFailure {
    fn category(&self) -> ResponseCategory;

    fn to_response(&self) -> ApiResponse {
        ApiResponse::failure(self.category(), self.code(), self.message(), self.payload())
    }
}

impl TranslateFailure for CreateUserError {
    fn category(&self) -> ResponseCategory {
        match self {
            CreateUserError::Validation(_) => ResponseCategory::ClientError,
            CreateUserError::EmailAlreadyExists { .. } => ResponseCategory::GenericFailure,
            CreateUserError::UsernameTaken { .. } => ResponseCategory::GenericFailure,
        }
    }
}

impl TranslateFailure for GetUserError {
    fn category(&self) -> ResponseCategory {
        match self {
            GetUserError::Validation(_) => ResponseCategory::ClientError,
            GetUserError::UserNotFound { .. } => ResponseCategory::NotFound,
        }
    }
}

impl TranslateFailure for CreateRoleError {
    fn category(&self) -> ResponseCategory {
        match self {
            CreateRoleError::Validation(_) => ResponseCategory::ClientError,
            CreateRoleError::RoleAlreadyExists { .. } => ResponseCategory::GenericFailure,
        }
    }
}

impl TranslateFailure for DeleteRoleError {
    fn category(&self) -> ResponseCategory {
        match self {
            DeleteRoleError::Validation(_) => ResponseCategory::ClientError,
            DeleteRoleError::RoleNotFound { .. } => ResponseCategory::NotFound,
        }
    }
}

impl TranslateFailure for CreateOfferError {
    fn category(&self) -> ResponseCategory {
        match self {
            CreateOfferError::Validation(_) => ResponseCategory::ClientError,
        }
    }
}

impl TranslateFailure for GetOfferError {
    fn category(&self) -> ResponseCategory {
        match self {
            GetOfferError::Validation(_) => ResponseCategory::ClientError,
            GetOfferError::OfferNotFound { .. } => ResponseCategory::NotFound,
        }
    }
}

impl TranslateFailure for DeleteOfferError {
    fn category(&self) -> ResponseCategory {
        match self {
            DeleteOfferError::Validation(_) => ResponseCategory::ClientError,
            DeleteOfferError::OfferNotFound { .. } => ResponseCategory::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireboard_core::ValidationError;
    use serde_json::json;

    fn invalid() -> ValidationError {
        ValidationError::new("email.invalidFormat", "email has an invalid format")
    }

    fn assert_category<E: TranslateFailure>(err: E, expected: ResponseCategory, code: &str) {
        let reply = err.to_response();
        assert_eq!(reply.category(), expected, "{err:?}");
        assert_eq!(reply.body().unwrap()["error"], code);
        assert_eq!(reply.body().unwrap()["message"], err.to_string());
    }

    #[test]
    fn user_failures_have_pre_specified_categories() {
        use ResponseCategory::*;

        assert_category(CreateUserError::Validation(invalid()), ClientError, "email.invalidFormat");
        assert_category(
            CreateUserError::EmailAlreadyExists { email: "bob@bob.com".into() },
            GenericFailure,
            "EmailAlreadyExistsError",
        );
        assert_category(
            CreateUserError::UsernameTaken { username: "bob".into() },
            GenericFailure,
            "UsernameTakenError",
        );
        assert_category(GetUserError::Validation(invalid()), ClientError, "email.invalidFormat");
        assert_category(
            GetUserError::UserNotFound { user_id: "u".into() },
            NotFound,
            "UserNotFoundError",
        );
    }

    #[test]
    fn role_failures_have_pre_specified_categories() {
        use ResponseCategory::*;

        assert_category(CreateRoleError::Validation(invalid()), ClientError, "email.invalidFormat");
        assert_category(
            CreateRoleError::RoleAlreadyExists { name: "admin".into() },
            GenericFailure,
            "RoleAlreadyExistsError",
        );
        assert_category(DeleteRoleError::Validation(invalid()), ClientError, "email.invalidFormat");
        assert_category(
            DeleteRoleError::RoleNotFound { role_id: "r".into() },
            NotFound,
            "RoleNotFoundError",
        );
    }

    #[test]
    fn offer_failures_have_pre_specified_categories() {
        use ResponseCategory::*;

        assert_category(CreateOfferError::Validation(invalid()), ClientError, "email.invalidFormat");
        assert_category(GetOfferError::Validation(invalid()), ClientError, "email.invalidFormat");
        assert_category(
            GetOfferError::OfferNotFound { offer_id: "o".into() },
            NotFound,
            "OfferNotFoundError",
        );
        assert_category(DeleteOfferError::Validation(invalid()), ClientError, "email.invalidFormat");
        assert_category(
            DeleteOfferError::OfferNotFound { offer_id: "o".into() },
            NotFound,
            "OfferNotFoundError",
        );
    }

    #[test]
    fn conflict_payload_is_exposed_as_details() {
        let reply = CreateUserError::UsernameTaken { username: "bob".into() }.to_response();
        assert_eq!(reply.body().unwrap()["details"], json!({ "username": "bob" }));
    }
}
