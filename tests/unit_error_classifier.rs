use axum::http::StatusCode;
use educa_core::persistence::{constraint_target, VALIDATION_ERROR};
use educa_core::{PersistenceError, classify};

#[test]
fn test_classification_table() {
    let cases = [
        (PersistenceError::with_code("P2002").target("cpf"), 409, "cpf is already in use"),
        (PersistenceError::with_code("P2025"), 400, "Record not found"),
        (PersistenceError::with_code("P2000"), 400, "The field is too long"),
        (PersistenceError::with_name(VALIDATION_ERROR), 400, "The field is missing or invalid"),
        (PersistenceError::with_code("P1001"), 500, "Internal server error"),
        (PersistenceError::with_name("TypeError"), 500, "Internal server error"),
    ];

    for (signal, status, message) in cases {
        let err = classify(&signal);
        assert_eq!(err.status.as_u16(), status, "{signal:?}");
        assert_eq!(err.message(), message, "{signal:?}");
    }
}

#[test]
fn test_error_body_reason_phrases() {
    let conflict = classify(&PersistenceError::with_code("P2002").target("email")).to_body();
    assert_eq!(conflict.error, "Conflict");

    let internal = classify(&PersistenceError::default()).to_body();
    assert_eq!(internal.status, 500);
    assert_eq!(internal.error, "Internal Server Error");
}

#[test]
fn test_sqlx_row_not_found_is_record_not_found() {
    let err: educa_core::AppError = sqlx::Error::RowNotFound.into();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Record not found");
}

#[test]
fn test_constraint_names_map_to_columns() {
    assert_eq!(constraint_target("students_email_key", Some("students")), "email");
    assert_eq!(constraint_target("students_ra_key", Some("students")), "ra");
    assert_eq!(constraint_target("students_cpf_key", None), "cpf");
}
