// Unit tests for error mapping - pure domain logic, no storage or transport
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds_to_codes() {
    let cases = [
        (ValidationKind::OutOfTurn, ErrorCode::OutOfTurn),
        (ValidationKind::NotHost, ErrorCode::NotHost),
        (ValidationKind::IllegalTile, ErrorCode::IllegalTile),
        (ValidationKind::MustPlay, ErrorCode::MustPlay),
        (
            ValidationKind::Other("anything".into()),
            ErrorCode::ValidationError,
        ),
    ];
    for (kind, expected) in cases {
        let app: AppError = DomainError::validation(kind, "nope").into();
        assert_eq!(app.code(), expected);
        assert_eq!(app.detail(), "nope");
    }
}

#[test]
fn maps_game_full_conflict() {
    let app: AppError = DomainError::conflict(ConflictKind::GameFull, "full").into();
    assert_eq!(app.code().as_str(), "GAME_FULL");
    assert!(app.is_game_full());
    assert!(!app.is_not_found());

    let taken: AppError = DomainError::conflict(ConflictKind::GameIdTaken, "taken").into();
    assert_eq!(taken.code().as_str(), "GAME_ID_TAKEN");
    assert!(!taken.is_game_full());

    let other: AppError =
        DomainError::conflict(ConflictKind::Other("x".to_string()), "generic").into();
    assert_eq!(other.code(), ErrorCode::Conflict);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert!(app.is_not_found());
}

#[test]
fn display_includes_detail() {
    let app = AppError::config("DOMINO_GAME_ID_LEN must be a number");
    assert_eq!(
        app.to_string(),
        "Configuration error: DOMINO_GAME_ID_LEN must be a number"
    );
}
