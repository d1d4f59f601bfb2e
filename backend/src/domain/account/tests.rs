//! Tests for the account data model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn registration() -> Registration {
    Registration::try_from_parts("test@example.com", "Test User", "password123")
        .expect("valid registration")
}

#[fixture]
fn account(registration: Registration) -> Account {
    Account::register(AccountId::new(VALID_ID).expect("valid id"), registration)
}

#[rstest]
#[case("", AccountValidationError::EmptyId)]
#[case("not-a-uuid", AccountValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", AccountValidationError::InvalidId)]
fn account_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: AccountValidationError) {
    assert_eq!(AccountId::new(raw), Err(expected));
}

#[rstest]
fn account_id_round_trips_through_strings() {
    let id = AccountId::new(VALID_ID).expect("valid id");
    assert_eq!(id.as_ref(), VALID_ID);
    assert_eq!(id.to_string(), VALID_ID);
    assert_eq!(String::from(id.clone()), VALID_ID);
    assert_eq!(AccountId::from_uuid(*id.as_uuid()), id);
}

#[rstest]
#[case("", AccountValidationError::EmptyEmail)]
#[case("   ", AccountValidationError::EmptyEmail)]
#[case("plainaddress", AccountValidationError::InvalidEmail)]
#[case("@example.com", AccountValidationError::InvalidEmail)]
#[case("user@", AccountValidationError::InvalidEmail)]
#[case(" user@example.com", AccountValidationError::InvalidEmail)]
#[case("us er@example.com", AccountValidationError::InvalidEmail)]
fn email_rejects_malformed_input(#[case] raw: &str, #[case] expected: AccountValidationError) {
    assert_eq!(Email::new(raw), Err(expected));
}

#[rstest]
fn email_preserves_case() {
    let email = Email::new("Test@Example.com").expect("valid email");
    assert_eq!(email.as_ref(), "Test@Example.com");
    assert_ne!(email, Email::new("test@example.com").expect("valid email"));
}

#[rstest]
fn display_name_allows_free_text() {
    let name = DisplayName::new("Zoë O'Brien-Smith (2019)").expect("free text is allowed");
    assert_eq!(name.as_ref(), "Zoë O'Brien-Smith (2019)");
}

#[rstest]
fn avatar_requires_absolute_url() {
    assert_eq!(
        AvatarReference::new("/relative.png"),
        Err(AccountValidationError::InvalidAvatar)
    );
    assert!(AvatarReference::new("https://example.com/me.png").is_ok());
}

#[rstest]
fn register_builds_empty_profile(account: Account) {
    assert_eq!(account.id().as_ref(), VALID_ID);
    assert_eq!(account.email().as_ref(), "test@example.com");
    assert_eq!(account.display_name().as_ref(), "Test User");
    assert!(account.avatar().is_placeholder());
    assert_eq!(account.profile().contact_email, "test@example.com");
    assert!(account.profile().skills.is_empty());
}

#[rstest]
#[case("password123", true)]
#[case("Password123", false)]
#[case("password123 ", false)]
fn credential_comparison_is_exact(account: Account, #[case] raw: &str, #[case] ok: bool) {
    let candidate = Credential::new(raw).expect("credential");
    assert_eq!(account.credential_matches(&candidate), ok);
}

#[rstest]
fn profile_update_replaces_mutable_fields_only(account: Account) {
    let mut updated = account.clone();
    let mut profile = Profile::default();
    profile.bio = "Hello".to_owned();
    let update = ProfileUpdate::try_from_parts(
        "Renamed",
        Some("https://example.com/new.png"),
        profile.clone(),
    )
    .expect("valid update");

    updated.apply_profile_update(update);

    assert_eq!(updated.id(), account.id());
    assert_eq!(updated.email(), account.email());
    assert_eq!(updated.display_name().as_ref(), "Renamed");
    assert_eq!(updated.avatar().as_ref(), "https://example.com/new.png");
    assert_eq!(updated.profile(), &profile);
    let original = Credential::new("password123").expect("credential");
    assert!(updated.credential_matches(&original));
}

#[rstest]
#[case("test", true)]
#[case("EXAMPLE.COM", true)]
#[case("user", true)]
#[case("nobody", false)]
fn search_matches_name_or_email(account: Account, #[case] query: &str, #[case] hit: bool) {
    assert_eq!(account.matches_search(&query.to_lowercase()), hit);
}

#[rstest]
fn serialisation_omits_credential(account: Account) {
    let value = serde_json::to_value(&account).expect("account serialises");
    assert_eq!(value["email"], json!("test@example.com"));
    assert_eq!(value["displayName"], json!("Test User"));
    assert!(value.get("credential").is_none());
    assert!(!value.to_string().contains("password123"));
}

#[rstest]
fn debug_output_redacts_credential(account: Account) {
    assert!(!format!("{account:?}").contains("password123"));
}
