//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn ada() -> User {
    User::try_from_strings(VALID_ID, "Ada", "ada@example.com").expect("valid user")
}

#[rstest]
#[case("ada@example.com")]
#[case("ada.lovelace@example.co.uk")]
#[case("o'brien+tag@mail-server.example.org")]
#[case("A_B-c@EXAMPLE.IO")]
#[case("x@y.zz")]
#[case("a!b@example.com")]
#[case("x#y@example.com")]
#[case("a/b@example.com")]
#[case("o'@example.com")]
#[case("a$b%c&d*e=f?g^h@example.com")]
#[case("{tag}|`pipe`~@example.com")]
#[case("ada@a-b.example.com")]
fn email_accepts_valid_addresses(#[case] raw: &str) {
    let email = EmailAddress::new(raw).expect("email should be accepted");
    assert_eq!(email.as_ref(), raw);
}

#[rstest]
#[case("not-an-email")]
#[case("ada@")]
#[case("@example.com")]
#[case("ada@example")]
#[case("ada@example.c")]
#[case(".ada@example.com")]
#[case("ada..lovelace@example.com")]
#[case("ada.@example.com")]
#[case("ada@-example.com")]
#[case("a@foo-.com")]
#[case("ada@exa_mple.com")]
#[case("ada@example..com")]
#[case("ada(comment)@example.com")]
#[case("ada lovelace@example.com")]
#[case(" ada@example.com")]
#[case("ada@example.com ")]
fn email_rejects_malformed_addresses(#[case] raw: &str) {
    assert_eq!(EmailAddress::new(raw), Err(UserValidationError::InvalidEmail));
}

#[rstest]
fn email_rejects_empty_input() {
    assert_eq!(EmailAddress::new(""), Err(UserValidationError::EmptyEmail));
}

#[rstest]
fn name_rejects_empty_input() {
    assert_eq!(UserName::new(""), Err(UserValidationError::EmptyName));
}

#[rstest]
#[case(" Ada ")]
#[case("   ")]
#[case("Ada Lovelace, Countess of Lovelace")]
fn name_is_stored_without_trimming(#[case] raw: &str) {
    let name = UserName::new(raw).expect("non-empty name");
    assert_eq!(name.as_ref(), raw);
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn random_user_ids_are_distinct() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
fn user_serialises_id_name_and_email(ada: User) {
    let value = serde_json::to_value(&ada).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": VALID_ID,
            "name": "Ada",
            "email": "ada@example.com",
        })
    );
}

#[rstest]
fn user_deserialisation_enforces_invariants() {
    let result = serde_json::from_value::<User>(json!({
        "id": VALID_ID,
        "name": "Ada",
        "email": "not-an-email",
    }));
    assert!(result.is_err());
}

#[rstest]
fn user_deserialisation_round_trips(ada: User) {
    let value = serde_json::to_value(&ada).expect("serialise user");
    let decoded: User = serde_json::from_value(value).expect("deserialise user");
    assert_eq!(decoded, ada);
}

#[rstest]
fn new_user_into_user_keeps_fields() {
    let new_user = NewUser::try_from_strings("Ada", "ada@example.com").expect("valid input");
    let id = UserId::random();

    let user = new_user.into_user(id);

    assert_eq!(user.id(), &id);
    assert_eq!(user.name().as_ref(), "Ada");
    assert_eq!(user.email().as_ref(), "ada@example.com");
}
