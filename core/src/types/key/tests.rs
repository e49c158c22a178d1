use super::*;

#[test]
fn accepts_typical_secret_names() {
    for name in ["api_key_github", "db/prod/password", "AWS.SECRET", "ключ"] {
        let key = Key::try_from(name).unwrap();
        assert_eq!(key.as_str(), name);
    }
}

#[test]
fn trims_surrounding_whitespace() {
    let key = Key::try_from("  github_token \n").unwrap();
    assert_eq!(key.as_str(), "github_token");
}

#[test]
fn rejects_blank() {
    Key::try_from("").unwrap_err();
    Key::try_from(" \t ").unwrap_err();
}

#[test]
fn length_is_counted_in_chars() {
    Key::try_from("é".repeat(MAX_KEY_LENGTH).as_str()).unwrap();
    Key::try_from("a".repeat(MAX_KEY_LENGTH + 1).as_str()).unwrap_err();
}

#[test]
fn deserialize_applies_validation() {
    let key: Key = serde_json::from_str("\" stripe \"").unwrap();
    assert_eq!(key.as_str(), "stripe");

    serde_json::from_str::<Key>("\"  \"").unwrap_err();
}

#[test]
fn orders_like_the_underlying_label() {
    let mut keys: Vec<Key> = ["stripe", "api_key", "Stripe", "api"]
        .into_iter()
        .map(|k| Key::try_from(k).unwrap())
        .collect();
    keys.sort();

    let sorted: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
    assert_eq!(sorted, ["Stripe", "api", "api_key", "stripe"]);
}
