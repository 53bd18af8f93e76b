use serde::{Deserialize, Serialize};

/// A stored item. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

/// Create payload.
///
/// `id` is type-checked as an integer but the store ignores it and assigns
/// its own. Other unknown fields are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewItem {
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    fn parse(s: &str) -> serde_json::Result<NewItem> {
        serde_json::from_str(s)
    }

    #[test]
    fn done_defaults_to_false() {
        let n = parse(r#"{"title":"buy milk"}"#).unwrap();
        assert_eq!(n, NewItem { title: "buy milk".into(), done: false, id: None });
    }

    #[test]
    fn integer_client_id_is_accepted() {
        let n = parse(r#"{"id":99,"title":"x","done":true}"#).unwrap();
        assert_eq!(n, NewItem { title: "x".into(), done: true, id: Some(99) });
        assert_eq!(parse(r#"{"id":-3,"title":"x"}"#).unwrap().id, Some(-3));
        assert_eq!(parse(r#"{"id":null,"title":"x"}"#).unwrap().id, None);
    }

    #[test]
    fn non_integer_client_id_is_rejected() {
        assert!(parse(r#"{"id":"str","title":"x"}"#).is_err());
        assert!(parse(r#"{"id":1.5,"title":"x"}"#).is_err());
        assert!(parse(r#"{"id":true,"title":"x"}"#).is_err());
    }

    #[test]
    fn title_is_required() {
        let err = parse(r#"{"done":true}"#).expect_err("must fail");
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn title_must_be_a_string() {
        assert!(parse(r#"{"title":7}"#).is_err());
    }

    #[test]
    fn item_serializes_all_fields() {
        let item = Item { id: 1, title: "buy milk".into(), done: false };
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v, serde_json::json!({"id": 1, "title": "buy milk", "done": false}));
    }
}
