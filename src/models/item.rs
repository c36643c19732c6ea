use serde::Deserialize;

use crate::error::AppResult;
use crate::models::Presence;
use crate::validation::{self, FieldKind, FieldSpec, Schema};

/// Body of `PUT /items/{item_id}`. Items are echoed back, never stored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub is_offer: Presence<bool>,
}

impl Schema for Item {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Str),
        FieldSpec::required("price", FieldKind::Float),
        FieldSpec::optional("is_offer", FieldKind::Bool),
    ];
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
pub struct ItemQuery {
    pub q: Option<String>,
}

impl ItemQuery {
    /// Parses the raw query string; a repeated `q` resolves to its last value.
    pub fn from_raw(raw: Option<&str>) -> AppResult<Self> {
        Ok(Self {
            q: validation::query_last(raw, "q")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn is_offer_defaults_to_absent() {
        let item: Item = validate(br#"{"name": "Mouse", "price": 19.99}"#).unwrap();
        assert_eq!(item.is_offer, Presence::Absent);
    }

    #[test]
    fn is_offer_null_is_kept_distinct() {
        let item: Item =
            validate(br#"{"name": "Mouse", "price": 19.99, "is_offer": null}"#).unwrap();
        assert_eq!(item.is_offer, Presence::Null);
    }

    #[test]
    fn query_without_q_is_none() {
        assert_eq!(ItemQuery::from_raw(Some("other=1")).unwrap(), ItemQuery::default());
    }

    #[test]
    fn is_offer_value_is_kept() {
        let item: Item =
            validate(br#"{"name": "Mouse", "price": 19.99, "is_offer": true}"#).unwrap();
        assert_eq!(item.is_offer, Presence::Present(true));
    }
}
