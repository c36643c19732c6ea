use serde::{Deserialize, Serialize};

use crate::validation::{FieldKind, FieldSpec, Schema};

/// Inventory record. `id` is caller-supplied and never checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub nombre: String,
    pub precio: f64,
    pub stock: i64,
}

impl Schema for Product {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("id", FieldKind::Int),
        FieldSpec::required("nombre", FieldKind::Str),
        FieldSpec::required("precio", FieldKind::Float),
        FieldSpec::required("stock", FieldKind::Int),
    ];
}

impl Product {
    pub fn new(id: i64, nombre: impl Into<String>, precio: f64, stock: i64) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            precio,
            stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::validation::validate;
    use serde_json::json;

    #[test]
    fn serializes_with_spanish_field_names() {
        let value = serde_json::to_value(Product::new(1, "Teclado Mecánico", 85.5, 10)).unwrap();
        assert_eq!(
            value,
            json!({ "id": 1, "nombre": "Teclado Mecánico", "precio": 85.5, "stock": 10 })
        );
    }

    #[test]
    fn whole_price_serializes_as_float() {
        let body = serde_json::to_string(&Product::new(2, "Ratón Gaming", 45.0, 25)).unwrap();
        assert!(body.contains("\"precio\":45.0"), "got {}", body);
    }

    #[test]
    fn validates_complete_body() {
        let product: Product =
            validate(br#"{"id": 3, "nombre": "Webcam", "precio": 30.0, "stock": 5}"#).unwrap();
        assert_eq!(product, Product::new(3, "Webcam", 30.0, 5));
    }

    #[test]
    fn rejects_body_without_stock() {
        match validate::<Product>(br#"{"id": 3, "nombre": "Webcam", "precio": 30.0}"#) {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].loc, vec![json!("body"), json!("stock")]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
