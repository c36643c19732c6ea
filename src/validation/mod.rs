//! Request validation that runs before any handler logic.
//!
//! Each body type declares its fields through [`Schema`]. [`validate`] checks
//! a raw body against that declaration, collecting every offending field
//! into a single [`AppError::Validation`], and only then hands a normalized
//! object to serde. [`ValidJson`] wraps this as an axum extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::error::{AppError, AppResult, FieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Str,
    Bool,
}

/// Declaration of one body field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A request body whose shape is declared field by field.
///
/// The deserialized type only ever sees objects that already passed
/// [`validate`], so its `Deserialize` impl may assume correct types.
pub trait Schema: DeserializeOwned {
    const FIELDS: &'static [FieldSpec];
}

// ── Body ──────────────────────────────────────────────────────────────────────

/// Checks `body` against `T::FIELDS` and deserializes it.
pub fn validate<T: Schema>(body: &[u8]) -> AppResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(vec![FieldError {
            kind: "missing",
            loc: vec![json!("body")],
            msg: "Field required".to_string(),
            input: Value::Null,
        }]));
    }

    let value: Value = serde_json::from_slice(body).map_err(|err| {
        AppError::Validation(vec![FieldError {
            kind: "json_invalid",
            loc: vec![json!("body"), json!(error_position(body, &err))],
            msg: "JSON decode error".to_string(),
            input: json!({}),
        }])
    })?;

    let normalized = validate_value(&value, T::FIELDS)?;

    serde_json::from_value(Value::Object(normalized)).map_err(|err| {
        AppError::Validation(vec![FieldError {
            kind: "value_error",
            loc: vec![json!("body")],
            msg: err.to_string(),
            input: value,
        }])
    })
}

/// Character offset of a decode error from the start of the body.
fn error_position(body: &[u8], err: &serde_json::Error) -> usize {
    let line_start: usize = body
        .split(|b| *b == b'\n')
        .take(err.line().saturating_sub(1))
        .map(|line| line.len() + 1)
        .sum();
    let end = (line_start + err.column().saturating_sub(1)).min(body.len());
    String::from_utf8_lossy(&body[..end]).chars().count()
}

/// Validates an already-parsed body, returning only the declared fields with
/// their values coerced to the declared kind.
pub fn validate_value(value: &Value, fields: &[FieldSpec]) -> AppResult<Map<String, Value>> {
    let Some(object) = value.as_object() else {
        return Err(AppError::Validation(vec![FieldError {
            kind: "model_attributes_type",
            loc: vec![json!("body")],
            msg: "Input should be a valid dictionary or object to extract fields from"
                .to_string(),
            input: value.clone(),
        }]));
    };

    let mut errors = Vec::new();
    let mut normalized = Map::with_capacity(fields.len());

    for field in fields {
        let loc = vec![json!("body"), json!(field.name)];
        match object.get(field.name) {
            None if field.required => errors.push(FieldError {
                kind: "missing",
                loc,
                msg: "Field required".to_string(),
                input: value.clone(),
            }),
            None => {}
            Some(Value::Null) if !field.required => {
                normalized.insert(field.name.to_string(), Value::Null);
            }
            Some(raw) => match coerce(field.kind, raw) {
                Ok(coerced) => {
                    normalized.insert(field.name.to_string(), coerced);
                }
                Err((kind, msg)) => errors.push(FieldError {
                    kind,
                    loc,
                    msg: msg.to_string(),
                    input: raw.clone(),
                }),
            },
        }
    }

    if errors.is_empty() {
        Ok(normalized)
    } else {
        Err(AppError::Validation(errors))
    }
}

const INT_PARSING: &str = "Input should be a valid integer, unable to parse string as an integer";
const INT_SIZE: &str = "Unable to parse input string as an integer, exceeding maximum size";

// Lax coercion: numeric strings are accepted for numbers, and the usual
// truthy/falsy spellings (or 0/1) for booleans.
fn coerce(kind: FieldKind, raw: &Value) -> Result<Value, (&'static str, &'static str)> {
    match kind {
        FieldKind::Int => match raw {
            Value::Number(n) if n.is_i64() => Ok(raw.clone()),
            Value::Number(n) if n.is_u64() => Err(("int_parsing_size", INT_SIZE)),
            Value::Number(n) => {
                let f = n.as_f64().unwrap_or(f64::NAN);
                if f.fract() != 0.0 {
                    Err((
                        "int_from_float",
                        "Input should be a valid integer, got a number with a fractional part",
                    ))
                } else if f < i64::MIN as f64 || f >= i64::MAX as f64 {
                    Err(("int_parsing_size", INT_SIZE))
                } else {
                    Ok(json!(f as i64))
                }
            }
            Value::String(s) => {
                let s = s.trim();
                let digits = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
                match s.parse::<i64>() {
                    Ok(n) => Ok(json!(n)),
                    Err(_) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                        Err(("int_parsing_size", INT_SIZE))
                    }
                    Err(_) => Err(("int_parsing", INT_PARSING)),
                }
            }
            _ => Err(("int_type", "Input should be a valid integer")),
        },
        FieldKind::Float => match raw {
            Value::Number(_) => Ok(raw.clone()),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(json!(f)),
                _ => Err((
                    "float_parsing",
                    "Input should be a valid number, unable to parse string as a number",
                )),
            },
            _ => Err(("float_type", "Input should be a valid number")),
        },
        FieldKind::Str => match raw {
            Value::String(_) => Ok(raw.clone()),
            _ => Err(("string_type", "Input should be a valid string")),
        },
        FieldKind::Bool => match raw {
            Value::Bool(_) => Ok(raw.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Ok(json!(false)),
                Some(1) => Ok(json!(true)),
                _ => Err((
                    "bool_parsing",
                    "Input should be a valid boolean, unable to interpret input",
                )),
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "0" | "off" | "f" | "false" | "n" | "no" => Ok(json!(false)),
                "1" | "on" | "t" | "true" | "y" | "yes" => Ok(json!(true)),
                _ => Err((
                    "bool_parsing",
                    "Input should be a valid boolean, unable to interpret input",
                )),
            },
            _ => Err(("bool_type", "Input should be a valid boolean")),
        },
    }
}

// ── Path parameters ───────────────────────────────────────────────────────────

/// Parses an integer path segment, reporting failures under `["path", name]`.
pub fn path_int(name: &'static str, raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| {
        AppError::Validation(vec![FieldError {
            kind: "int_parsing",
            loc: vec![json!("path"), json!(name)],
            msg: INT_PARSING.to_string(),
            input: json!(raw),
        }])
    })
}

/// Last value of query parameter `name`, as the platform resolves repeats.
pub fn query_last(raw: Option<&str>, name: &'static str) -> AppResult<Option<String>> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw.unwrap_or_default())
        .map_err(|err| {
            AppError::Validation(vec![FieldError {
                kind: "value_error",
                loc: vec![json!("query"), json!(name)],
                msg: err.to_string(),
                input: json!(raw),
            }])
        })?;

    Ok(pairs
        .into_iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value)
        .last())
}

/// Joins two validation outcomes so both sets of field errors reach the client.
pub fn collect<A, B>(first: AppResult<A>, second: AppResult<B>) -> AppResult<(A, B)> {
    match (first, second) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (first, second) => {
            let mut errors = Vec::new();
            for err in [first.err(), second.err()].into_iter().flatten() {
                match err {
                    AppError::Validation(fields) => errors.extend(fields),
                    other => return Err(other),
                }
            }
            Err(AppError::Validation(errors))
        }
    }
}

// ── Extractor ─────────────────────────────────────────────────────────────────

/// JSON body extractor that runs [`validate`] and rejects with a 422.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: Schema + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        validate::<T>(&body)
            .map(ValidJson)
            .map_err(IntoResponse::into_response)
    }
}
