//! Validation layer: untyped JSON in, typed DTOs or field errors out.
//!
//! Pure functions with no I/O, shared by the HTTP extractors and usable on
//! their own. Every offending field is reported in one pass, with messages in
//! Spanish. `nombre` and `marca` are trimmed and their length counted in
//! characters. Unrecognized fields are dropped silently.

use axum_helpers::ValidateInput;
use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

use crate::models::{
    ArticuloFilter, CreateArticulo, MARCA_MAX_CHARS, NOMBRE_MAX_CHARS, UpdateArticulo,
};

/// Key under which validator reports errors not tied to one field
const FORM_ERRORS: &str = "__all__";

struct TextRule {
    field: &'static str,
    max_chars: u64,
    required: &'static str,
    empty: &'static str,
    too_long: &'static str,
    not_text: &'static str,
}

const NOMBRE: TextRule = TextRule {
    field: "nombre",
    max_chars: NOMBRE_MAX_CHARS,
    required: "El nombre es obligatorio",
    empty: "El nombre no puede estar vacío",
    too_long: "El nombre no puede exceder los 100 caracteres",
    not_text: "El nombre debe ser un texto",
};

const MARCA: TextRule = TextRule {
    field: "marca",
    max_chars: MARCA_MAX_CHARS,
    required: "La marca es obligatoria",
    empty: "La marca no puede estar vacía",
    too_long: "La marca no puede exceder los 50 caracteres",
    not_text: "La marca debe ser un texto",
};

const ESTADO_ACTIVACION: &str = "estadoActivacion";
const ESTADO_NOT_BOOL: &str = "El estado de activación debe ser un booleano";

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn as_object<'a>(input: &'a Value, errors: &mut ValidationErrors) -> Option<&'a Map<String, Value>> {
    match input {
        Value::Object(map) => Some(map),
        _ => {
            errors.add(
                FORM_ERRORS,
                error("type", "El cuerpo de la solicitud debe ser un objeto JSON"),
            );
            None
        }
    }
}

/// Trimmed text for a present field, or `None` after recording why not.
fn check_text(
    rule: &TextRule,
    value: Option<&Value>,
    required: bool,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        None => {
            if required {
                errors.add(rule.field, error("required", rule.required));
            }
            None
        }
        Some(Value::String(raw)) => {
            let text = raw.trim();
            let chars = text.chars().count() as u64;
            if chars == 0 {
                errors.add(rule.field, error("length", rule.empty));
                None
            } else if chars > rule.max_chars {
                let mut err = error("length", rule.too_long);
                err.add_param(Cow::Borrowed("max"), &rule.max_chars);
                errors.add(rule.field, err);
                None
            } else {
                Some(text.to_string())
            }
        }
        Some(_) => {
            errors.add(rule.field, error("type", rule.not_text));
            None
        }
    }
}

fn check_bool(value: Option<&Value>, errors: &mut ValidationErrors) -> Option<bool> {
    match value {
        None => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            errors.add(ESTADO_ACTIVACION, error("type", ESTADO_NOT_BOOL));
            None
        }
    }
}

/// Validate a create body: `nombre` (1-100 chars) and `marca` (1-50 chars), both required.
pub fn validate_create(input: &Value) -> Result<CreateArticulo, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(body) = as_object(input, &mut errors) else {
        return Err(errors);
    };

    let nombre = check_text(&NOMBRE, body.get("nombre"), true, &mut errors);
    let marca = check_text(&MARCA, body.get("marca"), true, &mut errors);

    match (nombre, marca) {
        (Some(nombre), Some(marca)) if errors.is_empty() => Ok(CreateArticulo { nombre, marca }),
        _ => Err(errors),
    }
}

/// Validate an update body: any non-empty subset of `nombre`, `marca`, `estadoActivacion`.
pub fn validate_update(input: &Value) -> Result<UpdateArticulo, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(body) = as_object(input, &mut errors) else {
        return Err(errors);
    };

    let update = UpdateArticulo {
        nombre: check_text(&NOMBRE, body.get("nombre"), false, &mut errors),
        marca: check_text(&MARCA, body.get("marca"), false, &mut errors),
        estado_activacion: check_bool(body.get(ESTADO_ACTIVACION), &mut errors),
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    if update.is_empty() {
        errors.add(
            FORM_ERRORS,
            error("empty_update", "No se proporcionó campo a modificar."),
        );
        return Err(errors);
    }
    Ok(update)
}

/// Validate list filters. `estadoActivacion` accepts `"true"`/`"false"` or a
/// JSON boolean; an empty `nombre` means no name constraint.
pub fn validate_filter(input: &Value) -> Result<ArticuloFilter, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(query) = as_object(input, &mut errors) else {
        return Err(errors);
    };

    let nombre = match query.get("nombre") {
        None => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.add(NOMBRE.field, error("type", NOMBRE.not_text));
            None
        }
    };

    let estado_activacion = match query.get(ESTADO_ACTIVACION) {
        None => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::String(s)) if s == "true" => Some(true),
        Some(Value::String(s)) if s == "false" => Some(false),
        Some(_) => {
            errors.add(ESTADO_ACTIVACION, error("type", ESTADO_NOT_BOOL));
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ArticuloFilter {
        nombre,
        estado_activacion,
    })
}

impl ValidateInput for CreateArticulo {
    fn validate_input(input: &Value) -> Result<Self, ValidationErrors> {
        validate_create(input)
    }
}

impl ValidateInput for UpdateArticulo {
    fn validate_input(input: &Value) -> Result<Self, ValidationErrors> {
        validate_update(input)
    }
}

impl ValidateInput for ArticuloFilter {
    fn validate_input(input: &Value) -> Result<Self, ValidationErrors> {
        validate_filter(input)
    }
}
