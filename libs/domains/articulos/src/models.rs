use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Maximum length of `nombre`, in characters
pub const NOMBRE_MAX_CHARS: u64 = 100;

/// Maximum length of `marca`, in characters
pub const MARCA_MAX_CHARS: u64 = 50;

/// Message returned with a successful deactivation
pub const DESACTIVADO_MENSAJE: &str = "Articulo desactivado";

/// Articulo entity as exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Articulo {
    /// Unique identifier (24 hex characters)
    #[serde(rename = "_id")]
    #[schema(example = "665f1c2e8b3e4a2d9c0f1a2b")]
    pub id: String,
    /// Item name
    #[schema(example = "Celular", min_length = 1, max_length = 100)]
    pub nombre: String,
    /// Brand
    #[schema(example = "Apple", min_length = 1, max_length = 50)]
    pub marca: String,
    /// Last modification timestamp, set on creation and on every update
    pub fecha_modificacion: DateTime<Utc>,
    /// `false` once the articulo has been deactivated
    pub estado_activacion: bool,
}

/// DTO for creating a new articulo
///
/// Unrecognized fields in the request body are dropped.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
#[schema(as = CrearArticulo)]
pub struct CreateArticulo {
    #[validate(length(min = 1, max = NOMBRE_MAX_CHARS))]
    #[schema(example = "Celular", min_length = 1, max_length = 100)]
    pub nombre: String,
    #[validate(length(min = 1, max = MARCA_MAX_CHARS))]
    #[schema(example = "Apple", min_length = 1, max_length = 50)]
    pub marca: String,
}

/// DTO for updating an existing articulo
///
/// At least one field must be present. Setting `estadoActivacion: true`
/// reactivates a deactivated articulo.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[schema(as = ActualizarArticulo)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_not_empty"))]
pub struct UpdateArticulo {
    #[validate(length(min = 1, max = NOMBRE_MAX_CHARS))]
    #[schema(example = "Celular Premium", min_length = 1, max_length = 100)]
    pub nombre: Option<String>,
    #[validate(length(min = 1, max = MARCA_MAX_CHARS))]
    #[schema(example = "Samsung", min_length = 1, max_length = 50)]
    pub marca: Option<String>,
    pub estado_activacion: Option<bool>,
}

impl CreateArticulo {
    /// Copy with surrounding whitespace removed, as stored
    pub fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            marca: self.marca.trim().to_string(),
        }
    }
}

impl UpdateArticulo {
    /// Copy with surrounding whitespace removed from the text fields, as stored
    pub fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.as_deref().map(|s| s.trim().to_string()),
            marca: self.marca.as_deref().map(|s| s.trim().to_string()),
            estado_activacion: self.estado_activacion,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nombre.is_none() && self.marca.is_none() && self.estado_activacion.is_none()
    }

    /// Update that only deactivates
    pub fn deactivate() -> Self {
        Self {
            estado_activacion: Some(false),
            ..Default::default()
        }
    }
}

fn validate_update_not_empty(update: &UpdateArticulo) -> Result<(), ValidationError> {
    if update.is_empty() {
        return Err(ValidationError::new("empty_update")
            .with_message("No se proporcionó campo a modificar.".into()));
    }
    Ok(())
}

/// Query filters for listing articulos
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ArticuloFilter {
    /// Case-insensitive substring of the name
    pub nombre: Option<String>,
    /// Activation state, `true` or `false`
    pub estado_activacion: Option<bool>,
}

/// Body returned by DELETE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DesactivacionResponse {
    #[schema(example = "Articulo desactivado")]
    pub mensaje: String,
    pub articulo: Articulo,
}

impl DesactivacionResponse {
    pub fn new(articulo: Articulo) -> Self {
        Self {
            mensaje: DESACTIVADO_MENSAJE.to_string(),
            articulo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_articulo_json_shape() {
        let articulo = Articulo {
            id: "665f1c2e8b3e4a2d9c0f1a2b".to_string(),
            nombre: "Celular".to_string(),
            marca: "Apple".to_string(),
            fecha_modificacion: Utc.with_ymd_and_hms(2024, 6, 4, 12, 30, 0).unwrap(),
            estado_activacion: true,
        };

        let json = serde_json::to_value(&articulo).unwrap();
        assert_eq!(json["_id"], "665f1c2e8b3e4a2d9c0f1a2b");
        assert_eq!(json["estadoActivacion"], true);
        assert!(
            json["fechaModificacion"]
                .as_str()
                .unwrap()
                .starts_with("2024-06-04T12:30:00")
        );
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_update_derive_rejects_empty() {
        let errors = UpdateArticulo::default().validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
        assert!(UpdateArticulo::deactivate().validate().is_ok());
    }

    #[test]
    fn test_create_derive_counts_characters() {
        let create = CreateArticulo {
            nombre: "ñ".repeat(NOMBRE_MAX_CHARS as usize),
            marca: "é".repeat(MARCA_MAX_CHARS as usize),
        };
        assert!(create.validate().is_ok());

        let too_long = CreateArticulo {
            marca: "é".repeat(MARCA_MAX_CHARS as usize + 1),
            ..create
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_blank_text_is_rejected_once_trimmed() {
        let blank = UpdateArticulo {
            nombre: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.trimmed().nombre.as_deref(), Some(""));
        assert!(blank.trimmed().validate().is_err());

        let padded = CreateArticulo {
            nombre: "  Celular ".to_string(),
            marca: "\tApple".to_string(),
        };
        assert_eq!(padded.trimmed().nombre, "Celular");
        assert_eq!(padded.trimmed().marca, "Apple");
    }

    #[test]
    fn test_desactivacion_response() {
        let articulo = Articulo {
            id: "665f1c2e8b3e4a2d9c0f1a2b".to_string(),
            nombre: "Celular".to_string(),
            marca: "Apple".to_string(),
            fecha_modificacion: Utc::now(),
            estado_activacion: false,
        };
        let json = serde_json::to_value(DesactivacionResponse::new(articulo)).unwrap();
        assert_eq!(json["mensaje"], "Articulo desactivado");
        assert_eq!(json["articulo"]["estadoActivacion"], false);
    }
}
