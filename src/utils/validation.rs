//! Utilidades de validación
//!
//! Este módulo contiene reglas custom para el derive de `validator`
//! y helpers para aplanar los errores al formato de la API.

use validator::{ValidationError, ValidationErrors};

/// Validar que un string tenga contenido no vacío tras recortar espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

// Los nombres de campo del struct van en snake_case pero el contrato JSON
// es camelCase; los errores nombran el campo tal como viaja en el wire.
fn display_field(field: &str) -> &str {
    match field {
        "registration_number" => "registrationNumber",
        "client_email" => "clientEmail",
        "client_address" => "clientAddress",
        "is_currently_rented" => "isCurrentlyRented",
        "current_location_address" => "currentLocationAddress",
        other => other,
    }
}

/// Aplanar los errores de validación a una lista `campo: mensaje`,
/// ordenada para que la respuesta sea determinista.
pub fn collect_error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(|error| {
                let detail = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{}: {}", display_field(field), detail)
            })
        })
        .collect();
    messages.sort();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("ABC123").is_ok());
        assert!(validate_not_blank("  a  ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_display_field_uses_wire_names() {
        assert_eq!(display_field("registration_number"), "registrationNumber");
        assert_eq!(display_field("vin"), "vin");
        assert_eq!(display_field("brand"), "brand");
    }

    #[test]
    fn test_collect_error_messages_flattens_and_sorts() {
        let mut errors = ValidationErrors::new();
        let mut vin_error = ValidationError::new("length");
        vin_error.message = Some("VIN must be 1-17 characters".into());
        errors.add("vin", vin_error);
        let mut email_error = ValidationError::new("email");
        email_error.message = Some("client email must be a valid email address".into());
        errors.add("client_email", email_error);

        let messages = collect_error_messages(&errors);
        assert_eq!(
            messages,
            vec![
                "clientEmail: client email must be a valid email address".to_string(),
                "vin: VIN must be 1-17 characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_collect_error_messages_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("brand", ValidationError::new("required"));
        assert_eq!(collect_error_messages(&errors), vec!["brand: required".to_string()]);
    }
}
