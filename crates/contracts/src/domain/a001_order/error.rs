use std::fmt;
use thiserror::Error;

/// Numeric form fields that are validated before anything is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Quantity,
    UnitPrice,
}

impl NumericField {
    pub fn label(&self) -> &'static str {
        match self {
            NumericField::Quantity => "Cantidad",
            NumericField::UnitPrice => "Precio",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors of the order workflow
///
/// None of them is retried automatically; the user repeats the action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// Transport failure, non-success status or unparseable response body
    #[error("Error de red: {0}")]
    Network(String),

    /// Non-numeric or non-positive quantity/price
    #[error("{field} debe ser un número positivo. Valor recibido: \"{raw}\"")]
    Validation { field: NumericField, raw: String },

    /// The user declined the delete confirmation
    #[error("Operación cancelada por el usuario")]
    UserAbort,

    /// A mutation is already in flight
    #[error("Hay una operación en curso, espere a que termine")]
    Busy,

    #[error("Error al exportar: {0}")]
    Export(String),
}

impl OrderError {
    pub fn network(message: impl Into<String>) -> Self {
        OrderError::Network(message.into())
    }

    /// Errors that the user should see; aborts are only logged
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, OrderError::UserAbort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_contains_raw_input() {
        let err = OrderError::Validation {
            field: NumericField::Quantity,
            raw: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cantidad debe ser un número positivo. Valor recibido: \"abc\""
        );
    }

    #[test]
    fn test_user_abort_is_not_user_visible() {
        assert!(!OrderError::UserAbort.is_user_visible());
        assert!(OrderError::network("HTTP 500").is_user_visible());
    }
}
