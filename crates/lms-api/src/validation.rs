use validator::Validate;

use crate::error::ApiError;

/// Run a payload's derived validators and collapse field failures into a
/// single `Validation` error, messages joined with ", " the way the original
/// client surfaced them.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload.validate().map_err(|errors| {
        let messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                failures.iter().map(move |failure| {
                    failure
                        .message
                        .as_ref()
                        .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
                })
            })
            .collect();
        ApiError::Validation(messages.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(length(min = 1, message = "Provide atleast one image"))]
        images: Vec<String>,
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = Payload {
            name: "Pointers".to_string(),
            images: vec!["https://cdn.example/pointers.png".to_string()],
        };
        assert!(validate_payload(&payload).is_ok());
    }

    #[test]
    fn test_invalid_payload_joins_messages() {
        let payload = Payload {
            name: String::new(),
            images: Vec::new(),
        };
        let error = validate_payload(&payload).unwrap_err();
        match error {
            ApiError::Validation(message) => {
                assert!(message.contains("Name is required"));
                assert!(message.contains("Provide atleast one image"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
