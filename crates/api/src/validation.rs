//! Bridge from `validator` derive output to [`CoreError::Validation`].

use luct_core::error::CoreError;
use validator::{Validate, ValidationErrors};

use crate::error::AppResult;

/// Validate a request body, turning field errors into a single 400 message.
pub fn validate_body<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)).into())
}

/// Join the field messages in field-name order, e.g.
/// `"email: A valid email is required; name: Name is required"`.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: invalid value ({})", e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use luct_db::models::user::RegisterStudent;

    use crate::error::AppError;

    #[test]
    fn valid_body_passes() {
        let body = RegisterStudent {
            email: "student@test.com".into(),
            password: "pw123".into(),
            name: "Test".into(),
        };
        assert!(validate_body(&body).is_ok());
    }

    #[test]
    fn messages_are_ordered_by_field() {
        let body = RegisterStudent {
            email: "not-an-email".into(),
            password: String::new(),
            name: String::new(),
        };
        let err = validate_body(&body).unwrap_err();
        let expected = "email: A valid email is required; name: Name is required; \
                        password: Password is required";
        assert_matches!(
            err,
            AppError::Core(CoreError::Validation(msg)) if msg == expected
        );
    }
}
