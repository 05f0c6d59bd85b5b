use record_rail::mapping::{convert, FieldValues, RecordFactory};
use record_rail::stage::Stage;
use record_rail::types::BuildError;

#[derive(Debug, Clone, PartialEq)]
struct Credentials {
    user: String,
    token: Option<String>,
}

// A factory does not have to be a closure.
struct CredentialsFactory;

impl RecordFactory<Credentials> for CredentialsFactory {
    fn construct(&self, values: &FieldValues) -> Result<Credentials, BuildError> {
        Ok(Credentials {
            user: values.required("user")?,
            token: values.optional("token")?,
        })
    }
}

#[test]
fn test_struct_factory_constructs_records() {
    let credentials = convert(CredentialsFactory, false, |b| {
        b.bind("user", Stage::just("ada".to_string()))?;
        b.bind("token", Stage::just("s3cret".to_string()))?;
        Ok(())
    })
    .unwrap();

    assert_eq!(
        credentials,
        Credentials {
            user: "ada".to_string(),
            token: Some("s3cret".to_string()),
        }
    );
}

#[test]
fn test_optional_field_defaults_to_none() {
    let credentials = convert(CredentialsFactory, false, |b| {
        b.bind("user", Stage::just("ada".to_string()))?;
        Ok(())
    })
    .unwrap();

    assert_eq!(credentials.token, None);
}

#[test]
fn test_required_field_type_mismatch() {
    let error = convert(CredentialsFactory, false, |b| {
        // Bound as an integer, read back as a String.
        b.bind("user", Stage::just(42_u32))?;
        Ok(())
    })
    .unwrap_err();

    match error {
        BuildError::FieldTypeMismatch { field, expected } => {
            assert_eq!(field, "user");
            assert!(expected.contains("String"));
        }
        other => panic!("expected FieldTypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_optional_field_type_mismatch_is_still_an_error() {
    let error = convert(CredentialsFactory, false, |b| {
        b.bind("user", Stage::just("ada".to_string()))?;
        b.bind("token", Stage::just(7_u8))?;
        Ok(())
    })
    .unwrap_err();

    assert!(matches!(error, BuildError::FieldTypeMismatch { field: "token", .. }));
}

#[test]
fn test_field_values_accessors() {
    let probe = |values: &FieldValues| -> Result<usize, BuildError> {
        assert!(values.contains("user"));
        assert!(!values.contains("absent"));
        assert!(!values.is_empty());
        Ok(values.len())
    };

    let len = convert(probe, false, |b| {
        b.bind("user", Stage::just("ada".to_string()))?;
        b.bind("token", Stage::just("t".to_string()))?;
        Ok(())
    })
    .unwrap();

    assert_eq!(len, 2);
}
