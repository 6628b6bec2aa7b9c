//! Tests for setting value conversion.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::settings::{SettingDataType, SettingValue};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_data_type_round_trip() {
        for (s, dt) in [
            ("string", SettingDataType::String),
            ("text", SettingDataType::Text),
            ("integer", SettingDataType::Integer),
            ("float", SettingDataType::Float),
            ("timestamp", SettingDataType::Timestamp),
        ] {
            assert_eq!(SettingDataType::parse(s).unwrap(), dt);
            assert_eq!(dt.as_str(), s);
        }
    }

    #[test]
    fn test_data_type_rejects_unknown() {
        let err = SettingDataType::parse("boolean").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::UnknownDataType(_))
        ));
    }

    #[test]
    fn test_data_type_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&SettingDataType::Integer).unwrap(),
            "\"integer\""
        );
        assert_eq!(
            serde_json::from_str::<SettingDataType>("\"timestamp\"").unwrap(),
            SettingDataType::Timestamp
        );
    }

    #[test]
    fn test_integer_from_string() {
        let v = SettingValue::convert(SettingDataType::Integer, &json!("42")).unwrap();
        assert_eq!(v, SettingValue::Integer(42));
    }

    #[test]
    fn test_integer_from_number() {
        let v = SettingValue::convert(SettingDataType::Integer, &json!(42)).unwrap();
        assert_eq!(v, SettingValue::Integer(42));
    }

    #[test]
    fn test_integer_rejects_garbage() {
        let err = SettingValue::convert(SettingDataType::Integer, &json!("forty-two")).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::IntParse(_))
        ));
    }

    #[test]
    fn test_float_from_string() {
        let v = SettingValue::convert(SettingDataType::Float, &json!("3.14")).unwrap();
        assert_eq!(v, SettingValue::Float(3.14));
    }

    #[test]
    fn test_float_rejects_garbage() {
        let err = SettingValue::convert(SettingDataType::Float, &json!("pi")).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::FloatParse(_))
        ));
    }

    #[test]
    fn test_string_accepts_numbers() {
        // Legacy UI sometimes submits numbers for string settings
        let v = SettingValue::convert(SettingDataType::String, &json!(8080)).unwrap();
        assert_eq!(v, SettingValue::String("8080".to_string()));
    }

    #[test]
    fn test_string_rejects_objects() {
        let err = SettingValue::convert(SettingDataType::String, &json!({"a": 1})).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_timestamp_accepts_rfc3339() {
        let v = SettingValue::convert(
            SettingDataType::Timestamp,
            &json!("2024-03-01T08:30:00+02:00"),
        )
        .unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(6, 30, 0)
            .unwrap();
        assert_eq!(v, SettingValue::Timestamp(expected));
    }

    #[test]
    fn test_timestamp_rejects_other_formats() {
        for raw in ["2024-03-01", "01/03/2024 08:30", "yesterday"] {
            let err = SettingValue::convert(SettingDataType::Timestamp, &json!(raw)).unwrap_err();
            assert!(matches!(
                err,
                Error::Validation(ValidationError::TimestampParse(_))
            ));
        }
    }

    #[test]
    fn test_value_reports_its_data_type() {
        assert_eq!(
            SettingValue::Integer(1).data_type(),
            SettingDataType::Integer
        );
        assert_eq!(
            SettingValue::Text("x".into()).data_type(),
            SettingDataType::Text
        );
    }
}
