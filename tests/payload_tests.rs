#[cfg(test)]
mod tests {
    use orderlabel::order_model::OrderFields;
    use orderlabel::payload::{self, PayloadError};

    fn sample_fields() -> OrderFields {
        OrderFields {
            customer_name: "Sok Dara".to_string(),
            phone: "012345678".to_string(),
            location: "Phnom Penh".to_string(),
            address: "(មិនបានបញ្ជាក់)".to_string(),
            total_amount: "25.00".to_string(),
            payment_status: "🟥 មិនទាន់បង់".to_string(),
            shipping_method: "Moto".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let fields = sample_fields();

        let encoded = payload::encode(&fields).unwrap();
        let decoded = payload::decode(&encoded).unwrap();

        assert_eq!(decoded, fields);
    }

    #[test]
    fn test_encoded_schema_shape() {
        let encoded = payload::encode(&sample_fields()).unwrap();

        let parts: Vec<&str> = encoded.split('|').collect();
        assert_eq!(parts.len(), 9);
        assert_eq!(parts[0], "print");
        assert_eq!(parts[1], "v1");
        assert_eq!(parts[2], "Sok Dara");
        assert!(payload::is_print_payload(&encoded));
    }

    #[test]
    fn test_delimiter_in_field_is_rejected_at_encode() {
        let mut fields = sample_fields();
        fields.customer_name = "Sok|Dara".to_string();

        assert_eq!(
            payload::encode(&fields),
            Err(PayloadError::DelimiterInField("customer_name".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_wrong_part_count() {
        assert_eq!(
            payload::decode("print|v1|only|four"),
            Err(PayloadError::WrongPartCount(4))
        );
        assert_eq!(
            payload::decode("print"),
            Err(PayloadError::WrongPartCount(1))
        );
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        assert_eq!(
            payload::decode("print|v2|a|b|c|d|e|f|g"),
            Err(PayloadError::UnknownVersion("v2".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_unknown_action() {
        assert_eq!(
            payload::decode("edit|v1|a|b|c|d|e|f|g"),
            Err(PayloadError::UnknownAction("edit".to_string()))
        );
        assert!(!payload::is_print_payload("edit|v1|a"));
        assert!(!payload::is_print_payload("printer|v1|a"));
    }

    #[test]
    fn test_round_trip_with_empty_optional_fields() {
        let mut fields = sample_fields();
        fields.location = String::new();
        fields.address = String::new();
        fields.shipping_method = String::new();

        let decoded = payload::decode(&payload::encode(&fields).unwrap()).unwrap();
        assert_eq!(decoded, fields);
    }
}
