#[cfg(test)]
mod tests {
    use orderlabel::label_renderer;
    use orderlabel::order_model::{OrderFields, ADDRESS_NOT_SPECIFIED};

    fn sample_fields() -> OrderFields {
        OrderFields {
            customer_name: "Sok Dara".to_string(),
            phone: "012345678".to_string(),
            location: "Phnom Penh".to_string(),
            address: ADDRESS_NOT_SPECIFIED.to_string(),
            total_amount: "25.00".to_string(),
            payment_status: "🟥 មិនទាន់បង់".to_string(),
            shipping_method: "Moto".to_string(),
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_pdf_rendering_is_deterministic() {
        let fields = sample_fields();

        let first = label_renderer::render_pdf(&fields).unwrap();
        let second = label_renderer::render_pdf(&fields).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_pdf_has_expected_structure() {
        let bytes = label_renderer::render_pdf(&sample_fields()).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert!(contains(&bytes, b"Sok Dara"));
        assert!(contains(&bytes, b"012345678"));
        assert!(contains(&bytes, b"Phnom Penh"));
        assert!(contains(&bytes, "មិនទាន់បង់".as_bytes()));
        // One Tj per printed line, plus the separator stroke.
        assert_eq!(count(&bytes, b"Tj"), 6);
        assert!(contains(&bytes, b" l\n"));
    }

    #[test]
    fn test_pdf_omits_placeholder_address_line() {
        let bytes = label_renderer::render_pdf(&sample_fields()).unwrap();

        // The placeholder never reaches the label.
        assert!(!contains(&bytes, "មិនបានបញ្ជាក់".as_bytes()));
    }

    #[test]
    fn test_pdf_includes_real_address_line() {
        let mut fields = sample_fields();
        fields.address = "House 12, Street 271".to_string();

        let bytes = label_renderer::render_pdf(&fields).unwrap();

        assert!(contains(&bytes, b"House 12, Street 271"));
        assert_eq!(count(&bytes, b"Tj"), 7);
    }

    #[test]
    fn test_pdf_omits_empty_address_line() {
        let mut fields = sample_fields();
        fields.address = String::new();

        let bytes = label_renderer::render_pdf(&fields).unwrap();
        assert_eq!(count(&bytes, b"Tj"), 6);
    }

    #[test]
    fn test_html_rendering_is_deterministic() {
        let fields = sample_fields();

        assert_eq!(
            label_renderer::render_html(&fields),
            label_renderer::render_html(&fields)
        );
    }

    #[test]
    fn test_html_line_content_and_order() {
        let page = label_renderer::render_html(&sample_fields());

        assert!(page.contains("👤 Sok Dara"));
        assert!(page.contains("📞 012345678"));
        assert!(page.contains("📍 Phnom Penh"));
        assert!(page.contains("💰 $25.00"));
        assert!(page.contains("🚚 Moto"));
        assert!(page.contains("🟥 មិនទាន់បង់"));
        assert!(page.contains("<hr>"));
        // Identity block renders above the separator, payment below.
        let rule = page.find("<hr>").unwrap();
        assert!(page.find("📍 Phnom Penh").unwrap() < rule);
        assert!(page.find("💰 $25.00").unwrap() > rule);
    }

    #[test]
    fn test_html_address_line_is_conditional() {
        let placeholder = label_renderer::render_html(&sample_fields());
        assert!(!placeholder.contains("🏠"));

        let mut fields = sample_fields();
        fields.address = "House 12, Street 271".to_string();
        let with_address = label_renderer::render_html(&fields);
        assert_eq!(with_address.matches("🏠").count(), 1);
        assert!(with_address.contains("🏠 House 12, Street 271"));
    }

    #[test]
    fn test_html_escapes_field_values() {
        let mut fields = sample_fields();
        fields.customer_name = "<b>Sok & \"Dara\"</b>".to_string();

        let page = label_renderer::render_html(&fields);

        assert!(!page.contains("<b>"));
        assert!(page.contains("&lt;b&gt;Sok &amp; &quot;Dara&quot;&lt;/b&gt;"));
    }

    #[test]
    fn test_html_page_is_sized_to_the_label() {
        let page = label_renderer::render_html(&sample_fields());

        assert!(page.contains("size: 78mm 50mm"));
        assert!(page.contains("width: 78mm"));
        assert!(page.contains("height: 50mm"));
    }
}
