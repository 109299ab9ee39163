#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::response::Html;
    use orderlabel::http_server::{print_label, PrintParams};

    #[tokio::test]
    async fn test_print_page_defaults() {
        let Html(page) = print_label(Query(PrintParams::default())).await;

        assert!(page.contains("👤 N/A"));
        assert!(page.contains("📞 N/A"));
        assert!(page.contains("💰 $0.00"));
        assert!(page.contains("💳 N/A"));
        // Fields the endpoint does not accept leave no trace.
        assert!(!page.contains("📍"));
        assert!(!page.contains("🏠"));
        assert!(!page.contains("🚚"));
    }

    #[tokio::test]
    async fn test_print_page_with_parameters() {
        let params = PrintParams {
            name: "Sok Dara".to_string(),
            phone: "092345678".to_string(),
            total: "25.00".to_string(),
            payment: "COD (Unpaid)".to_string(),
        };

        let Html(page) = print_label(Query(params)).await;

        assert!(page.contains("👤 Sok Dara"));
        assert!(page.contains("📞 092345678"));
        assert!(page.contains("💰 $25.00"));
        assert!(page.contains("💳 COD (Unpaid)"));
    }

    #[tokio::test]
    async fn test_print_page_escapes_query_values() {
        let params = PrintParams {
            name: "<script>alert(1)</script>".to_string(),
            ..PrintParams::default()
        };

        let Html(page) = print_label(Query(params)).await;

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_params_map_onto_order_fields() {
        let params = PrintParams {
            name: "Jane".to_string(),
            phone: "555".to_string(),
            total: "9.50".to_string(),
            payment: "paid".to_string(),
        };

        let fields = params.into_order_fields();

        assert_eq!(fields.customer_name, "Jane");
        assert_eq!(fields.phone, "555");
        assert_eq!(fields.total_amount, "9.50");
        assert_eq!(fields.payment_status, "paid");
        assert_eq!(fields.location, "");
        assert_eq!(fields.address, "");
        assert_eq!(fields.shipping_method, "");
    }
}
