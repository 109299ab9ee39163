//! # Print Page Server Module
//!
//! A single `GET /print` endpoint that renders the label as an HTML page
//! from caller-supplied query parameters. This is the degraded rendering
//! path: it has no connection to the extractor, performs no authentication,
//! and substitutes a fixed placeholder for every missing parameter instead
//! of erroring. Values are HTML-escaped before interpolation.

use anyhow::Result;
use axum::extract::Query;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use tracing::info;

use crate::label_renderer;
use crate::order_model::OrderFields;

fn default_na() -> String {
    "N/A".to_string()
}

fn default_total() -> String {
    "0.00".to_string()
}

/// Query parameters of `GET /print`, each with its placeholder default.
#[derive(Debug, Clone, Deserialize)]
pub struct PrintParams {
    #[serde(default = "default_na")]
    pub name: String,
    #[serde(default = "default_na")]
    pub phone: String,
    #[serde(default = "default_total")]
    pub total: String,
    #[serde(default = "default_na")]
    pub payment: String,
}

impl Default for PrintParams {
    fn default() -> Self {
        Self {
            name: default_na(),
            phone: default_na(),
            total: default_total(),
            payment: default_na(),
        }
    }
}

impl PrintParams {
    /// The four query parameters as a field set; the fields the endpoint
    /// does not accept stay empty and their label lines collapse away.
    pub fn into_order_fields(self) -> OrderFields {
        OrderFields {
            customer_name: self.name,
            phone: self.phone,
            location: String::new(),
            address: String::new(),
            total_amount: self.total,
            payment_status: self.payment,
            shipping_method: String::new(),
        }
    }
}

/// `GET /print` — render the label page from query parameters.
pub async fn print_label(Query(params): Query<PrintParams>) -> Html<String> {
    Html(label_renderer::render_html(&params.into_order_fields()))
}

/// Build the print page router.
pub fn router() -> Router {
    Router::new().route("/print", get(print_label))
}

/// Serve the print page until the process exits.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "print page server listening");
    axum::serve(listener, router()).await?;
    Ok(())
}
