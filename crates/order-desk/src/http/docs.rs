//! Route listing served at `/docs`.

use axum::{
    extract::State,
    http::{header::ACCEPT, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: String,
    pub summary: String,
}

/// Every route the router registers, recorded as it is mounted.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    entries: Vec<RouteEntry>,
}

impl RouteCatalog {
    pub fn add(
        &mut self,
        method: &'static str,
        path: impl Into<String>,
        summary: impl Into<String>,
    ) {
        self.entries.push(RouteEntry {
            method,
            path: path.into(),
            summary: summary.into(),
        });
    }

    /// Entries ordered by path, then by registration order.
    pub fn entries(&self) -> Vec<RouteEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }

    fn render_html(&self) -> String {
        let mut page = String::from(
            "<!doctype html><html><head><meta charset='utf-8'><title>API Docs</title>\
             <style>body{font-family:system-ui,Arial;margin:20px}table{border-collapse:collapse}\
             th,td{padding:6px;border:1px solid #ccc}</style></head><body>\
             <h1>API endpoints</h1><table><tr><th>Method</th><th>Route</th><th>Summary</th></tr>",
        );
        for entry in self.entries() {
            page.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                entry.method,
                escape_html(&entry.path),
                escape_html(&entry.summary)
            ));
        }
        page.push_str("</table><p>Health: <a href=\"/health\">/health</a></p></body></html>");
        page
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML by default; JSON when the client asks for `application/json`.
pub async fn docs_handler(
    State(catalog): State<Arc<RouteCatalog>>,
    headers: HeaderMap,
) -> Response {
    let wants_json = headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if wants_json {
        Json(catalog.entries()).into_response()
    } else {
        Html(catalog.render_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_sorted_by_path() {
        let mut catalog = RouteCatalog::default();
        catalog.add("GET", "/health", "Liveness");
        catalog.add("GET", "/api/orders", "List");
        catalog.add("POST", "/api/orders", "Create");
        let paths: Vec<_> = catalog
            .entries()
            .into_iter()
            .map(|e| format!("{} {}", e.method, e.path))
            .collect();
        assert_eq!(paths, vec!["GET /api/orders", "POST /api/orders", "GET /health"]);
    }

    #[test]
    fn test_html_escapes_route_text() {
        let mut catalog = RouteCatalog::default();
        catalog.add("GET", "/api/<x>", "a & b");
        let html = catalog.render_html();
        assert!(html.contains("/api/&lt;x&gt;"));
        assert!(html.contains("<tr><td>GET</td><td>/api/&lt;x&gt;</td><td>a &amp; b</td></tr>"));
        assert!(html.contains("href=\"/health\""));
    }
}
