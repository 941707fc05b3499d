//! HTML output.
//!
//! Pages are served as ISO-8859-1, so every body gets transcoded before sending it. Characters
//! which cannot be represented are sent as numeric character references.

pub mod grid;
pub mod vendor;

use actix_web::{
    HttpResponse,
    http::{StatusCode, header},
};
use crate::model::Request;
use deepmac_common::model::PaginatedResults;
use std::sync::OnceLock;
use tera::{Context, Tera};

pub const CONTENT_TYPE: &str = "text/html; charset=ISO-8859-1";
pub const CONTENT_LANGUAGE: &str = "en";

pub const TITLE: &str = "DeepMac - OUI Search";
pub const RESULTS_TITLE: &str = "DeepMac - OUI Search - Search Results";

pub const NO_RESULTS: &str = "No results were found for this search.";

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("macros.html", include_str!("../templates/macros.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("message.html", include_str!("../templates/message.html")),
    ("results.html", include_str!("../templates/results.html")),
];

fn templates() -> &'static Tera {
    static TERA: OnceLock<Tera> = OnceLock::new();
    TERA.get_or_init(|| {
        let mut tera = Tera::default();
        #[allow(clippy::expect_used)]
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .expect("page templates must be valid");
        tera
    })
}

/// Render a page template into a response.
pub fn page(
    status: StatusCode,
    template: &str,
    context: &Context,
) -> Result<HttpResponse, tera::Error> {
    let body = templates().render(template, context)?;
    Ok(html(status, &body))
}

/// Create an HTML response, transcoding the body.
pub fn html(status: StatusCode, body: &str) -> HttpResponse {
    let (body, _, unmappable) = encoding_rs::WINDOWS_1252.encode(body);
    if unmappable {
        log::debug!("Replaced characters outside of ISO-8859-1 with references");
    }

    HttpResponse::build(status)
        .insert_header((header::CONTENT_TYPE, CONTENT_TYPE))
        .insert_header((header::CONTENT_LANGUAGE, CONTENT_LANGUAGE))
        .body(body.into_owned())
}

/// The search form
pub fn index(page_size: u64) -> Result<HttpResponse, tera::Error> {
    let mut context = Context::new();
    context.insert("title", TITLE);
    context.insert("page_size", &page_size);
    page(StatusCode::OK, "index.html", &context)
}

/// One page of results, or the "no results" message if nothing matched.
pub fn results<R>(
    grid: &grid::Grid<R>,
    results: &PaginatedResults<R>,
    request: &Request,
) -> Result<HttpResponse, tera::Error> {
    if results.is_empty() {
        return Ok(message(StatusCode::OK, NO_RESULTS));
    }

    let mut context = Context::new();
    context.insert("title", RESULTS_TITLE);
    context.insert("grid", &grid.view(results, request));
    page(StatusCode::OK, "results.html", &context)
}

/// A page showing a single message, followed by a "New Search" link.
///
/// This is used for rejected requests, failures and empty results alike. If rendering the page
/// itself fails, the message is sent on its own.
pub fn message(status: StatusCode, message: &str) -> HttpResponse {
    let mut context = Context::new();
    context.insert("title", RESULTS_TITLE);
    context.insert("message", message);

    match page(status, "message.html", &context) {
        Ok(response) => response,
        Err(err) => {
            log::warn!("Failed to render message page: {err}");
            html(status, &tera::escape_html(message))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::body::MessageBody;
    use test_log::test;

    fn body(response: HttpResponse) -> Vec<u8> {
        response
            .into_body()
            .try_into_bytes()
            .map(|bytes| bytes.to_vec())
            .unwrap_or_default()
    }

    #[test]
    fn all_templates_compile() {
        let names: Vec<_> = templates().get_template_names().collect();
        for (name, _) in TEMPLATES {
            assert!(names.contains(name), "missing template {name}");
        }
    }

    #[test]
    fn headers() {
        let response = html(StatusCode::OK, "<P>ok");
        assert_eq!(
            Some(CONTENT_TYPE),
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
        );
        assert_eq!(
            Some("en"),
            response
                .headers()
                .get(header::CONTENT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
        );
    }

    #[test]
    fn latin1_body() {
        let body = body(html(StatusCode::OK, "Zürich \u{2603}"));
        assert_eq!(b"Z\xfcrich &#9731;".as_slice(), body.as_slice());
    }

    #[test]
    fn message_page() {
        let response = message(StatusCode::OK, NO_RESULTS);
        assert_eq!(StatusCode::OK, response.status());
        let body = String::from_utf8_lossy(&body(response)).into_owned();
        assert!(body.contains(NO_RESULTS));
        assert!(body.contains(">New Search</A>"));
        assert!(!body.contains("<TABLE"));
    }

    #[test]
    fn form_page() {
        let body = body(index(50).unwrap());
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains(r#"<FORM ACTION="search" METHOD=GET>"#));
        assert!(body.contains(r#"MAXLENGTH=17 SIZE=19 NAME="macadd""#));
        assert!(body.contains(r#"NAME="numresults" VALUE=50>"#));
    }
}
