//! Content negotiation between JSON and XML representations.
//!
//! The `Accept` header is inspected before the handler body runs: a request
//! that accepts neither JSON nor XML is answered with `406 Not Acceptable`
//! and an empty body.
//!
//! | Accept                                                  | Format |
//! |---------------------------------------------------------|--------|
//! | absent, `*/*`, `application/*`                          | JSON   |
//! | `application/json`, `text/json`, `application/problem+json` | JSON |
//! | `application/xml`, `text/xml`                           | XML    |
//!
//! Quality values are honored and `q=0` excludes a range. Among equal
//! qualities the first listed range wins.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::dto::{AuthorDto, CourseDto};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    fn from_media_range(range: &str) -> Option<Self> {
        match range {
            "*/*" | "application/*" | "application/json" | "text/json"
            | "application/problem+json" => Some(Format::Json),
            "application/xml" | "text/xml" => Some(Format::Xml),
            _ => None,
        }
    }
}

/// Picks the response format for an `Accept` header value.
///
/// Returns `None` when no acceptable format can be produced.
pub fn negotiate(accept: Option<&str>) -> Option<Format> {
    let Some(accept) = accept.map(str::trim).filter(|a| !a.is_empty()) else {
        return Some(Format::Json);
    };

    let mut best: Option<(f32, Format)> = None;

    for range in accept.split(',') {
        let mut params = range.split(';');
        let media = params.next().unwrap_or_default().trim().to_ascii_lowercase();

        let quality = params
            .filter_map(|p| {
                let (key, value) = p.split_once('=')?;
                key.trim()
                    .eq_ignore_ascii_case("q")
                    .then(|| value.trim().parse::<f32>().ok())
                    .flatten()
            })
            .next()
            .unwrap_or(1.0);

        if quality <= 0.0 {
            continue;
        }

        let Some(format) = Format::from_media_range(&media) else {
            continue;
        };

        if best.is_none_or(|(q, _)| quality > q) {
            best = Some((quality, format));
        }
    }

    best.map(|(_, format)| format)
}

/// Extracts the negotiated response format, rejecting with `406` when the
/// client accepts nothing this API produces.
#[derive(Debug, Clone, Copy)]
pub struct AcceptedFormat(pub Format);

impl<S> FromRequestParts<S> for AcceptedFormat
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let accept = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok());

        match negotiate(accept) {
            Some(format) => Ok(AcceptedFormat(format)),
            None => {
                tracing::debug!(?accept, "no acceptable representation");
                Err(AppError::NotAcceptable)
            }
        }
    }
}

/// A resource that has both a JSON and an XML representation.
pub trait Representation: Serialize {
    fn to_xml(&self) -> Result<String, AppError>;
}

fn xml_element<T: Serialize>(root: &str, value: &T) -> Result<String, AppError> {
    quick_xml::se::to_string_with_root(root, value).map_err(|e| {
        AppError::internal(
            "Failed to serialize XML representation",
            json!({ "root": root, "reason": e.to_string() }),
        )
    })
}

fn xml_list<T: Serialize>(root: &str, items: &[T]) -> Result<String, AppError> {
    let body = items
        .iter()
        .map(|item| xml_element(root, item))
        .collect::<Result<String, _>>()?;

    Ok(format!("<ArrayOf{root}>{body}</ArrayOf{root}>"))
}

impl Representation for AuthorDto {
    fn to_xml(&self) -> Result<String, AppError> {
        xml_element("AuthorDto", self)
    }
}

impl Representation for Vec<AuthorDto> {
    fn to_xml(&self) -> Result<String, AppError> {
        xml_list("AuthorDto", self)
    }
}

/// XML shape of a course. An absent description is left out so it stays
/// distinguishable from an empty one.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CourseXml<'a> {
    id: Uuid,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    author_id: Uuid,
}

impl<'a> From<&'a CourseDto> for CourseXml<'a> {
    fn from(dto: &'a CourseDto) -> Self {
        Self {
            id: dto.id,
            title: &dto.title,
            description: dto.description.as_deref(),
            author_id: dto.author_id,
        }
    }
}

impl Representation for CourseDto {
    fn to_xml(&self) -> Result<String, AppError> {
        xml_element("CourseDto", &CourseXml::from(self))
    }
}

impl Representation for Vec<CourseDto> {
    fn to_xml(&self) -> Result<String, AppError> {
        let items: Vec<CourseXml<'_>> = self.iter().map(CourseXml::from).collect();
        xml_list("CourseDto", &items)
    }
}

/// Response body rendered in the negotiated format.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(AcceptedFormat(format): AcceptedFormat) -> Negotiated<AuthorDto> {
///     Negotiated(format, dto)
/// }
/// ```
pub struct Negotiated<T>(pub Format, pub T);

impl<T: Representation> IntoResponse for Negotiated<T> {
    fn into_response(self) -> Response {
        let Negotiated(format, body) = self;

        match format {
            Format::Json => Json(body).into_response(),
            Format::Xml => match body.to_xml() {
                Ok(xml) => (
                    [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
                    xml,
                )
                    .into_response(),
                Err(e) => e.into_response(),
            },
        }
    }
}
