//! Request dispatching: one raw request in, one complete response out.
//!
//! Every failure mode ends in a well-formed HTTP response; nothing here
//! propagates an error to the connection layer.

use crate::config::Config;
use crate::files::resolver::{PathDecision, PathResolver};
use crate::http::mime;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Handles one complete raw request and produces the response to send.
///
/// Routing is a switch over a closed set: GET goes to the file handler,
/// everything else (including method tokens the parser does not know)
/// gets 405. A request line that cannot be parsed at all gets 400.
pub async fn dispatch(raw: &[u8], cfg: &Config) -> Response {
    let request = match parse_request(raw) {
        Ok(request) => request,
        Err(ParseError::UnknownMethod) => {
            tracing::debug!("unrecognized method token, answering 405");
            return Response::from_status(StatusCode::MethodNotAllowed, cfg);
        }
        Err(error) => {
            tracing::debug!(error = ?error, "malformed request line, answering 400");
            return Response::from_status(StatusCode::BadRequest, cfg);
        }
    };

    tracing::debug!(
        method = ?request.method,
        target = %request.target,
        "dispatching request"
    );

    match request.method {
        Method::GET => handle_get(&request, cfg).await,
        _ => Response::from_status(StatusCode::MethodNotAllowed, cfg),
    }
}

/// Serves a GET request: percent-decode the target, resolve it against
/// the document root, then act on the decision.
///
/// A target that escapes the root is answered with 404, not 403, so
/// probing requests cannot distinguish "outside the root" from "does
/// not exist". The resolver still reports the two cases separately.
async fn handle_get(request: &Request, cfg: &Config) -> Response {
    let target = match urlencoding::decode(&request.target) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            tracing::debug!(target = %request.target, "target decodes to invalid UTF-8");
            return Response::from_status(StatusCode::BadRequest, cfg);
        }
    };

    let resolver = match PathResolver::open(&cfg.document_root).await {
        Ok(resolver) => resolver,
        Err(error) => {
            tracing::warn!(
                error = %error,
                root = %cfg.document_root.display(),
                "document root unavailable"
            );
            return Response::from_status(StatusCode::NotFound, cfg);
        }
    };

    match resolver.resolve(&target).await {
        PathDecision::Forbidden => {
            tracing::debug!(target = %target, "target outside document root");
            Response::from_status(StatusCode::NotFound, cfg)
        }

        PathDecision::NotFound => Response::from_status(StatusCode::NotFound, cfg),

        PathDecision::Redirect(location) => ResponseBuilder::new(StatusCode::MovedPermanently)
            .header("Location", location)
            .build(cfg),

        PathDecision::File(path) => match tokio::fs::read(&path).await {
            Ok(body) => {
                let content_type = mime::guess_content_type(&path).unwrap_or("text/html");
                ResponseBuilder::new(StatusCode::Ok)
                    .header("Content-Type", content_type)
                    .body(body)
                    .build(cfg)
            }
            Err(error) => {
                // Permission problems and read races all collapse to
                // 403; the 500 path stays unused.
                tracing::warn!(error = %error, path = %path.display(), "file read failed");
                Response::from_status(StatusCode::Forbidden, cfg)
            }
        },
    }
}
