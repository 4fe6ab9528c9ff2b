//! Tracing middleware attaching a request-scoped trace identifier.
//!
//! Every request runs inside [`TraceId::scope`] with a fresh identifier, and
//! the response carries it back in the `trace-id` header. A request span
//! records method, path, status, and the identifier so log lines and error
//! payloads share one correlation key.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, error, info_span};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware factory; wrap an `App` with it.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service produced by [`Trace`]. Not meant to be used directly.
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let span = info_span!(
            "request",
            method = %req.method(),
            path = %req.path(),
            trace_id = %trace_id,
            status = tracing::field::Empty,
        );
        let fut = self.service.call(req);
        let request_span = span.clone();

        Box::pin(
            TraceId::scope(trace_id, async move {
                let mut res = fut.await?;
                request_span.record("status", res.status().as_u16());
                match HeaderValue::from_str(&trace_id.to_string()) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                    }
                    Err(error) => {
                        error!(%error, %trace_id, "failed to encode trace identifier header");
                    }
                }
                Ok(res)
            })
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error as DomainError;
    use actix_web::{App, HttpResponse, test, web};

    #[actix_web::test]
    async fn adds_trace_id_header() {
        let app = test::init_service(
            App::new()
                .wrap(Trace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("ascii header");
        assert!(header.parse::<TraceId>().is_ok());
    }

    #[actix_web::test]
    async fn handler_sees_the_same_trace_id_as_the_header() {
        let app = test::init_service(App::new().wrap(Trace).route(
            "/",
            web::get().to(|| async {
                let id = TraceId::current().expect("trace id in scope");
                HttpResponse::Ok().body(id.to_string())
            }),
        ))
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("ascii header")
            .to_owned();

        let body = test::read_body(res).await;
        assert_eq!(std::str::from_utf8(&body).expect("utf8 body"), header);
    }

    #[actix_web::test]
    async fn error_payloads_carry_the_request_trace_id() {
        let app = test::init_service(App::new().wrap(Trace).route(
            "/",
            web::get().to(|| async {
                Err::<HttpResponse, _>(DomainError::not_found("user not found"))
            }),
        ))
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("ascii header")
            .to_owned();

        let body: DomainError = test::read_body_json(res).await;
        assert_eq!(body.trace_id(), Some(header.as_str()));
    }

    #[actix_web::test]
    async fn distinct_requests_get_distinct_ids() {
        let app = test::init_service(
            App::new()
                .wrap(Trace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let mut seen = Vec::new();
        for _ in 0..2 {
            let res =
                test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
            seen.push(
                res.headers()
                    .get(TRACE_ID_HEADER)
                    .expect("trace id header")
                    .clone(),
            );
        }
        assert_ne!(seen[0], seen[1]);
    }
}
