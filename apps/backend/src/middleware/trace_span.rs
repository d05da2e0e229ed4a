//! Per-request tracing span middleware.
//!
//! Opens a `request` span carrying `trace_id`, `method` and `path`. Every
//! log emitted while the request is handled inherits these fields.
//! `user_id` is filled in once the caller is authenticated and `status`
//! when the response is ready.
//!
//! Ordering: this middleware reads the `TraceId` that `RequestTrace`
//! stores in request extensions, so it must sit inside `RequestTrace`:
//!
//! ```text
//! App::new()
//!     .wrap(TraceSpan)        // innermost: reads trace_id, opens the span
//!     .wrap(RequestTrace)     // generates + stores trace_id, sets header
//!     .wrap(StructuredLogger) // outermost: one line per request
//! ```

use std::future::{ready, Ready};
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use actix_web::HttpMessage;
use futures_util::future::LocalBoxFuture;
use tracing::{field, info_span, Instrument, Span};

use super::request_trace::TraceId;

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
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
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "missing-trace-id".to_string());

        let method = req.method().clone();
        let path = req.path().to_string();

        let span: Span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %method,
            path = %path,
            user_id = field::Empty,
            status = field::Empty,
        );

        // Routing happens inside `call`, before the future is first polled.
        let fut = {
            let _entered = span.enter();
            self.service.call(req)
        };

        let fut = async move {
            let res = fut.await?;
            Span::current().record("status", res.status().as_u16());
            Ok::<_, Error>(res)
        }
        .instrument(span);

        Box::pin(fut)
    }
}
