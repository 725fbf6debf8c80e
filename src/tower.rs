//! Tower integration for status-rail.
//!
//! This module provides a Tower `Layer` and `Service` that turn whatever error an inner
//! service returns into a [`Status`], recovering the code through the error's source chain.
//! It is the response-serialization edge: handlers below it return composed errors, the
//! layer hands transports a code, a message, and details.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! status-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use status_rail::tower::StatusLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(StatusLayer::new())
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::types::alloc_type::BoxError;
use crate::types::Status;

/// A Tower [`Layer`] that maps service errors to [`Status`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StatusLayer {
    _priv: (),
}

impl StatusLayer {
    /// Creates a new `StatusLayer`.
    #[inline]
    pub const fn new() -> Self {
        Self { _priv: () }
    }
}

impl<S> Layer<S> for StatusLayer {
    type Service = StatusService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        StatusService::new(inner)
    }
}

/// A Tower [`Service`] whose errors are [`Status`] values.
///
/// Created by [`StatusLayer`] or [`ServiceStatusExt::map_err_to_status`].
#[derive(Clone, Debug)]
pub struct StatusService<S> {
    inner: S,
}

impl<S> StatusService<S> {
    /// Creates a new `StatusService` wrapping the given service.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner service.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for StatusService<S>
where
    S: Service<Request>,
    S::Error: Into<BoxError>,
{
    type Response = S::Response;
    type Error = Status;
    type Future = StatusFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(to_status)
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        StatusFuture::new(self.inner.call(request))
    }
}

pin_project! {
    /// Future returned by [`StatusService`].
    ///
    /// Wraps the inner service's future and converts its error into a [`Status`].
    #[must_use = "futures do nothing unless polled"]
    pub struct StatusFuture<F> {
        #[pin]
        inner: F,
        done: bool,
    }
}

impl<F> StatusFuture<F> {
    #[inline]
    fn new(inner: F) -> Self {
        Self { inner, done: false }
    }
}

impl<F, T, E> Future for StatusFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = Result<T, Status>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(output) => {
                *this.done = true;
                Poll::Ready(output.map_err(to_status))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T, E> FusedFuture for StatusFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.done || self.inner.is_terminated()
    }
}

fn to_status<E: Into<BoxError>>(error: E) -> Status {
    let error: BoxError = error.into();
    let status = Status::from_error(&*error);

    #[cfg(feature = "tracing")]
    tracing::debug!(code = %status.code(), error = %error, "service error mapped to status");

    status
}

/// Extension trait for easily wrapping services so their errors become [`Status`] values.
pub trait ServiceStatusExt<Request>: Service<Request> + Sized {
    /// Wraps this service so every error is converted with [`Status::from_error`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use status_rail::tower::ServiceStatusExt;
    ///
    /// let wrapped = my_service.map_err_to_status();
    /// ```
    fn map_err_to_status(self) -> StatusService<Self>
    where
        Self::Error: Into<BoxError>,
    {
        StatusService::new(self)
    }
}

impl<S, Request> ServiceStatusExt<Request> for S where S: Service<Request> {}
