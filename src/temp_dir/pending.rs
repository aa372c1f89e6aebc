//! Future returned by [`TempDirectory::extract_async`](super::TempDirectory::extract_async)

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::error::{self, FetchError, Result};
use crate::resource::ResourceHandle;

/// An extraction scheduled on the blocking worker pool
#[derive(Debug)]
#[must_use = "the extraction result is only available by awaiting this future"]
pub struct PendingExtraction {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Running(JoinHandle<Result<Arc<ResourceHandle>>>),
    Failed(Option<FetchError>),
}

impl PendingExtraction {
    pub(super) fn running(handle: JoinHandle<Result<Arc<ResourceHandle>>>) -> Self {
        Self {
            inner: Inner::Running(handle),
        }
    }

    pub(super) fn failed(err: FetchError) -> Self {
        Self {
            inner: Inner::Failed(Some(err)),
        }
    }
}

impl Future for PendingExtraction {
    type Output = Result<Arc<ResourceHandle>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().inner {
            Inner::Running(handle) => Pin::new(handle).poll(cx).map(|joined| {
                joined.unwrap_or_else(|e| {
                    Err(error::io_failed("Extraction task failed", io::Error::other(e)))
                })
            }),
            Inner::Failed(err) => Poll::Ready(Err(err.take().unwrap_or_else(|| {
                error::io_failed(
                    "Extraction polled after completion",
                    io::Error::other("future already resolved"),
                )
            }))),
        }
    }
}
