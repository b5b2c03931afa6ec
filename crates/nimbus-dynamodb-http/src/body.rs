//! DynamoDB HTTP response body type.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;

/// Body for DynamoDB JSON responses.
///
/// All DynamoDB responses are either buffered JSON or empty.
#[derive(Debug, Default)]
pub enum JsonBody {
    /// A fully buffered JSON payload.
    Buffered(Bytes),
    /// An empty body.
    #[default]
    Empty,
}

impl JsonBody {
    /// Create a body from serialized JSON.
    #[must_use]
    pub fn from_json(json: Vec<u8>) -> Self {
        Self::Buffered(Bytes::from(json))
    }

    /// The buffered bytes, empty for [`JsonBody::Empty`].
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        match self {
            Self::Buffered(bytes) => bytes,
            Self::Empty => Bytes::new(),
        }
    }

    /// Convert a response carrying this body into one carrying plain bytes.
    #[must_use]
    pub fn buffer(response: http::Response<Self>) -> http::Response<Bytes> {
        response.map(Self::into_bytes)
    }
}

impl http_body::Body for JsonBody {
    type Data = Bytes;
    type Error = std::convert::Infallible;

    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<http_body::Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        match std::mem::take(this) {
            Self::Buffered(bytes) if !bytes.is_empty() => {
                Poll::Ready(Some(Ok(http_body::Frame::data(bytes))))
            }
            Self::Buffered(_) | Self::Empty => Poll::Ready(None),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            Self::Buffered(bytes) => bytes.is_empty(),
            Self::Empty => true,
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self {
            Self::Buffered(bytes) => http_body::SizeHint::with_exact(bytes.len() as u64),
            Self::Empty => http_body::SizeHint::with_exact(0),
        }
    }
}
