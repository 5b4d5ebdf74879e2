//! Recording transport used by unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use crate::client::{BoxFuture, HttpTransport, IterableClient, TransportError};
use crate::transport::{HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    response_status: u16,
    response_body: String,
    failure: Option<String>,
}

impl FakeTransport {
    pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                response_status,
                response_body: response_body.into(),
                failure: None,
            })),
        }
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        let transport = Self::new(0, "");
        transport.state.lock().unwrap().failure = Some(message.into());
        transport
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub(crate) fn client(&self) -> IterableClient {
        IterableClient::from_transport(self.clone())
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request);
            if let Some(message) = state.failure.clone() {
                return Err(Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, message))
                    as TransportError);
            }
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        })
    }
}
