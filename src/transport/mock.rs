//! 테스트용 메모리 내 transport
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::{AppResult, CredentialError};
use crate::transport::{HttpTransport, PostRequest, RawResponse};

enum Behavior {
    Queue(Mutex<VecDeque<AppResult<RawResponse>>>),
    Responder(Box<dyn Fn(&PostRequest) -> AppResult<RawResponse> + Send + Sync>),
    Hang,
}

/// 받은 요청을 기록하고 미리 정해진 응답을 돌려주는 transport
pub(crate) struct MockTransport {
    behavior: Behavior,
    requests: Mutex<Vec<PostRequest>>,
}

impl MockTransport {
    /// 매 호출마다 같은 응답
    pub(crate) fn with_response(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::with_responder(move |_| Ok(RawResponse { status, body: body.clone() }))
    }

    /// 요청을 보고 응답을 결정
    pub(crate) fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&PostRequest) -> AppResult<RawResponse> + Send + Sync + 'static,
    {
        Self::new(Behavior::Responder(Box::new(responder)))
    }

    /// 순서대로 하나씩 소비되는 응답 목록
    pub(crate) fn with_queue(responses: Vec<AppResult<RawResponse>>) -> Self {
        Self::new(Behavior::Queue(Mutex::new(responses.into())))
    }

    /// 응답을 받지 못한 transport 실패
    pub(crate) fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::with_responder(move |_| Err(CredentialError::Transport(message.clone())))
    }

    /// 영원히 응답하지 않는 서버
    pub(crate) fn hanging() -> Self {
        Self::new(Behavior::Hang)
    }

    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Option<PostRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post(&self, request: PostRequest) -> AppResult<RawResponse> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.behavior {
            Behavior::Queue(queue) => queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(CredentialError::Transport("mock queue exhausted".to_string()))),
            Behavior::Responder(responder) => responder(&request),
            Behavior::Hang => std::future::pending().await,
        }
    }
}
