//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use domeneshop_client::{
    ApiRequest, ApiResponse, Credentials, DnsRecord, DomeneshopClient, DomeneshopError,
    HttpTransport, Result,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Transport that replays canned responses and records every request.
///
/// When the queue is empty it answers with `fallback`.
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    fallback: ApiResponse,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    /// A transport answering every request with `status` and `body`.
    pub fn always(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: ApiResponse::new(status, body),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A transport replaying `responses` in order, then answering 500.
    pub fn sequence(responses: Vec<Result<ApiResponse>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            fallback: ApiResponse::new(500, "no more canned responses"),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// The only request sent; fails the test if there were zero or several.
    pub fn single_request(&self) -> ApiRequest {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.remove(0)
    }
}

/// A failed assertion in another test thread must not hide the recorded state.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        lock(&self.requests).push(request);
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}

/// Client wired to `transport`.
pub fn client_with(transport: &Arc<MockTransport>) -> DomeneshopClient {
    DomeneshopClient::with_transport(transport.clone())
}

/// Assert `result` failed with an unexpected-status error carrying `status`.
pub fn assert_status_error<T: std::fmt::Debug>(result: Result<T>, status: u16) {
    match result {
        Err(ref e @ DomeneshopError::UnexpectedStatus { .. }) => {
            assert_eq!(e.status_code(), Some(status), "wrong status in {e}");
        }
        other => panic!("expected UnexpectedStatus({status}), got {other:?}"),
    }
}

pub const TWO_DOMAINS_JSON: &str = r#"[
    {
        "id": 1,
        "domain": "example.no",
        "expiry_date": "2030-08-21",
        "registered_date": "2019-08-21",
        "renew": true,
        "registrant": "Ola Nordmann",
        "status": "active",
        "nameservers": ["ns1.hyp.net", "ns2.hyp.net", "ns3.hyp.net"],
        "services": {"registrar": true, "dns": true, "email": true, "webhotel": "none"}
    },
    {
        "id": 2,
        "domain": "example.com",
        "expiry_date": "2027-01-02",
        "registered_date": "2020-01-02",
        "renew": false,
        "registrant": "Kari Nordmann",
        "status": "active",
        "nameservers": ["ns1.example.com"],
        "services": {"registrar": false, "dns": true, "email": false, "webhotel": "small"}
    }
]"#;

pub const RECORDS_JSON: &str = r#"[
    {"id": 11, "host": "@", "ttl": 3600, "type": "A", "data": "192.0.2.1"},
    {"id": 12, "host": "@", "ttl": 3600, "type": "MX", "data": "mx.example.no", "priority": "10"},
    {"id": 13, "host": "_sip._tcp", "ttl": 3600, "type": "SRV", "data": "sip.example.no", "priority": "10", "weight": "5", "port": "5060"}
]"#;

pub fn sample_a_record() -> DnsRecord {
    DnsRecord::new("www", "A", "192.0.2.1").with_ttl(3600)
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Live-API client from the environment, if credentials are present.
pub fn live_client() -> Option<DomeneshopClient> {
    let credentials = Credentials::from_env().ok()?;
    DomeneshopClient::new(credentials).ok()
}
