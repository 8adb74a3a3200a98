// 错误分类模块 - 将底层网络错误转换为可读的错误类型
use reqwest::Error;

/// Category of a transport-level failure talking to the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connect,
    Decode,
    Body,
    Unknown,
}

impl TransportKind {
    /// 错误类型, used in logs and in the `type` field of error responses
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Timeout => "timeout_error",
            TransportKind::Connect => "connection_error",
            TransportKind::Decode => "decode_error",
            TransportKind::Body => "body_error",
            TransportKind::Unknown => "unknown_error",
        }
    }

    /// Fallback message safe to show to API clients.
    pub fn user_message(&self) -> &'static str {
        match self {
            TransportKind::Timeout => "Upstream request timed out",
            TransportKind::Connect => "Could not connect to the upstream provider",
            TransportKind::Decode => "Upstream response could not be decoded",
            TransportKind::Body => "Upstream response body was interrupted",
            TransportKind::Unknown => "Unknown error talking to the upstream provider",
        }
    }
}

/// 分类 reqwest 错误
pub fn classify_transport_error(error: &Error) -> TransportKind {
    if error.is_timeout() {
        TransportKind::Timeout
    } else if error.is_connect() {
        TransportKind::Connect
    } else if error.is_decode() {
        TransportKind::Decode
    } else if error.is_body() {
        TransportKind::Body
    } else {
        TransportKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_refused_connection_is_connect_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap()
            .get(format!("http://{}/", addr))
            .send()
            .await
            .unwrap_err();
        assert_eq!(classify_transport_error(&err), TransportKind::Connect);
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(TransportKind::Timeout.as_str(), "timeout_error");
        assert_eq!(TransportKind::Connect.as_str(), "connection_error");
        assert!(!TransportKind::Unknown.user_message().is_empty());
    }
}
