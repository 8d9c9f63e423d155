//! JIPYO 핵심 에러 타입.
//!
//! 어댑터 crate는 네트워크/파싱 실패를 `CoreError`로 매핑해 반환하고,
//! 지표 단위 실패를 0으로 축약하는 정책은 fetcher 경계에서 적용한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 설정, 네트워크, 직렬화, 전송 등 리포트 실행 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 필수 환경변수 누락 — 시작 시 치명적, 다운스트림 실행 전 종료
    #[error("필수 환경변수 누락: {}", .names.join(", "))]
    MissingEnv {
        /// 누락된 환경변수 이름 목록
        names: Vec<String>,
    },

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 외부 API가 비정상 상태 코드를 반환
    #[error("API 에러 ({status}): {message}")]
    Api {
        /// HTTP 상태 코드
        status: u16,
        /// 응답 본문 (또는 요약)
        message: String,
    },

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 채팅 메시지 전송 실패 (로깅 후 무시, 재시도 없음)
    #[error("메시지 전송 실패: {0}")]
    Delivery(String),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_lists_all_names() {
        let err = CoreError::MissingEnv {
            names: vec![
                "SLACK_BOT_TOKEN".to_string(),
                "STATSIG_API_KEY".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("SLACK_BOT_TOKEN"));
        assert!(msg.contains("STATSIG_API_KEY"));
    }

    #[test]
    fn api_error_includes_status() {
        let err = CoreError::Api {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
    }
}
