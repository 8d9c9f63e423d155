//! 환경변수 기반 애플리케이션 설정.
//!
//! 필수 시크릿 3종(봇 토큰, 채널 ID, 분석 API 키)은 시작 시 한 번에
//! 검증하며, 하나라도 없으면 누락된 이름을 전부 담은 에러를 반환한다.
//! 이후 어떤 리포트 로직도 실행되지 않는다.

use std::time::Duration;

use crate::error::CoreError;

/// 필수 환경변수 이름
pub const ENV_SLACK_BOT_TOKEN: &str = "SLACK_BOT_TOKEN";
pub const ENV_SLACK_CHANNEL_ID: &str = "SLACK_CHANNEL_ID";
pub const ENV_STATSIG_API_KEY: &str = "STATSIG_API_KEY";

/// 선택 환경변수 이름
pub const ENV_STATSIG_BASE_URL: &str = "STATSIG_BASE_URL";
pub const ENV_SLACK_BASE_URL: &str = "SLACK_BASE_URL";
pub const ENV_STATSIG_TIMEOUT_MS: &str = "STATSIG_TIMEOUT_MS";
pub const ENV_REPORT_TITLE: &str = "REPORT_TITLE";

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Slack 전송 설정
    pub slack: SlackConfig,
    /// 분석 API(Statsig) 설정
    pub statsig: StatsigConfig,
    /// 리포트 설정
    pub report: ReportConfig,
}

/// Slack 전송 설정
#[derive(Debug, Clone)]
pub struct SlackConfig {
    /// 봇 토큰 (Bearer 인증)
    pub bot_token: String,
    /// 대상 채널 ID
    pub channel_id: String,
    /// Slack Web API 기본 URL
    pub base_url: String,
}

/// 분석 API 설정.
///
/// 일간/주간 경로 모두 이 설정 하나를 사용한다. 지표별 개별
/// base URL/키 같은 형태는 두지 않는다.
#[derive(Debug, Clone)]
pub struct StatsigConfig {
    /// 정적 API 키 (`STATSIG-API-KEY` 헤더로 전달)
    pub api_key: String,
    /// 지표 조회 엔드포인트 URL
    pub base_url: String,
    /// 요청 타임아웃 (밀리초)
    pub request_timeout_ms: u64,
}

/// 리포트 설정
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// 리포트 제목에 들어가는 제품명
    pub title: String,
    /// 주간 리포트를 보내는 요일
    pub weekly_report_day: chrono::Weekday,
}

impl AppConfig {
    /// 환경변수에서 설정 로드.
    ///
    /// 필수 변수는 빈 문자열도 누락으로 취급한다.
    pub fn from_env() -> Result<Self, CoreError> {
        let mut missing = Vec::new();
        let mut require = |name: &str| match std::env::var(name) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => {
                missing.push(name.to_string());
                None
            }
        };

        let bot_token = require(ENV_SLACK_BOT_TOKEN);
        let channel_id = require(ENV_SLACK_CHANNEL_ID);
        let api_key = require(ENV_STATSIG_API_KEY);

        if !missing.is_empty() {
            return Err(CoreError::MissingEnv { names: missing });
        }

        let request_timeout_ms = match std::env::var(ENV_STATSIG_TIMEOUT_MS) {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                CoreError::Config(format!("{ENV_STATSIG_TIMEOUT_MS} 값이 숫자가 아님: {raw}"))
            })?,
            Err(_) => default_request_timeout_ms(),
        };

        Ok(Self {
            slack: SlackConfig {
                // missing.is_empty() 검사 후이므로 모두 Some
                bot_token: bot_token.unwrap_or_default(),
                channel_id: channel_id.unwrap_or_default(),
                base_url: std::env::var(ENV_SLACK_BASE_URL)
                    .unwrap_or_else(|_| default_slack_base_url()),
            },
            statsig: StatsigConfig {
                api_key: api_key.unwrap_or_default(),
                base_url: std::env::var(ENV_STATSIG_BASE_URL)
                    .unwrap_or_else(|_| default_statsig_base_url()),
                request_timeout_ms,
            },
            report: ReportConfig {
                title: std::env::var(ENV_REPORT_TITLE)
                    .unwrap_or_else(|_| default_report_title()),
                weekly_report_day: chrono::Weekday::Fri,
            },
        })
    }

    /// 분석 API 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.statsig.request_timeout_ms)
    }
}

fn default_statsig_base_url() -> String {
    "https://statsigapi.net/console/v1/metrics".to_string()
}

fn default_slack_base_url() -> String {
    "https://slack.com/api".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_report_title() -> String {
    "Jipyo".to_string()
}
