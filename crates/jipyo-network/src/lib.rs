//! # jipyo-network
//!
//! 외부 서비스 어댑터 crate.
//!
//! - [`statsig_client`] — Statsig console API 지표 조회 (`MetricsApi` 포트 구현)
//! - [`slack_client`] — Slack Web API 메시지 전송 (`ChatNotifier` 포트 구현)

pub mod slack_client;
pub mod statsig_client;
