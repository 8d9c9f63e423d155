//! 채팅 알림 포트.
//!
//! 구현: `jipyo-network` crate (reqwest, Slack Web API)

use async_trait::async_trait;

use crate::error::CoreError;

/// 채팅 메시지 전송 클라이언트
///
/// 대상 채널은 어댑터 생성 시 주입되고, 호출자는 본문만 넘긴다.
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    /// 채널에 텍스트 메시지 전송
    async fn post_message(&self, text: &str) -> Result<(), CoreError>;
}
