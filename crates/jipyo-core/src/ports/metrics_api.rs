//! 분석 API 포트.
//!
//! 구현: `jipyo-network` crate (reqwest)

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::CoreError;

/// 분석 API 클라이언트
///
/// 이벤트 ID와 날짜로 집계(overall) 값 하나를 조회한다.
/// 세그먼트별 데이터 포인트 중 `unit_type == "overall"`인 값을 선택하며,
/// overall 포인트가 없는 정상 응답은 0으로 취급한다 (에러 아님).
#[async_trait]
pub trait MetricsApi: Send + Sync {
    /// 해당 날짜의 overall 집계값 조회
    async fn overall_value(&self, event_id: &str, date: NaiveDate) -> Result<f64, CoreError>;
}
