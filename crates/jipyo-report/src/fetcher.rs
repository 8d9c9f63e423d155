//! 스냅샷 수집기.
//!
//! 카탈로그의 지표를 순차로 조회해 스냅샷을 만든다. 지표 단위 실패는
//! 여기서 0으로 축약된다 — 부분 데이터가 리포트 실패보다 낫다는
//! best-effort 정책이며, 스냅샷 전체를 중단시키는 실패는 없다.

use std::sync::Arc;

use chrono::NaiveDate;
use jipyo_core::catalog::MetricCatalog;
use jipyo_core::ports::metrics_api::MetricsApi;
use jipyo_core::snapshot::{MetricObservation, MetricsSnapshot};
use tracing::warn;

/// 스냅샷 수집기
pub struct SnapshotFetcher {
    api: Arc<dyn MetricsApi>,
}

impl SnapshotFetcher {
    /// 새 수집기 생성
    pub fn new(api: Arc<dyn MetricsApi>) -> Self {
        Self { api }
    }

    /// 하루치 스냅샷 수집.
    ///
    /// 반환 스냅샷은 카탈로그의 모든 키에 대해 정확히 하나의 항목을 가진다.
    pub async fn snapshot(&self, catalog: &MetricCatalog, date: NaiveDate) -> MetricsSnapshot {
        let mut snapshot = MetricsSnapshot::new();
        for def in catalog.definitions() {
            let value = match self.api.overall_value(def.event_id, date).await {
                Ok(v) => v,
                Err(e) => {
                    warn!(metric = def.key, %date, "지표 조회 실패, 0으로 대체: {e}");
                    0.0
                }
            };
            snapshot.insert(MetricObservation {
                key: def.key.to_string(),
                value,
                display_name: def.display_name.to_string(),
            });
        }
        snapshot
    }

    /// 날짜 범위(양끝 포함) 합산 스냅샷 수집.
    ///
    /// 지표별로 범위 내 하루씩 조회해 합산한다. 실패한 날은 그 날만
    /// 0으로 처리한다. 일간 경로와 같은 `MetricsApi` 인스턴스를 쓴다.
    pub async fn snapshot_range(
        &self,
        catalog: &MetricCatalog,
        start: NaiveDate,
        end: NaiveDate,
    ) -> MetricsSnapshot {
        let mut snapshot = MetricsSnapshot::new();
        for def in catalog.definitions() {
            let mut total = 0.0;
            let mut date = start;
            while date <= end {
                match self.api.overall_value(def.event_id, date).await {
                    Ok(v) => total += v,
                    Err(e) => {
                        warn!(metric = def.key, %date, "지표 조회 실패, 해당 일자 0 처리: {e}");
                    }
                }
                match date.succ_opt() {
                    Some(next) => date = next,
                    None => break,
                }
            }
            snapshot.insert(MetricObservation {
                key: def.key.to_string(),
                value: total,
                display_name: def.display_name.to_string(),
            });
        }
        snapshot
    }
}
