//! 지표 스냅샷.
//!
//! 한 리포트 기간(하루 또는 주간 합산)에 대한 지표 관측값 집합.
//! 리포트 1회 실행 범위에서만 살아있고 어디에도 저장되지 않는다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 지표 관측값 — fetch 호출마다 새로 생성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricObservation {
    /// 지표 키
    pub key: String,
    /// 관측값 (실패 시 0)
    pub value: f64,
    /// 리포트 표시명
    pub display_name: String,
}

/// 지표 키 → 관측값 매핑.
///
/// 불변식: fetcher가 생성한 스냅샷은 카탈로그의 모든 키에 대해
/// 정확히 하나의 항목을 가진다 (실패한 지표는 값 0으로 채워진다).
/// 행 순서는 스냅샷이 아니라 카탈로그 선언 순서가 결정하므로
/// 내부 저장은 순서 없는 맵으로 충분하다.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    observations: HashMap<String, MetricObservation>,
}

impl MetricsSnapshot {
    /// 빈 스냅샷 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 관측값 삽입 (같은 키는 덮어씀)
    pub fn insert(&mut self, observation: MetricObservation) {
        self.observations.insert(observation.key.clone(), observation);
    }

    /// 키에 대한 관측값 조회
    pub fn get(&self, key: &str) -> Option<&MetricObservation> {
        self.observations.get(key)
    }

    /// 키에 대한 값 조회, 없으면 0
    pub fn value_of(&self, key: &str) -> f64 {
        self.observations.get(key).map_or(0.0, |o| o.value)
    }

    /// 항목 수
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// 비어있는지 여부
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
