//! 지표 카탈로그.
//!
//! 짧은 지표 키를 외부 이벤트 ID와 표시명에 매핑하는 정적 테이블.
//! 프로세스 시작 시 한 번 생성해 값으로 전달한다 (전역 상태 없음).
//! 카탈로그 선언 순서가 곧 리포트 행 순서다.

use serde::{Deserialize, Serialize};

/// 리포트 섹션 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricSection {
    /// 사용자 지표 (가입, 온보딩, 결제 전환)
    User,
    /// 제품 사용량 지표 (시트 생성/편집/공유 등)
    Usage,
}

impl MetricSection {
    /// 테이블 섹션 순서 — User 먼저, Usage 다음
    pub const ORDER: [MetricSection; 2] = [MetricSection::User, MetricSection::Usage];
}

/// 지표 정의 — 시작 시 한 번 정의되는 불변 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDefinition {
    /// 내부 지표 키
    pub key: &'static str,
    /// 분석 API 이벤트 ID
    pub event_id: &'static str,
    /// 리포트 표시명
    pub display_name: &'static str,
    /// 소속 섹션
    pub section: MetricSection,
}

/// 지표 카탈로그 — `MetricDefinition`의 선언 순서 보존 목록
#[derive(Debug, Clone)]
pub struct MetricCatalog {
    definitions: Vec<MetricDefinition>,
}

impl MetricCatalog {
    /// 임의 정의 목록으로 카탈로그 생성 (테스트용 축소 카탈로그 포함)
    pub fn new(definitions: Vec<MetricDefinition>) -> Self {
        Self { definitions }
    }

    /// 표준 카탈로그 — 제품 지표 10종
    pub fn standard() -> Self {
        use MetricSection::{Usage, User};

        Self::new(vec![
            // 사용자 지표
            def("new_accounts", "new_accounts::event_count", "New Accounts Created", User),
            def("completed_onboarding", "onboarding_completed::event_count", "Completed Onboarding", User),
            def("new_paying_users", "new_paying_users::event_count", "New Paying Users", User),
            def("new_successful_users", "new_successful_users::event_count", "New Successful Users", User),
            // 사용량 지표
            def("sheet_created", "sheet_created::event_count", "Sheets Created", Usage),
            def("template_opened", "template_opened::event_count", "Templates Opened", Usage),
            def("sheet_edit", "sheet_edit::event_count", "Sheet Edits", Usage),
            def("sheet_shared", "sheet_shared::event_count", "Sheets Shared", Usage),
            def("cell_enriched", "cell_completed::event_count", "Cells Enriched", Usage),
            def("enrich_clicked", "cells_requested::event_count", "Enrich Clicked", Usage),
        ])
    }

    /// 전체 정의 (선언 순서)
    pub fn definitions(&self) -> &[MetricDefinition] {
        &self.definitions
    }

    /// 특정 섹션의 정의만 선언 순서대로 반환
    pub fn section(
        &self,
        section: MetricSection,
    ) -> impl Iterator<Item = &MetricDefinition> {
        self.definitions.iter().filter(move |d| d.section == section)
    }
}

fn def(
    key: &'static str,
    event_id: &'static str,
    display_name: &'static str,
    section: MetricSection,
) -> MetricDefinition {
    MetricDefinition {
        key,
        event_id,
        display_name,
        section,
    }
}
