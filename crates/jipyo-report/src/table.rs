//! 고정폭 테이블 렌더링.
//!
//! 헤더, 구분선, 사용자 지표 섹션, 구분선, 사용량 지표 섹션 순서로
//! monospace 정렬 테이블을 만든다. 행 순서는 스냅샷 삽입 순서가 아니라
//! 카탈로그 선언 순서를 따르므로 출력이 항상 결정적이다.

use jipyo_core::catalog::{MetricCatalog, MetricSection};
use jipyo_core::snapshot::MetricsSnapshot;

use crate::delta::percent_change;

/// 이름 열 너비
const NAME_WIDTH: usize = 25;
/// 값 열 너비
const VALUE_WIDTH: usize = 12;
/// 증감률 열 너비
const DELTA_WIDTH: usize = 9;

/// 섹션 사이 구분선
fn separator() -> String {
    format!(
        "{}|{}|{}",
        "-".repeat(NAME_WIDTH + 1),
        "-".repeat(VALUE_WIDTH + 2),
        "-".repeat(DELTA_WIDTH + 1)
    )
}

/// 값 표기 — 정수 값은 소수부 없이 표기
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// 현재/이전 스냅샷을 2섹션 테이블로 렌더링.
///
/// `value_label`은 값 열 헤더 (예: "Daily Value", "Weekly Total").
pub fn render_table(
    catalog: &MetricCatalog,
    current: &MetricsSnapshot,
    previous: &MetricsSnapshot,
    value_label: &str,
) -> String {
    let mut lines = Vec::with_capacity(catalog.definitions().len() + 3);
    lines.push(format!(
        "{:<NAME_WIDTH$} | {:<VALUE_WIDTH$} | % Change",
        "Metric", value_label
    ));
    lines.push(separator());

    for (i, section) in MetricSection::ORDER.iter().enumerate() {
        if i > 0 {
            lines.push(separator());
        }
        for def in catalog.section(*section) {
            let value = current.value_of(def.key);
            let previous_value = previous.value_of(def.key);
            let delta = percent_change(value, previous_value);
            lines.push(format!(
                "{:<NAME_WIDTH$} | {:<VALUE_WIDTH$} | {:>DELTA_WIDTH$}",
                def.display_name,
                format_value(value),
                delta
            ));
        }
    }

    lines.join("\n")
}
