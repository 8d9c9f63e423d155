//! # jipyo-report
//!
//! 리포트 생성 엔진.
//!
//! - [`fetcher`] — 카탈로그 전체를 조회해 스냅샷 구성 (실패 지표는 0)
//! - [`delta`] — 기간 대비 증감률 계산
//! - [`table`] — 고정폭 2섹션 테이블 렌더링
//! - [`dispatcher`] — 요일 기반 일간/주간 리포트 생성 및 전송

pub mod delta;
pub mod dispatcher;
pub mod fetcher;
pub mod table;
