//! # jipyo-core
//!
//! JIPYO 리포트 봇의 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 어댑터 crate(jipyo-network)와 리포트 엔진(jipyo-report)이 공유하는
//! 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`catalog`] — 지표 카탈로그 (키 → 이벤트 ID/표시명 매핑)
//! - [`snapshot`] — 리포트 1회 실행 범위의 지표 관측값 집합
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 환경변수 기반 설정 로드

pub mod catalog;
pub mod config;
pub mod error;
pub mod ports;
pub mod snapshot;
