//! # jipyo-app
//!
//! JIPYO 리포트 봇 바이너리 진입점.
//! 설정 검증, DI 와이어링, `run(today)` 1회 실행.
//!
//! cron 등 외부 스케줄러가 하루 한 번 실행하는 배치 작업이다.
//! 리포트 동작을 바꾸는 CLI 플래그는 없다 (로그 레벨만 조정 가능).

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use jipyo_core::catalog::MetricCatalog;
use jipyo_core::config::AppConfig;
use jipyo_network::slack_client::SlackChatClient;
use jipyo_network::statsig_client::StatsigMetricsClient;
use jipyo_report::dispatcher::ReportDispatcher;
use jipyo_report::fetcher::SnapshotFetcher;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// JIPYO 지표 리포트 봇
///
/// 일간/주간 제품 지표를 집계해 Slack 채널로 전송한다.
#[derive(Parser, Debug)]
#[command(name = "jipyo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "jipyo={0},jipyo_app={0},jipyo_core={0},jipyo_network={0},jipyo_report={0}",
        args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    // 설정 로드 — 필수 환경변수 누락은 치명적, 네트워크 호출 전에 종료
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    info!("JIPYO 리포트 봇 시작");

    // ── 어댑터 생성 (DI 와이어링) ──
    let metrics_api = Arc::new(StatsigMetricsClient::new(&config.statsig)?);
    let notifier = Arc::new(SlackChatClient::new(
        &config.slack,
        config.request_timeout(),
    )?);

    let dispatcher = ReportDispatcher::new(
        MetricCatalog::standard(),
        SnapshotFetcher::new(metrics_api),
        notifier,
        config.report.clone(),
    );

    // 예상치 못한 실패도 프로세스를 조용히 종료시킨다 — 전송 실패는
    // 디스패처 내부에서 로깅되고, run 자체는 패닉하지 않는다.
    let today = chrono::Local::now().date_naive();
    dispatcher.run(today).await;

    // 리포트 유실 여부와 무관하게 항상 정상 종료 코드 — 스케줄러가
    // 전송 실패를 프로세스 실패로 오인하지 않도록 한다.
    info!("JIPYO 리포트 봇 종료");
    Ok(())
}
