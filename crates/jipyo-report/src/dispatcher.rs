//! 리포트 디스패처.
//!
//! 요일에 따라 일간/주간 리포트를 생성해 채팅 채널로 전송한다.
//! 실행마다 독립된 배치 작업이며 실행 간 상태는 없다.
//! 전송 실패는 로깅 후 무시한다 — 해당 회차 리포트는 유실되고
//! 재시도하지 않는다.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};
use jipyo_core::catalog::MetricCatalog;
use jipyo_core::config::ReportConfig;
use jipyo_core::ports::notifier::ChatNotifier;
use tracing::{error, info};

use crate::fetcher::SnapshotFetcher;
use crate::table::render_table;

/// 리포트 디스패처
pub struct ReportDispatcher {
    catalog: MetricCatalog,
    fetcher: SnapshotFetcher,
    notifier: Arc<dyn ChatNotifier>,
    config: ReportConfig,
}

impl ReportDispatcher {
    /// 새 디스패처 생성
    pub fn new(
        catalog: MetricCatalog,
        fetcher: SnapshotFetcher,
        notifier: Arc<dyn ChatNotifier>,
        config: ReportConfig,
    ) -> Self {
        Self {
            catalog,
            fetcher,
            notifier,
            config,
        }
    }

    /// 오늘 날짜 기준 리포트 실행.
    ///
    /// 주간 리포트 요일(기본 금요일)이면 주간 + 일간 리포트를 모두 보내고,
    /// 그 외 요일에는 일간 리포트만 보낸다. 날짜 비교는 전부 날짜 단위다
    /// (`NaiveDate`, 자정 절단).
    pub async fn run(&self, today: NaiveDate) {
        if today.weekday() == self.config.weekly_report_day {
            info!(%today, "주간 리포트 요일 — 주간 + 일간 리포트 전송");
            self.send_weekly_report(today).await;
            self.send_daily_report(today).await;
        } else {
            info!(%today, "일간 리포트 전송");
            self.send_daily_report(today).await;
        }
    }

    /// 일간 리포트: 어제 vs 그저께
    async fn send_daily_report(&self, today: NaiveDate) {
        let yesterday = today - Days::new(1);
        let day_before = yesterday - Days::new(1);

        let current = self.fetcher.snapshot(&self.catalog, yesterday).await;
        let previous = self.fetcher.snapshot(&self.catalog, day_before).await;

        let table = render_table(&self.catalog, &current, &previous, "Daily Value");
        let message = format!(
            "*{} Daily Metrics Report ({})*\n\n```\n{}\n```",
            self.config.title,
            yesterday.format("%Y-%m-%d"),
            table
        );

        self.deliver("daily", &message).await;
    }

    /// 주간 리포트: 어제로 끝나는 완결 7일 vs 그 직전 7일
    async fn send_weekly_report(&self, today: NaiveDate) {
        let end = today - Days::new(1);
        let start = end - Days::new(6);
        let prev_end = end - Days::new(7);
        let prev_start = start - Days::new(7);

        let current = self.fetcher.snapshot_range(&self.catalog, start, end).await;
        let previous = self
            .fetcher
            .snapshot_range(&self.catalog, prev_start, prev_end)
            .await;

        let table = render_table(&self.catalog, &current, &previous, "Weekly Total");
        let message = format!(
            "*{} Weekly Metrics Report ({} to {})*\n\n```\n{}\n```",
            self.config.title,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            table
        );

        self.deliver("weekly", &message).await;
    }

    /// 메시지 전송 — 실패는 로깅 후 무시
    async fn deliver(&self, kind: &str, message: &str) {
        match self.notifier.post_message(message).await {
            Ok(()) => info!(kind, "리포트 전송 완료"),
            Err(e) => error!(kind, "리포트 전송 실패 (해당 회차 유실): {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jipyo_core::error::CoreError;
    use jipyo_core::ports::metrics_api::MetricsApi;
    use std::sync::Mutex;

    /// 모든 지표에 고정값을 돌려주는 mock API
    struct ConstantApi(f64);

    #[async_trait]
    impl MetricsApi for ConstantApi {
        async fn overall_value(
            &self,
            _event_id: &str,
            _date: NaiveDate,
        ) -> Result<f64, CoreError> {
            Ok(self.0)
        }
    }

    /// 전송된 메시지를 기록하는 mock notifier
    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl ChatNotifier for RecordingNotifier {
        async fn post_message(&self, text: &str) -> Result<(), CoreError> {
            if self.fail {
                return Err(CoreError::Delivery("invalid_auth".to_string()));
            }
            self.messages.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn report_config() -> ReportConfig {
        ReportConfig {
            title: "Jipyo".to_string(),
            weekly_report_day: chrono::Weekday::Fri,
        }
    }

    fn dispatcher(notifier: Arc<RecordingNotifier>) -> ReportDispatcher {
        ReportDispatcher::new(
            MetricCatalog::standard(),
            SnapshotFetcher::new(Arc::new(ConstantApi(10.0))),
            notifier,
            report_config(),
        )
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn weekday_sends_daily_only() {
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = dispatcher(notifier.clone());

        // 2025-03-12는 수요일
        dispatcher.run(date("2025-03-12")).await;

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Daily Metrics Report (2025-03-11)"));
        assert!(messages[0].contains("```"));
        assert!(messages[0].contains("Daily Value"));
    }

    #[tokio::test]
    async fn friday_sends_weekly_then_daily() {
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = dispatcher(notifier.clone());

        // 2025-03-14는 금요일
        dispatcher.run(date("2025-03-14")).await;

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        // 주간 창: 어제(3/13)로 끝나는 완결 7일
        assert!(messages[0].contains("Weekly Metrics Report (2025-03-07 to 2025-03-13)"));
        assert!(messages[0].contains("Weekly Total"));
        assert!(messages[1].contains("Daily Metrics Report (2025-03-13)"));
    }

    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        let notifier = Arc::new(RecordingNotifier {
            messages: Mutex::new(Vec::new()),
            fail: true,
        });
        let dispatcher = dispatcher(notifier.clone());

        // 패닉/전파 없이 끝나야 한다
        dispatcher.run(date("2025-03-12")).await;
        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn daily_deltas_are_zero_with_constant_api() {
        let notifier = Arc::new(RecordingNotifier::default());
        let dispatcher = dispatcher(notifier.clone());

        dispatcher.run(date("2025-03-12")).await;

        let messages = notifier.messages.lock().unwrap();
        // 어제와 그저께 값이 같으므로 모든 행이 +0.0%
        assert!(messages[0].contains("+0.0%"));
        assert!(!messages[0].contains("+∞"));
    }
}
