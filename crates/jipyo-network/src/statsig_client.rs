//! Statsig console API 클라이언트.
//!
//! `MetricsApi` 포트 구현. 이벤트 ID + 날짜(`YYYY-MM-DD`)로 GET 조회하고
//! `unit_type == "overall"`인 데이터 포인트의 값을 돌려준다.

use async_trait::async_trait;
use chrono::NaiveDate;
use jipyo_core::config::StatsigConfig;
use jipyo_core::error::CoreError;
use jipyo_core::ports::metrics_api::MetricsApi;
use serde::Deserialize;
use tracing::debug;

/// API 키 헤더 이름
const API_KEY_HEADER: &str = "STATSIG-API-KEY";

/// 지표 조회 응답 본문
#[derive(Debug, Deserialize)]
struct MetricsResponse {
    #[serde(default)]
    data: Vec<DataPoint>,
}

/// 세그먼트별 데이터 포인트
#[derive(Debug, Deserialize)]
struct DataPoint {
    #[serde(default)]
    unit_type: String,
    #[serde(default)]
    value: f64,
}

/// Statsig 지표 클라이언트 — `MetricsApi` 포트 구현
pub struct StatsigMetricsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StatsigMetricsClient {
    /// 새 Statsig 클라이언트 생성.
    ///
    /// 설정의 요청 타임아웃을 클라이언트 수준에서 강제한다.
    /// 응답이 멈춘 요청은 타임아웃 에러가 되고, fetcher 경계에서
    /// 해당 지표만 0으로 축약된다.
    pub fn new(config: &StatsigConfig) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl MetricsApi for StatsigMetricsClient {
    async fn overall_value(&self, event_id: &str, date: NaiveDate) -> Result<f64, CoreError> {
        let date_str = date.format("%Y-%m-%d").to_string();
        debug!(event_id, date = %date_str, "지표 조회");

        let resp = self
            .client
            .get(&self.base_url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("id", event_id), ("date", date_str.as_str())])
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("지표 조회 요청 실패: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(CoreError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let body: MetricsResponse = resp
            .json()
            .await
            .map_err(|e| CoreError::Network(format!("지표 응답 파싱 실패: {e}")))?;

        // overall 포인트가 없는 정상 응답은 0 (에러 아님)
        let value = body
            .data
            .iter()
            .find(|d| d.unit_type == "overall")
            .map_or(0.0, |d| d.value);

        Ok(value)
    }
}
