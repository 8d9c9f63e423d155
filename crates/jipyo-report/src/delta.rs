//! 기간 대비 증감률 계산.

/// 증감률 문자열 계산.
///
/// 이전 값이 0인 경우는 0으로 나누기를 피하면서 "무에서의 성장"을
/// "변화 없음"과 구분해 표기한다:
/// - `previous == 0, current > 0` → `"+∞"`
/// - `previous == 0, current == 0` → `"0%"`
///
/// 그 외에는 `((current - previous) / previous) * 100`을 소수점 1자리로
/// 표기하며, 0 이상이면 `+` 접두사를 붙인다.
pub fn percent_change(current: f64, previous: f64) -> String {
    if previous == 0.0 {
        return if current > 0.0 {
            "+∞".to_string()
        } else {
            "0%".to_string()
        };
    }

    let change = ((current - previous) / previous) * 100.0;
    if change >= 0.0 {
        format!("+{change:.1}%")
    } else {
        format!("{change:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_baseline_with_growth() {
        assert_eq!(percent_change(5.0, 0.0), "+∞");
        assert_eq!(percent_change(0.1, 0.0), "+∞");
    }

    #[test]
    fn zero_baseline_without_growth() {
        assert_eq!(percent_change(0.0, 0.0), "0%");
    }

    #[test]
    fn positive_change() {
        assert_eq!(percent_change(120.0, 100.0), "+20.0%");
        assert_eq!(percent_change(100.0, 100.0), "+0.0%");
        assert_eq!(percent_change(101.0, 100.0), "+1.0%");
    }

    #[test]
    fn negative_change() {
        assert_eq!(percent_change(0.0, 50.0), "-100.0%");
        assert_eq!(percent_change(80.0, 100.0), "-20.0%");
    }

    #[test]
    fn rounding_to_one_decimal() {
        // 1/3 → 33.333..% → 33.3%
        assert_eq!(percent_change(4.0, 3.0), "+33.3%");
        // 2/3 → 66.666..% → 66.7%
        assert_eq!(percent_change(5.0, 3.0), "+66.7%");
    }
}
