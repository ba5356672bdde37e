//! 1차 최소제곱 직선 적합.

/// `y = slope * x + intercept` 형태의 추세선. x는 0부터 시작하는 인덱스.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// 인덱스 0..n-1에 대한 최소제곱 직선을 구합니다.
    ///
    /// 값이 2개 미만이면 기울기 0, 절편은 유일한 값(없으면 0)입니다.
    pub fn fit(values: &[f64]) -> Self {
        let n = values.len();
        if n < 2 {
            return Self {
                slope: 0.0,
                intercept: values.first().copied().unwrap_or(0.0),
            };
        }

        let n_f = n as f64;
        let mean_x = (n_f - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n_f;

        let (mut sxy, mut sxx) = (0.0, 0.0);
        for (i, y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            sxy += dx * (y - mean_y);
            sxx += dx * dx;
        }

        let slope = sxy / sxx;
        Self {
            slope,
            intercept: mean_y - slope * mean_x,
        }
    }

    /// 인덱스 `x`에서의 추세선 값.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let values: Vec<f64> = (0..10).map(|i| 2.0 * i as f64 + 5.0).collect();
        let fit = LinearFit::fit(&values);

        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 5.0).abs() < 1e-12);
        assert!((fit.value_at(9.0) - 23.0).abs() < 1e-12);
    }

    #[test]
    fn test_noisy_line() {
        // y = x + (+1, -1 반복) → 기울기 ≈ 1
        let values: Vec<f64> = (0..100)
            .map(|i| i as f64 + if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        let fit = LinearFit::fit(&values);
        assert!((fit.slope - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_flat_and_degenerate() {
        assert_eq!(LinearFit::fit(&[3.0; 5]).slope, 0.0);
        assert_eq!(
            LinearFit::fit(&[7.0]),
            LinearFit {
                slope: 0.0,
                intercept: 7.0
            }
        );
        assert_eq!(LinearFit::fit(&[]).intercept, 0.0);
    }
}
