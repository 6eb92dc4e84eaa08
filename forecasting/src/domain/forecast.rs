/// Output of a point forecaster
///
/// `Fallback` carries a naive persistence forecast produced when the model
/// has no usable fit, so callers can tell it apart from a model forecast.
#[derive(Debug, Clone, PartialEq)]
pub enum Forecast {
    Model(Vec<f64>),
    Fallback(Vec<f64>),
}

impl Forecast {
    pub fn values(&self) -> &[f64] {
        match self {
            Forecast::Model(values) | Forecast::Fallback(values) => values,
        }
    }

    pub fn into_values(self) -> Vec<f64> {
        match self {
            Forecast::Model(values) | Forecast::Fallback(values) => values,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Forecast::Fallback(_))
    }

    /// One-step-ahead value, if any steps were requested
    pub fn first(&self) -> Option<f64> {
        self.values().first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_accessors() {
        let model = Forecast::Model(vec![1.0, 2.0]);
        assert!(!model.is_fallback());
        assert_eq!(model.first(), Some(1.0));

        let fallback = Forecast::Fallback(vec![3.0]);
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_values(), vec![3.0]);

        assert_eq!(Forecast::Model(Vec::new()).first(), None);
    }
}
