use serde::Serialize;

/// Theoretical cost model a measurement is compared against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// `(log₂ n)²`
    LogSquared,
    /// `n · log₂ n`
    NLogN,
}

impl CostModel {
    /// Evaluates the model at `n`.
    ///
    /// `n = 1` yields 0 for both models and `n = 0` is not finite; such sizes
    /// are excluded from the constant fit.
    pub fn evaluate(self, n: usize) -> f64 {
        let n = n as f64;
        let lg = n.log2();
        match self {
            CostModel::LogSquared => lg * lg,
            CostModel::NLogN => n * lg,
        }
    }

    /// Column header for the raw theoretical value.
    pub fn label(self) -> &'static str {
        match self {
            CostModel::LogSquared => "Theoretical ((log₂ n)²)",
            CostModel::NLogN => "Theoretical (n log₂ n)",
        }
    }
}
