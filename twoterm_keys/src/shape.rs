// Two-term exponential shape of range access probability
// 区间访问概率的双项指数形状

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Probabilities below this are treated as 0
/// 低于此值的概率视为 0
pub const P_FLOOR: f64 = 1e-16;

/// p(pfx) = a * exp(b * pfx) + c * exp(d * pfx)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Shape {
  pub a: f64,
  pub b: f64,
  pub c: f64,
  pub d: f64,
}

impl Shape {
  pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
    Self { a, b, c, d }
  }

  /// Access probability of prefix `pfx`, floored at [`P_FLOOR`]
  /// 前缀 `pfx` 的访问概率，低于 [`P_FLOOR`] 归 0
  pub fn p(&self, pfx: i64) -> Result<f64> {
    let x = pfx as f64;
    let p = self.a * (self.b * x).exp() + self.c * (self.d * x).exp();
    if !p.is_finite() {
      return Err(Error::InvalidShape { pfx, p });
    }
    Ok(if p < P_FLOOR { 0.0 } else { p })
  }
}
