// Range access statistics
// 区间访问统计

use serde::Serialize;

use crate::RangeTable;

/// Expected share of one range / 单个区间的期望占比
#[derive(Debug, Clone, Serialize)]
pub struct RangeShare {
  /// Index in table order / 表中下标
  pub range_id: usize,
  /// Prefix that produced the range / 生成区间的前缀
  pub pfx: i64,
  pub access_weight: i64,
  /// Fraction of total weight (0-1) / 占总权重比例
  pub share: f64,
}

impl RangeShare {
  pub fn from_table(table: &RangeTable) -> Vec<Self> {
    let total = table.total_weight();
    table
      .units()
      .iter()
      .enumerate()
      .map(|(range_id, u)| Self {
        range_id,
        pfx: u.pfx,
        access_weight: u.access_weight,
        share: if total == 0 {
          0.0
        } else {
          u.access_weight as f64 / total as f64
        },
      })
      .collect()
  }
}

/// Format shares as one line per range
/// 每个区间一行的格式化输出
pub fn fmt_shares(shares: &[RangeShare]) -> String {
  let mut out = String::new();
  for s in shares {
    out.push_str(&format!(
      "range {:>4} pfx {:>4} weight {:>12} share {:>6.2}%\n",
      s.range_id,
      s.pfx,
      s.access_weight,
      s.share * 100.0
    ));
  }
  out
}
