// Error types for twoterm_keys
// twoterm_keys 错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Every range weight rounded to zero / 所有区间权重均为 0
  #[error("degenerate table: total access weight is 0")]
  DegenerateTable,

  /// Fewer keys than ranges / key 数少于区间数
  #[error("degenerate range: range size is 0")]
  DegenerateRange,

  #[error("invalid shape at prefix {pfx}: p = {p}")]
  InvalidShape { pfx: i64, p: f64 },

  #[error("access weight overflow at prefix {pfx}")]
  WeightOverflow { pfx: i64 },

  /// Range table cannot be allocated / 区间表无法分配
  #[error("range count too large: {0}")]
  RangeNum(i64),

  #[error("negative total keys: {0}")]
  NegativeKeys(i64),

  #[error("JSON error: {0}")]
  Json(#[from] sonic_rs::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
