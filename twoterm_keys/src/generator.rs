// Two-term exponential key generator
// 双项指数 key 生成器

use crate::{Fnv64a, KeyHash, RangeShare, RangeTable, Result, Shape, sample};

/// Integer generator contract shared by workload distributions
/// 工作负载分布共用的整数生成器接口
pub trait Generator {
  /// Draw next value / 生成下一个值
  fn next(&self, rng: &mut fastrand::Rng) -> i64;
}

/// Keys drawn from ranges weighted by `a*exp(b*pfx) + c*exp(d*pfx)`
/// 按 `a*exp(b*pfx) + c*exp(d*pfx)` 加权的区间中抽取 key
///
/// The table is built once and only read afterwards, so one instance can be
/// shared by many sampling threads.
/// 区间表只构建一次，之后只读，可被多个采样线程共享。
#[derive(Debug, Clone)]
pub struct TwoTermExpKeys<H = Fnv64a> {
  table: RangeTable,
  hash: H,
}

impl TwoTermExpKeys {
  /// `range_num <= 0` is treated as 1
  /// `range_num <= 0` 视为 1
  pub fn new(total_keys: i64, range_num: i64, a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
    let table = RangeTable::build(total_keys, range_num, &Shape::new(a, b, c, d))?;
    Ok(Self::with_parts(table, Fnv64a))
  }
}

impl<H: KeyHash> TwoTermExpKeys<H> {
  pub fn with_parts(table: RangeTable, hash: H) -> Self {
    Self { table, hash }
  }

  /// Map a caller-supplied draw to a key id in `[0, key_space)`
  /// 将调用方提供的随机数映射为 `[0, key_space)` 内的 key id
  #[inline]
  pub fn get_key_id(&self, raw: i64, dist_a: f64, dist_b: f64) -> Result<i64> {
    sample(raw, &self.table, dist_a, dist_b, &self.hash)
  }

  #[inline]
  pub fn table(&self) -> &RangeTable {
    &self.table
  }

  /// Expected access share of each range, in table order
  /// 各区间期望访问占比，按表顺序
  pub fn shares(&self) -> Vec<RangeShare> {
    RangeShare::from_table(&self.table)
  }
}

impl<H: KeyHash> Generator for TwoTermExpKeys<H> {
  /// Always 0: keys come from [`TwoTermExpKeys::get_key_id`]
  /// 恒为 0：key 由 [`TwoTermExpKeys::get_key_id`] 产生
  #[inline]
  fn next(&self, _rng: &mut fastrand::Rng) -> i64 {
    0
  }
}
