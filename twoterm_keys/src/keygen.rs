// Key stream for benchmark
// 基准测试的 key 流

use crate::{KeyHash, Result, TwoTermExpKeys};

/// Default random seed / 默认随机种子
pub const SEED: u64 = 42;

/// Seeded key stream over a [`TwoTermExpKeys`]
/// 基于 [`TwoTermExpKeys`] 的带种子 key 流
pub struct KeyGen<H = crate::Fnv64a> {
  keys: TwoTermExpKeys<H>,
  rng: fastrand::Rng,
  dist_a: f64,
  dist_b: f64,
}

impl<H: KeyHash> KeyGen<H> {
  pub fn new(keys: TwoTermExpKeys<H>, dist_a: f64, dist_b: f64, seed: u64) -> Self {
    Self {
      keys,
      rng: fastrand::Rng::with_seed(seed),
      dist_a,
      dist_b,
    }
  }

  /// Reset to initial state / 重置到初始状态
  pub fn reset(&mut self, seed: u64) {
    self.rng = fastrand::Rng::with_seed(seed);
  }

  #[inline]
  pub fn keys(&self) -> &TwoTermExpKeys<H> {
    &self.keys
  }

  /// Non-negative 63-bit draw / 非负 63 位随机数
  #[inline]
  fn raw(&mut self) -> i64 {
    self.rng.i64(0..=i64::MAX)
  }

  /// Sample next key id / 采样下一个 key id
  #[inline]
  pub fn next_id(&mut self) -> Result<i64> {
    let raw = self.raw();
    self.keys.get_key_id(raw, self.dist_a, self.dist_b)
  }

  /// Build full key from prefix and id, big-endian keeps id order
  /// 由前缀和 id 构建完整 key，大端序保持 id 顺序
  #[inline]
  pub fn build_key(prefix: &[u8], id: i64) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + 8);
    key.extend_from_slice(prefix);
    key.extend_from_slice(&id.to_be_bytes());
    key
  }

  /// Sample next full key / 采样下一个完整 key
  #[inline]
  pub fn next_key(&mut self, prefix: &[u8]) -> Result<Vec<u8>> {
    Ok(Self::build_key(prefix, self.next_id()?))
  }

  /// Sample n ids and count hits per range (for testing)
  /// 采样 n 个 id 并统计每个区间命中次数（用于测试）
  pub fn range_hits(&mut self, n: usize) -> Result<Vec<usize>> {
    let table = self.keys.table();
    let range_size = table.range_size();
    let mut counts = vec![0usize; table.len()];
    for _ in 0..n {
      let id = self.next_id()?;
      counts[(id / range_size) as usize] += 1;
    }
    Ok(counts)
  }
}
