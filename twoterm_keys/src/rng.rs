// Injected randomness and hashing
// 注入的随机源与哈希

/// Local random source used to reorder ranges
/// 用于打乱区间顺序的本地随机源
pub trait ShuffleRng {
  /// Uniform draw in `[0, n)`, `n > 0`
  /// 在 `[0, n)` 内均匀采样，`n > 0`
  fn below(&mut self, n: u64) -> u64;
}

impl ShuffleRng for fastrand::Rng {
  #[inline]
  fn below(&mut self, n: u64) -> u64 {
    self.u64(..n)
  }
}

/// Default shuffle source, seeded by the provisional total weight
/// 默认打乱随机源，以临时总权重为种子
#[inline]
pub fn shuffle_rng(total_weight: i64) -> fastrand::Rng {
  fastrand::Rng::with_seed(total_weight as u64)
}

/// Hash that mixes a skew seed into a key offset
/// 将偏斜种子混淆为 key 偏移的哈希
pub trait KeyHash {
  fn hash64(&self, seed: i64) -> u64;
}

/// FNV-1a over big-endian bytes / 大端字节上的 FNV-1a
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv64a;

impl KeyHash for Fnv64a {
  #[inline]
  fn hash64(&self, seed: i64) -> u64 {
    hash64::hash64(seed)
  }
}

impl<F: Fn(i64) -> u64> KeyHash for F {
  #[inline]
  fn hash64(&self, seed: i64) -> u64 {
    self(seed)
  }
}
