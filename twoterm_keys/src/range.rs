// Key range table with two-term exponential access weights
// 双项指数访问权重的 key 区间表

use log::{debug, info};

use crate::{Error, Result, Shape, ShuffleRng, shuffle_rng};

/// One contiguous slice of the keyspace
/// 键空间中的一段连续区间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeUnit {
  /// Prefix that produced this range / 生成此区间的前缀
  pub pfx: i64,
  /// Weight mass before this range / 此区间之前的累计权重
  pub start_offset: i64,
  /// Access weight / 访问权重
  pub access_weight: i64,
  /// Keys in this range / 区间内 key 数
  pub range_size: i64,
}

/// Immutable table of ranges ordered by `start_offset`
/// 按 `start_offset` 排序的不可变区间表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable {
  units: Vec<RangeUnit>,
  range_size: i64,
  total_weight: i64,
}

/// Clamp range count, `<= 0` means 1
/// 规范化区间数，`<= 0` 视为 1
#[inline]
pub fn clamp_range_num(n: i64) -> i64 {
  if n <= 0 { 1 } else { n }
}

/// Descending pass from `pfx = range_num` to 1
/// 从 `pfx = range_num` 降序到 1 计算权重
///
/// `amplify` latches on the first positive `p` and scales every later range.
/// Units carry a provisional running `start_offset`.
/// `amplify` 在首个正 `p` 时锁定，用于缩放后续所有区间；单元带临时累计偏移。
pub fn compute_weights(range_size: i64, range_num: i64, shape: &Shape) -> Result<Vec<RangeUnit>> {
  let mut units: Vec<RangeUnit> = Vec::new();
  units
    .try_reserve_exact(range_num.max(0) as usize)
    .map_err(|_| Error::RangeNum(range_num))?;
  let mut amplify: Option<i64> = None;
  let mut start = 0i64;

  for pfx in (1..=range_num).rev() {
    let p = shape.p(pfx)?;
    let access_weight = if p > 0.0 {
      let amp = *amplify.get_or_insert_with(|| (1.0 / p).floor() as i64 + 1);
      let w = (amp as f64 * p).floor();
      // 2^63 itself is not representable / 2^63 本身不可表示
      if w >= i64::MAX as f64 {
        return Err(Error::InvalidShape { pfx, p });
      }
      w as i64
    } else {
      0
    };
    debug!("key range {pfx} access weight: {access_weight}");

    units.push(RangeUnit {
      pfx,
      start_offset: start,
      access_weight,
      range_size,
    });
    start = start
      .checked_add(access_weight)
      .ok_or(Error::WeightOverflow { pfx })?;
  }
  Ok(units)
}

/// Checked sum of access weights / 访问权重的溢出检查求和
pub fn total_weight(units: &[RangeUnit]) -> Result<i64> {
  units.iter().try_fold(0i64, |sum, u| {
    sum
      .checked_add(u.access_weight)
      .ok_or(Error::WeightOverflow { pfx: u.pfx })
  })
}

/// Reorder ranges: for each `i`, swap with a position drawn from the whole table
/// 打乱区间：对每个 `i`，与全表范围内随机位置交换
///
/// Not a uniform permutation. Kept as is so tables stay reproducible
/// against existing benchmark traces.
/// 非均匀排列；保持原样以便与已有基准轨迹一致。
pub fn permute(mut units: Vec<RangeUnit>, rng: &mut impl ShuffleRng) -> Vec<RangeUnit> {
  let n = units.len() as u64;
  for i in 0..units.len() {
    let pos = rng.below(n) as usize;
    units.swap(i, pos);
  }
  units
}

/// Reassign `start_offset` as running prefix sum in current order
/// 按当前顺序重新计算 `start_offset` 前缀和
pub fn prefix_sum(mut units: Vec<RangeUnit>, range_size: i64) -> Result<RangeTable> {
  let mut offset = 0i64;
  for u in &mut units {
    u.start_offset = offset;
    offset = offset
      .checked_add(u.access_weight)
      .ok_or(Error::WeightOverflow { pfx: u.pfx })?;
  }
  Ok(RangeTable {
    units,
    range_size,
    total_weight: offset,
  })
}

impl RangeTable {
  /// Build with the default shuffle source seeded by total weight
  /// 使用以总权重为种子的默认打乱源构建
  pub fn build(total_keys: i64, range_num: i64, shape: &Shape) -> Result<Self> {
    Self::build_with(total_keys, range_num, shape, shuffle_rng)
  }

  /// Build with an injected shuffle source, created from the provisional total
  /// 使用注入的打乱源构建，随机源由临时总权重创建
  pub fn build_with<R: ShuffleRng>(
    total_keys: i64,
    range_num: i64,
    shape: &Shape,
    rng: impl FnOnce(i64) -> R,
  ) -> Result<Self> {
    if total_keys < 0 {
      return Err(Error::NegativeKeys(total_keys));
    }
    let n = clamp_range_num(range_num);
    let range_size = total_keys / n;

    let units = compute_weights(range_size, n, shape)?;
    let total = total_weight(&units)?;
    info!("total access weight {total}");

    let units = permute(units, &mut rng(total));
    prefix_sum(units, range_size)
  }

  #[inline]
  pub fn units(&self) -> &[RangeUnit] {
    &self.units
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.units.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.units.is_empty()
  }

  /// Keys per range / 每个区间的 key 数
  #[inline]
  pub fn range_size(&self) -> i64 {
    self.range_size
  }

  /// Modulus for range selection / 区间选择的模数
  #[inline]
  pub fn total_weight(&self) -> i64 {
    self.total_weight
  }

  /// Reachable keys, remainder of `total_keys / range_num` excluded
  /// 可达 key 数，不含整除余数
  #[inline]
  pub fn key_space(&self) -> i64 {
    self.range_size * self.units.len() as i64
  }

  /// Greatest index whose `start_offset <= weighted`
  /// `start_offset <= weighted` 的最大下标
  ///
  /// `weighted` must lie in `[0, total_weight)`.
  /// `weighted` 须在 `[0, total_weight)` 内。
  #[inline]
  pub fn locate(&self, weighted: i64) -> usize {
    // units[0].start_offset == 0, so at least one unit satisfies the predicate
    // units[0].start_offset == 0，至少有一个满足
    self
      .units
      .partition_point(|u| u.start_offset <= weighted)
      .saturating_sub(1)
  }
}
