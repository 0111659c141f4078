// Map a raw random draw to a key id
// 将原始随机数映射为 key id

use crate::{Error, KeyHash, RangeTable, Result};

/// Pick a range by weight, then an offset inside it
/// 按权重选择区间，再在区间内选择偏移
///
/// `dist_a == 0` or `dist_b == 0` gives a uniform offset. Otherwise the
/// offset comes from `hash(ceil((u / dist_a) ^ (1 / dist_b)))`.
/// `dist_a == 0` 或 `dist_b == 0` 时区间内均匀；否则偏移由幂变换后的种子哈希得到。
pub fn sample(
  raw: i64,
  table: &RangeTable,
  dist_a: f64,
  dist_b: f64,
  hash: &impl KeyHash,
) -> Result<i64> {
  let total = table.total_weight();
  if total == 0 {
    return Err(Error::DegenerateTable);
  }
  let range_size = table.range_size();
  if range_size == 0 {
    return Err(Error::DegenerateRange);
  }

  let range_id = table.locate(raw.rem_euclid(total)) as i64;
  let in_range = raw.rem_euclid(range_size);

  let offset = if dist_a == 0.0 || dist_b == 0.0 {
    in_range
  } else {
    let u = in_range as f64 / range_size as f64;
    // Saturating cast, NaN becomes 0 / 饱和转换，NaN 为 0
    let seed = (u / dist_a).powf(1.0 / dist_b).ceil() as i64;
    (hash.hash64(seed) % range_size as u64) as i64
  };
  Ok(range_id * range_size + offset)
}
