#![cfg_attr(docsrs, feature(doc_cfg))]

//! FNV-1a integer hash
//! FNV-1a 整数哈希

/// FNV-1a 64-bit offset basis / FNV-1a 64 位偏移基数
pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime / FNV-1a 64 位素数
pub const PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over bytes
/// 对字节做 64 位 FNV-1a
#[inline]
pub const fn fnv1a64(bytes: &[u8]) -> u64 {
  let mut hash = OFFSET_BASIS;
  let mut i = 0;
  while i < bytes.len() {
    hash ^= bytes[i] as u64;
    hash = hash.wrapping_mul(PRIME);
    i += 1;
  }
  hash
}

/// Hash an integer seed into a non-negative 63-bit value
/// 将整数种子哈希为非负 63 位值
///
/// Bytes are fed big-endian, the digest is read as i64 and folded to its
/// absolute value, so the output equals the YCSB-family `Hash64`.
/// 按大端序输入字节，摘要视为 i64 后取绝对值，输出与 YCSB 系 `Hash64` 一致。
#[inline]
pub const fn hash64(n: i64) -> u64 {
  let signed = fnv1a64(&n.to_be_bytes()) as i64;
  // i64::MIN stays put, as u64 it is 2^63
  // i64::MIN 取绝对值不变，转 u64 为 2^63
  signed.wrapping_abs() as u64
}
