// Two-term key distribution configuration
// 双项 key 分布配置

use serde::{Deserialize, Serialize};

use crate::{KeyGen, Result, SEED, Shape, TwoTermExpKeys};

/// Key distribution configuration / key 分布配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoTermConf {
  /// Keyspace size / 键空间大小
  pub total_keys: i64,
  /// Range count (<= 0 means 1) / 区间数（<= 0 视为 1）
  pub range_num: i64,
  /// Range access shape / 区间访问形状
  pub shape: Shape,
  /// In-range skew scale, 0 means uniform / 区间内偏斜系数，0 表示均匀
  pub dist_a: f64,
  /// In-range skew exponent, 0 means uniform / 区间内偏斜指数，0 表示均匀
  pub dist_b: f64,
  /// Key stream seed / key 流种子
  pub seed: u64,
}

impl Default for TwoTermConf {
  /// Default: RocksDB mixgraph fit of Facebook ZippyDB
  /// 默认：Facebook ZippyDB 的 RocksDB mixgraph 拟合参数
  /// Reference: FAST'20 Facebook RocksDB workload analysis
  /// 参考：FAST'20 Facebook RocksDB 工作负载分析
  fn default() -> Self {
    Self {
      total_keys: 50_000_000,
      range_num: 30,
      shape: Shape::new(14.18, -2.917, 0.0164, -0.08082),
      dist_a: 0.002312,
      dist_b: 0.3467,
      seed: SEED,
    }
  }
}

impl TwoTermConf {
  /// Decode from JSON, missing fields take defaults
  /// 从 JSON 解码，缺省字段取默认值
  pub fn from_json(json: &str) -> Result<Self> {
    Ok(sonic_rs::from_str(json)?)
  }

  /// Encode as JSON / 编码为 JSON
  pub fn to_json(&self) -> Result<String> {
    Ok(sonic_rs::to_string(self)?)
  }

  /// Set keyspace size / 设置键空间大小
  pub fn with_total_keys(mut self, total_keys: i64) -> Self {
    self.total_keys = total_keys;
    self
  }

  /// Set range count / 设置区间数
  pub fn with_range_num(mut self, range_num: i64) -> Self {
    self.range_num = range_num;
    self
  }

  /// Set range shape / 设置区间形状
  pub fn with_shape(mut self, shape: Shape) -> Self {
    self.shape = shape;
    self
  }

  /// Set in-range skew / 设置区间内偏斜
  pub fn with_dist(mut self, dist_a: f64, dist_b: f64) -> Self {
    self.dist_a = dist_a;
    self.dist_b = dist_b;
    self
  }

  /// Uniform offsets inside each range / 区间内均匀偏移
  pub fn uniform_in_range(self) -> Self {
    self.with_dist(0.0, 0.0)
  }

  /// Set random seed / 设置随机种子
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }

  /// Build the generator, range table included / 构建生成器及其区间表
  pub fn build(&self) -> Result<TwoTermExpKeys> {
    let Shape { a, b, c, d } = self.shape;
    TwoTermExpKeys::new(self.total_keys, self.range_num, a, b, c, d)
  }

  /// Key stream with this config's skew and seed
  /// 使用本配置偏斜和种子的 key 流
  pub fn key_gen(&self) -> Result<KeyGen> {
    Ok(KeyGen::new(self.build()?, self.dist_a, self.dist_b, self.seed))
  }
}
