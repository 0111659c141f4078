// Two-term exponential key range distribution
// 双项指数 key 区间分布

#![cfg_attr(docsrs, feature(doc_cfg))]

mod conf;
mod error;
mod generator;
mod keygen;
mod range;
mod rng;
mod sample;
mod shape;
mod stats;

pub use conf::TwoTermConf;
pub use error::{Error, Result};
pub use generator::{Generator, TwoTermExpKeys};
pub use keygen::{KeyGen, SEED};
pub use range::{
  RangeTable, RangeUnit, clamp_range_num, compute_weights, permute, prefix_sum, total_weight,
};
pub use rng::{Fnv64a, KeyHash, ShuffleRng, shuffle_rng};
pub use sample::sample;
pub use shape::{P_FLOOR, Shape};
pub use stats::{RangeShare, fmt_shares};
