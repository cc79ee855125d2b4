//! Bounded access-sequence generation for skewed and sequential lookups.
//! 有界访问序列生成，支持倾斜与顺序两种查询模式。

#![allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]

use std::str::FromStr;

use rand_distr::{Distribution, Zipf};

use crate::{
  error::{Error, Result},
  keyspace::seeded_rng,
};

/// Zipf exponent for the skewed workload.
/// 倾斜负载的 Zipf 指数。
const ZIPF_EXPONENT: f64 = 1.5;

/// Access-pattern kind.
/// 访问模式类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
  /// Skewed access concentrated on low indices.
  /// 集中于低位索引的倾斜访问。
  Zipf,
  /// Strictly sequential access.
  /// 严格顺序访问。
  Scan,
}

impl FromStr for Workload {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "zipf" => Ok(Self::Zipf),
      "scan" => Ok(Self::Scan),
      _ => Err(Error::UnknownWorkload(s.to_string())),
    }
  }
}

/// Largest `2^k - 1` (k >= 1) not exceeding `n`.
/// 不超过 `n` 的最大 `2^k - 1`（k >= 1）。
///
/// A sequence of that length plus one cycles with a bitwise AND instead of a
/// modulo in the timed loop.
/// 该长度加一的序列可在计时循环中用按位与取代取模来循环。
#[must_use]
pub fn max_mask(n: usize) -> usize {
  let mut mask = 1;
  while (mask << 1 | 1) <= n {
    mask = mask << 1 | 1;
  }
  mask
}

impl Workload {
  /// Access sequence of length `max_mask(n) + 1` with every index in
  /// `[0, n)`, precomputed so the timed region only replays it.
  /// 长度为 `max_mask(n) + 1` 的访问序列，索引均落在 `[0, n)`，预先计算好，
  /// 计时区间只做回放。
  #[must_use]
  pub fn accesses(self, n: usize, seed: Option<u64>) -> Vec<usize> {
    assert!(n >= 1, "need at least one key");
    let times = max_mask(n) + 1;
    match self {
      // `i % n` is the identity whenever max_mask(n) < n; it only folds the
      // final index back for n of the form 2^k - 1.
      // 当 max_mask(n) < n 时 `i % n` 恒等；仅在 n 形如 2^k - 1 时折回末位索引。
      Self::Scan => (0..times).map(|i| i % n).collect(),
      Self::Zipf => {
        let mut rng = seeded_rng(seed);
        let zipf = Zipf::new(n as f64, ZIPF_EXPONENT).expect("zipf parameters");
        (0..times)
          // Samples are ranks in [1, n]; shift to zero-based indexes.
          // 采样值是 [1, n] 内的名次；平移为从零开始的索引。
          .map(|_| (zipf.sample(&mut rng) as usize).saturating_sub(1).min(n - 1))
          .collect()
      }
    }
  }
}
