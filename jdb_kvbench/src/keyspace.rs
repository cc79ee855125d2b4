//! Deterministic key-space construction with a present/absent partition.
//! 确定性键空间构建，并划分存在/缺失两个集合。

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::StdRng};

use crate::error::{Error, Result};

/// Draws allowed per requested key before giving up.
/// 每个请求键允许的最大抽取次数。
const MAX_TRIES_PER_KEY: usize = 64;

/// `Some` seeds deterministically, `None` seeds from the OS.
/// `Some` 为确定性种子，`None` 使用操作系统熵源。
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
  match seed {
    Some(s) => StdRng::seed_from_u64(s),
    None => StdRng::from_os_rng(),
  }
}

/// One random alphanumeric string of exactly `len` bytes.
/// 一个恰好 `len` 字节的随机字母数字串。
pub(crate) fn rand_str(rng: &mut StdRng, len: usize) -> String {
  (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

/// `count` sorted distinct random strings of length `len`.
/// `count` 个已排序且互不相同、长度为 `len` 的随机串。
///
/// Uniqueness is enforced by collecting into an ordered set, so disjointness
/// of any parity split never depends on the generator avoiding collisions.
/// 通过收集进有序集合来强制唯一性，因此奇偶划分的不相交性从不依赖生成器
/// 自身不产生碰撞。
pub fn rand_sorted_strs(count: usize, len: usize, seed: Option<u64>) -> Result<Vec<String>> {
  if count == 0 || len == 0 {
    return Err(Error::BadKeySpec { count, len });
  }

  let mut rng = seeded_rng(seed);
  let mut set = BTreeSet::new();
  let budget = count.saturating_mul(MAX_TRIES_PER_KEY);
  let mut tries = 0usize;
  while set.len() < count {
    if tries == budget {
      return Err(Error::KeySpace {
        want: count,
        got: set.len(),
      });
    }
    tries += 1;
    set.insert(rand_str(&mut rng, len));
  }

  Ok(set.into_iter().collect())
}

/// Sorted present/absent key partition with position values.
/// 已排序的存在/缺失键划分及位置值。
#[derive(Debug, Clone)]
pub struct KeySet {
  /// Present keys, sorted.
  /// 存在键，已排序。
  pub keys: Vec<String>,
  /// Values paired 1:1 with `keys`; value = position.
  /// 与 `keys` 一一对应的值；值即位置。
  pub values: Vec<i32>,
  /// Absent keys, sorted, disjoint from `keys`.
  /// 缺失键，已排序，与 `keys` 不相交。
  pub absent_keys: Vec<String>,
}

impl KeySet {
  /// Generate `2 * count` sorted distinct strings and split by parity:
  /// even positions become present keys, odd positions absent keys.
  /// 生成 `2 * count` 个有序不同串并按奇偶划分：偶数位为存在键，奇数位为缺失键。
  pub fn new(count: usize, len: usize, seed: Option<u64>) -> Result<Self> {
    if count == 0 || len == 0 {
      return Err(Error::BadKeySpec { count, len });
    }

    let all = rand_sorted_strs(count * 2, len, seed)?;
    let mut keys = Vec::with_capacity(count);
    let mut absent_keys = Vec::with_capacity(count);
    for (i, s) in all.into_iter().enumerate() {
      if i % 2 == 0 {
        keys.push(s);
      } else {
        absent_keys.push(s);
      }
    }

    Ok(Self {
      keys,
      values: (0..count as i32).collect(),
      absent_keys,
    })
  }
}
