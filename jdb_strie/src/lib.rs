//! Succinct ordered key index over minimal distinguishing prefixes.
//! 基于最小区分前缀的简洁有序键索引。
//!
//! For every key of a strictly sorted, prefix-free set, only the shortest
//! prefix telling it apart from its sorted neighbors is kept, plus one hash
//! byte of the full key. Lookup may report a false positive for an absent
//! key that happens to share a stored prefix and hash byte; it never reports
//! a false negative for a present key. Fixed-length key sets are always
//! prefix-free.
//! 对严格升序且无前缀包含关系的键集，每个键只保留与相邻键区分所需的最短前缀，
//! 外加完整键哈希的一个字节。缺失键若恰好命中已存前缀与哈希字节会被误报存在
//! （假阳性）；存在键绝不会漏报。定长键集天然无前缀包含关系。

pub mod bits;
mod build;
pub mod error;

pub use error::{Error, Result};

use std::cmp::Ordering;

use crate::bits::PackedInts;

/// Succinct key index: concatenated distinguishing prefixes, packed
/// cumulative offsets, one fingerprint byte per key.
/// 简洁键索引：拼接的区分前缀、位压缩的累计偏移、每键一个指纹字节。
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Clone, Debug, Default)]
pub struct Strie {
  pub(crate) blob: Vec<u8>,
  pub(crate) offsets: PackedInts,
  pub(crate) fps: Vec<u8>,
  pub(crate) len: usize,
  /// Empty when built without values; `get` then reports the position.
  /// 无值构建时为空；此时 `get` 返回位置本身。
  pub(crate) values: Vec<i32>,
}

impl Strie {
  /// Build from strictly ascending, prefix-free keys.
  /// 从严格升序且无前缀包含关系的键构建。
  ///
  /// `values`, when given, must pair 1:1 with `keys`.
  /// `values` 若给出，必须与 `keys` 一一对应。
  pub fn new<S: AsRef<str>>(keys: &[S], values: Option<&[i32]>) -> Result<Self> {
    build::build(keys, values)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Stored prefix of the key at `i`.
  /// 第 `i` 个键所存的前缀。
  #[inline]
  fn prefix(&self, i: usize) -> &[u8] {
    let lo = self.offsets.get(i) as usize;
    let hi = self.offsets.get(i + 1) as usize;
    // SAFETY: offsets are cumulative sums over blob, so lo <= hi <= blob.len().
    unsafe { self.blob.get_unchecked(lo..hi) }
  }

  /// Compare the stored prefix at `i` against `key` truncated to its length.
  /// A stored prefix that prefixes `key` compares equal.
  /// 将第 `i` 个前缀与按其长度截断的 `key` 比较；前缀是 `key` 的前缀时视为相等。
  #[inline]
  fn cmp_prefix(&self, i: usize, key: &[u8]) -> Ordering {
    let p = self.prefix(i);
    let m = p.len().min(key.len());
    match p[..m].cmp(&key[..m]) {
      Ordering::Equal if p.len() > key.len() => Ordering::Greater,
      ord => ord,
    }
  }

  /// Candidate position for `key`, if any.
  /// `key` 的候选位置（若有）。
  ///
  /// May answer a position for an absent key; callers needing exactness must
  /// re-check the full key at that position.
  /// 对缺失键也可能给出位置；需要精确性时必须回查该位置的完整键。
  #[must_use]
  pub fn position(&self, key: &str) -> Option<usize> {
    let key = key.as_bytes();
    let mut lo = 0usize;
    let mut hi = self.len;
    while lo < hi {
      let mid = lo + (hi - lo) / 2;
      if self.cmp_prefix(mid, key) == Ordering::Less {
        lo = mid + 1;
      } else {
        hi = mid;
      }
    }
    (lo < self.len
      && self.cmp_prefix(lo, key) == Ordering::Equal
      && self.fps[lo] == build::fingerprint(key))
    .then_some(lo)
  }

  /// Membership test on the raw structure; false positives possible.
  /// 原始结构上的成员测试；可能出现假阳性。
  #[inline]
  #[must_use]
  pub fn has(&self, key: &str) -> bool {
    self.position(key).is_some()
  }

  /// Value for `key`: the stored value, or the position itself when the
  /// index was built without values.
  /// `key` 对应的值：已存值，或在无值构建时为位置本身。
  #[inline]
  #[must_use]
  pub fn get(&self, key: &str) -> Option<i32> {
    self.position(key).map(|i| match self.values.get(i) {
      Some(v) => *v,
      None => i as i32,
    })
  }

  /// In-memory footprint of the packed parts.
  /// 压缩部分的内存占用。
  #[must_use]
  pub fn size_in_bytes(&self) -> usize {
    self.blob.len()
      + self.offsets.size_in_bytes()
      + self.fps.len()
      + self.values.len() * size_of::<i32>()
      + size_of::<Self>()
  }
}

#[cfg(feature = "bitcode")]
impl Strie {
  /// Serialize to bytes.
  /// 序列化为字节流。
  #[must_use]
  pub fn dump(&self) -> Vec<u8> {
    bitcode::encode(self)
  }

  /// Deserialize from bytes.
  /// 从字节流反序列化。
  pub fn load(bytes: &[u8]) -> Result<Self> {
    bitcode::decode(bytes).map_err(|e| Error::Decode(e.to_string()))
  }
}
