//! Strie construction from sorted keys.
//! 从已排序键构建 Strie。
//!
//! Time complexity: O(total key bytes).

use crate::{
  Strie,
  bits::{PackedInts, width_for},
  error::{Error, Result},
};

/// Length of the longest common prefix of two byte strings.
/// 两个字节串最长公共前缀的长度。
#[inline]
fn lcp(a: &[u8], b: &[u8]) -> usize {
  a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Low byte of the key hash, kept per key to reject most prefix collisions.
/// 键哈希的低字节，按键保留以排除大部分前缀碰撞。
#[inline]
pub(crate) fn fingerprint(key: &[u8]) -> u8 {
  (rapidhash::rapidhash(key) & 0xff) as u8
}

pub(crate) fn build<S: AsRef<str>>(keys: &[S], values: Option<&[i32]>) -> Result<Strie> {
  let n = keys.len();
  if let Some(v) = values {
    if v.len() != n {
      return Err(Error::ValueLen {
        keys: n,
        values: v.len(),
      });
    }
  }

  // One pass validates ordering and records neighbor lcps.
  // 一次遍历完成顺序校验并记录相邻 lcp。
  let mut lcps = vec![0usize; n + 1];
  for i in 1..n {
    let prev = keys[i - 1].as_ref().as_bytes();
    let cur = keys[i].as_ref().as_bytes();
    let l = lcp(prev, cur);
    if l == cur.len() {
      // cur is a duplicate of prev or a prefix of it: out of order either way.
      // cur 与 prev 重复或是其前缀：两种情况都不是升序。
      return Err(Error::Unsorted(i));
    }
    if l == prev.len() {
      return Err(Error::PrefixOrder(i - 1));
    }
    if prev[l] > cur[l] {
      return Err(Error::Unsorted(i));
    }
    lcps[i] = l;
  }

  let mut blob = Vec::new();
  let mut fps = Vec::with_capacity(n);
  let mut ends = Vec::with_capacity(n);
  for i in 0..n {
    let key = keys[i].as_ref().as_bytes();
    // Minimal prefix telling this key apart from both sorted neighbors.
    // min() only matters for a lone empty key.
    // 与左右相邻键都能区分的最短前缀。min() 仅对单个空键生效。
    let keep = (lcps[i].max(lcps[i + 1]) + 1).min(key.len());
    blob.extend_from_slice(&key[..keep]);
    fps.push(fingerprint(key));
    ends.push(blob.len() as u64);
  }

  let mut offsets = PackedInts::new(width_for(blob.len() as u64), n + 1);
  offsets.push(0);
  for &end in &ends {
    offsets.push(end);
  }

  Ok(Strie {
    blob,
    offsets,
    fps,
    len: n,
    values: values.map(<[i32]>::to_vec).unwrap_or_default(),
  })
}
