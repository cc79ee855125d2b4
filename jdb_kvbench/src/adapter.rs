//! One lookup contract over four structurally different indexes.
//! 四种结构各异的索引之上的统一查询契约。

use std::{cmp::Ordering, collections::BTreeSet};

use jdb_strie::Strie;
use rapidhash::RapidHashMap;

use crate::error::Result;

/// Single-method lookup capability: `Some(value)` when `key` is present.
/// 单方法查询能力：`key` 存在时返回 `Some(value)`。
pub trait KvGet {
  fn get(&self, key: &str) -> Option<i32>;
}

/// Key-value element ordered by key alone; shared by the succinct adapter's
/// side table and the tree adapter.
/// 仅按键排序的键值元素；由简洁索引适配器的侧表与树适配器共用。
#[derive(Debug, Clone)]
pub struct KvElt {
  pub key: String,
  pub val: i32,
}

impl PartialEq for KvElt {
  fn eq(&self, other: &Self) -> bool {
    self.key == other.key
  }
}

impl Eq for KvElt {}

impl PartialOrd for KvElt {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for KvElt {
  /// Lexicographic key order; values never participate.
  /// 按键的字典序；值不参与比较。
  fn cmp(&self, other: &Self) -> Ordering {
    self.key.cmp(&other.key)
  }
}

fn make_elts(keys: &[String], values: &[i32]) -> Vec<KvElt> {
  keys
    .iter()
    .zip(values)
    .map(|(k, &v)| KvElt {
      key: k.clone(),
      val: v,
    })
    .collect()
}

/// Succinct index plus a full key-value side table that rejects the index's
/// false positives, making the adapter exact.
/// 简洁索引加完整键值侧表，侧表排除索引的假阳性，使适配器整体精确。
pub struct StrieKv {
  strie: Strie,
  elts: Vec<KvElt>,
}

impl StrieKv {
  pub fn new(keys: &[String], values: &[i32]) -> Result<Self> {
    Ok(Self {
      strie: Strie::new(keys, Some(values))?,
      elts: make_elts(keys, values),
    })
  }
}

impl KvGet for StrieKv {
  fn get(&self, key: &str) -> Option<i32> {
    let idx = self.strie.position(key)?;
    let elt = &self.elts[idx];
    // An index false positive surfaces as a key mismatch, not an error.
    // 索引假阳性表现为键不匹配，而非错误。
    (elt.key == key).then_some(elt.val)
  }
}

/// Hash-map reference structure.
/// 哈希表参照结构。
pub struct MapKv {
  map: RapidHashMap<String, i32>,
}

impl MapKv {
  #[must_use]
  pub fn new(keys: &[String], values: &[i32]) -> Self {
    Self {
      map: keys.iter().cloned().zip(values.iter().copied()).collect(),
    }
  }
}

impl KvGet for MapKv {
  #[inline]
  fn get(&self, key: &str) -> Option<i32> {
    self.map.get(key).copied()
  }
}

/// Binary search straight over the sorted key/value slices.
/// 直接在有序键/值切片上二分查找。
pub struct ArrayKv<'a> {
  keys: &'a [String],
  values: &'a [i32],
}

impl<'a> ArrayKv<'a> {
  #[must_use]
  pub fn new(keys: &'a [String], values: &'a [i32]) -> Self {
    Self { keys, values }
  }
}

impl KvGet for ArrayKv<'_> {
  #[inline]
  fn get(&self, key: &str) -> Option<i32> {
    self
      .keys
      .binary_search_by(|k| k.as_str().cmp(key))
      .ok()
      .map(|i| self.values[i])
  }
}

/// Balanced tree keyed by comparable elements.
/// 以可比较元素为键的平衡树。
pub struct TreeKv {
  set: BTreeSet<KvElt>,
}

impl TreeKv {
  #[must_use]
  pub fn new(keys: &[String], values: &[i32]) -> Self {
    Self {
      set: make_elts(keys, values).into_iter().collect(),
    }
  }
}

impl KvGet for TreeKv {
  fn get(&self, key: &str) -> Option<i32> {
    // Every search goes through a freshly built key-ordered probe element.
    // 每次查询都构造一个按键排序的探测元素。
    let probe = KvElt {
      key: key.to_owned(),
      val: 0,
    };
    self.set.get(&probe).map(|e| e.val)
  }
}
