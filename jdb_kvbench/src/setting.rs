//! Per-configuration benchmark fixture.
//! 每个配置一份的基准测试夹具。

use rand::Rng;

use crate::{
  adapter::{MapKv, StrieKv, TreeKv},
  error::Result,
  keyspace::{KeySet, seeded_rng},
};

/// Everything one `(key_count, key_len)` configuration needs: the key
/// partition, the built structures, and one present key/value pair for
/// sanity checks. Built fresh per configuration and dropped after its runs.
/// 单个 `(key_count, key_len)` 配置所需的一切：键划分、已构建的各结构，以及
/// 一对用于健全性检查的存在键值。每个配置新建，跑完即弃。
pub struct GetSetting {
  pub set: KeySet,
  pub strie_kv: StrieKv,
  pub map: MapKv,
  pub tree: TreeKv,
  pub search_key: String,
  pub search_value: i32,
}

impl GetSetting {
  /// The array adapter borrows `set` at bench time and needs no prebuilt
  /// structure here.
  /// 数组适配器在测量时直接借用 `set`，无需在此预构建。
  pub fn new(count: usize, len: usize, seed: Option<u64>) -> Result<Self> {
    let set = KeySet::new(count, len, seed)?;
    let strie_kv = StrieKv::new(&set.keys, &set.values)?;
    let map = MapKv::new(&set.keys, &set.values);
    let tree = TreeKv::new(&set.keys, &set.values);

    let mut rng = seeded_rng(seed);
    let idx = rng.random_range(0..count);

    Ok(Self {
      search_key: set.keys[idx].clone(),
      search_value: set.values[idx],
      set,
      strie_kv,
      map,
      tree,
    })
  }
}
