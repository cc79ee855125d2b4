//! Tests for the uniform lookup contract across the four adapters.
//! 四个适配器统一查询契约的测试。

use aok::{OK, Void};
use jdb_kvbench::{
  adapter::{ArrayKv, KvGet, MapKv, StrieKv, TreeKv},
  setting::GetSetting,
};
use log::trace;

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_all_adapters_agree() -> Void {
  let setting = GetSetting::new(200, 16, Some(42)).unwrap();
  let set = &setting.set;
  let array = ArrayKv::new(&set.keys, &set.values);
  let adapters: [&dyn KvGet; 4] = [&setting.strie_kv, &setting.map, &array, &setting.tree];

  for (i, k) in set.keys.iter().enumerate() {
    for kv in adapters {
      assert_eq!(kv.get(k), Some(i as i32), "key={k}");
    }
  }
  for k in &set.absent_keys {
    for kv in adapters {
      assert_eq!(kv.get(k), None, "key={k}");
    }
  }

  trace!("all_adapters_agree passed");
  OK
}

#[test]
fn test_strie_side_table_rejects_false_positive() -> Void {
  // The index keeps only the one-byte prefix "a" for "alpha"; a query
  // sharing it can at most reach the side table, which must turn it away.
  // 索引只为 "alpha" 保留单字节前缀 "a"；共享该前缀的查询最多到达侧表，
  // 侧表必须将其拒之门外。
  let keys = vec!["alpha".to_string(), "bravo".to_string()];
  let values = vec![0, 1];
  let kv = StrieKv::new(&keys, &values).unwrap();

  assert_eq!(kv.get("alpha"), Some(0));
  assert_eq!(kv.get("bravo"), Some(1));
  assert_eq!(kv.get("apple"), None);
  assert_eq!(kv.get("brick"), None);
  assert_eq!(kv.get("zulu"), None);

  trace!("side_table passed");
  OK
}

#[test]
fn test_map_absent() -> Void {
  let keys = vec!["ka".to_string(), "kb".to_string()];
  let values = vec![0, 1];
  let kv = MapKv::new(&keys, &values);

  assert_eq!(kv.get("ka"), Some(0));
  assert_eq!(kv.get("kc"), None);

  trace!("map_absent passed");
  OK
}

#[test]
fn test_array_sentinel() -> Void {
  let keys = vec!["ka".to_string(), "kb".to_string(), "kd".to_string()];
  let values = vec![5, 6, 7];
  let kv = ArrayKv::new(&keys, &values);

  assert_eq!(kv.get("ka"), Some(5));
  assert_eq!(kv.get("kd"), Some(7));
  assert_eq!(kv.get("kc"), None);
  assert_eq!(kv.get(""), None);

  trace!("array_sentinel passed");
  OK
}

#[test]
fn test_tree_probe() -> Void {
  let keys = vec!["east".to_string(), "north".to_string(), "west".to_string()];
  let values = vec![1, 2, 3];
  let kv = TreeKv::new(&keys, &values);

  assert_eq!(kv.get("north"), Some(2));
  assert_eq!(kv.get("south"), None);

  trace!("tree_probe passed");
  OK
}

#[test]
fn test_setting_sanity_pair() -> Void {
  let setting = GetSetting::new(100, 8, Some(42)).unwrap();

  let idx = setting
    .set
    .keys
    .binary_search(&setting.search_key)
    .expect("search_key must be a present key");
  assert_eq!(setting.set.values[idx], setting.search_value);
  assert_eq!(setting.strie_kv.get(&setting.search_key), Some(setting.search_value));

  trace!("sanity_pair passed");
  OK
}
