//! Timed lookup runs over precomputed keys and access sequences.
//! 在预先计算好的键与访问序列上执行计时查询。

use std::{str::FromStr, time::Duration};

use log::debug;

use crate::{
  adapter::{ArrayKv, KvGet},
  consts::BENCH_TARGET,
  setting::GetSetting,
  timing::{self, Measurement},
  workload::{Workload, max_mask},
};

/// Which half of the key space a run looks up.
/// 一次运行查询键空间的哪一半。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
  Present,
  Absent,
}

impl FromStr for KeyKind {
  type Err = std::convert::Infallible;

  /// `"present"` selects present keys; anything else means absent.
  /// `"present"` 选择存在键；其余一律视为缺失键。
  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    Ok(if s == "present" {
      Self::Present
    } else {
      Self::Absent
    })
  }
}

/// Time one adapter cycling through the access sequence by mask indexing.
/// Keys and accesses are fully precomputed; the timed loop only indexes,
/// looks up, and folds the result into the sink.
/// 用掩码索引循环访问序列对单个适配器计时。键与访问序列均已预计算；计时循环
/// 只做索引、查询并把结果折叠进汇聚值。
fn bench_kv<T: KvGet>(
  kv: &T,
  keys: &[String],
  accesses: &[usize],
  mask: usize,
  target: Duration,
) -> Measurement {
  let mut i = 0usize;
  timing::benchmark_with(target, || {
    let key = &keys[accesses[i & mask]];
    i = i.wrapping_add(1);
    kv.get(key).unwrap_or(-1)
  })
}

/// ns/op of the succinct-KV adapter for `kind` keys under `workload`.
/// 简洁 KV 适配器对 `kind` 键在 `workload` 下的 ns/op。
#[must_use]
pub fn bench_get(setting: &GetSetting, kind: KeyKind, workload: Workload, seed: Option<u64>) -> u64 {
  bench_get_with(setting, kind, workload, seed, BENCH_TARGET)
}

/// Like [`bench_get`] with an explicit measurement window.
/// 与 [`bench_get`] 相同，但可指定测量窗口。
#[must_use]
pub fn bench_get_with(
  setting: &GetSetting,
  kind: KeyKind,
  workload: Workload,
  seed: Option<u64>,
  target: Duration,
) -> u64 {
  let keys = match kind {
    KeyKind::Present => &setting.set.keys,
    KeyKind::Absent => &setting.set.absent_keys,
  };
  let n = keys.len();
  let mask = max_mask(n);
  let accesses = workload.accesses(n, seed);

  let m = bench_kv(&setting.strie_kv, keys, &accesses, mask, target);
  debug!("strie {kind:?} n={n}: {} ns/op", m.ns_per_op());
  m.ns_per_op()
}

/// Cross-structure ns/op over the same present keys and accesses.
/// 各结构在同一批存在键与访问序列上的 ns/op。
#[derive(Debug, Clone, Copy)]
pub struct StructNs {
  pub map: u64,
  pub strie: u64,
  pub array: u64,
  pub btree: u64,
}

/// ns/op of all four adapters over present keys under `workload`.
/// 四个适配器在存在键上、`workload` 下的 ns/op。
#[must_use]
pub fn bench_structs(setting: &GetSetting, workload: Workload, seed: Option<u64>) -> StructNs {
  bench_structs_with(setting, workload, seed, BENCH_TARGET)
}

/// Like [`bench_structs`] with an explicit measurement window.
/// 与 [`bench_structs`] 相同，但可指定测量窗口。
#[must_use]
pub fn bench_structs_with(
  setting: &GetSetting,
  workload: Workload,
  seed: Option<u64>,
  target: Duration,
) -> StructNs {
  let keys = &setting.set.keys;
  let n = keys.len();
  let mask = max_mask(n);
  let accesses = workload.accesses(n, seed);
  let array_kv = ArrayKv::new(&setting.set.keys, &setting.set.values);

  let ns = StructNs {
    strie: bench_kv(&setting.strie_kv, keys, &accesses, mask, target).ns_per_op(),
    map: bench_kv(&setting.map, keys, &accesses, mask, target).ns_per_op(),
    array: bench_kv(&array_kv, keys, &accesses, mask, target).ns_per_op(),
    btree: bench_kv(&setting.tree, keys, &accesses, mask, target).ns_per_op(),
  };
  debug!(
    "structs n={n}: map={} strie={} array={} btree={} ns/op",
    ns.map, ns.strie, ns.array, ns.btree
  );
  ns
}
