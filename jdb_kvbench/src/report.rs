//! Tabular result rows, one per configuration.
//! 表格化结果行，每个配置一行。
//!
//! Rows are plain immutable records tagged with the key count, meant for an
//! external renderer (charts, tables, JSON). Insertion order follows the
//! input key-count order.
//! 行是带键数量标签的纯只读记录，供外部渲染（图表、表格、JSON）。插入顺序与
//! 输入键数量的顺序一致。

use serde::Serialize;

use crate::{
  consts::KEY_LENS,
  error::Result,
  estimate::{bits_per_key, estimate_fpr},
  runner::{KeyKind, bench_get, bench_structs},
  setting::GetSetting,
  workload::Workload,
};

/// ns/op per key length for one key count.
/// 单个键数量下按键长统计的 ns/op。
#[derive(Debug, Clone, Serialize)]
pub struct GetRow {
  pub key_count: usize,
  pub k64: u64,
  pub k128: u64,
  pub k256: u64,
}

/// Bits per stored key, per key length, for one key count.
/// 单个键数量下按键长统计的每键位数。
pub type MemRow = GetRow;

/// Cross-structure ns/op for one key count.
/// 单个键数量下各结构的 ns/op。
#[derive(Debug, Clone, Serialize)]
pub struct StructRow {
  pub key_count: usize,
  pub map: u64,
  pub strie: u64,
  pub array: u64,
  pub btree: u64,
}

/// False positive rate for one key count.
/// 单个键数量下的假阳性率。
#[derive(Debug, Clone, Serialize)]
pub struct FprRow {
  pub key_count: usize,
  pub fpr: f64,
}

/// Present vs absent lookup cost for one `(key_count, key_len)`.
/// 单个 `(key_count, key_len)` 下存在键与缺失键的查询开销。
#[derive(Debug, Clone, Serialize)]
pub struct SearchRow {
  pub key_count: usize,
  pub key_len: usize,
  pub present_ns: u64,
  pub absent_ns: u64,
}

/// One [`GetRow`] per key count, measured at the three fixed key lengths.
/// 每个键数量一条 [`GetRow`]，在三个固定键长下测量。
pub fn get_rows(
  key_counts: &[usize],
  kind: KeyKind,
  workload: Workload,
  seed: Option<u64>,
) -> Result<Vec<GetRow>> {
  let mut rows = Vec::with_capacity(key_counts.len());
  for &n in key_counts {
    let mut ns = [0u64; KEY_LENS.len()];
    for (slot, &len) in ns.iter_mut().zip(&KEY_LENS) {
      let setting = GetSetting::new(n, len, seed)?;
      *slot = bench_get(&setting, kind, workload, seed);
    }
    rows.push(GetRow {
      key_count: n,
      k64: ns[0],
      k128: ns[1],
      k256: ns[2],
    });
  }
  Ok(rows)
}

/// One [`StructRow`] per key count, measured at the shortest fixed key
/// length.
/// 每个键数量一条 [`StructRow`]，在最短固定键长下测量。
pub fn struct_rows(
  key_counts: &[usize],
  workload: Workload,
  seed: Option<u64>,
) -> Result<Vec<StructRow>> {
  let mut rows = Vec::with_capacity(key_counts.len());
  for &n in key_counts {
    let setting = GetSetting::new(n, KEY_LENS[0], seed)?;
    let ns = bench_structs(&setting, workload, seed);
    rows.push(StructRow {
      key_count: n,
      map: ns.map,
      strie: ns.strie,
      array: ns.array,
      btree: ns.btree,
    });
  }
  Ok(rows)
}

/// One [`FprRow`] per key count.
/// 每个键数量一条 [`FprRow`]。
pub fn fpr_rows(key_counts: &[usize], seed: Option<u64>) -> Result<Vec<FprRow>> {
  let mut rows = Vec::with_capacity(key_counts.len());
  for &n in key_counts {
    rows.push(FprRow {
      key_count: n,
      fpr: estimate_fpr(n, seed)?,
    });
  }
  Ok(rows)
}

/// One [`MemRow`] per key count, at the three fixed key lengths.
/// 每个键数量一条 [`MemRow`]，覆盖三个固定键长。
pub fn mem_rows(key_counts: &[usize], seed: Option<u64>) -> Result<Vec<MemRow>> {
  let mut rows = Vec::with_capacity(key_counts.len());
  for &n in key_counts {
    rows.push(MemRow {
      key_count: n,
      k64: bits_per_key(n, KEY_LENS[0], seed)?,
      k128: bits_per_key(n, KEY_LENS[1], seed)?,
      k256: bits_per_key(n, KEY_LENS[2], seed)?,
    });
  }
  Ok(rows)
}

/// One [`SearchRow`] per key count: present vs absent cost side by side.
/// 每个键数量一条 [`SearchRow`]：并列给出存在键与缺失键的开销。
pub fn search_rows(
  key_counts: &[usize],
  key_len: usize,
  workload: Workload,
  seed: Option<u64>,
) -> Result<Vec<SearchRow>> {
  let mut rows = Vec::with_capacity(key_counts.len());
  for &n in key_counts {
    let setting = GetSetting::new(n, key_len, seed)?;
    rows.push(SearchRow {
      key_count: n,
      key_len,
      present_ns: bench_get(&setting, KeyKind::Present, workload, seed),
      absent_ns: bench_get(&setting, KeyKind::Absent, workload, seed),
    });
  }
  Ok(rows)
}
