//! False-positive-rate and memory estimators for the succinct index.
//! 简洁索引的假阳性率与内存估计器。

#![allow(clippy::cast_precision_loss)]

use jdb_strie::Strie;
use log::trace;
use rapidhash::RapidHashSet;

use crate::{
  consts::{FPR_KEY_LEN, FPR_SAMPLES_PER_KEY},
  error::Result,
  keyspace::{rand_sorted_strs, rand_str, seeded_rng},
};

/// Fraction of confirmed-absent keys the raw membership test claims present.
/// 原始成员测试将确认缺失键误判为存在的比例。
///
/// Draws candidates from the same string generator that produced the keys,
/// rejecting (without counting) any collision with a present key, until
/// exactly `key_count * FPR_SAMPLES_PER_KEY` confirmed-absent samples have
/// been evaluated. Deliberately bypasses the side table: this measures the
/// raw structure's error rate, not end-to-end lookup.
/// 用生成键的同一字符串生成器抽取候选，与存在键冲突的候选直接拒绝（不计数），
/// 直到评估满 `key_count * FPR_SAMPLES_PER_KEY` 个确认缺失样本。刻意绕过侧表：
/// 测量的是原始结构的错误率，而非端到端查询。
pub fn estimate_fpr(key_count: usize, seed: Option<u64>) -> Result<f64> {
  let keys = rand_sorted_strs(key_count, FPR_KEY_LEN, seed)?;
  let strie = Strie::new(&keys, None)?;
  let present: RapidHashSet<&str> = keys.iter().map(String::as_str).collect();

  let samples = key_count * FPR_SAMPLES_PER_KEY;
  let mut rng = seeded_rng(seed);
  let mut false_positives = 0u64;
  let mut evaluated = 0usize;
  while evaluated < samples {
    let candidate = rand_str(&mut rng, FPR_KEY_LEN);
    if present.contains(candidate.as_str()) {
      continue;
    }
    if strie.has(&candidate) {
      false_positives += 1;
    }
    evaluated += 1;
  }

  let rate = false_positives as f64 / samples as f64;
  trace!("fpr n={key_count}: {false_positives}/{samples} = {rate:.5}");
  Ok(rate)
}

/// Serialized bits per stored key; values are omitted since only the
/// structural size matters.
/// 每个已存键的序列化位数；只关心结构大小，因此省略值。
pub fn bits_per_key(key_count: usize, key_len: usize, seed: Option<u64>) -> Result<u64> {
  let keys = rand_sorted_strs(key_count, key_len, seed)?;
  let strie = Strie::new(&keys, None)?;

  let bits = strie.dump().len() as u64 * 8 / key_count as u64;
  trace!("mem n={key_count} len={key_len}: {bits} bits/key");
  Ok(bits)
}
