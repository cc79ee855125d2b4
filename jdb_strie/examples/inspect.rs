//! Print size statistics for indexes over random key sets.
//! 打印随机键集索引的大小统计。

use std::collections::BTreeSet;

use jdb_strie::Strie;
use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::StdRng};

fn rand_keys(n: usize, len: usize, seed: u64) -> Vec<String> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut set = BTreeSet::new();
  while set.len() < n {
    let s: String = (0..len).map(|_| rng.sample(Alphanumeric) as char).collect();
    set.insert(s);
  }
  set.into_iter().collect()
}

fn main() {
  println!("=== Strie size inspection ===\n");

  for &(n, len) in &[(1_000usize, 64usize), (10_000, 64), (10_000, 128), (100_000, 64)] {
    let keys = rand_keys(n, len, 42);
    let st = Strie::new(&keys, None).unwrap();

    let mem = st.size_in_bytes();
    let dumped = st.dump().len();
    let raw = n * len;

    println!(
      "n={n:>7} len={len:>3}: mem {mem:>8} B, dump {dumped:>8} B, {:.1} bits/key, {:.2}% of raw",
      dumped as f64 * 8.0 / n as f64,
      dumped as f64 / raw as f64 * 100.0
    );
  }
}
