//! Run the full measurement suite on small inputs and print one JSON row
//! per line for external rendering.
//! 在小规模输入上运行完整测量，按行打印 JSON 结果供外部渲染。

use jdb_kvbench::{
  report::{fpr_rows, get_rows, mem_rows, search_rows, struct_rows},
  runner::KeyKind,
  workload::Workload,
};
use serde_json::json;

fn main() {
  let key_counts = [100usize, 1_000];
  let seed = Some(42);

  let mut results = Vec::new();

  for r in get_rows(&key_counts, KeyKind::Present, Workload::Zipf, seed).unwrap() {
    results.push(json!({"group": "get", "row": r}));
  }
  for r in struct_rows(&key_counts, Workload::Zipf, seed).unwrap() {
    results.push(json!({"group": "structs", "row": r}));
  }
  for r in search_rows(&key_counts, 64, Workload::Zipf, seed).unwrap() {
    results.push(json!({"group": "search", "row": r}));
  }
  for r in fpr_rows(&key_counts, seed).unwrap() {
    results.push(json!({"group": "fpr", "row": r}));
  }
  for r in mem_rows(&key_counts, seed).unwrap() {
    results.push(json!({"group": "mem", "row": r}));
  }

  for r in &results {
    println!("{r}");
  }
}
