//! Comparative lookup-benchmark harness for ordered key-value indexes.
//! 有序键值索引的对比查询基准框架。
//!
//! Quantifies three properties of a succinct index ([`jdb_strie::Strie`]) —
//! point-lookup latency, serialized bits per stored key, and false-positive
//! rate on absent keys — and contrasts lookup latency against three
//! reference structures: a hash map, a binary-searched sorted array, and a
//! balanced tree.
//! 量化简洁索引的三项指标：点查延迟、每键序列化位数、缺失键假阳性率，并与三种
//! 参照结构（哈希表、二分查找有序数组、平衡树）对比查询延迟。
//!
//! Pipeline: [`keyspace`] builds a deterministic present/absent key
//! partition, [`workload`] precomputes a bounded access sequence replayed by
//! mask indexing, [`adapter`] puts the four structures behind one lookup
//! contract, [`timing`] and [`runner`] turn that into ns/op, [`estimate`]
//! produces FPR and bits/key, and [`report`] shapes everything into rows
//! for an external renderer.
//! 流程：[`keyspace`] 构建确定性的存在/缺失键划分，[`workload`] 预计算按掩码
//! 回放的有界访问序列，[`adapter`] 将四种结构统一到同一查询契约之后，
//! [`timing`] 与 [`runner`] 产出 ns/op，[`estimate`] 产出假阳性率与每键位数，
//! [`report`] 汇总为供外部渲染的行。

pub mod adapter;
pub mod consts;
pub mod error;
pub mod estimate;
pub mod keyspace;
pub mod report;
pub mod runner;
pub mod setting;
pub mod timing;
pub mod workload;

pub use error::{Error, Result};
