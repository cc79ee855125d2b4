//! Benchmark constants.
//! 基准测试常量。

use std::time::Duration;

/// Key lengths covered by per-length rows.
/// 按键长行覆盖的键长集合。
pub const KEY_LENS: [usize; 3] = [64, 128, 256];

/// Confirmed-absent samples per present key during FPR estimation.
/// FPR 估计中每个存在键对应的确认缺失采样数。
pub const FPR_SAMPLES_PER_KEY: usize = 100;

/// Key length used by the FPR estimator.
/// FPR 估计使用的键长。
pub const FPR_KEY_LEN: usize = 64;

/// Default wall-time target for one calibrated measurement.
/// 单次校准测量的默认墙钟时间目标。
pub const BENCH_TARGET: Duration = Duration::from_secs(1);

/// Iteration-count ceiling for one measurement.
/// 单次测量的迭代次数上限。
pub const MAX_ITERS: u64 = 1_000_000_000;
