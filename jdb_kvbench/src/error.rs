use thiserror::Error;

/// Harness specialized Result type.
/// 基准框架专用的 Result 类型。
pub type Result<T> = std::result::Result<T, Error>;

/// Harness error enum. Every variant is a configuration error raised before
/// any timing starts; there is no degraded mode.
/// 基准框架错误枚举。所有变体都是在计时开始前抛出的配置错误；没有降级模式。
#[derive(Error, Debug)]
pub enum Error {
  /// Workload kind is not recognized; there is no silent fallback.
  /// 无法识别的负载类型；不做静默回退。
  #[error("unknown workload: {0}")]
  UnknownWorkload(String),
  /// Key count or key length is zero.
  /// 键数量或键长为零。
  #[error("invalid key spec: count={count}, len={len}")]
  BadKeySpec { count: usize, len: usize },
  /// The string generator cannot produce enough distinct keys.
  /// 字符串生成器无法产出足够多的不同键。
  #[error("key space exhausted: got {got} of {want} distinct keys")]
  KeySpace { want: usize, got: usize },
  /// Succinct index construction failed.
  /// 简洁索引构建失败。
  #[error(transparent)]
  Strie(#[from] jdb_strie::Error),
}
