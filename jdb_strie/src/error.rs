use thiserror::Error;

/// Strie specialized Result type.
/// Strie 专用的 Result 类型。
pub type Result<T> = std::result::Result<T, Error>;

/// Strie error enum.
/// Strie 错误枚举。
#[derive(Error, Debug)]
pub enum Error {
  /// Keys are not strictly ascending.
  /// 键不是严格升序。
  #[error("keys must be strictly ascending (violation at index {0})")]
  Unsorted(usize),
  /// A key is a prefix of its successor, so no prefix can tell them apart.
  /// 某个键是其后继的前缀，无法用前缀区分二者。
  #[error("key at index {0} is a prefix of its successor")]
  PrefixOrder(usize),
  /// Values length does not match keys length.
  /// 值数量与键数量不一致。
  #[error("got {values} values for {keys} keys")]
  ValueLen { keys: usize, values: usize },
  /// Deserialization failed.
  /// 反序列化失败。
  #[cfg(feature = "bitcode")]
  #[error("decode error: {0}")]
  Decode(String),
}
