use crate::types::c_char;
use crate::ws::Strategy;

/// Size of the stack chunk used by `Strategy::Batched`.
///
/// Small enough to live comfortably on any stack, large enough that typical padding runs go out
/// in a single write(2).
pub const WS_CHUNK_SIZE: usize = 64;

/// Byte printed by the CLI when no CHAR argument is given
pub const DEFAULT_WS: c_char = b' ' as c_char;

/// Strategy used by `print_ws` and `print_ws_fd`
#[cfg(feature = "batch")]
pub const DEFAULT_STRATEGY: Strategy = Strategy::Batched;
#[cfg(not(feature = "batch"))]
pub const DEFAULT_STRATEGY: Strategy = Strategy::PerByte;
