use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod opt;

#[doc(inline)]
pub use opt::{pack, pack_batch, pack_with};

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
