/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::USAGE_EPSILON;
