mod carton;
mod instance;
mod item;
mod pallet;
mod problem;
mod solution;

#[doc(inline)]
pub use carton::Carton;

#[doc(inline)]
pub use item::ItemProfile;

#[doc(inline)]
pub use item::FULL_PALLET;

#[doc(inline)]
pub use instance::PLInstance;

#[doc(inline)]
pub use pallet::ItemSummary;

#[doc(inline)]
pub use pallet::Pallet;

#[doc(inline)]
pub use pallet::PalletSnapshot;

#[doc(inline)]
pub use problem::PLPlacement;

#[doc(inline)]
pub use problem::PLProblem;

#[doc(inline)]
pub use problem::PalKey;

#[doc(inline)]
pub use problem::PalletType;

#[doc(inline)]
pub use solution::PLSolution;
