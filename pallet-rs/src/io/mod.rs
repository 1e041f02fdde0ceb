/// External representation of instances and solutions, (de)serializable with serde
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use export::export_pallet;
#[doc(inline)]
pub use import::ImportIssue;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use import::import_with_issues;
