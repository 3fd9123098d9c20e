pub mod bundle;
mod constants;
mod options;
mod plan;
mod source;
mod types;

pub use bundle::{bundle, bundle_sync, load_source, plan_bundle, save_bundle};
pub use bundle_sheets::{CoverStyle, NumberingStyle, SheetOptions};
pub use options::*;
pub use plan::{AppendixEntry, BundlePlan, plan};
pub use source::adapt;
pub use types::*;
