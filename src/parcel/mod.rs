mod id;
mod metric;
mod parcel;
mod read;
mod set;

pub use id::ParcelId;
pub use metric::{Metric, Metrics, ReuseCategory};
pub use parcel::Parcel;
pub use read::LoadOptions;
pub use set::ParcelSet;
