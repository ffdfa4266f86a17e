use crate::{config, parcel::{Metric, Parcel, ParcelSet}};

/// A parcel is an outlier when its land-value ratio reaches the cutoff. Missing ratios are kept.
#[inline]
pub fn is_outlier(parcel: &Parcel) -> bool {
    parcel.metric(Metric::LandValueRatio)
        .is_some_and(|ratio| ratio >= config::LAND_VALUE_RATIO_OUTLIER)
}

/// Drop land-value-ratio outliers, preserving input order.
pub fn remove_outliers(parcels: &ParcelSet) -> Vec<&Parcel> {
    parcels.iter()
        .filter(|parcel| !is_outlier(parcel))
        .collect()
}

/// Keep parcels with `min_area < area < max_area`. Inverted bounds keep nothing.
pub fn within_area_bounds<'a>(parcels: &[&'a Parcel], min_area: f64, max_area: f64) -> Vec<&'a Parcel> {
    parcels.iter()
        .copied()
        .filter(|parcel| min_area < parcel.area() && parcel.area() < max_area)
        .collect()
}

/// Outlier removal followed by area bounds.
pub fn apply(parcels: &ParcelSet, min_area: u32, max_area: u32) -> Vec<&Parcel> {
    let retained = remove_outliers(parcels);
    let bounded = within_area_bounds(&retained, min_area as f64, max_area as f64);

    log::info!("[pipeline::filter] {} parcels, {} after outlier removal, {} within area ({min_area}, {max_area})",
        parcels.len(), retained.len(), bounded.len());

    bounded
}
