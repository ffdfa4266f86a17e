use std::collections::HashMap;

use crate::{error::LoadError, geom::Reprojector};

use super::{Parcel, ParcelId};

/// The full, read-only parcel collection for one session.
#[derive(Debug)]
pub struct ParcelSet {
    parcels: Vec<Parcel>,
    index: HashMap<ParcelId, usize>, // Map between ParcelIDs and positions in `parcels`.
    projection: Reprojector,         // Source CRS -> lon/lat
}

impl ParcelSet {
    /// Build a set from in-memory records whose geometries are in `source_crs` (a PROJ.4 string).
    pub fn from_records(parcels: Vec<Parcel>, source_crs: &str) -> Result<Self, LoadError> {
        let projection = Reprojector::to_geographic(source_crs)?;

        let mut index = HashMap::with_capacity(parcels.len());
        for (i, parcel) in parcels.iter().enumerate() {
            if index.insert(parcel.id().clone(), i).is_some() {
                return Err(LoadError::DuplicateId(parcel.id().clone()));
            }
        }

        Ok(Self { parcels, index, projection })
    }

    #[inline] pub fn len(&self) -> usize { self.parcels.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.parcels.is_empty() }

    #[inline] pub fn parcels(&self) -> &[Parcel] { &self.parcels }

    #[inline] pub fn iter(&self) -> impl Iterator<Item = &Parcel> { self.parcels.iter() }

    pub fn get(&self, id: &ParcelId) -> Option<&Parcel> {
        self.index.get(id).map(|&i| &self.parcels[i])
    }

    /// Transform from the dataset's projected CRS to WGS84 lon/lat.
    #[inline] pub fn projection(&self) -> &Reprojector { &self.projection }
}
