//! Built-in fallback records used when the store cannot be loaded

use super::store::{BASE_LOCATIONS, DEFAULT_BASE_LOCATION, DELIVERY_LOCATIONS, LocationStore};
use super::types::LocationRecord;

const BASE_POSE: [f64; 6] = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0];

fn base(name: &str, x: f64) -> LocationRecord {
    let mut pose = BASE_POSE.to_vec();
    pose[0] = x;
    LocationRecord::new(name, pose)
}

/// Six tables laid out on a 3x2 planar grid
#[must_use]
pub fn delivery_locations() -> Vec<LocationRecord> {
    vec![
        LocationRecord::new("Table 1", vec![0.0, 0.0]),
        LocationRecord::new("Table 2", vec![1.0, 0.0]),
        LocationRecord::new("Table 3", vec![2.0, 0.0]),
        LocationRecord::new("Table 4", vec![0.0, 1.0]),
        LocationRecord::new("Table 5", vec![1.0, 1.0]),
        LocationRecord::new("Table 6", vec![2.0, 1.0]),
    ]
}

/// Three docking poses along the x axis
#[must_use]
pub fn base_locations() -> Vec<LocationRecord> {
    vec![base("Base 1", 0.0), base("Base 2", 1.0), base("Base 3", 2.0)]
}

#[must_use]
pub fn default_base_location() -> Vec<LocationRecord> {
    vec![base("Base 1", 0.0)]
}

/// A store holding every built-in group
#[must_use]
pub fn store() -> LocationStore {
    let mut store = LocationStore::default();
    store.insert_group(DELIVERY_LOCATIONS, delivery_locations());
    store.insert_group(BASE_LOCATIONS, base_locations());
    store.insert_group(DEFAULT_BASE_LOCATION, default_base_location());
    store
}
