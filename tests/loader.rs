mod common;

use parcelrank::{error::LoadError, LoadOptions, Metric, ParcelSet};

fn load(path: &std::path::Path) -> Result<ParcelSet, LoadError> {
    ParcelSet::read_from_file(path, &LoadOptions::default())
}

#[test]
fn geojson_and_csv_inputs_agree() {
    let dir = tempfile::tempdir().unwrap();
    let records = common::records();
    let from_geojson = load(&common::write(dir.path(), "result.geojson", &common::geojson(&records))).unwrap();
    let from_csv = load(&common::write(dir.path(), "result.csv", &common::csv(&records))).unwrap();

    assert_eq!(from_geojson.len(), records.len());
    assert_eq!(from_csv.len(), records.len());

    for (a, b) in from_geojson.iter().zip(from_csv.iter()) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.metrics(), b.metrics());
        assert!((a.area() - b.area()).abs() < 1e-6);
    }

    let first = from_csv.get(&"0001".into()).unwrap();
    assert!((first.area() - 22_500.0).abs() < 1e-6);
    assert_eq!(from_csv.get(&"0003".into()).unwrap().metric(Metric::Drivability), None);
}

#[test]
fn gzipped_inputs_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let records = common::records();
    let set = load(&common::write(dir.path(), "result.csv.gz", &common::csv(&records))).unwrap();
    assert_eq!(set.len(), records.len());

    let set = load(&common::write(dir.path(), "result.geojson.gz", &common::geojson(&records))).unwrap();
    assert_eq!(set.len(), records.len());
}

#[test]
fn missing_geometry_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let csv = "ParcelID,r_reuse,c_reuse,i_reuse,land_value_ratio,walkability,drivability,shape_factor\n1,1,1,1,1,1,1,1\n";
    let result = load(&common::write(dir.path(), "result.csv", csv));
    assert!(matches!(result, Err(LoadError::MissingGeometry)));
}

#[test]
fn duplicate_ids_are_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut records = common::records();
    records[2].id = "0001";
    let result = load(&common::write(dir.path(), "result.geojson", &common::geojson(&records)));
    assert!(matches!(result, Err(LoadError::DuplicateId(id)) if id.as_str() == "0001"));
}

#[test]
fn unreadable_json_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load(&common::write(dir.path(), "result.geojson", "{ not json"));
    assert!(matches!(result, Err(LoadError::Json(_))));
}
