#![allow(dead_code)]

use std::{fs, io::Write, path::{Path, PathBuf}};

use flate2::{write::GzEncoder, Compression};
use serde_json::{json, Value};

pub const CSV_HEADER: &str = "ParcelID,geometry,r_reuse,c_reuse,i_reuse,land_value_ratio,walkability,drivability,shape_factor";

/// One test parcel: an axis-aligned square in EPSG:5070 meters near Atlanta.
pub struct Record {
    pub id: &'static str,
    pub side: f64,
    pub metrics: [Option<f64>; 7],
}

impl Record {
    fn ring(&self, index: usize) -> Vec<[f64; 2]> {
        let x = 1_100_000.0 + 1_000.0 * index as f64;
        let y = 1_250_000.0;
        vec![[x, y], [x + self.side, y], [x + self.side, y + self.side], [x, y + self.side], [x, y]]
    }
}

pub fn records() -> Vec<Record> {
    vec![
        //                                  r          c          i          lvr          walk        drive       shape
        Record { id: "0001", side: 150.0, metrics: [Some(0.9), Some(0.1), Some(0.2), Some(4.0),  Some(10.0), Some(20.0), Some(0.8)] },
        Record { id: "0002", side: 200.0, metrics: [Some(0.2), Some(0.8), Some(0.1), Some(60.0), Some(90.0), Some(90.0), Some(0.9)] },
        Record { id: "0003", side: 120.0, metrics: [Some(0.5), Some(0.5), Some(0.9), Some(12.0), Some(30.0), None,       Some(0.7)] },
        Record { id: "0004", side: 50.0,  metrics: [Some(0.7), Some(0.3), Some(0.3), Some(2.0),  Some(80.0), Some(80.0), Some(0.5)] },
        Record { id: "0005", side: 300.0, metrics: [Some(0.1), Some(0.9), Some(0.8), Some(49.0), Some(5.0),  Some(15.0), None] },
    ]
}

fn metric_json(value: Option<f64>) -> Value {
    value.map_or(Value::Null, |v| json!(v))
}

pub fn geojson(records: &[Record]) -> String {
    let features: Vec<Value> = records.iter().enumerate()
        .map(|(i, record)| {
            let [r, c, ind, lvr, walk, drive, shape] = record.metrics.map(metric_json);
            json!({
                "type": "Feature",
                "geometry": { "type": "Polygon", "coordinates": [record.ring(i)] },
                "properties": {
                    "ParcelID": record.id,
                    "r_reuse": r, "c_reuse": c, "i_reuse": ind,
                    "land_value_ratio": lvr, "walkability": walk, "drivability": drive,
                    "shape_factor": shape,
                },
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features }).to_string()
}

/// Little-endian WKB MultiPolygon with one single-ring polygon.
fn wkb_hex(ring: &[[f64; 2]]) -> String {
    let mut bytes = vec![1u8];
    bytes.extend(6u32.to_le_bytes());
    bytes.extend(1u32.to_le_bytes());
    bytes.push(1);
    bytes.extend(3u32.to_le_bytes());
    bytes.extend(1u32.to_le_bytes());
    bytes.extend((ring.len() as u32).to_le_bytes());
    for [x, y] in ring {
        bytes.extend(x.to_le_bytes());
        bytes.extend(y.to_le_bytes());
    }
    hex::encode(bytes)
}

pub fn csv(records: &[Record]) -> String {
    let mut out = format!("{CSV_HEADER}\n");
    for (i, record) in records.iter().enumerate() {
        let cells: Vec<String> = record.metrics.iter()
            .map(|value| value.map(|v| v.to_string()).unwrap_or_default())
            .collect();
        out.push_str(&format!("{},{},{}\n", record.id, wkb_hex(&record.ring(i)), cells.join(",")));
    }
    out
}

pub fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if name.ends_with(".gz") {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(contents.as_bytes()).unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();
    } else {
        fs::write(&path, contents).unwrap();
    }
    path
}
