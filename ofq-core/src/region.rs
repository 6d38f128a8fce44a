use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV table of named ocean regions with their bounding boxes.
/// Row order is significant: both name and coordinate lookup are
/// first-match-wins over this table.
pub static REGIONS_CSV: &str = include_str!("../../fixtures/regions.csv");

/// Name of the sentinel region returned when no table entry matches.
pub const GLOBAL_OCEAN: &str = "Global Ocean";

/// A geographic bounding box: `(min_lon, min_lat, max_lon, max_lat)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> BoundingBox {
        BoundingBox {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Point-in-box test, inclusive on all edges.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.min_lat <= lat && lat <= self.max_lat && self.min_lon <= lon && lon <= self.max_lon
    }

    /// Centroid of the box as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// True if min < max on both axes and coordinates are in range.
    pub fn is_valid(&self) -> bool {
        self.min_lon < self.max_lon
            && self.min_lat < self.max_lat
            && (-180.0..=180.0).contains(&self.min_lon)
            && (-180.0..=180.0).contains(&self.max_lon)
            && (-90.0..=90.0).contains(&self.min_lat)
            && (-90.0..=90.0).contains(&self.max_lat)
    }
}

/// A named ocean region. The sentinel region carries no box and imposes
/// no spatial restriction; it only selects default model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub bounds: Option<BoundingBox>,
}

impl Region {
    /// The "global ocean" sentinel used when classification finds no match.
    pub fn global_ocean() -> Region {
        Region {
            name: GLOBAL_OCEAN.to_string(),
            bounds: None,
        }
    }
}

/// Classifies coordinates or free text into a named ocean region.
///
/// Both lookups are total: when nothing in the table matches, the
/// global-ocean sentinel is returned rather than an error.
#[derive(Debug, Clone)]
pub struct RegionClassifier {
    regions: Vec<Region>,
}

impl Default for RegionClassifier {
    fn default() -> RegionClassifier {
        RegionClassifier::from_embedded_table()
    }
}

impl RegionClassifier {
    /// Build the classifier from the embedded region fixture.
    pub fn from_embedded_table() -> RegionClassifier {
        match RegionClassifier::parse_region_csv(REGIONS_CSV) {
            Ok(regions) => RegionClassifier { regions },
            Err(e) => panic!("failed to parse embedded regions csv: {e}"),
        }
    }

    /// Parse a CSV string of region rows.
    ///
    /// Expected columns: name, min_lon, min_lat, max_lon, max_lat
    pub fn parse_region_csv(csv_object: &str) -> Result<Vec<Region>, std::io::Error> {
        let mut regions: Vec<Region> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let rho = row?;
            let parse_float = |idx: usize| -> f64 {
                rho.get(idx)
                    .and_then(|s| s.trim().parse::<f64>().ok())
                    .unwrap_or_default()
            };
            let region = Region {
                name: String::from(rho.get(0).expect("region name parse fail")),
                bounds: Some(BoundingBox::new(
                    parse_float(1),
                    parse_float(2),
                    parse_float(3),
                    parse_float(4),
                )),
            };
            regions.push(region);
        }
        Ok(regions)
    }

    /// The full region table, in lookup order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Classify a coordinate into the first region whose box contains it.
    pub fn classify(&self, lat: f64, lon: f64) -> Region {
        for region in &self.regions {
            if let Some(bounds) = region.bounds {
                if bounds.contains(lat, lon) {
                    return region.clone();
                }
            }
        }
        Region::global_ocean()
    }

    /// Classify free text by substring containment of region names,
    /// case-insensitively, first table entry wins.
    pub fn classify_by_name(&self, text: &str) -> Option<Region> {
        let lowered = text.to_lowercase();
        self.regions
            .iter()
            .find(|region| lowered.contains(&region.name.to_lowercase()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundingBox, Region, RegionClassifier, GLOBAL_OCEAN};

    #[test]
    fn test_region_table_loads() {
        let classifier = RegionClassifier::from_embedded_table();
        assert_eq!(classifier.regions().len(), 10);
        assert_eq!(classifier.regions()[0].name, "Bay of Bengal");
    }

    #[test]
    fn test_classify_by_name_with_noise() {
        let classifier = RegionClassifier::from_embedded_table();
        let direct = classifier.classify_by_name("bay of bengal").unwrap();
        let noisy = classifier
            .classify_by_name("show me some floats drifting in the Bay of Bengal please")
            .unwrap();
        assert_eq!(direct, noisy);
        assert_eq!(
            direct.bounds.unwrap(),
            BoundingBox::new(80.0, 5.0, 100.0, 25.0)
        );
    }

    #[test]
    fn test_classify_by_name_miss() {
        let classifier = RegionClassifier::from_embedded_table();
        assert!(classifier.classify_by_name("the north sea").is_none());
    }

    #[test]
    fn test_classify_by_name_table_order() {
        // "Indian Ocean" precedes "Equatorial Indian Ocean" in the table,
        // so its name matches first even inside the longer phrase.
        let classifier = RegionClassifier::from_embedded_table();
        let region = classifier
            .classify_by_name("equatorial indian ocean chlorophyll")
            .unwrap();
        assert_eq!(region.name, "Indian Ocean");
    }

    #[test]
    fn test_classify_coordinates_first_box_wins() {
        let classifier = RegionClassifier::from_embedded_table();
        // (15N, 90E) sits inside both the Bay of Bengal and the wider
        // Indian Ocean boxes; the earlier table entry wins.
        let region = classifier.classify(15.0, 90.0);
        assert_eq!(region.name, "Bay of Bengal");

        let region = classifier.classify(15.0, 70.0);
        assert_eq!(region.name, "Arabian Sea");

        let region = classifier.classify(-20.0, 80.0);
        assert_eq!(region.name, "Indian Ocean");
    }

    #[test]
    fn test_classify_coordinates_sentinel() {
        let classifier = RegionClassifier::from_embedded_table();
        let region = classifier.classify(80.0, -30.0);
        assert_eq!(region.name, GLOBAL_OCEAN);
        assert!(region.bounds.is_none());
        assert_eq!(region, Region::global_ocean());
    }

    #[test]
    fn test_bounding_box_contains_and_center() {
        let bbox = BoundingBox::new(80.0, 5.0, 100.0, 25.0);
        assert!(bbox.contains(5.0, 80.0));
        assert!(bbox.contains(25.0, 100.0));
        assert!(!bbox.contains(26.0, 90.0));
        assert_eq!(bbox.center(), (15.0, 90.0));
        assert!(bbox.is_valid());
        assert!(!BoundingBox::new(100.0, 5.0, 80.0, 25.0).is_valid());
    }
}
