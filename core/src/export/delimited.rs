use super::boundary_ring;
use super::number::repr_f64;
use crate::model::{ProbabilityField, SearchEnvelope};
use crate::prelude::{SearchError, SearchResult};

pub const CSV_HEADER: [&str; 4] = ["Latitude", "Longitude", "Probability", "Type"];

/// Probability rows at or below this value are left out of the CSV.
pub const CSV_PROBABILITY_THRESHOLD: f64 = 0.2;

/// CSV export: one center row, 36 boundary rows, then every field point
/// above [`CSV_PROBABILITY_THRESHOLD`] in generation order. Rows end in CRLF.
pub fn to_csv(envelope: &SearchEnvelope, field: &ProbabilityField) -> SearchResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    write_row(&mut writer, CSV_HEADER)?;
    write_row(
        &mut writer,
        [
            repr_f64(envelope.center.lat),
            repr_f64(envelope.center.lon),
            repr_f64(1.0),
            "center".to_string(),
        ],
    )?;
    for point in boundary_ring(envelope, false) {
        write_row(
            &mut writer,
            [
                repr_f64(point.lat),
                repr_f64(point.lon),
                repr_f64(0.0),
                "boundary".to_string(),
            ],
        )?;
    }
    for point in field.above(CSV_PROBABILITY_THRESHOLD) {
        write_row(
            &mut writer,
            [
                repr_f64(point.lat),
                repr_f64(point.lon),
                repr_f64(point.probability),
                "probability".to_string(),
            ],
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| SearchError::Export(format!("flushing CSV: {}", err)))?;
    String::from_utf8(bytes).map_err(|err| SearchError::Export(format!("CSV encoding: {}", err)))
}

fn write_row<I, T>(writer: &mut csv::Writer<Vec<u8>>, row: I) -> SearchResult<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer
        .write_record(row)
        .map_err(|err| SearchError::Export(format!("writing CSV row: {}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::LatLon;
    use crate::model::ProbabilityPoint;

    fn envelope() -> SearchEnvelope {
        SearchEnvelope {
            center: LatLon::new(38.5, -120.25),
            radius_nm: 30.0,
            glide_distance_nm: 15.0,
        }
    }

    fn field() -> ProbabilityField {
        ProbabilityField::new(vec![
            ProbabilityPoint::new(38.6, -120.2, 1.0),
            ProbabilityPoint::new(38.4, -120.3, 0.2),
            ProbabilityPoint::new(38.45, -120.1, 0.35),
            ProbabilityPoint::new(38.7, -120.0, 0.05),
        ])
    }

    #[test]
    fn row_count_is_center_boundary_and_significant_points() {
        let csv = to_csv(&envelope(), &field()).unwrap();
        let lines: Vec<&str> = csv.split_terminator("\r\n").collect();
        // header + center + 36 boundary + 2 points above 0.2
        assert_eq!(lines.len(), 1 + 1 + 36 + 2);
        assert_eq!(lines[0], "Latitude,Longitude,Probability,Type");
        assert_eq!(lines[1], "38.5,-120.25,1.0,center");
        assert!(lines[2].ends_with(",0.0,boundary"));
        assert_eq!(lines[38], "38.6,-120.2,1.0,probability");
        assert_eq!(lines[39], "38.45,-120.1,0.35,probability");
    }

    #[test]
    fn rows_end_with_crlf() {
        let csv = to_csv(&envelope(), &ProbabilityField::default()).unwrap();
        assert!(csv.ends_with("boundary\r\n"));
        assert_eq!(csv.matches("\r\n").count(), 38);
    }

    #[test]
    fn first_boundary_row_is_due_north() {
        let csv = to_csv(&envelope(), &ProbabilityField::default()).unwrap();
        let row = csv.split("\r\n").nth(2).unwrap();
        let lon: f64 = row.split(',').nth(1).unwrap().parse().unwrap();
        let lat: f64 = row.split(',').next().unwrap().parse().unwrap();
        assert!(lat > 38.5);
        assert!((lon - -120.25).abs() < 1e-9);
    }

    #[test]
    fn boundary_rows_match_reference_digits() {
        let envelope = SearchEnvelope {
            center: LatLon::new(10.0, 20.0),
            radius_nm: 168.63,
            glide_distance_nm: 80.0,
        };
        let csv = to_csv(&envelope, &ProbabilityField::default()).unwrap();
        // header, center, then boundary rows from 0°; 210° is the 22nd
        let row = csv.split("\r\n").nth(2 + 21).unwrap();
        assert!(row.starts_with("7.564904116843881,"), "{}", row);
        assert!(row.ends_with(",0.0,boundary"));
    }
}
