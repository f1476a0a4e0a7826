use super::IngestionError;
use skyroutes_core::model::airport::AirportRecord;
use std::path::Path;

/// reads airport records from a headered CSV file with the field order
/// `id,name,city,iata,icao,lat,lng`. empty optional fields deserialize to
/// `None`. a row with the wrong arity or a non-numeric coordinate fails
/// with the offending line number rather than producing NaN coordinates;
/// coordinate range checks happen later at catalog build.
pub fn read_airports_csv(path: &Path) -> Result<Vec<AirportRecord>, IngestionError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| IngestionError::OpenFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut records: Vec<AirportRecord> = vec![];
    for (row_index, row) in reader.deserialize::<AirportRecord>().enumerate() {
        let record = row.map_err(|e| {
            let line = e
                .position()
                .map(|p| p.line())
                .unwrap_or(row_index as u64 + 2);
            IngestionError::MalformedRow { line, source: e }
        })?;
        records.push(record);
    }

    log::info!("read {} airport records from {:?}", records.len(), path);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use skyroutes_core::model::airport::AirportId;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("test invariant failed");
        file.write_all(contents.as_bytes())
            .expect("test invariant failed");
        file
    }

    #[test]
    fn test_read_valid_rows() {
        let file = write_csv(
            "id,name,city,iata,icao,lat,lng\n\
             1,John F Kennedy Intl,New York,JFK,KJFK,40.6413,-73.7781\n\
             2,Los Angeles Intl,Los Angeles,LAX,KLAX,33.9416,-118.4085\n",
        );
        let records = read_airports_csv(file.path()).expect("test invariant failed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, AirportId(1));
        assert_eq!(records[0].iata.as_deref(), Some("JFK"));
        assert_abs_diff_eq!(records[1].lat, 33.9416, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_optional_fields_become_none() {
        let file = write_csv(
            "id,name,city,iata,icao,lat,lng\n\
             7,Unlabeled Strip,,,,-12.5,130.9\n",
        );
        let records = read_airports_csv(file.path()).expect("test invariant failed");
        assert_eq!(records[0].city, None);
        assert_eq!(records[0].iata, None);
        assert_eq!(records[0].icao, None);
    }

    #[test]
    fn test_non_numeric_coordinate_is_rejected() {
        let file = write_csv(
            "id,name,city,iata,icao,lat,lng\n\
             1,John F Kennedy Intl,New York,JFK,KJFK,forty,-73.7781\n",
        );
        let result = read_airports_csv(file.path());
        assert!(matches!(
            result,
            Err(IngestionError::MalformedRow { line: 2, .. })
        ));
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let file = write_csv(
            "id,name,city,iata,icao,lat,lng\n\
             1,John F Kennedy Intl,New York,JFK,KJFK,40.6413,-73.7781\n\
             2,Los Angeles Intl,Los Angeles\n",
        );
        let result = read_airports_csv(file.path());
        assert!(matches!(result, Err(IngestionError::MalformedRow { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_airports_csv(Path::new("/nonexistent/airports.csv"));
        assert!(matches!(result, Err(IngestionError::OpenFailed { .. })));
    }
}
