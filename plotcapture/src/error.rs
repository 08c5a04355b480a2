use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid latitude: {0} (expected -90 to 90 degrees)")]
    InvalidLatitude(f64),

    #[error("invalid longitude: {0} (expected -180 to 180 degrees)")]
    InvalidLongitude(f64),

    /// The plot can only be submitted once it has been closed.
    #[error("please select exactly 4 points on the map ({0} selected)")]
    IncompletePolygon(usize),
}

/// ensure the latitude is within [-90, 90] degrees
pub fn check_latitude(lat: f64) -> Result<(), Error> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(Error::InvalidLatitude(lat))
    }
}

/// ensure the longitude is within [-180, 180] degrees
pub fn check_longitude(lng: f64) -> Result<(), Error> {
    if (-180.0..=180.0).contains(&lng) {
        Ok(())
    } else {
        Err(Error::InvalidLongitude(lng))
    }
}

#[cfg(test)]
mod tests {
    use super::{check_latitude, check_longitude, Error};

    #[test]
    fn latitude_bounds() {
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert_eq!(check_latitude(90.5), Err(Error::InvalidLatitude(90.5)));
        assert!(check_latitude(f64::NAN).is_err());
    }

    #[test]
    fn longitude_bounds() {
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-180.1).is_err());
        assert!(check_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn incomplete_polygon_message() {
        assert_eq!(
            Error::IncompletePolygon(2).to_string(),
            "please select exactly 4 points on the map (2 selected)"
        );
    }
}
