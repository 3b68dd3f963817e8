//! Geographic coordinate type.

use std::fmt;

/// A WGS84 coordinate pair in signed decimal degrees.
///
/// Both components are required. Requests arriving with either one missing
/// are rejected at the web boundary before any upstream call is made, so a
/// `Coordinate` value always carries a complete pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_space_separated() {
        let coord = Coordinate::new(59.3293, 18.0686);
        assert_eq!(coord.to_string(), "59.3293 18.0686");
    }

    #[test]
    fn display_keeps_sign() {
        let coord = Coordinate::new(-33.8688, 151.2093);
        assert_eq!(coord.to_string(), "-33.8688 151.2093");
    }
}
