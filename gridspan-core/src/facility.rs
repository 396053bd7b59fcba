//! Facilities: located, categorised nodes eligible for network connection.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`, in
//! degrees. Categories carry the priority multiplier used by the cost
//! model to discount socially valuable connections.

use geo::Coord;

/// Category of a facility, ordered roughly by connection priority.
///
/// The category determines the priority multiplier applied to connection
/// costs: hospitals receive the deepest discount, commercial buildings pay
/// a premium.
///
/// # Examples
/// ```
/// use gridspan_core::FacilityCategory;
///
/// assert_eq!(FacilityCategory::Hospital.as_str(), "hospital");
/// assert!(FacilityCategory::Hospital.priority_multiplier() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FacilityCategory {
    /// Medical facilities; highest connection priority.
    Hospital,
    /// Educational facilities.
    School,
    /// Administrative and civic buildings.
    Government,
    /// Housing blocks and residential complexes.
    Residential,
    /// Offices, markets, and other commercial premises.
    Commercial,
    /// Network data centres; the first one added becomes the hub.
    DataCenter,
}

impl FacilityCategory {
    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use gridspan_core::FacilityCategory;
    ///
    /// assert_eq!(FacilityCategory::DataCenter.as_str(), "data-center");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::School => "school",
            Self::Government => "government",
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::DataCenter => "data-center",
        }
    }

    /// Priority multiplier applied to connection costs touching this
    /// category.
    ///
    /// Values below `1.0` are discounts, values above are premiums. The
    /// cost model averages the multipliers of a connection's two
    /// endpoints.
    #[must_use]
    pub const fn priority_multiplier(self) -> f64 {
        match self {
            Self::Hospital => 0.7,
            Self::School => 0.8,
            Self::Government => 0.9,
            Self::DataCenter => 1.0,
            Self::Residential => 1.1,
            Self::Commercial => 1.2,
        }
    }
}

impl std::fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FacilityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hospital" => Ok(Self::Hospital),
            "school" => Ok(Self::School),
            "government" => Ok(Self::Government),
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            "data-center" | "data_center" | "datacenter" => Ok(Self::DataCenter),
            _ => Err(format!("unknown facility category '{s}'")),
        }
    }
}

/// A located facility eligible for connection to the network.
///
/// Identifiers are dense indices into the owning
/// [`FacilityNetwork`](crate::FacilityNetwork); the network rejects ids
/// outside its configured capacity.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use gridspan_core::{Facility, FacilityCategory};
///
/// let facility = Facility::new(
///     0,
///     "City Hospital",
///     Coord { x: 74.0, y: 18.5 },
///     FacilityCategory::Hospital,
///     1200,
/// );
/// assert_eq!(facility.id, 0);
/// assert_eq!(facility.category, FacilityCategory::Hospital);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    /// Dense identifier, also the facility's index in the network
    /// matrices.
    pub id: usize,
    /// Display name.
    pub name: String,
    /// Geospatial position (`x = longitude`, `y = latitude`, degrees).
    pub location: Coord<f64>,
    /// Category driving the priority multiplier.
    pub category: FacilityCategory,
    /// Population served, used by the cost model's efficiency discount.
    pub population: u32,
}

impl Facility {
    /// Construct a facility.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use gridspan_core::{Facility, FacilityCategory};
    ///
    /// let facility = Facility::new(
    ///     3,
    ///     "Central School",
    ///     Coord { x: 74.01, y: 18.52 },
    ///     FacilityCategory::School,
    ///     800,
    /// );
    /// assert_eq!(facility.name, "Central School");
    /// ```
    pub fn new(
        id: usize,
        name: impl Into<String>,
        location: Coord<f64>,
        category: FacilityCategory,
        population: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            category,
            population,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(
            FacilityCategory::Residential.to_string(),
            FacilityCategory::Residential.as_str()
        );
    }

    #[rstest]
    #[case("hospital", FacilityCategory::Hospital)]
    #[case("DATA_CENTER", FacilityCategory::DataCenter)]
    #[case("data-center", FacilityCategory::DataCenter)]
    fn parses_known_tokens(#[case] token: &str, #[case] expected: FacilityCategory) {
        assert_eq!(FacilityCategory::from_str(token), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = FacilityCategory::from_str("warehouse").unwrap_err();
        assert!(err.contains("unknown facility category"));
    }

    #[rstest]
    fn hospitals_are_cheaper_than_commercial() {
        assert!(
            FacilityCategory::Hospital.priority_multiplier()
                < FacilityCategory::Commercial.priority_multiplier()
        );
    }
}
