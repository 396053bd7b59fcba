//! Terrain classifications for the ground a connection crosses.

/// Terrain crossed by a direct connection between two facilities.
///
/// Each terrain carries a cost multiplier; river crossings are the most
/// expensive, open plain the baseline.
///
/// # Examples
/// ```
/// use gridspan_core::Terrain;
///
/// assert_eq!(Terrain::Plain.multiplier(), 1.0);
/// assert!(Terrain::River.multiplier() > Terrain::Hilly.multiplier());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Open ground; the cost baseline.
    #[default]
    Plain,
    /// Built-up city area.
    Urban,
    /// Mountainous or hilly ground.
    Hilly,
    /// River crossing.
    River,
    /// Forested area.
    Forest,
}

impl Terrain {
    /// Return the terrain as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use gridspan_core::Terrain;
    ///
    /// assert_eq!(Terrain::Hilly.as_str(), "hilly");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Urban => "urban",
            Self::Hilly => "hilly",
            Self::River => "river",
            Self::Forest => "forest",
        }
    }

    /// Cost multiplier for connections crossing this terrain.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Plain => 1.0,
            Self::Urban => 1.3,
            Self::Hilly => 1.8,
            Self::River => 2.5,
            Self::Forest => 1.5,
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Terrain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "urban" => Ok(Self::Urban),
            "hilly" => Ok(Self::Hilly),
            "river" => Ok(Self::River),
            "forest" => Ok(Self::Forest),
            _ => Err(format!("unknown terrain '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn default_is_plain() {
        assert_eq!(Terrain::default(), Terrain::Plain);
    }

    #[rstest]
    #[case("URBAN", Terrain::Urban)]
    #[case("forest", Terrain::Forest)]
    fn parses_known_tokens(#[case] token: &str, #[case] expected: Terrain) {
        assert_eq!(Terrain::from_str(token), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Terrain::from_str("swamp").unwrap_err();
        assert!(err.contains("unknown terrain"));
    }
}
