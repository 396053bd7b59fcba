//! Monetary cost model for fibre connections.
//!
//! Converts a geodesic distance plus facility and terrain attributes into
//! an adjusted cost in millions of rupees. All functions here are pure;
//! the model never validates its inputs, so a negative distance propagates
//! into a negative base cost (subsequently floored at
//! [`CostModel::minimum_cost`]).

use crate::{Facility, Terrain};

/// Calibration constants for the connection cost model.
///
/// The defaults are the canonical values used by the planning survey:
/// ₹2.5M per kilometre of fibre, a population-efficiency discount clamped
/// to `[0.7, 1.2]`, and a ₹0.5M minimum viable connection cost. The clamp
/// bounds have no derivation beyond survey calibration, which is why they
/// are fields rather than literals.
///
/// # Examples
/// ```
/// use gridspan_core::CostModel;
///
/// let model = CostModel::default();
/// assert_eq!(model.base_rate_per_km, 2.5);
/// assert_eq!(model.minimum_cost, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// Base cost per kilometre of fibre, in millions of rupees.
    pub base_rate_per_km: f64,
    /// Lower clamp bound for the population-efficiency factor.
    pub population_factor_floor: f64,
    /// Upper clamp bound for the population-efficiency factor.
    pub population_factor_ceiling: f64,
    /// Minimum viable connection cost, applied after all multipliers.
    pub minimum_cost: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            base_rate_per_km: 2.5,
            population_factor_floor: 0.7,
            population_factor_ceiling: 1.2,
            minimum_cost: 0.5,
        }
    }
}

impl CostModel {
    /// Adjusted cost, in millions of rupees, of connecting `src` to `dest`
    /// across `distance_km` of `terrain`.
    ///
    /// The base distance cost is scaled by the terrain multiplier, the
    /// averaged endpoint priority multipliers, and the population
    /// efficiency factor, then floored at [`Self::minimum_cost`].
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use gridspan_core::{CostModel, Facility, FacilityCategory, Terrain};
    ///
    /// let model = CostModel::default();
    /// let hub = Facility::new(0, "DC", Coord { x: 0.0, y: 0.0 }, FacilityCategory::DataCenter, 0);
    /// let school = Facility::new(1, "School", Coord { x: 0.0, y: 0.1 }, FacilityCategory::School, 500);
    ///
    /// let cost = model.adjusted_cost(10.0, Terrain::Plain, &hub, &school);
    /// assert!(cost >= model.minimum_cost);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the cost model is floating-point by definition"
    )]
    pub fn adjusted_cost(
        &self,
        distance_km: f64,
        terrain: Terrain,
        src: &Facility,
        dest: &Facility,
    ) -> f64 {
        let base = distance_km * self.base_rate_per_km;
        let terrain_adjusted = base * terrain.multiplier();
        let priority = (src.category.priority_multiplier() + dest.category.priority_multiplier())
            / 2.0;
        let cost = terrain_adjusted * priority * self.population_efficiency(src, dest);
        cost.max(self.minimum_cost)
    }

    /// Population-efficiency factor for a facility pair.
    ///
    /// Serving more people earns a discount: the factor is
    /// `1 - log10(pop_a + pop_b + 1) / 10`, clamped to
    /// `[population_factor_floor, population_factor_ceiling]`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the cost model is floating-point by definition"
    )]
    pub fn population_efficiency(&self, src: &Facility, dest: &Facility) -> f64 {
        let served = f64::from(src.population) + f64::from(dest.population);
        let raw = 1.0 - (served + 1.0).log10() / 10.0;
        raw.clamp(self.population_factor_floor, self.population_factor_ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FacilityCategory;
    use geo::Coord;
    use rstest::{fixture, rstest};

    fn facility(id: usize, category: FacilityCategory, population: u32) -> Facility {
        Facility::new(
            id,
            format!("facility-{id}"),
            Coord { x: 0.0, y: 0.0 },
            category,
            population,
        )
    }

    #[fixture]
    fn model() -> CostModel {
        CostModel::default()
    }

    #[rstest]
    fn base_rate_applies_on_plain_terrain(model: CostModel) {
        let a = facility(0, FacilityCategory::DataCenter, 0);
        let b = facility(1, FacilityCategory::DataCenter, 0);
        // Priority multipliers are 1.0 and the zero-population efficiency
        // factor is 1 - log10(1)/10 = 1.0, so only the base rate remains.
        let cost = model.adjusted_cost(4.0, Terrain::Plain, &a, &b);
        assert!((cost - 10.0).abs() < 1e-9, "got {cost}");
    }

    #[rstest]
    #[case(Terrain::Urban, 1.3)]
    #[case(Terrain::Hilly, 1.8)]
    #[case(Terrain::River, 2.5)]
    #[case(Terrain::Forest, 1.5)]
    fn terrain_scales_the_base_cost(
        model: CostModel,
        #[case] terrain: Terrain,
        #[case] multiplier: f64,
    ) {
        let a = facility(0, FacilityCategory::DataCenter, 0);
        let b = facility(1, FacilityCategory::DataCenter, 0);
        let plain = model.adjusted_cost(4.0, Terrain::Plain, &a, &b);
        let scaled = model.adjusted_cost(4.0, terrain, &a, &b);
        assert!((scaled - plain * multiplier).abs() < 1e-9);
    }

    #[rstest]
    fn endpoint_priorities_are_averaged(model: CostModel) {
        let hospital = facility(0, FacilityCategory::Hospital, 0);
        let commercial = facility(1, FacilityCategory::Commercial, 0);
        // (0.7 + 1.2) / 2 = 0.95 against a 10.0 plain base.
        let cost = model.adjusted_cost(4.0, Terrain::Plain, &hospital, &commercial);
        assert!((cost - 9.5).abs() < 1e-9, "got {cost}");
    }

    #[rstest]
    fn large_populations_earn_a_discount(model: CostModel) {
        let a = facility(0, FacilityCategory::Residential, 50_000);
        let b = facility(1, FacilityCategory::Residential, 50_000);
        let efficiency = model.population_efficiency(&a, &b);
        assert!(efficiency < 1.0);
        assert!(efficiency >= model.population_factor_floor);
    }

    #[rstest]
    fn efficiency_clamps_at_the_floor(model: CostModel) {
        let a = facility(0, FacilityCategory::Residential, u32::MAX);
        let b = facility(1, FacilityCategory::Residential, u32::MAX);
        assert_eq!(
            model.population_efficiency(&a, &b),
            model.population_factor_floor
        );
    }

    #[rstest]
    fn cost_is_monotone_in_distance(model: CostModel) {
        let a = facility(0, FacilityCategory::School, 300);
        let b = facility(1, FacilityCategory::Residential, 900);
        let mut previous = 0.0;
        for step in 0..50 {
            let distance = f64::from(step) * 0.7;
            let cost = model.adjusted_cost(distance, Terrain::Forest, &a, &b);
            assert!(cost >= previous, "cost decreased at distance {distance}");
            previous = cost;
        }
    }

    #[rstest]
    fn short_hops_are_floored_at_the_minimum(model: CostModel) {
        let a = facility(0, FacilityCategory::Hospital, 100);
        let b = facility(1, FacilityCategory::School, 100);
        let cost = model.adjusted_cost(0.01, Terrain::Plain, &a, &b);
        assert_eq!(cost, model.minimum_cost);
    }
}
