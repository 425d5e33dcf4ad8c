/// Weights used to score a planet's worth.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetValuation {
    /// Value of each inhabitant.
    pub per_population: f64,
    /// Value of each waste unit (usually negative).
    pub per_waste: f64,
    /// Value of each empty slot.
    pub per_empty: f64,
}

impl Default for PlanetValuation {
    fn default() -> Self {
        Self {
            per_population: 1.0,
            per_waste: -0.5,
            per_empty: 0.25,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Inhabitants gained per second on a planet with room to grow.
    pub population_growth_rate: f64,
    /// Waste produced per inhabitant per second.
    pub waste_per_pop: f64,
    /// Money credited for each waste unit loaded off a planet.
    pub money_per_waste: f64,
    /// Planet valuation weights.
    pub valuation: PlanetValuation,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population_growth_rate: 0.5,
            waste_per_pop: 0.02,
            money_per_waste: 5.0,
            valuation: PlanetValuation::default(),
            max_events: 0,
        }
    }
}

impl SimConfig {
    /// Set the population growth rate (inhabitants per second).
    pub fn with_population_growth_rate(mut self, rate: f64) -> Self {
        self.population_growth_rate = rate;
        self
    }

    /// Set the waste generated per inhabitant per second.
    pub fn with_waste_per_pop(mut self, rate: f64) -> Self {
        self.waste_per_pop = rate;
        self
    }

    /// Set the money earned per waste unit collected.
    pub fn with_money_per_waste(mut self, money: f64) -> Self {
        self.money_per_waste = money;
        self
    }

    /// Set the planet valuation weights.
    pub fn with_valuation(mut self, valuation: PlanetValuation) -> Self {
        self.valuation = valuation;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }
}
