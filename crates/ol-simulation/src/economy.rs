//! Planet economy: population growth, waste generation, and displacement.

use ol_core::{Planet, World};

use crate::clock::SimClock;
use crate::config::{PlanetValuation, SimConfig};

/// Advance one planet's population and waste by `delta` seconds.
///
/// Growth first, then waste generation, then overflow correction. Both
/// accumulators keep their fractional remainder for the next tick.
/// Returns the number of inhabitants displaced by the correction.
pub fn step_planet(planet: &mut Planet, delta: f64, config: &SimConfig) -> u32 {
    if !SimClock::is_effective(delta) {
        return 0;
    }

    if planet.population > 0 && !planet.is_full() {
        planet.growing_pop += config.population_growth_rate * delta;
        let whole = take_whole(&mut planet.growing_pop);
        planet.population = saturating_add_capped(planet.population, whole, planet.capacity);
    }

    if planet.population > 0 && planet.waste < planet.capacity {
        planet.growing_waste += f64::from(planet.population) * config.waste_per_pop * delta;
        let whole = take_whole(&mut planet.growing_waste);
        planet.waste = saturating_add_capped(planet.waste, whole, planet.capacity);
    }

    correct_overflow(planet)
}

/// Push inhabitants out until `population + waste <= capacity`.
///
/// Waste has priority over population. Idempotent; call it after any
/// external change to `waste`. Returns the number of inhabitants removed.
pub fn correct_overflow(planet: &mut Planet) -> u32 {
    let occupied = u64::from(planet.population) + u64::from(planet.waste);
    if occupied <= u64::from(planet.capacity) {
        return 0;
    }
    let waste = planet.waste.min(planet.capacity);
    let population = planet.capacity - waste;
    let displaced = planet.population - population;
    planet.waste = waste;
    planet.population = population;
    displaced
}

/// Score a planet: inhabitants are worth something, waste costs, and
/// empty slots are potential.
pub fn planet_value(planet: &Planet, valuation: &PlanetValuation) -> f64 {
    let empty = planet.free_capacity();
    f64::from(planet.population) * valuation.per_population
        + f64::from(planet.waste) * valuation.per_waste
        + f64::from(empty) * valuation.per_empty
}

/// Sum of [`planet_value`] over every planet.
pub fn world_value(world: &World, valuation: &PlanetValuation) -> f64 {
    world
        .planets
        .values()
        .map(|p| planet_value(p, valuation))
        .sum()
}

/// Remove and return the integral part of a non-negative accumulator.
fn take_whole(accumulator: &mut f64) -> u32 {
    let whole = accumulator.floor().max(0.0);
    *accumulator -= whole;
    // Float-to-int casts saturate.
    whole as u32
}

fn saturating_add_capped(value: u32, add: u32, cap: u32) -> u32 {
    value.saturating_add(add).min(cap)
}
