//! The per-frame world sweep.

use ol_core::World;

use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::context::{SimContext, TickReport};
use crate::economy::step_planet;
use crate::event::{EventLog, SimEvent, SimEventKind};
use crate::navigation::step_ship;

/// Advance every planet, then every ship, by `delta` seconds.
///
/// All planet steps happen before any ship step, so cargo transfers see
/// this tick's freshly generated waste. Degenerate deltas return an
/// empty report and change nothing.
pub fn advance_world(
    world: &mut World,
    delta: f64,
    config: &SimConfig,
    events: &mut EventLog,
    tick: u64,
) -> TickReport {
    let mut report = TickReport::default();
    if !SimClock::is_effective(delta) {
        return report;
    }

    for planet in world.planets.values_mut() {
        let displaced = step_planet(planet, delta, config);
        if displaced > 0 {
            events.push(SimEvent::new(
                tick,
                SimEventKind::PopulationDisplaced {
                    planet: planet.id.clone(),
                    amount: displaced,
                },
                format!("{} inhabitants fled {}", displaced, planet.id),
            ));
        }
    }

    let World {
        planets,
        ships,
        routes,
        money,
    } = world;
    let mut ctx = SimContext {
        planets,
        routes,
        money,
        config,
        events,
        report: &mut report,
        tick,
    };
    for ship in ships.values_mut() {
        step_ship(&mut ctx, ship, delta);
    }

    report
}
