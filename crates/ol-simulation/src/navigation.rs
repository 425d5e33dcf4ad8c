//! Ship navigation and route following.
//!
//! A ship is either idle or transiting towards its route cursor. Docking
//! is instantaneous: the tick that detects arrival also runs the stop's
//! action and moves the cursor on.

use ol_core::{Assignment, Route, Ship};

use crate::cargo::{Transfer, execute_ship_action};
use crate::clock::SimClock;
use crate::context::SimContext;
use crate::event::SimEventKind;

/// Advance one ship by `delta` seconds: charge upkeep, then steer,
/// accelerate, move, and dock if the target is reached.
pub fn step_ship(ctx: &mut SimContext<'_>, ship: &mut Ship, delta: f64) {
    if !SimClock::is_effective(delta) {
        return;
    }

    charge_upkeep(ctx, ship, delta);

    let (route_id, cursor) = match &ship.assignment {
        Assignment::Idle => {
            ship.current_speed = 0.0;
            return;
        }
        Assignment::Transiting { route, node_index } => (route.clone(), *node_index),
    };

    let routes = ctx.routes;
    let Some(route) = routes.get(&route_id) else {
        log::warn!("ship {} assigned to unknown route {}", ship.id, route_id);
        ctx.emit(
            SimEventKind::MissingRoute {
                ship: ship.id.clone(),
                route: route_id.clone(),
            },
            format!("{} is assigned to unknown route {}", ship.id, route_id),
        );
        ship.current_speed = 0.0;
        return;
    };
    if route.is_empty() {
        ship.current_speed = 0.0;
        return;
    }

    let cursor = if cursor < route.len() {
        cursor
    } else {
        log::debug!(
            "ship {} cursor {} out of range for route {}; resetting",
            ship.id,
            cursor,
            route_id
        );
        ctx.emit(
            SimEventKind::RouteCursorReset {
                ship: ship.id.clone(),
                route: route_id.clone(),
                stale_index: cursor,
            },
            format!("{} restarts route {}", ship.id, route_id),
        );
        set_cursor(ship, 0);
        0
    };
    let node = &route.nodes[cursor];

    let Some((target, radius)) = ctx
        .planets
        .get(&node.planet)
        .map(|p| (p.position, p.radius))
    else {
        log::warn!(
            "route {} stop {} names unknown planet {}",
            route_id,
            cursor,
            node.planet
        );
        ctx.emit(
            SimEventKind::MissingPlanet {
                ship: ship.id.clone(),
                planet: node.planet.clone(),
            },
            format!("{} cannot find planet {}", ship.id, node.planet),
        );
        set_cursor(ship, route.next_index(cursor));
        return;
    };

    ship.direction = ship.position.bearing_to(&target);

    let ship_type = &ship.ship_type;
    ship.current_speed = (ship.current_speed + ship_type.acceleration * delta)
        .min(ship_type.max_speed)
        .max(0.0);

    let step = ship.current_speed * delta;
    if ship.position.distance_to(&target) < step {
        ship.position = target;
    } else {
        ship.position.advance(ship.direction, step);
    }

    if ship.position.distance_to(&target) < radius {
        ship.current_speed = 0.0;
        ctx.report.arrivals += 1;
        log::debug!("ship {} docked at {}", ship.id, node.planet);
        ctx.emit(
            SimEventKind::Arrived {
                ship: ship.id.clone(),
                planet: node.planet.clone(),
            },
            format!("{} docked at {}", ship.id, node.planet),
        );
        dock(ctx, ship, cursor, route);
        set_cursor(ship, route.next_index(cursor));
    }
}

/// Debit upkeep, saturating at zero.
fn charge_upkeep(ctx: &mut SimContext<'_>, ship: &Ship, delta: f64) {
    let before = *ctx.money;
    let due = ship.ship_type.upkeep_cost * delta;
    *ctx.money = (before - due).max(0.0);
    ctx.report.upkeep += before - *ctx.money;
    if before > 0.0 && *ctx.money == 0.0 {
        ctx.emit(
            SimEventKind::Bankrupt {
                ship: ship.id.clone(),
            },
            format!("upkeep for {} emptied the treasury", ship.id),
        );
    }
}

/// Run the action of stop `cursor` against its planet.
fn dock(ctx: &mut SimContext<'_>, ship: &mut Ship, cursor: usize, route: &Route) {
    let node = &route.nodes[cursor];
    let Some(planet) = ctx.planets.get_mut(&node.planet) else {
        return;
    };
    let transfer = execute_ship_action(
        ship,
        &node.action,
        planet,
        ctx.money,
        ctx.config.money_per_waste,
    );

    match transfer {
        Transfer::Loaded { amount } => {
            if amount > 0 {
                ctx.report.waste_loaded += u64::from(amount);
                ctx.report.income += f64::from(amount) * ctx.config.money_per_waste;
                ctx.emit(
                    SimEventKind::WasteLoaded {
                        ship: ship.id.clone(),
                        planet: node.planet.clone(),
                        amount,
                    },
                    format!("{} loaded {} waste at {}", ship.id, amount, node.planet),
                );
            }
        }
        Transfer::Dumped { amount, displaced } => {
            if amount > 0 {
                ctx.report.waste_dumped += u64::from(amount);
                ctx.emit(
                    SimEventKind::WasteDumped {
                        ship: ship.id.clone(),
                        planet: node.planet.clone(),
                        amount,
                    },
                    format!("{} dumped {} waste at {}", ship.id, amount, node.planet),
                );
            }
            if displaced > 0 {
                ctx.emit(
                    SimEventKind::PopulationDisplaced {
                        planet: node.planet.clone(),
                        amount: displaced,
                    },
                    format!("{} inhabitants fled {}", displaced, node.planet),
                );
            }
        }
        Transfer::Skipped { action } => {
            log::warn!(
                "bad action {} for ship {} at planet {}",
                action,
                ship.id,
                node.planet
            );
            ctx.emit(
                SimEventKind::InvalidAction {
                    ship: ship.id.clone(),
                    planet: node.planet.clone(),
                    action: action.clone(),
                },
                format!(
                    "{} skipped unknown action {} at {}",
                    ship.id, action, node.planet
                ),
            );
        }
    }
}

fn set_cursor(ship: &mut Ship, index: usize) {
    if let Assignment::Transiting { node_index, .. } = &mut ship.assignment {
        *node_index = index;
    }
}
