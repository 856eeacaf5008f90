//! Route connectivity between stops.

use crate::domain::{RouteId, Stop};

/// Routes of `a` that also call at `b`.
///
/// Keeps `a`'s order, including any duplicates in `a`'s route list.
pub fn common_routes<'a>(a: &'a Stop, b: &Stop) -> Vec<&'a RouteId> {
    a.routes.iter().filter(|route| b.serves(route)).collect()
}

/// A stop that links an origin stop and a destination stop with one change.
#[derive(Debug, Clone)]
pub struct TransferPoint<'a> {
    /// Where the rider changes buses
    pub stop: &'a Stop,
    /// Routes from the origin stop to the transfer stop
    pub first_leg: Vec<&'a RouteId>,
    /// Routes from the transfer stop to the destination stop
    pub second_leg: Vec<&'a RouteId>,
}

impl<'a> TransferPoint<'a> {
    /// The first route on each leg.
    pub fn first_match(&self) -> Option<(&'a RouteId, &'a RouteId)> {
        Some((*self.first_leg.first()?, *self.second_leg.first()?))
    }

    /// Every (first leg, second leg) route pair, first leg outer.
    pub fn all_pairs(&self) -> Vec<(&'a RouteId, &'a RouteId)> {
        self.first_leg
            .iter()
            .flat_map(|r1| self.second_leg.iter().map(move |r2| (*r1, *r2)))
            .collect()
    }
}

/// Scan `candidates` for stops bridging `origin` and `dest`.
///
/// Every candidate is considered in order, including `origin` and `dest`
/// themselves.
pub fn transfer_points<'a>(origin: &'a Stop, dest: &Stop, candidates: &'a [Stop]) -> Vec<TransferPoint<'a>> {
    candidates
        .iter()
        .filter_map(|stop| {
            let first_leg = common_routes(origin, stop);
            if first_leg.is_empty() {
                return None;
            }
            let second_leg = common_routes(stop, dest);
            if second_leg.is_empty() {
                return None;
            }
            Some(TransferPoint {
                stop,
                first_leg,
                second_leg,
            })
        })
        .collect()
}
