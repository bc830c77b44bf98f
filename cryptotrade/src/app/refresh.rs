//! # Screen Refresh Timers
//!
//! A [`PeriodicRefresh`] belongs to one route. It fires when that route
//! becomes current and, if it has an interval, again every interval while
//! the route stays current. Leaving the route stops it; coming back fires
//! immediately.

use std::time::{Duration, Instant};

use super::route::Route;

#[derive(Debug, Clone)]
pub struct PeriodicRefresh {
    route: Route,
    interval: Option<Duration>,
    last_fired: Option<Instant>,
}

impl PeriodicRefresh {
    /// Fire on entry only
    pub fn on_enter(route: Route) -> Self {
        Self {
            route,
            interval: None,
            last_fired: None,
        }
    }

    /// Fire on entry and every `interval` while shown
    pub fn every(route: Route, interval: Duration) -> Self {
        Self {
            route,
            interval: Some(interval),
            last_fired: None,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Called every frame with the route on screen; true when a refresh is due
    pub fn poll(&mut self, current: Route, now: Instant) -> bool {
        if current != self.route {
            self.last_fired = None;
            return false;
        }

        let due = match (self.last_fired, self.interval) {
            (None, _) => true,
            (Some(at), Some(interval)) => now.saturating_duration_since(at) >= interval,
            (Some(_), None) => false,
        };
        if due {
            self.last_fired = Some(now);
        }
        due
    }

    /// Restart the interval without firing, e.g. after a manual refresh
    pub fn reset(&mut self, now: Instant) {
        if self.last_fired.is_some() {
            self.last_fired = Some(now);
        }
    }
}
