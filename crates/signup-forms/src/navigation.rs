// File: src/navigation.rs
// Purpose: Delayed navigation after a successful registration

use serde::{Deserialize, Serialize};

use crate::config::RoutesConfig;

#[cfg(feature = "runtime")]
pub use scheduler::{NavigationScheduler, ScheduledNavigation};

/// Views the forms can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
}

impl Route {
    /// Configured path of the view
    pub fn path(self, routes: &RoutesConfig) -> &str {
        match self {
            Route::Login => &routes.login,
        }
    }
}

/// Receives navigation requests from the forms.
///
/// A request can arrive after the user already left the view; implementations
/// must treat that as a no-op.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, route: Route, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(Route, &str) + Send + Sync + 'static,
{
    fn navigate(&self, route: Route, path: &str) {
        self(route, path)
    }
}

#[cfg(feature = "runtime")]
mod scheduler {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{bail, Context, Result};
    use tokio::runtime::Handle;
    use tokio::task::JoinHandle;
    use tracing::{debug, info};

    use super::{Navigator, Route};
    use crate::config::{Config, RoutesConfig};

    /// Dispatches navigation requests after a fixed, non-zero delay
    #[derive(Debug, Clone)]
    pub struct NavigationScheduler {
        delay: Duration,
        routes: RoutesConfig,
    }

    impl NavigationScheduler {
        /// Scheduler with the default routes. A zero delay is rejected.
        pub fn new(delay: Duration) -> Result<Self> {
            if delay.is_zero() {
                bail!("navigation delay must be greater than zero");
            }
            Ok(Self {
                delay,
                routes: RoutesConfig::default(),
            })
        }

        pub fn with_routes(mut self, routes: RoutesConfig) -> Self {
            self.routes = routes;
            self
        }

        pub fn from_config(config: &Config) -> Result<Self> {
            Ok(Self::new(config.registration.navigation_delay())?.with_routes(config.routes.clone()))
        }

        pub fn delay(&self) -> Duration {
            self.delay
        }

        /// Handle of the tokio runtime the timer will run on
        pub fn runtime(&self) -> Result<Handle> {
            Handle::try_current().context("navigation must be scheduled from within a tokio runtime")
        }

        /// Spawns a timer on the current tokio runtime that calls
        /// `navigator` once after the delay.
        pub fn schedule(
            &self,
            navigator: Arc<dyn Navigator>,
            route: Route,
        ) -> Result<ScheduledNavigation> {
            let runtime = self.runtime()?;
            let delay = self.delay;
            let path = route.path(&self.routes).to_string();

            debug!(?route, %path, ?delay, "navigation scheduled");
            let handle = runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                info!(?route, %path, "navigating");
                navigator.navigate(route, &path);
            });

            Ok(ScheduledNavigation { route, handle })
        }
    }

    /// Pending navigation. Dropping the handle does not cancel it.
    #[derive(Debug)]
    pub struct ScheduledNavigation {
        route: Route,
        handle: JoinHandle<()>,
    }

    impl ScheduledNavigation {
        pub fn route(&self) -> Route {
            self.route
        }

        /// Stops the timer; a no-op once the navigation has fired
        pub fn cancel(&self) {
            if !self.handle.is_finished() {
                info!(route = ?self.route, "navigation cancelled");
            }
            self.handle.abort();
        }

        pub fn is_finished(&self) -> bool {
            self.handle.is_finished()
        }
    }
}
