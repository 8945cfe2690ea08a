//! One-shot position lookup.
//!
//! A fixed position from configuration wins; otherwise the desktop location
//! service is asked (GeoClue2 on Linux). Other platforms report the service
//! as unavailable and the UI falls back to city search.

#[cfg(any(target_os = "linux", test))]
use std::future::Future;
use std::time::Duration;

use crate::types::{Coordinate, Location, LocationError};

#[derive(Debug, Clone)]
pub struct LocationOptions {
    /// Skip the location service and use this position
    pub fixed: Option<Coordinate>,
    /// Application id announced to the location service
    pub desktop_id: String,
    pub timeout: Duration,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            fixed: None,
            desktop_id: "skycast".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

pub async fn get_current_location(options: &LocationOptions) -> Result<Location, LocationError> {
    if let Some(coord) = options.fixed {
        tracing::debug!("Using configured position {}", coord);
        return Ok(Location {
            coord,
            accuracy_meters: None,
        });
    }

    match tokio::time::timeout(options.timeout, system_location(&options.desktop_id)).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    }
}

#[cfg(target_os = "linux")]
async fn system_location(desktop_id: &str) -> Result<Location, LocationError> {
    geoclue::locate(desktop_id).await
}

#[cfg(not(target_os = "linux"))]
async fn system_location(_desktop_id: &str) -> Result<Location, LocationError> {
    Err(LocationError::ServiceUnavailable)
}

/// Runs a cleanup future exactly once: awaited by [`StopGuard::finish`], or
/// spawned on drop when the owning future is cancelled before that.
#[cfg(any(target_os = "linux", test))]
struct StopGuard<F>
where
    F: Future<Output = ()> + Send + 'static,
{
    stop: Option<F>,
}

#[cfg(any(target_os = "linux", test))]
impl<F> StopGuard<F>
where
    F: Future<Output = ()> + Send + 'static,
{
    fn new(stop: F) -> Self {
        Self { stop: Some(stop) }
    }

    async fn finish(mut self) {
        if let Some(stop) = self.stop.take() {
            stop.await;
        }
    }
}

#[cfg(any(target_os = "linux", test))]
impl<F> Drop for StopGuard<F>
where
    F: Future<Output = ()> + Send + 'static,
{
    fn drop(&mut self) {
        let Some(stop) = self.stop.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(stop);
            }
            Err(_) => tracing::warn!("No runtime left to release the location service"),
        }
    }
}

#[cfg(target_os = "linux")]
mod geoclue {
    use std::time::Duration;

    use zbus::zvariant::OwnedObjectPath;
    use zbus::{proxy, Connection};

    use super::StopGuard;
    use crate::types::{Coordinate, Location, LocationError};

    /// GeoClue accuracy level "city"; enough for weather
    const ACCURACY_CITY: u32 = 4;
    const POLL_INTERVAL: Duration = Duration::from_millis(250);
    /// GeoClue reports "/" until a fix is available
    const NO_LOCATION: &str = "/";

    #[proxy(
        interface = "org.freedesktop.GeoClue2.Manager",
        default_service = "org.freedesktop.GeoClue2",
        default_path = "/org/freedesktop/GeoClue2/Manager"
    )]
    trait Manager {
        fn get_client(&self) -> zbus::Result<OwnedObjectPath>;
    }

    #[proxy(
        interface = "org.freedesktop.GeoClue2.Client",
        default_service = "org.freedesktop.GeoClue2"
    )]
    trait Client {
        fn start(&self) -> zbus::Result<()>;

        fn stop(&self) -> zbus::Result<()>;

        #[zbus(property)]
        fn location(&self) -> zbus::Result<OwnedObjectPath>;

        #[zbus(property)]
        fn set_desktop_id(&self, id: &str) -> zbus::Result<()>;

        #[zbus(property)]
        fn set_requested_accuracy_level(&self, level: u32) -> zbus::Result<()>;
    }

    #[proxy(
        interface = "org.freedesktop.GeoClue2.Location",
        default_service = "org.freedesktop.GeoClue2"
    )]
    trait GeoPosition {
        #[zbus(property)]
        fn latitude(&self) -> zbus::Result<f64>;

        #[zbus(property)]
        fn longitude(&self) -> zbus::Result<f64>;

        #[zbus(property)]
        fn accuracy(&self) -> zbus::Result<f64>;
    }

    impl From<zbus::Error> for LocationError {
        fn from(e: zbus::Error) -> Self {
            match &e {
                zbus::Error::MethodError(name, _, _) => {
                    let name = name.as_str();
                    if name.ends_with("AccessDenied") {
                        LocationError::PermissionDenied
                    } else if name.ends_with("ServiceUnknown") || name.ends_with("NameHasNoOwner") {
                        LocationError::ServiceUnavailable
                    } else {
                        LocationError::Other(e.to_string())
                    }
                }
                zbus::Error::InputOutput(_) | zbus::Error::Address(_) => {
                    LocationError::ServiceUnavailable
                }
                _ => LocationError::Other(e.to_string()),
            }
        }
    }

    pub(super) async fn locate(desktop_id: &str) -> Result<Location, LocationError> {
        let conn = Connection::system().await?;

        let manager = ManagerProxy::new(&conn).await?;
        let client_path = manager.get_client().await?;
        let client: ClientProxy<'static> =
            ClientProxy::builder(&conn).path(client_path)?.build().await?;

        client.set_desktop_id(desktop_id).await?;
        client.set_requested_accuracy_level(ACCURACY_CITY).await?;
        client.start().await?;

        // Every exit from here on must stop the client, including the caller
        // timing out or aborting this future.
        let stopper = client.clone();
        let guard = StopGuard::new(async move {
            if let Err(e) = stopper.stop().await {
                tracing::debug!("Failed to stop GeoClue client: {}", e);
            }
        });

        let result = read_position(&conn, &client).await;
        guard.finish().await;

        let location = result?;
        tracing::info!(
            "Located at {} (accuracy {:?} m)",
            location.coord,
            location.accuracy_meters
        );
        Ok(location)
    }

    async fn read_position(
        conn: &Connection,
        client: &ClientProxy<'_>,
    ) -> Result<Location, LocationError> {
        let location_path = loop {
            let path = client.location().await?;
            if path.as_str() != NO_LOCATION {
                break path;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        };

        let position = GeoPositionProxy::builder(conn)
            .path(location_path.as_str())?
            .build()
            .await?;

        Ok(Location {
            coord: Coordinate::new(position.latitude().await?, position.longitude().await?),
            accuracy_meters: position.accuracy().await.ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_position_skips_service() {
        let options = LocationOptions {
            fixed: Some(Coordinate::new(60.17, 24.94)),
            ..LocationOptions::default()
        };

        let location = get_current_location(&options).await.unwrap();
        assert_eq!(location.coord, Coordinate::new(60.17, 24.94));
        assert_eq!(location.accuracy_meters, None);
    }

    #[tokio::test]
    async fn test_stop_guard_runs_cleanup_on_finish() {
        let (tx, mut rx) = tokio::sync::oneshot::channel();
        let guard = StopGuard::new(async move {
            let _ = tx.send(());
        });

        guard.finish().await;

        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_stop_guard_runs_cleanup_when_timed_out() {
        let (tx, rx) = tokio::sync::oneshot::channel();

        let outcome = tokio::time::timeout(Duration::from_millis(20), async move {
            let _guard = StopGuard::new(async move {
                let _ = tx.send(());
            });
            std::future::pending::<()>().await;
        })
        .await;

        assert!(outcome.is_err());
        tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_stop_guard_runs_cleanup_when_aborted() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let (started_tx, started_rx) = tokio::sync::oneshot::channel();

        let task = tokio::spawn(async move {
            let _guard = StopGuard::new(async move {
                let _ = tx.send(());
            });
            let _ = started_tx.send(());
            std::future::pending::<()>().await;
        });
        started_rx.await.unwrap();
        task.abort();

        tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    #[ignore] // Needs a running GeoClue: cargo test -p skycast-weather -- --ignored
    async fn test_system_location() {
        let location = get_current_location(&LocationOptions::default()).await.unwrap();
        assert!((-90.0..=90.0).contains(&location.coord.latitude));
    }
}
