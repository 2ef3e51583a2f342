use super::dto::{GeolocationReport, LocateResponse, LocationView};
use crate::domain::dataset::entity::Position;
use crate::domain::marker::entity::IconRef;
use crate::domain::notice::channel::NoticeChannel;
use crate::domain::notice::entity::Severity;
use std::sync::Arc;

const ME_ICON: &str = "/images/me.png";

pub struct LocateUserUseCase {
    notices: Arc<dyn NoticeChannel>,
}

impl LocateUserUseCase {
    pub fn new(notices: Arc<dyn NoticeChannel>) -> Self {
        Self { notices }
    }

    pub fn execute(&self, report: GeolocationReport) -> LocateResponse {
        let fix = match report {
            GeolocationReport::Fix {
                latitude,
                longitude,
                accuracy,
            } if accuracy.is_finite() && accuracy >= 0.0 => {
                Position::new(latitude, longitude).map(|position| (position, accuracy))
            }
            GeolocationReport::Fix { .. } => None,
            GeolocationReport::Failure { error } => {
                tracing::warn!(error = %error, "client geolocation failed");
                None
            }
        };

        match fix {
            Some((position, accuracy)) => LocateResponse {
                location: Some(LocationView {
                    position,
                    icon: IconRef::new(ME_ICON),
                    popup_html: format!(
                        "<h2>Your Current Location:</h2><p>Latitude: {}</p><p>Longitude: {}</p>",
                        position.latitude, position.longitude
                    ),
                    accuracy_radius: accuracy,
                }),
                notice: None,
            },
            None => LocateResponse {
                location: None,
                notice: Some(self.notices.notify(
                    Severity::Error,
                    "Error",
                    "Failed to retrieve your current location.",
                )),
            },
        }
    }
}
