use anyhow::{Context, Result};
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::areas::AreaMetadata;
use crate::domain::forecast::{ForecastEntry, ForecastSnapshot};

const SNAPSHOT_URL: &str = "https://api.data.gov.sg/v1/environment/2-hour-weather-forecast";

/// Area list plus the categorical forecast round, delivered together by the
/// 2-hour forecast endpoint.
#[derive(Debug, Clone)]
pub struct AreaCatalog {
    pub areas: Vec<AreaMetadata>,
    pub snapshot: ForecastSnapshot,
}

#[derive(Debug, Clone)]
pub struct SnapshotClient {
    client: Client,
    base_url: String,
}

impl Default for SnapshotClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(SNAPSHOT_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self) -> Result<AreaCatalog> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .context("snapshot request failed")?
            .error_for_status()
            .context("snapshot request returned non-success status")?;

        let payload: SnapshotResponse = response
            .json()
            .await
            .context("failed to parse snapshot payload")?;

        map_catalog(payload)
    }
}

fn map_catalog(payload: SnapshotResponse) -> Result<AreaCatalog> {
    let item = payload
        .items
        .into_iter()
        .next()
        .context("snapshot payload had no forecast items")?;

    let update_timestamp = DateTime::parse_from_rfc3339(&item.update_timestamp)
        .with_context(|| format!("invalid snapshot update timestamp {:?}", item.update_timestamp))?;

    let areas = payload
        .area_metadata
        .into_iter()
        .map(|meta| AreaMetadata {
            name: meta.name,
            latitude: meta.label_location.latitude,
            longitude: meta.label_location.longitude,
        })
        .collect();

    let entries = item
        .forecasts
        .into_iter()
        .map(|entry| ForecastEntry {
            area: entry.area,
            forecast: entry.forecast,
        })
        .collect();

    Ok(AreaCatalog {
        areas,
        snapshot: ForecastSnapshot {
            update_timestamp,
            entries,
        },
    })
}

#[derive(Debug, Deserialize)]
struct SnapshotResponse {
    area_metadata: Vec<AreaMetadataBlock>,
    items: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct AreaMetadataBlock {
    name: String,
    label_location: LabelLocation,
}

#[derive(Debug, Deserialize)]
struct LabelLocation {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    update_timestamp: String,
    forecasts: Vec<ForecastBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastBlock {
    area: String,
    forecast: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SnapshotResponse {
        SnapshotResponse {
            area_metadata: vec![AreaMetadataBlock {
                name: "Bishan".to_string(),
                label_location: LabelLocation {
                    latitude: 1.3508,
                    longitude: 103.8485,
                },
            }],
            items: vec![ForecastItem {
                update_timestamp: "2025-07-07T14:05:00+08:00".to_string(),
                forecasts: vec![ForecastBlock {
                    area: "Bishan".to_string(),
                    forecast: "Light Rain".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn maps_first_item_into_catalog() {
        let catalog = map_catalog(payload()).expect("valid payload");
        assert_eq!(catalog.areas.len(), 1);
        assert_eq!(catalog.areas[0].name, "Bishan");
        assert_eq!(catalog.snapshot.entries[0].forecast, "Light Rain");
        assert_eq!(
            catalog.snapshot.update_timestamp.to_rfc3339(),
            "2025-07-07T14:05:00+08:00"
        );
    }

    #[test]
    fn rejects_payload_without_items() {
        let mut payload = payload();
        payload.items.clear();
        assert!(map_catalog(payload).is_err());
    }

    #[test]
    fn rejects_unparsable_update_timestamp() {
        let mut payload = payload();
        payload.items[0].update_timestamp = "last Tuesday".to_string();
        assert!(map_catalog(payload).is_err());
    }
}
