use freightcast_core::models::{HistoricalQuote, TodayRecord, TrainingRow};
use freightcast_geo::{CityExtractor, CityTable};

/// Merges historical quotes and same-day records into one weighted table
pub struct TrainingSetBuilder<'a> {
    cities: &'a CityTable,
    extractor: &'a CityExtractor,
    today_weight: u32,
}

impl<'a> TrainingSetBuilder<'a> {
    pub fn new(cities: &'a CityTable, extractor: &'a CityExtractor, today_weight: u32) -> Self {
        Self {
            cities,
            extractor,
            today_weight: today_weight.max(1),
        }
    }

    /// Build the training rows for routes leaving `origin`.
    ///
    /// Historical rows come first with weight 1, followed by today's records
    /// for the same origin at the today weight. Rows whose destination cannot
    /// be placed on the map are dropped.
    pub fn build(
        &self,
        origin: &str,
        history: &[HistoricalQuote],
        today: &[TodayRecord],
    ) -> Vec<TrainingRow> {
        let mut rows = Vec::with_capacity(history.len() + today.len());

        for quote in history {
            let Some(city) = quote.destination.as_deref().and_then(|d| self.extractor.extract(d))
            else {
                continue;
            };
            let Some(price) = quote.price.filter(|p| p.is_finite()) else {
                continue;
            };
            let Some(distance_km) = self.cities.distance_km(origin, city) else {
                continue;
            };

            rows.push(TrainingRow {
                destination_city: city.to_string(),
                distance_km,
                price,
                vehicle_type: quote.vehicle_type.clone().filter(|v| !v.trim().is_empty()),
                weight: 1,
            });
        }

        let historical = rows.len();

        for record in today.iter().filter(|r| r.origin_city == origin) {
            let Some(distance_km) = self.cities.distance_km(origin, &record.destination_city)
            else {
                tracing::debug!(
                    id = record.id,
                    destination = %record.destination_city,
                    "Skipping record with unknown destination"
                );
                continue;
            };

            rows.push(TrainingRow {
                destination_city: record.destination_city.clone(),
                distance_km,
                price: record.price,
                vehicle_type: Some(record.vehicle_type.clone()),
                weight: self.today_weight,
            });
        }

        tracing::debug!(
            origin,
            historical,
            today = rows.len() - historical,
            "Built training set"
        );
        rows
    }
}
