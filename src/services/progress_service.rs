use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{ProgressEntry, ProgressMetrics, TimeRange};

/// Days of history generated before today by the demo data set.
const DEMO_DAYS: i64 = 30;

/// In-memory progress log shared across requests.
///
/// Entries are kept newest-first. Every mutation runs under the write lock,
/// so an append's insert-and-sort is atomic with respect to other callers.
/// Cloning the store shares the same underlying log; use [`ProgressStore::new`]
/// for an independent one.
#[derive(Debug, Clone, Default)]
pub struct ProgressStore {
    entries: Arc<RwLock<Vec<ProgressEntry>>>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries at or after the range's cutoff, newest first.
    pub async fn list(&self, range: TimeRange) -> Vec<ProgressEntry> {
        let entries = self.entries.read().await;
        match range.cutoff(Utc::now()) {
            Some(cutoff) => entries
                .iter()
                .filter(|entry| entry.timestamp >= cutoff)
                .cloned()
                .collect(),
            None => entries.clone(),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Record a new snapshot. At least one metric must be present.
    #[instrument(skip(self))]
    pub async fn append(&self, metrics: ProgressMetrics) -> Result<ProgressEntry, AppError> {
        if metrics.is_empty() {
            return Err(AppError::validation(
                "At least one metric is required",
                vec![
                    "provide at least one of weight, bodyFat, muscleMass, waist, hips, workoutPerformance"
                        .to_string(),
                ],
            ));
        }

        let entry = ProgressEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            weight: metrics.weight,
            body_fat: metrics.body_fat,
            muscle_mass: metrics.muscle_mass,
            waist: metrics.waist,
            hips: metrics.hips,
            workout_performance: metrics.workout_performance,
        };

        let mut entries = self.entries.write().await;
        // Inserting at the front keeps the newest entry first among equal timestamps.
        entries.insert(0, entry.clone());
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        info!(id = %entry.id, total = entries.len(), "Recorded progress entry");

        Ok(entry)
    }

    pub async fn reset(&self) {
        self.entries.write().await.clear();
        info!("Progress log reset");
    }

    pub async fn generate_demo(&self) -> usize {
        let entries = demo_entries(&mut rand::thread_rng());
        self.replace(entries).await
    }

    /// Replace the log with demo data drawn from `rng`. Returns the number of
    /// entries now stored.
    pub async fn generate_demo_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let entries = demo_entries(rng);
        self.replace(entries).await
    }

    async fn replace(&self, mut demo: Vec<ProgressEntry>) -> usize {
        demo.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let count = demo.len();
        *self.entries.write().await = demo;
        info!(count, "Generated demo progress data");
        count
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    rng.gen_range(-half_width..half_width)
}

/// One entry per day for the trailing 30 days plus today. Each metric follows
/// a fixed per-day trend with a small random offset.
pub fn demo_entries<R: Rng + ?Sized>(rng: &mut R) -> Vec<ProgressEntry> {
    let now = Utc::now();

    (0..=DEMO_DAYS)
        .rev()
        .map(|days_ago| {
            let i = days_ago as f64;
            let performance = (5.0 + rng.gen_range(0.0..3.0) + i * 0.05).floor() as i64;

            ProgressEntry {
                id: Uuid::new_v4(),
                timestamp: now - Duration::days(days_ago),
                weight: Some(round_one_decimal(75.0 - i * 0.1 + jitter(rng, 0.25))),
                body_fat: Some(round_one_decimal(18.0 - i * 0.05 + jitter(rng, 0.15))),
                muscle_mass: Some(round_one_decimal(32.0 + i * 0.03 + jitter(rng, 0.1))),
                waist: Some(round_one_decimal(85.0 - i * 0.2 + jitter(rng, 0.25))),
                hips: None,
                workout_performance: Some(performance.min(10)),
            }
        })
        .collect()
}
