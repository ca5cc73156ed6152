//! Daily schedule derivation for a rink.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use rinkbook_core::config::booking::BookingConfig;
use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_database::repositories::booking::BookingRepository;
use rinkbook_database::repositories::rink::RinkRepository;
use rinkbook_entity::slot::{IceSlot, SlotType};

use super::slots::{self, SlotPlan};

/// Derives a rink's slot schedule for a date from its operating hours and
/// current bookings. Nothing here writes to the database.
#[derive(Debug, Clone)]
pub struct ScheduleService {
    rink_repo: Arc<RinkRepository>,
    booking_repo: Arc<BookingRepository>,
    /// Default slot granularity in minutes.
    default_slot_minutes: u32,
}

impl ScheduleService {
    /// Create a new schedule service.
    pub fn new(
        rink_repo: Arc<RinkRepository>,
        booking_repo: Arc<BookingRepository>,
        config: &BookingConfig,
    ) -> Self {
        Self {
            rink_repo,
            booking_repo,
            default_slot_minutes: config.default_slot_minutes,
        }
    }

    /// The slot sequence for `rink_id` on `date`.
    ///
    /// `slot_minutes` overrides the configured granularity when given;
    /// `slot_type` defaults to public skating.
    pub async fn daily_schedule(
        &self,
        rink_id: Uuid,
        date: NaiveDate,
        slot_minutes: Option<u32>,
        slot_type: Option<SlotType>,
    ) -> AppResult<Vec<IceSlot>> {
        let rink = self
            .rink_repo
            .find_by_id(rink_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Rink {rink_id} not found")))?;

        let plan = SlotPlan {
            opening_time: rink.opening_time,
            closing_time: rink.closing_time,
            slot_minutes: slot_minutes.unwrap_or(self.default_slot_minutes),
        };

        let day_start = date.and_time(plan.opening_time).and_utc();
        let day_end = date.and_time(plan.closing_time).and_utc();
        let bookings = self
            .booking_repo
            .find_by_rink_and_range(rink_id, day_start, day_end)
            .await?;

        slots::generate(
            rink_id,
            date,
            &plan,
            slot_type.unwrap_or_default(),
            &bookings,
        )
    }
}
