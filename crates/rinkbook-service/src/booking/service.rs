//! Booking orchestration service.
//!
//! Each mutation runs validator -> conflict check -> price -> persist as one
//! unit of work. The conflict check and insert share a transaction holding
//! the per-rink advisory lock, which closes the double-booking race between
//! concurrent requests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use rinkbook_core::error::{AppError, ErrorKind};
use rinkbook_core::result::AppResult;
use rinkbook_core::traits::{DiscountContext, RateProvider};
use rinkbook_core::types::pagination::{PageRequest, PageResponse};
use rinkbook_database::repositories::booking::BookingRepository;
use rinkbook_database::repositories::equipment::EquipmentRepository;
use rinkbook_database::repositories::rink::RinkRepository;
use rinkbook_entity::booking::{Booking, BookingStatus, NewBooking, RentalRequest};
use rinkbook_entity::slot::SlotType;

use crate::notification::service::{BookingEvent, NotificationService};

use super::cancellation::CancellationPolicy;
use super::pricing::PriceCalculator;
use super::{conflict, validator};

/// Request to create a new booking.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateBooking {
    /// The user making the booking.
    pub user_id: Uuid,
    /// The rink to book.
    pub rink_id: Uuid,
    /// Interval start.
    pub start_time: DateTime<Utc>,
    /// Interval end.
    pub end_time: DateTime<Utc>,
    /// Kind of ice time; defaults to public skating.
    pub slot_type: Option<SlotType>,
    /// Client-side price. Required on create and sanity-checked, but the
    /// server always computes the authoritative total that is stored.
    pub total_price: Option<Decimal>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Equipment to rent alongside the booking.
    pub rentals: Vec<RentalRequest>,
}

/// Request to reschedule an existing booking.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateBooking {
    /// New interval start.
    pub start_time: DateTime<Utc>,
    /// New interval end.
    pub end_time: DateTime<Utc>,
    /// Replacement notes; `None` keeps the current value.
    pub notes: Option<String>,
}

/// Orchestrates booking creation, rescheduling, confirmation, and
/// cancellation.
#[derive(Clone)]
pub struct BookingService {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
    /// Rink repository, for status and operating data.
    rink_repo: Arc<RinkRepository>,
    /// Equipment repository, for rental bookkeeping.
    equipment_repo: Arc<EquipmentRepository>,
    /// Hourly rate lookup.
    rates: Arc<dyn RateProvider>,
    /// Price calculator.
    pricing: PriceCalculator,
    /// Cancellation window policy.
    cancellation: CancellationPolicy,
    /// Fire-and-forget notification sink.
    notifications: Arc<NotificationService>,
}

impl BookingService {
    /// Create a new booking service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        rink_repo: Arc<RinkRepository>,
        equipment_repo: Arc<EquipmentRepository>,
        rates: Arc<dyn RateProvider>,
        pricing: PriceCalculator,
        cancellation: CancellationPolicy,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            booking_repo,
            rink_repo,
            equipment_repo,
            rates,
            pricing,
            cancellation,
            notifications,
        }
    }

    /// Create a booking, failing with `Conflict` if the interval overlaps
    /// an active booking on the same rink.
    pub async fn create(&self, req: CreateBooking) -> AppResult<Booking> {
        let range = validator::validate_times(req.start_time, req.end_time)?;
        validator::validate_create_price(req.total_price)?;
        validator::validate_rentals(&req.rentals)?;

        let rink = self
            .rink_repo
            .find_by_id(req.rink_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Rink {} not found", req.rink_id)))?;

        if !rink.status.accepts_bookings() {
            return Err(AppError::conflict(format!(
                "Rink '{}' is not accepting bookings (status: {})",
                rink.name, rink.status
            )));
        }

        let rate = self.rates.hourly_rate(rink.id).await?;
        let total_price = self.pricing.quote(
            &range,
            rate,
            &DiscountContext {
                user_id: req.user_id,
                rink_id: rink.id,
                start_time: range.start,
                end_time: range.end,
            },
        )?;

        let mut tx = self.booking_repo.begin().await?;
        BookingRepository::lock_rink(&mut tx, rink.id).await?;

        let existing =
            BookingRepository::find_overlapping_in(&mut tx, rink.id, &range, None).await?;
        if let Some(blocker) = conflict::find_conflicts(&range, &existing, None).first() {
            return Err(AppError::conflict(format!(
                "Requested interval overlaps booking {} ({} - {})",
                blocker.id, blocker.start_time, blocker.end_time
            )));
        }

        let booking = BookingRepository::insert_in(
            &mut tx,
            &NewBooking {
                user_id: req.user_id,
                rink_id: rink.id,
                start_time: range.start,
                end_time: range.end,
                slot_type: req.slot_type.unwrap_or_default(),
                total_price,
                notes: req.notes,
            },
        )
        .await?;

        for rental in &req.rentals {
            EquipmentRepository::decrement_in(&mut tx, rental.equipment_id, rental.quantity)
                .await?;
            EquipmentRepository::insert_rental_in(
                &mut tx,
                booking.id,
                rental.equipment_id,
                rental.quantity,
            )
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(
                ErrorKind::Database,
                "Failed to commit booking",
                e,
            ))?;

        info!(
            booking_id = %booking.id,
            rink_id = %booking.rink_id,
            user_id = %booking.user_id,
            total_price = %booking.total_price,
            "Booking created"
        );

        self.notifications.notify(BookingEvent::Created, &booking);
        Ok(booking)
    }

    /// Get a booking by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<Booking> {
        self.booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// List a user's bookings with pagination.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        self.booking_repo.find_by_user(user_id, &page).await
    }

    /// Reschedule a booking, re-running conflict checking (excluding the
    /// booking itself) and re-pricing the new interval.
    pub async fn update(&self, id: Uuid, req: UpdateBooking) -> AppResult<Booking> {
        let range = validator::validate_times(req.start_time, req.end_time)?;

        let booking = self.get(id).await?;
        let rate = self.rates.hourly_rate(booking.rink_id).await?;
        let total_price = self.pricing.quote(
            &range,
            rate,
            &DiscountContext {
                user_id: booking.user_id,
                rink_id: booking.rink_id,
                start_time: range.start,
                end_time: range.end,
            },
        )?;

        let mut tx = self.booking_repo.begin().await?;
        BookingRepository::lock_rink(&mut tx, booking.rink_id).await?;

        // Re-read under the row lock; the status from the pool read may be
        // stale by now.
        let current = BookingRepository::find_by_id_in(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
        if !current.status.blocks_slot() {
            return Err(AppError::invalid_transition(format!(
                "Booking {id} is {} and cannot be rescheduled",
                current.status
            )));
        }
        let notes = req.notes.or(current.notes);

        let existing =
            BookingRepository::find_overlapping_in(&mut tx, booking.rink_id, &range, Some(id))
                .await?;
        if conflict::has_conflict(&range, &existing, Some(id)) {
            return Err(AppError::conflict(
                "Requested interval overlaps an existing booking",
            ));
        }

        let updated = BookingRepository::update_times_in(&mut tx, id, &range, total_price, &notes)
            .await?
            .ok_or_else(|| {
                AppError::invalid_transition(format!("Booking {id} can no longer be rescheduled"))
            })?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(
                ErrorKind::Database,
                "Failed to commit booking update",
                e,
            ))?;

        info!(booking_id = %id, "Booking rescheduled");
        Ok(updated)
    }

    /// Confirm a pending booking.
    ///
    /// The write is a compare-and-set guarded by the transition matrix, so
    /// a confirm racing a cancel cannot resurrect a cancelled booking.
    pub async fn confirm(&self, id: Uuid) -> AppResult<Booking> {
        let confirmed = match self
            .booking_repo
            .update_status(id, BookingStatus::Confirmed)
            .await?
        {
            Some(booking) => booking,
            // Zero rows matched: missing, or not in a confirmable status.
            // Re-read to report which.
            None => {
                let booking = self.get(id).await?;
                return Err(AppError::invalid_transition(format!(
                    "Booking {id} is {} and cannot be confirmed",
                    booking.status
                )));
            }
        };

        info!(booking_id = %id, "Booking confirmed");
        self.notifications.notify(BookingEvent::Confirmed, &confirmed);
        Ok(confirmed)
    }

    /// Cancel a booking, subject to the cancellation policy.
    ///
    /// The status transition and the equipment-quantity restore commit as
    /// one transaction. The policy check runs on a row-locked read, so of
    /// two concurrent cancels the second blocks, then sees the cancelled
    /// row and fails with `AlreadyCancelled` rather than restoring the
    /// rentals twice. The record is kept.
    pub async fn cancel(&self, id: Uuid) -> AppResult<Booking> {
        let mut tx = self.booking_repo.begin().await?;

        let booking = BookingRepository::find_by_id_in(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
        self.cancellation.check(&booking, Utc::now())?;

        let cancelled =
            BookingRepository::update_status_in(&mut tx, id, BookingStatus::Cancelled)
                .await?
                .ok_or_else(|| {
                    AppError::invalid_transition(format!(
                        "Booking {id} is no longer in a cancellable status"
                    ))
                })?;

        let rentals = EquipmentRepository::find_rentals_by_booking_in(&mut tx, id).await?;
        for rental in &rentals {
            EquipmentRepository::restore_in(&mut tx, rental.equipment_id, rental.quantity).await?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(
                ErrorKind::Database,
                "Failed to commit cancellation",
                e,
            ))?;

        info!(
            booking_id = %id,
            restored_rentals = rentals.len(),
            "Booking cancelled"
        );

        self.notifications.notify(BookingEvent::Cancelled, &cancelled);
        Ok(cancelled)
    }
}
