//! Booking input validation.
//!
//! Pure functions over the candidate booking; no side effects. Structural
//! field presence is enforced by the types and serde, so what remains here
//! are the relational rules: time ordering, price sign, rental quantities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use rinkbook_core::error::AppError;
use rinkbook_core::result::AppResult;
use rinkbook_core::types::TimeRange;
use rinkbook_entity::booking::RentalRequest;

/// Validate the requested interval: start strictly before end.
pub fn validate_times(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<TimeRange> {
    TimeRange::new(start, end)
}

/// Validate a client-supplied price, when one was given.
///
/// The server computes the authoritative price; a provided one is only
/// sanity-checked so obviously malformed requests fail fast.
pub fn validate_price(price: Option<Decimal>) -> AppResult<()> {
    if let Some(p) = price {
        if p < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Total price must not be negative, got {p}"
            )));
        }
    }
    Ok(())
}

/// Validate the price on a create request, where it is mandatory.
pub fn validate_create_price(price: Option<Decimal>) -> AppResult<Decimal> {
    let price = price.ok_or_else(|| AppError::validation("Total price is required"))?;
    validate_price(Some(price))?;
    Ok(price)
}

/// Validate requested equipment rentals: positive quantities, no duplicate
/// equipment line items.
pub fn validate_rentals(rentals: &[RentalRequest]) -> AppResult<()> {
    for rental in rentals {
        if rental.quantity <= 0 {
            return Err(AppError::validation(format!(
                "Rental quantity for equipment {} must be positive, got {}",
                rental.equipment_id, rental.quantity
            )));
        }
    }

    for (i, rental) in rentals.iter().enumerate() {
        if rentals[..i]
            .iter()
            .any(|r| r.equipment_id == rental.equipment_id)
        {
            return Err(AppError::validation(format!(
                "Duplicate rental line for equipment {}",
                rental.equipment_id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_start_must_precede_end() {
        assert!(validate_times(at(10), at(11)).is_ok());
        assert!(validate_times(at(11), at(10)).is_err());
        assert!(validate_times(at(10), at(10)).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(validate_price(None).is_ok());
        assert!(validate_price(Some(Decimal::new(100, 2))).is_ok());
        assert!(validate_price(Some(Decimal::ZERO)).is_ok());
        assert!(validate_price(Some(Decimal::new(-1, 0))).is_err());
    }

    #[test]
    fn test_create_price_is_mandatory() {
        assert!(validate_create_price(None).is_err());
        assert!(validate_create_price(Some(Decimal::new(-5, 0))).is_err());
        assert_eq!(
            validate_create_price(Some(Decimal::new(4200, 2))).unwrap(),
            Decimal::new(4200, 2)
        );
    }

    #[test]
    fn test_rental_quantity_must_be_positive() {
        let id = Uuid::new_v4();
        assert!(validate_rentals(&[RentalRequest {
            equipment_id: id,
            quantity: 2
        }])
        .is_ok());
        assert!(validate_rentals(&[RentalRequest {
            equipment_id: id,
            quantity: 0
        }])
        .is_err());
        assert!(validate_rentals(&[RentalRequest {
            equipment_id: id,
            quantity: -3
        }])
        .is_err());
    }

    #[test]
    fn test_duplicate_rental_lines_rejected() {
        let id = Uuid::new_v4();
        let rentals = vec![
            RentalRequest {
                equipment_id: id,
                quantity: 1,
            },
            RentalRequest {
                equipment_id: id,
                quantity: 2,
            },
        ];
        assert!(validate_rentals(&rentals).is_err());
    }
}
