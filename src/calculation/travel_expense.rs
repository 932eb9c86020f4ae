//! Travel expense (여비) calculation for the traveller.
//!
//! Local trips (관내) are paid a flat rate by duration, except very short
//! round trips of 2 km or less which are reimbursed at actual cost up to the
//! same flat amount. Long-distance trips (관외) are paid fare, per diem,
//! meals and lodging separately.

use rust_decimal::Decimal;

use crate::config::{LocalTravelRates, LongDistanceTravelRates};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    LocalTripBasis, LocalTripInput, LocalTripResult, LodgingRegion, LongDistanceTripInput,
    LongDistanceTripResult,
};

use super::rounding::{round_won, to_won};

/// Calculates the reimbursement for one local trip.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `hours` is not positive or the
/// distance or actual expense is negative.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::calculate_local_trip;
/// use edupay_engine::config::LocalTravelRates;
/// use edupay_engine::models::{LocalTripBasis, LocalTripInput};
/// use rust_decimal::Decimal;
///
/// let trip = LocalTripInput {
///     distance_km: Decimal::from(12),
///     hours: Decimal::from(5),
///     official_vehicle: true,
///     actual_expense: 0,
/// };
/// let result = calculate_local_trip(&trip, &LocalTravelRates::default()).unwrap();
/// assert_eq!(result.basis, LocalTripBasis::FlatRate);
/// assert_eq!(result.amount, 10_000);
/// ```
pub fn calculate_local_trip(
    trip: &LocalTripInput,
    rates: &LocalTravelRates,
) -> EngineResult<LocalTripResult> {
    if trip.hours <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "hours",
            "trip duration must be greater than zero",
        ));
    }
    if trip.distance_km < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "distance_km",
            "distance must not be negative",
        ));
    }
    if trip.actual_expense < 0 {
        return Err(EngineError::invalid_input(
            "actual_expense",
            "actual expense must not be negative",
        ));
    }

    let flat = if trip.hours < rates.half_day_hours {
        rates.half_day
    } else {
        rates.full_day
    };
    let mut notes = Vec::new();

    if trip.distance_km > Decimal::ZERO && trip.distance_km <= rates.short_distance_km {
        if trip.actual_expense <= 0 {
            notes.push(
                "Short-distance trips are reimbursed at actual cost; enter the actual fare and \
                 meal cost."
                    .to_string(),
            );
        }
        notes.push(format!(
            "Cap by duration: {} won (the lesser of actual cost and cap applies)",
            flat
        ));
        return Ok(LocalTripResult {
            basis: LocalTripBasis::ShortDistanceActual,
            amount: trip.actual_expense.min(flat),
            cap: Some(flat),
            notes,
        });
    }

    let mut amount = flat;
    if trip.official_vehicle {
        amount = (amount - rates.vehicle_deduction).max(0);
        notes.push(format!(
            "Official or rental vehicle used: {} won deducted",
            rates.vehicle_deduction
        ));
    }

    Ok(LocalTripResult {
        basis: LocalTripBasis::FlatRate,
        amount,
        cap: None,
        notes,
    })
}

fn lodging_cap_per_night(region: LodgingRegion, rates: &LongDistanceTravelRates) -> i64 {
    match region {
        LodgingRegion::Seoul => rates.lodging_seoul,
        LodgingRegion::Metro => rates.lodging_metro,
        LodgingRegion::Other => rates.lodging_other,
    }
}

/// Calculates the reimbursement for a long-distance trip.
///
/// - Per diem: full rate on ordinary days, reduced on official-vehicle days,
///   then multiplied by the long-stay rate and rounded.
/// - Meals: daily rate per day minus one third of the daily rate (rounded)
///   per free meal, never negative.
/// - Lodging: the lesser of the amount spent and the regional nightly cap
///   (raised 30% for unavoidable circumstances) times nights.
/// - Mileage bonus: half the per diem when airline mileage paid the fare.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `days` is zero, vehicle days
/// exceed trip days, the long-stay rate is outside (0, 1], or a money amount
/// is negative.
///
/// # Examples
///
/// ```
/// use edupay_engine::calculation::calculate_long_distance_trip;
/// use edupay_engine::config::LongDistanceTravelRates;
/// use edupay_engine::models::{LodgingRegion, LongDistanceTripInput};
/// use rust_decimal::Decimal;
///
/// let trip = LongDistanceTripInput {
///     days: 3,
///     nights: 2,
///     region: LodgingRegion::Seoul,
///     lodging_spent: 150_000,
///     lodging_surcharge: false,
///     vehicle_days: 1,
///     mileage_used: false,
///     meals_provided: 2,
///     long_stay_rate: Decimal::ONE,
///     fare: 59_800,
/// };
/// let result = calculate_long_distance_trip(&trip, &LongDistanceTravelRates::default()).unwrap();
///
/// assert_eq!(result.per_diem, 50_000);
/// assert_eq!(result.meals, 46_666);
/// assert_eq!(result.lodging_allowed, 140_000);
/// assert_eq!(result.total, 296_466);
/// ```
pub fn calculate_long_distance_trip(
    trip: &LongDistanceTripInput,
    rates: &LongDistanceTravelRates,
) -> EngineResult<LongDistanceTripResult> {
    if trip.days == 0 {
        return Err(EngineError::invalid_input(
            "days",
            "trip must last at least one day",
        ));
    }
    if trip.vehicle_days > trip.days {
        return Err(EngineError::invalid_input(
            "vehicle_days",
            "vehicle days cannot exceed trip days",
        ));
    }
    if trip.long_stay_rate <= Decimal::ZERO || trip.long_stay_rate > Decimal::ONE {
        return Err(EngineError::invalid_input(
            "long_stay_rate",
            "long-stay rate must be greater than 0 and at most 1",
        ));
    }
    if trip.fare < 0 || trip.lodging_spent < 0 {
        return Err(EngineError::invalid_input(
            "fare",
            "fare and lodging spent must not be negative",
        ));
    }

    let per_diem_rate = Decimal::from(rates.per_diem);
    let ordinary_days = Decimal::from(trip.days - trip.vehicle_days);
    let vehicle_days = Decimal::from(trip.vehicle_days);
    let per_diem_gross =
        ordinary_days * per_diem_rate + vehicle_days * per_diem_rate * rates.vehicle_day_ratio;
    let per_diem = round_won(per_diem_gross * trip.long_stay_rate);

    let per_meal = round_won(Decimal::from(rates.meal) / Decimal::from(3));
    let meals = (Decimal::from(trip.days) * Decimal::from(rates.meal)
        - per_meal * Decimal::from(trip.meals_provided))
    .max(Decimal::ZERO);

    let mut cap_per_night = Decimal::from(lodging_cap_per_night(trip.region, rates));
    if trip.lodging_surcharge {
        cap_per_night = round_won(cap_per_night * rates.lodging_surcharge);
    }
    let lodging_cap = to_won(cap_per_night * Decimal::from(trip.nights));
    let lodging_allowed = trip.lodging_spent.min(lodging_cap);

    let per_diem_mileage_bonus = if trip.mileage_used {
        to_won(round_won(per_diem * rates.mileage_bonus))
    } else {
        0
    };

    let per_diem = to_won(per_diem);
    let meals = to_won(meals);
    let total = [trip.fare, per_diem, per_diem_mileage_bonus, meals, lodging_allowed]
        .iter()
        .fold(0i64, |acc, v| acc.saturating_add(*v));

    let mut notes = Vec::new();
    if trip.lodging_surcharge {
        notes.push(
            "Lodging cap raised by 30%; confirm the unavoidable circumstance before payment."
                .to_string(),
        );
    }
    if trip.mileage_used {
        notes.push(
            "Mileage bonus is limited to half of the airfare saved; review separately."
                .to_string(),
        );
    }
    if trip.long_stay_rate < Decimal::ONE {
        notes.push(format!(
            "Long-stay per diem reduction applied (x{})",
            trip.long_stay_rate.normalize()
        ));
    }

    Ok(LongDistanceTripResult {
        fare: trip.fare,
        per_diem,
        per_diem_mileage_bonus,
        meals,
        lodging_cap,
        lodging_allowed,
        total,
        notes,
    })
}
