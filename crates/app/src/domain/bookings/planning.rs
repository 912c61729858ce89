//! Booking Planning
//!
//! Decides, from the caller's role, who a booking is for, which hotel it
//! belongs to and which rate applies. Nothing here touches the database;
//! the RLS policies enforce the same rules again on insert.

use bliss::prelude::{PricingResult, StandardDuration};
use rust_decimal::Decimal;

use crate::{
    auth::{AuthenticatedUser, Role},
    domain::{
        bookings::{
            BookingsServiceError,
            data::{BookingRequest, BookingScope, NewBooking},
            records::{BookingStatus, BookingUuid},
        },
        hotels::records::HotelUuid,
        profiles::records::ProfileUuid,
        treatments::records::TreatmentRecord,
    },
};

/// Roles allowed to create bookings.
pub const BOOKING_ROLES: [Role; 3] = [Role::Admin, Role::Hotel, Role::Customer];

/// Which 60 minute rate a booking is charged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rate {
    /// Customer price list.
    Standard,

    /// Partner price for bookings made for a hotel.
    Hotel,
}

impl Rate {
    /// Amount charged for a priced booking.
    #[must_use]
    pub const fn charge(self, price: &PricingResult) -> Decimal {
        match self {
            Self::Standard => price.final_base_price,
            Self::Hotel => price.final_hotel_price,
        }
    }
}

/// A booking request checked against the caller's role.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPlan {
    /// Caller making the booking.
    pub created_by: ProfileUuid,

    /// Customer the booking is for, if any.
    pub customer_uuid: Option<ProfileUuid>,

    /// Hotel the booking is made for, if any.
    pub hotel_uuid: Option<HotelUuid>,

    /// Assigned therapist.
    pub staff_uuid: Option<ProfileUuid>,

    /// Session length.
    pub duration: StandardDuration,

    /// Price list the booking is charged at.
    pub rate: Rate,

    /// The request with guest name and notes trimmed.
    pub request: BookingRequest,
}

impl BookingPlan {
    /// Check a request against the caller's role.
    ///
    /// # Errors
    ///
    /// - [`BookingsServiceError::Forbidden`] when the role may not book, or asks
    ///   for a hotel, customer or therapist it does not control.
    /// - [`BookingsServiceError::UnsupportedDuration`] for non-standard durations.
    /// - [`BookingsServiceError::MissingGuestName`] for hotel bookings
    ///   without a guest name.
    pub fn prepare(
        actor: &AuthenticatedUser,
        mut request: BookingRequest,
    ) -> Result<Self, BookingsServiceError> {
        actor.require_any_role(&BOOKING_ROLES)?;

        let duration = StandardDuration::try_from(request.duration_minutes)?;

        request.guest_name = non_blank(request.guest_name.take());
        request.notes = non_blank(request.notes.take());

        if actor.role != Role::Admin && request.staff_uuid.is_some() {
            return Err(BookingsServiceError::Forbidden);
        }

        let (customer_uuid, hotel_uuid) = match actor.role {
            Role::Admin => (request.customer_uuid, request.hotel_uuid),
            Role::Hotel => {
                let hotel = actor.hotel_uuid.ok_or(BookingsServiceError::Forbidden)?;

                if request.hotel_uuid.is_some_and(|requested| requested != hotel) {
                    return Err(BookingsServiceError::Forbidden);
                }

                if request.guest_name.is_none() {
                    return Err(BookingsServiceError::MissingGuestName);
                }

                (request.customer_uuid, Some(hotel))
            }
            Role::Customer => {
                if request.hotel_uuid.is_some()
                    || request
                        .customer_uuid
                        .is_some_and(|requested| requested != actor.uuid)
                {
                    return Err(BookingsServiceError::Forbidden);
                }

                (Some(actor.uuid), None)
            }
            Role::Staff => return Err(BookingsServiceError::Forbidden),
        };

        let rate = if hotel_uuid.is_some() {
            Rate::Hotel
        } else {
            Rate::Standard
        };

        Ok(Self {
            created_by: actor.uuid,
            customer_uuid,
            hotel_uuid,
            staff_uuid: request.staff_uuid,
            duration,
            rate,
            request,
        })
    }

    /// Price the plan against a treatment and produce the row to insert.
    ///
    /// # Errors
    ///
    /// Returns [`BookingsServiceError::ServiceNotFound`] when the treatment is
    /// not bookable.
    pub fn into_new_booking(
        self,
        treatment: &TreatmentRecord,
    ) -> Result<NewBooking, BookingsServiceError> {
        if !treatment.is_active || treatment.uuid != self.request.treatment_uuid {
            return Err(BookingsServiceError::ServiceNotFound);
        }

        let price = treatment.price(self.duration);

        Ok(NewBooking {
            uuid: BookingUuid::new(),
            created_by: self.created_by,
            customer_uuid: self.customer_uuid,
            hotel_uuid: self.hotel_uuid,
            staff_uuid: self.staff_uuid,
            treatment_uuid: treatment.uuid,
            duration: self.duration,
            scheduled_at: self.request.scheduled_at,
            guest_name: self.request.guest_name,
            notes: self.request.notes,
            status: BookingStatus::Pending,
            base_price: price.final_base_price,
            final_price: self.rate.charge(&price),
        })
    }
}

impl BookingScope {
    /// Bookings visible to a caller.
    ///
    /// # Errors
    ///
    /// Returns [`BookingsServiceError::Forbidden`] for hotel accounts without
    /// a hotel.
    pub fn for_user(actor: &AuthenticatedUser) -> Result<Self, BookingsServiceError> {
        match actor.role {
            Role::Admin => Ok(Self::All),
            Role::Hotel => actor
                .hotel_uuid
                .map(Self::Hotel)
                .ok_or(BookingsServiceError::Forbidden),
            Role::Staff => Ok(Self::Staff(actor.uuid)),
            Role::Customer => Ok(Self::Customer(actor.uuid)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::domain::treatments::records::TreatmentUuid;

    use super::*;

    fn actor(role: Role, hotel_uuid: Option<HotelUuid>) -> AuthenticatedUser {
        AuthenticatedUser {
            uuid: ProfileUuid::new(),
            email: None,
            role,
            hotel_uuid,
        }
    }

    fn treatment() -> TreatmentRecord {
        TreatmentRecord {
            uuid: TreatmentUuid::new(),
            name: "Thai Massage".to_string(),
            base_price_60min: Decimal::from(690),
            hotel_price_60min: Decimal::from(550),
            is_active: true,
        }
    }

    fn request(treatment: &TreatmentRecord, duration_minutes: u32) -> BookingRequest {
        BookingRequest {
            treatment_uuid: treatment.uuid,
            duration_minutes,
            scheduled_at: Timestamp::UNIX_EPOCH,
            customer_uuid: None,
            hotel_uuid: None,
            staff_uuid: None,
            guest_name: None,
            notes: None,
        }
    }

    #[test]
    fn customer_books_for_self_at_standard_rate() -> TestResult {
        let customer = actor(Role::Customer, None);
        let treatment = treatment();

        let booking =
            BookingPlan::prepare(&customer, request(&treatment, 90))?.into_new_booking(&treatment)?;

        assert_eq!(booking.customer_uuid, Some(customer.uuid));
        assert_eq!(booking.created_by, customer.uuid);
        assert_eq!(booking.hotel_uuid, None);
        assert_eq!(booking.base_price, Decimal::from(990));
        assert_eq!(booking.final_price, Decimal::from(990));
        assert_eq!(booking.status, BookingStatus::Pending);

        Ok(())
    }

    #[test]
    fn customer_cannot_book_for_someone_else() {
        let customer = actor(Role::Customer, None);
        let treatment = treatment();

        let mut other = request(&treatment, 60);
        other.customer_uuid = Some(ProfileUuid::new());

        assert!(matches!(
            BookingPlan::prepare(&customer, other),
            Err(BookingsServiceError::Forbidden)
        ));
    }

    #[test]
    fn customer_cannot_claim_a_hotel() {
        let customer = actor(Role::Customer, None);
        let treatment = treatment();

        let mut hotel = request(&treatment, 60);
        hotel.hotel_uuid = Some(HotelUuid::new());

        assert!(matches!(
            BookingPlan::prepare(&customer, hotel),
            Err(BookingsServiceError::Forbidden)
        ));
    }

    #[test]
    fn hotel_books_guest_at_hotel_rate() -> TestResult {
        let hotel_uuid = HotelUuid::new();
        let hotel = actor(Role::Hotel, Some(hotel_uuid));
        let treatment = treatment();

        let mut guest = request(&treatment, 120);
        guest.guest_name = Some("  Somchai  ".to_string());

        let booking = BookingPlan::prepare(&hotel, guest)?.into_new_booking(&treatment)?;

        assert_eq!(booking.hotel_uuid, Some(hotel_uuid));
        assert_eq!(booking.guest_name.as_deref(), Some("Somchai"));
        assert_eq!(booking.base_price, Decimal::from(1280));
        assert_eq!(booking.final_price, Decimal::from(1020));

        Ok(())
    }

    #[test]
    fn hotel_booking_requires_guest_name() {
        let hotel = actor(Role::Hotel, Some(HotelUuid::new()));
        let treatment = treatment();

        let mut blank = request(&treatment, 60);
        blank.guest_name = Some("   ".to_string());

        assert!(matches!(
            BookingPlan::prepare(&hotel, blank),
            Err(BookingsServiceError::MissingGuestName)
        ));
    }

    #[test]
    fn hotel_without_hotel_is_forbidden() {
        let hotel = actor(Role::Hotel, None);
        let treatment = treatment();

        let mut guest = request(&treatment, 60);
        guest.guest_name = Some("Guest".to_string());

        assert!(matches!(
            BookingPlan::prepare(&hotel, guest),
            Err(BookingsServiceError::Forbidden)
        ));
    }

    #[test]
    fn hotel_cannot_book_for_another_hotel() {
        let hotel = actor(Role::Hotel, Some(HotelUuid::new()));
        let treatment = treatment();

        let mut guest = request(&treatment, 60);
        guest.guest_name = Some("Guest".to_string());
        guest.hotel_uuid = Some(HotelUuid::new());

        assert!(matches!(
            BookingPlan::prepare(&hotel, guest),
            Err(BookingsServiceError::Forbidden)
        ));
    }

    #[test]
    fn staff_cannot_create_bookings() {
        let staff = actor(Role::Staff, None);
        let treatment = treatment();

        assert!(matches!(
            BookingPlan::prepare(&staff, request(&treatment, 60)),
            Err(BookingsServiceError::Forbidden)
        ));
    }

    #[test]
    fn only_admin_assigns_therapists() -> TestResult {
        let treatment = treatment();
        let therapist = ProfileUuid::new();

        let mut assigned = request(&treatment, 60);
        assigned.staff_uuid = Some(therapist);

        assert!(matches!(
            BookingPlan::prepare(&actor(Role::Customer, None), assigned.clone()),
            Err(BookingsServiceError::Forbidden)
        ));

        let plan = BookingPlan::prepare(&actor(Role::Admin, None), assigned)?;

        assert_eq!(plan.staff_uuid, Some(therapist));

        Ok(())
    }

    #[test]
    fn admin_gets_hotel_rate_only_with_hotel() -> TestResult {
        let admin = actor(Role::Admin, None);
        let treatment = treatment();

        let walk_in = BookingPlan::prepare(&admin, request(&treatment, 60))?;

        assert_eq!(walk_in.rate, Rate::Standard);
        assert_eq!(walk_in.customer_uuid, None);

        let mut for_hotel = request(&treatment, 60);
        for_hotel.hotel_uuid = Some(HotelUuid::new());

        let booking = BookingPlan::prepare(&admin, for_hotel)?.into_new_booking(&treatment)?;

        assert_eq!(booking.final_price, Decimal::from(550));
        assert_eq!(booking.base_price, Decimal::from(690));

        Ok(())
    }

    #[test]
    fn non_standard_duration_is_rejected() {
        let customer = actor(Role::Customer, None);
        let treatment = treatment();

        assert!(matches!(
            BookingPlan::prepare(&customer, request(&treatment, 75)),
            Err(BookingsServiceError::UnsupportedDuration(_))
        ));
    }

    #[test]
    fn inactive_treatment_is_not_bookable() -> TestResult {
        let customer = actor(Role::Customer, None);
        let mut treatment = treatment();

        treatment.is_active = false;

        let plan = BookingPlan::prepare(&customer, request(&treatment, 60))?;

        assert!(matches!(
            plan.into_new_booking(&treatment),
            Err(BookingsServiceError::ServiceNotFound)
        ));

        Ok(())
    }

    #[test]
    fn scope_follows_role() -> TestResult {
        let hotel_uuid = HotelUuid::new();
        let staff = actor(Role::Staff, None);
        let customer = actor(Role::Customer, None);

        assert_eq!(
            BookingScope::for_user(&actor(Role::Admin, None))?,
            BookingScope::All
        );
        assert_eq!(
            BookingScope::for_user(&actor(Role::Hotel, Some(hotel_uuid)))?,
            BookingScope::Hotel(hotel_uuid)
        );
        assert_eq!(
            BookingScope::for_user(&staff)?,
            BookingScope::Staff(staff.uuid)
        );
        assert_eq!(
            BookingScope::for_user(&customer)?,
            BookingScope::Customer(customer.uuid)
        );
        assert!(BookingScope::for_user(&actor(Role::Hotel, None)).is_err());

        Ok(())
    }
}
