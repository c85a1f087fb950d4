//! Availability schedule and appointment booking
//!
//! The schedule is rule-based rather than backed by a live calendar:
//! hourly slots run 9 AM through 8 PM, Sundays are closed, and a
//! recurring blackout pattern spreads unavailable slots across the
//! week. The same date therefore always answers with the same slots,
//! which keeps quotes and confirmations reproducible.
//!
//! [`AppointmentBook`] holds requested appointments in memory with
//! monotonic ids and an idempotent confirm step.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::info;

/// First bookable hour of the day (24-hour clock).
pub const OPENING_HOUR: u32 = 9;

/// Last bookable hour of the day (24-hour clock, slot starts 8 PM).
pub const CLOSING_HOUR: u32 = 20;

/// Bookable service lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    PhotoBooth,
    #[serde(rename = "360-experience")]
    ThreeSixtyExperience,
    CustomBackdrops,
}

impl ServiceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::PhotoBooth => "photo-booth",
            ServiceKind::ThreeSixtyExperience => "360-experience",
            ServiceKind::CustomBackdrops => "custom-backdrops",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ServiceKind> {
        match slug {
            "photo-booth" => Some(ServiceKind::PhotoBooth),
            "360-experience" => Some(ServiceKind::ThreeSixtyExperience),
            "custom-backdrops" => Some(ServiceKind::CustomBackdrops),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::from_slug(s).ok_or_else(|| BookingError::UnknownService(s.to_string()))
    }
}

/// One entry of the service picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    pub kind: ServiceKind,
    pub label: &'static str,
    pub description: &'static str,
}

pub const SERVICE_OPTIONS: [ServiceOption; 3] = [
    ServiceOption {
        kind: ServiceKind::PhotoBooth,
        label: "Photo Booth",
        description: "Classic photo booth with modern technology",
    },
    ServiceOption {
        kind: ServiceKind::ThreeSixtyExperience,
        label: "360° Experience",
        description: "Ultimate party centerpiece with slow-motion videos",
    },
    ServiceOption {
        kind: ServiceKind::CustomBackdrops,
        label: "Custom Backdrops",
        description: "Curated collection of elegant backdrops",
    },
];

pub fn service_options() -> &'static [ServiceOption] {
    &SERVICE_OPTIONS
}

/// A bookable hour with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// Start hour, 24-hour clock.
    pub hour: u32,
    /// 12-hour display label, e.g. "1:00 PM".
    pub label: String,
}

/// 12-hour display label for an hour of the day.
pub fn slot_label(hour: u32) -> String {
    let (display, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:00 {}", display, suffix)
}

/// Open slots for one date. Sundays answer with no slots.
pub fn day_slots(date: NaiveDate) -> Vec<TimeSlot> {
    if date.weekday() == Weekday::Sun {
        return Vec::new();
    }
    (OPENING_HOUR..=CLOSING_HOUR)
        .filter(|hour| (date.day() + hour) % 4 != 0)
        .map(|hour| TimeSlot {
            hour,
            label: slot_label(hour),
        })
        .collect()
}

/// Open slots on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

/// Availability for the `days` dates starting at `from`.
///
/// Closed dates are omitted entirely, so every returned entry has at
/// least one open slot.
pub fn upcoming_availability(from: NaiveDate, days: u32) -> Vec<DayAvailability> {
    let mut out = Vec::new();
    let mut date = from;
    for _ in 0..days {
        let slots = day_slots(date);
        if !slots.is_empty() {
            out.push(DayAvailability { date, slots });
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    out
}

/// What a visitor submits to request an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    pub date: NaiveDate,
    pub hour: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
}

/// A requested appointment and its confirmation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appointment {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    pub date: NaiveDate,
    pub hour: u32,
    pub status: AppointmentStatus,
    pub requested_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// Why a booking operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("requested date is in the past")]
    PastDate,

    #[error("closed on the requested date")]
    DayClosed,

    #[error("no open slot at hour {hour} on {date}")]
    SlotUnavailable { date: NaiveDate, hour: u32 },

    #[error("no appointment with id {0}")]
    UnknownAppointment(u64),

    #[error("unknown service: {0}")]
    UnknownService(String),
}

/// In-memory appointment registry.
///
/// Ids are monotonic starting at 1 and never reused. Thread-safe;
/// share behind an `Arc` when multiple tasks take bookings.
#[derive(Debug, Default)]
pub struct AppointmentBook {
    next_id: AtomicU64,
    appointments: Mutex<HashMap<u64, Appointment>>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an appointment, validated against today's date.
    pub fn request(&self, request: BookingRequest) -> Result<Appointment, BookingError> {
        self.request_as_of(Utc::now().date_naive(), request)
    }

    /// Request an appointment, validated against an explicit "today".
    ///
    /// The requested slot must be on or after `today`, on an open day,
    /// and present in that day's slot list.
    pub fn request_as_of(
        &self,
        today: NaiveDate,
        request: BookingRequest,
    ) -> Result<Appointment, BookingError> {
        if request.date < today {
            return Err(BookingError::PastDate);
        }
        if request.date.weekday() == Weekday::Sun {
            return Err(BookingError::DayClosed);
        }
        let open = day_slots(request.date)
            .iter()
            .any(|slot| slot.hour == request.hour);
        if !open {
            return Err(BookingError::SlotUnavailable {
                date: request.date,
                hour: request.hour,
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let appointment = Appointment {
            id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            service: request.service,
            date: request.date,
            hour: request.hour,
            status: AppointmentStatus::Pending,
            requested_at: Utc::now(),
            confirmed_at: None,
        };

        info!(
            id,
            service = %appointment.service,
            date = %appointment.date,
            hour = appointment.hour,
            "appointment requested"
        );

        let mut appointments = self.appointments.lock().unwrap();
        appointments.insert(id, appointment.clone());
        Ok(appointment)
    }

    /// Confirm a pending appointment.
    ///
    /// Idempotent: confirming an already-confirmed appointment returns
    /// it unchanged, keeping the original confirmation time.
    pub fn confirm(&self, id: u64) -> Result<Appointment, BookingError> {
        let mut appointments = self.appointments.lock().unwrap();
        let appointment = appointments
            .get_mut(&id)
            .ok_or(BookingError::UnknownAppointment(id))?;

        if appointment.status != AppointmentStatus::Confirmed {
            appointment.status = AppointmentStatus::Confirmed;
            appointment.confirmed_at = Some(Utc::now());
            info!(id, "appointment confirmed");
        }
        Ok(appointment.clone())
    }

    pub fn get(&self, id: u64) -> Option<Appointment> {
        self.appointments.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.appointments.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.lock().unwrap().is_empty()
    }
}
