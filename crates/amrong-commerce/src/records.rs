//! Reservation and contact submissions.
//!
//! Submissions are validated, stamped with the capture time and appended to
//! an append-only log in the store. Nothing in the ordering core reads the
//! logs back; they exist for whoever picks the data up later.
//!
//! Stored entries are never rewritten. A log may hold records written by
//! other clients in a slightly different shape, and those are carried over
//! verbatim on every append.

use std::marker::PhantomData;

use amrong_store::Store;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CommerceError;
use crate::repository::{CONTACT_MESSAGES_KEY, RESERVATIONS_KEY};
use crate::validate;

/// A confirmed table reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub phone: String,
    /// When the reservation was captured.
    #[serde(with = "millis")]
    pub timestamp: DateTime<Utc>,
}

impl Reservation {
    /// Message shown once the reservation is recorded.
    pub fn confirmation(&self) -> String {
        format!(
            "Reservation confirmed for {}! We'll contact you at {} to confirm.",
            self.name, self.phone
        )
    }
}

/// Raw reservation form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub phone: String,
}

impl ReservationForm {
    /// Validate the form and stamp it with `at`.
    ///
    /// Checks run in order: every field present, email shape, phone shape.
    /// The first failure wins.
    pub fn validate(self, at: DateTime<Utc>) -> Result<Reservation, CommerceError> {
        validate::require_fields(&[
            self.name.as_str(),
            self.email.as_str(),
            self.date.as_str(),
            self.time.as_str(),
            self.guests.as_str(),
            self.phone.as_str(),
        ])?;
        validate::require_email(&self.email)?;
        validate::require_phone(&self.phone)?;

        Ok(Reservation {
            name: self.name,
            email: self.email,
            date: self.date,
            time: self.time,
            guests: self.guests,
            phone: self.phone,
            timestamp: at,
        })
    }
}

/// A message sent through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    /// When the message was captured.
    #[serde(with = "millis")]
    pub timestamp: DateTime<Utc>,
}

impl ContactMessage {
    /// Message shown once the contact message is recorded.
    pub const CONFIRMATION: &'static str =
        "Thank you for your message! We will get back to you soon.";
}

/// RFC 3339 timestamps with millisecond precision, e.g.
/// `2026-10-16T18:30:00.000Z`.
mod millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// Raw contact form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Validate the form and stamp it with `at`.
    pub fn validate(self, at: DateTime<Utc>) -> Result<ContactMessage, CommerceError> {
        validate::require_fields(&[
            self.name.as_str(),
            self.email.as_str(),
            self.message.as_str(),
        ])?;
        validate::require_email(&self.email)?;

        Ok(ContactMessage {
            name: self.name,
            email: self.email,
            message: self.message,
            timestamp: at,
        })
    }
}

/// Append-only log of records under one store key.
#[derive(Debug, Clone)]
pub struct RecordLog<T> {
    store: Store,
    key: &'static str,
    _record: PhantomData<T>,
}

/// Log of reservations, stored under `reservations`.
pub type ReservationLog = RecordLog<Reservation>;

/// Log of contact messages, stored under `contactMessages`.
pub type ContactLog = RecordLog<ContactMessage>;

impl ReservationLog {
    /// Open the reservation log.
    pub fn reservations(store: Store) -> Self {
        Self::new(store, RESERVATIONS_KEY)
    }
}

impl ContactLog {
    /// Open the contact message log.
    pub fn contact_messages(store: Store) -> Self {
        Self::new(store, CONTACT_MESSAGES_KEY)
    }
}

impl<T> RecordLog<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open a log stored under `key`.
    pub fn new(store: Store, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    /// Store key of this log.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Append a record to the end of the log.
    ///
    /// Existing entries are kept as stored JSON, whatever their shape. A
    /// stored value that is not a JSON array is returned as an error and
    /// left untouched.
    pub fn append(&self, record: T) -> Result<(), CommerceError> {
        let mut entries = self.raw_entries()?;
        entries.push(serde_json::to_value(record)?);
        self.store.set(self.key, &entries)?;
        debug!(key = self.key, count = entries.len(), "record appended");
        Ok(())
    }

    /// All records that decode as `T`, oldest first. Entries of another
    /// shape are skipped.
    pub fn entries(&self) -> Result<Vec<T>, CommerceError> {
        let mut records = Vec::new();
        for (index, value) in self.raw_entries()?.into_iter().enumerate() {
            match serde_json::from_value(value) {
                Ok(record) => records.push(record),
                Err(e) => warn!(key = self.key, index, error = %e, "skipping foreign record"),
            }
        }
        Ok(records)
    }

    /// Number of stored entries, including ones [`entries`](Self::entries)
    /// skips.
    pub fn len(&self) -> Result<usize, CommerceError> {
        Ok(self.raw_entries()?.len())
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> Result<bool, CommerceError> {
        Ok(self.len()? == 0)
    }

    fn raw_entries(&self) -> Result<Vec<Value>, CommerceError> {
        Ok(self.store.get::<Vec<Value>>(self.key)?.unwrap_or_default())
    }
}
