//! Identity signature attached to commits
//!
//! A signature records who authored or committed a change and when, with the
//! writer's local UTC offset preserved.
//!
//! ## Format
//!
//! Rendered as the familiar identity line:
//! `A U Thor <author@example.com> 1234567890 -0700`

use crate::error::{ObjectError, ObjectResult};
use crate::raw::RawSignature;
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use std::hash::{Hash, Hasher};

/// Author or committer identity with a timezone-aware timestamp
///
/// A signature carries no hash of its own, so equality is structural: name,
/// email, instant, and UTC offset. Each decoded signature is owned by exactly
/// one commit and never mutated after construction.
#[derive(Debug, Clone, new)]
pub struct Signature {
    name: String,
    email: String,
    when: DateTime<FixedOffset>,
}

impl Signature {
    /// Decode a signature out of a store-owned record
    ///
    /// Name and email are both required; the timestamp is read as seconds
    /// since the UNIX epoch plus a minutes-from-UTC offset. Absent fields,
    /// invalid text, or an unrepresentable instant/offset fail with
    /// [`ObjectError::InvalidSignature`].
    pub fn decode(raw: &(impl RawSignature + ?Sized)) -> ObjectResult<Self> {
        let name = required_text("name", raw.name_bytes())?;
        let email = required_text("email", raw.email_bytes())?;

        let offset = raw
            .offset_minutes()
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ObjectError::InvalidSignature(format!(
                    "UTC offset out of range: {} minutes",
                    raw.offset_minutes()
                ))
            })?;
        let when = DateTime::from_timestamp(raw.seconds_since_epoch(), 0)
            .ok_or_else(|| {
                ObjectError::InvalidSignature(format!(
                    "timestamp out of range: {}",
                    raw.seconds_since_epoch()
                ))
            })?
            .with_timezone(&offset);

        Ok(Self { name, email, when })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The instant in the writer's local offset
    pub fn when(&self) -> DateTime<FixedOffset> {
        self.when
    }

    /// Reconstructed offset from GMT in seconds
    pub fn offset_seconds(&self) -> i32 {
        self.when.offset().local_minus_utc()
    }

    /// Format the full identity line
    ///
    /// # Returns
    ///
    /// String in format "Name <email> timestamp timezone"
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.when.timestamp(),
            self.when.format("%z")
        )
    }
}

// DateTime's own equality compares instants only; the UTC offset has to
// participate here.
impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.email == other.email
            && self.when.timestamp() == other.when.timestamp()
            && self.offset_seconds() == other.offset_seconds()
    }
}

impl Eq for Signature {}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.email.hash(state);
        self.when.timestamp().hash(state);
        self.offset_seconds().hash(state);
    }
}

fn required_text(field: &str, bytes: Option<&[u8]>) -> ObjectResult<String> {
    let bytes =
        bytes.ok_or_else(|| ObjectError::InvalidSignature(format!("missing {field}")))?;

    String::from_utf8(bytes.to_vec())
        .map_err(|_| ObjectError::InvalidSignature(format!("{field} is not valid UTF-8")))
}
