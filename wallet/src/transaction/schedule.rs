//! Release schedules for scheduled transfers.

use crate::{Amount, Error};
use bytes::{Buf, BufMut};
use ledgerkit_codec::{EncodeSize, Error as CodecError, FixedSize, Read, ReadExt, Write};

/// Maximum number of releases: the wire count prefix is a single byte.
pub const MAX_SCHEDULE_POINTS: usize = 255;

/// A single release: a timestamp in milliseconds and the amount released.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SchedulePoint {
    pub timestamp_ms: u64,
    pub amount: Amount,
}

impl Write for SchedulePoint {
    fn write(&self, buf: &mut impl BufMut) {
        self.timestamp_ms.write(buf);
        self.amount.write(buf);
    }
}

impl Read for SchedulePoint {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        let timestamp_ms = u64::read(buf)?;
        let amount = Amount::read(buf)?;
        Ok(Self {
            timestamp_ms,
            amount,
        })
    }
}

impl FixedSize for SchedulePoint {
    const SIZE: usize = u64::SIZE + Amount::SIZE;
}

/// An ordered list of releases.
///
/// Points are serialized in list order; callers are responsible for
/// chronological ordering. The total of all releases must be representable as
/// a single amount, which is checked at construction so balance and cost
/// calculations can rely on it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Schedule(Vec<SchedulePoint>);

impl Schedule {
    /// Creates a schedule, rejecting more than [`MAX_SCHEDULE_POINTS`] points
    /// and totals that overflow an amount.
    pub fn new(points: Vec<SchedulePoint>) -> Result<Self, Error> {
        if points.len() > MAX_SCHEDULE_POINTS {
            return Err(Error::InvalidLength("schedule", points.len()));
        }
        points
            .iter()
            .try_fold(Amount::ZERO, |acc, point| acc.checked_add(point.amount))
            .ok_or(Error::Range("schedule total"))?;
        Ok(Self(points))
    }

    /// Builds a schedule of `releases` evenly spaced releases summing to
    /// exactly `total`, with any division remainder placed on the final
    /// release.
    pub fn regular_interval(
        total: Amount,
        releases: u8,
        start_ms: u64,
        interval_ms: u64,
    ) -> Result<Self, Error> {
        if releases == 0 {
            return Err(Error::InvalidLength("schedule", 0));
        }
        let releases = u64::from(releases);
        let per_release = total.micro() / releases;
        let remainder = total.micro() % releases;

        let mut points = Vec::with_capacity(releases as usize);
        for i in 0..releases {
            let timestamp_ms = start_ms
                .checked_add(i.checked_mul(interval_ms).ok_or(Error::Range("schedule"))?)
                .ok_or(Error::Range("schedule"))?;
            let amount = if i == releases - 1 {
                Amount::from_micro(per_release + remainder)
            } else {
                Amount::from_micro(per_release)
            };
            points.push(SchedulePoint {
                timestamp_ms,
                amount,
            });
        }
        Self::new(points)
    }

    pub fn points(&self) -> &[SchedulePoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total effective amount of the transfer: the exact sum of all releases.
    pub fn total(&self) -> Amount {
        // Overflow ruled out in `new`.
        self.0
            .iter()
            .fold(Amount::ZERO, |acc, point| {
                acc.checked_add(point.amount)
                    .expect("schedule total checked at construction")
            })
    }
}

impl Write for Schedule {
    fn write(&self, buf: &mut impl BufMut) {
        // Length checked in `new`.
        buf.put_u8(self.0.len() as u8);
        for point in &self.0 {
            point.write(buf);
        }
    }
}

impl EncodeSize for Schedule {
    fn encode_size(&self) -> usize {
        u8::SIZE + self.0.len() * SchedulePoint::SIZE
    }
}
