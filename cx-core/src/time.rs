use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::*;

lazy_static! {
    static ref TIME_OF_DAY_RE: Regex = Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap();
    static ref TIME_ZONE_RE: Regex = Regex::new(r"^UTC(?:([+-])(\d{1,2})(?::?(\d{2}))?)?$").unwrap();
    static ref UTC_OFFSET_RE: Regex = Regex::new(r"^([+-])(\d{2}):(\d{2})$").unwrap();
}

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

// Parses "HH:MM" into (hours, minutes)
pub fn parse_time_of_day(s: &str) -> anyhow::Result<(u32, u32)> {
    let caps = TIME_OF_DAY_RE
        .captures(s.trim())
        .ok_or_else(|| ExtractError::invalid_time(s))?;
    let hours: u32 = caps[1].parse()?;
    let minutes: u32 = caps[2].parse()?;
    if hours > 23 || minutes > 59 {
        return Err(ExtractError::invalid_time(s));
    }
    Ok((hours, minutes))
}

// "UTC+02", "UTC-0530", "UTC+05:30" or "UTC" -> "+02:00", "-05:30", "+05:30", "+00:00"
pub fn utc_offset_from_time_zone(tz: &str) -> anyhow::Result<String> {
    let caps = TIME_ZONE_RE
        .captures(tz.trim())
        .ok_or_else(|| ConversionError::invalid_time_zone(tz))?;
    let sign = caps.get(1).map_or("+", |m| m.as_str());
    let hours: u32 = caps.get(2).map_or(Ok(0), |m| m.as_str().parse())?;
    let minutes: u32 = caps.get(3).map_or(Ok(0), |m| m.as_str().parse())?;
    if hours > 14 || minutes > 59 {
        return Err(ConversionError::invalid_time_zone(tz));
    }
    Ok(format!("{sign}{hours:02}:{minutes:02}"))
}

// "+02:00" -> "UTC+02", "-05:30" -> "UTC-05:30"
pub fn time_zone_from_utc_offset(offset: &str) -> anyhow::Result<String> {
    let caps = UTC_OFFSET_RE
        .captures(offset.trim())
        .ok_or_else(|| ConversionError::invalid_time_zone(offset))?;
    let (sign, hours, minutes) = (&caps[1], &caps[2], &caps[3]);
    if hours.parse::<u32>()? > 14 || minutes.parse::<u32>()? > 59 {
        return Err(ConversionError::invalid_time_zone(offset));
    }
    if minutes == "00" {
        Ok(format!("UTC{sign}{hours}"))
    } else {
        Ok(format!("UTC{sign}{hours}:{minutes}"))
    }
}

pub fn to_millis(hours: u32, minutes: u32, seconds: u32) -> u64 {
    hours as u64 * MS_PER_HOUR + minutes as u64 * MS_PER_MINUTE + seconds as u64 * MS_PER_SECOND
}

// Splits a millisecond duration back into (hours, minutes, seconds); sub-second remainders are
// dropped
pub fn from_millis(ms: u64) -> anyhow::Result<(u32, u32, u32)> {
    let too_long = || ConversionError::malformed(&format!("duration of {ms}ms is too long"));
    let hours = u32::try_from(ms / MS_PER_HOUR).map_err(|_| too_long())?;
    let minutes = u32::try_from((ms % MS_PER_HOUR) / MS_PER_MINUTE).map_err(|_| too_long())?;
    let seconds = u32::try_from((ms % MS_PER_MINUTE) / MS_PER_SECOND).map_err(|_| too_long())?;
    Ok((hours, minutes, seconds))
}
