use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use intake_core::domain::{FollowUpStatus, Program, Programs};
use intake_core::rules::FollowUpFields;
use intake_core::time::{parse_date, parse_date_time};
use std::io::{self, BufRead, IsTerminal, Write};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn parse_programs(values: &[String]) -> Result<Programs> {
    values
        .iter()
        .map(|raw| Program::parse(raw).map_err(anyhow::Error::from))
        .collect()
}

pub fn parse_status(value: Option<&str>) -> Result<FollowUpStatus> {
    match value {
        Some(raw) => Ok(FollowUpStatus::parse(raw)?),
        None => Ok(FollowUpStatus::New),
    }
}

/// Blank input counts as "not given" so empty form fields stay empty.
pub fn parse_optional_date(value: Option<String>, field: &str) -> Result<Option<String>> {
    match value.filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => parse_date(&raw)
            .map(Some)
            .with_context(|| format!("parse {field}")),
        None => Ok(None),
    }
}

pub fn parse_optional_date_time(value: Option<String>, field: &str) -> Result<Option<String>> {
    match value.filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => parse_date_time(&raw)
            .map(Some)
            .with_context(|| format!("parse {field}")),
        None => Ok(None),
    }
}

/// Follow-up flags shared by `add-inquiry` and `add-follow-up`.
pub struct FollowUpInput {
    pub at: Option<String>,
    pub remarks: Option<String>,
    pub status: Option<String>,
    pub demo_start: Option<String>,
    pub demo_end: Option<String>,
    pub next_follow_up: Option<String>,
}

impl FollowUpInput {
    pub fn into_fields(self) -> Result<FollowUpFields> {
        Ok(FollowUpFields {
            follow_up_date_time: parse_optional_date_time(self.at, "follow-up time")?,
            remarks: self.remarks,
            status: parse_status(self.status.as_deref())?,
            demo_start_date: parse_optional_date(self.demo_start, "demo start date")?,
            demo_end_date: parse_optional_date(self.demo_end, "demo end date")?,
            next_follow_up_date: parse_optional_date(self.next_follow_up, "next follow-up date")?,
        })
    }
}

/// Asks on the terminal before a destructive action. Without a terminal the
/// caller must pass `--yes`.
pub fn confirm(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(invalid_input(
            "delete requires --yes when stdin is not a terminal",
        ));
    }
    let mut stderr = io::stderr().lock();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;
    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_dates_are_not_given() {
        assert_eq!(parse_optional_date(Some("  ".into()), "date").unwrap(), None);
        assert_eq!(
            parse_optional_date(Some("2024-03-01".into()), "date").unwrap(),
            Some("2024-03-01".to_string())
        );
        assert!(parse_optional_date(Some("03/01/2024".into()), "date").is_err());
    }

    #[test]
    fn repeated_programs_collapse() {
        let programs = parse_programs(&[
            "phonics".to_string(),
            "finger-maths".to_string(),
            "phonics".to_string(),
        ])
        .unwrap();
        assert!(programs.contains(Program::Phonics));
        assert!(programs.contains(Program::FingerMaths));
        assert!(!programs.contains(Program::Handwriting));
    }

    #[test]
    fn status_defaults_to_new() {
        assert_eq!(parse_status(None).unwrap(), FollowUpStatus::New);
        assert_eq!(
            parse_status(Some("Not Interested")).unwrap(),
            FollowUpStatus::NotInterested
        );
        assert!(parse_status(Some("maybe")).is_err());
    }
}
