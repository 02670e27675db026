use anyhow::Result;
use intake_config::AppConfig;
use intake_core::projection::DisplayOptions;
use intake_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod backup;
pub mod completions;
pub mod follow_ups;
pub mod inquiries;
pub mod list;
pub mod transfer;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
    pub display: DisplayOptions,
}

impl Context<'_> {
    /// Whether a delete must be confirmed before it runs.
    pub fn needs_confirmation(&self, yes: bool) -> bool {
        self.config.confirm.deletes && !yes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Missing,
    Cancelled,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    pub id: String,
    pub deleted: bool,
    pub cancelled: bool,
}

impl DeleteOutcome {
    pub fn report(self, id: &str) -> DeleteReport {
        DeleteReport {
            id: id.to_string(),
            deleted: self == DeleteOutcome::Deleted,
            cancelled: self == DeleteOutcome::Cancelled,
        }
    }

    pub fn message(self, record: &str, id: &str) -> String {
        match self {
            DeleteOutcome::Deleted => format!("deleted {record} {id}"),
            DeleteOutcome::Missing => format!("no {record} {id}"),
            DeleteOutcome::Cancelled => "cancelled".to_string(),
        }
    }
}

pub fn print_delete(
    ctx: &Context<'_>,
    record: &str,
    id: &str,
    outcome: DeleteOutcome,
) -> Result<()> {
    if ctx.json {
        return print_json(&outcome.report(id));
    }
    println!("{}", outcome.message(record, id));
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DeleteOutcome, DeleteReport};

    #[test]
    fn declined_delete_reports_nothing_removed() {
        assert_eq!(
            DeleteOutcome::Cancelled.report("abc"),
            DeleteReport {
                id: "abc".to_string(),
                deleted: false,
                cancelled: true,
            }
        );
        assert_eq!(DeleteOutcome::Cancelled.message("inquiry", "abc"), "cancelled");
    }

    #[test]
    fn delete_messages_name_the_record() {
        assert!(DeleteOutcome::Deleted.report("abc").deleted);
        assert!(!DeleteOutcome::Missing.report("abc").deleted);
        assert_eq!(
            DeleteOutcome::Missing.message("follow-up", "f1"),
            "no follow-up f1"
        );
        assert_eq!(
            DeleteOutcome::Deleted.message("inquiry", "i1"),
            "deleted inquiry i1"
        );
    }
}
