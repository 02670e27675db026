use crate::commands::{print_json, Context};
use crate::util::parse_status;
use anyhow::{Context as _, Result};
use clap::Args;
use intake_core::domain::FollowUpStatus;
use intake_core::projection::{project_follow_up_row, project_inquiry_row, status_matches};
use intake_core::{FollowUpRow, InquiryRow, ListingDto};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list inquiries
    #[arg(long, conflicts_with = "follow_ups")]
    pub inquiries: bool,
    /// Only list follow-ups
    #[arg(long)]
    pub follow_ups: bool,
    /// Only rows with this status
    #[arg(long)]
    pub status: Option<String>,
}

pub fn list(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let wanted = match args.status.as_deref() {
        Some(raw) => Some(parse_status(Some(raw))?),
        None => None,
    };
    let keep = |status: FollowUpStatus| {
        wanted
            .as_ref()
            .map(|wanted| status_matches(&status, wanted))
            .unwrap_or(true)
    };

    let inquiries = if args.follow_ups {
        Vec::new()
    } else {
        ctx.store
            .inquiries()
            .list()
            .with_context(|| "load inquiries")?
            .iter()
            .filter(|inquiry| keep(inquiry.follow_up.status()))
            .map(|inquiry| project_inquiry_row(inquiry, &ctx.display))
            .collect()
    };
    let follow_ups = if args.inquiries {
        Vec::new()
    } else {
        ctx.store
            .follow_ups()
            .list()
            .with_context(|| "load follow-ups")?
            .iter()
            .filter(|follow_up| keep(follow_up.status.clone()))
            .map(|follow_up| project_follow_up_row(follow_up, &ctx.display))
            .collect()
    };

    if ctx.json {
        return print_json(&ListingDto {
            inquiries,
            follow_ups,
        });
    }

    if !args.follow_ups {
        print_inquiries(&inquiries);
    }
    if !args.inquiries {
        if !args.follow_ups {
            println!();
        }
        print_follow_ups(&follow_ups);
    }
    Ok(())
}

fn print_inquiries(rows: &[InquiryRow]) {
    println!("Inquiries ({})", rows.len());
    if rows.is_empty() {
        println!("  no inquiries");
        return;
    }
    for row in rows {
        println!(
            "  {}  {}  {}  [{}]  programs: {}  source: {}  first contact: {}  taken by: {}",
            row.id,
            row.name,
            row.contact,
            row.status,
            row.programs,
            row.source,
            row.first_contact_date,
            row.taken_by
        );
    }
}

fn print_follow_ups(rows: &[FollowUpRow]) {
    println!("Follow-ups ({})", rows.len());
    if rows.is_empty() {
        println!("  no follow-ups");
        return;
    }
    for row in rows {
        println!(
            "  {}  {}  {}  [{}]  {}",
            row.id, row.inquiry_name, row.follow_up_date_time, row.status, row.remarks
        );
    }
}
