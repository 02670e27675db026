use crate::commands::{print_delete, print_json, Context, DeleteOutcome};
use crate::error::not_found;
use crate::util::{confirm, now_utc, parse_optional_date, parse_programs, FollowUpInput};
use anyhow::{Context as _, Result};
use clap::Args;
use intake_core::domain::InquiryId;
use intake_core::projection::project_inquiry_detail;
use intake_core::InquiryDetail;
use intake_store::repo::InquiryNew;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddInquiryArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
    /// finger-maths, phonics or handwriting; repeat for several
    #[arg(long = "program", value_name = "PROGRAM")]
    pub programs: Vec<String>,
    #[arg(long)]
    pub discussion: Option<String>,
    /// Website, Social Media, Referral, Walk-in, Phone Call, Email or Other
    #[arg(long)]
    pub source: Option<String>,
    /// Defaults to `taken_by` from the config file
    #[arg(long)]
    pub taken_by: Option<String>,
    /// YYYY-MM-DD, defaults to today
    #[arg(long)]
    pub first_contact_date: Option<String>,
    /// Follow-up time (YYYY-MM-DD HH:MM)
    #[arg(long, value_name = "DATETIME")]
    pub follow_up_at: Option<String>,
    #[arg(long)]
    pub remarks: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long, value_name = "DATE")]
    pub demo_start: Option<String>,
    #[arg(long, value_name = "DATE")]
    pub demo_end: Option<String>,
    #[arg(long, value_name = "DATE")]
    pub next_follow_up: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub fn add_inquiry(ctx: &Context<'_>, args: AddInquiryArgs) -> Result<()> {
    let follow_up = FollowUpInput {
        at: args.follow_up_at,
        remarks: args.remarks,
        status: args.status,
        demo_start: args.demo_start,
        demo_end: args.demo_end,
        next_follow_up: args.next_follow_up,
    }
    .into_fields()?;

    let input = InquiryNew {
        name: args.name.unwrap_or_default(),
        contact: args.contact.unwrap_or_default(),
        programs: parse_programs(&args.programs)?,
        discussion: args.discussion,
        source: args.source,
        taken_by: args.taken_by.or_else(|| ctx.config.taken_by.clone()),
        first_contact_date: parse_optional_date(args.first_contact_date, "first contact date")?,
        follow_up,
    };

    let inquiry = ctx.store.inquiries().create(now_utc(), input)?;
    debug!(id = %inquiry.id, follow_up = !inquiry.follow_up.is_none(), "inquiry saved");

    if ctx.json {
        return print_json(&inquiry);
    }
    println!("{} {}", inquiry.id, inquiry.name);
    if let Some(details) = inquiry.follow_up.details() {
        println!("  follow-up: {}", details.status.displayed().label());
    }
    Ok(())
}

pub fn show_inquiry(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id: InquiryId = args.id.parse()?;
    let inquiry = ctx
        .store
        .inquiries()
        .get(&id)
        .with_context(|| format!("load inquiry {id}"))?
        .ok_or_else(|| not_found(format!("inquiry {id} not found")))?;
    let detail = project_inquiry_detail(&inquiry, &ctx.display);

    if ctx.json {
        return print_json(&detail);
    }
    print_detail(&detail);
    Ok(())
}

fn print_detail(detail: &InquiryDetail) {
    println!("{} ({})", detail.name, detail.id);
    println!("contact: {}", detail.contact);
    println!("programs: {}", detail.programs.join(", "));
    println!("source: {}", detail.source);
    println!("taken by: {}", detail.taken_by);
    println!("first contact: {}", detail.first_contact_date);
    println!("status: {}", detail.status_label);
    println!("discussion: {}", detail.discussion);
    println!("created: {}", detail.created_at);

    let Some(follow_up) = &detail.follow_up else {
        return;
    };
    println!("follow-up:");
    let fields = [
        ("time", &follow_up.follow_up_date_time),
        ("remarks", &follow_up.remarks),
        ("demo start", &follow_up.demo_start_date),
        ("demo end", &follow_up.demo_end_date),
        ("next follow-up", &follow_up.next_follow_up_date),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("  {label}: {value}");
        }
    }
}

pub fn delete_inquiry(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id: InquiryId = args.id.parse()?;
    let repo = ctx.store.inquiries();

    let outcome = match repo.get(&id)? {
        None => DeleteOutcome::Missing,
        Some(inquiry) => {
            if ctx.needs_confirmation(args.yes)
                && !confirm(&format!("Delete inquiry from {}?", inquiry.name))?
            {
                DeleteOutcome::Cancelled
            } else if repo
                .delete(&id)
                .with_context(|| format!("delete inquiry {id}"))?
            {
                DeleteOutcome::Deleted
            } else {
                DeleteOutcome::Missing
            }
        }
    };
    debug!(id = %id, ?outcome, "delete inquiry");

    print_delete(ctx, "inquiry", id.as_str(), outcome)
}
