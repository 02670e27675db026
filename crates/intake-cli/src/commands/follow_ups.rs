use crate::commands::{print_delete, print_json, Context, DeleteOutcome};
use crate::error::not_found;
use crate::util::{confirm, now_utc, FollowUpInput};
use anyhow::{Context as _, Result};
use clap::Args;
use intake_core::domain::{FollowUpId, InquiryId};
use intake_store::repo::FollowUpNew;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddFollowUpArgs {
    /// Follow-up time (YYYY-MM-DD HH:MM)
    #[arg(long, value_name = "DATETIME")]
    pub at: Option<String>,
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
    /// Copy the name of this stored inquiry
    #[arg(long, value_name = "ID", conflicts_with = "inquiry_name")]
    pub inquiry: Option<String>,
    #[arg(long, value_name = "NAME")]
    pub inquiry_name: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub fn add_follow_up(ctx: &Context<'_>, args: AddFollowUpArgs) -> Result<()> {
    let inquiry_name = match args.inquiry {
        Some(raw) => {
            let id: InquiryId = raw.parse()?;
            let inquiry = ctx
                .store
                .inquiries()
                .get(&id)?
                .ok_or_else(|| not_found(format!("inquiry {id} not found")))?;
            Some(inquiry.name)
        }
        None => args.inquiry_name,
    };

    let fields = FollowUpInput {
        at: args.at,
        remarks: args.remarks,
        status: args.status,
        demo_start: args.demo_start,
        demo_end: args.demo_end,
        next_follow_up: args.next_follow_up,
    }
    .into_fields()?;

    let follow_up = ctx.store.follow_ups().create(
        now_utc(),
        FollowUpNew {
            fields,
            inquiry_name,
        },
    )?;
    debug!(id = %follow_up.id, inquiry = %follow_up.inquiry_name, "follow-up saved");

    if ctx.json {
        return print_json(&follow_up);
    }
    println!(
        "{} {} ({})",
        follow_up.id,
        follow_up.inquiry_name,
        follow_up.status.displayed().label()
    );
    Ok(())
}

pub fn delete_follow_up(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id: FollowUpId = args.id.parse()?;
    let repo = ctx.store.follow_ups();

    let outcome = match repo.get(&id)? {
        None => DeleteOutcome::Missing,
        Some(follow_up) => {
            if ctx.needs_confirmation(args.yes)
                && !confirm(&format!(
                    "Delete follow-up for {} at {}?",
                    follow_up.inquiry_name, follow_up.follow_up_date_time
                ))?
            {
                DeleteOutcome::Cancelled
            } else if repo
                .delete(&id)
                .with_context(|| format!("delete follow-up {id}"))?
            {
                DeleteOutcome::Deleted
            } else {
                DeleteOutcome::Missing
            }
        }
    };
    debug!(id = %id, ?outcome, "delete follow-up");

    print_delete(ctx, "follow-up", id.as_str(), outcome)
}
