//! Draft command - manage cached form values

use log::info;
use seatfinder::config::Config;
use seatfinder::core::models::FormField;
use seatfinder::core::services::FeedbackForm;
use seatfinder::output::{DraftEntry, DraftListResult, OperationResult, OutputMode};

use crate::cli::DraftAction;

/// Handle draft subcommands
pub fn draft(action: DraftAction, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load()?;
    let store = config.draft_store();

    match action {
        DraftAction::Set { field, value } => {
            let field: FormField = field.parse().map_err(anyhow::Error::msg)?;
            let key = field.draft_key();
            store.save(&key, &value)?;
            info!("saved draft {key}");
            OperationResult {
                success: true,
                message: format!("Saved draft for {field}"),
            }
            .render(mode);
        },
        DraftAction::Show => {
            let drafts = store
                .entries()?
                .into_iter()
                .map(|(key, value)| DraftEntry { key, value })
                .collect();
            DraftListResult { drafts }.render(mode);
        },
        DraftAction::Clear => {
            FeedbackForm::clear_drafts(store.as_ref())?;
            OperationResult {
                success: true,
                message: "Cleared saved drafts".to_string(),
            }
            .render(mode);
        },
    }
    Ok(())
}
