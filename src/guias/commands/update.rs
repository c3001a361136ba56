use chrono::Utc;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewTutorial;
use crate::store::TutorialStore;

use super::helpers::sanitize_draft;

/// Replaces all mutable fields of the record with the given id. The id and
/// creation timestamp survive; the update timestamp is refreshed.
pub fn run<S: TutorialStore>(store: &mut S, id: &str, draft: NewTutorial) -> Result<CmdResult> {
    let mut record = store.get(id)?;
    let draft = sanitize_draft(draft);

    record.title = draft.title;
    record.description = draft.description;
    record.category = draft.category;
    record.video_url = draft.video_url;
    record.pdf_url = draft.pdf_url;
    record.image_url = draft.image_url;
    record.tags = draft.tags;
    record.updated_at = Some(Utc::now());

    store.replace(&record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Tutorial updated: {}",
        record.title
    )));
    result.affected.push(record);
    Ok(result)
}
