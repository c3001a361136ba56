use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewTutorial;
use crate::store::TutorialStore;

use super::helpers::sanitize_draft;

pub fn run<S: TutorialStore>(store: &mut S, draft: NewTutorial) -> Result<CmdResult> {
    let record = store.insert_front(sanitize_draft(draft))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Tutorial created: {}",
        record.title
    )));
    result.affected.push(record);
    Ok(result)
}
