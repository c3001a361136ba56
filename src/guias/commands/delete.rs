use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TutorialStore;

/// Removes a record by id. `confirmed` carries the answer of the blocking
/// yes/no prompt the UI ran; a declined deletion aborts silently with no
/// state change.
pub fn run<S: TutorialStore>(store: &mut S, id: &str, confirmed: bool) -> Result<CmdResult> {
    if !confirmed {
        return Ok(CmdResult::default());
    }

    let record = store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Tutorial deleted: {}",
        record.title
    )));
    result.affected.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::NewTutorial;
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> (InMemoryStore, String, String) {
        let mut store = InMemoryStore::new();
        let first = create::run(
            &mut store,
            NewTutorial {
                title: "Alvo".into(),
                ..Default::default()
            },
        )
        .unwrap()
        .affected
        .remove(0);
        let second = create::run(
            &mut store,
            NewTutorial {
                title: "Sobrevivente".into(),
                ..Default::default()
            },
        )
        .unwrap()
        .affected
        .remove(0);
        (store, first.id, second.id)
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let (mut store, target, _) = seeded_store();
        let result = run(&mut store, &target, false).unwrap();

        assert!(result.affected.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn confirmed_deletion_removes_exactly_the_target() {
        let (mut store, target, survivor) = seeded_store();
        let result = run(&mut store, &target, true).unwrap();

        assert_eq!(result.affected[0].id, target);
        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, survivor);
    }
}
