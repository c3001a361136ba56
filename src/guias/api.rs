//! # API Facade
//!
//! [`CatalogApi`] is the single entry point for catalog operations,
//! regardless of the UI driving it. It owns the application state the view
//! layer must never mutate directly: the record store and the access gate.
//!
//! The facade dispatches to the command layer and returns structured
//! `CmdResult` values. It performs no I/O and no presentation; rendering
//! notices and running confirmation prompts is the client's job — the
//! confirmation *answer* arrives here as a plain boolean.
//!
//! Generic over [`TutorialStore`] and [`CredentialCheck`] so tests can swap
//! the storage backend or the secret without touching any logic.

use crate::auth::{AccessGate, CredentialCheck};
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::CatalogFilter;
use crate::model::{NewTutorial, Tutorial};
use crate::store::TutorialStore;

pub struct CatalogApi<S: TutorialStore, C: CredentialCheck> {
    store: S,
    gate: AccessGate<C>,
}

impl<S: TutorialStore, C: CredentialCheck> CatalogApi<S, C> {
    pub fn new(store: S, checker: C) -> Self {
        Self {
            store,
            gate: AccessGate::new(checker),
        }
    }

    pub fn list(&self, filter: &CatalogFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn get(&self, id: &str) -> Result<Tutorial> {
        self.store.get(id)
    }

    pub fn create(&mut self, draft: NewTutorial) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update(&mut self, id: &str, draft: NewTutorial) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    pub fn delete(&mut self, id: &str, confirmed: bool) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id, confirmed)
    }

    pub fn seed(&mut self, confirmed: bool) -> Result<CmdResult> {
        commands::seed::run(&mut self.store, confirmed)
    }

    /// Whether mutation controls should currently be offered by the UI.
    pub fn is_privileged(&self) -> bool {
        self.gate.is_privileged()
    }

    pub fn login(&mut self, candidate: &str) -> CmdResult {
        let mut result = CmdResult::default();
        if self.gate.login(candidate) {
            result.add_message(CmdMessage::success("Admin mode enabled"));
        } else {
            result.add_message(CmdMessage::error("Incorrect password"));
        }
        result
    }

    pub fn logout(&mut self) -> CmdResult {
        self.gate.logout();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Admin mode disabled"));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{FixedSecret, ADMIN_SECRET};
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    fn api() -> CatalogApi<InMemoryStore, FixedSecret> {
        CatalogApi::new(InMemoryStore::new(), FixedSecret::default())
    }

    #[test]
    fn login_outcomes_surface_as_notices() {
        let mut api = api();

        let failed = api.login("errada");
        assert_eq!(failed.messages[0].level, MessageLevel::Error);
        assert!(!api.is_privileged());

        let ok = api.login(ADMIN_SECRET);
        assert_eq!(ok.messages[0].level, MessageLevel::Success);
        assert!(api.is_privileged());

        let out = api.logout();
        assert_eq!(out.messages[0].level, MessageLevel::Info);
        assert!(!api.is_privileged());
    }

    #[test]
    fn mutations_are_not_gated_by_the_flag() {
        // The gate is a UI affordance; the library itself enforces nothing.
        let mut api = api();
        assert!(!api.is_privileged());
        let result = api
            .create(NewTutorial {
                title: "Sem login".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(result.affected.len(), 1);
    }

    #[test]
    fn facade_wires_create_list_update_delete() {
        let mut api = api();
        let created = api
            .create(NewTutorial {
                title: "Manual".into(),
                ..Default::default()
            })
            .unwrap()
            .affected
            .remove(0);

        assert_eq!(api.list(&CatalogFilter::default()).unwrap().listed.len(), 1);

        api.update(
            &created.id,
            NewTutorial {
                title: "Manual 2".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(api.get(&created.id).unwrap().title, "Manual 2");

        api.delete(&created.id, true).unwrap();
        assert!(api.list(&CatalogFilter::default()).unwrap().listed.is_empty());
    }
}
