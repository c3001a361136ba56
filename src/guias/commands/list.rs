use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{visible, CatalogFilter};
use crate::store::TutorialStore;

pub fn run<S: TutorialStore>(store: &S, filter: &CatalogFilter) -> Result<CmdResult> {
    let records = store.list()?;
    Ok(CmdResult::default().with_listed(visible(&records, filter)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryFilter};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_everything_by_default() {
        let fixture = StoreFixture::new()
            .with_tutorial("Bem-vindo", Category::PrimeirosPassos)
            .with_tutorial("Emitindo boletos", Category::Financeiro);

        let result = run(&fixture.store, &CatalogFilter::default()).unwrap();
        assert_eq!(result.listed.len(), 2);
        // Newest first
        assert_eq!(result.listed[0].title, "Emitindo boletos");
    }

    #[test]
    fn category_selection_narrows_the_listing() {
        let fixture = StoreFixture::new()
            .with_tutorial("Bem-vindo", Category::PrimeirosPassos)
            .with_tutorial("Tour", Category::PrimeirosPassos)
            .with_tutorial("Emitindo boletos", Category::Financeiro);

        let filter = CatalogFilter {
            category: CategoryFilter::Only(Category::PrimeirosPassos),
            ..Default::default()
        };
        let result = run(&fixture.store, &filter).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert!(result
            .listed
            .iter()
            .all(|r| r.category == Category::PrimeirosPassos));
    }

    #[test]
    fn search_crosses_categories() {
        let fixture = StoreFixture::new()
            .with_tutorial("Bem-vindo", Category::PrimeirosPassos)
            .with_tagged_tutorial("Primeira venda", &["pdv"]);

        let filter = CatalogFilter {
            search: "bem".into(),
            category: CategoryFilter::Only(Category::Financeiro),
        };
        let result = run(&fixture.store, &filter).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].title, "Bem-vindo");
    }
}
