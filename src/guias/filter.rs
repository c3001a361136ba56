//! Visibility filtering for the catalog listing.
//!
//! A listing is driven by two inputs: a free-text search term and the
//! category selector. A non-empty search term takes over completely and the
//! category selection is ignored until the term is cleared. There is no
//! ranking and no pagination; store order (newest first) is preserved.

use crate::model::{CategoryFilter, Tutorial};

/// The two UI filter inputs, as currently set.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl CatalogFilter {
    /// The search term as matched: trimmed and case-folded.
    pub fn term(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

/// Derives the visible subset of `records` for the given filter.
pub fn visible(records: &[Tutorial], filter: &CatalogFilter) -> Vec<Tutorial> {
    let term = filter.term();

    records
        .iter()
        .filter(|record| {
            if term.is_empty() {
                match filter.category {
                    CategoryFilter::All => true,
                    CategoryFilter::Only(category) => record.category == category,
                }
            } else {
                matches_term(record, &term)
            }
        })
        .cloned()
        .collect()
}

fn matches_term(record: &Tutorial, term: &str) -> bool {
    record.title.to_lowercase().contains(term)
        || record.description.to_lowercase().contains(term)
        || record.tags.iter().any(|tag| tag.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::Utc;

    fn record(title: &str, description: &str, category: Category, tags: &[&str]) -> Tutorial {
        Tutorial {
            id: format!("id-{}", title),
            title: title.to_string(),
            description: description.to_string(),
            category,
            video_url: None,
            pdf_url: None,
            image_url: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn sample() -> Vec<Tutorial> {
        vec![
            record(
                "Emitindo boletos",
                "Como gerar cobranças",
                Category::Financeiro,
                &["boleto", "cobrança"],
            ),
            record(
                "Primeira venda",
                "Registrando uma venda no balcão",
                Category::Vendas,
                &["pdv"],
            ),
            record(
                "Bem-vindo",
                "Visão geral do sistema",
                Category::PrimeirosPassos,
                &["inicio"],
            ),
        ]
    }

    #[test]
    fn title_substring_wins_regardless_of_category() {
        let records = sample();
        let filter = CatalogFilter {
            search: "boletos".into(),
            category: CategoryFilter::Only(Category::Vendas),
        };
        let visible = visible(&records, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Emitindo boletos");
    }

    #[test]
    fn search_is_trimmed_and_case_folded() {
        let records = sample();
        let filter = CatalogFilter {
            search: "  BOLETOS ".into(),
            category: CategoryFilter::All,
        };
        assert_eq!(visible(&records, &filter).len(), 1);
    }

    #[test]
    fn description_and_tag_substrings_match() {
        let records = sample();

        let by_description = CatalogFilter {
            search: "balcão".into(),
            ..Default::default()
        };
        assert_eq!(visible(&records, &by_description)[0].title, "Primeira venda");

        let by_tag = CatalogFilter {
            search: "pdv".into(),
            ..Default::default()
        };
        assert_eq!(visible(&records, &by_tag)[0].title, "Primeira venda");

        // Substring against a tag entry, not just exact
        let by_tag_part = CatalogFilter {
            search: "cobran".into(),
            ..Default::default()
        };
        assert_eq!(visible(&records, &by_tag_part)[0].title, "Emitindo boletos");
    }

    #[test]
    fn blank_search_falls_back_to_category() {
        let records = sample();
        let filter = CatalogFilter {
            search: "   ".into(),
            category: CategoryFilter::Only(Category::PrimeirosPassos),
        };
        let visible = visible(&records, &filter);
        assert_eq!(visible.len(), 1);
        assert!(visible
            .iter()
            .all(|r| r.category == Category::PrimeirosPassos));
    }

    #[test]
    fn all_sentinel_shows_everything() {
        let records = sample();
        let filter = CatalogFilter::default();
        assert_eq!(visible(&records, &filter).len(), records.len());
    }

    #[test]
    fn store_order_is_preserved() {
        let records = sample();
        let filter = CatalogFilter {
            search: "a".into(), // matches all three somewhere
            ..Default::default()
        };
        let titles: Vec<_> = visible(&records, &filter)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(
            titles,
            ["Emitindo boletos", "Primeira venda", "Bem-vindo"]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        let records = sample();
        let filter = CatalogFilter {
            search: "inexistente".into(),
            ..Default::default()
        };
        assert!(visible(&records, &filter).is_empty());
    }
}
