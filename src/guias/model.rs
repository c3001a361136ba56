use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title length cap, enforced by clipping at input time.
pub const TITLE_MAX: usize = 60;
/// Description length cap, enforced by clipping at input time.
pub const DESCRIPTION_MAX: usize = 140;

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Primeiros Passos")]
    PrimeirosPassos,
    Vendas,
    Financeiro,
    Estoque,
    #[serde(rename = "Configurações")]
    Configuracoes,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::PrimeirosPassos,
        Category::Vendas,
        Category::Financeiro,
        Category::Estoque,
        Category::Configuracoes,
    ];

    /// Human-readable label, as shown in listings and the category selector.
    pub fn label(&self) -> &'static str {
        match self {
            Category::PrimeirosPassos => "Primeiros Passos",
            Category::Vendas => "Vendas",
            Category::Financeiro => "Financeiro",
            Category::Estoque => "Estoque",
            Category::Configuracoes => "Configurações",
        }
    }

    /// Accent-free slug, accepted anywhere a category is typed.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::PrimeirosPassos => "primeiros-passos",
            Category::Vendas => "vendas",
            Category::Financeiro => "financeiro",
            Category::Estoque => "estoque",
            Category::Configuracoes => "configuracoes",
        }
    }

    /// Parses a label or slug, case-insensitively.
    pub fn parse(input: &str) -> Option<Category> {
        let wanted = input.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| {
            c.label().to_lowercase() == wanted
                || c.slug() == wanted
                || c.slug().replace('-', " ") == wanted
        })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selection for listings. `All` is the sentinel "show everything"
/// value of the category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses "all"/"todas" to the sentinel, anything else as a category.
    pub fn parse(input: &str) -> Option<CategoryFilter> {
        let wanted = input.trim().to_lowercase();
        if wanted == "all" || wanted == "todas" {
            return Some(CategoryFilter::All);
        }
        Category::parse(&wanted).map(CategoryFilter::Only)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => f.write_str(c.label()),
        }
    }
}

/// A single tutorial record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub video_url: Option<String>,
    pub pdf_url: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    // Present only after an edit
    pub updated_at: Option<DateTime<Utc>>,
}

/// A candidate record built by the form, before the store mints an id and
/// creation timestamp for it.
#[derive(Debug, Clone, Default)]
pub struct NewTutorial {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub video_url: Option<String>,
    pub pdf_url: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

/// Clips a field to `max` characters. Input-time bound, never re-checked on
/// read.
pub fn clip(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// Treats an empty or whitespace-only URL field as absent.
pub fn optional_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
