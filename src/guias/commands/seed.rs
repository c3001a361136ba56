use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GuiasError, Result};
use crate::model::{Category, NewTutorial};
use crate::store::TutorialStore;

/// The fixed demonstration catalog. Field names mirror the form fields, the
/// same shape a server payload would use.
const SEED_JSON: &str = r#"[
  {
    "title": "Bem-vindo ao sistema",
    "description": "Um passeio pelas telas principais e pelo menu.",
    "category": "Primeiros Passos",
    "videoUrl": "https://www.youtube.com/watch?v=NKhuyvpw2NA",
    "tags": ["inicio", "visao-geral"]
  },
  {
    "title": "Registrando a primeira venda",
    "description": "Do orçamento ao cupom: o fluxo completo de uma venda no balcão.",
    "category": "Vendas",
    "videoUrl": "https://youtu.be/dQw4w9WgXcQ",
    "tags": ["pdv", "vendas"]
  },
  {
    "title": "Emitindo boletos",
    "description": "Como gerar e reemitir boletos de cobrança para seus clientes.",
    "category": "Financeiro",
    "pdfUrl": "https://example.com/manuais/boletos.pdf",
    "tags": ["boleto", "cobranca"]
  },
  {
    "title": "Ajuste de estoque",
    "description": "Corrigindo divergências de contagem sem perder o histórico.",
    "category": "Estoque",
    "imageUrl": "https://example.com/capas/estoque.png",
    "tags": ["inventario"]
  },
  {
    "title": "Usuários e permissões",
    "description": "Criando contas para a equipe e limitando o que cada uma enxerga.",
    "category": "Configurações",
    "tags": ["equipe", "acesso"]
  }
]"#;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedEntry {
    title: String,
    description: String,
    category: Category,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(default)]
    pdf_url: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<&SeedEntry> for NewTutorial {
    fn from(entry: &SeedEntry) -> Self {
        NewTutorial {
            title: entry.title.clone(),
            description: entry.description.clone(),
            category: entry.category,
            video_url: entry.video_url.clone(),
            pdf_url: entry.pdf_url.clone(),
            image_url: entry.image_url.clone(),
            tags: entry.tags.clone(),
        }
    }
}

fn entries() -> Result<&'static [SeedEntry]> {
    static ENTRIES: OnceCell<Vec<SeedEntry>> = OnceCell::new();
    let parsed =
        ENTRIES.get_or_try_init(|| serde_json::from_str(SEED_JSON).map_err(GuiasError::from))?;
    Ok(parsed)
}

/// Prepends the example records, but only into an empty collection and only
/// after explicit confirmation. A declined confirmation aborts silently.
pub fn run<S: TutorialStore>(store: &mut S, confirmed: bool) -> Result<CmdResult> {
    if !confirmed {
        return Ok(CmdResult::default());
    }

    let mut result = CmdResult::default();
    if !store.is_empty()? {
        result.add_message(CmdMessage::info(
            "Catalog already has tutorials, seed skipped",
        ));
        return Ok(result);
    }

    let entries = entries()?;
    // Prepend in reverse so the fixture's first entry ends up first
    for entry in entries.iter().rev() {
        let draft = super::helpers::sanitize_draft(NewTutorial::from(entry));
        let record = store.insert_front(draft)?;
        result.affected.push(record);
    }
    result.affected.reverse();

    result.add_message(CmdMessage::success(format!(
        "Seeded {} example tutorials",
        result.affected.len()
    )));
    Ok(result)
}
