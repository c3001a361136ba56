use crate::model::{clip, NewTutorial, DESCRIPTION_MAX, TITLE_MAX};
use crate::tags;

/// Input-time normalization shared by create and update: clip the bounded
/// fields, fold and deduplicate the tags. URLs pass through as opaque
/// strings.
pub fn sanitize_draft(draft: NewTutorial) -> NewTutorial {
    NewTutorial {
        title: clip(draft.title.trim(), TITLE_MAX),
        description: clip(draft.description.trim(), DESCRIPTION_MAX),
        category: draft.category,
        video_url: draft.video_url,
        pdf_url: draft.pdf_url,
        image_url: draft.image_url,
        tags: tags::normalize_all(draft.tags),
    }
}
