//! Scaffold the Instagram → blog → offer content flow.
//!
//! One campaign produces three linked drafts sharing a slug:
//! - `instagram/<slug>.txt` - the caption, pointing readers at the article
//! - `blog/<slug>.md` - the article draft, pointing readers at the offer
//! - `kits/<slug>.md` - the offer page draft, ending in the quote funnel
//!
//! The drafts are starting points for a human editor, not finished copy.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

/// Generate the three content drafts for one campaign.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be written.
pub async fn post(
    title: &str,
    category: &str,
    summary: &str,
    out: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(format!("Title produces an empty slug: {title:?}").into());
    }

    let date = Utc::now().format("%Y-%m-%d").to_string();
    let out = Path::new(out);

    let files = [
        write_draft(
            &out.join("instagram"),
            &format!("{slug}.txt"),
            &instagram_caption(title, summary, &slug),
        )
        .await?,
        write_draft(
            &out.join("blog"),
            &format!("{slug}.md"),
            &blog_article(title, category, summary, &date),
        )
        .await?,
        write_draft(
            &out.join("kits"),
            &format!("{slug}.md"),
            &offer_page(title, summary, &date),
        )
        .await?,
    ];

    for file in &files {
        info!(path = %file.display(), "Draft written");
    }
    Ok(())
}

async fn write_draft(
    dir: &Path,
    file_name: &str,
    content: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, content).await?;
    Ok(path)
}

/// Lowercase ASCII slug: accented characters are folded, everything else
/// non-alphanumeric collapses into single hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_hyphen = true;

    for c in text.chars() {
        if let Some(folded) = fold_char(c) {
            slug.push(folded);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    slug.trim_end_matches('-').to_owned()
}

/// Fold a character for slug use, covering the accents that show up in
/// Portuguese copy. Returns `None` for separator characters.
fn fold_char(c: char) -> Option<char> {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => Some('a'),
        'é' | 'ê' | 'É' | 'Ê' => Some('e'),
        'í' | 'Í' => Some('i'),
        'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => Some('o'),
        'ú' | 'ü' | 'Ú' | 'Ü' => Some('u'),
        'ç' | 'Ç' => Some('c'),
        c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn instagram_caption(title: &str, summary: &str, slug: &str) -> String {
    format!(
        "{title}\n\n{summary}.\n\nLeia o artigo completo no blog: \
         https://kolibrasolutions.com.br/blog/{slug}\n\n\
         #kolibrasolutions #marketingdigital #pequenasempresas\n"
    )
}

fn blog_article(title: &str, category: &str, summary: &str, date: &str) -> String {
    format!(
        "---\ntitle: \"{title}\"\ncategory: {category}\ndate: {date}\n---\n\n\
         # {title}\n\n{summary}.\n\n\
         ## O problema\n\n<!-- Descreva o cenário que o cliente reconhece -->\n\n\
         ## Como resolver\n\n<!-- Passos práticos, sem jargão -->\n\n\
         ## Próximo passo\n\n\
         Quer ajuda com isso? Monte seu pacote em /construtor ou faça o \
         diagnóstico gratuito em /diagnostico.\n"
    )
}

fn offer_page(title: &str, summary: &str, date: &str) -> String {
    format!(
        "---\ntitle: \"Kit: {title}\"\ndate: {date}\n---\n\n\
         # Kit: {title}\n\n{summary}.\n\n\
         ## O que está incluído\n\n<!-- Liste os serviços do kit -->\n\n\
         ## Quanto custa\n\n<!-- Preço do kit e condições -->\n\n\
         ## Peça seu orçamento\n\n\
         Adicione o kit ao seu orçamento em /servicos e envie pelo WhatsApp.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Identidade Visual"), "identidade-visual");
    }

    #[test]
    fn test_slugify_accents() {
        assert_eq!(
            slugify("Gestão de Tráfego Orgânico"),
            "gestao-de-trafego-organico"
        );
        assert_eq!(slugify("Criação de Conteúdo"), "criacao-de-conteudo");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Logo -- e   branding!"), "logo-e-branding");
        assert_eq!(slugify("  por R$ 99,90  "), "por-r-99-90");
    }

    #[test]
    fn test_slugify_empty_for_symbols_only() {
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn test_drafts_reference_each_other() {
        let caption = instagram_caption("Título", "Resumo", "titulo");
        assert!(caption.contains("/blog/titulo"));

        let article = blog_article("Título", "branding", "Resumo", "2025-04-01");
        assert!(article.contains("category: branding"));
        assert!(article.contains("/construtor"));

        let offer = offer_page("Título", "Resumo", "2025-04-01");
        assert!(offer.starts_with("---\ntitle: \"Kit: Título\""));
        assert!(offer.contains("/servicos"));
    }
}
