use url::Url;

use crate::app::{AppContext, Result};
use crate::preview::PreviewCard;

/// Fetch `url` through the og-preview endpoint, extract its metadata and
/// print the resulting card. Transport failures propagate unchanged.
pub async fn preview_link(ctx: &AppContext, url: &str) -> Result<()> {
    // Reject garbage before going to the network.
    Url::parse(url)?;

    let card = ctx.preview(url).await?;
    print_card(&card);
    Ok(())
}

pub async fn generate_key(ctx: &AppContext, length: u32) -> Result<()> {
    let key = ctx.fetcher.fetch_key(length).await?;
    println!("{}", key);
    Ok(())
}

fn print_card(card: &PreviewCard) {
    match card {
        PreviewCard::Structured {
            href,
            image,
            site_name,
            title,
            description,
        } => {
            if let Some(site_name) = site_name {
                println!("{}", site_name);
            }
            println!("{}", title);
            if let Some(description) = description {
                println!("{}", description);
            }
            if let Some(image) = image {
                match &image.alt {
                    Some(alt) => println!("[image] {} ({})", image.url, alt),
                    None => println!("[image] {}", image.url),
                }
            }
            println!("→ {}", href);
        }
        PreviewCard::Bare { href, label } => {
            println!("{}", label);
            println!("→ {}", href);
        }
    }
}
