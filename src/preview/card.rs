use crate::preview::{CardImage, MetaItem, PreviewCard};

/// Build a preview card from one extraction pass. Pure function: identical
/// inputs produce structurally identical cards.
///
/// Field resolution is first-match-wins in document order. The card title
/// always resolves: `og:title`, else the document title, else the source
/// URL. Without any `og:` items at all the card degrades to a bare link
/// labelled with the document title or the URL.
pub fn render(source_url: &str, title: Option<&str>, items: &[MetaItem]) -> PreviewCard {
    if items.is_empty() {
        return PreviewCard::Bare {
            href: source_url.to_string(),
            label: title.unwrap_or(source_url).to_string(),
        };
    }

    let image = first(items, "og:image").map(|url| CardImage {
        url: url.to_string(),
        alt: first(items, "og:image:alt").map(str::to_string),
    });

    let card_title = first(items, "og:title")
        .or(title)
        .unwrap_or(source_url)
        .to_string();

    PreviewCard::Structured {
        href: source_url.to_string(),
        image,
        site_name: first(items, "og:site_name").map(str::to_string),
        title: card_title,
        description: first(items, "og:description").map(str::to_string),
    }
}

fn first<'a>(items: &'a [MetaItem], key: &str) -> Option<&'a str> {
    items
        .iter()
        .find(|item| item.key == key)
        .map(|item| item.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/post";

    #[test]
    fn test_full_structured_card() {
        let items = vec![
            MetaItem::new("og:image", "https://example.com/a.png"),
            MetaItem::new("og:image:alt", "a picture"),
            MetaItem::new("og:site_name", "Example"),
            MetaItem::new("og:title", "A Post"),
            MetaItem::new("og:description", "About things"),
        ];

        let card = render(URL, Some("Doc Title"), &items);
        assert_eq!(
            card,
            PreviewCard::Structured {
                href: URL.to_string(),
                image: Some(CardImage {
                    url: "https://example.com/a.png".to_string(),
                    alt: Some("a picture".to_string()),
                }),
                site_name: Some("Example".to_string()),
                title: "A Post".to_string(),
                description: Some("About things".to_string()),
            }
        );
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let items = vec![
            MetaItem::new("og:title", "A"),
            MetaItem::new("og:title", "B"),
        ];
        let card = render(URL, None, &items);
        assert_eq!(card.label(), "A");
    }

    #[test]
    fn test_image_without_alt() {
        let items = vec![MetaItem::new("og:image", "https://example.com/a.png")];
        let card = render(URL, None, &items);
        match card {
            PreviewCard::Structured { image, .. } => {
                let image = image.unwrap();
                assert_eq!(image.url, "https://example.com/a.png");
                assert_eq!(image.alt, None);
            }
            PreviewCard::Bare { .. } => panic!("expected structured card"),
        }
    }

    #[test]
    fn test_alt_without_image_is_dropped() {
        let items = vec![
            MetaItem::new("og:image:alt", "orphan alt"),
            MetaItem::new("og:title", "A"),
        ];
        let card = render(URL, None, &items);
        match card {
            PreviewCard::Structured { image, .. } => assert_eq!(image, None),
            PreviewCard::Bare { .. } => panic!("expected structured card"),
        }
    }

    #[test]
    fn test_title_precedence() {
        // og:title first
        let items = vec![MetaItem::new("og:title", "OG")];
        assert_eq!(render(URL, Some("Doc"), &items).label(), "OG");

        // then document title
        let items = vec![MetaItem::new("og:description", "d")];
        assert_eq!(render(URL, Some("Doc"), &items).label(), "Doc");

        // then the source URL
        assert_eq!(render(URL, None, &items).label(), URL);
    }

    #[test]
    fn test_degraded_card_with_document_title() {
        let card = render(URL, Some("T"), &[]);
        assert_eq!(
            card,
            PreviewCard::Bare {
                href: URL.to_string(),
                label: "T".to_string(),
            }
        );
    }

    #[test]
    fn test_degraded_card_without_title_uses_url() {
        let card = render(URL, None, &[]);
        assert_eq!(card.label(), URL);
        assert_eq!(card.href(), URL);
    }

    #[test]
    fn test_rendering_is_pure() {
        let items = vec![
            MetaItem::new("og:title", "A"),
            MetaItem::new("og:image", "i.png"),
        ];
        assert_eq!(
            render(URL, Some("Doc"), &items),
            render(URL, Some("Doc"), &items)
        );
    }
}
