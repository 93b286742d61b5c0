//! RSS serialization.
//!
//! Renders a `FeedDocument` to pretty-printed RSS 2.0 with the iTunes
//! podcast extension. No wall-clock data (lastBuildDate, generator) is
//! written, so rendering stays a pure function of the document.

use rss::extension::itunes::{ITunesCategoryBuilder, ITunesChannelExtensionBuilder};
use rss::{ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder};

use crate::document::{FeedDocument, FeedEntry, ENCLOSURE_LENGTH, ENCLOSURE_TYPE};
use crate::error::FeedResult;

/// Serialize the document to feed markup.
pub fn render(document: &FeedDocument) -> FeedResult<Vec<u8>> {
    let (category, subcategory) = &document.category;
    let itunes = ITunesChannelExtensionBuilder::default()
        .categories(vec![ITunesCategoryBuilder::default()
            .text(category.clone())
            .subcategory(Some(Box::new(
                ITunesCategoryBuilder::default()
                    .text(subcategory.clone())
                    .build(),
            )))
            .build()])
        .build();

    let items: Vec<Item> = document.entries.iter().map(render_entry).collect();

    let channel = ChannelBuilder::default()
        .title(document.title.clone())
        .link(document.self_link.clone())
        .description(document.description.clone())
        .itunes_ext(Some(itunes))
        .items(items)
        .build();

    let buf = channel.pretty_write_to(Vec::new(), b' ', 2)?;
    Ok(buf)
}

fn render_entry(entry: &FeedEntry) -> Item {
    let guid = GuidBuilder::default()
        .value(entry.url.clone())
        .permalink(true)
        .build();
    let enclosure = EnclosureBuilder::default()
        .url(entry.url.clone())
        .length(ENCLOSURE_LENGTH.to_string())
        .mime_type(ENCLOSURE_TYPE.to_string())
        .build();

    ItemBuilder::default()
        .title(Some(entry.title.clone()))
        .link(Some(entry.url.clone()))
        .description(Some(entry.description.clone()))
        .guid(Some(guid))
        .enclosure(Some(enclosure))
        .build()
}
