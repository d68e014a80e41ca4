//! Rich content carried by timeline entries, modeled as data rather than
//! markup: an ordered sequence of tagged blocks that the timeline section
//! renders top to bottom.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ContentBlock {
    /// A paragraph of copy.
    Text(&'static str),
    /// A list of completed items, rendered with a leading check mark.
    Checklist(&'static [&'static str]),
    /// A two-column grid of images.
    ImageGrid(&'static [ImageRef]),
}

#[derive(Clone, PartialEq, Debug)]
pub struct TimelineEntry {
    /// Short label for the entry, typically a year.
    pub title: &'static str,
    pub content: Vec<ContentBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_keep_authored_order() {
        let entry = TimelineEntry {
            title: "2024",
            content: vec![
                ContentBlock::Text("first"),
                ContentBlock::Checklist(&["a", "b"]),
                ContentBlock::ImageGrid(&[ImageRef {
                    src: "/a.webp",
                    alt: "a",
                }]),
            ],
        };
        assert!(matches!(entry.content[0], ContentBlock::Text("first")));
        assert!(matches!(entry.content[1], ContentBlock::Checklist(items) if items.len() == 2));
        assert!(matches!(entry.content[2], ContentBlock::ImageGrid(_)));
    }
}
