//! Access to the content item routed for the current request.

use cmsimage_common::ContentLink;

use super::ContentItem;

/// Resolves the content item associated with the request being served.
///
/// Hosts hand a request-scoped resolver to the image service; every call is
/// answered fresh, nothing is cached on the image service side.
pub trait ContentResolver: Send + Sync {
    /// The content item for the current request, if routing found one.
    fn current_content(&self) -> Option<ContentItem>;

    /// Link of the current content item.
    fn current_content_link(&self) -> Option<ContentLink> {
        self.current_content().map(|c| c.content_link().clone())
    }
}

/// Resolver that always answers with the same item.
#[derive(Debug, Clone, Default)]
pub struct StaticContentResolver {
    content: Option<ContentItem>,
}

impl StaticContentResolver {
    pub fn new(content: Option<ContentItem>) -> Self {
        Self { content }
    }

    /// A resolver for requests that route to nothing.
    pub fn empty() -> Self {
        Self { content: None }
    }
}

impl ContentResolver for StaticContentResolver {
    fn current_content(&self) -> Option<ContentItem> {
        self.content.clone()
    }
}

impl<T: ContentResolver + ?Sized> ContentResolver for std::sync::Arc<T> {
    fn current_content(&self) -> Option<ContentItem> {
        (**self).current_content()
    }

    fn current_content_link(&self) -> Option<ContentLink> {
        (**self).current_content_link()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageRecord;

    #[test]
    fn empty_resolver_has_no_content() {
        let resolver = StaticContentResolver::empty();
        assert!(resolver.current_content().is_none());
        assert!(resolver.current_content_link().is_none());
    }

    #[test]
    fn link_defaults_to_item_link() {
        let resolver = StaticContentResolver::new(Some(ContentItem::Page(PageRecord::new(
            ContentLink::new(11).with_work_id(2),
            "About",
        ))));
        assert_eq!(
            resolver.current_content_link(),
            Some(ContentLink::new(11).with_work_id(2))
        );
    }
}
