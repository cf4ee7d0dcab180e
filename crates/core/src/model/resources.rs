
/// A named external reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    name: String,
    url: String,
}

impl ResourceLink {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A themed group of links shown in the intelligence hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    title: String,
    icon: String,
    links: Vec<ResourceLink>,
}

impl ResourceGroup {
    #[must_use]
    pub fn new(title: impl Into<String>, icon: impl Into<String>, links: Vec<ResourceLink>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            links,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn links(&self) -> &[ResourceLink] {
        &self.links
    }
}
