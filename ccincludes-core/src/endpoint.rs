/// The WordPress REST endpoints a build reads, in the order they must be processed.
///
/// `MenuFooter` precedes `Scripts`: the scripts fragment is appended to the footer file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    MenuHeader,
    MenuFooter,
    Scripts,
    Styles,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::MenuHeader,
        Endpoint::MenuFooter,
        Endpoint::Scripts,
        Endpoint::Styles,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::MenuHeader => "/wp-json/ccnavigation-header/menu",
            Endpoint::MenuFooter => "/wp-json/ccnavigation-footer/menu",
            Endpoint::Scripts => "/wp-json/cc-wpscripts/get",
            Endpoint::Styles => "/wp-json/cc-wpstyles/get",
        }
    }

    /// Dispatch key: the second segment of the endpoint path.
    pub fn key(&self) -> &'static str {
        match self {
            Endpoint::MenuHeader => "ccnavigation-header",
            Endpoint::MenuFooter => "ccnavigation-footer",
            Endpoint::Scripts => "cc-wpscripts",
            Endpoint::Styles => "cc-wpstyles",
        }
    }

    pub fn from_key(key: &str) -> Option<Endpoint> {
        Endpoint::ALL.into_iter().find(|e| e.key() == key)
    }

    /// Template rendered for this endpoint (also the output file name, except for scripts).
    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::MenuHeader => "site-header.html",
            Endpoint::MenuFooter => "site-footer.html",
            Endpoint::Scripts => "footer-scripts.html",
            Endpoint::Styles => "html-head.html",
        }
    }

    pub fn url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }
}
