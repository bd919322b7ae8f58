use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookLink(String);

impl BookLink {
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    pub fn parse(link: Option<String>) -> Option<Self> {
        link.map(|link| link.trim().to_string())
            .filter(|link| !link.is_empty())
            .map(Self)
    }
}

#[cfg(test)]
mod test {
    use super::BookLink;

    #[test]
    fn blank_link_is_absent() {
        assert_eq!(BookLink::parse(None), None);
        assert_eq!(BookLink::parse(Some(String::new())), None);
        assert_eq!(BookLink::parse(Some("   ".to_string())), None);
        assert_eq!(
            BookLink::parse(Some(" https://example.org/hobbit ".to_string())),
            Some(BookLink::new("https://example.org/hobbit"))
        );
    }
}
