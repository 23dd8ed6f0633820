use crate::Error;

/// A page of results, pages start at 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Page {
    page: u64,
    limit: u64,
}

impl Page {
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Create a page, missing values fall back to the defaults.
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Result<Self, Error> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT);

        if page == 0 {
            return Err(Error::InvalidPage(page));
        }
        if limit == 0 {
            return Err(Error::InvalidLimit(limit));
        }

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Page::new(None, None), Ok(Page::default()));
        assert_eq!(Page::default().offset(), 0);
        assert_eq!(Page::default().limit(), 10);
    }

    #[test]
    fn test_offset() {
        let page = Page::new(Some(3), Some(20)).unwrap();
        assert_eq!(page.page(), 3);
        assert_eq!(page.offset(), 40);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(Page::new(Some(0), None), Err(Error::InvalidPage(0)));
        assert_eq!(Page::new(None, Some(0)), Err(Error::InvalidLimit(0)));
    }

    #[test]
    fn test_overflow() {
        let page = Page::new(Some(u64::MAX), Some(u64::MAX)).unwrap();
        assert_eq!(page.offset(), u64::MAX);
    }
}
