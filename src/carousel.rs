use std::collections::HashMap;

use crate::{error::PortfolioError, projects::Project};

/// Position within an ordered media list. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Arrows and dots are only worth showing with more than one slide.
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn select(&mut self, index: usize) -> Result<usize, PortfolioError> {
        if index >= self.len {
            return Err(PortfolioError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(index)
    }
}

/// One carousel per project, keyed by project id. Positions survive closing
/// and reopening a project.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    slides: HashMap<&'static str, Carousel>,
}

impl Gallery {
    pub fn new(projects: &'static [Project]) -> Self {
        let slides = projects
            .iter()
            .map(|p| (p.id, Carousel::new(p.media.len())))
            .collect();
        Self { slides }
    }

    fn carousel(&mut self, id: &str) -> Result<&mut Carousel, PortfolioError> {
        self.slides
            .get_mut(id)
            .ok_or_else(|| PortfolioError::UnknownProject(id.to_string()))
    }

    pub fn get(&self, id: &str) -> Option<Carousel> {
        self.slides.get(id).copied()
    }

    /// Current slide, 0 for projects the gallery does not know.
    pub fn index(&self, id: &str) -> usize {
        self.slides.get(id).map(Carousel::index).unwrap_or(0)
    }

    pub fn next(&mut self, id: &str) -> Result<usize, PortfolioError> {
        Ok(self.carousel(id)?.next())
    }

    pub fn prev(&mut self, id: &str) -> Result<usize, PortfolioError> {
        Ok(self.carousel(id)?.prev())
    }

    pub fn select(&mut self, id: &str, index: usize) -> Result<usize, PortfolioError> {
        self.carousel(id)?.select(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::PROJECTS;
    use proptest::prelude::*;

    #[test]
    fn test_prev_from_start_wraps_to_end() {
        let mut c = Carousel::new(4);
        assert_eq!(c.prev(), 3);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert!(c.select(0).is_err());
    }

    #[test]
    fn test_select_bounds() {
        let mut c = Carousel::new(3);
        assert_eq!(c.select(2), Ok(2));
        assert_eq!(c.index(), 2);
        assert_eq!(
            c.select(3),
            Err(PortfolioError::SlideOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_single_slide_hides_navigation() {
        assert!(!Carousel::new(1).has_navigation());
        assert!(Carousel::new(2).has_navigation());
    }

    #[test]
    fn test_gallery_keeps_positions_per_project() {
        let mut gallery = Gallery::new(&PROJECTS);
        assert_eq!(gallery.next("2"), Ok(1));
        assert_eq!(gallery.next("2"), Ok(2));
        assert_eq!(gallery.prev("4"), Ok(1));

        assert_eq!(gallery.index("2"), 2);
        assert_eq!(gallery.index("4"), 1);
        assert_eq!(gallery.index("1"), 0);

        assert!(gallery.next("missing").is_err());
        assert_eq!(gallery.index("missing"), 0);
    }

    proptest! {
        #[test]
        fn prop_next_len_times_returns_home(len in 1usize..64) {
            let mut c = Carousel::new(len);
            for _ in 0..len {
                c.next();
            }
            prop_assert_eq!(c.index(), 0);
        }

        #[test]
        fn prop_prev_from_zero_is_last(len in 1usize..64) {
            let mut c = Carousel::new(len);
            prop_assert_eq!(c.prev(), len - 1);
        }

        #[test]
        fn prop_index_stays_in_bounds(len in 1usize..16, steps in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut c = Carousel::new(len);
            for forward in steps {
                let i = if forward { c.next() } else { c.prev() };
                prop_assert!(i < len);
            }
        }
    }
}
