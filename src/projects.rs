use std::{fmt, str::FromStr};

use crate::{config::PLACEHOLDER_IMAGE, error::PortfolioError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Design,
    Photo,
    Video,
    Code,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Design,
        Category::Photo,
        Category::Video,
        Category::Code,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Code => "code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Photo => "Photography",
            Self::Video => "Video",
            Self::Code => "Code",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Design => "🎨",
            Self::Photo => "📷",
            Self::Video => "🎞",
            Self::Code => "</>",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| PortfolioError::UnknownCategory(s.to_string()))
    }
}

/// The project listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const CHOICES: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Design),
        CategoryFilter::Only(Category::Photo),
        CategoryFilter::Only(Category::Video),
        CategoryFilter::Only(Category::Code),
    ];

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    Image {
        url: &'static str,
    },
    Video {
        url: &'static str,
        poster: Option<&'static str>,
    },
}

impl Media {
    pub fn url(&self) -> &'static str {
        match self {
            Self::Image { url } | Self::Video { url, .. } => *url,
        }
    }

    /// Still image for previews: the image itself or the video poster.
    pub fn thumbnail(&self) -> Option<&'static str> {
        match self {
            Self::Image { url } => Some(*url),
            Self::Video { poster, .. } => *poster,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video { .. })
    }
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub media: &'static [Media],
    /// Has a printed QR code linking the physical piece to this page.
    pub qr_code: bool,
}

impl Project {
    pub fn cover(&self) -> &'static str {
        self.media
            .first()
            .and_then(Media::thumbnail)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn has_video(&self) -> bool {
        self.media.iter().any(Media::is_video)
    }

    /// URL fragment that opens this project directly. Printed QR codes point
    /// here.
    pub fn anchor(&self) -> String {
        format!("{PROJECT_ANCHOR_PREFIX}{}", self.id)
    }
}

pub const PROJECT_ANCHOR_PREFIX: &str = "#project-";

/// Resolve a `#project-<id>` fragment. `None` for fragments that are not
/// project links at all.
pub fn from_anchor(
    projects: &'static [Project],
    hash: &str,
) -> Option<Result<&'static Project, PortfolioError>> {
    let id = hash.strip_prefix(PROJECT_ANCHOR_PREFIX)?;
    Some(find(projects, id))
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "1",
        title: "Campus Event Poster",
        description: "Designed promotional materials for IIITD's annual cultural festival using Adobe Illustrator and Photoshop.",
        category: Category::Design,
        media: &[
            Media::Image { url: "/media/design/poster1.jpg" },
            Media::Image { url: "/media/design/poster2.jpg" },
            Media::Image { url: "/media/design/poster3.jpg" },
        ],
        qr_code: true,
    },
    Project {
        id: "2",
        title: "Nature Photography Series",
        description: "A collection of landscape and wildlife photographs captured during treks in the Himalayas.",
        category: Category::Photo,
        media: &[
            Media::Image { url: "/media/photo/nature1.jpg" },
            Media::Image { url: "/media/photo/nature2.jpg" },
            Media::Image { url: "/media/photo/nature3.jpg" },
            Media::Image { url: "/media/photo/nature4.jpg" },
        ],
        qr_code: false,
    },
    Project {
        id: "3",
        title: "College Documentary",
        description: "A short documentary about student life at IIITD, edited with DaVinci Resolve.",
        category: Category::Video,
        media: &[
            Media::Video {
                url: "/media/video/documentary.mp4",
                poster: Some("/media/video/documentary-thumb.jpg"),
            },
            Media::Image { url: "/media/video/behind1.jpg" },
            Media::Image { url: "/media/video/behind2.jpg" },
        ],
        qr_code: false,
    },
    Project {
        id: "4",
        title: "Data Visualization Tool",
        description: "A Python application that visualizes complex datasets with interactive elements.",
        category: Category::Code,
        media: &[
            Media::Image { url: "/media/code/viz1.jpg" },
            Media::Image { url: "/media/code/viz2.jpg" },
        ],
        qr_code: false,
    },
    Project {
        id: "5",
        title: "Product Photography",
        description: "Commercial photography for a local startup's product line.",
        category: Category::Photo,
        media: &[
            Media::Image { url: "/media/photo/product1.jpg" },
            Media::Image { url: "/media/photo/product2.jpg" },
            Media::Image { url: "/media/photo/product3.jpg" },
        ],
        qr_code: true,
    },
    Project {
        id: "6",
        title: "UI Design System",
        description: "A comprehensive design system created in Figma for a web application.",
        category: Category::Design,
        media: &[
            Media::Image { url: "/media/design/ui1.jpg" },
            Media::Image { url: "/media/design/ui2.jpg" },
            Media::Image { url: "/media/design/ui3.jpg" },
        ],
        qr_code: false,
    },
];

pub fn filter(projects: &'static [Project], filter: CategoryFilter) -> Vec<&'static Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

pub fn find(projects: &'static [Project], id: &str) -> Result<&'static Project, PortfolioError> {
    projects
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| PortfolioError::UnknownProject(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_photo_filter_yields_two() {
        let photos = filter(&PROJECTS, CategoryFilter::Only(Category::Photo));
        let ids = photos.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["2", "5"]);
    }

    #[test]
    fn test_all_filter_yields_everything_in_order() {
        let all = filter(&PROJECTS, CategoryFilter::All);
        assert_eq!(all.len(), 6);
        assert!(all.iter().zip(PROJECTS.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_catalogue_covers_every_category() {
        for category in Category::ALL {
            assert!(
                PROJECTS.iter().any(|p| p.category == category),
                "no {category} project"
            );
        }
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "video".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Video))
        );
        assert_eq!(
            "audio".parse::<CategoryFilter>(),
            Err(PortfolioError::UnknownCategory("audio".to_string()))
        );
    }

    #[test]
    fn test_cover_and_video_detection() {
        let documentary = find(&PROJECTS, "3").unwrap();
        assert!(documentary.has_video());
        assert_eq!(documentary.cover(), "/media/video/documentary-thumb.jpg");

        let poster = find(&PROJECTS, "1").unwrap();
        assert!(!poster.has_video());
        assert_eq!(poster.cover(), "/media/design/poster1.jpg");

        assert!(find(&PROJECTS, "42").is_err());
    }

    #[test]
    fn test_anchor_links() {
        let poster = &PROJECTS[0];
        assert_eq!(poster.anchor(), "#project-1");
        assert_eq!(from_anchor(&PROJECTS, &poster.anchor()), Some(Ok(poster)));
        assert_eq!(
            from_anchor(&PROJECTS, "#project-99"),
            Some(Err(PortfolioError::UnknownProject("99".to_string())))
        );
        assert_eq!(from_anchor(&PROJECTS, "#contact"), None);
        assert_eq!(from_anchor(&PROJECTS, ""), None);
    }

    proptest! {
        #[test]
        fn prop_filter_is_exact(choice in 0usize..CategoryFilter::CHOICES.len()) {
            let f = CategoryFilter::CHOICES[choice];
            let shown = filter(&PROJECTS, f);
            let expected = PROJECTS.iter().filter(|p| match f {
                CategoryFilter::All => true,
                CategoryFilter::Only(c) => p.category == c,
            }).count();
            prop_assert_eq!(shown.len(), expected);
            prop_assert!(shown.iter().all(|p| f.matches(p)));
        }
    }
}
