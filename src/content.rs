//! Static copy for every section of the page.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::PortfolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    SoftSkills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::SoftSkills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::SoftSkills => "soft-skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::SoftSkills => "Soft Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| PortfolioError::UnknownSection(s.to_string()))
    }
}

pub struct Profile {
    pub name: &'static str,
    pub initial: char,
    pub roles: &'static [&'static str],
    pub tagline: &'static str,
    pub intro: &'static str,
}

impl Profile {
    /// One-line summary for the page's `<meta name="description">`.
    pub fn description(&self) -> String {
        let roles = match self.roles {
            [] => String::new(),
            [only] => only.to_string(),
            [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
        };
        format!("Personal portfolio of {} - {roles}", self.name)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Dheeraj Kant Singh",
    initial: 'D',
    roles: &[
        "Design Enthusiast",
        "Photographer",
        "Videographer",
        "Developer",
        "Media Producer",
    ],
    tagline: "A creative professional combining technical expertise with artistic vision to craft compelling digital experiences.",
    intro: "I'm a 3rd year B-Tech student at IIITD with a passion for design and media production. My journey combines technical skills with creative expression through various mediums.",
};

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static ABOUT_CARDS: [Card; 6] = [
    Card {
        icon: "🎨",
        title: "Design Enthusiast",
        body: "I create visually appealing PPT designs and have a keen eye for aesthetics. My design philosophy focuses on clean, functional, and impactful visuals that effectively communicate ideas.",
    },
    Card {
        icon: "📷",
        title: "Photography & Videography",
        body: "I have a passion for capturing moments through photography and creating compelling video content. I enjoy the entire process from conceptualization and shooting to editing and final production.",
    },
    Card {
        icon: "💻",
        title: "Development",
        body: "I'm proficient in multiple programming languages including C++, Java, and Python, allowing me to bring technical solutions to creative problems and build interactive digital experiences.",
    },
    Card {
        icon: "📺",
        title: "Media Production",
        body: "Production is my niche. I work with professional tools like Adobe Premiere Pro, DaVinci Resolve, and Reaper to create polished media content that engages audiences and tells compelling stories.",
    },
    Card {
        icon: "👥",
        title: "Campus Involvement",
        body: "I'm actively involved in the Media Service Committee at IIITD, where I contribute to various campus events and initiatives through my media skills, collaborating with diverse teams to create impactful content.",
    },
    Card {
        icon: "🎓",
        title: "Academic Excellence",
        body: "As a 3rd year B-Tech student, I balance my creative pursuits with academic rigor. I apply analytical thinking and problem-solving skills from my technical education to enhance my creative projects and design work.",
    },
];

pub static SOFT_SKILLS: [Card; 8] = [
    Card {
        icon: "💡",
        title: "Creativity",
        body: "Bringing innovative ideas and unique perspectives to design and media projects.",
    },
    Card {
        icon: "💬",
        title: "Communication",
        body: "Effectively conveying ideas and collaborating with team members and stakeholders.",
    },
    Card {
        icon: "👥",
        title: "Teamwork",
        body: "Working collaboratively in the media service committee to achieve common goals.",
    },
    Card {
        icon: "⏰",
        title: "Time Management",
        body: "Efficiently balancing academic responsibilities with media production commitments.",
    },
    Card {
        icon: "🧩",
        title: "Problem Solving",
        body: "Finding creative solutions to technical and design challenges in projects.",
    },
    Card {
        icon: "🎯",
        title: "Attention to Detail",
        body: "Ensuring precision and quality in design, photography, and video production.",
    },
    Card {
        icon: "⚡",
        title: "Adaptability",
        body: "Quickly learning new tools and techniques to stay current with industry trends.",
    },
    Card {
        icon: "💼",
        title: "Professionalism",
        body: "Maintaining high standards of work ethic and reliability in all projects.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillTab {
    #[default]
    Programming,
    Design,
    Video,
    Audio,
}

pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100.
    pub level: u8,
}

impl SkillTab {
    pub const ALL: [SkillTab; 4] = [
        SkillTab::Programming,
        SkillTab::Design,
        SkillTab::Video,
        SkillTab::Audio,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Design => "design",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Programming => "Programming",
            Self::Design => "Design",
            Self::Video => "Video",
            Self::Audio => "Audio",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Programming => "⌨",
            Self::Design => "✒",
            Self::Video => "🎬",
            Self::Audio => "🎵",
        }
    }

    pub fn skills(self) -> &'static [Skill] {
        match self {
            Self::Programming => &[
                Skill { name: "C++", level: 85 },
                Skill { name: "Java", level: 80 },
                Skill { name: "Python", level: 75 },
            ],
            Self::Design => &[
                Skill { name: "Canva", level: 90 },
                Skill { name: "Adobe Photoshop", level: 85 },
                Skill { name: "Adobe Illustrator", level: 80 },
                Skill { name: "Figma", level: 75 },
            ],
            Self::Video => &[
                Skill { name: "Adobe Premiere Pro", level: 90 },
                Skill { name: "DaVinci Resolve", level: 85 },
            ],
            Self::Audio => &[Skill { name: "Reaper", level: 80 }],
        }
    }
}

impl FromStr for SkillTab {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key() == s)
            .ok_or_else(|| PortfolioError::UnknownTab(s.to_string()))
    }
}

pub struct Experience {
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub static EXPERIENCES: [Experience; 4] = [
    Experience {
        title: "Media Service Committee Member",
        organization: "IIITD",
        location: "Delhi",
        period: "2022 - Present",
        description: "Active member of the Media Service Committee, responsible for photography, videography, and design for campus events. Collaborated with team members to create promotional materials and document important events.",
        skills: &["Event Photography", "Video Production", "Promotional Design"],
    },
    Experience {
        title: "Design Team Lead",
        organization: "College Cultural Festival",
        location: "IIITD",
        period: "2023",
        description: "Led a team of designers to create cohesive visual identity for the annual cultural festival. Managed design timelines and ensured consistent branding across all materials.",
        skills: &["Team Leadership", "Brand Design", "Project Management"],
    },
    Experience {
        title: "Photography Workshop Facilitator",
        organization: "Photography Club",
        location: "IIITD",
        period: "2022",
        description: "Conducted workshops for beginners on photography basics, composition techniques, and post-processing. Mentored new members and provided feedback on their work.",
        skills: &["Teaching", "Mentorship", "Technical Training"],
    },
    Experience {
        title: "Freelance Designer",
        organization: "Self-employed",
        location: "Remote",
        period: "2021 - Present",
        description: "Created visual designs for various clients including presentation decks, social media graphics, and promotional materials. Managed client relationships and delivered projects on tight deadlines.",
        skills: &["Client Management", "Visual Design", "Time Management"],
    },
];

pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: "📧",
        label: "Email",
        value: "dheeraj@example.com",
        href: Some("mailto:dheeraj@example.com"),
    },
    ContactChannel {
        icon: "📍",
        label: "Location",
        value: "New Delhi, India",
        href: None,
    },
    ContactChannel {
        icon: "🏫",
        label: "Campus",
        value: "IIIT Delhi, Media Service Committee",
        href: None,
    },
];

/// schema.org `Person` record embedded in the page head for search engines.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    job_title: &'static [&'static str],
    alumni_of: &'static str,
    same_as: Vec<&'static str>,
}

impl PersonSchema {
    pub fn for_profile(profile: &'static Profile) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: profile.name,
            description: profile.tagline,
            job_title: profile.roles,
            alumni_of: "IIIT Delhi",
            same_as: CONTACT_CHANNELS.iter().filter_map(|c| c.href).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "blog".parse::<Section>(),
            Err(PortfolioError::UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for tab in SkillTab::ALL {
            assert!(!tab.skills().is_empty(), "{} has no skills", tab.key());
            for skill in tab.skills() {
                assert!(skill.level <= 100, "{} over 100", skill.name);
            }
        }
    }

    #[test]
    fn test_default_tab_is_programming() {
        assert_eq!(SkillTab::default(), SkillTab::Programming);
        assert_eq!("audio".parse::<SkillTab>(), Ok(SkillTab::Audio));
        assert!("cooking".parse::<SkillTab>().is_err());
    }

    #[test]
    fn test_profile_has_roles() {
        assert!(!PROFILE.roles.is_empty());
        assert!(PROFILE.name.starts_with(PROFILE.initial));
    }

    #[test]
    fn test_meta_description_lists_roles() {
        assert_eq!(
            PROFILE.description(),
            "Personal portfolio of Dheeraj Kant Singh - Design Enthusiast, Photographer, \
             Videographer, Developer, and Media Producer"
        );

        let solo = Profile {
            name: "Ada",
            initial: 'A',
            roles: &["Engineer"],
            tagline: "",
            intro: "",
        };
        assert_eq!(solo.description(), "Personal portfolio of Ada - Engineer");
    }

    #[test]
    fn test_person_schema() {
        let json = PersonSchema::for_profile(&PROFILE).to_json().unwrap();
        let schema: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(schema["@context"], "https://schema.org");
        assert_eq!(schema["@type"], "Person");
        assert_eq!(schema["name"], PROFILE.name);
        assert_eq!(
            schema["jobTitle"].as_array().map(Vec::len),
            Some(PROFILE.roles.len())
        );
        assert_eq!(schema["alumniOf"], "IIIT Delhi");
        assert_eq!(schema["sameAs"][0], "mailto:dheeraj@example.com");
    }
}
