// src/content.rs
// Static declarative content: profile strings, navigation, social links,
// project and skill tables. Configuration, not behavior.

use crate::state::Section;

pub const PAGE_TITLE: &str = "Ritweek Raj | Portfolio";
pub const BRAND: &str = "Portfolio";

pub const OWNER_NAME: &str = "Ritweek Raj";
pub const OWNER_EMAIL: &str = "ritweekraj288@gmail.com";
pub const OWNER_LOCATION: &str = "Surat, India";

pub const HERO_BADGE: &str = "Open to Internship Opportunities";
pub const HERO_BLURB: &str = "I am a bachelor's student specializing in Artificial \
Intelligence. I have strong skills in developing modern websites and building machine \
learning models, with a keen interest in applying AI to real-world problems.";

pub const PROJECTS_LEAD: &str =
    "A collection of my recent work showcasing various technologies and problem-solving approaches";
pub const SKILLS_LEAD: &str = "A comprehensive toolkit for building modern, scalable applications";
pub const CONTACT_LEAD: &str =
    "I'm currently open to internship opportunities. Feel free to reach out!";

pub const FOOTER_ABOUT: &str = "Passionate developer seeking internship opportunities to \
contribute to innovative projects and grow professionally.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// None points at the top of the page.
    pub target: Option<Section>,
}

impl NavItem {
    pub fn href(&self) -> &'static str {
        match self.target {
            Some(section) => section.anchor(),
            None => "#",
        }
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", target: None },
    NavItem { label: "Projects", target: Some(Section::Projects) },
    NavItem { label: "Skills", target: Some(Section::Skills) },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Code,
    Mail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/ritweekraj288",
        icon: SocialIcon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/ritweek-raj-313614323",
        icon: SocialIcon::Linkedin,
    },
    SocialLink {
        label: "LeetCode",
        href: "https://leetcode.com/ritweekraj288",
        icon: SocialIcon::Code,
    },
];

pub const FOOTER_SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/ritweekraj288",
        icon: SocialIcon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/ritweek-raj-313614323",
        icon: SocialIcon::Linkedin,
    },
    SocialLink {
        label: "LeetCode",
        href: "https://leetcode.com/ritweekraj288",
        icon: SocialIcon::Code,
    },
    SocialLink {
        label: "Email",
        href: "mailto:ritweekraj288@gmail.com",
        icon: SocialIcon::Mail,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_link: &'static str,
    pub source_link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Mood Brewer",
        description: "An AI-powered recommendation system that suggests coffee and snacks \
based on a user's mood, taste, and time of day.",
        image: "https://res.cloudinary.com/dm7yjlyls/image/upload/v1766672149/AI_image_detector_fujnle.jpg",
        tags: &["Nextjs", "FastAPI", "JSON Data Modeling"],
        demo_link: "https://moodbrewer.vercel.app",
        source_link: "https://github.com/ritweekraj288/MoodBrewer.git",
    },
    Project {
        title: "AI Image Detector",
        description: "An AI-powered web application that detects whether an image is real \
or AI-generated using deep learning.",
        image: "https://res.cloudinary.com/dm7yjlyls/image/upload/v1766672149/AI_image_detector_fujnle.jpg",
        tags: &[
            "React",
            "FastAPI",
            "Vision Transformer (ViT)",
            "Computer Vision",
            "Deep Learning",
        ],
        demo_link: "https://ai-image-detectorreactfrontend.vercel.app",
        source_link: "https://github.com/ritweekraj288/AI_image_detector",
    },
    Project {
        title: "Oceanic",
        description: "Oceanic is an interactive platform to explore ocean life through \
games, immersive media, and data-driven visualizations across ocean layers.",
        image: "https://res.cloudinary.com/dm7yjlyls/image/upload/v1766672162/Oceanic_cr02zz.jpg",
        tags: &[
            "Next.js",
            "JavaScript",
            "HTML5 Canvas",
            "Game Development",
            "Interactive UI",
        ],
        demo_link: "https://oceanic-project.vercel.app",
        source_link: "https://github.com/NishchayMittal/WW-25_Bit_Forge",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &[
            "HTML5, CSS3",
            "JavaScript (ES6+)",
            "React.js",
            "Next.js",
            "TypeScript",
            "Tailwind CSS",
            "Responsive UI Development",
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            "Python",
            "FastAPI",
            "Node.js",
            "Express",
            "REST API Development",
            "MongoDB",
        ],
    },
    SkillCategory {
        title: "Machine Learning",
        skills: &[
            "PyTorch",
            "Vision Transformer (ViT)-based Image Classification",
            "Model Inference & Evaluation",
        ],
    },
    SkillCategory {
        title: "Tools & DevOps",
        skills: &[
            "Git, GitHub",
            "Kaggle, Jupyter Notebook",
            "Basic Deployment (Render)",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_target_declared_sections() {
        for item in NAV_ITEMS {
            assert!(!item.label.is_empty());
            match item.target {
                Some(section) => assert_eq!(item.href(), section.anchor()),
                None => assert_eq!(item.href(), "#"),
            }
        }
    }

    #[test]
    fn test_projects_are_fully_specified() {
        assert!(!PROJECTS.is_empty());
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert!(!project.tags.is_empty());
            assert!(project.demo_link.starts_with("https://"));
            assert!(project.source_link.starts_with("https://"));
        }
    }

    #[test]
    fn test_skill_categories_are_non_empty() {
        assert_eq!(SKILL_CATEGORIES.len(), 4);
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
        }
    }
}
