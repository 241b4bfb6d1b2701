use crate::carousel::SlideMarkup;
use crate::certificates::Achievement;
use crate::nav::NavLink;

pub const OWNER: &str = "Aarav Mehta";
pub const BRAND: &str = "Aarav.";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#works", label: "Works" },
    NavLink { href: "#achievements", label: "Achievements" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const ABOUT: &str = "I build fast, accessible websites and write the scripts for the videos that explain them. Most days that means shipping small front-ends, tuning layouts until they feel right, and turning rough ideas into something people can click.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillCard {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const SKILLS: &[SkillCard] = &[
    SkillCard { name: "HTML & CSS", summary: "Semantic markup, responsive layouts, motion." },
    SkillCard { name: "JavaScript", summary: "DOM work, async data, small interactive widgets." },
    SkillCard { name: "UI Design", summary: "Wireframes, type scales, colour systems." },
    SkillCard { name: "Video", summary: "Scripting, editing and thumbnails for tutorials." },
];

pub const MORE_SKILLS: &[&str] = &["Git", "Figma", "Accessibility", "SEO basics", "Copywriting"];

pub const WORKS: &[SlideMarkup] = &[
    SlideMarkup {
        image: Some("/works/landing.webp"),
        lazy_src: None,
        alt: Some("Product landing page"),
        description: "Landing page for a local bakery with an online pre-order form.",
    },
    SlideMarkup {
        image: None,
        lazy_src: Some("/works/dashboard.webp"),
        alt: None,
        description: "Analytics dashboard mock-up with a dark theme and live charts.",
    },
    SlideMarkup {
        image: None,
        lazy_src: Some("/works/channel.webp"),
        alt: None,
        description: "Channel art and thumbnail set for a web-dev tutorial series.",
    },
    SlideMarkup {
        image: Some("/works/portfolio.webp"),
        lazy_src: None,
        alt: Some("Previous portfolio"),
        description: "The first version of this portfolio, hand-written with no framework.",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Responsive Web Design",
        detail: "300 hour certification covering layout and accessibility.",
        level: "View certificates",
        certificates: "/certs/responsive-web-design.webp, /certs/css-layouts.webp",
    },
    Achievement {
        title: "JavaScript Algorithms",
        detail: "Data structures and algorithm challenges in plain JavaScript.",
        level: "View certificate",
        certificates: "/certs/javascript-algorithms.webp",
    },
    Achievement {
        title: "Hackathon Finalist",
        detail: "Built a volunteer scheduling tool in 24 hours with a team of three.",
        level: "View certificates",
        certificates: "/certs/hackathon-finalist.webp,/certs/hackathon-team.webp,/certs/hackathon-demo.webp",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACTS: &[ContactItem] = &[
    ContactItem { label: "Email", value: "hello@aarav.dev", href: "mailto:hello@aarav.dev" },
    ContactItem { label: "GitHub", value: "github.com/aarav-dev", href: "https://github.com/aarav-dev" },
    ContactItem { label: "YouTube", value: "@aaravbuilds", href: "https://youtube.com/@aaravbuilds" },
];

/// First stagger position of each card list. Positions run through skill
/// cards, extra skills, achievement cards and contact items in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerOffsets {
    pub skills: usize,
    pub achievements: usize,
    pub contacts: usize,
}

pub const STAGGER: StaggerOffsets =
    stagger_offsets(SKILLS.len(), MORE_SKILLS.len(), ACHIEVEMENTS.len());

/// Extra skills take stagger positions but are never observed themselves.
pub const fn stagger_offsets(
    skills: usize,
    more_skills: usize,
    achievements: usize,
) -> StaggerOffsets {
    StaggerOffsets {
        skills: 0,
        achievements: skills + more_skills,
        contacts: skills + more_skills + achievements,
    }
}
