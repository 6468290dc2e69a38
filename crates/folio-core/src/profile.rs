use serde::Serialize;

pub const OWNER_NAME: &str = "Shantanu Tiwari";
pub const PROMPT_USER: &str = "shantanu";
pub const PROMPT_HOST: &str = "portfolio";
pub const HOME_DIR: &str = "/home/shantanu/portfolio";

pub const PORTFOLIO_VERSION: &str = "2.0.5";
pub const BUILD_DATE: &str = "19 Jul 2025";
pub const BUILT_WITH: &str = "Rust + ratatui + crossterm";

pub const RESUME_URL: &str = "https://drive.google.com/file/d/example-resume-link/view";
pub const PORTFOLIO_URL: &str = "https://portfolio-okul.vercel.app/";
pub const GITHUB_URL: &str = "https://github.com/Shantanu-Tiwari";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/shantanutiwari24";
pub const EMAIL: &str = "shantanutiwari2024@gmail.com";

pub fn welcome_banner() -> String {
    format!("Welcome to {OWNER_NAME}'s Portfolio v{PORTFOLIO_VERSION} (Build date: {BUILD_DATE})")
}

pub const WELCOME_HINT: &str = "Type 'help' to see a list of available commands.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planning,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planning => "planning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub stack: &'static str,
    pub demo_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
    pub status: ProjectStatus,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        name: "api-nexus",
        title: "API Nexus - Postman-like API Testing Workspace",
        description: "A Postman-grade API testing workspace with instant, tabbed interface. \
Features environment switching, variable management, and auto-completion. Built for \
developers who need fast, local API testing without login requirements.",
        stack: "Next.js, TypeScript, Tailwind CSS",
        demo_url: Some("https://api-nexus-landing.vercel.app/"),
        source_url: Some(GITHUB_URL),
        status: ProjectStatus::Completed,
    },
    Project {
        name: "evo-scan",
        title: "EvoScan - Pathogenic Variant Prediction",
        description: "Deep learning-based tool for pathogenic variant prediction using Evo2 \
deep learning model. Integrates real-time gene and variant data from UCSC Genome Browser \
and NCBI ClinVar APIs for genetic mutation analysis.",
        stack: "Python, FastAPI, Next.js, TailwindCSS, Modal, Evo2 Model",
        demo_url: Some("https://evo-scan.vercel.app/"),
        source_url: Some(GITHUB_URL),
        status: ProjectStatus::Completed,
    },
    Project {
        name: "portfolio",
        title: "Portfolio Website - Showcase Frontend",
        description: "Personal portfolio website demonstrating frontend development skills, \
responsive design, and modern web technologies. Features smooth animations and responsive \
layout.",
        stack: "React, Next.js, JavaScript, HTML, CSS",
        demo_url: Some(PORTFOLIO_URL),
        source_url: Some(GITHUB_URL),
        status: ProjectStatus::Completed,
    },
    Project {
        name: "code-craft",
        title: "Code Craft - Online Multi-language Editor",
        description: "Interactive online code editor and compiler supporting multiple \
programming languages. Features real-time code compilation, syntax highlighting, and \
sharing capabilities.",
        stack: "Next.js, TailwindCSS, Monaco Editor",
        demo_url: Some("https://code-craft-umber.vercel.app/"),
        source_url: Some(GITHUB_URL),
        status: ProjectStatus::Completed,
    },
];

/// Exact, case-sensitive lookup by project name.
pub fn find_project(name: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.name == name)
}

pub const BIO: &str = "Hey there! I'm Shantanu Tiwari, a full-stack developer based in Noida, India.
I build beautiful, high-performance web applications from the ground up.
Currently pursuing Bachelor of Science in Computer Science (specializing in Data Science)
at JSS Academy of Technical Education.

I'm passionate about bridging ideas and technology, turning complex problems into
elegant, user-friendly digital experiences. Currently working as a Full Stack
Developer Intern at Ascendix IT, where I leverage cutting-edge technologies
to create innovative solutions.

I believe in clean code, continuous learning, and the power of great UX
to make technology accessible to everyone.";

pub const SKILLS: &[(&str, &str)] = &[
    ("Languages", "Python, Java, C, JavaScript (ES6+), TypeScript, HTML5, CSS3, SQL"),
    ("Frontend", "React, Next.js, Tailwind CSS, ShadCN UI, FastAPI, Express.js, JavaFX"),
    ("Backend", "Node.js, Express, FastAPI, Django"),
    ("Databases", "PostgreSQL, Firebase, MongoDB"),
    ("Cloud & DevOps", "Google Cloud Platform, AWS, Vercel, Docker, Jenkins, Modal"),
    (
        "Tools/Platforms",
        "Git, GitHub, Docker, Jenkins, Modal, Vercel, Postman, Figma, Livebooks",
    ),
    (
        "Frameworks/Libraries",
        "React, Next.js, Tailwind CSS, ShadCN UI, FastAPI, Express.js",
    ),
    ("Currently Learning", "Deep Learning, Genomics, Advanced Data Science"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
    pub text: &'static str,
}

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        url: "mailto:shantanutiwari2024@gmail.com",
        text: EMAIL,
    },
    ContactLink {
        label: "LinkedIn",
        url: LINKEDIN_URL,
        text: "linkedin.com/in/shantanutiwari24",
    },
    ContactLink {
        label: "GitHub",
        url: GITHUB_URL,
        text: "github.com/Shantanu-Tiwari",
    },
    ContactLink {
        label: "Portfolio",
        url: PORTFOLIO_URL,
        text: "portfolio-okul.vercel.app",
    },
];
