//! Static portfolio content rendered by the chapter panels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Ai,
    Tool,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Web => "WEB",
            ProjectCategory::Ai => "AI",
            ProjectCategory::Tool => "TOOL",
        }
    }
}

#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub featured: bool,
    pub category: ProjectCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Ai,
    Languages,
    Soft,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
        SkillCategory::Ai,
        SkillCategory::Languages,
        SkillCategory::Soft,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools",
            SkillCategory::Ai => "AI Tools",
            SkillCategory::Languages => "Languages",
            SkillCategory::Soft => "Soft Skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Filled pips out of four.
    pub fn pips(self) -> usize {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }
}

#[derive(Debug)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub icon: &'static str,
}

#[derive(Debug)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
}

pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub location: &'static str,
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Hakkan Parbej Shah",
    title: "Full Stack Developer",
    tagline: "Turning Ideas into Reality, One Line of Code at a Time",
    bio: "Innovative and detail-oriented B.Tech CSE student passionate about building impactful web applications, blending creativity with technical expertise. Experienced in frontend & backend development, AI integration, and UI/UX design. Skilled at leading teams, solving complex problems, and delivering high-quality solutions under deadlines.",
};

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: "hakkanparbej@gmail.com",
    phone: "+91-7810843038",
    github: "https://github.com/HakkanShah",
    linkedin: "https://www.linkedin.com/in/hakkan/",
    location: "Kolkata, West Bengal, India",
};

pub const ABOUT_HIGHLIGHTS: [&str; 6] = [
    "Innovative and detail-oriented B.Tech CSE student",
    "Passionate about building impactful web applications",
    "Experienced in frontend & backend development",
    "AI integration and UI/UX design expertise",
    "Skilled at leading teams and solving complex problems",
    "Delivers high-quality solutions under deadlines",
];

pub const ABOUT_QUICK_SKILLS: [&str; 6] = [
    "React.js",
    "Next.js",
    "TypeScript",
    "Node.js",
    "MongoDB",
    "AI/ML",
];

pub const ABOUT_FUN_FACTS: [&str; 3] = [
    "Loves solving complex problems with creative solutions",
    "Always learning new technologies and frameworks",
    "Enjoys collaborating and mentoring team members",
];

pub static PROJECTS: [Project; 7] = [
    Project {
        title: "ConfessCode",
        description: "Anonymous confession platform ensuring privacy",
        long_description: "A secure platform where users can share anonymous confessions while maintaining complete privacy. Built with modern web technologies and privacy-first design principles.",
        technologies: &["React", "Node.js", "MongoDB", "Express.js", "JWT"],
        features: &[
            "Anonymous posting system",
            "Real-time updates",
            "Privacy protection",
            "Responsive design",
            "User authentication",
        ],
        live_url: None,
        repo_url: Some("https://github.com/HakkanShah/ConfessCode"),
        featured: true,
        category: ProjectCategory::Web,
    },
    Project {
        title: "MemeMate",
        description: "Meme-based social & dating app prototype",
        long_description: "A unique social platform that combines meme sharing with dating features. Users can connect through humor and shared interests in a fun, engaging environment.",
        technologies: &["React", "Firebase", "JavaScript", "CSS3", "Material-UI"],
        features: &[
            "Meme sharing and creation",
            "Social networking features",
            "Dating functionality",
            "Real-time chat",
            "User profiles and matching",
        ],
        live_url: Some("https://mememate-demo.vercel.app"),
        repo_url: Some("https://github.com/HakkanShah/MemeMate"),
        featured: true,
        category: ProjectCategory::Web,
    },
    Project {
        title: "AluChat",
        description: "Dual Personality (Sweet & Savage) AI Chatbot",
        long_description: "An AI chatbot with two personalities, one sweet and helpful, the other sassy and witty. Built using NLP and machine learning techniques.",
        technologies: &["Python", "OpenAI API", "Flask", "NLTK", "Machine Learning"],
        features: &[
            "Dual personality system",
            "Natural language processing",
            "Context-aware responses",
            "Personality switching",
            "Conversation history",
        ],
        live_url: None,
        repo_url: Some("https://github.com/HakkanShah/AluChat"),
        featured: true,
        category: ProjectCategory::Ai,
    },
    Project {
        title: "VerifyAI",
        description: "Fake news, deepfake & AI-generated content detector",
        long_description: "A tool that uses AI to detect fake news, deepfakes, and AI-generated content. Helps users identify misinformation and maintain media literacy.",
        technologies: &["Python", "TensorFlow", "OpenCV", "React", "FastAPI"],
        features: &[
            "Fake news detection",
            "Deepfake identification",
            "AI content analysis",
            "Real-time verification",
            "Confidence scoring",
        ],
        live_url: Some("https://verifyai-demo.vercel.app"),
        repo_url: Some("https://github.com/HakkanShah/VerifyAI"),
        featured: true,
        category: ProjectCategory::Ai,
    },
    Project {
        title: "BuildMyCV",
        description: "AI-powered last-minute resume builder",
        long_description: "An intelligent resume builder that uses AI to help users create professional resumes quickly. Perfect for last-minute job applications and career changes.",
        technologies: &["React", "Node.js", "OpenAI API", "PDF Generation", "Tailwind CSS"],
        features: &[
            "AI-powered content generation",
            "Multiple resume templates",
            "PDF export functionality",
            "Real-time preview",
            "Industry-specific optimization",
        ],
        live_url: Some("https://buildmycv.vercel.app"),
        repo_url: Some("https://github.com/HakkanShah/BuildMyCV"),
        featured: true,
        category: ProjectCategory::Tool,
    },
    Project {
        title: "Project Alpha",
        description: "Coming soon - Revolutionary web application",
        long_description: "An exciting new project currently in development. Stay tuned for updates!",
        technologies: &["React", "TypeScript", "Next.js"],
        features: &[
            "Modern architecture",
            "Scalable design",
            "Performance optimized",
            "User-friendly interface",
        ],
        live_url: None,
        repo_url: None,
        featured: false,
        category: ProjectCategory::Web,
    },
    Project {
        title: "Project Beta",
        description: "Coming soon - AI-powered solution",
        long_description: "An AI project that will change how we interact with technology.",
        technologies: &["Python", "Machine Learning", "React"],
        features: &[
            "Advanced AI algorithms",
            "Intuitive user interface",
            "Real-time processing",
            "Scalable infrastructure",
        ],
        live_url: None,
        repo_url: None,
        featured: false,
        category: ProjectCategory::Ai,
    },
];

/// First three featured projects.
pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|project| project.featured).take(3)
}

/// Everything the first projects chapter does not show.
pub fn remaining_projects() -> impl Iterator<Item = &'static Project> {
    let shown: Vec<&'static str> = featured_projects().map(|project| project.title).collect();
    PROJECTS
        .iter()
        .filter(move |project| !shown.contains(&project.title))
}

macro_rules! skill {
    ($name:literal, $category:ident, $level:ident, $icon:literal) => {
        Skill {
            name: $name,
            category: SkillCategory::$category,
            level: SkillLevel::$level,
            icon: $icon,
        }
    };
}

pub static SKILLS: [Skill; 33] = [
    skill!("HTML5", Frontend, Expert, "🌐"),
    skill!("CSS3", Frontend, Expert, "🎨"),
    skill!("JavaScript", Frontend, Advanced, "⚡"),
    skill!("TypeScript", Frontend, Advanced, "📘"),
    skill!("React.js", Frontend, Advanced, "⚛️"),
    skill!("Next.js", Frontend, Intermediate, "▲"),
    skill!("Tailwind CSS", Frontend, Advanced, "🎭"),
    skill!("Node.js", Backend, Intermediate, "🟢"),
    skill!("Express.js", Backend, Intermediate, "🚀"),
    skill!("Flask", Backend, Intermediate, "🌶️"),
    skill!("FastAPI", Backend, Beginner, "⚡"),
    skill!("MongoDB", Database, Intermediate, "🍃"),
    skill!("SQL", Database, Intermediate, "🗄️"),
    skill!("Redis", Database, Beginner, "🔴"),
    skill!("Git", Tools, Advanced, "📚"),
    skill!("GitHub", Tools, Advanced, "🐙"),
    skill!("VS Code", Tools, Expert, "💻"),
    skill!("Firebase", Tools, Intermediate, "🔥"),
    skill!("Supabase", Tools, Intermediate, "⚡"),
    skill!("Vercel", Tools, Intermediate, "▲"),
    skill!("Netlify", Tools, Intermediate, "🌐"),
    skill!("Render", Tools, Intermediate, "🚀"),
    skill!("ChatGPT", Ai, Advanced, "🤖"),
    skill!("Claude", Ai, Advanced, "🧠"),
    skill!("Gemini", Ai, Intermediate, "💎"),
    skill!("Java", Languages, Intermediate, "☕"),
    skill!("C", Languages, Intermediate, "🔧"),
    skill!("Python", Languages, Advanced, "🐍"),
    skill!("Problem Solving", Soft, Expert, "🧩"),
    skill!("Teamwork", Soft, Expert, "🤝"),
    skill!("Communication", Soft, Advanced, "💬"),
    skill!("Leadership", Soft, Advanced, "👑"),
    skill!("Time Management", Soft, Advanced, "⏰"),
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |skill| skill.category == category)
}

pub static EDUCATION: [Education; 3] = [
    Education {
        degree: "B.Tech in Computer Science and Engineering",
        institution: "Greater Kolkata College of Engineering and Management",
        period: "2022 - 2026",
        grade: "CGPA: 7.5/10",
        description: "Pursuing Bachelor of Technology in Computer Science and Engineering with focus on software development, algorithms, and system design.",
    },
    Education {
        degree: "Higher Secondary Education",
        institution: "WBCHSE (West Bengal Council of Higher Secondary Education)",
        period: "2022",
        grade: "85%",
        description: "Completed Higher Secondary Education with Science stream, focusing on Mathematics, Physics, and Chemistry.",
    },
    Education {
        degree: "Secondary Education",
        institution: "WBBSE (West Bengal Board of Secondary Education)",
        period: "2020",
        grade: "80%",
        description: "Completed Secondary Education with strong foundation in core subjects and extracurricular activities.",
    },
];

pub static CERTIFICATIONS: [Certification; 5] = [
    Certification {
        title: "Full-Stack BCT Training",
        issuer: "BCT (Blockchain & Cryptocurrency Technology)",
        date: "2024",
        description: "Comprehensive training in full-stack development covering modern web technologies, blockchain integration, and cryptocurrency applications.",
    },
    Certification {
        title: "AWS AI-ML Virtual Internship",
        issuer: "Amazon Web Services",
        date: "2024",
        description: "Hands-on experience with AWS AI and Machine Learning services including SageMaker, Rekognition, and Comprehend.",
    },
    Certification {
        title: "Palo Alto Cybersecurity Virtual Internship",
        issuer: "Palo Alto Networks",
        date: "2024",
        description: "Advanced cybersecurity training covering network security, threat detection, and incident response using Palo Alto technologies.",
    },
    Certification {
        title: "Blue Prism Intelligent Automation Virtual Internship",
        issuer: "Blue Prism",
        date: "2024",
        description: "Training in Robotic Process Automation (RPA) and intelligent automation solutions for business process optimization.",
    },
    Certification {
        title: "Zscaler Zero Trust Cloud Security Virtual Internship",
        issuer: "Zscaler",
        date: "2024",
        description: "Comprehensive training in Zero Trust security architecture and cloud security best practices using Zscaler solutions.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_chapters_split_the_list() {
        let featured: Vec<_> = featured_projects().map(|p| p.title).collect();
        assert_eq!(featured, ["ConfessCode", "MemeMate", "AluChat"]);
        let remaining: Vec<_> = remaining_projects().map(|p| p.title).collect();
        assert_eq!(featured.len() + remaining.len(), PROJECTS.len());
        assert!(remaining.contains(&"VerifyAI"));
        assert!(remaining.contains(&"Project Beta"));
    }

    #[test]
    fn every_skill_category_has_entries() {
        for category in SkillCategory::ALL {
            assert!(skills_in(category).next().is_some(), "{category:?}");
        }
    }
}
