//! Portfolio case studies and the featured projects on the home page.

/// Where a project can be seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    Live(&'static str),
    Source(&'static str),
}

impl ProjectLink {
    pub fn url(&self) -> &'static str {
        match self {
            ProjectLink::Live(url) | ProjectLink::Source(url) => url,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectLink::Live(_) => "View Live",
            ProjectLink::Source(_) => "View Code",
        }
    }
}

/// A full case study on the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: u32,
    pub category: &'static str,
    pub category_tag: &'static str,
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub client: &'static str,
    pub year: &'static str,
    pub duration: &'static str,
    pub tech_stack: &'static [&'static str],
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    /// (metric, label)
    pub impact: (&'static str, &'static str),
    pub link: ProjectLink,
    pub color: &'static str,
}

/// A compact card in the home page's featured section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedProject {
    pub image: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub tech_stack: &'static [&'static str],
    pub description: &'static str,
    pub link: ProjectLink,
    pub impact: &'static str,
    pub gradient: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: 1,
        category: "Frontend Development",
        category_tag: "Frontend",
        image: "/assets/imgs/portfolio.jpg",
        title: "Personal Portfolio Website",
        subtitle: "Interactive 3D Design Experience",
        client: "Self-Initiated",
        year: "2025",
        duration: "3 weeks",
        tech_stack: &["React", "CSS Modules", "Three.js", "Netlify"],
        description: "A sleek, high-performance portfolio featuring dark-mode aesthetics, complex component rendering, and interactive 3D canvas integration. Built with modern React patterns and optimized for exceptional user experience.",
        highlights: &[
            "Interactive 3D elements using Three.js",
            "Responsive design across all devices",
            "Performance-optimized with lazy loading",
            "Dark mode with smooth transitions",
        ],
        impact: ("98", "Lighthouse Score"),
        link: ProjectLink::Live("https://prajwal-p-portfolio.netlify.app/"),
        color: "#4AB1F1",
    },
    CaseStudy {
        id: 2,
        category: "Full Stack Development",
        category_tag: "Full Stack",
        image: "/assets/imgs/fullstack.jpg",
        title: "Smart Classroom Management",
        subtitle: "Complete Educational Platform",
        client: "Academic Institution",
        year: "2025",
        duration: "8 weeks",
        tech_stack: &["MongoDB", "Express.js", "React", "Node.js", "JWT"],
        description: "A scalable full-stack application for streamlined academic operations, supporting user authentication, material upload, administrative reporting, and real-time collaboration features.",
        highlights: &[
            "Secure JWT-based authentication system",
            "Real-time material sharing and updates",
            "Admin dashboard with analytics",
            "Role-based access control (RBAC)",
        ],
        impact: ("500+", "Active Users"),
        link: ProjectLink::Live("https://smart-classroom-x7xs.onrender.com/"),
        color: "#2AF598",
    },
    CaseStudy {
        id: 3,
        category: "AI & Deep Learning",
        category_tag: "AI/DL",
        image: "/assets/imgs/deeplearning.jpg",
        title: "MediLink AI",
        subtitle: "Intelligent Medical Diagnosis System",
        client: "Health Tech Research",
        year: "2025",
        duration: "10 weeks",
        tech_stack: &["Python", "TensorFlow", "NLP", "Flask", "scikit-learn"],
        description: "Developed an integrated AI system utilizing Natural Language Processing to analyze textual symptom input and provide preliminary differential diagnoses with confidence scores.",
        highlights: &[
            "Advanced NLP for symptom analysis",
            "Multi-label classification model",
            "Explainable AI with confidence metrics",
            "RESTful API for easy integration",
        ],
        impact: ("87%", "Accuracy Rate"),
        link: ProjectLink::Source("https://github.com/PrajwalGaniga/MediLink-AI"),
        color: "#9D4EDD",
    },
];

pub const FEATURED_PROJECTS: &[FeaturedProject] = &[
    FeaturedProject {
        image: "/assets/imgs/portfolio.jpg",
        title: "Personal Portfolio",
        category: "Frontend",
        tech_stack: &["React", "CSS", "Netlify"],
        description: "Sleek, responsive portfolio showcasing modern frontend skills with smooth animations.",
        link: ProjectLink::Live("https://prajwal-p-portfolio.netlify.app/"),
        impact: "10K+ visits",
        gradient: "linear-gradient(135deg, rgba(74, 177, 241, 0.1), rgba(42, 245, 152, 0.1))",
    },
    FeaturedProject {
        image: "/assets/imgs/fullstack.jpg",
        title: "Smart Classroom",
        category: "Full Stack",
        tech_stack: &["MERN", "Node.js", "MongoDB"],
        description: "Full-stack classroom management with real-time attendance and resource sharing.",
        link: ProjectLink::Live("https://smart-classroom-x7xs.onrender.com/"),
        impact: "5+ schools",
        gradient: "linear-gradient(135deg, rgba(42, 245, 152, 0.1), rgba(157, 78, 221, 0.1))",
    },
    FeaturedProject {
        image: "/assets/imgs/deeplearning.jpg",
        title: "MediLink AI",
        category: "AI/ML",
        tech_stack: &["Python", "TensorFlow", "NLP"],
        description: "AI-powered medical diagnosis system with 95% accuracy using deep learning.",
        link: ProjectLink::Source("https://github.com/PrajwalGaniga/MediLink-AI"),
        impact: "95% accuracy",
        gradient: "linear-gradient(135deg, rgba(157, 78, 221, 0.1), rgba(74, 177, 241, 0.1))",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ask_about, classify, Topic};

    #[test]
    fn test_ask_ai_on_each_featured_project_finds_its_topic() {
        let topics: Vec<Topic> = FEATURED_PROJECTS
            .iter()
            .map(|p| classify(&ask_about(p.title)))
            .collect();
        assert_eq!(topics, vec![Topic::Portfolio, Topic::Classroom, Topic::MediLink]);
    }

    #[test]
    fn test_link_labels() {
        assert_eq!(CASE_STUDIES[2].link.label(), "View Code");
        assert_eq!(CASE_STUDIES[0].link.url(), "https://prajwal-p-portfolio.netlify.app/");
    }
}
