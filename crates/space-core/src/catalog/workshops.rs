//! Training workshops.

use super::{Feature, Review};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workshop {
    pub id: u32,
    pub title: &'static str,
    pub duration: &'static str,
    /// Free text such as "Beginner to Intermediate"
    pub level: &'static str,
    pub mode: &'static str,
    pub topics: &'static [&'static str],
    pub participants: &'static str,
    pub icon: &'static str,
    pub price: &'static str,
    pub certificate: bool,
    pub live_projects: u32,
    pub rating: f32,
    pub highlights: &'static [&'static str],
    pub skills_gained: &'static [&'static str],
    pub featured: bool,
    pub next_batch: &'static str,
}

/// Level buttons above the workshop grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LevelFilter {
    #[default]
    All,
    Beginner,
    Intermediate,
    Advanced,
}

impl LevelFilter {
    pub const ALL: [LevelFilter; 4] = [
        LevelFilter::All,
        LevelFilter::Beginner,
        LevelFilter::Intermediate,
        LevelFilter::Advanced,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            LevelFilter::All => "all",
            LevelFilter::Beginner => "beginner",
            LevelFilter::Intermediate => "intermediate",
            LevelFilter::Advanced => "advanced",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LevelFilter::All => "All Levels",
            LevelFilter::Beginner => "Beginner",
            LevelFilter::Intermediate => "Intermediate",
            LevelFilter::Advanced => "Advanced",
        }
    }

    /// Substring searched for in the lower-cased level text.
    fn needle(&self) -> Option<&'static str> {
        match self {
            LevelFilter::All => None,
            LevelFilter::Beginner => Some("beginner"),
            LevelFilter::Intermediate => Some("intermediate"),
            LevelFilter::Advanced => Some("advanced"),
        }
    }

    pub fn accepts(&self, workshop: &Workshop) -> bool {
        match self.needle() {
            None => true,
            Some(needle) => workshop.level.to_lowercase().contains(needle),
        }
    }
}

pub fn filter_workshops(level: LevelFilter) -> Vec<&'static Workshop> {
    WORKSHOPS.iter().filter(|w| level.accepts(w)).collect()
}

pub const WORKSHOP_STATS: [(&str, &str); 3] = [
    ("1,670+", "Students Trained"),
    ("4.8★", "Average Rating"),
    ("85%", "Career Growth"),
];

pub const CORPORATE_PERKS: [&str; 4] = [
    "Customized curriculum",
    "Flexible scheduling",
    "On-site or remote options",
    "Volume discounts available",
];

pub const WORKSHOPS: &[Workshop] = &[
    Workshop {
        id: 1,
        title: "Full Stack Web Development Bootcamp",
        duration: "6 Weeks",
        level: "Beginner to Intermediate",
        mode: "Live Online",
        topics: &["HTML/CSS/JavaScript", "React.js", "Node.js & Express", "MongoDB", "REST APIs", "Git & Deployment"],
        participants: "400+",
        icon: "💻",
        price: "₹15,000",
        certificate: true,
        live_projects: 3,
        rating: 4.8,
        highlights: &[
            "Build 3 real-world projects",
            "Portfolio-ready capstone project",
            "Job interview preparation",
            "Lifetime community access",
        ],
        skills_gained: &["Frontend Development", "Backend Development", "Database Design", "API Integration"],
        featured: true,
        next_batch: "Dec 15, 2025",
    },
    Workshop {
        id: 2,
        title: "Python for AI & Machine Learning",
        duration: "4 Weeks",
        level: "Beginner",
        mode: "Live Online",
        topics: &["Python Fundamentals", "Pandas & NumPy", "Scikit-learn", "Data Visualization", "ML Algorithms"],
        participants: "650+",
        icon: "🧠",
        price: "₹12,000",
        certificate: true,
        live_projects: 2,
        rating: 4.7,
        highlights: &[
            "Hands-on with real datasets",
            "Kaggle competition preparation",
            "Industry case studies",
            "AI ethics & best practices",
        ],
        skills_gained: &["Python Programming", "Data Analysis", "Machine Learning", "Model Evaluation"],
        featured: true,
        next_batch: "Dec 20, 2025",
    },
    Workshop {
        id: 3,
        title: "Advanced Deep Learning with TensorFlow",
        duration: "8 Weeks",
        level: "Intermediate to Advanced",
        mode: "Live Online + Self-paced",
        topics: &["CNNs & Image Processing", "RNNs & NLP", "Transformers", "Model Optimization", "TensorFlow Serving"],
        participants: "120+",
        icon: "🚀",
        price: "₹25,000",
        certificate: true,
        live_projects: 4,
        rating: 4.9,
        highlights: &[
            "Deploy production-grade models",
            "Research paper implementation",
            "GPU optimization techniques",
            "Industry mentor guidance",
        ],
        skills_gained: &["Deep Learning", "Neural Networks", "Model Deployment", "Cloud ML"],
        featured: false,
        next_batch: "Jan 5, 2026",
    },
    Workshop {
        id: 4,
        title: "No-Code Tools for Business Automation",
        duration: "2 Days Workshop",
        level: "Beginner",
        mode: "Intensive Weekend",
        topics: &["Zapier Workflows", "Airtable Databases", "Webflow Basics", "Automation Best Practices"],
        participants: "200+",
        icon: "⚙️",
        price: "₹5,000",
        certificate: true,
        live_projects: 1,
        rating: 4.6,
        highlights: &[
            "Automate repetitive tasks",
            "Build without coding",
            "Workflow templates included",
            "Immediate ROI strategies",
        ],
        skills_gained: &["Workflow Automation", "Process Optimization", "No-Code Development"],
        featured: false,
        next_batch: "Dec 10, 2025",
    },
    Workshop {
        id: 5,
        title: "GitHub & Cloud Deployment Masterclass",
        duration: "1 Week",
        level: "All Levels",
        mode: "Live Online",
        topics: &["Git & GitHub Mastery", "CI/CD Pipelines", "Netlify & Vercel", "AWS Fundamentals", "Docker Basics"],
        participants: "300+",
        icon: "☁️",
        price: "₹8,000",
        certificate: true,
        live_projects: 2,
        rating: 4.7,
        highlights: &[
            "Deploy your first app",
            "DevOps fundamentals",
            "Version control mastery",
            "Cloud cost optimization",
        ],
        skills_gained: &["Git/GitHub", "CI/CD", "Cloud Deployment", "DevOps Basics"],
        featured: false,
        next_batch: "Dec 12, 2025",
    },
];

pub const BENEFITS: &[Feature] = &[
    Feature {
        icon: "🎓",
        title: "Industry-Recognized Certificates",
        description: "Earn certificates that stand out on LinkedIn and resumes",
    },
    Feature {
        icon: "👥",
        title: "Live Interactive Sessions",
        description: "Real-time learning with expert instructors and peer collaboration",
    },
    Feature {
        icon: "💼",
        title: "Career Support",
        description: "Resume reviews, mock interviews, and job referral assistance",
    },
    Feature {
        icon: "♾️",
        title: "Lifetime Access",
        description: "Access course materials and community forever, with free updates",
    },
];

pub const WORKSHOP_REVIEWS: &[Review] = &[
    Review {
        name: "Priya Sharma",
        role: "Frontend Developer at TCS",
        context: "Full Stack Bootcamp",
        text: "This bootcamp transformed my career! Landed my first developer role within 2 months of completion.",
        rating: 5,
        avatar: "👩‍💻",
    },
    Review {
        name: "Rahul Verma",
        role: "Data Scientist at Flipkart",
        context: "Python AI/ML Course",
        text: "Hands-on projects and real datasets made complex ML concepts crystal clear. Best investment in my career!",
        rating: 5,
        avatar: "👨‍💼",
    },
    Review {
        name: "Anita Desai",
        role: "Business Analyst",
        context: "No-Code Automation",
        text: "Saved 15+ hours weekly by automating workflows. No coding required! Highly practical and immediately useful.",
        rating: 5,
        avatar: "👩‍💼",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(level: LevelFilter) -> Vec<u32> {
        filter_workshops(level).iter().map(|w| w.id).collect()
    }

    #[test]
    fn test_level_filters() {
        assert_eq!(ids(LevelFilter::All), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(LevelFilter::Beginner), vec![1, 2, 4]);
        assert_eq!(ids(LevelFilter::Intermediate), vec![1, 3]);
        assert_eq!(ids(LevelFilter::Advanced), vec![3]);
    }

    #[test]
    fn test_all_levels_workshop_only_in_all() {
        // "All Levels" contains none of the level keywords
        for level in &LevelFilter::ALL[1..] {
            assert!(!ids(*level).contains(&5));
        }
    }

    #[test]
    fn test_level_ids_round_trip() {
        for level in LevelFilter::ALL {
            assert_eq!(LevelFilter::from_id(level.id()), Some(level));
        }
        assert_eq!(LevelFilter::from_id("expert"), None);
    }
}
