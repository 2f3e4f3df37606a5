//! Services offered on the services page.

/// Category pills on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    Development,
    AiMl,
    Education,
    Academic,
    Custom,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Development,
        ServiceCategory::AiMl,
        ServiceCategory::Education,
        ServiceCategory::Academic,
        ServiceCategory::Custom,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ServiceCategory::Development => "development",
            ServiceCategory::AiMl => "ai-ml",
            ServiceCategory::Education => "education",
            ServiceCategory::Academic => "academic",
            ServiceCategory::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Development => "Development",
            ServiceCategory::AiMl => "AI/ML",
            ServiceCategory::Education => "Training",
            ServiceCategory::Academic => "Academic",
            ServiceCategory::Custom => "Custom",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ServiceCategory::Development => "💻",
            ServiceCategory::AiMl => "🤖",
            ServiceCategory::Education => "📚",
            ServiceCategory::Academic => "📝",
            ServiceCategory::Custom => "🚀",
        }
    }
}

/// Category filter: everything, or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ServiceCategory),
}

impl CategoryFilter {
    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.id(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Services",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "🎯",
            CategoryFilter::Only(c) => c.icon(),
        }
    }

    /// Inverse of [`CategoryFilter::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        Self::pills().find(|f| f.id() == id)
    }

    /// Every pill in display order.
    pub fn pills() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ServiceCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn accepts(&self, category: ServiceCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceFeatures {
    pub responsive: bool,
    pub deployment: bool,
    pub maintenance: bool,
    pub support: &'static str,
    pub revisions: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub category: ServiceCategory,
    pub description: &'static str,
    pub tools: &'static [&'static str],
    pub delivery_time: &'static str,
    pub price: &'static str,
    pub portfolio_example: &'static str,
    pub portfolio_link: &'static str,
    pub details: &'static [&'static str],
    pub features: ServiceFeatures,
    pub testimonial: (&'static str, &'static str),
    pub popular: bool,
    pub badge: &'static str,
}

impl ServiceOffering {
    /// Case-insensitive match on title, description or any tool.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.tools.iter().any(|t| t.to_lowercase().contains(&q))
    }
}

/// Services in `filter` that match `query`. An empty query matches all.
pub fn filter_services(filter: CategoryFilter, query: &str) -> Vec<&'static ServiceOffering> {
    SERVICES
        .iter()
        .filter(|s| filter.accepts(s.category) && s.matches(query))
        .collect()
}

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        id: "frontend",
        title: "Frontend Website Development",
        icon: "🌐",
        category: ServiceCategory::Development,
        description: "Creating stunning, high-performance, and responsive user interfaces (UI) that deliver exceptional user experience (UX).",
        tools: &["React", "Next.js", "Vue.js", "Modular CSS", "Figma"],
        delivery_time: "2-4 Weeks",
        price: "Starting at ₹15,000",
        portfolio_example: "prajwal-p-portfolio.netlify.app",
        portfolio_link: "https://prajwal-p-portfolio.netlify.app/",
        details: &[
            "Modern designs focused on conversion",
            "Pixel-perfect, responsive cross-browser compatibility",
            "Performance optimization & SEO",
            "Progressive Web App (PWA) support",
        ],
        features: ServiceFeatures {
            responsive: true,
            deployment: true,
            maintenance: true,
            support: "3 months",
            revisions: "3 rounds",
        },
        testimonial: ("Transformed our digital presence completely!", "Tech Startup CEO"),
        popular: true,
        badge: "Best Seller",
    },
    ServiceOffering {
        id: "fullstack",
        title: "Full Stack Development",
        icon: "🧱",
        category: ServiceCategory::Development,
        description: "Building robust, scalable server-side architecture and integrating databases, ensuring complete end-to-end functionality.",
        tools: &["MERN Stack", "MEAN Stack", "Django + React", "Payment Gateways", "AWS/Azure"],
        delivery_time: "4-12 Weeks",
        price: "Starting at ₹50,000",
        portfolio_example: "smart-classroom-x7xs.onrender.com",
        portfolio_link: "https://smart-classroom-x7xs.onrender.com/",
        details: &[
            "Secure API design and development",
            "Implementation of Admin Dashboards",
            "Integration with third-party services",
            "Database design & optimization",
        ],
        features: ServiceFeatures {
            responsive: true,
            deployment: true,
            maintenance: true,
            support: "6 months",
            revisions: "5 rounds",
        },
        testimonial: ("Delivered a production-ready app in record time!", "EdTech Founder"),
        popular: true,
        badge: "Enterprise Ready",
    },
    ServiceOffering {
        id: "ai-dl",
        title: "AI & Deep Learning Projects",
        icon: "🤖",
        category: ServiceCategory::AiMl,
        description: "Developing custom machine learning models to solve complex business and research problems, from data analysis to deployment.",
        tools: &["Python", "TensorFlow", "PyTorch", "OpenCV", "Scikit-learn"],
        delivery_time: "8-16 Weeks",
        price: "Starting at ₹80,000",
        portfolio_example: "MediLink-AI",
        portfolio_link: "https://github.com/PrajwalGaniga/MediLink-AI",
        details: &[
            "Computer Vision (image/video analysis)",
            "Natural Language Processing (NLP)",
            "Recommendation systems and predictive models",
            "Model deployment & API integration",
        ],
        features: ServiceFeatures {
            responsive: false,
            deployment: true,
            maintenance: true,
            support: "12 months",
            revisions: "Iterative",
        },
        testimonial: ("Cutting-edge AI solution that exceeded expectations!", "Healthcare CTO"),
        popular: true,
        badge: "Premium",
    },
    ServiceOffering {
        id: "training",
        title: "Corporate & Student Training",
        icon: "🧑‍🏫",
        category: ServiceCategory::Education,
        description: "Hands-on, intensive programs designed to upskill individuals and teams in the latest in-demand technologies.",
        tools: &["Full Stack Bootcamps", "Data Science Training", "Certification Courses", "Live Projects"],
        delivery_time: "4-8 Weeks",
        price: "Starting at ₹10,000/person",
        portfolio_example: "Customized training for ABC Corp",
        portfolio_link: "#portfolio",
        details: &[
            "Certification upon completion",
            "Focus on practical, real-world implementation",
            "Flexible scheduling options",
            "One-on-one mentorship available",
        ],
        features: ServiceFeatures {
            responsive: false,
            deployment: false,
            maintenance: false,
            support: "Ongoing",
            revisions: "N/A",
        },
        testimonial: ("Upskilled our entire team in just 6 weeks!", "HR Manager"),
        popular: false,
        badge: "Certified",
    },
    ServiceOffering {
        id: "ieee",
        title: "IEEE Paper Publication Assistance",
        icon: "📝",
        category: ServiceCategory::Academic,
        description: "Comprehensive support for academic projects, ensuring successful implementation, documentation, and publication in reputable conferences.",
        tools: &["MATLAB", "Python", "LaTeX", "Domain-Specific Tools", "Research Methods"],
        delivery_time: "6-10 Weeks",
        price: "Starting at ₹30,000",
        portfolio_example: "Sample research papers",
        portfolio_link: "#portfolio",
        details: &[
            "Topic selection and literature review support",
            "High-quality implementation and validation",
            "Conference submission and formatting assistance",
            "Plagiarism-free original work",
        ],
        features: ServiceFeatures {
            responsive: false,
            deployment: false,
            maintenance: false,
            support: "Until publication",
            revisions: "Unlimited",
        },
        testimonial: ("Published in IEEE conference within 3 months!", "PhD Scholar"),
        popular: false,
        badge: "Academic",
    },
    ServiceOffering {
        id: "custom",
        title: "Custom Project Development",
        icon: "🚀",
        category: ServiceCategory::Custom,
        description: "Tailored solutions for unique student or corporate requirements that fall outside standard service packages.",
        tools: &["Based on requirement", "Embedded Systems", "IoT", "Blockchain", "Mobile Apps"],
        delivery_time: "Varies",
        price: "Custom Quote",
        portfolio_example: "Case studies available",
        portfolio_link: "#portfolio",
        details: &[
            "Dedicated project manager",
            "Phase-wise delivery and reviews",
            "IP protection and confidentiality",
            "Post-deployment support",
        ],
        features: ServiceFeatures {
            responsive: true,
            deployment: true,
            maintenance: true,
            support: "Custom",
            revisions: "Custom",
        },
        testimonial: ("Handled our complex IoT project brilliantly!", "Innovation Director"),
        popular: false,
        badge: "Flexible",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_with_empty_query() {
        assert_eq!(filter_services(CategoryFilter::All, "").len(), SERVICES.len());
    }

    #[test]
    fn test_category_and_query_combine() {
        let dev = filter_services(CategoryFilter::Only(ServiceCategory::Development), "");
        assert_eq!(dev.iter().map(|s| s.id).collect::<Vec<_>>(), vec!["frontend", "fullstack"]);

        let hits = filter_services(CategoryFilter::Only(ServiceCategory::Development), "figma");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "frontend");
    }

    #[test]
    fn test_query_hits_tools_case_insensitively() {
        let ids: Vec<_> = filter_services(CategoryFilter::All, "PYTHON")
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["ai-dl", "ieee"]);
        assert!(filter_services(CategoryFilter::All, "quantum").is_empty());
    }

    #[test]
    fn test_pills() {
        let ids: Vec<_> = CategoryFilter::pills().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["all", "development", "ai-ml", "education", "academic", "custom"]);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(CategoryFilter::from_id("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_id("ai-ml"),
            Some(CategoryFilter::Only(ServiceCategory::AiMl))
        );
        assert_eq!(CategoryFilter::from_id("blockchain"), None);
    }
}
