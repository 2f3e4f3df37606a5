//! Company content: team, values, client testimonials, home page sections
//! and footer links.

use super::{Feature, Metric};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub expertise: &'static str,
    pub bio: &'static str,
    pub photo: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub skills: &'static [&'static str],
    pub featured: bool,
}

impl TeamMember {
    /// First letter of the name, used when the photo is missing.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub project_type: &'static str,
    pub review: &'static str,
    pub rating: u8,
    pub company: &'static str,
    pub role: &'static str,
    pub color: &'static str,
    pub gradient: &'static str,
}

/// Home page selling point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellingPoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
    pub color: &'static str,
    pub featured: bool,
}

/// Card in the services marquee; the back face shows `back_details`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickService {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub back_details: &'static str,
    pub color: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
    pub color: &'static str,
}

/// Five-slot star string, e.g. `⭐⭐⭐☆☆`.
pub fn stars(rating: u8) -> String {
    (0..5u8)
        .map(|i| if i < rating { '⭐' } else { '☆' })
        .collect()
}

pub const HERO_WORDS: [&str; 4] = ["Innovation", "Excellence", "Intelligence", "Solutions"];

pub const HERO_TRUST: &[Metric] = &[
    Metric { value: "500+", label: "Projects Delivered", icon: "📦" },
    Metric { value: "98%", label: "Client Satisfaction", icon: "⭐" },
    Metric { value: "24/7", label: "Support Available", icon: "🛡️" },
];

/// (emoji, title) pairs under "Powered by".
pub const HERO_TECH: [(&str, &str); 5] = [
    ("⚛️", "React"),
    ("🤖", "AI/ML"),
    ("🟢", "Node.js"),
    ("🐍", "Python"),
    ("☁️", "Cloud"),
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Prajwal P.",
        role: "Founder & CTO",
        expertise: "AI/DL Specialist",
        bio: "Driving innovation with expertise in advanced Deep Learning, full-stack development, and system architecture. Passionate about building scalable solutions that solve real-world problems.",
        photo: "/assets/founders/prajwal.jpg",
        linkedin: "#",
        github: "#",
        skills: &["Deep Learning", "System Architecture", "Full Stack"],
        featured: true,
    },
    TeamMember {
        name: "Ujwal",
        role: "Full Stack Developer",
        expertise: "MERN Stack Expert",
        bio: "Specializes in building high-performance web applications with modern JavaScript frameworks. Ensures seamless integration between frontend and backend systems.",
        photo: "/assets/founders/ujwal.jpg",
        linkedin: "#",
        github: "#",
        skills: &["React", "Node.js", "MongoDB"],
        featured: false,
    },
    TeamMember {
        name: "Varshini",
        role: "Research Lead",
        expertise: "IEEE & Academic Support",
        bio: "Guides research projects from conceptualization to publication. Expert in academic writing, research methodology, and conference submissions.",
        photo: "/assets/founders/varshini.jpg",
        linkedin: "#",
        github: "#",
        skills: &["Research", "LaTeX", "Academic Writing"],
        featured: false,
    },
    TeamMember {
        name: "Ishitha",
        role: "UI/UX Designer",
        expertise: "Design Systems",
        bio: "Creates intuitive, user-centered designs that balance aesthetics with functionality. Specializes in modern design systems and responsive interfaces.",
        photo: "/assets/founders/ishu.jpg",
        linkedin: "#",
        github: "#",
        skills: &["Figma", "Design Systems", "User Research"],
        featured: false,
    },
    TeamMember {
        name: "Sanvi",
        role: "AI/ML Engineer",
        expertise: "Computer Vision",
        bio: "Implements cutting-edge machine learning models for real-world applications. Expertise in computer vision, NLP, and model optimization.",
        photo: "/assets/founders/sanvi.jpg",
        linkedin: "#",
        github: "#",
        skills: &["TensorFlow", "PyTorch", "Computer Vision"],
        featured: false,
    },
];

pub const VALUES: &[Feature] = &[
    Feature {
        icon: "🎯",
        title: "Excellence First",
        description: "We deliver nothing short of exceptional quality in every project, backed by rigorous testing and continuous improvement.",
    },
    Feature {
        icon: "🤝",
        title: "Client Partnership",
        description: "Your success is our success. We work collaboratively, maintaining transparent communication throughout the journey.",
    },
    Feature {
        icon: "🚀",
        title: "Innovation Driven",
        description: "We stay ahead of technology trends, constantly learning and adopting cutting-edge tools to provide modern solutions.",
    },
    Feature {
        icon: "💡",
        title: "Knowledge Sharing",
        description: "We believe in empowering clients and students through education, guidance, and long-term skill development.",
    },
];

pub const ACHIEVEMENTS: &[Metric] = &[
    Metric { value: "500+", label: "Projects Delivered", icon: "📦" },
    Metric { value: "50+", label: "IEEE Papers Published", icon: "📄" },
    Metric { value: "1,670+", label: "Students Trained", icon: "🎓" },
    Metric { value: "98%", label: "Client Satisfaction", icon: "⭐" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Dr. R. Sharma",
        project_type: "AI Model Implementation",
        review: "SPACE delivered an incredibly accurate AI model ahead of schedule. Their Deep Learning expertise is unmatched.",
        rating: 5,
        company: "Tech Research Labs",
        role: "Senior Researcher",
        color: "#FF5555",
        gradient: "linear-gradient(135deg, #FF5555, #FF7777)",
    },
    Testimonial {
        name: "M. Khan",
        project_type: "Full Stack Dashboard",
        review: "The MERN stack dashboard built for our corporate needs is flawless, fast, and extremely secure. Great communication throughout.",
        rating: 5,
        company: "DataFlow Systems",
        role: "Tech Lead",
        color: "#55AA55",
        gradient: "linear-gradient(135deg, #55AA55, #77CC77)",
    },
    Testimonial {
        name: "A. Gupta",
        project_type: "IEEE Paper Assistance",
        review: "The implementation support for my conference paper was critical. I highly recommend SPACE for academic and research projects.",
        rating: 5,
        company: "University Research",
        role: "PhD Researcher",
        color: "#5555FF",
        gradient: "linear-gradient(135deg, #5555FF, #7777FF)",
    },
    Testimonial {
        name: "S. Patil",
        project_type: "Frontend Development",
        review: "Our Next.js frontend looks stunning and performs perfectly. They captured our vision for the UI/UX precisely.",
        rating: 5,
        company: "StartupHub",
        role: "Founder & CEO",
        color: "#FFAA00",
        gradient: "linear-gradient(135deg, #FFAA00, #FFCC33)",
    },
    Testimonial {
        name: "P. Desai",
        project_type: "Mobile App Development",
        review: "Exceptional React Native development with smooth animations and perfect cross-platform functionality. Highly professional team!",
        rating: 5,
        company: "MobileFirst Inc",
        role: "CTO",
        color: "#AA55FF",
        gradient: "linear-gradient(135deg, #AA55FF, #CC77FF)",
    },
];

pub const SELLING_POINTS: &[SellingPoint] = &[
    SellingPoint {
        icon: "🧑‍💻",
        title: "Expert Developers",
        description: "Senior engineers ensuring robust, clean, and maintainable code for every project.",
        stats: "10+ Years",
        color: "#4AB1F1",
        featured: true,
    },
    SellingPoint {
        icon: "🧠",
        title: "AI & Deep Learning",
        description: "Cutting-edge solutions in Computer Vision, NLP, and custom ML model deployment.",
        stats: "50+ Models",
        color: "#2AF598",
        featured: true,
    },
    SellingPoint {
        icon: "📚",
        title: "IEEE Paper Support",
        description: "Comprehensive assistance from topic selection to conference submission.",
        stats: "95% Success",
        color: "#9D4EDD",
        featured: false,
    },
    SellingPoint {
        icon: "⚡",
        title: "Fast Delivery",
        description: "Optimized workflows and dedicated teams guarantee timely delivery.",
        stats: "2x Faster",
        color: "#F59E42",
        featured: false,
    },
    SellingPoint {
        icon: "🎓",
        title: "Pro Training",
        description: "Hands-on bootcamps and customized corporate training programs.",
        stats: "1,670+ Trained",
        color: "#4AB1F1",
        featured: false,
    },
];

pub const QUICK_SERVICES: &[QuickService] = &[
    QuickService {
        icon: "🌐",
        title: "Frontend Development",
        details: "Modern, responsive UI/UX using React, Next.js, and Vue with stunning animations.",
        back_details: "Advanced state management, performance optimization, SEO, and cross-browser compatibility. Build pixel-perfect interfaces that users love.",
        color: "#4AB1F1",
        gradient: "linear-gradient(135deg, rgba(74, 177, 241, 0.15), rgba(74, 177, 241, 0.05))",
    },
    QuickService {
        icon: "🧱",
        title: "Full Stack Development",
        details: "End-to-end solutions with MERN, MEAN, Django, and seamless payment integration.",
        back_details: "Scalable architecture, RESTful APIs, GraphQL, database design, authentication, deployment, and cloud integration for enterprise-grade applications.",
        color: "#2AF598",
        gradient: "linear-gradient(135deg, rgba(42, 245, 152, 0.15), rgba(42, 245, 152, 0.05))",
    },
    QuickService {
        icon: "🤖",
        title: "AI/Deep Learning",
        details: "Computer Vision, NLP, Recommendation Systems, and custom ML models for real impact.",
        back_details: "TensorFlow, PyTorch, model training, fine-tuning, deployment, real-time inference, and MLOps pipelines for production-ready AI solutions.",
        color: "#9D4EDD",
        gradient: "linear-gradient(135deg, rgba(157, 78, 221, 0.15), rgba(157, 78, 221, 0.05))",
    },
    QuickService {
        icon: "🛠️",
        title: "Workshops & Bootcamps",
        details: "Intensive hands-on training in Web Development, AI/ML, and modern deployment practices.",
        back_details: "Real-world projects, expert mentorship, career guidance, portfolio building, and industry-recognized certification programs.",
        color: "#FB9228",
        gradient: "linear-gradient(135deg, rgba(251, 146, 40, 0.15), rgba(251, 146, 40, 0.05))",
    },
    QuickService {
        icon: "🧑‍🏫",
        title: "Corporate Training",
        details: "Customized full-stack and Data Science programs for upskilling professional teams.",
        back_details: "Tailored curriculum, team workshops, progress tracking, hands-on labs, and ongoing support for maximum ROI.",
        color: "#EC4899",
        gradient: "linear-gradient(135deg, rgba(236, 72, 153, 0.15), rgba(236, 72, 153, 0.05))",
    },
    QuickService {
        icon: "📝",
        title: "IEEE Paper Assistance",
        details: "Complete support from topic selection to implementation and conference submission.",
        back_details: "Research guidance, literature review, code implementation, paper writing, formatting, plagiarism check, and publication support.",
        color: "#4AB1F1",
        gradient: "linear-gradient(135deg, rgba(74, 177, 241, 0.15), rgba(74, 177, 241, 0.05))",
    },
];

/// Footer columns: (heading, links).
pub const FOOTER_SECTIONS: [(&str, &[FooterLink]); 4] = [
    (
        "Company",
        &[
            FooterLink { name: "About Us", path: "/about" },
            FooterLink { name: "Our Team", path: "/about#team" },
            FooterLink { name: "Careers", path: "/careers" },
            FooterLink { name: "Contact", path: "/contact" },
        ],
    ),
    (
        "Services",
        &[
            FooterLink { name: "Full Stack Development", path: "/services#fullstack" },
            FooterLink { name: "AI/Deep Learning", path: "/services#ai" },
            FooterLink { name: "IEEE Paper Support", path: "/ieee-support" },
            FooterLink { name: "Workshops & Training", path: "/workshops" },
        ],
    ),
    (
        "Resources",
        &[
            FooterLink { name: "Portfolio", path: "/portfolio" },
            FooterLink { name: "Blog", path: "/blog" },
            FooterLink { name: "Case Studies", path: "/portfolio#cases" },
            FooterLink { name: "Documentation", path: "/docs" },
        ],
    ),
    (
        "Legal",
        &[
            FooterLink { name: "Privacy Policy", path: "/privacy" },
            FooterLink { name: "Terms of Service", path: "/terms" },
            FooterLink { name: "Cookie Policy", path: "/cookies" },
            FooterLink { name: "Sitemap", path: "/sitemap" },
        ],
    ),
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "LinkedIn", icon: "🔗", url: "https://linkedin.com", color: "#0077B5" },
    SocialLink { name: "GitHub", icon: "💻", url: "https://github.com", color: "#333333" },
    SocialLink { name: "Twitter", icon: "🐦", url: "https://twitter.com", color: "#1DA1F2" },
    SocialLink { name: "Instagram", icon: "📸", url: "https://instagram.com", color: "#E4405F" },
    SocialLink { name: "YouTube", icon: "🎥", url: "https://youtube.com", color: "#FF0000" },
    SocialLink { name: "Discord", icon: "💬", url: "https://discord.com", color: "#5865F2" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(5), "⭐⭐⭐⭐⭐");
        assert_eq!(stars(3), "⭐⭐⭐☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn test_single_featured_founder() {
        assert_eq!(TEAM.iter().filter(|m| m.featured).count(), 1);
        assert_eq!(TEAM[0].initial(), 'P');
    }
}
