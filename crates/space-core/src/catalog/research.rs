//! IEEE research support content.

use super::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchDomain {
    pub name: &'static str,
    pub icon: &'static str,
    pub topics: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodologyStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchTool {
    pub name: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

pub const DOMAINS: &[ResearchDomain] = &[
    ResearchDomain {
        name: "Deep Learning & Neural Networks",
        icon: "🧠",
        topics: &["CNNs", "RNNs", "Transformers", "GANs"],
    },
    ResearchDomain {
        name: "Image Processing & Computer Vision",
        icon: "👁️",
        topics: &["Object Detection", "Segmentation", "Image Enhancement", "Pattern Recognition"],
    },
    ResearchDomain {
        name: "Natural Language Processing",
        icon: "📝",
        topics: &["Sentiment Analysis", "Text Classification", "Machine Translation", "Chatbots"],
    },
    ResearchDomain {
        name: "IoT & Wireless Sensor Networks",
        icon: "📡",
        topics: &["Smart Systems", "Edge Computing", "Network Protocols", "Data Aggregation"],
    },
    ResearchDomain {
        name: "Cloud Computing & Security",
        icon: "☁️",
        topics: &["Cloud Architecture", "Cryptography", "Access Control", "Secure Computing"],
    },
    ResearchDomain {
        name: "Data Mining & Big Data",
        icon: "📊",
        topics: &["Classification", "Clustering", "Association Rules", "Predictive Analytics"],
    },
];

pub const METHODOLOGY: &[MethodologyStep] = &[
    MethodologyStep {
        step: 1,
        title: "Topic Finalization & Research Gap Identification",
        description: "Collaborative brainstorming to identify novel research problems with clear academic contribution and societal impact.",
        icon: "🎯",
        duration: "1 week",
    },
    MethodologyStep {
        step: 2,
        title: "Literature Review & Proposal Development",
        description: "Comprehensive survey of state-of-the-art techniques, identification of research gaps, and formulation of proposed methodology.",
        icon: "📚",
        duration: "2 weeks",
    },
    MethodologyStep {
        step: 3,
        title: "Algorithm Design & Implementation",
        description: "Rigorous implementation of proposed models using industry-standard tools and frameworks with clean, documented code.",
        icon: "⚙️",
        duration: "3-4 weeks",
    },
    MethodologyStep {
        step: 4,
        title: "Experimental Setup & Validation",
        description: "Design of experiments, performance metric analysis, statistical validation, and comparison with baseline methods.",
        icon: "🔬",
        duration: "2 weeks",
    },
    MethodologyStep {
        step: 5,
        title: "Manuscript Preparation & Formatting",
        description: "Professional paper writing following IEEE/ACM guidelines, creation of publication-quality figures, and proper citation formatting.",
        icon: "📄",
        duration: "2 weeks",
    },
    MethodologyStep {
        step: 6,
        title: "Submission & Revision Support",
        description: "Assistance with conference portal submission, responding to reviewer comments, and iterative improvements.",
        icon: "✅",
        duration: "Ongoing",
    },
];

pub const TOOLS: &[ResearchTool] = &[
    ResearchTool { name: "Python", icon: "🐍", category: "Language" },
    ResearchTool { name: "MATLAB", icon: "📐", category: "Simulation" },
    ResearchTool { name: "TensorFlow", icon: "🔥", category: "Framework" },
    ResearchTool { name: "PyTorch", icon: "⚡", category: "Framework" },
    ResearchTool { name: "Jupyter", icon: "📓", category: "Environment" },
    ResearchTool { name: "Overleaf", icon: "📝", category: "Documentation" },
    ResearchTool { name: "Google Colab", icon: "☁️", category: "Platform" },
    ResearchTool { name: "Git/GitHub", icon: "🔀", category: "Version Control" },
];

pub const SUCCESS_METRICS: &[Metric] = &[
    Metric { value: "50+", label: "Papers Guided", icon: "📄" },
    Metric { value: "95%", label: "Acceptance Rate", icon: "✅" },
    Metric { value: "30+", label: "IEEE Conferences", icon: "🏆" },
    Metric { value: "100%", label: "Originality", icon: "🎓" },
];

/// Two "why" columns: (title, points).
pub const RESEARCH_AREAS: [(&str, [&str; 4]); 2] = [
    (
        "Why Research Matters",
        [
            "Contributes to the global knowledge base",
            "Develops critical thinking and problem-solving skills",
            "Opens doors for higher education and career opportunities",
            "Addresses real-world challenges through innovation",
        ],
    ),
    (
        "Our Commitment to You",
        [
            "Personalized mentorship throughout the research journey",
            "Emphasis on ethical research practices and integrity",
            "Focus on learning and skill development",
            "Long-term academic and professional relationship",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methodology_is_numbered_in_order() {
        let steps: Vec<u8> = METHODOLOGY.iter().map(|s| s.step).collect();
        assert_eq!(steps, (1..=6).collect::<Vec<_>>());
    }
}
