//! Static marketing copy for the informational pages

use crate::types::Grade;

pub const SITE_NAME: &str = "RubberSheetGrading";

pub const TAGLINE: &str = "Revolutionary AI-powered rubber sheet grading system ensuring fair pricing \
and quality assurance for farmers and buyers.";

pub const HERO_SUMMARY: &str = "Revolutionary AI-powered grading system using Raspberry Pi technology \
to accurately assess rubber sheet quality and provide real-time market pricing.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 2] = [
    Stat { value: "98.5%", label: "Accuracy" },
    Stat { value: "1K+", label: "Sheets Graded" },
];

pub const IMPACT_STATS: [Stat; 4] = [
    Stat { value: "1000+", label: "Farmers Benefited" },
    Stat { value: "15,000+", label: "Rubber Sheets Graded" },
    Stat { value: "98.5%", label: "Accuracy Percentage" },
    Stat { value: "₹50L+", label: "Fair Value Ensured" },
];

pub const STORY: [&str; 3] = [
    "We started RubberSheetGrading as a major engineering project in 2025 at our college. \
Our mission was to simplify the rubber sheet grading process using AI and IoT \
to help farmers and merchants achieve fair pricing.",
    "As engineering students passionate about solving real-world problems, we witnessed \
firsthand how rubber farmers in Karnataka struggled with inconsistent grading \
and pricing. This motivated us to combine our technical skills to create \
a solution that could make a difference.",
    "Today, we continue improving it with real-time data integration and smart analytics, \
making rubber sheet grading more accessible, accurate, and fair for everyone in the industry.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [Feature; 4] = [
    Feature {
        title: "Our Mission",
        description: "To empower rubber farmers with technology, ensuring fair pricing and transparent grading for sustainable agricultural growth.",
    },
    Feature {
        title: "Innovation",
        description: "Combining AI and IoT for smarter grading, using advanced computer vision and sensor technology for precise quality assessment.",
    },
    Feature {
        title: "Community Impact",
        description: "Connecting farmers and merchants transparently, building trust through consistent and reliable grading standards.",
    },
    Feature {
        title: "Quality Assurance",
        description: "Consistent grading and pricing based on live data, ensuring accuracy and fairness in every transaction.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM: [TeamMember; 4] = [
    TeamMember { name: "Anaga M S", role: "7th sem CS" },
    TeamMember { name: "Akhila M", role: "7th sem CS" },
    TeamMember { name: "Brunda K G", role: "7th sem CS" },
    TeamMember { name: "Madan S P", role: "7th sem CS" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareItem {
    pub name: &'static str,
    pub description: &'static str,
    pub specs: [&'static str; 3],
}

pub const HARDWARE: [HardwareItem; 3] = [
    HardwareItem {
        name: "Raspberry Pi 4",
        description: "Powerful edge computing for real-time AI processing and image analysis",
        specs: ["Quad-core ARM Cortex-A72", "4GB RAM", "Wi-Fi & Bluetooth"],
    },
    HardwareItem {
        name: "Pi Camera Module",
        description: "High-resolution camera captures detailed images of rubber sheet surface",
        specs: ["8MP Resolution", "Auto Focus", "LED Flash Support"],
    },
    HardwareItem {
        name: "DHT Moisture Sensor",
        description: "IoT-based sensor precisely measures moisture content in rubber sheets",
        specs: ["±2% Humidity Accuracy", "Real-time Reading", "Temperature Compensation"],
    },
];

pub const SOFTWARE: [Feature; 4] = [
    Feature { title: "Python + OpenCV", description: "Image processing and computer vision for quality analysis" },
    Feature { title: "TensorFlow / PyTorch", description: "Machine learning models for rubber sheet classification" },
    Feature { title: "MySQL Database", description: "Stores grading history and user data securely" },
    Feature { title: "Flask/Django Backend", description: "RESTful API for frontend communication and processing" },
];

pub const WORKFLOW_DIAGRAM: &str = "Image → Color Detection → Moisture Sensor → Grading → Price Display";

/// (step title, description), numbered from 1
pub const WORKFLOW: [Feature; 4] = [
    Feature { title: "Image Capture", description: "Pi Camera captures detailed photos of the rubber sheet" },
    Feature { title: "Color Detection", description: "OpenCV analyzes color patterns and surface texture" },
    Feature { title: "Moisture Reading", description: "DHT sensor measures exact moisture content percentage" },
    Feature { title: "AI Grading", description: "ML model assigns RSS grade and calculates price" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeBand {
    pub grade: Grade,
    pub description: &'static str,
    pub price_range: &'static str,
}

pub const GRADE_BANDS: [GradeBand; 5] = [
    GradeBand {
        grade: Grade::Rss1,
        description: "Premium grade - Light colored, minimal defects, low moisture",
        price_range: "₹185-190/kg",
    },
    GradeBand {
        grade: Grade::Rss2,
        description: "Standard grade - Good quality with minor blemishes",
        price_range: "₹175-180/kg",
    },
    GradeBand {
        grade: Grade::Rss3,
        description: "Commercial grade - Acceptable quality for industrial use",
        price_range: "₹165-170/kg",
    },
    GradeBand {
        grade: Grade::Rss4,
        description: "Lower grade - Darker color, more defects allowed",
        price_range: "₹155-160/kg",
    },
    GradeBand {
        grade: Grade::Rss5,
        description: "Lowest grade - Significant defects, industrial use only",
        price_range: "₹145-150/kg",
    },
];

pub fn grade_band(grade: Grade) -> &'static GradeBand {
    // GRADE_BANDS is indexed by rank
    &GRADE_BANDS[usize::from(grade.rank()) - 1]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { label: "Email", value: "madansettajana@gmail.com", description: "Send us an email anytime" },
    ContactChannel { label: "Phone", value: "+91 9008453654", description: "Mon-Fri from 9am to 6pm" },
    ContactChannel { label: "Location", value: "Sullia, Karnataka, India", description: "Visit our development center" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "How accurate is the grading system?",
        answer: "Our AI-powered system achieves 98.5% accuracy in grade classification, validated through extensive testing with rubber industry experts and real-world data.",
    },
    Faq {
        question: "What types of rubber sheets can be graded?",
        answer: "We support grading for RSS1 through RSS5 grades, covering all standard natural rubber sheet types used in the industry according to international standards.",
    },
    Faq {
        question: "How does the moisture sensor work?",
        answer: "We use IoT-based DHT sensors integrated with Raspberry Pi to measure moisture content accurately. The sensor data is combined with image analysis for comprehensive grading.",
    },
    Faq {
        question: "Can I use this system offline?",
        answer: "The Raspberry Pi system can process grading offline, but real-time market pricing requires internet connectivity for the most accurate and up-to-date information.",
    },
    Faq {
        question: "How do I get started as a farmer?",
        answer: "Simply create a farmer account, upload clear images of your rubber sheets, and get instant grading results with current market prices based on quality.",
    },
    Faq {
        question: "Is there any training required?",
        answer: "No special training needed! Our system is designed to be user-friendly. Just take clear photos of your rubber sheets and upload them for instant grading.",
    },
];

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_band_lookup() {
        for grade in Grade::ALL {
            assert_eq!(grade_band(grade).grade, grade);
        }
        assert_eq!(grade_band(Grade::Rss1).price_range, "₹185-190/kg");
    }
}
