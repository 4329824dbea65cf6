//! Static copy for every section of the page.

use crate::components::icon::Icon;

pub const COMPANY: &str = "Lambert Brothers";
pub const PHONE_DISPLAY: &str = "+1 (555) 123-4567";
pub const PHONE_HREF: &str = "tel:+15551234567";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Services", href: "#services" },
    NavItem { name: "Reviews", href: "#reviews" },
    NavItem { name: "Contact", href: "#contact" },
];

/// Anchor of the section the "Get Quote" buttons scroll to.
pub const CONTACT_ANCHOR: &str = "#contact";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub icon: Icon,
    pub target: u32,
    pub duration_ms: u32,
}

pub const STATS: [Stat; 2] = [
    Stat { label: "Happy Clients", icon: Icon::Users, target: 500, duration_ms: 2_000 },
    Stat { label: "Years Experience", icon: Icon::Award, target: 15, duration_ms: 1_500 },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Personalized Service",
        description: "Tailored solutions that fit your unique needs and budget.",
    },
    Feature {
        title: "Expert Guidance",
        description: "Professional advice from experienced insurance specialists.",
    },
    Feature {
        title: "Comprehensive Coverage",
        description: "Wide range of insurance products to protect what matters most.",
    },
];

pub const STORY: [&str; 2] = [
    "Founded with a vision to provide comprehensive insurance solutions, Lambert Brothers Insurance has been serving families and businesses with dedication and integrity. We understand that insurance isn't just about policies. It's about protecting your dreams, your future, and your peace of mind.",
    "Our expert team specializes in both short-term and long-term coverage options, ensuring that you have the right protection at every stage of your life journey.",
];

/// Colour family used for a service card's icon badge and hover wash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Purple => "accent-purple",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub features: [&'static str; 4],
    pub accent: Accent,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Short-Term Insurance",
        description: "Comprehensive coverage for your immediate needs including auto, home, and personal property insurance.",
        icon: Icon::Shield,
        features: ["Auto Insurance", "Home Insurance", "Personal Property", "Business Coverage"],
        accent: Accent::Blue,
    },
    Service {
        title: "Life & Investments",
        description: "Secure your family's future with our life insurance and investment planning services.",
        icon: Icon::Users,
        features: ["Life Insurance", "Investment Planning", "Retirement Plans", "Education Funding"],
        accent: Accent::Green,
    },
    Service {
        title: "Risk Planning",
        description: "Strategic risk assessment and planning to protect your assets and minimize potential losses.",
        icon: Icon::Award,
        features: ["Risk Assessment", "Asset Protection", "Business Continuity", "Emergency Planning"],
        accent: Accent::Purple,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Review {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
}

pub const REVIEWS: [Review; 4] = [
    Review {
        name: "Sarah Johnson",
        role: "Homeowner",
        content: "Lambert Brothers provided exceptional service when I needed home insurance. Their attention to detail and personalized approach made all the difference. I couldn't be happier with my coverage!",
        rating: 5,
        avatar: "SJ",
    },
    Review {
        name: "Michael Chen",
        role: "Business Owner",
        content: "Professional, reliable, and trustworthy. They helped me find the perfect coverage for my business at a competitive rate. The peace of mind they provide is invaluable.",
        rating: 5,
        avatar: "MC",
    },
    Review {
        name: "Emily Rodriguez",
        role: "Young Professional",
        content: "As a first-time insurance buyer, they made the process simple and stress-free. Their expertise and patience helped me understand exactly what I needed. Highly recommend!",
        rating: 5,
        avatar: "ER",
    },
    Review {
        name: "David Thompson",
        role: "Family Man",
        content: "Outstanding service from start to finish. They took the time to understand our family's unique needs and provided comprehensive coverage that fits our budget perfectly.",
        rating: 5,
        avatar: "DT",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactDetail {
    pub icon: Icon,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_DETAILS: [ContactDetail; 4] = [
    ContactDetail { icon: Icon::Phone, title: "Phone", lines: &[PHONE_DISPLAY] },
    ContactDetail { icon: Icon::Mail, title: "Email", lines: &["info@lambertbrothers.com"] },
    ContactDetail {
        icon: Icon::MapPin,
        title: "Address",
        lines: &["123 Insurance Ave", "Suite 100", "City, State 12345"],
    },
    ContactDetail {
        icon: Icon::Clock,
        title: "Office Hours",
        lines: &[
            "Monday - Friday: 9:00 AM - 6:00 PM",
            "Saturday: 10:00 AM - 4:00 PM",
            "Sunday: Closed",
        ],
    },
];

/// `(value, label)` pairs for the contact form's service select. The empty
/// value is the unselected placeholder.
pub const SERVICE_INTERESTS: &[(&str, &str)] = &[
    ("", "Select a service"),
    ("auto", "Auto Insurance"),
    ("home", "Home Insurance"),
    ("life", "Life Insurance"),
    ("business", "Business Insurance"),
    ("other", "Other"),
];

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_IDS: [&str; 5] = ["home", "about", "services", "reviews", "contact"];

    #[test]
    fn nav_links_point_at_rendered_sections() {
        assert_eq!(NAV_ITEMS.len(), SECTION_IDS.len());
        for (item, id) in NAV_ITEMS.iter().zip(SECTION_IDS) {
            assert_eq!(item.href, format!("#{}", id));
        }
        assert!(NAV_ITEMS.iter().any(|item| item.href == CONTACT_ANCHOR));
    }

    #[test]
    fn reviews_have_valid_ratings_and_initials() {
        assert_eq!(REVIEWS.len(), 4);
        for review in REVIEWS {
            assert!((1..=5).contains(&review.rating), "{} has rating {}", review.name, review.rating);
            let initials: String = review
                .name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .collect();
            assert_eq!(review.avatar, initials);
        }
    }

    #[test]
    fn services_use_distinct_accents() {
        assert_eq!(SERVICES[0].accent.class(), "accent-blue");
        assert_ne!(SERVICES[0].accent, SERVICES[1].accent);
        assert_ne!(SERVICES[1].accent, SERVICES[2].accent);
        assert!(SERVICES.iter().all(|s| s.features.iter().all(|f| !f.is_empty())));
    }

    #[test]
    fn contact_details_and_select_options() {
        assert_eq!(CONTACT_DETAILS[2].lines.len(), 3);
        assert_eq!(CONTACT_DETAILS[3].lines.len(), 3);
        assert_eq!(SERVICE_INTERESTS[0].0, "");
        assert_eq!(SERVICE_INTERESTS.len(), 6);
    }

    #[test]
    fn counter_targets() {
        assert_eq!(STATS.map(|s| s.target), [500, 15]);
        assert!(STATS.iter().all(|s| s.duration_ms > 0));
    }
}
