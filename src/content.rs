pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub struct Expertise {
    pub title: &'static str,
    pub blurb: &'static str,
    pub highlights: &'static [&'static str],
}

pub const SERVICES: [Service; 5] = [
    Service {
        name: "Web Scraping",
        description: "Extract valuable data efficiently",
        icon: "🕸️",
    },
    Service {
        name: "IoT Solutions",
        description: "Connect and manage your devices",
        icon: "🌐",
    },
    Service {
        name: "Web Development",
        description: "Create powerful web applications",
        icon: "💻",
    },
    Service {
        name: "Mobile Development",
        description: "Build iOS and Android apps",
        icon: "📱",
    },
    Service {
        name: "Security Tools",
        description: "Protect your digital assets",
        icon: "🛡️",
    },
];

pub const EXPERTISE: [Expertise; 2] = [
    Expertise {
        title: "Web Scraping & Data Extraction",
        blurb: "Our team of experts specializes in developing efficient and ethical web scraping solutions. We help businesses gather valuable data to drive informed decision-making.",
        highlights: &[
            "Large-scale data extraction",
            "Real-time web monitoring",
            "Custom scraping tools development",
            "Data cleaning and structuring",
        ],
    },
    Expertise {
        title: "IoT & Web Development",
        blurb: "We create powerful, interconnected solutions that bridge the physical and digital worlds. Our IoT and web development expertise helps businesses stay ahead in the connected era.",
        highlights: &[
            "IoT device integration",
            "Real-time data processing",
            "Responsive web applications",
            "Cross-platform mobile apps",
        ],
    },
];

pub const FOUNDER_HEADLINE: &str = "Tech Innovator & Solution Architect";
pub const FOUNDER_BLURB: &str = "With over a decade of experience in the tech industry, Marmik has been at the forefront of innovation in web scraping, IoT solutions, and application development.";

pub const MISSION_HEADLINE: &str = "Breaking Barriers in Tech";
pub const MISSION_PARAGRAPHS: [&str; 2] = [
    "We're on a mission to democratize access to advanced tech solutions. We believe every business, regardless of size, deserves access to cutting-edge technology.",
    "Our innovative approach allows us to offer premium services at a fraction of the traditional cost, showcasing our efficiency and cost-effectiveness.",
];

/// Entrance delay for the n-th service card, in seconds.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * 0.1
}

/// Navigation label for a section id ("expertise" -> "Expertise").
pub fn nav_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_capitalized_ids() {
        assert_eq!(nav_label("services"), "Services");
        assert_eq!(nav_label(""), "");
    }

    #[test]
    fn service_cards_stagger_by_a_tenth_of_a_second() {
        let delays: Vec<f64> = (0..SERVICES.len()).map(stagger_delay).collect();
        assert_eq!(delays[0], 0.0);
        assert!((delays[4] - 0.4).abs() < 1e-9);
    }
}
