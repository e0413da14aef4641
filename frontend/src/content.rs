/// Portfolio categories, in filter-row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Web,
    Mobile,
    Startup,
    Custom,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Web,
        Category::Mobile,
        Category::Startup,
        Category::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Startup => "Startup",
            Category::Custom => "Custom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "About", section_id: "about" },
    NavLink { label: "Services", section_id: "services" },
    NavLink { label: "Projects", section_id: "projects" },
    NavLink { label: "Testimonials", section_id: "testimonials" },
    NavLink { label: "Contact", section_id: "contact" },
];

pub const HERO_SECTION_ID: &str = "hero";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub turnaround: &'static str,
}

pub static SERVICES: [Service; 5] = [
    Service {
        icon: "◈",
        title: "Web Development",
        description: "Blazing-fast, pixel-perfect websites built with React, Next.js, and modern stacks.",
        turnaround: "3–7 days",
    },
    Service {
        icon: "◉",
        title: "Mobile Apps",
        description: "Native-feel cross-platform apps with React Native that work flawlessly on iOS & Android.",
        turnaround: "5–14 days",
    },
    Service {
        icon: "⬡",
        title: "SaaS Platforms",
        description: "End-to-end SaaS products with auth, billing, dashboards, and real-time data.",
        turnaround: "7–21 days",
    },
    Service {
        icon: "◫",
        title: "UI/UX Design",
        description: "Award-winning interfaces that convert. Wireframes, prototypes, and design systems.",
        turnaround: "2–5 days",
    },
    Service {
        icon: "⬢",
        title: "Custom Software",
        description: "Bespoke automation tools, APIs, integrations, and backend systems tailored to you.",
        turnaround: "7–14 days",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    /// Tint of the card's glyph tile, as a CSS hex color.
    pub color: &'static str,
    pub glyph: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        category: Category::Web,
        title: "NexaFlow",
        description: "SaaS analytics dashboard for e-commerce brands tracking real-time revenue.",
        color: "#00ffff",
        glyph: "◈",
    },
    Project {
        category: Category::Mobile,
        title: "TrailSync",
        description: "Fitness tracking app with GPS routes, community challenges & wearable sync.",
        color: "#ff00ff",
        glyph: "◉",
    },
    Project {
        category: Category::Startup,
        title: "LaunchPad AI",
        description: "AI-powered landing page generator for early-stage startups. Closed beta.",
        color: "#ffff00",
        glyph: "⬡",
    },
    Project {
        category: Category::Custom,
        title: "OpsCore",
        description: "Internal operations platform replacing 6 legacy tools for a 200-person team.",
        color: "#00ff00",
        glyph: "◫",
    },
    Project {
        category: Category::Web,
        title: "Aurum Store",
        description: "Luxury e-commerce for a jewelry brand — 3D product viewer, AR try-on.",
        color: "#ffaa00",
        glyph: "⬢",
    },
    Project {
        category: Category::Mobile,
        title: "Pocketly",
        description: "Personal finance app with AI spending insights and automated savings rules.",
        color: "#00aaff",
        glyph: "◈",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: usize,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "CEO, Luminary SaaS",
        quote: "Delivered our entire MVP in under 2 weeks. The quality was beyond what we expected. We went from idea to paying customers in record time.",
        rating: 5,
    },
    Testimonial {
        name: "Marcus Reid",
        role: "Founder, TrailSync",
        quote: "Unreal attention to detail. Every animation, every micro-interaction — the app feels like it cost 10x what we paid.",
        rating: 5,
    },
    Testimonial {
        name: "Priya Nair",
        role: "CTO, NexaCorp",
        quote: "Fast, professional, and genuinely brilliant. Our dashboard revamp increased user engagement by 47%. Highly recommend.",
        rating: 5,
    },
];

pub static STATS: [(&str, &str); 3] = [
    ("50+", "Projects"),
    ("3yr", "Experience"),
    ("100%", "Satisfaction"),
];

pub static SKILLS: [&str; 10] = [
    "React / Next.js",
    "React Native",
    "Node.js",
    "TypeScript",
    "PostgreSQL",
    "AWS",
    "Figma / Prototyping",
    "Stripe / Auth",
    "REST & GraphQL",
    "Docker & CI/CD",
];

// Placeholders, none of these have a live destination.
pub static SOCIAL_LINKS: [&str; 3] = ["GitHub", "LinkedIn", "Twitter"];

pub const CONTACT_EMAIL: &str = "hello@devstudio.io";
pub const CONTACT_LOCATION: &str = "Remote — Worldwide";
pub const BRAND: &str = "<DEV />";
