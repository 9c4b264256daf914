//! Page section builders.
//!
//! Every builder is a pure function of the palette (and, for the hero, the
//! prompt). None of them reads or writes shared state, so sections can be
//! rendered, reordered or dropped independently.

use super::{ColorPalette, SectionId};
use crate::config::constants::markup::{ELLIPSIS, HERO_TITLE_MAX_CHARS};

/// Render one section
pub fn build_section(section: SectionId, colors: &ColorPalette, prompt: &str) -> String {
    match section {
        SectionId::Hero => hero(colors, prompt),
        SectionId::About => about(colors),
        SectionId::Features => features(colors),
        SectionId::Pricing => pricing(colors),
        SectionId::Team => team(colors),
        SectionId::Gallery => gallery(colors),
        SectionId::Testimonials => testimonials(colors),
        SectionId::Contact => contact(colors),
        SectionId::Faq => faq(colors),
    }
}

/// Escape text for use inside element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Hero headline: the prompt, cut to a fixed number of characters
pub fn hero_title(prompt: &str) -> String {
    let prompt = prompt.trim();
    let title = if prompt.chars().count() > HERO_TITLE_MAX_CHARS {
        let head: String = prompt.chars().take(HERO_TITLE_MAX_CHARS).collect();
        format!("{head}{ELLIPSIS}")
    } else {
        prompt.to_string()
    };
    escape_html(&title)
}

pub fn hero(colors: &ColorPalette, prompt: &str) -> String {
    let ColorPalette {
        primary, secondary, ..
    } = *colors;
    let title = hero_title(prompt);
    format!(
        r#"
    <section id="home" class="relative min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-50 to-gray-100 overflow-hidden">
        <div class="absolute inset-0 opacity-10">
            <div class="absolute top-20 left-20 w-72 h-72 rounded-full" style="background: {primary}; filter: blur(100px);"></div>
            <div class="absolute bottom-20 right-20 w-96 h-96 rounded-full" style="background: {secondary}; filter: blur(100px);"></div>
        </div>
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 relative z-10">
            <div class="text-center animate-fade-in-up">
                <h1 class="text-5xl md:text-7xl font-bold text-gray-900 mb-6 leading-tight">
                    {title}
                </h1>
                <p class="text-xl md:text-2xl text-gray-600 mb-10 max-w-3xl mx-auto">
                    Transform your digital presence with cutting-edge solutions designed for the modern web
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <button class="px-10 py-4 rounded-xl text-white text-lg font-semibold hover:shadow-2xl transition-all transform hover:-translate-y-1" style="background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);">
                        Get Started Now
                    </button>
                    <button class="px-10 py-4 rounded-xl border-2 text-lg font-semibold hover:shadow-lg transition-all" style="border-color: {primary}; color: {primary}">
                        Watch Demo
                    </button>
                </div>
            </div>
        </div>
    </section>"#
    )
}

pub fn about(colors: &ColorPalette) -> String {
    let ColorPalette {
        primary, secondary, ..
    } = *colors;
    const STATS: [(&str, &str); 4] = [
        ("500+", "Projects Completed"),
        ("98%", "Client Satisfaction"),
        ("50+", "Team Members"),
        ("24/7", "Support Available"),
    ];
    let stats: String = STATS
        .iter()
        .enumerate()
        .map(|(i, (value, label))| {
            let color = if i % 2 == 0 { primary } else { secondary };
            format!(
                r#"
                    <div class="bg-gray-50 p-6 rounded-xl">
                        <h3 class="text-4xl font-bold mb-2" style="color: {color}">{value}</h3>
                        <p class="text-gray-600">{label}</p>
                    </div>"#
            )
        })
        .collect();

    format!(
        r#"
    <section id="about" class="py-20 bg-white">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <div>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">About Our Mission</h2>
                    <p class="text-lg text-gray-600 mb-4">
                        We're dedicated to delivering exceptional experiences that push the boundaries of what's possible on the web.
                    </p>
                    <p class="text-lg text-gray-600 mb-6">
                        Our team combines creativity with technical expertise to craft solutions that not only meet but exceed expectations.
                    </p>
                    <button class="px-8 py-3 rounded-lg text-white font-medium" style="background: {primary}">
                        Learn More
                    </button>
                </div>
                <div class="grid grid-cols-2 gap-4">{stats}
                </div>
            </div>
        </div>
    </section>"#
    )
}

pub fn features(colors: &ColorPalette) -> String {
    let accent = colors.accent;
    const FEATURES: [(&str, &str, &str); 6] = [
        ("⚡", "Lightning Fast", "Optimized performance for blazing fast load times"),
        ("🎨", "Beautiful Design", "Carefully crafted interfaces that users love"),
        ("🔒", "Secure & Safe", "Enterprise-grade security for your peace of mind"),
        ("📱", "Fully Responsive", "Perfect experience on any device or screen size"),
        ("🚀", "Easy to Use", "Intuitive interface designed for everyone"),
        ("💡", "Innovative", "Cutting-edge technology and modern solutions"),
    ];
    let cards: String = FEATURES
        .iter()
        .map(|(icon, title, desc)| {
            let title = escape_html(title);
            format!(
                r#"
                <div class="bg-white p-8 rounded-2xl shadow-sm hover:shadow-xl transition-all transform hover:-translate-y-2 border border-gray-100" style="border-top: 4px solid {accent}">
                    <div class="text-5xl mb-4">{icon}</div>
                    <h3 class="text-2xl font-bold mb-3">{title}</h3>
                    <p class="text-gray-600">{desc}</p>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"
    <section id="services" class="py-20 bg-gray-50">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-16">
                <h2 class="text-4xl md:text-5xl font-bold mb-4">Powerful Features</h2>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                    Everything you need to build amazing experiences
                </p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}
            </div>
        </div>
    </section>"#
    )
}

struct Plan {
    name: &'static str,
    audience: &'static str,
    price: &'static str,
    perks: &'static [&'static str],
    cta: &'static str,
    highlighted: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        audience: "Perfect for individuals",
        price: "$29",
        perks: &["5 Projects", "Basic Support", "10GB Storage"],
        cta: "Get Started",
        highlighted: false,
    },
    Plan {
        name: "Pro",
        audience: "For growing businesses",
        price: "$99",
        perks: &[
            "Unlimited Projects",
            "Priority Support",
            "100GB Storage",
            "Advanced Analytics",
        ],
        cta: "Get Started",
        highlighted: true,
    },
    Plan {
        name: "Enterprise",
        audience: "For large organizations",
        price: "$299",
        perks: &[
            "Everything in Pro",
            "24/7 Support",
            "Unlimited Storage",
            "Custom Integration",
        ],
        cta: "Contact Sales",
        highlighted: false,
    },
];

pub fn pricing(colors: &ColorPalette) -> String {
    let primary = colors.primary;
    let cards: String = PLANS
        .iter()
        .map(|plan| {
            let Plan {
                name,
                audience,
                price,
                cta,
                ..
            } = plan;
            let perks: String = plan
                .perks
                .iter()
                .map(|perk| {
                    format!(
                        r#"
                        <li class="flex items-center gap-2">✓ {perk}</li>"#
                    )
                })
                .collect();
            let (card_open, badge, button_style) = if plan.highlighted {
                (
                    format!(
                        r#"<div class="bg-white p-8 rounded-2xl border-2 shadow-xl transform scale-105" style="border-color: {primary}">"#
                    ),
                    format!(
                        r#"
                    <div class="inline-block px-3 py-1 rounded-full text-sm font-semibold text-white mb-4" style="background: {primary}">
                        Popular
                    </div>"#
                    ),
                    format!(
                        r#"class="w-full px-6 py-3 rounded-lg text-white font-medium" style="background: {primary}""#
                    ),
                )
            } else {
                (
                    r#"<div class="bg-gray-50 p-8 rounded-2xl">"#.to_string(),
                    String::new(),
                    format!(
                        r#"class="w-full px-6 py-3 rounded-lg border-2 font-medium" style="border-color: {primary}; color: {primary}""#
                    ),
                )
            };
            format!(
                r#"
                {card_open}{badge}
                    <h3 class="text-2xl font-bold mb-2">{name}</h3>
                    <p class="text-gray-600 mb-6">{audience}</p>
                    <div class="mb-6">
                        <span class="text-5xl font-bold">{price}</span>
                        <span class="text-gray-600">/month</span>
                    </div>
                    <ul class="space-y-3 mb-8">{perks}
                    </ul>
                    <button {button_style}>
                        {cta}
                    </button>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"
    <section id="pricing" class="py-20 bg-white">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-16">
                <h2 class="text-4xl md:text-5xl font-bold mb-4">Simple Pricing</h2>
                <p class="text-xl text-gray-600">Choose the perfect plan for your needs</p>
            </div>
            <div class="grid md:grid-cols-3 gap-8">{cards}
            </div>
        </div>
    </section>"#
    )
}

pub fn team(colors: &ColorPalette) -> String {
    let secondary = colors.secondary;
    const MEMBERS: [(&str, &str, &str); 4] = [
        ("Alex Johnson", "CEO & Founder", "👨‍💼"),
        ("Sarah Chen", "Lead Designer", "👩‍🎨"),
        ("Mike Davis", "CTO", "👨‍💻"),
        ("Emily Brown", "Marketing Director", "👩‍💼"),
    ];
    let cards: String = MEMBERS
        .iter()
        .map(|(name, role, avatar)| {
            let role = escape_html(role);
            format!(
                r#"
                <div class="bg-white p-6 rounded-2xl text-center hover:shadow-xl transition-all">
                    <div class="text-7xl mb-4">{avatar}</div>
                    <h3 class="text-xl font-bold mb-1">{name}</h3>
                    <p style="color: {secondary}">{role}</p>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"
    <section id="team" class="py-20 bg-gray-50">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-16">
                <h2 class="text-4xl md:text-5xl font-bold mb-4">Meet Our Team</h2>
                <p class="text-xl text-gray-600">The talented people behind our success</p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">{cards}
            </div>
        </div>
    </section>"#
    )
}

pub fn gallery(colors: &ColorPalette) -> String {
    let ColorPalette {
        primary, secondary, ..
    } = *colors;
    let tiles: String = (0..6)
        .map(|index| {
            let number = index + 1;
            // alpha suffix appended to each hex color
            let (start, end) = if index % 2 == 0 { ("40", "20") } else { ("20", "40") };
            format!(
                r#"
                <div class="aspect-video rounded-2xl overflow-hidden hover:shadow-2xl transition-all transform hover:scale-105 cursor-pointer" style="background: linear-gradient(135deg, {primary}{start} 0%, {secondary}{end} 100%);">
                    <div class="w-full h-full flex items-center justify-center">
                        <div class="text-center text-white p-6">
                            <h3 class="text-2xl font-bold mb-2">Project {number}</h3>
                            <p>Click to view details</p>
                        </div>
                    </div>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"
    <section id="gallery" class="py-20 bg-white">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-16">
                <h2 class="text-4xl md:text-5xl font-bold mb-4">Our Work</h2>
                <p class="text-xl text-gray-600">A showcase of our best projects</p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{tiles}
            </div>
        </div>
    </section>"#
    )
}

pub fn testimonials(colors: &ColorPalette) -> String {
    let accent = colors.accent;
    const QUOTES: [(&str, &str, &str); 3] = [
        (
            "John Smith",
            "Tech Corp",
            "Absolutely amazing service! They transformed our vision into reality.",
        ),
        (
            "Lisa Wang",
            "StartupXYZ",
            "Professional, creative, and delivered beyond our expectations.",
        ),
        (
            "David Miller",
            "Enterprise Inc",
            "The best team we've worked with. Highly recommended!",
        ),
    ];
    let cards: String = QUOTES
        .iter()
        .map(|(name, company, text)| {
            let text = escape_html(text);
            format!(
                r#"
                <div class="bg-white p-8 rounded-2xl shadow-sm">
                    <div class="text-4xl mb-4" style="color: {accent}">⭐⭐⭐⭐⭐</div>
                    <p class="text-gray-700 mb-6 text-lg">&ldquo;{text}&rdquo;</p>
                    <div>
                        <p class="font-bold">{name}</p>
                        <p class="text-gray-600">{company}</p>
                    </div>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"
    <section id="testimonials" class="py-20 bg-gray-50">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-16">
                <h2 class="text-4xl md:text-5xl font-bold mb-4">What Clients Say</h2>
                <p class="text-xl text-gray-600">Don't just take our word for it</p>
            </div>
            <div class="grid md:grid-cols-3 gap-8">{cards}
            </div>
        </div>
    </section>"#
    )
}

pub fn contact(colors: &ColorPalette) -> String {
    let primary = colors.primary;
    format!(
        r#"
    <section id="contact" class="py-20 bg-white">
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-12">
                <h2 class="text-4xl md:text-5xl font-bold mb-4">Get In Touch</h2>
                <p class="text-xl text-gray-600">We'd love to hear from you</p>
            </div>
            <div class="bg-gray-50 p-8 md:p-12 rounded-2xl">
                <form class="space-y-6">
                    <div class="grid md:grid-cols-2 gap-6">
                        <div>
                            <label class="block text-sm font-medium mb-2">Name</label>
                            <input type="text" class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-2 focus:border-transparent" style="outline-color: {primary}" placeholder="Your name">
                        </div>
                        <div>
                            <label class="block text-sm font-medium mb-2">Email</label>
                            <input type="email" class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-2 focus:border-transparent" style="outline-color: {primary}" placeholder="your@email.com">
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium mb-2">Message</label>
                        <textarea rows="5" class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:ring-2 focus:border-transparent" style="outline-color: {primary}" placeholder="Tell us about your project..."></textarea>
                    </div>
                    <button type="submit" class="w-full px-8 py-4 rounded-lg text-white text-lg font-semibold hover:shadow-lg transition-all" style="background: {primary}">
                        Send Message
                    </button>
                </form>
            </div>
        </div>
    </section>"#
    )
}

pub fn faq(colors: &ColorPalette) -> String {
    let primary = colors.primary;
    const ENTRIES: [(&str, &str); 4] = [
        (
            "How long does it take?",
            "Most projects are completed within 2-4 weeks depending on complexity.",
        ),
        (
            "What's included?",
            "Full design, development, testing, and deployment with ongoing support.",
        ),
        (
            "Can I request changes?",
            "Absolutely! We offer unlimited revisions until you're 100% satisfied.",
        ),
        (
            "Do you offer support?",
            "Yes, we provide 24/7 support for all our clients.",
        ),
    ];
    let items: String = ENTRIES
        .iter()
        .map(|(question, answer)| {
            let question = escape_html(question);
            let answer = escape_html(answer);
            format!(
                r#"
                <details class="bg-white p-6 rounded-xl shadow-sm cursor-pointer hover:shadow-md transition-all">
                    <summary class="font-bold text-lg list-none flex justify-between items-center">
                        {question}
                        <span class="text-2xl" style="color: {primary}">+</span>
                    </summary>
                    <p class="mt-4 text-gray-600">{answer}</p>
                </details>"#
            )
        })
        .collect();

    format!(
        r#"
    <section id="faq" class="py-20 bg-gray-50">
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="text-center mb-12">
                <h2 class="text-4xl md:text-5xl font-bold mb-4">FAQ</h2>
                <p class="text-xl text-gray-600">Frequently Asked Questions</p>
            </div>
            <div class="space-y-4">{items}
            </div>
        </div>
    </section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::ThemeId;

    const ALL_SECTIONS: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Features,
        SectionId::Pricing,
        SectionId::Team,
        SectionId::Gallery,
        SectionId::Testimonials,
        SectionId::Contact,
        SectionId::Faq,
    ];

    #[test]
    fn every_section_uses_the_palette() {
        let colors = ThemeId::Ecommerce.palette();
        for section in ALL_SECTIONS {
            let html = build_section(section, &colors, "A shop");
            assert!(
                html.contains(colors.primary)
                    || html.contains(colors.secondary)
                    || html.contains(colors.accent),
                "{section} ignores the palette"
            );
            assert!(html.trim_start().starts_with("<section"));
            assert!(html.trim_end().ends_with("</section>"));
        }
    }

    #[test]
    fn builders_are_independent_of_call_order() {
        let colors = ThemeId::Tech.palette();
        let forward: Vec<String> = ALL_SECTIONS
            .iter()
            .map(|s| build_section(*s, &colors, "x"))
            .collect();
        let mut backward: Vec<String> = ALL_SECTIONS
            .iter()
            .rev()
            .map(|s| build_section(*s, &colors, "x"))
            .collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn hero_title_truncates_by_characters() {
        let long = "é".repeat(61);
        let title = hero_title(&long);
        assert_eq!(title, format!("{}...", "é".repeat(60)));

        let exact = "a".repeat(60);
        assert_eq!(hero_title(&exact), exact);
    }

    #[test]
    fn hero_title_is_escaped() {
        assert_eq!(
            hero_title("<script>alert(1)</script> & co"),
            "&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"
        );
    }

    #[test]
    fn pricing_highlights_one_plan() {
        let html = pricing(&ThemeId::Saas.palette());
        assert_eq!(html.matches("Popular").count(), 1);
        assert!(html.contains("$29") && html.contains("$99") && html.contains("$299"));
        assert!(html.contains("Contact Sales"));
    }

    #[test]
    fn gallery_renders_six_tiles() {
        let html = gallery(&ThemeId::Portfolio.palette());
        assert_eq!(html.matches("Project ").count(), 6);
        assert!(html.contains("#8B5CF620 0%"));
        assert!(html.contains("#8B5CF640 0%"));
    }
}
