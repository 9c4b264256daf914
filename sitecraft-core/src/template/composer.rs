use super::sections::{build_section, escape_html};
use super::{ColorPalette, TemplateConfig, analyzer};
use crate::config::constants::urls::STYLE_LIBRARY;

/// Compose a full document from an analyzed configuration.
///
/// Output is a pure function of `(config, prompt)`: no clock, no randomness.
pub fn compose(config: &TemplateConfig, prompt: &str) -> String {
    let brand = config.theme.display_name();
    let head = document_head(&format!("{brand} Website"), Some(&config.colors));
    let header = site_header(brand, &config.colors);
    let footer = site_footer(brand, &config.colors);
    let body: String = config
        .sections
        .iter()
        .map(|section| build_section(*section, &config.colors, prompt))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n{head}\n<body class=\"bg-gray-50\">\n{header}\n{body}\n{footer}\n</body>\n</html>"
    )
}

/// Analyze and compose in one step
pub fn generate_from_template(prompt: &str, theme: &str) -> String {
    let config = analyzer::analyze(prompt, theme);
    compose(&config, prompt)
}

/// Minimal document wrapper used when converting component-style fragments
pub fn document_shell(title: &str, body: &str) -> String {
    let head = document_head(title, None);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n{head}\n<body>\n{body}\n</body>\n</html>"
    )
}

fn document_head(title: &str, colors: Option<&ColorPalette>) -> String {
    let title = escape_html(title);
    let styles = colors.map(style_block).unwrap_or_default();
    format!(
        r#"<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{STYLE_LIBRARY}"></script>{styles}
</head>"#
    )
}

fn style_block(colors: &ColorPalette) -> String {
    let ColorPalette {
        primary, secondary, ..
    } = *colors;
    format!(
        r#"
    <style>
        .gradient-text {{
            background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
        }}
        @keyframes fadeInUp {{
            from {{ opacity: 0; transform: translateY(30px); }}
            to {{ opacity: 1; transform: translateY(0); }}
        }}
        .animate-fade-in-up {{
            animation: fadeInUp 0.8s ease-out;
        }}
    </style>"#
    )
}

fn site_header(brand: &str, colors: &ColorPalette) -> String {
    let ColorPalette {
        primary, secondary, ..
    } = *colors;
    format!(
        r##"    <header class="bg-white shadow-sm sticky top-0 z-50">
        <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="flex justify-between items-center h-16">
                <div class="flex items-center gap-2">
                    <div class="w-8 h-8 rounded-lg" style="background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);"></div>
                    <span class="text-2xl font-bold gradient-text">{brand}</span>
                </div>
                <div class="hidden md:flex space-x-8">
                    <a href="#home" class="text-gray-700 hover:text-gray-900 font-medium transition">Home</a>
                    <a href="#about" class="text-gray-700 hover:text-gray-900 font-medium transition">About</a>
                    <a href="#services" class="text-gray-700 hover:text-gray-900 font-medium transition">Services</a>
                    <a href="#contact" class="text-gray-700 hover:text-gray-900 font-medium transition">Contact</a>
                </div>
                <button class="px-6 py-2 rounded-lg text-white font-medium hover:shadow-lg transition" style="background: {primary}">
                    Get Started
                </button>
            </div>
        </nav>
    </header>"##
    )
}

fn site_footer(brand: &str, colors: &ColorPalette) -> String {
    let primary = colors.primary;
    const COLUMNS: [(&str, [&str; 3]); 3] = [
        ("Product", ["Features", "Pricing", "FAQ"]),
        ("Company", ["About", "Team", "Careers"]),
        ("Legal", ["Privacy", "Terms", "Security"]),
    ];
    let columns: String = COLUMNS
        .iter()
        .map(|(heading, links)| {
            let items: String = links
                .iter()
                .map(|link| {
                    format!(
                        r##"
                        <li><a href="#" class="hover:text-white transition">{link}</a></li>"##
                    )
                })
                .collect();
            format!(
                r#"
                <div>
                    <h4 class="font-bold mb-4">{heading}</h4>
                    <ul class="space-y-2 text-gray-400">{items}
                    </ul>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"    <footer class="bg-gray-900 text-white py-12">
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <div class="grid md:grid-cols-4 gap-8">
                <div>
                    <div class="flex items-center gap-2 mb-4">
                        <div class="w-8 h-8 rounded-lg" style="background: {primary}"></div>
                        <span class="text-xl font-bold">{brand}</span>
                    </div>
                    <p class="text-gray-400">Building the future of the web, one project at a time.</p>
                </div>{columns}
            </div>
            <div class="border-t border-gray-800 mt-12 pt-8 text-center text-gray-400">
                <p>&copy; {brand}. All rights reserved.</p>
            </div>
        </div>
    </footer>"#
    )
}
