//! Per-page SEO presets for the marketing site and dashboard.

use crate::seo::meta::SeoConfig;

/// Static SEO settings for one page, keyed by its path without the locale prefix.
#[derive(Debug, Clone, Copy)]
pub struct PagePreset {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub no_index: bool,
}

impl PagePreset {
    /// Site path for this page; `home` is the root.
    pub fn path(&self) -> &'static str {
        if self.key == "home" {
            ""
        } else {
            self.key
        }
    }

    pub fn to_config(&self) -> SeoConfig {
        let mut config = SeoConfig::new()
            .with_title(self.title)
            .with_description(self.description)
            .with_keywords(self.keywords.iter().copied());
        config.path = Some(self.path().to_string());
        if self.no_index {
            config.no_index = Some(true);
        }
        config
    }
}

const fn preset(
    key: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
) -> PagePreset {
    PagePreset {
        key,
        title,
        description,
        keywords,
        no_index: false,
    }
}

const fn private(
    key: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
) -> PagePreset {
    PagePreset {
        key,
        title,
        description,
        keywords,
        no_index: true,
    }
}

pub const PAGE_PRESETS: &[PagePreset] = &[
    preset(
        "home",
        "AI SEO Audit Tool - Boost Rankings 300% Faster",
        "Transform your SEO with AI-powered audits that identify 47+ critical issues. Join 10,000+ marketers using data-driven insights to skyrocket organic traffic and dominate search results.",
        &["AI SEO audit", "SEO optimization tool", "website ranking boost", "organic traffic growth", "technical SEO analysis"],
    ),
    preset(
        "features",
        "SEO Features - Complete Audit & Analysis | AI SEO Turbo",
        "Discover powerful SEO features including technical audits, competitor analysis, keyword tracking, and AI-powered recommendations for better rankings.",
        &["SEO features", "technical SEO audit", "competitor analysis", "keyword tracking"],
    ),
    preset(
        "features/seo-audit",
        "SEO Audit Feature - Comprehensive Analysis | AI SEO Turbo",
        "Get detailed SEO audits with 47+ technical checks, AI-powered recommendations, and actionable insights to improve your website rankings.",
        &["SEO audit", "technical SEO", "website analysis", "SEO recommendations"],
    ),
    preset(
        "features/site-crawler",
        "Site Crawler - Deep Website Analysis | AI SEO Turbo",
        "Comprehensive website crawler that detects broken links, analyzes site structure, and identifies technical SEO issues for better search performance.",
        &["site crawler", "website analysis", "SEO crawler", "broken links"],
    ),
    preset(
        "features/competitor-analysis",
        "Competitor Analysis - SEO Intelligence | AI SEO Turbo",
        "Analyze competitor SEO strategies, keyword rankings, and backlink profiles. Discover opportunities to outrank competitors and gain market share.",
        &["competitor analysis", "SEO intelligence", "keyword tracking", "competitive research"],
    ),
    preset(
        "features/ai-assistant",
        "AI SEO Assistant - Smart Recommendations | AI SEO Turbo",
        "AI-powered SEO assistant providing personalized recommendations, content optimization suggestions, and automated insights for better rankings.",
        &["AI SEO assistant", "SEO recommendations", "AI optimization", "SEO insights"],
    ),
    preset(
        "features/keyword-tracking",
        "Keyword Tracking - Monitor Rankings | AI SEO Turbo",
        "Track keyword positions across search engines, monitor ranking changes, and get alerts for SERP movements to optimize your SEO strategy.",
        &["keyword tracking", "ranking monitor", "SERP tracking", "SEO alerts"],
    ),
    preset(
        "pricing",
        "SEO Audit Pricing - Plans From $29/month | AI SEO Turbo",
        "Choose the perfect SEO audit plan for your business. Start with our free plan or upgrade to Pro for advanced features and priority support.",
        &["SEO audit pricing", "SEO tools cost", "website audit plans"],
    ),
    preset(
        "about",
        "About AI SEO Turbo - Expert SEO Team & AI Innovation",
        "Meet the SEO experts and AI engineers behind AI SEO Turbo. Learn how our 10+ years of combined experience helps 10,000+ businesses achieve 300% traffic growth through AI-powered optimization.",
        &["SEO company", "AI SEO experts", "SEO consultants", "technical SEO team", "AI optimization specialists"],
    ),
    preset(
        "contact",
        "Contact AI SEO Turbo - Expert SEO Support & Consultation",
        "Get expert SEO help from certified specialists. Contact us for personalized consultation, technical support, and partnership inquiries. Join 10,000+ businesses achieving SEO success.",
        &["SEO support", "contact SEO experts", "SEO consultation", "technical SEO help", "SEO partnership"],
    ),
    preset(
        "blog",
        "SEO Blog - Tips & Strategies | AI SEO Turbo",
        "Stay updated with the latest SEO tips, strategies, and best practices. Learn from expert insights on technical SEO, content optimization, and algorithms.",
        &["SEO blog", "SEO tips", "SEO strategies", "search engine optimization"],
    ),
    preset(
        "help",
        "Help Center - SEO Support & Guides | AI SEO Turbo",
        "Get help with AI SEO Turbo. Find answers to common questions, tutorials, troubleshooting guides, and contact support for personalized assistance.",
        &["SEO help", "support center", "SEO tutorials", "troubleshooting"],
    ),
    preset(
        "terms",
        "Terms of Service - Legal Agreement | AI SEO Turbo",
        "Read our terms of service and legal agreement for using AI SEO Turbo. Understand your rights and responsibilities when using our SEO audit tools.",
        &["terms of service", "legal agreement", "SEO terms", "user agreement"],
    ),
    preset(
        "privacy",
        "Privacy Policy - Data Protection | AI SEO Turbo",
        "Learn how AISEOTurbo protects your privacy and handles your data. Our privacy policy covers GDPR compliance and data security measures.",
        &["privacy policy", "data protection", "GDPR", "privacy rights"],
    ),
    private(
        "dashboard",
        "SEO Dashboard - Track Performance | AI SEO Turbo",
        "Access your personalized SEO dashboard to monitor performance, track rankings, analyze competitors, and get AI-powered optimization recommendations.",
        &["SEO dashboard", "analytics", "keyword tracking", "competitor analysis"],
    ),
    private(
        "login",
        "Login - Access Your SEO Dashboard | AI SEO Turbo",
        "Sign in to your AI SEO Turbo account to access comprehensive SEO audits, analytics dashboard, and optimization tools for your websites.",
        &["login", "sign in", "SEO dashboard", "account access"],
    ),
    private(
        "signup",
        "Sign Up - Start Your SEO Journey | AI SEO Turbo",
        "Create your free AI SEO Turbo account and start optimizing your website with AI-powered SEO audits, competitor analysis, and expert recommendations.",
        &["sign up", "register", "SEO tools", "free account"],
    ),
    private(
        "forgot-password",
        "Reset Password - Account Recovery | AI SEO Turbo",
        "Reset your AI SEO Turbo account password securely. Regain access to your SEO dashboard, audits, and optimization tools quickly and safely.",
        &["reset password", "forgot password", "account recovery"],
    ),
    preset(
        "community",
        "SEO Community - Connect & Learn | AI SEO Turbo",
        "Join the AI SEO Turbo community to connect with SEO professionals, share insights, learn from experts, and stay updated with the latest SEO trends.",
        &["SEO community", "SEO professionals", "SEO networking", "SEO insights"],
    ),
    preset(
        "demo",
        "Free SEO Audit Demo - Try AI Analysis Tool Online",
        "Experience our AI-powered SEO audit tool free. Analyze any website instantly with 47+ technical checks, competitor insights, and actionable recommendations that boost rankings.",
        &["SEO audit demo", "free SEO analysis", "AI SEO tool demo", "website audit online", "technical SEO checker"],
    ),
    preset(
        "careers",
        "Careers - Join SEO Experts Team | AI SEO Turbo",
        "Join AISEOTurbo to revolutionize SEO with AI. We're hiring talented individuals passionate about search engine optimization and cutting-edge technology.",
        &["careers", "jobs", "SEO", "AI", "technology", "remote work"],
    ),
    preset(
        "case-studies",
        "SEO Success Stories & Case Studies | AI SEO Turbo",
        "Explore real SEO success stories and case studies. See how businesses achieved significant traffic growth and ranking improvements using AI SEO Turbo.",
        &["SEO case studies", "SEO success stories", "SEO results", "website optimization case studies"],
    ),
    private(
        "dashboard/projects",
        "Projects - Manage SEO Audits | AI SEO Turbo",
        "Manage your SEO projects, organize website audits, and track optimization progress across all your domains from your dashboard.",
        &["SEO projects", "website audits", "project management", "SEO tracking"],
    ),
    private(
        "dashboard/audit",
        "SEO Audit Dashboard | AI SEO Turbo",
        "Run comprehensive SEO audits from your dashboard, analyze technical issues, and receive AI-powered recommendations to improve website performance.",
        &["SEO audit dashboard", "technical audit", "SEO analysis", "performance optimization"],
    ),
    private(
        "dashboard/keywords",
        "Keyword Tracking Dashboard | AI SEO Turbo",
        "Monitor keyword rankings, track SERP position changes, and analyze keyword performance data across all search engines from your dashboard.",
        &["keyword dashboard", "ranking tracker", "SERP monitoring", "keyword analytics"],
    ),
    private(
        "dashboard/competitors",
        "Competitor Analysis Dashboard | AI SEO Turbo",
        "Analyze competitor SEO strategies, track their performance metrics, and discover opportunities to gain competitive advantage from your dashboard.",
        &["competitor dashboard", "SEO analysis", "competitive intelligence", "market research"],
    ),
    private(
        "dashboard/page-crawler",
        "Page Crawler Dashboard | AI SEO Turbo",
        "Use advanced page crawling tools from your dashboard to detect SEO issues, analyze site structure, and monitor website health comprehensively.",
        &["page crawler", "website analysis", "SEO crawler", "site audit"],
    ),
    private(
        "dashboard/backlinks",
        "Backlinks Dashboard | AI SEO Turbo",
        "Monitor your backlink profile, analyze link quality metrics, and track new backlink acquisitions to improve domain authority from your dashboard.",
        &["backlinks dashboard", "link analysis", "backlink monitoring", "domain authority"],
    ),
    private(
        "dashboard/reports",
        "SEO Reports Dashboard | AI SEO Turbo",
        "Generate comprehensive SEO reports, track performance metrics over time, and create custom reports for stakeholders from your dashboard.",
        &["SEO reports", "performance reports", "analytics dashboard", "SEO metrics"],
    ),
    private(
        "dashboard/settings",
        "Account Settings | AI SEO Turbo",
        "Manage your AI SEO Turbo account settings, billing preferences, and dashboard configuration options for a personalized experience.",
        &["account settings", "user preferences", "billing settings", "account management"],
    ),
];

/// Look up a preset by key. Leading/trailing slashes are ignored and the
/// empty key maps to `home`.
pub fn find_preset(key: &str) -> Option<&'static PagePreset> {
    let key = key.trim().trim_matches('/');
    let key = if key.is_empty() { "home" } else { key };
    PAGE_PRESETS.iter().find(|p| p.key == key)
}

/// Preset for `key` as a [`SeoConfig`] with its path filled in.
pub fn page_preset(key: &str) -> Option<SeoConfig> {
    find_preset(key).map(PagePreset::to_config)
}
