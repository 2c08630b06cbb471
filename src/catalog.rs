//! Read-only article catalog.
//!
//! The catalog is the single source of article data for every generated
//! page. It is constructed once, never mutated, and resolves slugs with
//! exact, case-sensitive matching; a miss is an expected outcome the page
//! layer renders as the "article not found" view.

use anyhow::{Result, bail};
use std::collections::HashSet;

/// Number of articles promoted to the home page grid.
///
/// The home page features the newest entries; the catalog is kept in
/// reverse-chronological order so the first entries are the feature set.
const FEATURED_COUNT: usize = 3;

/// One published article with its display metadata and body text.
///
/// All fields are opaque display strings except `slug` (the lookup key) and
/// `content` (the restricted markdown-subset blob consumed by the block
/// renderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    slug: String,
    title: String,
    author: String,
    date: String,
    category: String,
    read_time: String,
    image: String,
    excerpt: String,
    content: String,
}

impl Article {
    /// Creates an article record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
        read_time: impl Into<String>,
        image: impl Into<String>,
        excerpt: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            author: author.into(),
            date: date.into(),
            category: category.into(),
            read_time: read_time.into(),
            image: image.into(),
            excerpt: excerpt.into(),
            content: content.into(),
        }
    }

    /// URL-safe unique identifier, stable for the life of the catalog.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn read_time(&self) -> &str {
        &self.read_time
    }

    /// Cover image path, relative to the site root.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Short teaser shown on index and featured cards.
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// Body text in the restricted markdown subset.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Page path relative to the site root.
    pub fn href(&self) -> String {
        format!("blog/{}.html", self.slug)
    }
}

/// Immutable catalog of published articles.
#[derive(Debug)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    /// Creates a catalog from explicit articles.
    ///
    /// # Arguments
    ///
    /// * `articles`: Articles in display order (newest first)
    ///
    /// # Errors
    ///
    /// Returns error if two articles share a slug.
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut seen = HashSet::new();
        for article in &articles {
            if !seen.insert(article.slug()) {
                bail!("Duplicate article slug: {}", article.slug());
            }
        }
        Ok(Self { articles })
    }

    /// Resolves a slug to its article.
    ///
    /// Exact, case-sensitive match; no normalization. `None` signals the
    /// expected not-found outcome, never an error.
    pub fn lookup(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug() == slug)
    }

    /// All articles in catalog order.
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    /// Articles promoted to the home page feature grid.
    pub fn featured(&self) -> &[Article] {
        &self.articles[..self.articles.len().min(FEATURED_COUNT)]
    }

    /// The fixed article set baked into the binary.
    ///
    /// Slugs here are known unique; swapping this for a real data source
    /// only requires constructing the catalog with `Catalog::new`.
    pub fn seeded() -> Self {
        Self {
            articles: vec![
                Article::new(
                    "ai-revolution-2025",
                    "The AI Revolution: What to Expect in 2025",
                    "Sarah Chen",
                    "Nov 15, 2025",
                    "Artificial Intelligence",
                    "8 min read",
                    "images/artificial-intelligence-future.jpg",
                    "Exploring the cutting-edge developments in artificial intelligence and their impact on industries worldwide.",
                    AI_REVOLUTION_CONTENT,
                ),
                Article::new(
                    "web-performance-optimization",
                    "Web Performance: Optimization Strategies That Work",
                    "Alex Rivera",
                    "Nov 14, 2025",
                    "Web Development",
                    "12 min read",
                    "images/web-performance.jpg",
                    "Learn proven techniques to dramatically improve your website speed and user experience scores.",
                    WEB_PERFORMANCE_CONTENT,
                ),
                Article::new(
                    "cybersecurity-trends",
                    "Cybersecurity Threats and Defense Strategies",
                    "Marcus Johnson",
                    "Nov 12, 2025",
                    "Security",
                    "10 min read",
                    "images/cybersecurity-network.png",
                    "Understanding emerging security threats and implementing robust protection mechanisms for your applications.",
                    CYBERSECURITY_CONTENT,
                ),
            ],
        }
    }
}

const AI_REVOLUTION_CONTENT: &str = "\
# The AI Revolution: What to Expect in 2025

Artificial Intelligence has moved from academic research to everyday applications that transform how we work, create, and solve problems. As we look ahead to 2025, the landscape of AI is becoming increasingly sophisticated and accessible.

## Current State of AI

The rapid advancement in large language models has democratized AI capabilities. Organizations across all sectors are now implementing AI solutions that previously seemed like science fiction. From healthcare diagnostics to personalized learning systems, AI is becoming integral to modern infrastructure.

### Key Areas of Innovation

- **Generative AI**: More refined and specialized models for specific domains
- **Multimodal AI**: Systems that seamlessly work with text, images, and video
- **Edge AI**: Running powerful models directly on devices
- **Ethical AI**: Better frameworks for responsible AI deployment

## What's Coming in 2025

### 1. Specialized Models Dominate

We'll see a shift from general-purpose models to highly specialized AI systems trained for specific industries. Healthcare, finance, and manufacturing will have purpose-built AI solutions.

### 2. AI Agents Become Practical

Autonomous AI agents that can take action, make decisions, and collaborate with humans will move from concept to production use.

### 3. Energy Efficiency Takes Center Stage

As AI companies grapple with massive computational costs, efficient models and better training methods will become competitive advantages.

### 4. Regulatory Frameworks Solidify

Governments worldwide will establish clearer guidelines for AI use, data privacy, and accountability.

## Preparing Your Organization

1. **Invest in talent**: Hire people who understand both AI and your domain
2. **Start with data**: Ensure you have quality, organized data
3. **Begin small**: Pilot projects reduce risk and build internal expertise
4. **Think about ethics**: Build responsible AI from the ground up

The AI revolution isn't coming\u{2014}it's already here. The question is how your organization will adapt and thrive in this new era.";

const WEB_PERFORMANCE_CONTENT: &str = "\
# Web Performance: Optimization Strategies That Work

In 2025, users expect websites to load instantly and respond immediately. Slow websites don't just frustrate users\u{2014}they lose revenue, traffic, and trust. This guide covers proven optimization strategies that deliver real results.

## Why Performance Matters

Every 100ms delay in website load time can result in a 1% decrease in conversion rate. For e-commerce sites, this translates to significant lost revenue. Performance isn't just a technical concern\u{2014}it's a business imperative.

## Core Web Vitals

Google's Core Web Vitals measure three key aspects of user experience:

1. **Largest Contentful Paint (LCP)**: How quickly the main content loads
2. **First Input Delay (FID)**: How responsive the page is to user input
3. **Cumulative Layout Shift (CLS)**: How stable the page layout remains while loading

## Optimization Strategies

### Image Optimization
- Use modern formats like WebP and AVIF
- Implement responsive images with srcset
- Lazy load below-the-fold images
- Compress ruthlessly with appropriate tools

### Code Splitting
- Split JavaScript bundles by route
- Load only what's needed for initial render
- Defer non-critical JavaScript

### Caching Strategy
- Use service workers for offline capability
- Implement browser caching headers
- Use CDNs for static assets
- Cache API responses intelligently

### Database Optimization
- Index frequently queried columns
- Optimize database queries
- Implement query result caching
- Consider database sharding for scale

## Tools and Measurement

Use these tools to measure and improve performance:

- **Lighthouse**: Built-in browser tool for performance audits
- **WebPageTest**: Detailed performance analysis
- **Real User Monitoring (RUM)**: Track actual user experience
- **Sentry**: Monitor errors and performance issues

The best performance optimization strategy is one you actually implement. Start with the biggest bottlenecks and work your way down.";

const CYBERSECURITY_CONTENT: &str = "\
# Cybersecurity Threats and Defense Strategies

The threat landscape continues to evolve at an alarming pace. As threats become more sophisticated, organizations must adopt equally sophisticated defense strategies. This article explores current threats and actionable defense mechanisms.

## Current Threat Landscape

### Supply Chain Attacks
Attackers are targeting software supply chains, compromising libraries and dependencies used by thousands of companies.

### Ransomware Evolution
Ransomware actors are becoming more targeted, focusing on high-value targets and demanding unprecedented sums.

### AI-Powered Attacks
Attackers are using machine learning to automate reconnaissance and exploit discovery.

## Defense Strategy

### Zero Trust Architecture
Stop trusting based on location. Implement:
- Micro-segmentation
- Continuous verification
- Least privilege access
- Detailed monitoring and logging

### Security Awareness
- Regular training for employees
- Phishing simulations
- Clear security policies
- Incident response procedures

### Technical Controls
- Use strong authentication (MFA)
- Encrypt data in transit and at rest
- Regular security updates
- Vulnerability scanning and penetration testing

## Implementation Priorities

1. **Inventory**: Know what you have
2. **Protect**: Secure critical assets
3. **Detect**: Monitor for threats
4. **Respond**: Have an incident response plan
5. **Recover**: Backup and disaster recovery

Security is an ongoing process, not a destination. Stay vigilant and keep improving your defenses.";
