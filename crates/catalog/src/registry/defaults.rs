//! The built-in Ocean UI catalog: one group of Tailwind-styled page
//! sections, each with a live-preview descriptor and the raw fragment its
//! author wrote. Raw fragments deliberately arrive in every shape the
//! normalizer handles: plain markup, component definitions, fragments,
//! and markup with dynamic holes.

use once_cell::sync::Lazy;

use crate::preview::{ListItem, PreviewNode};

use super::types::{CatalogConfig, CatalogEntry, CatalogGroup};

static DEFAULT_CATALOG: Lazy<CatalogConfig> = Lazy::new(|| CatalogConfig {
    groups: vec![CatalogGroup {
        key: "ui-blocks".to_string(),
        label: "UI Blocks".to_string(),
        entries: vec![
            hero(),
            cta(),
            pricing(),
            stats(),
            testimonial(),
            team(),
            faqs(),
            footers(),
            flyout_menus(),
            features(),
            bento_grids(),
            header(),
            newsletter(),
            blog(),
            contact(),
            content(),
            logo_cloud(),
            banners(),
            not_found(),
            landing(),
            about(),
        ],
    }],
});

/// The built-in catalog, constructed once.
pub fn default_ocean_catalog() -> &'static CatalogConfig {
    &DEFAULT_CATALOG
}

fn entry(
    key: &str,
    title: &str,
    description: &str,
    preview: PreviewNode,
    raw_markup: &str,
) -> CatalogEntry {
    CatalogEntry {
        key: key.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        preview,
        raw_markup: raw_markup.to_string(),
    }
}

fn hero() -> CatalogEntry {
    entry(
        "hero",
        "Hero",
        "Centered heading with two calls to action.",
        PreviewNode::container(
            "div",
            "mx-auto max-w-3xl text-center",
            vec![
                PreviewNode::element("h1", "text-3xl font-bold text-gray-900", "Build faster with Ocean UI"),
                PreviewNode::element("p", "mt-3 text-gray-600", "Responsive page sections styled with utility classes."),
            ],
        ),
        r##"<div className="mx-auto max-w-3xl text-center">
  <h1 className="text-3xl font-bold text-gray-900">Build faster with Ocean UI</h1>
  <p className="mt-3 text-gray-600">Responsive page sections styled with utility classes.</p>
  <div className="mt-6 flex flex-wrap items-center justify-center gap-3">
    <a href="#" className="px-4 py-2 rounded-lg bg-[#2563EB] text-white shadow hover:shadow-md transition">Get started</a>
    <a href="#" className="px-4 py-2 rounded-lg bg-white border border-gray-200 text-gray-800 hover:shadow transition">Documentation</a>
  </div>
</div>"##,
    )
}

fn cta() -> CatalogEntry {
    entry(
        "cta",
        "CTA",
        "Rounded call-to-action panel.",
        PreviewNode::container(
            "div",
            "rounded-2xl bg-[#2563EB] p-8 text-center",
            vec![
                PreviewNode::element("h2", "text-2xl font-semibold text-white", "Ready to ship your next page?"),
                PreviewNode::element("p", "mt-2 text-blue-100", "Copy a section, paste it into your project, done."),
            ],
        ),
        r##"const Cta = () => (
  <div className="rounded-2xl bg-[#2563EB] p-8 text-center">
    <h2 className="text-2xl font-semibold text-white">Ready to ship your next page?</h2>
    <p className="mt-2 text-blue-100">Copy a section, paste it into your project, done.</p>
    <a href="#" className="mt-6 inline-block rounded-lg bg-white px-5 py-2.5 text-[#2563EB] font-medium">Start now</a>
  </div>
);"##,
    )
}

fn pricing() -> CatalogEntry {
    entry(
        "pricing",
        "Pricing",
        "Three-tier pricing grid.",
        PreviewNode::list(
            "div",
            "grid grid-cols-1 gap-4 md:grid-cols-3",
            PreviewNode::container(
                "div",
                "rounded-2xl border border-gray-200 bg-white p-6",
                vec![
                    PreviewNode::element("div", "font-semibold text-gray-900", "{label}"),
                    PreviewNode::element("div", "mt-2 text-3xl font-bold text-gray-900", "{value}"),
                ],
            ),
            vec![
                ListItem::with_value("Starter", "$0"),
                ListItem::with_value("Pro", "$29"),
                ListItem::with_value("Enterprise", "$99"),
            ],
        ),
        r##"<div className="grid grid-cols-1 gap-4 md:grid-cols-3">
  {tiers.map((tier) => (
    <div key={tier} className="rounded-2xl border border-gray-200 bg-white p-6">
      <div className="font-semibold text-gray-900">{tier}</div>
      <div className="mt-2 text-3xl font-bold text-gray-900">$29</div>
      <a href="#" className="mt-6 block rounded-lg bg-[#2563EB] px-4 py-2 text-center text-white">Choose plan</a>
    </div>
  ))}
</div>"##,
    )
}

fn stats() -> CatalogEntry {
    entry(
        "stats",
        "Stats",
        "Key numbers in a four-up row.",
        PreviewNode::list(
            "dl",
            "grid grid-cols-2 gap-4 text-center md:grid-cols-4",
            PreviewNode::container(
                "div",
                "rounded-xl bg-white p-4",
                vec![
                    PreviewNode::element("dt", "text-sm text-gray-500", "{label}"),
                    PreviewNode::element("dd", "text-2xl font-bold text-gray-900", "{value}"),
                ],
            ),
            vec![
                ListItem::with_value("Teams", "4,000+"),
                ListItem::with_value("Countries", "92"),
                ListItem::with_value("Uptime", "99.9%"),
                ListItem::with_value("Requests", "12M"),
            ],
        ),
        r##"<dl className="grid grid-cols-2 gap-4 text-center md:grid-cols-4">
  {stats.map((stat) => (
    <div key={stat} className="rounded-xl bg-white p-4">
      <dt className="text-sm text-gray-500">{stat}</dt>
      <dd className="text-2xl font-bold text-gray-900">4,000+</dd>
    </div>
  ))}
</dl>"##,
    )
}

fn testimonial() -> CatalogEntry {
    entry(
        "testimonial",
        "Testimonial",
        "Single quote with attribution.",
        PreviewNode::container(
            "figure",
            "mx-auto max-w-2xl text-center",
            vec![
                PreviewNode::element("blockquote", "text-xl text-gray-900", "\u{201c}We rebuilt our marketing site in an afternoon.\u{201d}"),
                PreviewNode::element("figcaption", "mt-4 text-sm text-gray-500", "Jamie Rivera, Head of Product"),
            ],
        ),
        r##"<figure className="mx-auto max-w-2xl text-center">
  <blockquote className="text-xl text-gray-900">“We rebuilt our marketing site in an afternoon. It’s the fastest our team has ever shipped.”</blockquote>
  <figcaption className="mt-4 text-sm text-gray-500">Jamie Rivera, Head of Product</figcaption>
</figure>"##,
    )
}

fn team() -> CatalogEntry {
    entry(
        "team",
        "Team",
        "People grid with avatar placeholders.",
        PreviewNode::list(
            "ul",
            "grid grid-cols-2 gap-6 md:grid-cols-4",
            PreviewNode::container(
                "li",
                "text-center",
                vec![
                    PreviewNode::block("div", "mx-auto h-16 w-16 rounded-full bg-blue-100"),
                    PreviewNode::element("div", "mt-2 font-medium text-gray-900", "{label}"),
                    PreviewNode::element("div", "text-sm text-gray-500", "{value}"),
                ],
            ),
            vec![
                ListItem::with_value("Ana", "Design"),
                ListItem::with_value("Kofi", "Engineering"),
                ListItem::with_value("Mei", "Research"),
                ListItem::with_value("Tom", "Support"),
            ],
        ),
        r##"<ul className="grid grid-cols-2 gap-6 md:grid-cols-4">
  <li className="text-center">
    <div className="mx-auto h-16 w-16 rounded-full bg-blue-100" />
    <div className="mt-2 font-medium text-gray-900">Ana</div>
    <div className="text-sm text-gray-500">Design</div>
  </li>
  <li className="text-center">
    <div className="mx-auto h-16 w-16 rounded-full bg-blue-100" />
    <div className="mt-2 font-medium text-gray-900">Kofi</div>
    <div className="text-sm text-gray-500">Engineering</div>
  </li>
</ul>"##,
    )
}

fn faqs() -> CatalogEntry {
    entry(
        "faqs",
        "FAQs",
        "Stacked question and answer pairs.",
        PreviewNode::list(
            "dl",
            "mx-auto max-w-2xl space-y-6",
            PreviewNode::container(
                "div",
                "",
                vec![
                    PreviewNode::element("dt", "font-medium text-gray-900", "{label}"),
                    PreviewNode::element("dd", "mt-1 text-gray-600", "{value}"),
                ],
            ),
            vec![
                ListItem::with_value("Is there a free tier?", "Yes, the Starter plan is free forever."),
                ListItem::with_value("Can I cancel anytime?", "Plans are month to month with no lock-in."),
            ],
        ),
        r##"<dl className="mx-auto max-w-2xl space-y-6">
  {faqs.map((faq) => (
    <div key={faq}>
      <dt className="font-medium text-gray-900">{faq}</dt>
      <dd className="mt-1 text-gray-600">Yes, the Starter plan is free forever.</dd>
    </div>
  ))}
</dl>"##,
    )
}

fn footers() -> CatalogEntry {
    entry(
        "footers",
        "Footers",
        "Simple centered footer.",
        PreviewNode::container(
            "footer",
            "border-t border-gray-200 py-8 text-center",
            vec![PreviewNode::element("p", "text-sm text-gray-500", "\u{00a9} 2025 Ocean UI. All rights reserved.")],
        ),
        r##"<footer className="border-t border-gray-200 py-8 text-center">
  <nav className="flex justify-center gap-6 text-sm text-gray-600">
    <a href="#" className="hover:text-gray-900">About</a>
    <a href="#" className="hover:text-gray-900">Blog</a>
    <a href="#" className="hover:text-gray-900">Contact</a>
  </nav>
  <p className="mt-4 text-sm text-gray-500">© 2025 Ocean UI. All rights reserved.</p>
</footer>"##,
    )
}

fn flyout_menus() -> CatalogEntry {
    entry(
        "flyout-menus",
        "Flyout Menus",
        "Hover-revealed navigation panel.",
        PreviewNode::container(
            "div",
            "relative inline-block",
            vec![
                PreviewNode::element("button", "rounded-lg bg-white px-4 py-2 text-gray-900 shadow", "Solutions"),
                PreviewNode::element("div", "mt-2 w-48 rounded-xl bg-white p-3 text-sm text-gray-600 shadow-lg", "Analytics, Automation, Security"),
            ],
        ),
        r##"<div className="group relative inline-block">
  <button className="rounded-lg bg-white px-4 py-2 text-gray-900 shadow">Solutions</button>
  <div className="invisible absolute mt-2 w-48 rounded-xl bg-white p-3 shadow-lg group-hover:visible">
    <a href="#" className="block px-2 py-1 text-sm text-gray-600 hover:text-gray-900">Analytics</a>
    <a href="#" className="block px-2 py-1 text-sm text-gray-600 hover:text-gray-900">Automation</a>
    <a href="#" className="block px-2 py-1 text-sm text-gray-600 hover:text-gray-900">Security</a>
  </div>
</div>"##,
    )
}

fn features() -> CatalogEntry {
    entry(
        "features",
        "Features",
        "Three-up feature descriptions.",
        PreviewNode::list(
            "div",
            "grid grid-cols-1 gap-6 md:grid-cols-3",
            PreviewNode::container(
                "div",
                "",
                vec![
                    PreviewNode::element("h3", "font-semibold text-gray-900", "{label}"),
                    PreviewNode::element("p", "mt-1 text-sm text-gray-600", "{value}"),
                ],
            ),
            vec![
                ListItem::with_value("Copy-ready", "Every section is a single block you can paste anywhere."),
                ListItem::with_value("Responsive", "Grids collapse gracefully on small screens."),
                ListItem::with_value("Accessible", "Semantic tags and sensible contrast out of the box."),
            ],
        ),
        r##"<div className="grid grid-cols-1 gap-6 md:grid-cols-3">
  {features.map((feature) => (
    <div key={feature}>
      <h3 className="font-semibold text-gray-900">{feature}</h3>
      <p className="mt-1 text-sm text-gray-600">Every section is a single block you can paste anywhere.</p>
    </div>
  ))}
</div>"##,
    )
}

fn bento_grids() -> CatalogEntry {
    entry(
        "bento-grids",
        "Bento Grids",
        "Asymmetric card mosaic.",
        PreviewNode::container(
            "div",
            "grid grid-cols-3 gap-4",
            vec![
                PreviewNode::block("div", "col-span-2 h-32 rounded-2xl bg-blue-100"),
                PreviewNode::block("div", "h-32 rounded-2xl bg-gray-100"),
                PreviewNode::block("div", "h-32 rounded-2xl bg-gray-100"),
                PreviewNode::block("div", "col-span-2 h-32 rounded-2xl bg-blue-50"),
            ],
        ),
        r##"<div className="grid grid-cols-3 gap-4">
  <div className="col-span-2 h-32 rounded-2xl bg-blue-100" />
  <div className="h-32 rounded-2xl bg-gray-100" />
  <div className="h-32 rounded-2xl bg-gray-100" />
  <div className="col-span-2 h-32 rounded-2xl bg-blue-50" />
</div>"##,
    )
}

fn header() -> CatalogEntry {
    entry(
        "header",
        "Header",
        "Top navigation bar.",
        PreviewNode::container(
            "header",
            "flex items-center justify-between rounded-xl bg-white px-6 py-4 shadow",
            vec![
                PreviewNode::element("span", "font-bold text-gray-900", "Ocean UI"),
                PreviewNode::element("nav", "text-sm text-gray-600", "Product \u{00b7} Pricing \u{00b7} Docs"),
            ],
        ),
        r##"<header className="flex items-center justify-between rounded-xl bg-white px-6 py-4 shadow">
  <span className="font-bold text-gray-900">Ocean UI</span>
  <nav className="flex gap-6 text-sm text-gray-600">
    {links.map((link) => (
      <a key={link} href="#" className="hover:text-gray-900">{link}</a>
    ))}
  </nav>
</header>"##,
    )
}

fn newsletter() -> CatalogEntry {
    entry(
        "newsletter",
        "Newsletter",
        "Inline email signup form.",
        PreviewNode::container(
            "form",
            "mx-auto flex max-w-md gap-2",
            vec![
                PreviewNode::block("input", "flex-1 rounded-lg border border-gray-300 px-3 py-2"),
                PreviewNode::element("button", "rounded-lg bg-[#2563EB] px-4 py-2 text-white", "Subscribe"),
            ],
        ),
        r##"<form className="mx-auto max-w-md">
  <label htmlFor="email" className="block text-sm font-medium text-gray-700">Stay in the loop</label>
  <div className="mt-2 flex gap-2">
    <input id="email" type="email" placeholder="you@example.com" className="flex-1 rounded-lg border border-gray-300 px-3 py-2" />
    <button type="submit" className="rounded-lg bg-[#2563EB] px-4 py-2 text-white">Subscribe</button>
  </div>
</form>"##,
    )
}

fn blog() -> CatalogEntry {
    entry(
        "blog",
        "Blog",
        "Recent posts list.",
        PreviewNode::list(
            "div",
            "grid grid-cols-1 gap-6 md:grid-cols-3",
            PreviewNode::container(
                "article",
                "rounded-2xl bg-white p-5 shadow-sm",
                vec![
                    PreviewNode::element("h3", "font-semibold text-gray-900", "{label}"),
                    PreviewNode::element("p", "mt-1 text-sm text-gray-500", "{value}"),
                ],
            ),
            vec![
                ListItem::with_value("Designing with constraints", "May 12, 2025"),
                ListItem::with_value("Utility classes at scale", "Apr 28, 2025"),
                ListItem::with_value("Shipping faster pages", "Apr 3, 2025"),
            ],
        ),
        r##"<div className="grid grid-cols-1 gap-6 md:grid-cols-3">
  {posts.map((post) => (
    <article key={post} className="rounded-2xl bg-white p-5 shadow-sm">
      <h3 className="font-semibold text-gray-900">{post}</h3>
      <p className="mt-1 text-sm text-gray-500">May 12, 2025</p>
      <a href="#" className="mt-3 inline-block text-sm text-[#2563EB]">Read more</a>
    </article>
  ))}
</div>"##,
    )
}

fn contact() -> CatalogEntry {
    entry(
        "contact",
        "Contact",
        "Simple message form.",
        PreviewNode::container(
            "form",
            "mx-auto max-w-md space-y-4",
            vec![
                PreviewNode::block("input", "w-full rounded-lg border border-gray-300 px-3 py-2"),
                PreviewNode::block("textarea", "w-full rounded-lg border border-gray-300 px-3 py-2"),
                PreviewNode::element("button", "rounded-lg bg-[#2563EB] px-4 py-2 text-white", "Send message"),
            ],
        ),
        r##"<form className="mx-auto max-w-md space-y-4">
  <div>
    <label htmlFor="name" className="block text-sm font-medium text-gray-700">Name</label>
    <input id="name" type="text" className="mt-1 w-full rounded-lg border border-gray-300 px-3 py-2" />
  </div>
  <div>
    <label htmlFor="message" className="block text-sm font-medium text-gray-700">Message</label>
    <textarea id="message" rows="4" className="mt-1 w-full rounded-lg border border-gray-300 px-3 py-2"></textarea>
  </div>
  <button type="submit" className="rounded-lg bg-[#2563EB] px-4 py-2 text-white">Send message</button>
</form>"##,
    )
}

fn content() -> CatalogEntry {
    entry(
        "content",
        "Content",
        "Prose block with heading.",
        PreviewNode::container(
            "div",
            "mx-auto max-w-2xl space-y-4",
            vec![
                PreviewNode::element("h2", "text-2xl font-semibold text-gray-900", "Why sections beat pages"),
                PreviewNode::element("p", "text-gray-600", "Composable blocks keep layouts consistent without a design system rewrite."),
            ],
        ),
        r##"<>
  <h2 className="text-2xl font-semibold text-gray-900">Why sections beat pages</h2>
  <p className="text-gray-600">Composable blocks keep layouts consistent without a design system rewrite. Start from a section that’s close, then adjust the classes.</p>
  <p className="text-gray-600">Every block here is self-contained, so pasting one into an existing page never drags extra styles along.</p>
</>"##,
    )
}

fn logo_cloud() -> CatalogEntry {
    entry(
        "logo-cloud",
        "Logo Cloud",
        "Row of customer logos.",
        PreviewNode::list(
            "div",
            "flex flex-wrap items-center justify-center gap-8",
            PreviewNode::element("span", "text-lg font-semibold text-gray-400", "{label}"),
            vec![
                ListItem::new("Acme"),
                ListItem::new("Globex"),
                ListItem::new("Umbra"),
                ListItem::new("Initech"),
            ],
        ),
        r##"<div className="flex flex-wrap items-center justify-center gap-8">
  {logos.map((logo) => (
    <span key={logo} className="text-lg font-semibold text-gray-400">{logo}</span>
  ))}
</div>"##,
    )
}

fn banners() -> CatalogEntry {
    entry(
        "banners",
        "Banners",
        "Dismissible announcement strip.",
        PreviewNode::container(
            "div",
            "flex items-center justify-between rounded-lg bg-[#2563EB] px-4 py-2 text-white",
            vec![
                PreviewNode::element("p", "text-sm", "Ocean UI 2.0 is out. See what\u{2019}s new."),
                PreviewNode::element("button", "text-sm font-medium underline", "Dismiss"),
            ],
        ),
        r##"<div className="flex items-center justify-between rounded-lg bg-[#2563EB] px-4 py-2 text-white">
  {/* Shown until dismissed */}
  <p className="text-sm">Ocean UI 2.0 is out. See what’s new.</p>
  <button onClick={dismiss} className="text-sm font-medium underline">Dismiss</button>
</div>"##,
    )
}

fn not_found() -> CatalogEntry {
    entry(
        "404",
        "404 Page",
        "Centered not-found message.",
        PreviewNode::container(
            "div",
            "mx-auto max-w-md text-center",
            vec![
                PreviewNode::element("p", "text-6xl font-bold text-gray-300", "404"),
                PreviewNode::element("h2", "mt-2 text-xl font-semibold text-gray-900", "Page not found"),
                PreviewNode::element("p", "mt-1 text-gray-600", "The page you are looking for does not exist."),
            ],
        ),
        r##"<div className="mx-auto max-w-md text-center">
  <p className="text-6xl font-bold text-gray-300">404</p>
  <h2 className="mt-2 text-xl font-semibold text-gray-900">Page not found</h2>
  <p className="mt-1 text-gray-600">The page you are looking for does not exist.</p>
  <a href="#" className="mt-6 inline-block rounded-lg bg-[#2563EB] px-4 py-2 text-white">Back home</a>
</div>"##,
    )
}

fn landing() -> CatalogEntry {
    entry(
        "landing",
        "Landing",
        "Split hero with visual placeholder.",
        PreviewNode::container(
            "div",
            "grid grid-cols-1 items-center gap-8 md:grid-cols-2",
            vec![
                PreviewNode::container(
                    "div",
                    "",
                    vec![
                        PreviewNode::element("h1", "text-3xl font-bold text-gray-900", "Your product, front and center"),
                        PreviewNode::element("p", "mt-3 text-gray-600", "A landing layout that pairs copy with a visual."),
                    ],
                ),
                PreviewNode::block("div", "h-48 rounded-2xl bg-gray-200"),
            ],
        ),
        r##"function Landing() {
  return (
    <div className="grid grid-cols-1 items-center gap-8 md:grid-cols-2">
      <div>
        <h1 className="text-3xl font-bold text-gray-900">Your product, front and center</h1>
        <p className="mt-3 text-gray-600">A landing layout that pairs copy with a visual.</p>
        <a href="#" className="mt-6 inline-block rounded-lg bg-[#2563EB] px-4 py-2 text-white">Try it free</a>
      </div>
      <div className="h-48 rounded-2xl bg-gray-200" />
    </div>
  );
}"##,
    )
}

fn about() -> CatalogEntry {
    entry(
        "about",
        "About",
        "Mission statement block.",
        PreviewNode::container(
            "div",
            "mx-auto max-w-2xl text-center",
            vec![
                PreviewNode::element("h2", "text-2xl font-semibold text-gray-900", "About Ocean UI"),
                PreviewNode::element("p", "mt-3 text-gray-600", "We build copy-ready sections so teams spend their time on products, not boilerplate."),
            ],
        ),
        r##"export default function About() {
  return (
    <div className="mx-auto max-w-2xl text-center">
      <h2 className="text-2xl font-semibold text-gray-900">About Ocean UI</h2>
      <p className="mt-3 text-gray-600">We build copy-ready sections so teams spend their time on products, not boilerplate.</p>
    </div>
  );
}"##,
    )
}
