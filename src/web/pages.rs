//! Server-rendered HTML pages built with `maud`, which escapes every
//! interpolated value.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::models::{CategoryFilter, POPULAR_CATEGORIES, VendorListing};
use crate::web::view::ListingView;

const SITE_NAME: &str = "Wedding Vendors";

const LOCATIONS: [&str; 6] = [
    "New Jersey",
    "New York",
    "Pennsylvania",
    "Virginia",
    "Massachusetts",
    "Ontario",
];

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Verified listings", "Cleaner results, fewer scams, better leads."),
    ("Fast shortlists", "Save, compare, and message vendors easily."),
    (
        "Built for Punjabi weddings",
        "Categories and needs that actually match your events.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    ("1) Search", "Filter by category, city, and budget."),
    ("2) Shortlist", "Save vendors and compare packages."),
    ("3) Book", "Message directly and lock the date."),
];

const SAMPLE_VENDORS: [(&str, &str, &str); 3] = [
    ("Royal Beats DJ", "Edison, NJ", "DJ / MC"),
    ("Virk Decor Co.", "Jersey City, NJ", "Decor"),
    ("Lens & Laavan", "Queens, NY", "Photo / Video"),
];

pub fn vendors_href(filter: &CategoryFilter) -> String {
    match filter.category() {
        Some(category) => format!("/vendors?category={}", urlencoding::encode(category)),
        None => "/vendors".to_string(),
    }
}

/// Landing page with the hero search form and category shortcuts.
pub fn landing_page(year: i32) -> String {
    let body = html! {
        header.bar {
            div.brand { (SITE_NAME) }
            nav {
                a href="#categories" { "Categories" }
                a href="#how" { "How it works" }
                a href="/vendors" { "Vendors" }
            }
        }

        section.hero {
            h1 { "Find trusted Punjabi wedding vendors, fast." }
            p.muted {
                "Search DJs, decor, venues, photo/video, makeup, dhol, and more. "
                "Built for the East Coast, expanding across the US & Canada."
            }
            form.search method="get" action="/vendors" {
                label {
                    "Search"
                    input name="category" list="category-list"
                        placeholder="Try: DJ / MC, Decor, Photo / Video";
                }
                label {
                    "Location"
                    select name="location" {
                        @for location in LOCATIONS {
                            option value=(location) { (location) }
                        }
                    }
                }
                button type="submit" { "Search vendors" }
            }
            datalist #category-list {
                @for category in POPULAR_CATEGORIES {
                    option value=(category);
                }
            }
            div.grid.highlights {
                @for (title, blurb) in HIGHLIGHTS {
                    div.card {
                        div.name { (title) }
                        div.muted { (blurb) }
                    }
                }
            }
        }

        section #categories {
            h2 { "Popular categories" }
            div.grid {
                @for category in POPULAR_CATEGORIES {
                    a.tile href=(vendors_href(&CategoryFilter::Only(category.to_string()))) {
                        (category)
                    }
                }
            }
        }

        section #how {
            h2 { "How it works" }
            ol.grid {
                @for (step, detail) in STEPS {
                    li.card {
                        div.name { (step) }
                        div.muted { (detail) }
                    }
                }
            }
        }

        section #vendors {
            h2 { "Sample vendors" }
            div.grid {
                @for (name, city, tag) in SAMPLE_VENDORS {
                    div.card {
                        div.name { (name) }
                        div.muted { (city) }
                        span.chip { (tag) }
                    }
                }
            }
            p { a href="/vendors" { "Browse all vendors" } }
        }
    };

    layout(SITE_NAME, body, year).into_string()
}

/// Listing page for a category selector in any view state.
pub fn vendors_page(filter: &CategoryFilter, view: &ListingView, year: i32) -> String {
    let heading = match filter.category() {
        Some(category) => format!("{category} vendors"),
        None => "Vendors".to_string(),
    };

    let body = html! {
        header.bar {
            h1 { (heading) }
            a href="/" { "Back home" }
        }
        nav.filters { (filter_chips(filter)) }
        @match view {
            ListingView::Loading => p.status { "Loading vendors…" },
            ListingView::Failed(message) => p.status.error { "Error: " (message) },
            ListingView::Loaded(listings) if listings.is_empty() => {
                p.status.empty {
                    @match filter.category() {
                        Some(category) => { "No vendors found in " (category) "." },
                        None => "No vendors found.",
                    }
                }
            },
            ListingView::Loaded(_) => {},
        }
        div.grid.listings {
            @for listing in view.listings() {
                (vendor_card(listing))
            }
        }
    };

    layout(&format!("{heading} · {SITE_NAME}"), body, year).into_string()
}

fn filter_chips(active: &CategoryFilter) -> Markup {
    let filters = std::iter::once(CategoryFilter::All).chain(
        POPULAR_CATEGORIES
            .iter()
            .map(|c| CategoryFilter::Only(c.to_string())),
    );

    html! {
        @for filter in filters {
            a class=(if &filter == active { "chip active" } else { "chip" })
                href=(vendors_href(&filter)) {
                (filter.category().unwrap_or("All"))
            }
        }
    }
}

fn vendor_card(listing: &VendorListing) -> Markup {
    html! {
        article.card.vendor data-id=(listing.id) {
            div.head {
                h2.name { (listing.business_name) }
                @if listing.is_verified {
                    span.badge { "Verified" }
                }
            }
            p.muted { (listing.location_label()) }
            div.chips {
                @for category in &listing.categories {
                    span.chip { (category) }
                }
            }
            p class="price" {
                @if listing.starting_price.is_some() {
                    "Starting at "
                }
                (listing.price_label())
            }
        }
    }
}

fn layout(title: &str, body: Markup, year: i32) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                main { (body) }
                footer { "© " (year) " " (SITE_NAME) }
            }
        }
    }
}

const CSS: &str = r#"
        body { font-family: system-ui, sans-serif; color: #18181b; margin: 0; }
        main, footer { max-width: 960px; margin: 0 auto; padding: 24px; }
        footer { border-top: 1px solid #e4e4e7; color: #52525b; font-size: 14px; }
        a { color: inherit; }
        .bar { display: flex; align-items: center; justify-content: space-between; }
        .bar nav a { margin-left: 16px; font-size: 14px; color: #52525b; }
        .brand { font-weight: 600; }
        .hero { background: #fafafa; border: 1px solid #e4e4e7; border-radius: 24px; padding: 40px; margin: 24px 0; }
        .search { display: grid; grid-template-columns: 2fr 1fr auto; gap: 12px; align-items: end; }
        .search input, .search select { display: block; width: 100%; padding: 12px; border: 1px solid #d4d4d8; border-radius: 12px; }
        .search button { padding: 12px 20px; border-radius: 12px; background: #18181b; color: #fff; border: 0; }
        .grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; padding: 0; list-style: none; }
        .highlights { margin-top: 32px; }
        .tile, .card { display: block; border: 1px solid #e4e4e7; border-radius: 16px; padding: 20px; background: #fff; text-decoration: none; }
        .name { font-size: 14px; font-weight: 500; margin: 0; }
        .muted { color: #52525b; font-size: 14px; }
        .head { display: flex; justify-content: space-between; align-items: flex-start; }
        .badge { background: #000; color: #fff; border-radius: 999px; padding: 2px 8px; font-size: 12px; }
        .chips { display: flex; flex-wrap: wrap; gap: 8px; }
        .chip { display: inline-block; background: #f4f4f5; border-radius: 999px; padding: 4px 8px; font-size: 12px; text-decoration: none; margin: 2px; }
        .chip.active { background: #18181b; color: #fff; }
        .price { font-size: 14px; }
        .status { font-size: 14px; }
        .error { color: #dc2626; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: Option<f64>) -> VendorListing {
        VendorListing {
            id: "v1".to_string(),
            business_name: "Lens & Laavan".to_string(),
            categories: vec!["Photo / Video".to_string()],
            city: Some("Queens".to_string()),
            state_province: Some("NY".to_string()),
            country: Some("USA".to_string()),
            starting_price: price,
            currency: Some("USD".to_string()),
            is_verified: true,
        }
    }

    #[test]
    fn vendors_href_encodes_category() {
        assert_eq!(vendors_href(&CategoryFilter::All), "/vendors");
        assert_eq!(
            vendors_href(&CategoryFilter::parse(Some("DJ / MC"))),
            "/vendors?category=DJ%20%2F%20MC"
        );
    }

    #[test]
    fn landing_links_every_popular_category() {
        let html = landing_page(2026);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("© 2026 Wedding Vendors"));
        assert!(html.contains(r#"action="/vendors""#));
        for category in POPULAR_CATEGORIES {
            assert!(html.contains(category));
        }
        assert!(html.contains(r#"href="/vendors?category=Decor""#));
    }

    #[test]
    fn landing_hero_lists_value_tiles() {
        let html = landing_page(2026);

        for (title, blurb) in HIGHLIGHTS {
            assert!(html.contains(title));
            assert!(html.contains(blurb));
        }
        assert!(html.contains("US &amp; Canada"));
    }

    #[test]
    fn card_shows_price_badge_and_location() {
        let html = vendor_card(&listing(Some(1800.0))).into_string();

        assert!(html.contains("Lens &amp; Laavan"));
        assert!(html.contains("Verified"));
        assert!(html.contains("Queens, NY · USA"));
        assert!(html.contains("Starting at USD 1800"));
    }

    #[test]
    fn card_without_price_says_not_listed() {
        let html = vendor_card(&listing(None)).into_string();

        assert!(html.contains(r#"<p class="price">Price not listed</p>"#));
        assert!(!html.contains("Starting at"));
    }

    #[test]
    fn backend_markup_is_escaped() {
        let mut row = listing(None);
        row.business_name = r#"<script>alert("x")</script>"#.to_string();
        row.categories = vec!["<b>Decor</b>".to_string()];

        let html = vendor_card(&row).into_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;Decor&lt;/b&gt;"));
    }

    #[test]
    fn category_from_query_string_is_escaped() {
        let filter = CategoryFilter::parse(Some("<img src=x>"));
        let html = vendors_page(&filter, &ListingView::Loaded(Vec::new()), 2026);

        assert!(!html.contains("<img"));
        assert!(html.contains("No vendors found in &lt;img src=x&gt;."));
    }

    #[test]
    fn failed_view_renders_error_without_cards() {
        let view = ListingView::Failed("Backend returned 500 Internal Server Error".to_string());
        let html = vendors_page(&CategoryFilter::All, &view, 2026);

        assert!(html.contains("Error: Backend returned 500"));
        assert!(!html.contains(r#"class="card vendor""#));
    }

    #[test]
    fn empty_view_names_the_category() {
        let view = ListingView::Loaded(Vec::new());
        let html = vendors_page(&CategoryFilter::parse(Some("Venue")), &view, 2026);

        assert!(html.contains("No vendors found in Venue."));
        assert!(html.contains(r#"class="chip active" href="/vendors?category=Venue""#));
    }

    #[test]
    fn loading_view_shows_placeholder() {
        let html = vendors_page(&CategoryFilter::All, &ListingView::loading(), 2026);
        assert!(html.contains("Loading vendors…"));
    }
}
