//! Everything the landing page says about the store: sections, products,
//! testimonials, store details and the enquiry form's options.

pub const BRAND: &str = "JS IMMITATION";
pub const STORE_NAME: &str = "JS Immitation Jewellery";
pub const STORE_PHONE: &str = "+91 7568387383";
pub const STORE_EMAIL: &str = "jsimmitationjewellery@gmail.com";
pub const FOUNDED: u16 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Collections,
    Featured,
    Custom,
    Testimonials,
    Gallery,
    Quality,
    Visit,
    Contact,
}

impl Section {
    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Collections => "collections",
            Section::Featured => "featured",
            Section::Custom => "custom",
            Section::Testimonials => "testimonials",
            Section::Gallery => "gallery",
            Section::Quality => "quality",
            Section::Visit => "visit",
            Section::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: Section,
}

pub const PRIMARY_NAV: [NavLink; 6] = [
    NavLink { label: "Home", section: Section::Home },
    NavLink { label: "About", section: Section::About },
    NavLink { label: "Collections", section: Section::Collections },
    NavLink { label: "Custom", section: Section::Custom },
    NavLink { label: "Gallery", section: Section::Gallery },
    NavLink { label: "Contact", section: Section::Contact },
];

pub const FOOTER_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", section: Section::Home },
    NavLink { label: "About", section: Section::About },
    NavLink { label: "Collections", section: Section::Collections },
    NavLink { label: "Contact", section: Section::Contact },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { value: "24+", label: "Years Experience" },
    Stat { value: "50K+", label: "Happy Clients" },
    Stat { value: "100K+", label: "Designs Delivered" },
];

pub const STORY: [&str; 2] = [
    "For over two decades, we have been crafting exquisite jewellery that tells your unique story. Each piece is meticulously designed and handcrafted by our master artisans, ensuring unparalleled quality and timeless beauty.",
    "Our commitment to excellence, ethical sourcing, and customer satisfaction has made us a trusted name in luxury jewellery.",
];

pub struct Collection {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const COLLECTIONS: [Collection; 5] = [
    Collection { image: "/assets/image4.jpg", title: "Rings", description: "Elegant rings for every occasion" },
    Collection { image: "/assets/image5.jpg", title: "Necklaces", description: "Statement pieces that captivate" },
    Collection { image: "/assets/image6.jpg", title: "Earrings", description: "Timeless elegance for your ears" },
    Collection { image: "/assets/image7.jpg", title: "Bridal Jewellery", description: "Make your special day unforgettable" },
    Collection { image: "/assets/image8.jpg", title: "Daily Wear", description: "Sophisticated simplicity for everyday" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Bestseller,
    Trending,
    New,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Bestseller => "Bestseller",
            Badge::Trending => "Trending",
            Badge::New => "New",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Badge::Bestseller => "badge-bestseller",
            Badge::Trending => "badge-trending",
            Badge::New => "badge-new",
        }
    }
}

pub struct Product {
    pub image: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub badge: Badge,
}

pub const FEATURED_PRODUCTS: [Product; 6] = [
    Product { image: "/assets/image9.jpg", name: "Diamond Solitaire Ring", price: "₹85,000", badge: Badge::Bestseller },
    Product { image: "/assets/image10.jpg", name: "Pearl Necklace Set", price: "₹65,000", badge: Badge::Trending },
    Product { image: "/assets/image11.jpg", name: "Gold Chandelier Earrings", price: "₹45,000", badge: Badge::New },
    Product { image: "/assets/image12.jpg", name: "Bridal Choker Set", price: "₹1,25,000", badge: Badge::Bestseller },
    Product { image: "/assets/image13.jpg", name: "Emerald Pendant", price: "₹55,000", badge: Badge::Trending },
    Product { image: "/assets/image14.jpg", name: "Ruby Tennis Bracelet", price: "₹95,000", badge: Badge::New },
];

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CUSTOM_STEPS: [Step; 4] = [
    Step { number: 1, title: "Consultation", description: "Share your vision with our designers" },
    Step { number: 2, title: "Design", description: "We create detailed sketches and 3D models" },
    Step { number: 3, title: "Crafting", description: "Our artisans bring your design to life" },
    Step { number: 4, title: "Delivery", description: "Receive your custom masterpiece" },
];

pub struct Testimonial {
    pub image: &'static str,
    pub name: &'static str,
    pub review: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        image: "/assets/priya.png",
        name: "Priya Sharma",
        review: "Absolutely stunning craftsmanship! My custom engagement ring exceeded all expectations. The attention to detail is remarkable.",
        rating: 5,
    },
    Testimonial {
        image: "/assets/rahul.png",
        name: "Rahul Mehta",
        review: "Exceptional quality and service. The bridal set we purchased is breathtaking. Highly recommend JS Immitation Jewellery!",
        rating: 5,
    },
    Testimonial {
        image: "/assets/ananya.png",
        name: "Ananya Singh",
        review: "The team helped me design the perfect necklace for my wedding. Professional, creative, and delivered on time!",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSpan {
    Single,
    Wide,
    Large,
}

impl TileSpan {
    pub fn class(self) -> &'static str {
        match self {
            TileSpan::Single => "tile",
            TileSpan::Wide => "tile tile-wide",
            TileSpan::Large => "tile tile-large",
        }
    }
}

pub struct GalleryTile {
    pub image: &'static str,
    pub span: TileSpan,
}

pub const GALLERY: [GalleryTile; 7] = [
    GalleryTile { image: "/assets/image18.jpg", span: TileSpan::Large },
    GalleryTile { image: "/assets/image19.jpg", span: TileSpan::Single },
    GalleryTile { image: "/assets/image20.jpg", span: TileSpan::Single },
    GalleryTile { image: "/assets/image21.jpg", span: TileSpan::Single },
    GalleryTile { image: "/assets/image22.jpg", span: TileSpan::Single },
    GalleryTile { image: "/assets/image23.jpg", span: TileSpan::Wide },
    GalleryTile { image: "/assets/image24.jpg", span: TileSpan::Wide },
];

pub struct Promise {
    pub title: &'static str,
    pub description: &'static str,
}

pub const QUALITY_PROMISES: [Promise; 4] = [
    Promise { title: "Hallmark Certified", description: "All gold jewellery is BIS hallmarked for purity and quality assurance." },
    Promise { title: "Diamond Certification", description: "Every diamond comes with IGI/GIA certification for authenticity." },
    Promise { title: "Quality Testing", description: "Rigorous quality checks ensure perfection in every piece." },
    Promise { title: "Return Policy", description: "30-day easy return and lifetime exchange guarantee." },
];

/// SVG path data for the 24x24 outline icons.
pub mod icons {
    pub const PIN: &str = "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z M15 11a3 3 0 11-6 0 3 3 0 016 0z";
    pub const PHONE: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
    pub const MAIL: &str = "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";
    pub const CLOCK: &str = "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z";
    pub const BUILDING: &str = "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4";
    pub const CHECK: &str = "M5 13l4 4L19 7";
    pub const STAR: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";
    pub const MENU: &str = "M4 6h16M4 12h16M4 18h16";
    pub const CLOSE: &str = "M6 18L18 6M6 6l12 12";
    pub const FACEBOOK: &str = "M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z";
    pub const INSTAGRAM: &str = "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zm0-2.163c-3.259 0-3.667.014-4.947.072-4.358.2-6.78 2.618-6.98 6.98-.059 1.281-.073 1.689-.073 4.948 0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98 1.281.058 1.689.072 4.948.072 3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98-1.281-.059-1.69-.073-4.949-.073zm0 5.838c-3.403 0-6.162 2.759-6.162 6.162s2.759 6.163 6.162 6.163 6.162-2.759 6.162-6.163c0-3.403-2.759-6.162-6.162-6.162zm0 10.162c-2.209 0-4-1.79-4-4 0-2.209 1.791-4 4-4s4 1.791 4 4c0 2.21-1.791 4-4 4zm6.406-11.845c-.796 0-1.441.645-1.441 1.44s.645 1.44 1.441 1.44c.795 0 1.439-.645 1.439-1.44s-.644-1.44-1.439-1.44z";
}

pub struct InfoItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub extra: Option<&'static str>,
}

pub const STORE_INFO: [InfoItem; 4] = [
    InfoItem { icon: icons::PIN, title: "Address", content: "Lolo ki Beri, Dhorimana Barmer, Rajasthan, 344704", extra: None },
    InfoItem { icon: icons::PHONE, title: "Contact", content: STORE_PHONE, extra: None },
    InfoItem {
        icon: icons::CLOCK,
        title: "Opening Hours",
        content: "Mon - Sat: 10:00 AM - 8:00 PM",
        extra: Some("Sunday: 11:00 AM - 6:00 PM"),
    },
    InfoItem { icon: icons::BUILDING, title: "City", content: "Barmer, Rajasthan", extra: None },
];

pub const CONTACT_DETAILS: [InfoItem; 5] = [
    InfoItem { icon: icons::PIN, title: "Address", content: "Lolo ki beri, Dhorimana", extra: Some("Barmer, Rajasthan, 344704") },
    InfoItem { icon: icons::PHONE, title: "Phone", content: STORE_PHONE, extra: None },
    InfoItem { icon: icons::MAIL, title: "Email", content: STORE_EMAIL, extra: None },
    InfoItem { icon: icons::BUILDING, title: "City", content: "Barmer, Rajasthan", extra: None },
    InfoItem {
        icon: icons::CLOCK,
        title: "Working Hours",
        content: "Monday - Saturday: 10:00 AM - 8:00 PM",
        extra: Some("Sunday: 11:00 AM - 6:00 PM"),
    },
];

pub const FOOTER_CONTACT: [&str; 4] = [
    "Lolo ki beri, Dhorimana",
    "Barmer, Rajasthan",
    STORE_PHONE,
    STORE_EMAIL,
];

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

// No profile URLs yet, the icons link back to the page.
pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink { name: "Facebook", href: "#", icon: icons::FACEBOOK },
    SocialLink { name: "Instagram", href: "#", icon: icons::INSTAGRAM },
];

pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const JEWELLERY_TYPES: [SelectOption; 5] = [
    SelectOption { value: "Ring", label: "Ring" },
    SelectOption { value: "Necklace", label: "Necklace" },
    SelectOption { value: "Bridal", label: "Bridal" },
    SelectOption { value: "Custom", label: "Custom" },
    SelectOption { value: "Other", label: "Other" },
];

pub const BUDGET_RANGES: [SelectOption; 4] = [
    SelectOption { value: "10k-30k", label: "₹10,000 - ₹30,000" },
    SelectOption { value: "30k-70k", label: "₹30,000 - ₹70,000" },
    SelectOption { value: "70k-1L", label: "₹70,000 - ₹1,00,000" },
    SelectOption { value: "1L+", label: "₹1,00,000+" },
];

pub const CREDIT_NAME: &str = "MG Tech Studio";
pub const CREDIT_URL: &str = "https://hightechmg.in/";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const PAGE_ORDER: [Section; 10] = [
        Section::Home,
        Section::About,
        Section::Collections,
        Section::Featured,
        Section::Custom,
        Section::Testimonials,
        Section::Gallery,
        Section::Quality,
        Section::Visit,
        Section::Contact,
    ];

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = PAGE_ORDER.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), PAGE_ORDER.len());
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn nav_links_cover_the_main_sections_in_page_order() {
        let position = |section: Section| PAGE_ORDER.iter().position(|s| *s == section).unwrap();
        let order: Vec<_> = PRIMARY_NAV.iter().map(|link| position(link.section)).collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
        assert_eq!(PRIMARY_NAV[0].section, Section::Home);
        assert_eq!(PRIMARY_NAV[5].section, Section::Contact);
    }

    #[test]
    fn footer_links_are_a_subset_of_the_nav() {
        for link in FOOTER_LINKS {
            assert!(PRIMARY_NAV.contains(&link), "{} missing from nav", link.label);
        }
    }

    #[test]
    fn option_values_are_unique_and_non_empty() {
        for options in [&JEWELLERY_TYPES[..], &BUDGET_RANGES[..]] {
            let values: HashSet<_> = options.iter().map(|o| o.value).collect();
            assert_eq!(values.len(), options.len());
            assert!(values.iter().all(|v| !v.is_empty()));
        }
    }

    #[test]
    fn testimonials_are_rated_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
