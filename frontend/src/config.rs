use log::Level;

/// Destination for enquiries, E.164 without the leading plus.
pub const WHATSAPP_NUMBER: &str = "917568387383";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Height reserved for the fixed navigation bar when scrolling to a section.
pub const NAVBAR_OFFSET_PX: f64 = 90.0;
/// Lets the mobile menu finish closing before the viewport moves.
pub const SCROLL_DELAY_MS: u32 = 250;
/// The bar switches to its compact look once the page is scrolled past this.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

pub const REVEAL_ROOT_MARGIN: &str = "-100px";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d14445.500650928632!2d71.385493!3d25.1568072!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3944f7f5746e1ae1%3A0xd903055abe93ee2a!2sLolo%20Ki%20Beri%2C%20Sauwon%20Ki%20Beri%2C%20Rajasthan%20344704!5e0!3m2!1sen!2sin!4v1770668288540!5m2!1sen!2sin";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
