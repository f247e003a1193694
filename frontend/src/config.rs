/// Contact details and hand-off targets for the site.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub chat_domain: &'static str,
    /// Digits only, no leading `+`.
    pub chat_recipient: &'static str,
    pub bot_domain: &'static str,
    /// Without the leading `@`.
    pub bot_handle: &'static str,
    pub email_address: &'static str,
    pub email_subject: &'static str,
    pub phone_href: &'static str,
    pub phone_display: &'static str,
    pub location: &'static str,
    pub location_href: &'static str,
}

const SITE: SiteConfig = SiteConfig {
    brand: "WebStudio",
    chat_domain: "wa.me",
    chat_recipient: "251929501350",
    bot_domain: "t.me",
    bot_handle: "haphi_luxury",
    email_address: "haftu.g.mu24@gmail.com",
    email_subject: "New Website Order",
    phone_href: "tel:+251912169209",
    phone_display: "+251-9-1216-9209 | +251-9-2950-1350",
    location: "Addis Ababa, Ethiopia",
    location_href: "https://maps.google.com/?q=Addis+Ababa,Ethiopia",
};

impl SiteConfig {
    pub fn get() -> &'static SiteConfig {
        &SITE
    }

    /// Direct chat link without a prefilled message.
    pub fn chat_url(&self) -> String {
        format!("https://{}/{}", self.chat_domain, self.chat_recipient)
    }

    pub fn bot_url(&self) -> String {
        format!("https://{}/{}", self.bot_domain, self.bot_handle)
    }

    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email_address)
    }
}

/// Base path for static assets, fixed at build time.
pub fn get_asset_base() -> &'static str {
    option_env!("WEBSTUDIO_ASSET_BASE").unwrap_or("")
}

pub fn asset_url(path: &str) -> String {
    let base = get_asset_base().trim_end_matches('/');
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links() {
        let site = SiteConfig::get();
        assert_eq!(site.chat_url(), "https://wa.me/251929501350");
        assert_eq!(site.bot_url(), "https://t.me/haphi_luxury");
        assert_eq!(site.mailto_url(), "mailto:haftu.g.mu24@gmail.com");
    }

    #[test]
    fn absolute_asset_urls_pass_through() {
        let url = "https://images.pexels.com/photos/1.jpeg";
        assert_eq!(asset_url(url), url);
    }

    #[test]
    fn relative_assets_join_the_base() {
        let joined = asset_url("/img/logo.svg");
        assert!(joined.ends_with("/img/logo.svg"));
        assert!(!joined.contains("//img"));
    }
}
