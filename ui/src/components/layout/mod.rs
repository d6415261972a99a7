mod admin_layout;
mod footer;
mod header;
mod site_layout;

pub use admin_layout::AdminLayout;
pub use footer::Footer;
pub use header::Header;
pub use site_layout::SiteLayout;
